use crate::models::{Fact, QuizQuestion};
use rand::seq::{index, SliceRandom};
use rand::Rng;

pub const DEFAULT_QUESTIONS: usize = 3;
pub const MAX_QUESTIONS: usize = 20;
const DISTRACTORS: usize = 3;

/// Picks up to `count` distinct facts and asks which title belongs to each.
/// Distractors are the first other facts in source order.
pub fn generate_quiz<R: Rng>(facts: &[Fact], count: usize, rng: &mut R) -> Vec<QuizQuestion> {
    let amount = count.min(facts.len());
    index::sample(rng, facts.len(), amount)
        .into_iter()
        .map(|picked| {
            let fact = &facts[picked];
            let mut options = vec![fact.title.clone()];
            options.extend(
                facts
                    .iter()
                    .filter(|other| other.id != fact.id)
                    .take(DISTRACTORS)
                    .map(|other| other.title.clone()),
            );
            options.shuffle(rng);

            QuizQuestion {
                q: format!("Which of these is true about: {}?", first_word(&fact.title)),
                correct: fact.title.clone(),
                options,
            }
        })
        .collect()
}

fn first_word(title: &str) -> &str {
    title.split(' ').next().unwrap_or(title)
}
