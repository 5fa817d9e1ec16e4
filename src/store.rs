use crate::daily::daily_index;
use crate::errors::FactError;
use crate::models::Fact;
use chrono::NaiveDate;
use rand::Rng;
use std::collections::HashSet;

/// Resource label for errors found across the merged categories.
pub const MERGED_RESOURCE: &str = "all categories";

/// Every loaded fact in source order. Built once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct FactStore {
    facts: Vec<Fact>,
}

impl FactStore {
    pub fn new(facts: Vec<Fact>) -> Result<Self, FactError> {
        let mut seen = HashSet::with_capacity(facts.len());
        for fact in &facts {
            if !seen.insert(fact.id.as_str()) {
                return Err(FactError::load(
                    MERGED_RESOURCE,
                    format!("duplicate fact id `{}` in {}", fact.id, fact.category),
                ));
            }
        }
        Ok(Self { facts })
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    pub fn get(&self, id: &str) -> Option<&Fact> {
        self.facts.iter().find(|fact| fact.id == id)
    }

    pub fn daily(&self, date: NaiveDate) -> Result<(usize, &Fact), FactError> {
        let index = daily_index(date, self.facts.len())?;
        Ok((index, &self.facts[index]))
    }

    pub fn random<R: Rng>(&self, rng: &mut R) -> Result<&Fact, FactError> {
        if self.facts.is_empty() {
            return Err(FactError::EmptyStore);
        }
        Ok(&self.facts[rng.random_range(0..self.facts.len())])
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.facts
            .iter()
            .map(|fact| fact.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// `"all"` selects every fact.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Fact> + 'a {
        self.facts
            .iter()
            .filter(move |fact| category == "all" || fact.category == category)
    }

    /// Newest first, i.e. reverse source order.
    pub fn recent(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter().rev()
    }
}
