use crate::daily::StreakState;
use crate::models::Fact;

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn fact_href(fact: &Fact) -> String {
    format!("/fact/{}", urlencoding::encode(&fact.id))
}

fn image_tag(fact: &Fact, class: &str) -> String {
    match &fact.image {
        Some(url) => format!(
            r#"<img src="{}" class="{class}" alt="{}" />"#,
            escape_html(url),
            escape_html(&fact.title)
        ),
        None => String::new(),
    }
}

fn streak_badge(streak: &StreakState) -> String {
    format!("Streak: {} &#128293;", streak.count)
}

fn page(title: &str, body: &str, script: &str) -> String {
    LAYOUT_HTML
        .replace("{{TITLE}}", &escape_html(title))
        .replace("{{SCRIPT}}", script)
        .replace("{{BODY}}", body)
}

fn recent_card(fact: &Fact) -> String {
    format!(
        r#"<a class="card recent" href="{href}">{image}<h3>{title}</h3><p class="truncate">{text}</p></a>"#,
        href = fact_href(fact),
        image = image_tag(fact, "thumb"),
        title = escape_html(&fact.title),
        text = escape_html(&fact.text),
    )
}

pub fn render_index<'a>(
    daily: Option<&Fact>,
    streak: &StreakState,
    categories: &[&str],
    recent: impl Iterator<Item = &'a Fact>,
) -> String {
    let fact_area = match daily {
        Some(fact) => DAILY_HTML
            .replace("{{IMAGE}}", &image_tag(fact, "hero"))
            .replace("{{TITLE}}", &escape_html(&fact.title))
            .replace("{{TEXT}}", &escape_html(&fact.text))
            .replace("{{HREF}}", &fact_href(fact))
            .replace("{{ID}}", &escape_html(&fact.id)),
        None => r#"<div class="notice">No facts available yet.</div>"#.to_string(),
    };

    let options = std::iter::once("all")
        .chain(categories.iter().copied())
        .map(|category| {
            let category = escape_html(category);
            format!(r#"<option value="{category}">{category}</option>"#)
        })
        .collect::<String>();
    let cards = recent.map(recent_card).collect::<String>();

    let body = INDEX_BODY_HTML
        .replace("{{STREAK}}", &streak_badge(streak))
        .replace("{{FACT_AREA}}", &fact_area)
        .replace("{{OPTIONS}}", &options)
        .replace("{{CARDS}}", &cards);
    page("Today I Learned", &body, INDEX_SCRIPT)
}

pub fn render_fact(fact: &Fact) -> String {
    let body = FACT_BODY_HTML
        .replace("{{IMAGE}}", &image_tag(fact, "hero"))
        .replace("{{CATEGORY}}", &escape_html(&fact.category))
        .replace("{{TITLE}}", &escape_html(&fact.title))
        .replace("{{TEXT}}", &escape_html(&fact.text))
        .replace("{{ID}}", &escape_html(&fact.id));
    page(&fact.title, &body, "")
}

pub fn render_bookmarks(facts: &[&Fact]) -> String {
    let list = if facts.is_empty() {
        r#"<div class="notice">No bookmarks yet.</div>"#.to_string()
    } else {
        facts
            .iter()
            .map(|fact| {
                format!(
                    r#"<div class="card row"><div><h3>{title}</h3><p class="truncate">{text}</p></div><a class="btn small" href="{href}">Open</a></div>"#,
                    title = escape_html(&fact.title),
                    text = escape_html(&fact.text),
                    href = fact_href(fact),
                )
            })
            .collect()
    };
    let body = format!(r#"<h1>Bookmarks</h1><section class="stack">{list}</section>"#);
    page("Bookmarks", &body, "")
}

pub fn render_quiz() -> String {
    page("Quiz", QUIZ_BODY_HTML, QUIZ_SCRIPT)
}

/// Static warning shown on every page when the facts could not be loaded.
pub fn render_load_error(message: &str) -> String {
    let body = format!(
        r#"<div class="notice warning">Cannot load facts. {}</div>"#,
        escape_html(message)
    );
    page("Today I Learned", &body, "")
}

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    nav {
      width: min(960px, 100%);
      margin: 0 auto 20px;
      display: flex;
      gap: 18px;
      align-items: center;
    }

    nav a {
      color: var(--accent-2);
      text-decoration: none;
      font-weight: 600;
    }

    main {
      width: min(960px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    h1, h2 {
      font-family: "Fraunces", "Georgia", serif;
      margin: 0;
    }

    .card {
      background: var(--card);
      border-radius: 22px;
      box-shadow: var(--shadow);
      padding: 22px;
      color: inherit;
      text-decoration: none;
      display: grid;
      gap: 10px;
    }

    .card.row {
      grid-template-columns: 1fr auto;
      align-items: start;
    }

    .hero, .thumb {
      width: 100%;
      border-radius: 16px;
      object-fit: cover;
    }

    .hero {
      max-height: 320px;
    }

    .thumb {
      height: 140px;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
      gap: 18px;
    }

    .stack {
      display: grid;
      gap: 12px;
    }

    .truncate {
      white-space: nowrap;
      overflow: hidden;
      text-overflow: ellipsis;
    }

    .toolbar, .actions {
      display: flex;
      gap: 12px;
      flex-wrap: wrap;
      align-items: center;
    }

    .btn {
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: #fff;
      text-decoration: none;
    }

    .btn.ghost {
      background: transparent;
      color: var(--accent-2);
      box-shadow: inset 0 0 0 2px var(--accent-2);
    }

    .btn.small {
      padding: 6px 12px;
    }

    .badge {
      background: var(--accent-2);
      color: #fff;
      border-radius: 999px;
      padding: 6px 14px;
      font-weight: 600;
    }

    .notice {
      padding: 16px 20px;
      border-radius: 16px;
      background: var(--card);
    }

    .notice.warning {
      background: #fff3cd;
    }

    .option {
      display: block;
      margin: 6px 0;
    }

    #toasts {
      position: fixed;
      top: 18px;
      right: 18px;
      display: grid;
      gap: 8px;
    }

    .toast-msg {
      background: var(--accent-2);
      color: #fff;
      padding: 10px 16px;
      border-radius: 12px;
      box-shadow: var(--shadow);
      transition: opacity 500ms ease;
    }
  </style>
</head>
<body>
  <nav>
    <a href="/">Today</a>
    <a href="/bookmarks">Bookmarks</a>
    <a href="/quiz">Quiz</a>
  </nav>
  <main>
{{BODY}}
  </main>
  <div id="toasts"></div>
  <script>
    const showToast = (message) => {
      const container = document.getElementById('toasts');
      const toast = document.createElement('div');
      toast.className = 'toast-msg';
      toast.textContent = message;
      container.appendChild(toast);
      setTimeout(() => {
        toast.style.opacity = '0';
        setTimeout(() => toast.remove(), 500);
      }, 2500);
    };

    const bookmarkFact = async (id) => {
      const res = await fetch('/api/bookmarks', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ id })
      });
      if (!res.ok) {
        showToast(await res.text());
        return;
      }
      const body = await res.json();
      showToast(body.message);
    };

    const shareFact = (title, text) => {
      if (navigator.share) {
        navigator.share({ title: 'Today I Learned', text: `${title} - ${text}` }).catch(() => {});
      } else {
        showToast('Use share button in your browser');
      }
    };

    document.querySelectorAll('[data-bookmark]').forEach((button) => {
      button.addEventListener('click', () => bookmarkFact(button.dataset.bookmark));
    });
    document.querySelectorAll('[data-share-title]').forEach((button) => {
      button.addEventListener('click', () => shareFact(button.dataset.shareTitle, button.dataset.shareText));
    });
{{SCRIPT}}
  </script>
</body>
</html>
"#;

const DAILY_HTML: &str = r#"<article class="card">
      {{IMAGE}}
      <h2>{{TITLE}}</h2>
      <p>{{TEXT}}</p>
      <div class="actions">
        <a class="btn" href="{{HREF}}">Read More</a>
        <button class="btn ghost" data-bookmark="{{ID}}">Save</button>
        <button class="btn ghost" data-share-title="{{TITLE}}" data-share-text="{{TEXT}}">Share</button>
      </div>
    </article>"#;

const INDEX_BODY_HTML: &str = r#"    <header class="toolbar">
      <h1>Fact of the day</h1>
      <span id="streak" class="badge">{{STREAK}}</span>
    </header>
    <section id="fact-area">{{FACT_AREA}}</section>
    <section class="toolbar">
      <select id="category">{{OPTIONS}}</select>
      <button id="random" class="btn ghost">Random fact</button>
    </section>
    <section id="recent" class="grid">{{CARDS}}</section>"#;

const INDEX_SCRIPT: &str = r#"
    const escapeHtml = (value) => String(value)
      .replace(/&/g, '&amp;')
      .replace(/</g, '&lt;')
      .replace(/>/g, '&gt;')
      .replace(/"/g, '&quot;');

    const renderCards = (facts) => {
      document.getElementById('recent').innerHTML = facts.map((fact) => `
        <a class="card recent" href="/fact/${encodeURIComponent(fact.id)}">
          ${fact.image ? `<img src="${escapeHtml(fact.image)}" class="thumb" alt="${escapeHtml(fact.title)}" />` : ''}
          <h3>${escapeHtml(fact.title)}</h3>
          <p class="truncate">${escapeHtml(fact.text)}</p>
        </a>`).join('');
    };

    document.getElementById('category').addEventListener('change', async (event) => {
      const category = event.target.value;
      const res = await fetch(`/api/facts?category=${encodeURIComponent(category)}`);
      if (!res.ok) {
        showToast(await res.text());
        return;
      }
      const facts = await res.json();
      renderCards(category === 'all' ? facts.reverse() : facts);
    });

    document.getElementById('random').addEventListener('click', async () => {
      const res = await fetch('/api/random');
      if (!res.ok) {
        showToast('No facts available');
        return;
      }
      const fact = await res.json();
      window.location.href = `/fact/${encodeURIComponent(fact.id)}`;
    });
"#;

const FACT_BODY_HTML: &str = r#"    <article id="fact-card" class="card">
      {{IMAGE}}
      <span class="badge">{{CATEGORY}}</span>
      <h1>{{TITLE}}</h1>
      <p>{{TEXT}}</p>
      <div class="actions">
        <button class="btn" data-bookmark="{{ID}}">Bookmark</button>
        <button class="btn ghost" data-share-title="{{TITLE}}" data-share-text="{{TEXT}}">Share</button>
      </div>
    </article>"#;

const QUIZ_BODY_HTML: &str = r#"    <h1>Quick quiz</h1>
    <section id="quiz" class="stack"></section>
    <div class="actions">
      <button id="check" class="btn">Check answers</button>
      <button id="again" class="btn ghost">New quiz</button>
    </div>"#;

const QUIZ_SCRIPT: &str = r#"
    let questions = [];

    const loadQuiz = async () => {
      const res = await fetch('/api/quiz?n=3');
      if (!res.ok) {
        showToast(await res.text());
        return;
      }
      questions = await res.json();
      const area = document.getElementById('quiz');
      area.innerHTML = '';
      questions.forEach((question, index) => {
        const card = document.createElement('div');
        card.className = 'card';
        const prompt = document.createElement('h3');
        prompt.textContent = question.q;
        card.appendChild(prompt);
        question.options.forEach((option) => {
          const label = document.createElement('label');
          label.className = 'option';
          const input = document.createElement('input');
          input.type = 'radio';
          input.name = `q${index}`;
          input.value = option;
          label.appendChild(input);
          label.append(` ${option}`);
          card.appendChild(label);
        });
        area.appendChild(card);
      });
    };

    document.getElementById('check').addEventListener('click', () => {
      const score = questions.filter((question, index) => {
        const picked = document.querySelector(`input[name="q${index}"]:checked`);
        return picked && picked.value === question.correct;
      }).length;
      showToast(`Score: ${score} / ${questions.length}`);
    });

    document.getElementById('again').addEventListener('click', () => {
      loadQuiz().catch((err) => showToast(err.message));
    });

    loadQuiz().catch((err) => showToast(err.message));
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn fact() -> Fact {
        Fact {
            id: "oct opus".to_string(),
            title: "Octopuses have <three> hearts".to_string(),
            text: "Two pump blood to the gills & one to the body.".to_string(),
            category: "nature".to_string(),
            image: None,
        }
    }

    #[test]
    fn index_renders_daily_fact_streak_and_categories() {
        let fact = fact();
        let streak = StreakState {
            last_seen: None,
            count: 4,
        };
        let html = render_index(Some(&fact), &streak, &["nature"], [&fact].into_iter());

        assert!(html.contains("Streak: 4"));
        assert!(html.contains("Octopuses have &lt;three&gt; hearts"));
        assert!(html.contains(r#"<option value="all">all</option>"#));
        assert!(html.contains(r#"<option value="nature">nature</option>"#));
        assert!(html.contains(r#"href="/fact/oct%20opus""#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn index_without_facts_shows_notice() {
        let html = render_index(None, &StreakState::default(), &[], std::iter::empty());
        assert!(html.contains("No facts available yet."));
    }

    #[test]
    fn bookmarks_page_handles_empty_list() {
        assert!(render_bookmarks(&[]).contains("No bookmarks yet."));
        let fact = fact();
        assert!(render_bookmarks(&[&fact]).contains("Open"));
    }

    #[test]
    fn load_error_is_inline_warning() {
        let html = render_load_error("failed to load data/nature.json: missing");
        assert!(html.contains("Cannot load facts."));
        assert!(html.contains("data/nature.json"));
    }

    #[test]
    fn fact_href_percent_encodes_id() {
        let mut fact = fact();
        fact.id = "a/b?c".to_string();
        assert_eq!(fact_href(&fact), "/fact/a%2Fb%3Fc");
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    }
}
