use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::FieldExtractor;
use crate::config::MAX_GENDER_CONTEXT_WINDOW;
use crate::ingest::strategy::Cascade;
use crate::ingest::text::DocumentText;
use crate::record::{Field, Gender};

const TOKEN: &str = r"(male|female|other|m|f)";

static RE_LABELED: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:gender|sex|male\s*/\s*female)\s*[:\-]\s*{TOKEN}\b")).ok()
});

static RE_BARE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)\b{TOKEN}\b")).ok());

fn context_regex(window: usize) -> Option<Regex> {
    Regex::new(&format!(
        r"(?i)\b(?:personal\s+info(?:rmation)?|profile|basic\s+info(?:rmation)?)\b[\s\S]{{0,{window}}}?\b{TOKEN}\b"
    ))
    .map_err(|e| tracing::warn!(window, error = %e, "profile-context gender pattern rejected"))
    .ok()
}

/// A lone `M`/`F` glued to a period or similar is an abbreviation
/// (`M.Tech`, `F&B`), not a gender.
fn is_abbreviation(text: &str, caps: &Captures<'_>) -> bool {
    let Some(token) = caps.get(1) else {
        return true;
    };
    token.len() == 1 && matches!(text[token.end()..].chars().next(), Some('.' | '&' | '/' | '\'' | '-'))
}

fn first_token(re: Option<&Regex>, text: &str) -> Option<Gender> {
    re?.captures_iter(text)
        .filter(|caps| !is_abbreviation(text, caps))
        .find_map(|caps| Gender::from_token(caps.get(1)?.as_str()))
}

#[derive(Debug, Clone)]
pub struct GenderExtractor {
    context: Option<Regex>,
}

impl GenderExtractor {
    /// Windows above [`MAX_GENDER_CONTEXT_WINDOW`] are clamped to it.
    #[must_use]
    pub fn new(context_window: usize) -> Self {
        let window = if context_window > MAX_GENDER_CONTEXT_WINDOW {
            tracing::warn!(
                requested = context_window,
                max = MAX_GENDER_CONTEXT_WINDOW,
                "gender context window clamped"
            );
            MAX_GENDER_CONTEXT_WINDOW
        } else {
            context_window
        };

        Self {
            context: context_regex(window),
        }
    }
}

impl Default for GenderExtractor {
    fn default() -> Self {
        Self::new(120)
    }
}

impl FieldExtractor for GenderExtractor {
    type Output = Gender;

    fn field(&self) -> Field {
        Field::Gender
    }

    fn extract(&self, document: &DocumentText) -> Option<Gender> {
        Cascade::<str, Gender>::new(self.field())
            .stage("labeled", |t| first_token(RE_LABELED.as_ref(), t))
            .stage("profile_context", |t| first_token(self.context.as_ref(), t))
            .stage("bare_token", |t| first_token(RE_BARE.as_ref(), t))
            .run(document.as_str())
    }
}
