use super::keywords::is_noise_word;

/// Person-name recognition backend used as the name extractor's third
/// fallback. Implementations return candidate person names in text order.
pub trait PersonNameRecognizer: Send + Sync {
    fn name(&self) -> &'static str;

    fn extract_person_names(&self, text: &str) -> Vec<String>;
}

/// Recognizer that never finds anything; disables the NER stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRecognizer;

impl PersonNameRecognizer for NoRecognizer {
    fn name(&self) -> &'static str {
        "none"
    }

    fn extract_person_names(&self, _text: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Rule-based recognizer: runs of 2 to 4 consecutive capitalized words that
/// are not résumé noise words.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapitalizedRunRecognizer;

impl CapitalizedRunRecognizer {
    const MIN_RUN: usize = 2;
    const MAX_RUN: usize = 4;

    fn is_capitalized(word: &str) -> bool {
        let mut chars = word.chars();
        chars.next().is_some_and(char::is_uppercase)
            && chars.all(|c| c.is_alphabetic() || c == '.')
            && !is_noise_word(word)
    }

    fn flush(run: &mut Vec<&str>, out: &mut Vec<String>) {
        if (Self::MIN_RUN..=Self::MAX_RUN).contains(&run.len()) {
            out.push(run.join(" "));
        }
        run.clear();
    }
}

impl PersonNameRecognizer for CapitalizedRunRecognizer {
    fn name(&self) -> &'static str {
        "capitalized_run"
    }

    fn extract_person_names(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut run = Vec::new();

        for raw in text.split_whitespace() {
            let word = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '.');
            let ends_clause = raw.ends_with([',', ';', ':', '|']);

            if Self::is_capitalized(word) {
                run.push(word);
                if ends_clause {
                    Self::flush(&mut run, &mut out);
                }
            } else {
                Self::flush(&mut run, &mut out);
            }
        }
        Self::flush(&mut run, &mut out);

        out
    }
}
