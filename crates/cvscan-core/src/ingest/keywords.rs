//! Keyword sets used by the name heuristics. All entries are lowercase.

/// Words that disqualify a line from being a person's name: degrees, job
/// titles, résumé section headings and contact labels.
pub const NOISE_WORDS: &[&str] = &[
    // degrees
    "b.tech", "m.tech", "b.e", "m.e", "b.e.", "m.e.", "mba", "msc", "bsc", "b.sc", "m.sc", "bca",
    "mca", "phd",
    // fields
    "engineering", "technology", "computer", "electronics", "communication", "science",
    // document
    "resume", "curriculum", "vitae", "curriculum vitae", "cv", "biodata",
    // roles
    "student", "intern", "engineer", "developer", "profile", "data", "scientist", "software",
    "manager", "director", "analyst", "consultant", "architect", "lead", "senior", "junior",
    "fresher", "designer", "trainee",
    // sections
    "brief", "summary", "objective", "experience", "education", "skills", "projects",
    "certifications", "achievements", "declaration", "contact", "details", "personal",
    "information", "years", "year",
    // contact labels
    "email", "e-mail", "mail", "phone", "mobile", "address", "linkedin", "github",
    // organisations
    "company", "organization", "inc", "llc", "ltd", "pvt",
];

/// Labels that introduce a name on the same line, longest first so the most
/// specific label is stripped.
pub const NAME_LABELS: &[&str] = &[
    "candidate name",
    "full name",
    "first name",
    "given name",
    "last name",
    "surname",
    "name",
];

#[must_use]
pub fn is_noise_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    NOISE_WORDS.contains(&lower.as_str())
}

/// First name label occurring as whole words in `line`, if any
/// (case-insensitive). `Nameeta` does not contain the label `name`.
#[must_use]
pub fn find_name_label(line: &str) -> Option<&'static str> {
    let lower = line.to_lowercase();
    NAME_LABELS
        .iter()
        .copied()
        .find(|label| contains_word(&lower, label))
}

fn contains_word(haystack: &str, word: &str) -> bool {
    haystack.match_indices(word).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + word.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_sets_are_lowercase() {
        for word in NOISE_WORDS.iter().chain(NAME_LABELS) {
            assert_eq!(*word, word.to_lowercase(), "{word} must be lowercase");
        }
    }

    #[test]
    fn test_noise_words_case_insensitive() {
        assert!(is_noise_word("B.Tech"));
        assert!(is_noise_word("ENGINEER"));
        assert!(is_noise_word("Resume"));
        assert!(!is_noise_word("Archana"));
    }

    #[test]
    fn test_name_label_prefers_specific() {
        assert_eq!(find_name_label("Full Name: Jane Doe"), Some("full name"));
        assert_eq!(find_name_label("NAME - Jane Doe"), Some("name"));
        assert_eq!(find_name_label("Jane Doe"), None);
    }

    #[test]
    fn test_name_label_needs_word_boundaries() {
        assert_eq!(find_name_label("Nameeta Shah"), None);
        assert_eq!(find_name_label("Anil Surnamewala"), None);
        assert_eq!(find_name_label("Surname-Name: Anil"), Some("surname"));
        assert_eq!(find_name_label("my name, Jane"), Some("name"));
    }
}
