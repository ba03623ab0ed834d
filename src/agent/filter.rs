// src/agent/filter.rs

/// Phrases that indicate a posting is open to candidates needing sponsorship.
const VISA_KEYWORDS: &[&str] = &[
    "visa sponsorship",
    "visa sponsor",
    "sponsorship available",
    "international applicants",
    "international candidates",
    "sponsored visa",
    "work authorization",
    "h1b",
    "h-1b",
    "h1-b",
    "eligible to work",
    "right to work",
    "apply from anywhere",
    "open to international",
    "global talent",
    "worldwide applicants",
];

/// Check whether a job description mentions visa sponsorship.
///
/// Plain case-insensitive substring matching over a fixed phrase list. There
/// is no negation handling: "no visa sponsorship available" still matches.
/// Known limitation, kept because stricter matching changes observable
/// results downstream.
pub fn has_visa_sponsorship(description: &str) -> bool {
    let description = description.to_lowercase();
    VISA_KEYWORDS
        .iter()
        .any(|keyword| description.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_keyword_anywhere() {
        assert!(has_visa_sponsorship(
            "We offer visa sponsorship for qualified candidates."
        ));
        assert!(has_visa_sponsorship("H1B transfers welcome"));
        assert!(has_visa_sponsorship(
            "Open to international candidates from day one"
        ));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(has_visa_sponsorship("VISA SPONSORSHIP AVAILABLE"));
        assert!(has_visa_sponsorship("Visa Sponsor: yes"));
        assert!(has_visa_sponsorship("h-1B candidates considered"));
    }

    #[test]
    fn test_no_keyword_no_match() {
        assert!(!has_visa_sponsorship(
            "Senior Rust engineer, on-site in San Francisco."
        ));
        assert!(!has_visa_sponsorship(""));
    }

    #[test]
    fn test_negated_phrases_still_match() {
        // Documented behavior: substring matching has no negation handling.
        assert!(has_visa_sponsorship("No visa sponsorship available"));
        assert!(has_visa_sponsorship(
            "We are unable to provide visa sponsorship at this time"
        ));
    }
}
