//! Candidate model and prefix matching
//!
//! A [`Candidate`] is one selectable entry of the option source: a display
//! name plus a code that identifies it within the set.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// One selectable option
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// Display name (non-empty)
    pub name: String,

    /// Unique code within the candidate set
    pub code: String,
}

impl Candidate {
    /// Create a new candidate
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    /// Check whether the name starts with `query`, ignoring case.
    ///
    /// Both sides are lowercased before comparing. The match is anchored at
    /// the start of the name; an empty query matches every name.
    pub fn matches_prefix(&self, query: &str) -> bool {
        self.name.to_lowercase().starts_with(&query.to_lowercase())
    }

    /// Byte offset in `name` where the part matched by `query` ends.
    ///
    /// The offset always falls on a character boundary of the original
    /// name, even when lowercasing changes the number of characters.
    /// Returns `0` when the name does not match.
    pub fn matched_prefix_end(&self, query: &str) -> usize {
        if query.is_empty() || !self.matches_prefix(query) {
            return 0;
        }

        let wanted = query.to_lowercase().chars().count();
        let mut consumed = 0;
        for (idx, ch) in self.name.char_indices() {
            if consumed >= wanted {
                return idx;
            }
            consumed += ch.to_lowercase().count();
        }
        self.name.len()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Select the candidates whose name starts with `query`, ignoring case.
///
/// An empty query selects nothing. The order of `candidates` is kept.
pub fn filter_by_prefix(candidates: &[Candidate], query: &str) -> Vec<Candidate> {
    if query.is_empty() {
        return Vec::new();
    }

    let query = query.to_lowercase();
    candidates
        .iter()
        .filter(|c| c.name.to_lowercase().starts_with(&query))
        .cloned()
        .collect()
}

/// Find the candidate whose name equals `name`, ignoring case.
pub fn find_by_name<'a>(candidates: &'a [Candidate], name: &str) -> Option<&'a Candidate> {
    let name = name.to_lowercase();
    candidates.iter().find(|c| c.name.to_lowercase() == name)
}

/// Validate a freshly loaded candidate set.
///
/// Every name must be non-empty and every code unique.
pub fn validate(candidates: &[Candidate]) -> std::result::Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(candidates.len());
    for candidate in candidates {
        if candidate.name.trim().is_empty() {
            return Err(LoadError::EmptyName {
                code: candidate.code.clone(),
            });
        }
        if !seen.insert(candidate.code.as_str()) {
            return Err(LoadError::DuplicateCode(candidate.code.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Candidate> {
        vec![
            Candidate::new("Afghanistan", "AF"),
            Candidate::new("Albania", "AL"),
            Candidate::new("Algeria", "AG"),
        ]
    }

    #[test]
    fn test_filter_is_case_insensitive_prefix() {
        let matches = filter_by_prefix(&sample(), "al");
        assert_eq!(
            matches,
            vec![
                Candidate::new("Albania", "AL"),
                Candidate::new("Algeria", "AG")
            ]
        );

        let matches = filter_by_prefix(&sample(), "ALB");
        assert_eq!(matches, vec![Candidate::new("Albania", "AL")]);
    }

    #[test]
    fn test_filter_is_anchored() {
        // "ban" occurs inside "Albania" but is not a prefix
        assert!(filter_by_prefix(&sample(), "ban").is_empty());
        assert!(filter_by_prefix(&sample(), "z").is_empty());
    }

    #[test]
    fn test_filter_empty_query() {
        assert!(filter_by_prefix(&sample(), "").is_empty());
        assert!(filter_by_prefix(&[], "a").is_empty());
    }

    #[test]
    fn test_filter_keeps_source_order() {
        let candidates = vec![
            Candidate::new("Azerbaijan", "AZ"),
            Candidate::new("Afghanistan", "AF"),
            Candidate::new("Austria", "AT"),
        ];
        let codes: Vec<_> = filter_by_prefix(&candidates, "a")
            .into_iter()
            .map(|c| c.code)
            .collect();
        assert_eq!(codes, vec!["AZ", "AF", "AT"]);
    }

    #[test]
    fn test_filter_whitespace_is_significant() {
        assert!(filter_by_prefix(&sample(), " al").is_empty());
    }

    #[test]
    fn test_matched_prefix_end() {
        let albania = Candidate::new("Albania", "AL");
        assert_eq!(albania.matched_prefix_end("aL"), 2);
        assert_eq!(albania.matched_prefix_end("albania"), 7);
        assert_eq!(albania.matched_prefix_end(""), 0);
        assert_eq!(albania.matched_prefix_end("x"), 0);

        let aland = Candidate::new("Åland Islands", "AX");
        assert_eq!(aland.matched_prefix_end("å"), "Å".len());
        assert_eq!(&aland.name[..aland.matched_prefix_end("åla")], "Åla");
    }

    #[test]
    fn test_find_by_name() {
        let candidates = sample();
        assert_eq!(
            find_by_name(&candidates, "albania").map(|c| c.code.as_str()),
            Some("AL")
        );
        assert!(find_by_name(&candidates, "alb").is_none());
    }

    #[test]
    fn test_validate() {
        assert!(validate(&sample()).is_ok());

        let dup = vec![Candidate::new("Albania", "AL"), Candidate::new("Alba", "AL")];
        assert_eq!(validate(&dup), Err(LoadError::DuplicateCode("AL".to_string())));

        let empty = vec![Candidate::new("  ", "XX")];
        assert_eq!(
            validate(&empty),
            Err(LoadError::EmptyName {
                code: "XX".to_string()
            })
        );
    }

    #[test]
    fn test_display_and_json() {
        let c = Candidate::new("Albania", "AL");
        assert_eq!(c.to_string(), "Albania (AL)");

        let parsed: Candidate = serde_json::from_str(r#"{"name":"Albania","code":"AL"}"#).unwrap();
        assert_eq!(parsed, c);
    }
}
