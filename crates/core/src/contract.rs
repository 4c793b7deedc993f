//! Keyword-based contract review.
//!
//! Flags clauses that usually need a second look before a talent signs. This
//! is a heuristic over plain text, not legal analysis.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Longest contract text accepted for review, in characters.
pub const MAX_CONTRACT_CHARS: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Clean,
    NeedsAttention,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClauseFlag {
    pub term: &'static str,
    pub severity: Severity,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractReview {
    pub verdict: Verdict,
    pub flags: Vec<ClauseFlag>,
}

/// Terms checked, in report order.
const RULES: &[(&str, Severity, &str)] = &[
    (
        "in perpetuity",
        Severity::Critical,
        "Grants rights with no end date.",
    ),
    (
        "perpetual",
        Severity::Critical,
        "Grants rights with no end date.",
    ),
    (
        "irrevocable",
        Severity::Critical,
        "Consent cannot be withdrawn later.",
    ),
    (
        "all media",
        Severity::Warning,
        "Covers media formats that do not exist yet.",
    ),
    (
        "worldwide",
        Severity::Warning,
        "No territorial limit on use.",
    ),
    (
        "exclusive",
        Severity::Info,
        "May prevent working with other studios.",
    ),
];

/// Review contract text.
pub fn review(text: &str) -> Result<ContractReview, CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation("Contract text must not be empty".into()));
    }
    let chars = text.chars().count();
    if chars > MAX_CONTRACT_CHARS {
        return Err(CoreError::Validation(format!(
            "Contract must be at most {MAX_CONTRACT_CHARS} characters, got {chars}"
        )));
    }

    let lowered = text.to_lowercase();
    let flags: Vec<ClauseFlag> = RULES
        .iter()
        .filter(|(term, _, _)| lowered.contains(term))
        .map(|&(term, severity, note)| ClauseFlag {
            term,
            severity,
            note,
        })
        .collect();

    let verdict = if flags.iter().any(|f| f.severity >= Severity::Warning) {
        Verdict::NeedsAttention
    } else {
        Verdict::Clean
    };

    Ok(ContractReview { verdict, flags })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_contract_is_clean() {
        let result = review("Licensee may use the recording for 12 months in Europe.").unwrap();
        assert_eq!(result.verdict, Verdict::Clean);
        assert!(result.flags.is_empty());
    }

    #[test]
    fn perpetual_worldwide_needs_attention() {
        let result = review("A PERPETUAL, worldwide license in all media.").unwrap();
        assert_eq!(result.verdict, Verdict::NeedsAttention);
        let terms: Vec<&str> = result.flags.iter().map(|f| f.term).collect();
        assert_eq!(terms, vec!["perpetual", "all media", "worldwide"]);
    }

    #[test]
    fn info_only_flags_stay_clean() {
        let result = review("This is an exclusive engagement for six months.").unwrap();
        assert_eq!(result.verdict, Verdict::Clean);
        assert_eq!(result.flags.len(), 1);
        assert_eq!(result.flags[0].severity, Severity::Info);
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(review("   ").is_err());
    }
}
