//! Synchronous pre-submission checks for request drafts.
//!
//! A draft that fails pre-check is never submitted, so no request record is
//! created for it.

use crate::catalog::UsagePolicy;
use crate::error::CoreError;
use crate::requests::{RequestDraft, RequestKind};

/// Durations containing this word are never accepted.
pub const PERPETUAL_MARKER: &str = "perpetual";

/// Why a draft was rejected before submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrecheckError {
    #[error("'{0}' is required")]
    MissingField(&'static str),

    #[error("Usage terms are required for {0} requests")]
    MissingTerms(&'static str),

    #[error("Perpetual usage is not permitted")]
    PerpetualDuration,

    #[error("Use case '{0}' is not permitted by this policy")]
    UseCaseNotPermitted(String),

    #[error("Territory '{0}' is not permitted by this policy")]
    TerritoryNotPermitted(String),

    #[error("Duration '{0}' is not offered by this policy")]
    DurationNotPermitted(String),
}

impl From<PrecheckError> for CoreError {
    fn from(err: PrecheckError) -> Self {
        CoreError::Validation(err.to_string())
    }
}

fn require(value: &str, field: &'static str) -> Result<(), PrecheckError> {
    if value.trim().is_empty() {
        Err(PrecheckError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Check a draft against the target's policy.
///
/// Order of checks: required text fields, presence of terms for kinds that
/// need them, the perpetual ban, then policy membership of use case,
/// territory and duration.
pub fn precheck(
    kind: RequestKind,
    draft: &RequestDraft,
    policy: &UsagePolicy,
) -> Result<(), PrecheckError> {
    require(&draft.requester, "requester")?;
    require(&draft.project_name, "project_name")?;
    require(&draft.note, "note")?;

    let terms = match &draft.terms {
        Some(terms) => terms,
        None if kind.requires_terms() => return Err(PrecheckError::MissingTerms(kind.as_str())),
        None => return Ok(()),
    };

    require(&terms.duration, "duration")?;
    if terms.duration.to_lowercase().contains(PERPETUAL_MARKER) {
        return Err(PrecheckError::PerpetualDuration);
    }

    if !policy.use_cases.contains(&terms.use_case) {
        return Err(PrecheckError::UseCaseNotPermitted(
            terms.use_case.to_string(),
        ));
    }
    if !policy.territories.contains(&terms.territory) {
        return Err(PrecheckError::TerritoryNotPermitted(
            terms.territory.to_string(),
        ));
    }
    if !policy.allows_duration(&terms.duration) {
        return Err(PrecheckError::DurationNotPermitted(
            terms.duration.trim().to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::catalog::SubjectRef;
    use crate::facets::{Geography, UseCase};
    use crate::requests::UsageTerms;

    fn policy() -> UsagePolicy {
        UsagePolicy {
            use_cases: vec![UseCase::Film, UseCase::Television],
            territories: vec![Geography::Europe, Geography::Worldwide],
            durations: vec!["6 months".into(), "1 year".into()],
        }
    }

    fn draft(duration: &str) -> RequestDraft {
        RequestDraft {
            subject: SubjectRef::actor(2),
            requester: "Harbor Lane".into(),
            project_name: "Winter Campaign".into(),
            note: "Two broadcast spots".into(),
            terms: Some(UsageTerms {
                use_case: UseCase::Film,
                territory: Geography::Europe,
                duration: duration.into(),
            }),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(precheck(RequestKind::License, &draft("1 year"), &policy()).is_ok());
    }

    #[test]
    fn blank_fields_are_rejected() {
        let mut d = draft("1 year");
        d.project_name = "   ".into();
        assert_eq!(
            precheck(RequestKind::License, &d, &policy()),
            Err(PrecheckError::MissingField("project_name"))
        );

        let mut d = draft("1 year");
        d.note.clear();
        assert_eq!(
            precheck(RequestKind::Access, &d, &policy()),
            Err(PrecheckError::MissingField("note"))
        );
    }

    #[test]
    fn perpetual_duration_is_always_rejected() {
        for duration in ["Perpetual worldwide", "perpetual", "in PERPETUAL terms"] {
            assert_eq!(
                precheck(RequestKind::License, &draft(duration), &policy()),
                Err(PrecheckError::PerpetualDuration)
            );
        }
    }

    #[test]
    fn perpetual_is_rejected_even_if_policy_offers_it() {
        let mut p = policy();
        p.durations.push("Perpetual".into());
        assert_eq!(
            precheck(RequestKind::License, &draft("Perpetual"), &p),
            Err(PrecheckError::PerpetualDuration)
        );
    }

    #[test]
    fn use_case_outside_policy_is_rejected() {
        let mut d = draft("1 year");
        d.terms.as_mut().unwrap().use_case = UseCase::Gaming;
        assert_matches!(
            precheck(RequestKind::License, &d, &policy()),
            Err(PrecheckError::UseCaseNotPermitted(u)) if u == "gaming"
        );
    }

    #[test]
    fn territory_outside_policy_is_rejected() {
        let mut d = draft("1 year");
        d.terms.as_mut().unwrap().territory = Geography::AsiaPacific;
        assert_matches!(
            precheck(RequestKind::Access, &d, &policy()),
            Err(PrecheckError::TerritoryNotPermitted(_))
        );
    }

    #[test]
    fn duration_outside_policy_is_rejected() {
        assert_matches!(
            precheck(RequestKind::License, &draft("5 years"), &policy()),
            Err(PrecheckError::DurationNotPermitted(d)) if d == "5 years"
        );
    }

    #[test]
    fn license_without_terms_is_rejected() {
        let mut d = draft("1 year");
        d.terms = None;
        assert_eq!(
            precheck(RequestKind::License, &d, &policy()),
            Err(PrecheckError::MissingTerms("license"))
        );
    }

    #[test]
    fn intro_without_terms_passes() {
        let mut d = draft("1 year");
        d.terms = None;
        assert!(precheck(RequestKind::Intro, &d, &policy()).is_ok());
    }

    #[test]
    fn converts_into_validation_error() {
        let err: CoreError = PrecheckError::PerpetualDuration.into();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("Perpetual"));
    }
}
