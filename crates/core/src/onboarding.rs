//! Onboarding wizard steps, status and validation.
//!
//! The wizard walks a new user through four steps. Moving between steps is
//! limited to one step forward or back, and a step can only be left forward
//! once its data is structurally complete.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::session::UserRole;

// ---------------------------------------------------------------------------
// Onboarding status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStatus {
    InProgress,
    Completed,
}

// ---------------------------------------------------------------------------
// Onboarding steps
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    AccountType,
    Profile,
    Verification,
    Review,
}

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 4;

impl OnboardingStep {
    /// Convert a 1-based step number to an `OnboardingStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::AccountType),
            2 => Ok(Self::Profile),
            3 => Ok(Self::Verification),
            4 => Ok(Self::Review),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    pub fn to_number(self) -> u8 {
        match self {
            Self::AccountType => 1,
            Self::Profile => 2,
            Self::Verification => 3,
            Self::Review => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AccountType => "Account Type",
            Self::Profile => "Profile",
            Self::Verification => "Verification",
            Self::Review => "Review",
        }
    }
}

// ---------------------------------------------------------------------------
// Step data
// ---------------------------------------------------------------------------

/// JSON key for the chosen account type in step 1 data.
pub const STEP_DATA_KEY_ACCOUNT_TYPE: &str = "account_type";

/// JSON key for the display name in step 2 data.
pub const STEP_DATA_KEY_DISPLAY_NAME: &str = "display_name";

/// JSON key for the terms acceptance flag in step 3 data.
pub const STEP_DATA_KEY_TERMS_ACCEPTED: &str = "terms_accepted";

/// Validate that step data contains what the step needs before advancing.
pub fn validate_step_data(step: u8, data: &serde_json::Value) -> Result<(), CoreError> {
    let step_enum = OnboardingStep::from_number(step)?;
    let obj = data
        .as_object()
        .ok_or_else(|| CoreError::Validation("Step data must be a JSON object".to_string()))?;

    match step_enum {
        OnboardingStep::AccountType => {
            let role = obj
                .get(STEP_DATA_KEY_ACCOUNT_TYPE)
                .and_then(|v| v.as_str())
                .ok_or_else(|| {
                    CoreError::Validation(
                        "Step 1 (Account Type) requires 'account_type'".to_string(),
                    )
                })?;
            UserRole::parse(role)?;
        }
        OnboardingStep::Profile => {
            let has_name = obj
                .get(STEP_DATA_KEY_DISPLAY_NAME)
                .and_then(|v| v.as_str())
                .is_some_and(|s| !s.trim().is_empty());
            if !has_name {
                return Err(CoreError::Validation(
                    "Step 2 (Profile) requires a non-empty 'display_name'".to_string(),
                ));
            }
        }
        OnboardingStep::Verification => {
            let accepted = obj
                .get(STEP_DATA_KEY_TERMS_ACCEPTED)
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            if !accepted {
                return Err(CoreError::Validation(
                    "Step 3 (Verification) requires 'terms_accepted' to be true".to_string(),
                ));
            }
        }
        OnboardingStep::Review => {}
    }

    Ok(())
}

/// Validate a step transition: exactly one step forward or back.
pub fn validate_step_transition(current: u8, next: u8) -> Result<(), CoreError> {
    validate_step_number(current)?;
    validate_step_number(next)?;

    let diff = i16::from(next) - i16::from(current);
    if diff != 1 && diff != -1 {
        return Err(CoreError::Validation(format!(
            "Cannot transition from step {current} to step {next}. \
             Must advance or go back exactly one step."
        )));
    }
    Ok(())
}

pub fn validate_step_number(step: u8) -> Result<(), CoreError> {
    if !(MIN_STEP..=MAX_STEP).contains(&step) {
        return Err(CoreError::Validation(format!(
            "Step {step} is out of range ({MIN_STEP}..{MAX_STEP})"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Wizard state
// ---------------------------------------------------------------------------

/// Persisted progress through the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingState {
    pub step: u8,
    pub status: OnboardingStatus,
    /// Data collected so far, merged across steps.
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self {
            step: MIN_STEP,
            status: OnboardingStatus::InProgress,
            data: serde_json::Map::new(),
        }
    }
}

impl OnboardingState {
    fn ensure_in_progress(&self) -> Result<(), CoreError> {
        if self.status != OnboardingStatus::InProgress {
            return Err(CoreError::Conflict("Onboarding is already completed".into()));
        }
        Ok(())
    }

    /// Merge `step_data` into the collected data, validate the current step
    /// and move forward one step.
    pub fn advance(&mut self, step_data: &serde_json::Value) -> Result<u8, CoreError> {
        self.ensure_in_progress()?;
        let next = self.step.saturating_add(1);
        validate_step_transition(self.step, next)?;

        let mut merged = self.data.clone();
        if let Some(obj) = step_data.as_object() {
            merged.extend(obj.clone());
        }
        validate_step_data(self.step, &serde_json::Value::Object(merged.clone()))?;

        self.data = merged;
        self.step = next;
        Ok(self.step)
    }

    /// Move back one step. Collected data is kept.
    pub fn back(&mut self) -> Result<u8, CoreError> {
        self.ensure_in_progress()?;
        let previous = self.step.saturating_sub(1);
        validate_step_transition(self.step, previous)?;
        self.step = previous;
        Ok(self.step)
    }

    /// Finish the wizard. Only allowed from the last step.
    pub fn complete(&mut self) -> Result<(), CoreError> {
        self.ensure_in_progress()?;
        if self.step != MAX_STEP {
            return Err(CoreError::Validation(format!(
                "Cannot complete onboarding: must be on step {MAX_STEP} (Review), \
                 currently on step {}",
                self.step
            )));
        }
        self.status = OnboardingStatus::Completed;
        Ok(())
    }

    /// The role chosen in step 1, once known.
    pub fn role(&self) -> Option<UserRole> {
        self.data
            .get(STEP_DATA_KEY_ACCOUNT_TYPE)
            .and_then(|v| v.as_str())
            .and_then(|s| UserRole::parse(s).ok())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn step_number_round_trip() {
        for n in MIN_STEP..=MAX_STEP {
            assert_eq!(OnboardingStep::from_number(n).unwrap().to_number(), n);
        }
        assert!(OnboardingStep::from_number(0).is_err());
        assert!(OnboardingStep::from_number(5).is_err());
    }

    #[test]
    fn transitions_must_be_single_steps() {
        assert!(validate_step_transition(1, 2).is_ok());
        assert!(validate_step_transition(3, 2).is_ok());
        assert!(validate_step_transition(1, 3).is_err());
        assert!(validate_step_transition(2, 2).is_err());
        assert!(validate_step_transition(4, 5).is_err());
    }

    #[test]
    fn step_one_requires_known_account_type() {
        assert!(validate_step_data(1, &json!({"account_type": "actor"})).is_ok());
        assert!(validate_step_data(1, &json!({"account_type": "wizard"})).is_err());
        assert!(validate_step_data(1, &json!({})).is_err());
    }

    #[test]
    fn step_two_requires_display_name() {
        assert!(validate_step_data(2, &json!({"display_name": "Maya"})).is_ok());
        assert!(validate_step_data(2, &json!({"display_name": "  "})).is_err());
    }

    #[test]
    fn step_three_requires_terms() {
        assert!(validate_step_data(3, &json!({"terms_accepted": true})).is_ok());
        assert!(validate_step_data(3, &json!({"terms_accepted": false})).is_err());
    }

    #[test]
    fn non_object_data_is_rejected() {
        assert!(validate_step_data(4, &json!([1, 2])).is_err());
    }

    #[test]
    fn full_walkthrough() {
        let mut state = OnboardingState::default();
        assert_eq!(state.advance(&json!({"account_type": "studio"})).unwrap(), 2);
        assert_eq!(state.advance(&json!({"display_name": "Northlight"})).unwrap(), 3);
        assert_eq!(state.advance(&json!({"terms_accepted": true})).unwrap(), 4);
        state.complete().unwrap();

        assert_eq!(state.status, OnboardingStatus::Completed);
        assert_eq!(state.role(), Some(UserRole::Studio));
        assert_matches!(state.back(), Err(CoreError::Conflict(_)));
    }

    #[test]
    fn advance_with_missing_data_keeps_step() {
        let mut state = OnboardingState::default();
        assert!(state.advance(&json!({})).is_err());
        assert_eq!(state.step, 1);
        assert!(state.data.is_empty());
    }

    #[test]
    fn back_keeps_collected_data() {
        let mut state = OnboardingState::default();
        state.advance(&json!({"account_type": "actor"})).unwrap();
        assert_eq!(state.back().unwrap(), 1);
        assert_eq!(state.role(), Some(UserRole::Actor));
        // Data from earlier is enough to move forward again.
        assert_eq!(state.advance(&json!({})).unwrap(), 2);
    }

    #[test]
    fn back_from_first_step_is_rejected() {
        let mut state = OnboardingState::default();
        assert!(state.back().is_err());
        assert_eq!(state.step, 1);
    }

    #[test]
    fn cannot_advance_past_last_step() {
        let mut state = OnboardingState {
            step: MAX_STEP,
            ..Default::default()
        };
        assert!(state.advance(&json!({})).is_err());
    }

    #[test]
    fn complete_requires_last_step() {
        let mut state = OnboardingState::default();
        assert!(state.complete().is_err());
        assert_eq!(state.status, OnboardingStatus::InProgress);
    }
}
