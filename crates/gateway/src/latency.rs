//! Simulated latencies.

use std::time::Duration;

use castline_core::error::CoreError;

/// How long each simulated operation takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub request_submit: Duration,
    pub sign_in: Duration,
    pub casting_application: Duration,
    pub onboarding_step: Duration,
    pub vault_upload: Duration,
    pub chat_connect: Duration,
    pub auto_reply: Duration,
    pub contract_review: Duration,
    /// Delay before a `success` state falls back to `idle`.
    pub success_dismiss: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            request_submit: Duration::from_millis(800),
            sign_in: Duration::from_millis(1000),
            casting_application: Duration::from_millis(1200),
            onboarding_step: Duration::from_millis(1500),
            vault_upload: Duration::from_millis(2000),
            chat_connect: Duration::from_millis(800),
            auto_reply: Duration::from_millis(2500),
            contract_review: Duration::from_millis(2500),
            success_dismiss: Duration::from_millis(3000),
        }
    }
}

impl LatencyProfile {
    /// No delays at all.
    pub fn instant() -> Self {
        Self {
            request_submit: Duration::ZERO,
            sign_in: Duration::ZERO,
            casting_application: Duration::ZERO,
            onboarding_step: Duration::ZERO,
            vault_upload: Duration::ZERO,
            chat_connect: Duration::ZERO,
            auto_reply: Duration::ZERO,
            contract_review: Duration::ZERO,
            success_dismiss: Duration::ZERO,
        }
    }

    /// Multiply every latency by `factor`. `0.0` disables delays.
    pub fn scaled(self, factor: f64) -> Result<Self, CoreError> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(CoreError::Validation(format!(
                "Latency scale must be a non-negative number, got {factor}"
            )));
        }
        let scale = |d: Duration| {
            Duration::try_from_secs_f64(d.as_secs_f64() * factor).map_err(|_| {
                CoreError::Validation(format!(
                    "Latency scale {factor} makes a {}ms latency too large",
                    d.as_millis()
                ))
            })
        };
        Ok(Self {
            request_submit: scale(self.request_submit)?,
            sign_in: scale(self.sign_in)?,
            casting_application: scale(self.casting_application)?,
            onboarding_step: scale(self.onboarding_step)?,
            vault_upload: scale(self.vault_upload)?,
            chat_connect: scale(self.chat_connect)?,
            auto_reply: scale(self.auto_reply)?,
            contract_review: scale(self.contract_review)?,
            success_dismiss: scale(self.success_dismiss)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn scaling_halves_every_latency() {
        let half = LatencyProfile::default().scaled(0.5).unwrap();
        assert_eq!(half.request_submit, Duration::from_millis(400));
        assert_eq!(half.success_dismiss, Duration::from_millis(1500));
    }

    #[test]
    fn instant_has_no_delays() {
        let instant = LatencyProfile::instant();
        assert_eq!(instant.vault_upload, Duration::ZERO);
        assert_eq!(instant.auto_reply, Duration::ZERO);
    }

    #[test]
    fn negative_or_nan_scale_is_rejected() {
        assert!(LatencyProfile::default().scaled(-1.0).is_err());
        assert!(LatencyProfile::default().scaled(f64::NAN).is_err());
    }

    #[test]
    fn overflowing_scale_is_rejected() {
        assert_matches!(
            LatencyProfile::default().scaled(1e300),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn zero_scale_disables_delays() {
        assert_eq!(LatencyProfile::default().scaled(0.0).unwrap(), LatencyProfile::instant());
    }
}
