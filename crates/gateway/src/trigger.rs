//! Scripted failure branch.
//!
//! Any user-supplied text containing [`FAILURE_MARKER`] makes the simulated
//! backend fail after its latency. The match is case-sensitive.

pub const FAILURE_MARKER: &str = "error";

/// The failure message for `input`, if it trips the trigger.
pub fn forced_failure(action: &str, input: &str) -> Option<String> {
    input
        .contains(FAILURE_MARKER)
        .then(|| format!("Simulated failure while processing {action}. Please try again."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_is_case_sensitive_substring() {
        assert!(forced_failure("request", "error").is_some());
        assert!(forced_failure("request", "Project error-42").is_some());
        assert!(forced_failure("request", "Terror Nights").is_some());
        assert!(forced_failure("request", "ERROR").is_none());
        assert!(forced_failure("request", "Coastal Voices").is_none());
    }

    #[test]
    fn message_names_the_action() {
        let msg = forced_failure("vault upload", "error.wav").unwrap();
        assert!(msg.contains("vault upload"));
    }
}
