//! Signed-in user and credential validation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Actor,
    Studio,
    Agency,
}

impl UserRole {
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "actor" => Ok(Self::Actor),
            "studio" => Ok(Self::Studio),
            "agency" => Ok(Self::Agency),
            other => Err(CoreError::Validation(format!(
                "Invalid account type '{other}'. Must be one of: actor, studio, agency"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Actor => "actor",
            Self::Studio => "studio",
            Self::Agency => "agency",
        }
    }
}

/// The current (mock) user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    pub display_name: String,
    pub email: String,
    pub role: UserRole,
}

/// Sign-in form.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: UserRole,
}

fn default_role() -> UserRole {
    UserRole::Actor
}

/// Validate sign-in input. Returns the normalised (trimmed, lowercased) email.
pub fn validate_credentials(credentials: &Credentials) -> Result<String, CoreError> {
    let email = credentials.email.trim().to_lowercase();
    let well_formed = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !well_formed {
        return Err(CoreError::Validation(format!(
            "'{}' is not a valid email address",
            credentials.email.trim()
        )));
    }
    if credentials.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(email)
}

impl User {
    /// Build the mock user for a validated email. The display name is the
    /// capitalised local part.
    pub fn for_email(id: DbId, email: &str, role: UserRole) -> Self {
        let local = email.split('@').next().unwrap_or(email);
        let mut chars = local.chars();
        let display_name = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        Self {
            id,
            display_name,
            email: email.to_string(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.into(),
            password: password.into(),
            role: UserRole::Studio,
        }
    }

    #[test]
    fn valid_credentials_normalise_email() {
        assert_eq!(
            validate_credentials(&creds("  Maya@Example.com ", "password1")).unwrap(),
            "maya@example.com"
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["", "maya", "@example.com", "maya@localhost"] {
            assert!(validate_credentials(&creds(email, "password1")).is_err(), "{email}");
        }
    }

    #[test]
    fn short_password_is_rejected() {
        let err = validate_credentials(&creds("maya@example.com", "short")).unwrap_err();
        assert!(err.to_string().contains("at least 8"));
    }

    #[test]
    fn display_name_from_local_part() {
        let user = User::for_email(7, "maya@example.com", UserRole::Actor);
        assert_eq!(user.display_name, "Maya");
        assert_eq!(user.role, UserRole::Actor);
    }

    #[test]
    fn role_parse() {
        assert_eq!(UserRole::parse("agency").unwrap(), UserRole::Agency);
        assert!(UserRole::parse("director").is_err());
    }

    #[test]
    fn credentials_default_role_is_actor() {
        let c: Credentials =
            serde_json::from_str(r#"{"email":"a@b.co","password":"12345678"}"#).unwrap();
        assert_eq!(c.role, UserRole::Actor);
    }
}
