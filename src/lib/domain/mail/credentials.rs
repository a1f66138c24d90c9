//! SMTP credentials

use std::fmt;

use super::MailSenderError;

/// Username and password used to authenticate with the SMTP server
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user: String,
    password: String,
}

impl Credentials {
    /// Create credentials, failing if either part is missing
    pub fn new(user: Option<String>, password: Option<String>) -> Result<Self, MailSenderError> {
        match (user, password) {
            (Some(user), Some(password)) => Ok(Self { user, password }),
            _ => Err(MailSenderError::MissingCredentials),
        }
    }

    /// The username
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The password
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"********")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_credentials_with_user_and_password() -> TestResult {
        let credentials = Credentials::new(Some("user".into()), Some("secret".into()))?;

        assert_eq!(credentials.user(), "user");
        assert_eq!(credentials.password(), "secret");

        Ok(())
    }

    #[test]
    fn test_missing_user_or_password_is_rejected() {
        let cases = [
            (None, Some("secret".to_string())),
            (Some("user".to_string()), None),
            (None, None),
        ];

        for (user, password) in cases {
            let result = Credentials::new(user, password);
            assert!(matches!(result, Err(MailSenderError::MissingCredentials)));
        }
    }

    #[test]
    fn test_debug_redacts_password() -> TestResult {
        let credentials = Credentials::new(Some("user".into()), Some("secret".into()))?;

        let debug = format!("{credentials:?}");

        assert!(debug.contains("user"));
        assert!(!debug.contains("secret"));

        Ok(())
    }
}
