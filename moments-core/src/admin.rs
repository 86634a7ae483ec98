use crate::CoreError;

/// Outcome of a failed admin check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No admin password is configured on the server.
    #[error("admin password is not configured")]
    NotConfigured,
    #[error("Unauthorized")]
    Unauthorized,
}

impl From<AuthError> for CoreError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NotConfigured => CoreError::Configuration(err.to_string()),
            AuthError::Unauthorized => CoreError::Unauthorized,
        }
    }
}

/// Shared-secret gate in front of the admin endpoints.
///
/// Stateless: every call is checked on its own, there are no sessions.
/// The comparison is plain string equality, not constant-time.
#[derive(Clone, Default)]
pub struct AdminGate {
    secret: Option<String>,
}

impl AdminGate {
    pub fn new(secret: Option<String>) -> Self {
        // An empty secret counts as unset.
        Self { secret: secret.filter(|s| !s.is_empty()) }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    pub fn authorize(&self, provided: Option<&str>) -> Result<(), AuthError> {
        let secret = self.secret.as_deref().ok_or(AuthError::NotConfigured)?;
        match provided {
            Some(candidate) if !candidate.is_empty() && candidate == secret => Ok(()),
            _ => Err(AuthError::Unauthorized),
        }
    }
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate")
            .field("configured", &self.is_configured())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_password_is_allowed() {
        let gate = AdminGate::new(Some("hunter2".into()));
        assert_eq!(gate.authorize(Some("hunter2")), Ok(()));
    }

    #[test]
    fn test_wrong_or_missing_password_is_unauthorized() {
        let gate = AdminGate::new(Some("hunter2".into()));
        assert_eq!(gate.authorize(Some("hunter3")), Err(AuthError::Unauthorized));
        assert_eq!(gate.authorize(Some("")), Err(AuthError::Unauthorized));
        assert_eq!(gate.authorize(None), Err(AuthError::Unauthorized));
    }

    #[test]
    fn test_unset_secret_is_configuration_error() {
        assert_eq!(AdminGate::new(None).authorize(Some("x")), Err(AuthError::NotConfigured));
        let empty = AdminGate::new(Some(String::new()));
        assert_eq!(empty.authorize(None), Err(AuthError::NotConfigured));
    }

    #[test]
    fn test_debug_hides_secret() {
        let gate = AdminGate::new(Some("hunter2".into()));
        assert!(!format!("{:?}", gate).contains("hunter2"));
    }

    #[test]
    fn test_core_error_mapping() {
        assert!(matches!(CoreError::from(AuthError::Unauthorized), CoreError::Unauthorized));
        assert!(matches!(CoreError::from(AuthError::NotConfigured), CoreError::Configuration(_)));
    }
}
