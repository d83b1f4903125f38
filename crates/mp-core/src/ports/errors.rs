use thiserror::Error;

/// Failure talking to the clinical portal API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortalApiError {
    /// The portal answered with an error payload. `detail` carries the
    /// portal's own wording and is shown to the user as-is.
    #[error("{detail}")]
    Server { status: u16, detail: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl PortalApiError {
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            Self::Server { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Message to surface on the form: the portal's own words when it sent
    /// any, otherwise the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self.server_detail() {
            Some(detail) if !detail.is_empty() => detail.to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_detail_is_surfaced_verbatim() {
        let err = PortalApiError::Server {
            status: 400,
            detail: "Email already registered".into(),
        };
        assert_eq!(err.user_message("Registration failed"), "Email already registered");
    }

    #[test]
    fn transport_errors_fall_back_to_generic_text() {
        let err = PortalApiError::Network("connection refused".into());
        assert_eq!(err.user_message("Registration failed"), "Registration failed");
    }
}
