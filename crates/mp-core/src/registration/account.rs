//! Registered account handle and login session.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::verification::VerdictStatus;

/// Server-assigned account identifier. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Account record returned by `POST /auth/register` (and echoed inside the
/// login response). Consumed by the terminal wizard step to route to login.
///
/// 注册成功后服务端返回的账户记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredAccount {
    pub id: AccountId,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub registration_number: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub hospital: Option<String>,
    /// Verification-status echo; `pending` until documents pass review.
    #[serde(default)]
    pub verification_status: VerdictStatus,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_role() -> String {
    "doctor".to_string()
}

/// The backend emits naive UTC timestamps (`2025-08-25T12:34:56.789012`);
/// RFC 3339 with an offset must parse too. Anything else becomes `None`
/// rather than a deserialization failure.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|_| s.parse::<NaiveDateTime>().map(|dt| dt.and_utc()))
            .ok()
    }))
}

/// Result of the terminal login handoff (`POST /auth/login`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginSession {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: RegisteredAccount,
}

fn default_token_type() -> String {
    "bearer".to_string()
}
