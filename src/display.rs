use std::fmt;

use aws_smithy_types::{DateTime, date_time::Format};

use crate::{
    aws::AssumedRole,
    constants::{REDACT_FULL_MASK, REDACT_MASK_CHAR, REDACT_VISIBLE_CHARS},
};

/// Lines printed for a successful exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLines {
    pub role_arn: String,
    pub access_key: String,
    pub secret_key: String,
    pub session_token: String,
}

impl DisplayLines {
    /// Format an assumed role for display.
    ///
    /// The role ARN is always shown as is. Credential fields are passed
    /// through [`redact`] unless `reveal` is set.
    pub fn new(assumed: &AssumedRole, reveal: bool) -> Self {
        let creds = &assumed.credentials;
        let disclose = |value: &str| match reveal {
            true => value.to_string(),
            false => redact(value),
        };

        Self {
            role_arn: assumed.identity.arn.clone(),
            access_key: disclose(&creds.access_key_id),
            secret_key: disclose(&creds.secret_access_key),
            session_token: disclose(&creds.session_token),
        }
    }
}

/// RFC 3339 rendering of a credential expiry, `unknown` if out of range
pub fn format_expiration(expiration: &DateTime) -> String {
    expiration
        .fmt(Format::DateTime)
        .unwrap_or_else(|_| "unknown".to_string())
}

impl fmt::Display for DisplayLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Assumed Role ARN: {}", self.role_arn)?;
        writeln!(f, "Access Key: {}", self.access_key)?;
        writeln!(f, "Secret Key: {}", self.secret_key)?;
        write!(f, "Session Token: {}", self.session_token)
    }
}

/// Mask a secret, keeping only its first and last four characters.
///
/// Values of four characters or fewer are replaced by `****` entirely. For
/// values shorter than eight characters the masked run is empty and the two
/// visible ends overlap.
pub fn redact(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let len = chars.len();

    if len <= REDACT_VISIBLE_CHARS {
        return REDACT_FULL_MASK.to_string();
    }

    let hidden = len.saturating_sub(2 * REDACT_VISIBLE_CHARS);
    chars[..REDACT_VISIBLE_CHARS]
        .iter()
        .copied()
        .chain(std::iter::repeat_n(REDACT_MASK_CHAR, hidden))
        .chain(chars[len - REDACT_VISIBLE_CHARS..].iter().copied())
        .collect()
}
