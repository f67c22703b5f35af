//! Session token configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TOKEN_MAX_AGE_SECS;

/// Session token settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Signing secret. Empty when not configured.
    pub secret: String,
    /// Token lifetime in seconds.
    #[serde(default = "default_max_age")]
    pub max_age: u64,
}

/// Default token lifetime in seconds.
pub(crate) fn default_max_age() -> u64 {
    DEFAULT_TOKEN_MAX_AGE_SECS
}

impl Default for Token {
    fn default() -> Self {
        Self {
            secret: String::new(),
            max_age: DEFAULT_TOKEN_MAX_AGE_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_token_lifetime_is_one_day() {
        let token = Token::default();
        assert_eq!(token.max_age, 86400);
        assert_eq!(token.secret, "");
    }
}
