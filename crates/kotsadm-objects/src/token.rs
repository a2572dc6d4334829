//! Uniqueness tokens for generated object names.

use chrono::Utc;

/// Source of the uniqueness token appended to generated object names.
///
/// Injected into the builders so tests can produce deterministic names.
pub trait TokenSource {
    /// Return the token for the next generated name.
    fn token(&self) -> String;
}

/// Seconds-resolution wall-clock tokens.
///
/// Two calls within the same second yield the same token, and the API
/// server rejects the second create if the first pod still exists. Callers
/// that run migrations in rapid succession should wait out the window or
/// inject a wider token.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl TokenSource for WallClock {
    fn token(&self) -> String {
        Utc::now().timestamp().to_string()
    }
}

/// Fixed token for deterministic names in tests.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Clone)]
pub struct FixedToken(pub String);

#[cfg(any(test, feature = "test-util"))]
impl TokenSource for FixedToken {
    fn token(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_clock_tokens_are_unix_seconds() {
        let before = Utc::now().timestamp();
        let token: i64 = WallClock.token().parse().expect("token is an integer");
        let after = Utc::now().timestamp();
        assert!(before <= token && token <= after);
    }

    #[test]
    fn test_fixed_token_repeats() {
        let tokens = FixedToken("1234567890".to_string());
        assert_eq!(tokens.token(), "1234567890");
        assert_eq!(tokens.token(), "1234567890");
    }
}
