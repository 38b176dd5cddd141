//! One-time password store.
//!
//! This module provides the `OtpService` for issuing and redeeming 6-digit
//! one-time passwords. Codes live in memory only, keyed by login id, with a
//! 5 minute TTL. Issuing a new code for a login id replaces the previous one, and
//! a code is invalidated after successful use or expiration.

use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for one-time passwords in seconds.
const OTP_TTL_SECONDS: u64 = 300;

/// Stored code with expiration timestamp.
#[derive(Clone)]
struct StoredOtp {
    code: String,
    expires_at: Instant,
}

impl StoredOtp {
    fn new(code: String, ttl: Duration) -> Self {
        Self {
            code,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

/// Service for issuing and verifying one-time passwords.
///
/// Cloning shares the underlying store, so every request handler sees the same
/// outstanding codes.
#[derive(Clone)]
pub struct OtpService {
    codes: Arc<RwLock<HashMap<String, StoredOtp>>>,
    ttl: Duration,
}

impl OtpService {
    /// Creates a new OtpService with the default 5 minute TTL.
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(OTP_TTL_SECONDS))
    }

    /// Creates a new OtpService with a custom TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Generates a fresh code for `login_id`, replacing any outstanding one.
    ///
    /// # Returns
    /// - `String` - The zero-padded 6-digit code
    pub async fn issue(&self, login_id: &str) -> String {
        let code = Self::generate_code();
        self.codes.write().await.insert(
            login_id.to_string(),
            StoredOtp::new(code.clone(), self.ttl),
        );
        code
    }

    /// Redeems a code.
    ///
    /// A matching, unexpired code is consumed. A wrong code leaves the stored code
    /// in place; an expired one is discarded.
    ///
    /// # Returns
    /// - `true` - Code matched and has been consumed
    /// - `false` - No code, wrong code, or expired code
    pub async fn verify_and_consume(&self, login_id: &str, input: &str) -> bool {
        let mut codes = self.codes.write().await;

        let Some(stored) = codes.get(login_id) else {
            return false;
        };

        if stored.is_expired() {
            codes.remove(login_id);
            return false;
        }

        if stored.matches(input) {
            codes.remove(login_id);
            return true;
        }

        false
    }

    fn generate_code() -> String {
        let mut rng = rand::rng();
        format!("{:06}", rng.random_range(0..1_000_000))
    }

    #[cfg(test)]
    pub async fn has_valid_code(&self, login_id: &str) -> bool {
        let codes = self.codes.read().await;
        codes.get(login_id).is_some_and(|stored| !stored.is_expired())
    }
}

impl Default for OtpService {
    fn default() -> Self {
        Self::new()
    }
}
