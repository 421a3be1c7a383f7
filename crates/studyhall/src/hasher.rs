//! Password hashing off the async runtime.
//!
//! bcrypt is deliberately slow. Both hashing and verification run on
//! `tokio::task::spawn_blocking` so callers on the runtime never stall.

use std::time::Instant;

use studyhall_types::password::check_plaintext_strength;
use studyhall_types::Password;

use crate::config::CodecConfig;
use crate::error::{Error, Result};

/// Hashes and verifies passwords according to a [`CodecConfig`].
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    config: CodecConfig,
}

impl PasswordHasher {
    /// Create a hasher. Fails if the config is out of range.
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Hash a plaintext password without a strength check.
    ///
    /// # Panics
    ///
    /// Propagates the panic if the bcrypt primitive fails.
    pub async fn hash(&self, plaintext: &str) -> Result<Password> {
        let plaintext = plaintext.to_string();
        let cost = self.config.bcrypt_cost;

        let started = Instant::now();
        let password = run_blocking(move || Password::with_cost(&plaintext, cost)).await??;
        tracing::debug!(
            cost,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "password hashed"
        );
        Ok(password)
    }

    /// Hash a new password, rejecting it first if it scores below the
    /// configured minimum. Rejected passwords are never hashed.
    ///
    /// `user_inputs` are words tied to the account (username, email) and are
    /// only used when `score_user_inputs` is enabled.
    pub async fn hash_new(&self, plaintext: &str, user_inputs: &[&str]) -> Result<Password> {
        let inputs: &[&str] = if self.config.score_user_inputs {
            user_inputs
        } else {
            &[]
        };
        check_plaintext_strength(plaintext, self.config.min_password_score, inputs)?;

        self.hash(plaintext).await
    }

    /// Check a candidate against a stored password.
    pub async fn verify(&self, password: &Password, candidate: &str) -> Result<()> {
        let password = password.clone();
        let candidate = candidate.to_string();

        let result = run_blocking(move || password.compare_to_password(&candidate)).await?;
        if result.is_err() {
            tracing::debug!("password verification failed");
        }
        Ok(result?)
    }
}

/// Run a blocking closure on tokio's blocking pool, re-raising its panics.
async fn run_blocking<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(value) => Ok(value),
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(e) => Err(Error::TaskFailed(e.to_string())),
    }
}
