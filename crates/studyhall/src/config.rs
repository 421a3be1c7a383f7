//! Codec configuration.

use serde::{Deserialize, Serialize};
use studyhall_types::password::{DEFAULT_COST, MAX_COST, MIN_COST};

use crate::error::{Error, Result};

/// Highest score the strength estimator produces.
pub const MAX_PASSWORD_SCORE: u8 = 4;

/// Settings for password handling.
///
/// Missing fields fall back to their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// bcrypt cost factor.
    pub bcrypt_cost: u32,
    /// Minimum accepted strength score, 0 to 4.
    pub min_password_score: u8,
    /// Penalise passwords built from the user's own identifiers.
    pub score_user_inputs: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_COST,
            min_password_score: 3,
            score_user_inputs: true,
        }
    }
}

impl CodecConfig {
    /// Check that every field is in range.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_COST..=MAX_COST).contains(&self.bcrypt_cost) {
            return Err(Error::InvalidConfig(format!(
                "bcrypt_cost {} out of range [{}, {}]",
                self.bcrypt_cost, MIN_COST, MAX_COST
            )));
        }
        if self.min_password_score > MAX_PASSWORD_SCORE {
            return Err(Error::InvalidConfig(format!(
                "min_password_score {} exceeds {}",
                self.min_password_score, MAX_PASSWORD_SCORE
            )));
        }
        Ok(())
    }
}
