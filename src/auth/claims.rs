use serde::{Deserialize, Serialize};

/// JWT payload. `sub` is typed as a string so a missing or non-string
/// subject claim fails decoding outright instead of half-verifying.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // username
    pub exp: usize,  // expires at (unix timestamp)
}
