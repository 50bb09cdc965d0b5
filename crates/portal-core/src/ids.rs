//! Random token generation for portal sessions.

use crate::errors::CoreError;

/// Number of random bytes in a session token (hex-encoded to twice this).
pub const TOKEN_BYTES: usize = 32;

/// Generate a fresh session token: 32 random bytes, lowercase hex.
///
/// # Errors
///
/// Returns [`CoreError::Entropy`] if the OS random source is unavailable.
pub fn generate_token() -> Result<String, CoreError> {
    let mut buf = [0u8; TOKEN_BYTES];
    getrandom::fill(&mut buf).map_err(|e| CoreError::Entropy(e.to_string()))?;
    Ok(buf.iter().map(|b| format!("{b:02x}")).collect())
}
