// src/auth/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

pub const DEFAULT_TOKEN_BYTES: usize = 32;
const REFERENCE_BYTES: usize = 6;

/// Generate an opaque sign-in token using the OS RNG.
pub fn generate_token_default() -> String {
    let mut rng = OsRng;
    generate_token(&mut rng, DEFAULT_TOKEN_BYTES)
}

/// Generate a URL-safe token from random bytes.
/// - Uses Base64 URL-safe, no padding.
/// - 32 bytes -> 43 char token.
pub fn generate_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buf)
}

/// Short booking reference shown to the guest, e.g. `UNI-q3ZxW9aB`.
pub fn generate_reference() -> String {
    let mut rng = OsRng;
    format!("UNI-{}", generate_token(&mut rng, REFERENCE_BYTES))
}
