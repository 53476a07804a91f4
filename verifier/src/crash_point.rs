//! Deterministic crash-point derivation.
//!
//! The crash value is a pure function of two 32-byte inputs and a house
//! edge:
//!
//! ```text
//! commit_hash = SHA256(local_secret)
//! final_hash  = SHA256(public_random_value || local_secret)
//! x           = first 4 bytes of final_hash, big-endian
//! crash_bps   = max(floor((10000 - edge) * 2^32 / (2^32 - min(x, 2^32 - 1000))), 10000)
//! ```
//!
//! All arithmetic is exact integer arithmetic; the only floating-point
//! value is the display multiplier. Note the endianness split: `x` is
//! read big-endian from the hash, while u64 event fields are
//! little-endian on the wire. Each convention governs a different
//! format and both must be reproduced exactly.

use commonware_cryptography::{sha256::Sha256, Hasher};
use crashproof_types::bytes::{bytes_to_hex, read_u32_be};
use crashproof_types::CodecError;
use thiserror::Error;

/// Length of the public random value and local secret in bytes.
pub const INPUT_LEN: usize = 32;

/// Basis points in 1.00x.
pub const BASIS_POINTS: u64 = 10_000;

/// Default house edge in basis points (1.00%).
pub const DEFAULT_EDGE_BPS: i64 = 100;

const TWO_POW_32: u128 = 1 << 32;

/// Largest usable seed; keeps the denominator at or above 1000.
const MAX_X: u64 = (1u64 << 32) - 1000;

/// Errors that can occur during crash-point derivation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CrashPointError {
    #[error("{name} must be exactly 32 bytes, got {got}")]
    InputLength { name: &'static str, got: usize },
    #[error("division by zero")]
    DivisionByZero,
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Result of recomputing a round outcome from its inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrashComputation {
    /// SHA-256 of the local secret; must match the published commitment.
    pub commit_hash: [u8; 32],
    /// SHA-256 of the public random value followed by the local secret.
    pub final_hash: [u8; 32],
    /// The 32-bit seed extracted from the final hash.
    pub x: u32,
    /// The crash value in basis points. Always at least 10000.
    pub crash_value_bps: u64,
}

impl CrashComputation {
    pub fn commit_hash_hex(&self) -> String {
        bytes_to_hex(&self.commit_hash)
    }

    pub fn final_hash_hex(&self) -> String {
        bytes_to_hex(&self.final_hash)
    }

    /// Display-only approximation of the multiplier. Above roughly 2^53
    /// in the numerator this loses precision; equality checks must use
    /// `crash_value_bps`.
    pub fn multiplier(&self) -> f64 {
        self.crash_value_bps as f64 / BASIS_POINTS as f64
    }
}

fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().0
}

fn mul_div(a: u128, b: u128, denom: u128) -> Result<u128, CrashPointError> {
    if denom == 0 {
        return Err(CrashPointError::DivisionByZero);
    }
    Ok(a * b / denom)
}

fn clamp_edge(edge_bps: i64) -> u64 {
    edge_bps.clamp(0, BASIS_POINTS as i64) as u64
}

/// Map a 32-bit seed to a crash value in basis points.
///
/// The seed is capped so the denominator never drops below 1000, and
/// the result is floored at 10000 bps: a round never resolves below
/// 1.00x. Monotonic in `x`.
pub fn crash_value_bps_from_x(x: u32, edge_bps: i64) -> Result<u64, CrashPointError> {
    let capped_x = (x as u64).min(MAX_X);
    let denom = TWO_POW_32 - capped_x as u128;
    let factor = (BASIS_POINTS - clamp_edge(edge_bps)) as u128;
    let crash_raw = mul_div(factor, TWO_POW_32, denom)?;
    // factor * 2^32 / 1000 tops out well under u64::MAX.
    Ok((crash_raw as u64).max(BASIS_POINTS))
}

/// Recompute a round outcome from the public random value and the
/// revealed secret.
///
/// Identical inputs always yield identical output; any verifier holding
/// the same two 32-byte values and edge parameter reproduces the
/// published result byte for byte, or proves it wrong.
pub fn compute_crash_point(
    public_random_value: &[u8],
    local_secret: &[u8],
    edge_bps: i64,
) -> Result<CrashComputation, CrashPointError> {
    if public_random_value.len() != INPUT_LEN {
        return Err(CrashPointError::InputLength {
            name: "public random value",
            got: public_random_value.len(),
        });
    }
    if local_secret.len() != INPUT_LEN {
        return Err(CrashPointError::InputLength {
            name: "local secret",
            got: local_secret.len(),
        });
    }

    let commit_hash = sha256(local_secret);

    let mut hasher = Sha256::new();
    hasher.update(public_random_value);
    hasher.update(local_secret);
    let final_hash = hasher.finalize().0;

    let x = read_u32_be(&final_hash, 0)?;
    let crash_value_bps = crash_value_bps_from_x(x, edge_bps)?;

    Ok(CrashComputation {
        commit_hash,
        final_hash,
        x,
        crash_value_bps,
    })
}
