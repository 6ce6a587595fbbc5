//! Compact "bits" target decoding and difficulty.

use core::fmt;

use primitive_types::U256;

use crate::error::{Error, Result};
use crate::params::{MIN_DIFFICULTY_COEFFICIENT, MIN_DIFFICULTY_EXPONENT};

/// The 4-byte compact target exactly as it appears in a serialized header.
///
/// Bytes 0..3 are the little-endian coefficient, byte 3 is the exponent.
/// `target = coefficient * 256^(exponent - 3)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CompactTarget(pub [u8; 4]);

impl CompactTarget {
    /// Build from the conventional `u32` form, e.g. `0x1d00ffff`.
    pub fn from_u32(bits: u32) -> Self {
        CompactTarget(bits.to_le_bytes())
    }

    /// The conventional `u32` form.
    pub fn to_u32(&self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    pub fn exponent(&self) -> u8 {
        self.0[3]
    }

    pub fn coefficient(&self) -> u32 {
        u32::from_le_bytes([self.0[0], self.0[1], self.0[2], 0])
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Decode to a 256-bit target.
    pub fn target(&self) -> Result<U256> {
        decode_target(self)
    }

    /// Difficulty relative to the minimum-difficulty target.
    pub fn difficulty(&self) -> Result<f64> {
        decode_difficulty(self)
    }
}

impl fmt::Debug for CompactTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompactTarget({:#010x})", self.to_u32())
    }
}

/// Decode compact bits into the proof-of-work target.
///
/// Exponents below 3 would need a right shift and are rejected, as is any
/// target wider than 256 bits since no hash could be compared against it.
pub fn decode_target(bits: &CompactTarget) -> Result<U256> {
    let exponent = bits.exponent() as usize;
    if exponent < 3 {
        return Err(Error::MalformedTarget(bits.0));
    }

    let coefficient = U256::from(bits.coefficient());
    if coefficient.is_zero() {
        return Ok(U256::zero());
    }

    let shift = 8 * (exponent - 3);
    if coefficient.bits() + shift > 256 {
        return Err(Error::MalformedTarget(bits.0));
    }

    Ok(coefficient << shift)
}

/// The minimum-difficulty target, `0xffff * 256^(0x1d - 3)`.
pub fn min_difficulty_target() -> U256 {
    U256::from(MIN_DIFFICULTY_COEFFICIENT) << (8 * (MIN_DIFFICULTY_EXPONENT as usize - 3))
}

/// Difficulty = minimum-difficulty target / this target.
///
/// A zero target has no difficulty and is reported as malformed.
pub fn decode_difficulty(bits: &CompactTarget) -> Result<f64> {
    let target = decode_target(bits)?;
    if target.is_zero() {
        return Err(Error::MalformedTarget(bits.0));
    }
    Ok(u256_to_f64(&min_difficulty_target()) / u256_to_f64(&target))
}

fn u256_to_f64(value: &U256) -> f64 {
    // Limbs are little-endian u64 words.
    value
        .0
        .iter()
        .rev()
        .fold(0.0, |acc, &limb| acc * 18_446_744_073_709_551_616.0 + limb as f64)
}

/// Format difficulty for display (e.g., "1.23T" for trillion).
pub fn format_difficulty(difficulty: f64) -> String {
    if difficulty >= 1e15 {
        format!("{:.2}P", difficulty / 1e15)
    } else if difficulty >= 1e12 {
        format!("{:.2}T", difficulty / 1e12)
    } else if difficulty >= 1e9 {
        format!("{:.2}G", difficulty / 1e9)
    } else if difficulty >= 1e6 {
        format!("{:.2}M", difficulty / 1e6)
    } else if difficulty >= 1e3 {
        format!("{:.2}K", difficulty / 1e3)
    } else {
        format!("{:.2}", difficulty)
    }
}
