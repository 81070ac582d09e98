//! Error module.

use displaydoc::Display;
use num_bigint::BigUint;

/// A `enum` specifying the ways decoding a wire value can fail.
///
/// Verification never produces one of these for a proof that decodes but
/// does not check out; that case is a plain `false`.
#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Malformed encoding: {0}
    Format(String),
    /// Coordinates ({0}, {1}) are not a point on secp256r1
    InvalidPoint(BigUint, BigUint),
    /// Commitment point does not match r*H + x*G
    CommitmentMismatch,
}

impl std::error::Error for CodecError {}
