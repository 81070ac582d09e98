//! Source of the secret scalars drawn by commitments and provers.

use num_bigint::{BigUint, RandBigInt};
use rand::{CryptoRng, RngCore};

/// Uniform integers of a fixed bit width.
///
/// Verification never draws randomness; only [`crate::Commitment::commit`]
/// and the provers do.
pub trait RandomSource {
    /// A uniform integer in `[0, 2^bits)`.
    fn random_bits(&mut self, bits: u64) -> BigUint;
}

impl<R: RngCore + CryptoRng> RandomSource for R {
    fn random_bits(&mut self, bits: u64) -> BigUint {
        self.gen_biguint(bits)
    }
}
