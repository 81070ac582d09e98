use ark_std::{rand::Rng, UniformRand};
use serde::{Deserialize, Serialize};

use crate::codec::decode_point;
use crate::nums::derive_generator;
use crate::random::RandomSource;
use crate::{CodecError, Point, Scalar};

/// Bit width of secrets, blinding factors and prover randomness.
pub const BIT_WIDTH: u64 = 256;

/// Commitment parameters: two generators with no known relation between
/// them, shared by every commitment made under them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Params {
    pub g: Point,
    pub h: Point,
    bit_width: u64,
}

impl Params {
    pub fn new(g: Point, h: Point) -> Self {
        Self {
            g,
            h,
            bit_width: BIT_WIDTH,
        }
    }

    /// Two independent uniformly random generators.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let g = Point::rand(rng);
        let h = Point::rand(rng);
        Self::new(g, h)
    }

    /// Generators derived from public seeds, so anyone can audit them.
    pub fn from_seeds(g_seed: &str, h_seed: &str) -> Self {
        Self::new(derive_generator(g_seed), derive_generator(h_seed))
    }

    /// Parameters from codec-encoded `G` and `H`.
    pub fn decode(g: &str, h: &str) -> Result<Self, CodecError> {
        Ok(Self::new(decode_point(g)?, decode_point(h)?))
    }

    /// Bit width of secrets and prover randomness drawn under these params.
    pub fn bit_width(&self) -> u64 {
        self.bit_width
    }

    pub fn random_scalar<S: RandomSource>(&self, source: &mut S) -> Scalar {
        source.random_bits(self.bit_width)
    }
}

/// Private export of a commitment, including its opening.
///
/// Never hand this to a verifier: `x` and `r` are the secrets.
#[allow(non_snake_case)]
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CommitmentRecord {
    pub G: String,
    pub H: String,
    pub x: String,
    pub r: String,
    pub Z: String,
}
