pub mod pedersen;
pub mod structs;

use ark_ec::Group;
use num_bigint::BigUint;

use crate::Point;

pub use pedersen::Commitment;
pub use structs::{CommitmentRecord, Params};

/// `k * p` for the full, unreduced integer `k`.
pub fn scalar_mul(p: &Point, k: &BigUint) -> Point {
    p.mul_bigint(k.to_u64_digits())
}

/// The Pedersen map `r*h + x*g`.
pub fn commit_with(g: &Point, h: &Point, x: &BigUint, r: &BigUint) -> Point {
    scalar_mul(h, r) + scalar_mul(g, x)
}
