//! Nothing-up-my-sleeve generator derivation.
//!
//! A public seed is hashed together with an increasing counter until the
//! digest, read as an x-coordinate, lands on the curve. Anyone re-running
//! the same seed recovers the same point, and nobody knows its discrete log
//! with respect to any other derived generator.

use ark_ec::short_weierstrass::SWCurveConfig;
use ark_secp256r1::Config;
use ark_std::{end_timer, start_timer};
use num_bigint::BigUint;
use sha2::{Digest, Sha256};
use tracing::{debug, trace};

use crate::codec::{encode_point, field_modulus, point_from_coordinates};
use crate::Point;

/// SHA-256 of `"{seed}/{inc}"` as a big-endian integer.
pub fn seed_digest(seed: &str, inc: u64) -> BigUint {
    let digest = Sha256::digest(format!("{seed}/{inc}").as_bytes());
    BigUint::from_bytes_be(&digest)
}

/// Square root of `n` modulo `p` for `p = 3 mod 4`, if `n` is a residue.
fn sqrt_mod(n: &BigUint, p: &BigUint) -> Option<BigUint> {
    let exp = (p + 1u32) >> 2u32;
    let root = n.modpow(&exp, p);
    if (&root * &root) % p == *n {
        Some(root)
    } else {
        None
    }
}

/// One step of the search: the point for counter `inc`, or `None` when the
/// candidate x-coordinate has no matching y.
pub fn candidate(seed: &str, inc: u64) -> Option<Point> {
    let p = field_modulus();
    let a: BigUint = Config::COEFF_A.into();
    let b: BigUint = Config::COEFF_B.into();

    let x = seed_digest(seed, inc) % &p;
    // y^2 = x^3 + a*x + b
    let rhs = (x.pow(3) + &a * &x + &b) % &p;
    let y = sqrt_mod(&rhs, &p)?;
    if (&y * &y) % &p != rhs {
        return None;
    }
    point_from_coordinates(&x, &y).ok()
}

/// Derive the generator for `seed`, also returning the counter that hit.
pub fn derive_generator_with_counter(seed: &str) -> (Point, u64) {
    let start = start_timer!(|| format!("deriving NUMS generator for {seed:?}"));
    let mut inc = 0u64;
    loop {
        inc += 1;
        match candidate(seed, inc) {
            Some(point) => {
                debug!(seed, inc, "derived NUMS generator");
                end_timer!(start);
                return (point, inc);
            }
            None => trace!(seed, inc, "no curve point for candidate, retrying"),
        }
    }
}

pub fn derive_generator(seed: &str) -> Point {
    derive_generator_with_counter(seed).0
}

/// The generator for `seed` in its public, codec-encoded form.
pub fn derive_generator_encoded(seed: &str) -> String {
    encode_point(&derive_generator(seed))
}
