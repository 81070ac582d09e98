//! Fiat-Shamir challenge derivation.
//!
//! The transcript is the `/`-joined decimal affine coordinates of the
//! public points followed by the binding string. Prover and verifier must
//! rebuild it byte for byte.

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::codec::point_coordinates;
use crate::Point;

pub fn transcript_string(points: &[&Point], binding: &str) -> String {
    let mut parts = Vec::with_capacity(2 * points.len() + 1);
    for p in points {
        let (x, y) = point_coordinates(p);
        parts.push(x.to_string());
        parts.push(y.to_string());
    }
    parts.push(binding.to_string());
    parts.join("/")
}

/// SHA-256 of `s` as a big-endian integer.
pub fn hash_to_int(s: &str) -> BigUint {
    BigUint::from_bytes_be(&Sha256::digest(s.as_bytes()))
}

pub fn challenge(points: &[&Point], binding: &str) -> BigUint {
    hash_to_int(&transcript_string(points, binding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nums::derive_generator;

    #[test]
    fn test_transcript_layout() {
        let g = derive_generator("G");
        let h = derive_generator("H");
        let s = transcript_string(&[&g, &h], "");
        assert_eq!(
            s,
            "11640360229559325175171609871244895205426322585740301106541824257564074595502/\
             26748340083631937723854216369615446467642277015187444576400401559312316159395/\
             15849575072044788748669068947401530106784556502666008579435408693255910862778/\
             16317722244307911807340699796637584243707367031942376473438475506054014508506/"
        );
        assert!(transcript_string(&[&g], "ctx").ends_with("/ctx"));
    }

    #[test]
    fn test_hash_to_int() {
        // sha256("abc") = ba7816bf...f20015ad
        let expected = BigUint::parse_bytes(
            b"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            16,
        )
        .unwrap();
        assert_eq!(hash_to_int("abc"), expected);
    }

    #[test]
    fn test_binding_changes_challenge() {
        let g = derive_generator("G");
        assert_ne!(challenge(&[&g], ""), challenge(&[&g], "https://twitter.com/jack"));
        assert_eq!(challenge(&[&g], "a"), challenge(&[&g], "a"));
    }
}
