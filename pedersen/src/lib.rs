//! Pedersen commitments over secp256r1 with two Fiat-Shamir sigma proofs:
//! knowledge of an opening, and equality of the values hidden by two
//! commitments. Generators can be derived from public seeds
//! ("nothing up my sleeve") so nobody knows a relation between them.
//!
//! Scalars are plain non-negative integers and are never reduced modulo
//! the group order; responses are computed with unreduced big-integer
//! arithmetic.

pub mod codec;
pub mod commitment;
mod errors;
pub mod nums;
pub mod random;
pub mod sigma;

pub use crate::commitment::{Commitment, CommitmentRecord, Params};
pub use crate::errors::*;
pub use crate::random::RandomSource;
pub use crate::sigma::equality::{verify_equality, EqualityProof, EqualityProofRecord};
pub use crate::sigma::opening::{verify_opening, OpeningProof, OpeningProofRecord};
pub use crate::sigma::NonInteractiveProof;

/// A point on secp256r1.
pub type Point = ark_secp256r1::Projective;

/// An arbitrary-precision non-negative integer.
pub type Scalar = num_bigint::BigUint;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_scenario_opening() {
        let mut rng = StdRng::seed_from_u64(0);
        let params = Params::random(&mut rng);
        let c1 = Commitment::with_opening(&params, Scalar::from(123u32), Scalar::from(111u32));
        let proof = c1.prove_opening("", &mut rng).to_record();
        assert!(verify_opening(&proof, "").unwrap());
    }

    #[test]
    fn test_scenario_bound_opening() {
        let mut rng = StdRng::seed_from_u64(0);
        let params = Params::random(&mut rng);
        let c1 = Commitment::with_opening(&params, Scalar::from(123u32), Scalar::from(111u32));
        let proof = c1.prove_opening("https://twitter.com/jack", &mut rng).to_record();
        assert!(verify_opening(&proof, "https://twitter.com/jack").unwrap());
        assert!(!verify_opening(&proof, "").unwrap());
    }

    #[test]
    fn test_scenario_equality() {
        let mut rng = StdRng::seed_from_u64(0);
        let c1 = Commitment::commit(&Params::random(&mut rng), Some(Scalar::from(222u32)), None, &mut rng);
        let c2 = Commitment::commit(&Params::random(&mut rng), Some(Scalar::from(222u32)), None, &mut rng);
        assert!(verify_equality(&c1.prove_equality(&c2, "", &mut rng).to_record(), "").unwrap());

        let c2 = Commitment::commit(&Params::random(&mut rng), Some(Scalar::from(333u32)), None, &mut rng);
        assert!(!verify_equality(&c1.prove_equality(&c2, "", &mut rng).to_record(), "").unwrap());
    }

    #[test]
    fn test_private_record_to_public_proof() {
        let mut rng = StdRng::seed_from_u64(0);
        let params = Params::from_seeds("G", "H");
        let record = Commitment::commit(&params, None, None, &mut rng).to_record();
        let restored = Commitment::from_record(&record).unwrap();
        let proof = restored.prove_opening("", &mut rng);
        assert!(proof.verify(""));
    }
}
