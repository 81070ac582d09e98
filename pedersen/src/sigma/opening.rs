#![allow(non_snake_case)]

use ark_std::{end_timer, start_timer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec::{decode_point, decode_scalar, encode_point, encode_scalar};
use crate::commitment::{commit_with, scalar_mul, Commitment};
use crate::random::RandomSource;
use crate::sigma::{transcript::challenge, NonInteractiveProof};
use crate::{CodecError, Point, Scalar};

/// Proof of knowledge of the opening `(x, r)` of `Z = r*H + x*G`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OpeningProof {
    pub G: Point,
    pub H: Point,
    pub Z: Point,
    pub T: Point,
    pub s1: Scalar,
    pub s2: Scalar,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct OpeningProofRecord {
    pub G: String,
    pub H: String,
    pub Z: String,
    pub T: String,
    pub s1: String,
    pub s2: String,
}

impl Commitment {
    /// Schnorr-style proof that we know the opening of this commitment:
    /// P->V: T = t2*H + t1*G
    /// c = sha256(Z.x/Z.y/T.x/T.y/binding)
    /// P->V: s1 = t1 + c*x, s2 = t2 + c*r
    ///
    /// A non-empty `binding` makes the proof check out only for a verifier
    /// holding the same string.
    pub fn prove_opening<S: RandomSource>(&self, binding: &str, source: &mut S) -> OpeningProof {
        let start = start_timer!(|| "proving knowledge of opening...");
        let params = self.params();

        let t1 = params.random_scalar(source);
        let t2 = params.random_scalar(source);
        let T = commit_with(&params.g, &params.h, &t1, &t2);

        let c = challenge(&[self.point(), &T], binding);

        let s1 = t1 + &c * self.x();
        let s2 = t2 + &c * self.r();

        end_timer!(start);
        OpeningProof {
            G: params.g,
            H: params.h,
            Z: *self.point(),
            T,
            s1,
            s2,
        }
    }
}

impl NonInteractiveProof for OpeningProof {
    type Record = OpeningProofRecord;

    /// Accept iff `s1*G + s2*H == T + c*Z`.
    fn verify(&self, binding: &str) -> bool {
        let start = start_timer!(|| "verifying knowledge of opening...");
        let c = challenge(&[&self.Z, &self.T], binding);

        let lhs = scalar_mul(&self.G, &self.s1) + scalar_mul(&self.H, &self.s2);
        let rhs = self.T + scalar_mul(&self.Z, &c);
        end_timer!(start);
        if lhs != rhs {
            debug!("opening proof rejected: s1*G + s2*H != T + c*Z");
            return false;
        }
        true
    }

    fn to_record(&self) -> OpeningProofRecord {
        OpeningProofRecord {
            G: encode_point(&self.G),
            H: encode_point(&self.H),
            Z: encode_point(&self.Z),
            T: encode_point(&self.T),
            s1: encode_scalar(&self.s1),
            s2: encode_scalar(&self.s2),
        }
    }

    fn from_record(record: &OpeningProofRecord) -> Result<Self, CodecError> {
        Ok(Self {
            G: decode_point(&record.G)?,
            H: decode_point(&record.H)?,
            Z: decode_point(&record.Z)?,
            T: decode_point(&record.T)?,
            s1: decode_scalar(&record.s1)?,
            s2: decode_scalar(&record.s2)?,
        })
    }
}

/// Verify an encoded opening proof under `binding` (empty for none).
pub fn verify_opening(record: &OpeningProofRecord, binding: &str) -> Result<bool, CodecError> {
    OpeningProof::verify_record(record, binding)
}
