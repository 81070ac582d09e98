#![allow(non_snake_case)]

use ark_std::{end_timer, start_timer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec::{decode_point, decode_scalar, encode_point, encode_scalar};
use crate::commitment::{commit_with, scalar_mul, Commitment};
use crate::random::RandomSource;
use crate::sigma::{transcript::challenge, NonInteractiveProof};
use crate::{CodecError, Point, Scalar};

/// Proof that `P = rP*PH + x*PG` and `Q = rQ*QH + x*QG` hide the same `x`.
/// The two sides may use different generator pairs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EqualityProof {
    pub PG: Point,
    pub PH: Point,
    pub P: Point,
    pub QG: Point,
    pub QH: Point,
    pub Q: Point,
    pub TP: Point,
    pub TQ: Point,
    pub s1: Scalar,
    pub s2: Scalar,
    pub s3: Scalar,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct EqualityProofRecord {
    pub PG: String,
    pub PH: String,
    pub P: String,
    pub QG: String,
    pub QH: String,
    pub Q: String,
    pub TP: String,
    pub TQ: String,
    pub s1: String,
    pub s2: String,
    pub s3: String,
}

impl Commitment {
    /// Prove that `self` and `other` commit to the same secret, without
    /// revealing it. `t1` masks the shared secret on both sides, `t2` and
    /// `t3` mask the two blinding factors:
    /// P->V: TP = t2*PH + t1*PG, TQ = t3*QH + t1*QG
    /// c = sha256(P.x/P.y/TP.x/TP.y/Q.x/Q.y/TQ.x/TQ.y/binding)
    /// P->V: s1 = t1 + c*x, s2 = t2 + c*rP, s3 = t3 + c*rQ
    ///
    /// The proof is produced even when the secrets differ; it just won't
    /// verify.
    pub fn prove_equality<S: RandomSource>(
        &self,
        other: &Commitment,
        binding: &str,
        source: &mut S,
    ) -> EqualityProof {
        let start = start_timer!(|| "proving equality of committed values...");
        let p = self.params();
        let q = other.params();

        let t1 = p.random_scalar(source);
        let t2 = p.random_scalar(source);
        let t3 = p.random_scalar(source);

        let TP = commit_with(&p.g, &p.h, &t1, &t2);
        let TQ = commit_with(&q.g, &q.h, &t1, &t3);

        let c = challenge(&[self.point(), &TP, other.point(), &TQ], binding);

        let s1 = t1 + &c * self.x();
        let s2 = t2 + &c * self.r();
        let s3 = t3 + &c * other.r();

        end_timer!(start);
        EqualityProof {
            PG: p.g,
            PH: p.h,
            P: *self.point(),
            QG: q.g,
            QH: q.h,
            Q: *other.point(),
            TP,
            TQ,
            s1,
            s2,
            s3,
        }
    }
}

impl NonInteractiveProof for EqualityProof {
    type Record = EqualityProofRecord;

    /// Accept iff both `s1*PG + s2*PH == TP + c*P` and
    /// `s1*QG + s3*QH == TQ + c*Q`.
    fn verify(&self, binding: &str) -> bool {
        let start = start_timer!(|| "verifying equality of committed values...");
        let c = challenge(&[&self.P, &self.TP, &self.Q, &self.TQ], binding);

        let p_check = scalar_mul(&self.PG, &self.s1) + scalar_mul(&self.PH, &self.s2)
            == self.TP + scalar_mul(&self.P, &c);
        let q_check = scalar_mul(&self.QG, &self.s1) + scalar_mul(&self.QH, &self.s3)
            == self.TQ + scalar_mul(&self.Q, &c);
        end_timer!(start);

        if !(p_check && q_check) {
            debug!(p_check, q_check, "equality proof rejected");
            return false;
        }
        true
    }

    fn to_record(&self) -> EqualityProofRecord {
        EqualityProofRecord {
            PG: encode_point(&self.PG),
            PH: encode_point(&self.PH),
            P: encode_point(&self.P),
            QG: encode_point(&self.QG),
            QH: encode_point(&self.QH),
            Q: encode_point(&self.Q),
            TP: encode_point(&self.TP),
            TQ: encode_point(&self.TQ),
            s1: encode_scalar(&self.s1),
            s2: encode_scalar(&self.s2),
            s3: encode_scalar(&self.s3),
        }
    }

    fn from_record(record: &EqualityProofRecord) -> Result<Self, CodecError> {
        Ok(Self {
            PG: decode_point(&record.PG)?,
            PH: decode_point(&record.PH)?,
            P: decode_point(&record.P)?,
            QG: decode_point(&record.QG)?,
            QH: decode_point(&record.QH)?,
            Q: decode_point(&record.Q)?,
            TP: decode_point(&record.TP)?,
            TQ: decode_point(&record.TQ)?,
            s1: decode_scalar(&record.s1)?,
            s2: decode_scalar(&record.s2)?,
            s3: decode_scalar(&record.s3)?,
        })
    }
}

/// Verify an encoded equality proof under `binding` (empty for none).
pub fn verify_equality(record: &EqualityProofRecord, binding: &str) -> Result<bool, CodecError> {
    EqualityProof::verify_record(record, binding)
}
