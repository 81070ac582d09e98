use std::fmt;

use crate::codec::{decode_point, decode_scalar, encode_point, encode_scalar};
use crate::commitment::{commit_with, CommitmentRecord, Params};
use crate::random::RandomSource;
use crate::{CodecError, Point, Scalar};

/// Pedersen commitment `Z = r*H + x*G` to the secret `x`.
///
/// Only `Z` and the parameters are public. The opening `(x, r)` stays with
/// the committer and is used to prove statements about `Z`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Commitment {
    params: Params,
    x: Scalar,
    r: Scalar,
    z: Point,
}

impl Commitment {
    /// Commit to `x` with blinding `r`, drawing whichever of the two is
    /// missing from `source`.
    pub fn commit<S: RandomSource>(
        params: &Params,
        x: Option<Scalar>,
        r: Option<Scalar>,
        source: &mut S,
    ) -> Self {
        let x = x.unwrap_or_else(|| params.random_scalar(source));
        let r = r.unwrap_or_else(|| params.random_scalar(source));
        Self::with_opening(params, x, r)
    }

    /// Commit to a fully specified opening.
    pub fn with_opening(params: &Params, x: Scalar, r: Scalar) -> Self {
        let z = commit_with(&params.g, &params.h, &x, &r);
        Self {
            params: params.clone(),
            x,
            r,
            z,
        }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn x(&self) -> &Scalar {
        &self.x
    }

    pub fn r(&self) -> &Scalar {
        &self.r
    }

    /// The public commitment point `Z`.
    pub fn point(&self) -> &Point {
        &self.z
    }

    /// Check a claimed opening against `Z`.
    pub fn verify_opening(&self, x: &Scalar, r: &Scalar) -> bool {
        commit_with(&self.params.g, &self.params.h, x, r) == self.z
    }

    pub fn to_record(&self) -> CommitmentRecord {
        CommitmentRecord {
            G: encode_point(&self.params.g),
            H: encode_point(&self.params.h),
            x: encode_scalar(&self.x),
            r: encode_scalar(&self.r),
            Z: encode_point(&self.z),
        }
    }

    /// Rebuild a commitment from its private export. `Z` is recomputed and
    /// must agree with the recorded one.
    pub fn from_record(record: &CommitmentRecord) -> Result<Self, CodecError> {
        let params = Params::decode(&record.G, &record.H)?;
        let x = decode_scalar(&record.x)?;
        let r = decode_scalar(&record.r)?;
        let recorded_z = decode_point(&record.Z)?;
        let commitment = Self::with_opening(&params, x, r);
        if commitment.z != recorded_z {
            return Err(CodecError::CommitmentMismatch);
        }
        Ok(commitment)
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "G={} H={} x={} r={}",
            encode_point(&self.params.g),
            encode_point(&self.params.h),
            self.x,
            self.r
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use crate::commitment::scalar_mul;
    use crate::commitment::structs::BIT_WIDTH;
    use ark_ff::PrimeField;
    use ark_secp256r1::Fr;
    use ark_std::Zero;
    use num_bigint::BigUint;
    use num_traits::One;

    #[test]
    fn test_pedersen() {
        let mut rng = StdRng::seed_from_u64(0);
        let params = Params::random(&mut rng);

        let x = Scalar::from(114514u32);
        let r = Scalar::from(1919u32);
        let cm = Commitment::with_opening(&params, x.clone(), r.clone());

        assert_eq!(
            *cm.point(),
            scalar_mul(&params.h, &r) + scalar_mul(&params.g, &x)
        );
        assert!(cm.verify_opening(&x, &r));
        assert!(!cm.verify_opening(&r, &x));
    }

    #[test]
    fn test_binding_holds_for_random_openings() {
        let mut rng = StdRng::seed_from_u64(0);
        let params = Params::from_seeds("G", "H");
        for _ in 0..4 {
            let cm = Commitment::commit(&params, None, None, &mut rng);
            assert!(cm.x().bits() <= params.bit_width());
            assert!(cm.r().bits() <= params.bit_width());
            assert_eq!(
                *cm.point(),
                scalar_mul(&params.h, cm.r()) + scalar_mul(&params.g, cm.x())
            );
        }
    }

    #[test]
    fn test_params_width_and_seeded_source() {
        let params = Params::from_seeds("G", "H");
        assert_eq!(params.bit_width(), BIT_WIDTH);
        let decoded = Params::decode(&encode_point(&params.g), &encode_point(&params.h)).unwrap();
        assert_eq!(decoded.bit_width(), 256);

        let a = Commitment::commit(&params, None, None, &mut StdRng::seed_from_u64(7));
        let b = Commitment::commit(&params, None, None, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_commit_keeps_supplied_secret() {
        let mut rng = StdRng::seed_from_u64(0);
        let params = Params::random(&mut rng);
        let cm = Commitment::commit(&params, Some(Scalar::from(222u32)), None, &mut rng);
        assert_eq!(*cm.x(), Scalar::from(222u32));
        assert!(cm.verify_opening(cm.x(), cm.r()));

        let other = Commitment::commit(&params, Some(Scalar::from(222u32)), None, &mut rng);
        assert_ne!(cm.r(), other.r());
        assert_ne!(cm.point(), other.point());
    }

    #[test]
    fn test_unreduced_scalars() {
        let params = Params::from_seeds("G", "H");
        let order: BigUint = Fr::MODULUS.into();
        let x = Scalar::from(7u32);
        let r = Scalar::from(9u32);
        let wrapped = Commitment::with_opening(&params, &x + &order, &r + &order * 3u32);
        assert_eq!(
            wrapped.point(),
            Commitment::with_opening(&params, x, r).point()
        );
        assert!(scalar_mul(&params.g, &order).is_zero());
        assert_eq!(scalar_mul(&params.g, &BigUint::one()), params.g);
    }

    #[test]
    fn test_record_roundtrip() {
        let mut rng = StdRng::seed_from_u64(0);
        let params = Params::random(&mut rng);
        let cm = Commitment::commit(&params, None, None, &mut rng);

        let record = cm.to_record();
        assert_eq!(Commitment::from_record(&record).unwrap(), cm);

        let json = serde_json::to_value(&record).unwrap();
        for key in ["G", "H", "x", "r", "Z"] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn test_record_rejects_wrong_point() {
        let mut rng = StdRng::seed_from_u64(0);
        let params = Params::random(&mut rng);
        let cm = Commitment::with_opening(&params, Scalar::from(1u32), Scalar::from(2u32));
        let mut record = cm.to_record();
        record.Z = encode_point(&params.g);
        assert_eq!(
            Commitment::from_record(&record),
            Err(CodecError::CommitmentMismatch)
        );

        record.x = "0".to_string();
        assert!(matches!(
            Commitment::from_record(&record),
            Err(CodecError::Format(_))
        ));
    }

    #[test]
    fn test_display_shows_opening() {
        let params = Params::from_seeds("G", "H");
        let cm = Commitment::with_opening(&params, Scalar::from(123u32), Scalar::from(111u32));
        let shown = cm.to_string();
        assert!(shown.contains("x=123"));
        assert!(shown.contains("r=111"));
        assert!(shown.starts_with(&format!("G={}", encode_point(&params.g))));
    }
}
