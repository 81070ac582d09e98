//! Textual codec for scalars and curve points.
//!
//! Scalars are Base58 (Bitcoin alphabet) of their big-endian bytes; points
//! are the comma-joined encodings of their affine `x` and `y`.

use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_secp256r1::{Affine, Fq};
use ark_std::Zero;
use num_bigint::BigUint;

use crate::{CodecError, Point, Scalar};

/// The secp256r1 base field prime `p`.
pub fn field_modulus() -> BigUint {
    <Fq as PrimeField>::MODULUS.into()
}

pub fn encode_scalar(i: &Scalar) -> String {
    bs58::encode(i.to_bytes_be()).into_string()
}

pub fn decode_scalar(s: &str) -> Result<Scalar, CodecError> {
    if s.is_empty() {
        return Err(CodecError::Format("empty scalar".to_string()));
    }
    let bytes = bs58::decode(s)
        .into_vec()
        .map_err(|e| CodecError::Format(format!("scalar {s:?}: {e}")))?;
    Ok(BigUint::from_bytes_be(&bytes))
}

/// Affine coordinates of `p` as integers; the identity maps to `(0, 0)`.
pub fn point_coordinates(p: &Point) -> (BigUint, BigUint) {
    match p.into_affine().xy() {
        Some((x, y)) => ((*x).into(), (*y).into()),
        None => (BigUint::zero(), BigUint::zero()),
    }
}

/// Build a point from affine coordinates, rejecting anything off the curve.
pub fn point_from_coordinates(x: &BigUint, y: &BigUint) -> Result<Point, CodecError> {
    if x.is_zero() && y.is_zero() {
        return Ok(Point::zero());
    }
    let p = field_modulus();
    if *x >= p || *y >= p {
        return Err(CodecError::InvalidPoint(x.clone(), y.clone()));
    }
    let affine = Affine::new_unchecked(Fq::from(x.clone()), Fq::from(y.clone()));
    if !affine.is_on_curve() || !affine.is_in_correct_subgroup_assuming_on_curve() {
        return Err(CodecError::InvalidPoint(x.clone(), y.clone()));
    }
    Ok(affine.into_group())
}

pub fn encode_point(p: &Point) -> String {
    let (x, y) = point_coordinates(p);
    [encode_scalar(&x), encode_scalar(&y)].join(",")
}

pub fn decode_point(s: &str) -> Result<Point, CodecError> {
    let fields: Vec<&str> = s.split(',').collect();
    if fields.len() != 2 {
        return Err(CodecError::Format(format!(
            "point needs 2 comma separated coordinates, found {}",
            fields.len()
        )));
    }
    let x = decode_scalar(fields[0])?;
    let y = decode_scalar(fields[1])?;
    point_from_coordinates(&x, &y)
}
