use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use fetch::Fetcher;
use num_bigint::BigUint;
use pedersen::nums::derive_generator_encoded;
use pedersen::{Commitment, CommitmentRecord, NonInteractiveProof, Params, RandomSource};
use tracing::{info, warn};

/// Codec-encoded NUMS point for `seed`.
pub fn nums(seed: &str) -> String {
    derive_generator_encoded(seed)
}

/// A fresh commitment under `params`, as its private JSON record.
pub fn commit<S: RandomSource>(params: &Params, x: Option<BigUint>, source: &mut S) -> Result<String> {
    let commitment = Commitment::commit(params, x, None, source);
    Ok(serde_json::to_string_pretty(&commitment.to_record())?)
}

pub fn read_commitment(path: &Path) -> Result<Commitment> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading commitment {}", path.display()))?;
    let record: CommitmentRecord = serde_json::from_str(&text)
        .with_context(|| format!("parsing commitment {}", path.display()))?;
    Commitment::from_record(&record)
        .with_context(|| format!("decoding commitment {}", path.display()))
}

pub fn prove_opening<S: RandomSource>(path: &Path, binding: &str, source: &mut S) -> Result<String> {
    let commitment = read_commitment(path)?;
    let proof = commitment.prove_opening(binding, source);
    Ok(serde_json::to_string_pretty(&proof.to_record())?)
}

pub fn prove_equality<S: RandomSource>(
    left: &Path,
    right: &Path,
    binding: &str,
    source: &mut S,
) -> Result<String> {
    let left = read_commitment(left)?;
    let right = read_commitment(right)?;
    if left.x() != right.x() {
        warn!("commitments hide different values, the proof will not verify");
    }
    let proof = left.prove_equality(&right, binding, source);
    Ok(serde_json::to_string_pretty(&proof.to_record())?)
}

/// Fetch a proof record from `uri` and verify it. Undecodable input is an
/// error, a proof that does not check out is `Ok(false)`.
pub fn verify<P: NonInteractiveProof>(fetcher: &Fetcher, uri: &str, binding: &str) -> Result<bool> {
    let text = fetcher
        .fetch(uri)
        .with_context(|| format!("fetching {uri}"))?;
    let record: P::Record =
        serde_json::from_str(&text).with_context(|| format!("parsing proof from {uri}"))?;
    let valid = P::verify_record(&record, binding).with_context(|| format!("decoding proof from {uri}"))?;
    info!(uri, valid, "verified proof");
    Ok(valid)
}
