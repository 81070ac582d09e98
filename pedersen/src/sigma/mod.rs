use serde::{de::DeserializeOwned, Serialize};

use crate::CodecError;

pub mod equality;
pub mod opening;
pub mod transcript;

/// A sigma protocol made non-interactive with Fiat-Shamir.
///
/// Proofs are self-contained: everything the verifier needs except the
/// optional binding string travels in the proof and its wire record.
pub trait NonInteractiveProof: Sized {
    /// wire format
    type Record: Serialize + DeserializeOwned;

    /// Check the proof equations under `binding`.
    fn verify(&self, binding: &str) -> bool;

    fn to_record(&self) -> Self::Record;

    fn from_record(record: &Self::Record) -> Result<Self, CodecError>;

    /// Decode and verify. Malformed records are errors; a record that
    /// decodes but fails the equations is `Ok(false)`.
    fn verify_record(record: &Self::Record, binding: &str) -> Result<bool, CodecError> {
        Ok(Self::from_record(record)?.verify(binding))
    }
}
