//! Aggregatable vector commitments over pairing-friendly curves.
//!
//! This crate implements the Pointproofs commitment scheme: a committer
//! binds to a vector of `n` field elements with a single G1 element, opens
//! any position with a single G1 element, and aggregates openings (first
//! across positions of one commitment, then across many commitments) into
//! one G1 element that verifies with a number of pairings independent of
//! how many positions were opened.
//!
//! Architecture:
//! 1. `params`: trusted setup, the powers-of-α reference string with the
//!    binding hole at `pp1[n]`
//! 2. `commit`: commitment and single-position openings
//! 3. `aggregate`: linear combination of openings
//! 4. `verify`: the three pairing checks (single opening, same-commitment
//!    aggregate, cross-commitment aggregate)
//!
//! The engine is generic over the arkworks [`Pairing`](ark_ec::pairing::Pairing)
//! trait; tests instantiate it with BLS12-381. Aggregation scalars are
//! caller-supplied; derive them from a transcript hash over the
//! commitments and claimed entries.

pub mod aggregate;
pub mod commit;
pub mod params;
pub mod verify;

mod util;

pub use aggregate::aggregate_proofs;
pub use commit::{commit, open};
pub use params::{PublicParams, VcError};
pub use verify::{
    verify_cross_commitment, verify_same_commitment, verify_single, CommitmentOpenings,
};
