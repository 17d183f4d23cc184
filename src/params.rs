//! Trusted setup: the powers-of-α reference string.

use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::{UniformRand, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{rand::Rng, vec::Vec};
use thiserror::Error;
use zeroize::Zeroize;

/// Input-validation errors for the prover-side operations.
#[derive(Debug, Error)]
pub enum VcError {
    #[error("message has {got} entries, expected {expected}")]
    MessageLength { got: usize, expected: usize },
    #[error("position {index} out of range for a vector of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("{proofs} proofs paired with {scalars} aggregation scalars")]
    AggregationMismatch { proofs: usize, scalars: usize },
}

/// Public parameters for vectors of length `n`.
///
/// `pp1[k-1] = g1^{α^k}` for `k ∈ [1, 2n]`, except that `pp1[n]` is the G1
/// identity: `g1^{α^{n+1}}` is deliberately absent from the reference
/// string, since anyone holding it could open a commitment to arbitrary
/// values. `pp2[k-1] = g2^{α^k}` for `k ∈ [1, n]`.
///
/// Both tables are immutable after construction and freely shareable
/// across threads.
#[derive(Clone, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct PublicParams<E: Pairing> {
    pp1: Vec<E::G1Affine>,
    pp2: Vec<E::G2Affine>,
}

impl<E: Pairing> PublicParams<E> {
    /// Run the trusted setup for vectors of length `n`.
    ///
    /// Samples the trapdoor α from `rng`, derives both parameter tables by
    /// walking the power ladder, and zeroizes α and every intermediate
    /// power before returning. `rng` must be a cryptographic source.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn setup<R: Rng>(n: usize, rng: &mut R) -> Self
    where
        E::ScalarField: Zeroize,
    {
        let mut alpha = E::ScalarField::rand(rng);
        let pp = Self::derive(n, &alpha);
        alpha.zeroize();
        pp
    }

    /// Build the parameters from a caller-held trapdoor.
    ///
    /// Intended for deterministic tests and for instantiating the scheme
    /// from a powers-of-tau ceremony. Anyone who knows `alpha` can forge
    /// openings, so a locally chosen trapdoor must never back a production
    /// deployment. The local copy of `alpha` is zeroized before returning.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn from_trapdoor(n: usize, mut alpha: E::ScalarField) -> Self
    where
        E::ScalarField: Zeroize,
    {
        let pp = Self::derive(n, &alpha);
        alpha.zeroize();
        pp
    }

    fn derive(n: usize, alpha: &E::ScalarField) -> Self
    where
        E::ScalarField: Zeroize,
    {
        assert!(n > 0, "vector length must be positive");
        let g1 = E::G1Affine::generator();
        let g2 = E::G2Affine::generator();

        let mut pp1 = Vec::with_capacity(2 * n);
        let mut pp2 = Vec::with_capacity(n);
        // α^k at the top of iteration k, maintained by one multiplication
        // per step
        let mut power = *alpha;
        for k in 1..=2 * n {
            if k == n + 1 {
                pp1.push(E::G1::zero());
            } else {
                pp1.push(g1 * power);
            }
            if k <= n {
                pp2.push(g2 * power);
            }
            power *= alpha;
        }
        power.zeroize();

        Self {
            pp1: E::G1::normalize_batch(&pp1),
            pp2: E::G2::normalize_batch(&pp2),
        }
    }

    /// Length of the vectors this reference string commits to.
    pub fn vector_len(&self) -> usize {
        self.pp2.len()
    }

    /// The G1 table `g1^{α^k}` for `k ∈ [1, 2n]`, identity at index `n`.
    pub fn g1_powers(&self) -> &[E::G1Affine] {
        &self.pp1
    }

    /// The G2 table `g2^{α^k}` for `k ∈ [1, n]`.
    pub fn g2_powers(&self) -> &[E::G2Affine] {
        &self.pp2
    }

    /// The `pp2` slot paired against the commitment when position `index`
    /// is checked. It holds `g2^{α^{n-index}}`, so the commitment's
    /// `α^{index+1}` term lands on `α^{n+1}` in GT (eq. (3) of the
    /// Pointproofs paper).
    pub(crate) fn complement_slot(&self, index: usize) -> usize {
        self.vector_len() - index - 1
    }

    /// The contiguous `pp1` window backing the opening of position `index`:
    /// `π_i` is the inner product of the message with
    /// `pp1[n-i .. 2n-i]` (eq. (2) of the Pointproofs paper). The identity
    /// at `pp1[n]` swallows the `j = i` term, so the forbidden power
    /// `g1^{α^{n+1}}` never enters the sum.
    pub(crate) fn opening_window(&self, index: usize) -> &[E::G1Affine] {
        let n = self.vector_len();
        &self.pp1[n - index..2 * n - index]
    }
}
