//! Commitment and single-position openings.

use ark_ec::{pairing::Pairing, CurveGroup};

use crate::params::{PublicParams, VcError};
use crate::util::msm_g1;

/// Commit to `message`: `C = Σ pp1[i]·m[i]`, one G1 element binding the
/// caller to all `n` entries at once.
///
/// Entries are field elements and therefore canonical by construction;
/// the only rejected input is a vector of the wrong length.
pub fn commit<E: Pairing>(
    pp: &PublicParams<E>,
    message: &[E::ScalarField],
) -> Result<E::G1Affine, VcError> {
    let n = pp.vector_len();
    if message.len() != n {
        return Err(VcError::MessageLength {
            got: message.len(),
            expected: n,
        });
    }
    Ok(msm_g1::<E>(&pp.g1_powers()[..n], message).into_affine())
}

/// Open position `index`: `π_i = Σ_{j≠i} pp1[n−i+j]·m[j]`.
///
/// Deterministic in `(pp, message, index)`. Computed as a single MSM over
/// the opening window; see [`PublicParams`] for why no skip logic is
/// needed at `j = i`.
pub fn open<E: Pairing>(
    pp: &PublicParams<E>,
    message: &[E::ScalarField],
    index: usize,
) -> Result<E::G1Affine, VcError> {
    let n = pp.vector_len();
    if message.len() != n {
        return Err(VcError::MessageLength {
            got: message.len(),
            expected: n,
        });
    }
    if index >= n {
        return Err(VcError::IndexOutOfRange { index, len: n });
    }
    Ok(msm_g1::<E>(pp.opening_window(index), message).into_affine())
}
