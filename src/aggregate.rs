//! Linear combination of openings.

use ark_ec::{pairing::Pairing, CurveGroup};

use crate::params::VcError;
use crate::util::msm_g1;

/// Combine openings into one G1 element: `π̂ = Σ t_l·π_l`.
///
/// The proofs may come from one commitment or from several; the matching
/// verifier is [`verify_same_commitment`](crate::verify_same_commitment)
/// or [`verify_cross_commitment`](crate::verify_cross_commitment)
/// respectively, and it must be handed the same scalars.
pub fn aggregate_proofs<E: Pairing>(
    proofs: &[E::G1Affine],
    scalars: &[E::ScalarField],
) -> Result<E::G1Affine, VcError> {
    if proofs.len() != scalars.len() {
        return Err(VcError::AggregationMismatch {
            proofs: proofs.len(),
            scalars: scalars.len(),
        });
    }
    Ok(msm_g1::<E>(proofs, scalars).into_affine())
}
