use ark_ec::{pairing::Pairing, VariableBaseMSM};
use ark_ff::PrimeField;
use ark_std::vec::Vec;

#[inline]
pub(crate) fn msm_g1<E: Pairing>(bases: &[E::G1Affine], scalars: &[E::ScalarField]) -> E::G1 {
    let scalars = scalars.iter().map(|s| s.into_bigint()).collect::<Vec<_>>();
    VariableBaseMSM::msm_bigint(bases, &scalars)
}

#[inline]
pub(crate) fn msm_g2<E: Pairing>(bases: &[E::G2Affine], scalars: &[E::ScalarField]) -> E::G2 {
    let scalars = scalars.iter().map(|s| s.into_bigint()).collect::<Vec<_>>();
    VariableBaseMSM::msm_bigint(bases, &scalars)
}
