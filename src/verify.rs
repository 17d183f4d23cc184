//! The three pairing checks.
//!
//! Each verifier evaluates its equation as a single multi-pairing against
//! the GT identity, paying one final exponentiation regardless of how many
//! slots the product has. A failed check returns `false` with no
//! indication of which factor broke; malformed call shapes (mismatched
//! slice lengths, out-of-range positions) are caller bugs and panic.

use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_std::{vec::Vec, Zero};

use crate::params::PublicParams;
use crate::util::msm_g2;

/// Claims about one commitment inside a cross-commitment batch: the opened
/// positions, the entries claimed there, and the inner aggregation
/// scalars. The three vectors run in lockstep.
#[derive(Clone, Debug)]
pub struct CommitmentOpenings<E: Pairing> {
    pub indices: Vec<usize>,
    pub entries: Vec<E::ScalarField>,
    pub scalars: Vec<E::ScalarField>,
}

/// Check a single opening of position `index`:
///
/// `e(C, pp2[n−i−1]) == e(π, g2) · e(pp1[0]·m_i, pp2[n−1])`
///
/// The right-hand factor equals `gT^{α^{n+1}·m_i}`; expanding `C` on the
/// left, every cross term cancels against `e(π, g2)` and only the claimed
/// entry survives. The entry term is scaled into a fresh group element;
/// the parameter tables are never written.
///
/// # Panics
/// Panics if `index` is outside the committed vector.
pub fn verify_single<E: Pairing>(
    pp: &PublicParams<E>,
    commitment: &E::G1Affine,
    entry: &E::ScalarField,
    proof: &E::G1Affine,
    index: usize,
) -> bool {
    let n = pp.vector_len();
    assert!(
        index < n,
        "position {index} out of range for a vector of length {n}"
    );

    let g1_terms = [
        *commitment,
        (-proof.into_group()).into_affine(),
        (-(pp.g1_powers()[0] * entry)).into_affine(),
    ];
    let g2_terms = [
        pp.g2_powers()[pp.complement_slot(index)],
        E::G2Affine::generator(),
        pp.g2_powers()[n - 1],
    ];
    E::multi_pairing(g1_terms, g2_terms).is_zero()
}

/// Check an aggregated opening of `k` positions of one commitment:
///
/// `e(C, Σ t_l·pp2[n−i_l−1]) == e(π̂, g2) · e(pp1[0]·S, pp2[n−1])`
///
/// with `S = Σ m_l·t_l`. Bilinearity collapses the `k` single checks into
/// one G2 MSM, one field sum and a three-slot multi-pairing.
///
/// # Panics
/// Panics if the slice lengths disagree or any index is out of range.
pub fn verify_same_commitment<E: Pairing>(
    pp: &PublicParams<E>,
    commitment: &E::G1Affine,
    proof: &E::G1Affine,
    indices: &[usize],
    entries: &[E::ScalarField],
    scalars: &[E::ScalarField],
) -> bool {
    let n = pp.vector_len();
    assert!(
        indices.len() == entries.len() && indices.len() == scalars.len(),
        "{} indices, {} entries, {} scalars",
        indices.len(),
        entries.len(),
        scalars.len()
    );

    let slots: Vec<E::G2Affine> = indices
        .iter()
        .map(|&index| {
            assert!(
                index < n,
                "position {index} out of range for a vector of length {n}"
            );
            pp.g2_powers()[pp.complement_slot(index)]
        })
        .collect();
    let accumulated = msm_g2::<E>(&slots, scalars).into_affine();

    let weighted_sum: E::ScalarField = entries.iter().zip(scalars).map(|(m, t)| *m * t).sum();

    let g1_terms = [
        *commitment,
        (-proof.into_group()).into_affine(),
        (-(pp.g1_powers()[0] * weighted_sum)).into_affine(),
    ];
    let g2_terms = [
        accumulated,
        E::G2Affine::generator(),
        pp.g2_powers()[n - 1],
    ];
    E::multi_pairing(g1_terms, g2_terms).is_zero()
}

/// Check one aggregated proof covering position subsets of `M`
/// commitments:
///
/// `Π_j e(C_j, Σ_l (t'_j·t_{j,l})·pp2[n−i_{j,l}−1]) == e(π̂, g2) · e(pp1[0]·S, pp2[n−1])`
///
/// with `S = Σ_j t'_j Σ_l m_{j,l}·t_{j,l}`. The outer scalar `t'_j` is
/// folded into each record's MSM scalars once, and the whole equation is
/// evaluated as a single multi-pairing over `M + 2` slots. Cost grows with
/// the number of commitments and opened positions, never with the vector
/// length.
///
/// # Panics
/// Panics when `commitments`, `openings` and `commitment_scalars` disagree
/// in length, when a record's own vectors do, or on an out-of-range index.
pub fn verify_cross_commitment<E: Pairing>(
    pp: &PublicParams<E>,
    commitments: &[E::G1Affine],
    proof: &E::G1Affine,
    openings: &[CommitmentOpenings<E>],
    commitment_scalars: &[E::ScalarField],
) -> bool {
    let n = pp.vector_len();
    assert!(
        commitments.len() == openings.len() && commitments.len() == commitment_scalars.len(),
        "{} commitments, {} opening records, {} outer scalars",
        commitments.len(),
        openings.len(),
        commitment_scalars.len()
    );

    let mut g1_terms: Vec<E::G1Affine> = Vec::with_capacity(commitments.len() + 2);
    let mut g2_accumulators: Vec<E::G2> = Vec::with_capacity(commitments.len());
    let mut weighted_sum = E::ScalarField::zero();

    for ((com, record), outer) in commitments.iter().zip(openings).zip(commitment_scalars) {
        assert!(
            record.indices.len() == record.entries.len()
                && record.indices.len() == record.scalars.len(),
            "{} indices, {} entries, {} scalars",
            record.indices.len(),
            record.entries.len(),
            record.scalars.len()
        );

        let slots: Vec<E::G2Affine> = record
            .indices
            .iter()
            .map(|&index| {
                assert!(
                    index < n,
                    "position {index} out of range for a vector of length {n}"
                );
                pp.g2_powers()[pp.complement_slot(index)]
            })
            .collect();
        let folded: Vec<E::ScalarField> = record.scalars.iter().map(|t| *t * outer).collect();

        g1_terms.push(*com);
        g2_accumulators.push(msm_g2::<E>(&slots, &folded));

        weighted_sum += record
            .entries
            .iter()
            .zip(&record.scalars)
            .map(|(m, t)| *m * t)
            .sum::<E::ScalarField>()
            * outer;
    }

    let mut g2_terms = E::G2::normalize_batch(&g2_accumulators);
    g1_terms.push((-proof.into_group()).into_affine());
    g2_terms.push(E::G2Affine::generator());
    g1_terms.push((-(pp.g1_powers()[0] * weighted_sum)).into_affine());
    g2_terms.push(pp.g2_powers()[n - 1]);

    E::multi_pairing(g1_terms, g2_terms).is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{aggregate_proofs, commit, open, params::PublicParams};
    use ark_bls12_381::{Bls12_381, Fr, G1Affine};
    use ark_ff::{One, UniformRand};
    use ark_std::{rand::Rng, test_rng};

    type E = Bls12_381;
    const N: usize = 16;

    fn random_message(rng: &mut impl Rng) -> Vec<Fr> {
        (0..N).map(|_| Fr::rand(rng)).collect()
    }

    fn committed_message(rng: &mut impl Rng) -> (PublicParams<E>, Vec<Fr>, G1Affine) {
        let pp = PublicParams::<E>::setup(N, rng);
        let message = random_message(rng);
        let com = commit(&pp, &message).unwrap();
        (pp, message, com)
    }

    #[test]
    fn honest_single_openings_verify() {
        let mut rng = test_rng();
        let (pp, message, com) = committed_message(&mut rng);
        for index in [0, 5, N - 1] {
            let proof = open(&pp, &message, index).unwrap();
            assert!(verify_single(&pp, &com, &message[index], &proof, index));
        }
    }

    #[test]
    fn wrong_entry_is_rejected() {
        let mut rng = test_rng();
        let (pp, message, com) = committed_message(&mut rng);
        let proof = open(&pp, &message, 5).unwrap();
        let forged = message[5] + Fr::one();
        assert!(!verify_single(&pp, &com, &forged, &proof, 5));
    }

    #[test]
    fn swapped_index_is_rejected() {
        // claim position 3's entry at position 9, with position 3's proof
        let mut rng = test_rng();
        let (pp, message, com) = committed_message(&mut rng);
        let proof = open(&pp, &message, 3).unwrap();
        assert!(!verify_single(&pp, &com, &message[3], &proof, 9));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn single_verification_panics_past_the_end() {
        let mut rng = test_rng();
        let (pp, message, com) = committed_message(&mut rng);
        let proof = open(&pp, &message, 0).unwrap();
        verify_single(&pp, &com, &message[0], &proof, N);
    }

    #[test]
    fn same_commitment_aggregation_verifies() {
        let mut rng = test_rng();
        let (pp, message, com) = committed_message(&mut rng);
        let indices = [2usize, 11, 7];
        let proofs: Vec<G1Affine> = indices
            .iter()
            .map(|&i| open(&pp, &message, i).unwrap())
            .collect();
        let entries: Vec<Fr> = indices.iter().map(|&i| message[i]).collect();
        let scalars: Vec<Fr> = (0..indices.len()).map(|_| Fr::rand(&mut rng)).collect();

        // every single opening passes, so the collapsed check must too
        for (l, &i) in indices.iter().enumerate() {
            assert!(verify_single(&pp, &com, &entries[l], &proofs[l], i));
        }
        let aggregated = aggregate_proofs::<E>(&proofs, &scalars).unwrap();
        assert!(verify_same_commitment(
            &pp, &com, &aggregated, &indices, &entries, &scalars
        ));
    }

    #[test]
    fn same_commitment_aggregation_rejects_a_flipped_entry() {
        let mut rng = test_rng();
        let (pp, message, com) = committed_message(&mut rng);
        let indices = [2usize, 11];
        let proofs: Vec<G1Affine> = indices
            .iter()
            .map(|&i| open(&pp, &message, i).unwrap())
            .collect();
        let scalars: Vec<Fr> = (0..indices.len()).map(|_| Fr::rand(&mut rng)).collect();
        let aggregated = aggregate_proofs::<E>(&proofs, &scalars).unwrap();

        let mut entries: Vec<Fr> = indices.iter().map(|&i| message[i]).collect();
        entries[1] += Fr::one();
        assert!(!verify_same_commitment(
            &pp, &com, &aggregated, &indices, &entries, &scalars
        ));
    }

    #[test]
    #[should_panic(expected = "indices")]
    fn same_commitment_aggregation_panics_on_shape_mismatch() {
        let mut rng = test_rng();
        let (pp, message, com) = committed_message(&mut rng);
        let proof = open(&pp, &message, 2).unwrap();
        verify_same_commitment(&pp, &com, &proof, &[2, 3], &[message[2]], &[Fr::one()]);
    }

    #[test]
    fn cross_commitment_aggregation_verifies_and_rejects() {
        let mut rng = test_rng();
        let pp = PublicParams::<E>::setup(N, &mut rng);
        let m1 = random_message(&mut rng);
        let m2 = random_message(&mut rng);
        let com1 = commit(&pp, &m1).unwrap();
        let com2 = commit(&pp, &m2).unwrap();

        let idx1 = vec![2usize, 11];
        let idx2 = vec![2usize, 11, 9];
        let t1: Vec<Fr> = (0..idx1.len()).map(|_| Fr::rand(&mut rng)).collect();
        let t2: Vec<Fr> = (0..idx2.len()).map(|_| Fr::rand(&mut rng)).collect();

        let proofs1: Vec<G1Affine> = idx1.iter().map(|&i| open(&pp, &m1, i).unwrap()).collect();
        let proofs2: Vec<G1Affine> = idx2.iter().map(|&i| open(&pp, &m2, i).unwrap()).collect();
        let agg1 = aggregate_proofs::<E>(&proofs1, &t1).unwrap();
        let agg2 = aggregate_proofs::<E>(&proofs2, &t2).unwrap();

        let outer: Vec<Fr> = (0..2).map(|_| Fr::rand(&mut rng)).collect();
        let combined = aggregate_proofs::<E>(&[agg1, agg2], &outer).unwrap();

        let mut openings = vec![
            CommitmentOpenings::<E> {
                indices: idx1,
                entries: vec![m1[2], m1[11]],
                scalars: t1,
            },
            CommitmentOpenings::<E> {
                indices: idx2,
                entries: vec![m2[2], m2[11], m2[9]],
                scalars: t2,
            },
        ];
        assert!(verify_cross_commitment(
            &pp,
            &[com1, com2],
            &combined,
            &openings,
            &outer
        ));

        // one flipped claim breaks the whole batch
        openings[1].entries[2] += Fr::one();
        assert!(!verify_cross_commitment(
            &pp,
            &[com1, com2],
            &combined,
            &openings,
            &outer
        ));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn cross_commitment_aggregation_checks_index_ranges() {
        let mut rng = test_rng();
        let (pp, message, com) = committed_message(&mut rng);
        let proof = open(&pp, &message, 2).unwrap();
        let openings = [CommitmentOpenings::<E> {
            indices: vec![N],
            entries: vec![Fr::one()],
            scalars: vec![Fr::one()],
        }];
        verify_cross_commitment(&pp, &[com], &proof, &openings, &[Fr::one()]);
    }
}
