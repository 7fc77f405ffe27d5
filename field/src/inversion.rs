use crate::limbs::LimbVec;
use crate::types::BinaryField;

/// Inversion by the extended Euclidean algorithm on binary polynomials
/// (Guide to Elliptic Curve Cryptography, algorithm 2.48).
///
/// Maintains g1·a ≡ u and g2·a ≡ v (mod f) while the degrees of u and v
/// shrink; when u reaches 1, g1 is the inverse. The registers carry one limb of headroom
/// because v starts as the full reduction polynomial, whose x^D term does not
/// fit in field width; g1 and g2 stay below degree D throughout, an invariant
/// of the algorithm.
pub(crate) fn try_inverse<F: BinaryField>(a: &F) -> Option<F> {
    if a.is_zero() {
        return None;
    }

    let l = F::LIMBS;
    let mut u = a.to_limb_vec().resized(l + 1);
    let mut v = LimbVec::zero(l + 1);
    v.shifted_xor_u128(F::REDUCTION, 0);
    v.flip_bit(F::DEGREE);
    let mut g1 = LimbVec::zero(l + 1);
    g1.flip_bit(0);
    let mut g2 = LimbVec::zero(l + 1);

    while !u.is_one() {
        let mut j = u.bit_length() as isize - v.bit_length() as isize;
        if j < 0 {
            std::mem::swap(&mut u, &mut v);
            std::mem::swap(&mut g1, &mut g2);
            j = -j;
        }
        let j = j as usize;
        u.shifted_xor(&v, j);
        g1.shifted_xor(&g2, j);
    }

    Some(F::from_limb_slice(&g1.resized(l).0))
}
