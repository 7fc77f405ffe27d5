use crate::limbs::{LimbVec, WORD_BITS};
use crate::types::BinaryField;

/// Reduces a polynomial of degree < 2D to its canonical representative modulo
/// f(x) = x^D + r(x), a word at a time.
///
/// Each limb above the modulus is folded in one shot: x^(64i) = r(x)·x^(64i-D),
/// so the limb is cleared and XORed back in at one offset per set bit of r.
/// Every supported r is a trinomial or pentanomial, so this is at most five
/// two-limb XORs per folded limb. Folding limb i only touches bits below 64i
/// (checked where the fields are defined), so a single top-down sweep plus one
/// partial fold of the top retained limb suffices.
pub fn reduce<F: BinaryField>(mut c: LimbVec) -> F {
    let l = F::LIMBS;
    let d = F::DEGREE;
    debug_assert!(c.len() >= l);

    for i in (l..c.len()).rev() {
        let w = c.0[i];
        if w == 0 {
            continue;
        }
        c.0[i] = 0;
        let k = i * WORD_BITS - d;
        let mut r = F::REDUCTION;
        while r != 0 {
            c.shifted_xor_word(w, k + r.trailing_zeros() as usize);
            r &= r - 1;
        }
    }

    // Bits D..64L-1 of the top retained limb.
    let t = d % WORD_BITS;
    if t != 0 {
        let w = c.0[l - 1] >> t;
        if w != 0 {
            c.0[l - 1] &= (1 << t) - 1;
            let mut r = F::REDUCTION;
            while r != 0 {
                c.shifted_xor_word(w, r.trailing_zeros() as usize);
                r &= r - 1;
            }
        }
    }

    F::from_limb_slice(&c.0[..l])
}

/// Bit-at-a-time reference reducer.
///
/// Clears each set bit at position i >= D by XORing in r(x)·x^(i-D), walking
/// from the top down. Observationally identical to [`reduce`] and kept as the
/// baseline it is checked against.
pub fn reduce_generic<F: BinaryField>(mut c: LimbVec) -> F {
    let d = F::DEGREE;
    for i in (d..c.len() * WORD_BITS).rev() {
        if c.get_bit(i) {
            c.flip_bit(i);
            c.shifted_xor_u128(F::REDUCTION, i - d);
        }
    }
    F::from_limb_slice(&c.0[..F::LIMBS])
}
