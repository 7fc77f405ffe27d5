//! Carryless polynomial multiplication.
//!
//! All variants share one contract: given reduced a and b, return the
//! canonical representative of a·b mod f(x). They differ only in how the
//! double-width product is accumulated, and are separate entry points rather
//! than a runtime-dispatched strategy so that call sites and benchmarks pick
//! one statically. [`mul`] is the measured default.

use crate::limbs::{LimbVec, WORD_BITS};
use crate::reduce::reduce;
use crate::square::square;
use crate::types::BinaryField;

/// Window width of the default comb multiplier. Four was the fastest choice
/// across the supported fields on x86-64.
const COMB_WINDOW: usize = 4;

/// Field multiplication with the default strategy: windowed left-to-right
/// comb, with squares routed to the dedicated squaring path.
pub fn mul<F: BinaryField>(a: &F, b: &F) -> F {
    if a == b {
        return square(a);
    }
    mul_comb_windowed(a, b)
}

/// Windowed left-to-right comb multiplication (Guide to Elliptic Curve
/// Cryptography, algorithm 2.36).
///
/// Precomputes b·u for every polynomial u of degree < 4, then consumes one
/// window of every limb of `a` per pass, shifting the accumulator four bits
/// between passes. Each pass adds Σ_j table[a_{j,k}]·x^(64j), so after the
/// final pass the accumulator holds Σ_i a_i·b·x^i.
pub fn mul_comb_windowed<F: BinaryField>(a: &F, b: &F) -> F {
    let l = F::LIMBS;
    let av = a.to_limb_vec();
    let bv = b.to_limb_vec();

    // table[u] = b(x) · u(x); one limb of headroom for the degree-3 shifts.
    let mut table = Vec::with_capacity(1 << COMB_WINDOW);
    table.push(LimbVec::zero(l + 1));
    for u in 1..1 << COMB_WINDOW {
        let mut entry = table[u >> 1].clone();
        entry.left_shift(1);
        if u & 1 != 0 {
            entry.shifted_xor(&bv, 0);
        }
        table.push(entry);
    }

    let mut c = LimbVec::zero(2 * l);
    for k in (0..WORD_BITS / COMB_WINDOW).rev() {
        for j in 0..l {
            let u = av.get_bits(WORD_BITS * j + COMB_WINDOW * k, COMB_WINDOW);
            c.shifted_xor(&table[u as usize], WORD_BITS * j);
        }
        if k != 0 {
            c.left_shift(COMB_WINDOW);
        }
    }
    reduce(c)
}

/// Schoolbook right-to-left shift-and-add: one shifted XOR of `b` into the
/// accumulator per set bit of `a`, reduced once at the end.
pub fn mul_shift_and_add<F: BinaryField>(a: &F, b: &F) -> F {
    let bv = b.to_limb_vec();
    let mut c = LimbVec::zero(2 * F::LIMBS);
    for (j, &w) in a.as_limbs().iter().enumerate() {
        let mut w = w;
        while w != 0 {
            c.shifted_xor(&bv, j * WORD_BITS + w.trailing_zeros() as usize);
            w &= w - 1;
        }
    }
    reduce(c)
}

/// Right-to-left comb multiplication (GtECC algorithm 2.34): scans bit k of
/// every limb of `a` per pass, shifting a copy of `b` one bit between passes.
pub fn mul_comb_rtl<F: BinaryField>(a: &F, b: &F) -> F {
    let l = F::LIMBS;
    let a_limbs = a.as_limbs();
    let mut shifted = b.to_limb_vec().resized(l + 1);
    let mut c = LimbVec::zero(2 * l);
    for k in 0..WORD_BITS {
        for j in 0..l {
            if (a_limbs[j] >> k) & 1 != 0 {
                c.shifted_xor(&shifted, j * WORD_BITS);
            }
        }
        if k + 1 != WORD_BITS {
            shifted.left_shift(1);
        }
    }
    reduce(c)
}

/// Left-to-right comb multiplication (GtECC algorithm 2.35): the windowed
/// variant with a one-bit window, shifting the accumulator instead of `b`.
pub fn mul_comb_ltr<F: BinaryField>(a: &F, b: &F) -> F {
    let l = F::LIMBS;
    let a_limbs = a.as_limbs();
    let bv = b.to_limb_vec();
    let mut c = LimbVec::zero(2 * l);
    for k in (0..WORD_BITS).rev() {
        for j in 0..l {
            if (a_limbs[j] >> k) & 1 != 0 {
                c.shifted_xor(&bv, j * WORD_BITS);
            }
        }
        if k != 0 {
            c.left_shift(1);
        }
    }
    reduce(c)
}

/// Shift-and-add with the reduction folded into the scan.
///
/// Keeps b·x^i reduced at every step, so the accumulator never exceeds field
/// width and no final reduction pass is needed.
pub fn mul_interleaved<F: BinaryField>(a: &F, b: &F) -> F {
    let d = F::DEGREE;
    let av = a.to_limb_vec();
    let mut shifted = b.to_limb_vec();
    let mut c = LimbVec::zero(F::LIMBS);
    for i in 0..d {
        if av.get_bit(i) {
            c.xor_assign(&shifted);
        }
        if i + 1 != d {
            shifted.left_shift(1);
            if shifted.get_bit(d) {
                shifted.flip_bit(d);
                shifted.shifted_xor_u128(F::REDUCTION, 0);
            }
        }
    }
    F::from_limb_slice(&c.0)
}

/// Partitions the set bits of `a` across rayon workers. Each chunk accumulates
/// into its own double-width register; the registers are XOR-merged (order is
/// irrelevant) and reduced once.
#[cfg(feature = "parallel")]
pub fn mul_parallel<F: BinaryField>(a: &F, b: &F) -> F {
    use rayon::prelude::*;

    let l = F::LIMBS;
    let av = a.to_limb_vec();
    let bv = b.to_limb_vec();
    let bits: Vec<usize> = (0..F::DEGREE).filter(|&i| av.get_bit(i)).collect();
    let chunk_len =
        gf2m_util::ceil_div_usize(bits.len().max(1), rayon::current_num_threads().max(1));
    let c = bits
        .par_chunks(chunk_len)
        .map(|chunk| {
            let mut acc = LimbVec::zero(2 * l);
            for &i in chunk {
                acc.shifted_xor(&bv, i);
            }
            acc
        })
        .reduce(
            || LimbVec::zero(2 * l),
            |mut x, y| {
                x.xor_assign(&y);
                x
            },
        );
    reduce(c)
}
