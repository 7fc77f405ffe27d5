use gf2m_util::{bits_u64, ceil_div_usize};
use rand::RngCore;

pub const WORD_BITS: usize = 64;

/// A packed polynomial over GF(2).
///
/// Bit `i` of the vector is the coefficient of `x^i`; limbs are stored
/// least-significant first. This is the working representation inside
/// multiplication, reduction and inversion: double-width accumulators, comb
/// tables and Euclidean registers are all `LimbVec`s of the appropriate
/// length. Field element types wrap a fixed-size copy of the low limbs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LimbVec(pub Vec<u64>);

impl LimbVec {
    pub fn zero(len: usize) -> Self {
        Self(vec![0; len])
    }

    pub fn from_slice(limbs: &[u64]) -> Self {
        Self(limbs.to_vec())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    pub fn is_one(&self) -> bool {
        self.0[0] == 1 && self.0[1..].iter().all(|&w| w == 0)
    }

    #[inline]
    pub fn get_bit(&self, i: usize) -> bool {
        (self.0[i / WORD_BITS] >> (i % WORD_BITS)) & 1 != 0
    }

    #[inline]
    pub fn flip_bit(&mut self, i: usize) {
        self.0[i / WORD_BITS] ^= 1 << (i % WORD_BITS);
    }

    /// One plus the position of the highest set bit, or 0 for the zero
    /// polynomial. Equivalently, one plus the degree.
    pub fn bit_length(&self) -> usize {
        for (j, &w) in self.0.iter().enumerate().rev() {
            if w != 0 {
                return j * WORD_BITS + bits_u64(w);
            }
        }
        0
    }

    /// In-place multiplication by `x^k`. Bits shifted past the top limb are
    /// discarded; the caller ensures the vector is long enough for them not
    /// to matter.
    pub fn left_shift(&mut self, k: usize) {
        let n = self.0.len();
        let (s, t) = (k / WORD_BITS, k % WORD_BITS);
        if s >= n {
            self.0.fill(0);
            return;
        }
        if t == 0 {
            for i in (s..n).rev() {
                self.0[i] = self.0[i - s];
            }
        } else {
            for i in (s..n).rev() {
                let lo = self.0[i - s] << t;
                let carry = if i > s {
                    self.0[i - s - 1] >> (WORD_BITS - t)
                } else {
                    0
                };
                self.0[i] = lo | carry;
            }
        }
        self.0[..s].fill(0);
    }

    /// Limbwise XOR; the operands must have equal length.
    pub fn xor_assign(&mut self, rhs: &Self) {
        debug_assert_eq!(self.len(), rhs.len());
        for (a, &b) in self.0.iter_mut().zip(&rhs.0) {
            *a ^= b;
        }
    }

    /// `self ^= rhs * x^k`.
    ///
    /// Each limb of `rhs` is split into a low piece XORed into limb
    /// `k/64 + i` and, when `k` is not limb-aligned, a high piece XORed into
    /// the limb above. Set bits of the shifted operand must land inside
    /// `self`; zero limbs falling past the top are skipped.
    pub fn shifted_xor(&mut self, rhs: &Self, k: usize) {
        let n = self.len();
        let (s, t) = (k / WORD_BITS, k % WORD_BITS);
        for (i, &w) in rhs.0.iter().enumerate() {
            if w == 0 {
                continue;
            }
            let j = s + i;
            if j < n {
                self.0[j] ^= w << t;
            } else {
                debug_assert_eq!(w << t, 0, "set bits shifted out of range");
            }
            if t != 0 {
                let hi = w >> (WORD_BITS - t);
                if hi != 0 {
                    debug_assert!(j + 1 < n, "set bits shifted out of range");
                    self.0[j + 1] ^= hi;
                }
            }
        }
    }

    /// `self ^= w * x^k` for a single word; touches at most two limbs.
    #[inline]
    pub fn shifted_xor_word(&mut self, w: u64, k: usize) {
        let (s, t) = (k / WORD_BITS, k % WORD_BITS);
        self.0[s] ^= w << t;
        if t != 0 {
            let hi = w >> (WORD_BITS - t);
            if hi != 0 {
                self.0[s + 1] ^= hi;
            }
        }
    }

    /// `self ^= r * x^k` for a 128-bit constant; touches at most three limbs.
    pub fn shifted_xor_u128(&mut self, r: u128, k: usize) {
        let (s, t) = (k / WORD_BITS, k % WORD_BITS);
        let (r_lo, r_hi) = (r as u64, (r >> WORD_BITS) as u64);
        let words = if t == 0 {
            [r_lo, r_hi, 0]
        } else {
            [
                r_lo << t,
                (r_lo >> (WORD_BITS - t)) | (r_hi << t),
                r_hi >> (WORD_BITS - t),
            ]
        };
        for (i, w) in words.into_iter().enumerate() {
            if w != 0 {
                self.0[s + i] ^= w;
            }
        }
    }

    /// The `n`-bit field starting at bit `i`, packed into a word.
    /// `1 <= n <= 64`; bits beyond the top of the vector read as zero.
    pub fn get_bits(&self, i: usize, n: usize) -> u64 {
        debug_assert!((1..=WORD_BITS).contains(&n));
        let (j, t) = (i / WORD_BITS, i % WORD_BITS);
        let mut bits = self.0[j] >> t;
        if t != 0 && t + n > WORD_BITS && j + 1 < self.0.len() {
            bits |= self.0[j + 1] << (WORD_BITS - t);
        }
        if n < WORD_BITS {
            bits &= (1 << n) - 1;
        }
        bits
    }

    /// Copy with the limb count changed, zero-extending on growth.
    /// Truncation silently drops high limbs; the caller is responsible for
    /// knowing they are zero.
    pub fn resized(&self, len: usize) -> Self {
        let mut limbs = self.0.clone();
        limbs.resize(len, 0);
        Self(limbs)
    }

    /// Draws `len` uniform limbs from `rng`, then clears every bit at
    /// position `degree` and above.
    pub fn sample<R: RngCore + ?Sized>(rng: &mut R, len: usize, degree: usize) -> Self {
        debug_assert!(degree <= len * WORD_BITS);
        let mut limbs = vec![0u64; len];
        for w in &mut limbs {
            *w = rng.next_u64();
        }
        let t = degree % WORD_BITS;
        if t != 0 {
            limbs[degree / WORD_BITS] &= (1 << t) - 1;
        }
        for w in &mut limbs[ceil_div_usize(degree, WORD_BITS)..] {
            *w = 0;
        }
        Self(limbs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_access() {
        let mut v = LimbVec::zero(3);
        v.flip_bit(0);
        v.flip_bit(63);
        v.flip_bit(64);
        v.flip_bit(150);
        assert!(v.get_bit(0) && v.get_bit(63) && v.get_bit(64) && v.get_bit(150));
        assert!(!v.get_bit(1) && !v.get_bit(149));
        v.flip_bit(150);
        assert!(!v.get_bit(150));
    }

    #[test]
    fn bit_length_scans_from_the_top() {
        assert_eq!(LimbVec::zero(4).bit_length(), 0);
        let mut v = LimbVec::zero(4);
        v.flip_bit(0);
        assert_eq!(v.bit_length(), 1);
        v.flip_bit(130);
        assert_eq!(v.bit_length(), 131);
    }

    #[test]
    fn left_shift_carries_across_limbs() {
        let mut v = LimbVec::from_slice(&[1 << 63, 0b101, 0]);
        v.left_shift(1);
        assert_eq!(v.0, vec![0, 0b1011, 0]);

        let mut v = LimbVec::from_slice(&[0xab, 0, 0]);
        v.left_shift(68);
        assert_eq!(v.0, vec![0, 0xab << 4, 0]);

        let mut v = LimbVec::from_slice(&[1, 1, 1]);
        v.left_shift(200);
        assert!(v.is_zero());
    }

    #[test]
    fn shifted_xor_straddles_limbs() {
        let mut a = LimbVec::zero(3);
        let b = LimbVec::from_slice(&[u64::MAX]);
        a.shifted_xor(&b, 60);
        assert_eq!(a.0, vec![0xF << 60, u64::MAX >> 4, 0]);

        // limb-aligned offset skips the high piece
        let mut a = LimbVec::zero(3);
        a.shifted_xor(&b, 64);
        assert_eq!(a.0, vec![0, u64::MAX, 0]);
    }

    #[test]
    fn shifted_xor_word_matches_vector_version() {
        let mut a = LimbVec::zero(4);
        let mut b = LimbVec::zero(4);
        a.shifted_xor_word(0xdead_beef, 90);
        b.shifted_xor(&LimbVec::from_slice(&[0xdead_beef]), 90);
        assert_eq!(a, b);
    }

    #[test]
    fn shifted_xor_u128_spans_three_limbs() {
        let r = (1u128 << 87) | 1;
        let mut a = LimbVec::zero(4);
        a.shifted_xor_u128(r, 60);
        // bit 60 and bit 147
        assert_eq!(a.0, vec![1 << 60, 0, 1 << 19, 0]);
    }

    #[test]
    fn get_bits_extracts_windows() {
        let mut v = LimbVec::zero(2);
        v.0[0] = 0xfedc_ba98_7654_3210;
        v.0[1] = 0x0123;
        assert_eq!(v.get_bits(0, 4), 0);
        assert_eq!(v.get_bits(4, 4), 1);
        assert_eq!(v.get_bits(60, 8), 0x3f); // straddles the limb boundary
        assert_eq!(v.get_bits(64, 16), 0x0123);
        assert_eq!(v.get_bits(0, 64), 0xfedc_ba98_7654_3210);
    }

    #[test]
    fn resized_truncates_and_extends() {
        let v = LimbVec::from_slice(&[1, 2, 3]);
        assert_eq!(v.resized(5).0, vec![1, 2, 3, 0, 0]);
        assert_eq!(v.resized(2).0, vec![1, 2]);
    }

    #[test]
    fn sample_masks_the_top() {
        let mut rng = rand::rngs::OsRng;
        for _ in 0..8 {
            let v = LimbVec::sample(&mut rng, 3, 163);
            assert!(v.bit_length() <= 163);
            assert_eq!(v.0[2] >> 35, 0);
        }
    }
}
