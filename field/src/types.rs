use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use anyhow::{ensure, Result};
use gf2m_util::{bits_u64, ceil_div_usize};
use itertools::Itertools;
use num::bigint::BigUint;
use rand::rngs::OsRng;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::limbs::{LimbVec, WORD_BITS};
use crate::ops::Square;

/// Sampling
pub trait Sample: Sized {
    /// Samples a single value using `rng`.
    fn sample<R>(rng: &mut R) -> Self
    where
        R: rand::RngCore + ?Sized;

    /// Samples a single value using the [`OsRng`].
    #[inline]
    fn rand() -> Self {
        Self::sample(&mut OsRng)
    }

    /// Samples a [`Vec`] of values of length `n` using [`OsRng`].
    #[inline]
    fn rand_vec(n: usize) -> Vec<Self> {
        (0..n).map(|_| Self::rand()).collect()
    }

    /// Samples an array of values of length `N` using [`OsRng`].
    #[inline]
    fn rand_array<const N: usize>() -> [Self; N] {
        Self::rand_vec(N)
            .try_into()
            .ok()
            .expect("This conversion can never fail.")
    }
}

/// A binary extension field GF(2^D).
///
/// Elements are polynomials over GF(2) of degree < `DEGREE`, packed into
/// 64-bit limbs with bit i holding the coefficient of x^i; arithmetic is
/// modulo f(x) = x^`DEGREE` + r(x), where `REDUCTION` encodes r. Values are
/// canonical: bits at positions >= `DEGREE` are zero in every element a
/// caller can observe, so equality and hashing are plain limb comparisons.
///
/// None of this arithmetic is constant-time: multiplication branches on the
/// bits of its operands and inversion on running bit lengths, so
/// secret-dependent inputs can leak through timing. Callers handling secrets
/// need a hardened implementation.
pub trait BinaryField:
    'static
    + Copy
    + Eq
    + Hash
    + Neg<Output = Self>
    + Add<Self, Output = Self>
    + AddAssign<Self>
    + Sum
    + Sub<Self, Output = Self>
    + SubAssign<Self>
    + Mul<Self, Output = Self>
    + MulAssign<Self>
    + Square
    + Product
    + Div<Self, Output = Self>
    + DivAssign<Self>
    + Debug
    + Default
    + Display
    + Sample
    + Send
    + Sync
    + Serialize
    + DeserializeOwned
{
    /// The field degree D.
    const DEGREE: usize;

    /// The low D bits of the reduction polynomial: r(x), where
    /// f(x) = x^D + r(x). Sparse (a trinomial or pentanomial) for every
    /// supported field, so a 128-bit constant rather than a limb vector.
    const REDUCTION: u128;

    /// Limbs per element.
    const LIMBS: usize = ceil_div_usize(Self::DEGREE, WORD_BITS);

    /// Octet length of the fixed-width string representation.
    const BYTES: usize = ceil_div_usize(Self::DEGREE, 8);

    const ZERO: Self;
    const ONE: Self;

    /// The order of the field, 2^D.
    fn order() -> BigUint {
        BigUint::from(1u32) << Self::DEGREE
    }

    /// The little-endian limbs of this element.
    fn as_limbs(&self) -> &[u64];

    /// Builds an element from exactly `LIMBS` little-endian limbs with bits
    /// at positions >= `DEGREE` clear.
    fn from_limb_slice(limbs: &[u64]) -> Self;

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    #[inline]
    fn is_one(&self) -> bool {
        *self == Self::ONE
    }

    fn to_limb_vec(&self) -> LimbVec {
        LimbVec::from_slice(self.as_limbs())
    }

    /// Returns the element with the bits of `n`. Any single word is already
    /// reduced, since every supported degree exceeds 64.
    fn from_canonical_u64(n: u64) -> Self {
        let mut limbs = vec![0u64; Self::LIMBS];
        limbs[0] = n;
        Self::from_limb_slice(&limbs)
    }

    /// Returns the element with the bits of `n mod 2^DEGREE`.
    fn from_noncanonical_u128(n: u128) -> Self {
        let mut limbs = vec![0u64; Self::LIMBS];
        limbs[0] = n as u64;
        limbs[1] = (n >> 64) as u64;
        mask_top_limb::<Self>(&mut limbs);
        Self::from_limb_slice(&limbs)
    }

    /// Returns the element with the bits of `n mod 2^DEGREE`
    /// (SEC 1, §2.3.9 read in reverse).
    fn from_noncanonical_biguint(n: BigUint) -> Self {
        let mut limbs: Vec<u64> = n
            .to_u64_digits()
            .into_iter()
            .pad_using(Self::LIMBS, |_| 0)
            .take(Self::LIMBS)
            .collect();
        mask_top_limb::<Self>(&mut limbs);
        Self::from_limb_slice(&limbs)
    }

    /// The element read as the unsigned integer Σ a_i·2^i (SEC 1, §2.3.9).
    fn to_canonical_biguint(&self) -> BigUint {
        let mut digits = Vec::with_capacity(2 * Self::LIMBS);
        for &w in self.as_limbs() {
            digits.push(w as u32);
            digits.push((w >> 32) as u32);
        }
        BigUint::from_slice(&digits)
    }

    /// Parses the fixed-width big-endian hex representation of an element
    /// (SEC 1, §2.3.6).
    ///
    /// Embedded whitespace is stripped, both hex cases are accepted, and
    /// anything other than exactly 2·`BYTES` hex digits is rejected. Bits at
    /// positions >= `DEGREE` in the top byte are dropped, matching the
    /// mod-2^D behavior of the integer constructors.
    fn from_hex_str(s: &str) -> Result<Self> {
        let s: String = s.split_whitespace().collect();
        ensure!(
            s.len() == 2 * Self::BYTES,
            "expected {} hex characters, got {}",
            2 * Self::BYTES,
            s.len()
        );
        ensure!(
            s.bytes().all(|b| b.is_ascii_hexdigit()),
            "non-hex character in field element string"
        );
        let mut limbs = vec![0u64; Self::LIMBS];
        for i in 0..Self::BYTES {
            let end = s.len() - 2 * i;
            let byte = u8::from_str_radix(&s[end - 2..end], 16)?;
            limbs[i / 8] |= (byte as u64) << (8 * (i % 8));
        }
        mask_top_limb::<Self>(&mut limbs);
        Ok(Self::from_limb_slice(&limbs))
    }

    /// The fixed-width big-endian lowercase hex representation, exactly
    /// 2·`BYTES` characters (SEC 1, §2.3.5).
    fn to_hex_string(&self) -> String {
        let limbs = self.as_limbs();
        (0..Self::BYTES)
            .rev()
            .map(|i| format!("{:02x}", (limbs[i / 8] >> (8 * (i % 8))) as u8))
            .collect()
    }

    /// Computes the multiplicative inverse, or `None` for zero.
    fn try_inverse(&self) -> Option<Self>;

    fn inverse(&self) -> Self {
        self.try_inverse().expect("Tried to invert zero")
    }

    /// Inverts a batch of elements for the cost of one inversion and three
    /// multiplications per element (Montgomery's trick). Panics if any
    /// element is zero.
    fn batch_multiplicative_inverse(x: &[Self]) -> Vec<Self> {
        let n = x.len();
        if n == 0 {
            return Vec::new();
        }
        // prefix[i] = x[0] · … · x[i-1]
        let mut prefix = Vec::with_capacity(n);
        let mut acc = Self::ONE;
        for &xi in x {
            prefix.push(acc);
            acc *= xi;
        }
        let mut inv = acc.inverse();
        let mut out = vec![Self::ZERO; n];
        for i in (0..n).rev() {
            out[i] = prefix[i] * inv;
            inv *= x[i];
        }
        out
    }

    fn exp_power_of_2(&self, power_log: usize) -> Self {
        let mut res = *self;
        for _ in 0..power_log {
            res = res.square();
        }
        res
    }

    /// Right-to-left square-and-multiply.
    fn exp_u64(&self, power: u64) -> Self {
        let mut current = *self;
        let mut product = Self::ONE;

        for j in 0..bits_u64(power) {
            if ((power >> j) & 1) != 0 {
                product *= current;
            }
            current = current.square();
        }
        product
    }

    fn exp_biguint(&self, power: &BigUint) -> Self {
        let mut result = Self::ONE;
        for &digit in power.to_u64_digits().iter().rev() {
            result = result.exp_power_of_2(64);
            result *= self.exp_u64(digit);
        }
        result
    }

    /// The square root. Squaring is the Frobenius endomorphism of GF(2^D)
    /// and its D-fold composition is the identity, so the root of any
    /// element is its (D-1)-fold square. Total, unlike in odd
    /// characteristic.
    fn sqrt(&self) -> Self {
        self.exp_power_of_2(Self::DEGREE - 1)
    }

    fn powers(&self) -> Powers<Self> {
        self.shifted_powers(Self::ONE)
    }

    fn shifted_powers(&self, start: Self) -> Powers<Self> {
        Powers {
            base: *self,
            current: start,
        }
    }
}

/// Clears the bits at positions >= DEGREE in the top limb.
fn mask_top_limb<F: BinaryField>(limbs: &mut [u64]) {
    let t = F::DEGREE % WORD_BITS;
    if t != 0 {
        limbs[F::LIMBS - 1] &= (1 << t) - 1;
    }
}

/// An iterator over the powers of a certain base element `b`: `b^0, b^1, b^2, ...`.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Powers<F: BinaryField> {
    base: F,
    current: F,
}

impl<F: BinaryField> Iterator for Powers<F> {
    type Item = F;

    fn next(&mut self) -> Option<F> {
        let result = self.current;
        self.current *= self.base;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }

    fn nth(&mut self, n: usize) -> Option<F> {
        let result = self.current * self.base.exp_u64(n.try_into().unwrap());
        self.current = result * self.base;
        Some(result)
    }

    fn last(self) -> Option<F> {
        panic!("called `Iterator::last()` on an infinite sequence")
    }

    fn count(self) -> usize {
        panic!("called `Iterator::count()` on an infinite sequence")
    }
}
