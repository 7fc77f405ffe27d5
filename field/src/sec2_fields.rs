//! The nine binary fields of SEC 2 table 3.
//!
//! One concrete type per field, all generated by the same macro: the degree
//! and the low bits of the reduction polynomial are the only inputs, and the
//! limb count follows from the degree. 113, 131 and 193 appear in SEC 2 v1
//! only and are kept for backward compatibility.

use std::fmt::{self, Debug, Display, Formatter};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use gf2m_util::ceil_div_usize;
use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

use crate::inversion::try_inverse;
use crate::limbs::LimbVec;
use crate::mul::mul;
use crate::ops::Square;
use crate::square::square;
use crate::types::{BinaryField, Sample};

macro_rules! binary_field {
    ($(#[$meta:meta])* $name:ident, $degree:literal, $reduction:expr) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
        pub struct $name(pub [u64; ceil_div_usize($degree, 64)]);

        // The word-level reducer folds each limb above the modulus in a single
        // top-down sweep, which needs deg r + 63 < D so that a folded limb
        // never re-dirties bits at or above its own position.
        const_assert!(
            <$name as BinaryField>::REDUCTION.leading_zeros() as usize
                + <$name as BinaryField>::DEGREE
                > 190
        );

        impl BinaryField for $name {
            const DEGREE: usize = $degree;
            const REDUCTION: u128 = $reduction;

            const ZERO: Self = Self([0; ceil_div_usize($degree, 64)]);
            const ONE: Self = {
                let mut limbs = [0; ceil_div_usize($degree, 64)];
                limbs[0] = 1;
                Self(limbs)
            };

            fn as_limbs(&self) -> &[u64] {
                &self.0
            }

            fn from_limb_slice(limbs: &[u64]) -> Self {
                let mut arr = [0; ceil_div_usize($degree, 64)];
                arr.copy_from_slice(limbs);
                debug_assert_eq!(arr[Self::LIMBS - 1] >> ($degree % 64), 0, "noncanonical limbs");
                Self(arr)
            }

            fn try_inverse(&self) -> Option<Self> {
                try_inverse(self)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex_string())
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                Display::fmt(self, f)
            }
        }

        impl Sample for $name {
            fn sample<R>(rng: &mut R) -> Self
            where
                R: rand::RngCore + ?Sized,
            {
                Self::from_limb_slice(&LimbVec::sample(rng, Self::LIMBS, Self::DEGREE).0)
            }
        }

        impl Square for $name {
            #[inline]
            fn square(&self) -> Self {
                square(self)
            }
        }

        impl Neg for $name {
            type Output = Self;

            // Characteristic 2: every element is its own additive inverse.
            #[inline]
            fn neg(self) -> Self {
                self
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(mut self, rhs: Self) -> Self {
                for (a, b) in self.0.iter_mut().zip(rhs.0) {
                    *a ^= b;
                }
                self
            }
        }

        impl AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, |acc, x| acc + x)
            }
        }

        impl Sub for $name {
            type Output = Self;

            // Subtraction coincides with addition in characteristic 2.
            #[inline]
            #[allow(clippy::suspicious_arithmetic_impl)]
            fn sub(self, rhs: Self) -> Self {
                self + rhs
            }
        }

        impl SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                mul(&self, &rhs)
            }
        }

        impl MulAssign for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl Product for $name {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ONE, |acc, x| acc * x)
            }
        }

        impl Div for $name {
            type Output = Self;

            #[allow(clippy::suspicious_arithmetic_impl)]
            fn div(self, rhs: Self) -> Self::Output {
                self * rhs.inverse()
            }
        }

        impl DivAssign for $name {
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }
    };
}

binary_field!(
    /// GF(2^113), f(x) = x^113 + x^9 + 1 (SEC 2 v1).
    B113Field,
    113,
    0x201
);

binary_field!(
    /// GF(2^131), f(x) = x^131 + x^8 + x^3 + x^2 + 1 (SEC 2 v1).
    B131Field,
    131,
    0x10D
);

binary_field!(
    /// GF(2^163), f(x) = x^163 + x^7 + x^6 + x^3 + 1.
    B163Field,
    163,
    0xC9
);

binary_field!(
    /// GF(2^193), f(x) = x^193 + x^15 + 1 (SEC 2 v1).
    B193Field,
    193,
    0x8001
);

binary_field!(
    /// GF(2^233), f(x) = x^233 + x^74 + 1.
    B233Field,
    233,
    (1u128 << 74) | 1
);

binary_field!(
    /// GF(2^239), f(x) = x^239 + x^36 + 1.
    B239Field,
    239,
    (1u128 << 36) | 1
);

binary_field!(
    /// GF(2^283), f(x) = x^283 + x^12 + x^7 + x^5 + 1.
    B283Field,
    283,
    0x10A1
);

binary_field!(
    /// GF(2^409), f(x) = x^409 + x^87 + 1.
    B409Field,
    409,
    (1u128 << 87) | 1
);

binary_field!(
    /// GF(2^571), f(x) = x^571 + x^10 + x^5 + x^2 + 1.
    B571Field,
    571,
    0x425
);

#[cfg(test)]
mod tests {
    mod b113 {
        crate::test_binary_field_arithmetic!(crate::sec2_fields::B113Field);
    }
    mod b131 {
        crate::test_binary_field_arithmetic!(crate::sec2_fields::B131Field);
    }
    mod b163 {
        crate::test_binary_field_arithmetic!(crate::sec2_fields::B163Field);
    }
    mod b193 {
        crate::test_binary_field_arithmetic!(crate::sec2_fields::B193Field);
    }
    mod b233 {
        crate::test_binary_field_arithmetic!(crate::sec2_fields::B233Field);
    }
    mod b239 {
        crate::test_binary_field_arithmetic!(crate::sec2_fields::B239Field);
    }
    mod b283 {
        crate::test_binary_field_arithmetic!(crate::sec2_fields::B283Field);
    }
    mod b409 {
        crate::test_binary_field_arithmetic!(crate::sec2_fields::B409Field);
    }
    mod b571 {
        crate::test_binary_field_arithmetic!(crate::sec2_fields::B571Field);
    }

    mod b163_vectors {
        use crate::ops::Square;
        use crate::sec2_fields::B163Field;
        use crate::types::BinaryField;

        type F = B163Field;

        #[test]
        fn two_xor_three_is_one() {
            let two = F::from_hex_str("000000000000000000000000000000000000000002").unwrap();
            let three = F::from_hex_str("000000000000000000000000000000000000000003").unwrap();
            let one = F::from_hex_str("000000000000000000000000000000000000000001").unwrap();
            assert_eq!(two + three, one);
        }

        #[test]
        fn x_times_x() {
            let x = F::from_canonical_u64(2);
            assert_eq!(x * x, F::from_canonical_u64(4));
        }

        #[test]
        fn squaring_the_top_monomial() {
            // x^162 · x^162 = x^324 ≡ x^161 + x^12 + x^10 + x^5 + x
            // modulo x^163 + x^7 + x^6 + x^3 + 1.
            let g = B163Field([0, 0, 1 << 34]);
            let expect = B163Field([0x1422, 0, 1 << 33]);
            assert_eq!(g.square(), expect);
            assert_eq!(g * g, expect);
        }

        #[test]
        fn unit_inverses() {
            let one = F::from_canonical_u64(1);
            let two = F::from_canonical_u64(2);
            assert_eq!(one.inverse(), one);
            assert_eq!(two.inverse() * two, one);
        }

        #[test]
        fn frobenius_returns_after_degree_squarings() {
            let x = F::from_canonical_u64(2);
            assert_eq!(x.exp_power_of_2(163), x);
        }

        #[test]
        fn malformed_inputs_are_rejected() {
            assert!(F::from_hex_str("").is_err());
            assert!(F::ZERO.try_inverse().is_none());
        }
    }
}
