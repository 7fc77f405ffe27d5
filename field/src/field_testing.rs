#[macro_export]
macro_rules! test_binary_field_arithmetic {
    ($field:ty) => {
        mod field_arithmetic {
            use num::bigint::BigUint;
            use $crate::limbs::LimbVec;
            use $crate::ops::Square;
            use $crate::types::{BinaryField, Sample};
            use $crate::{mul, reduce, square};

            type F = $field;

            #[test]
            fn additive_group() {
                let x = F::rand();
                let y = F::rand();
                let z = F::rand();
                assert_eq!(x + F::ZERO, x);
                assert_eq!(x + x, F::ZERO);
                assert_eq!(x + y, y + x);
                assert_eq!((x + y) + z, x + (y + z));
                assert_eq!(x - y, x + y);
                assert_eq!(-x, x);
            }

            #[test]
            fn multiplicative_ring() {
                let x = F::rand();
                let y = F::rand();
                let z = F::rand();
                assert_eq!(x * F::ONE, x);
                assert_eq!(x * F::ZERO, F::ZERO);
                assert_eq!(x * y, y * x);
                assert_eq!((x * y) * z, x * (y * z));
                assert_eq!(x * (y + z), x * y + x * z);
            }

            #[test]
            fn squaring_consistency() {
                let x = F::rand();
                // the full product path, not the square delegation
                assert_eq!(mul::mul_comb_windowed(&x, &x), x.square());
                assert_eq!(square::square_generic(&x), x.square());
            }

            #[test]
            fn mul_variants_agree() {
                for _ in 0..4 {
                    let x = F::rand();
                    let y = F::rand();
                    let expect = mul::mul_shift_and_add(&x, &y);
                    assert_eq!(mul::mul_comb_rtl(&x, &y), expect);
                    assert_eq!(mul::mul_comb_ltr(&x, &y), expect);
                    assert_eq!(mul::mul_comb_windowed(&x, &y), expect);
                    assert_eq!(mul::mul_interleaved(&x, &y), expect);
                    #[cfg(feature = "parallel")]
                    assert_eq!(mul::mul_parallel(&x, &y), expect);
                }
            }

            #[test]
            fn inversion_and_division() {
                assert_eq!(F::ZERO.try_inverse(), None);
                assert_eq!(F::ONE.inverse(), F::ONE);
                let x = F::rand();
                let y = F::rand();
                if !x.is_zero() {
                    assert_eq!(x * x.inverse(), F::ONE);
                    assert_eq!(x.inverse().inverse(), x);
                }
                if !y.is_zero() {
                    assert_eq!((x * y) / y, x);
                }
            }

            #[test]
            fn batch_inversion() {
                for n in 0..20 {
                    let xs = (1..=n as u64)
                        .map(F::from_canonical_u64)
                        .collect::<Vec<_>>();
                    let invs = F::batch_multiplicative_inverse(&xs);
                    assert_eq!(invs.len(), n);
                    for (x, inv) in xs.into_iter().zip(invs) {
                        assert_eq!(x * inv, F::ONE);
                    }
                }
            }

            #[test]
            fn exponentiation() {
                let x = F::rand();
                assert_eq!(x.exp_u64(0), F::ONE);
                assert_eq!(x.exp_u64(1), x);
                assert_eq!(x.exp_u64(2), x.square());
                let (m, n) = (39u64, 25u64);
                assert_eq!(x.exp_u64(m + n), x.exp_u64(m) * x.exp_u64(n));
                assert_eq!(x.exp_biguint(&BigUint::from(m)), x.exp_u64(m));
            }

            #[test]
            fn square_root() {
                let x = F::rand();
                let y = F::rand();
                assert_eq!(x.sqrt().square(), x);
                assert_eq!((x * y).sqrt(), x.sqrt() * y.sqrt());
            }

            #[test]
            fn frobenius_fixpoint() {
                let x = F::rand();
                assert_eq!(x.exp_power_of_2(F::DEGREE), x);
            }

            #[test]
            fn reduction_idempotence() {
                let x = F::rand();
                let widened = x.to_limb_vec().resized(2 * F::LIMBS);
                assert_eq!(reduce::reduce::<F>(widened.clone()), x);
                assert_eq!(reduce::reduce_generic::<F>(widened), x);
            }

            #[test]
            fn reducers_agree() {
                let mut rng = rand::rngs::OsRng;
                for _ in 0..8 {
                    let wide = LimbVec::sample(&mut rng, 2 * F::LIMBS, 2 * F::DEGREE - 1);
                    assert_eq!(
                        reduce::reduce::<F>(wide.clone()),
                        reduce::reduce_generic::<F>(wide)
                    );
                }
            }

            #[test]
            fn results_are_canonical() {
                let x = F::rand();
                let y = F::rand();
                let t = F::DEGREE % 64;
                for v in [x + y, x * y, x.square(), x.sqrt()] {
                    assert_eq!(v.as_limbs().len(), F::LIMBS);
                    if t != 0 {
                        assert_eq!(v.as_limbs()[F::LIMBS - 1] >> t, 0);
                    }
                }
            }

            #[test]
            fn hex_round_trip() {
                let x = F::rand();
                let s = x.to_hex_string();
                assert_eq!(s.len(), 2 * F::BYTES);
                assert_eq!(F::from_hex_str(&s).unwrap(), x);
                assert_eq!(F::from_hex_str(&s.to_uppercase()).unwrap(), x);
                // embedded whitespace is stripped
                let spaced = format!(" {} {}\n", &s[..4], &s[4..]);
                assert_eq!(F::from_hex_str(&spaced).unwrap(), x);

                assert!(F::from_hex_str("").is_err());
                assert!(F::from_hex_str(&s[1..]).is_err());
                let mut bad = s.clone();
                bad.replace_range(0..1, "g");
                assert!(F::from_hex_str(&bad).is_err());
            }

            #[test]
            fn biguint_round_trip() {
                let x = F::rand();
                assert!(x.to_canonical_biguint() < F::order());
                assert_eq!(F::from_noncanonical_biguint(x.to_canonical_biguint()), x);
                assert_eq!(F::from_noncanonical_biguint(F::order()), F::ZERO);
            }

            #[test]
            fn sampling_is_masked() {
                let t = F::DEGREE % 64;
                for _ in 0..8 {
                    let x = F::rand();
                    if t != 0 {
                        assert_eq!(x.as_limbs()[F::LIMBS - 1] >> t, 0);
                    }
                }
            }

            #[test]
            fn powers_iterator() {
                let x = F::rand();
                let p: Vec<F> = x.powers().take(4).collect();
                assert_eq!(p[0], F::ONE);
                assert_eq!(p[1], x);
                assert_eq!(p[2], x.square());
                assert_eq!(p[3], x.square() * x);
            }
        }
    };
}
