//! Integration tests for the darkroom crates.
//!
//! End-to-end checks that exercise the correction pipeline across crate
//! boundaries: blackbody locus results feeding white balance, white balance
//! feeding grading, and the parallel paths against their sequential
//! references.

#[cfg(test)]
mod tests {
    use darkroom_core::{luminance, ImageBuf};
    use darkroom_locus::{illuminant_rgb, temperature_to_chromaticity, TEMP_MAX_K, TEMP_MIN_K};
    use darkroom_ops::{grading, white_balance, GradingParams, Pipeline, WhiteBalanceParams};

    /// A small but varied test scene: dark corner, bright corner, gray
    /// middle, saturated primaries scattered through.
    fn test_scene() -> ImageBuf {
        let mut img = ImageBuf::new(32, 24);
        for y in 0..24 {
            for x in 0..32 {
                let t = (x as f32 / 31.0 + y as f32 / 23.0) / 2.0;
                img.set_pixel(x, y, [t, t, t]);
            }
        }
        img.set_pixel(0, 0, [0.0, 0.0, 0.0]);
        img.set_pixel(31, 23, [1.8, 1.6, 1.4]);
        img.set_pixel(5, 5, [0.9, 0.05, 0.05]);
        img.set_pixel(10, 10, [0.05, 0.9, 0.05]);
        img.set_pixel(15, 15, [0.05, 0.05, 0.9]);
        img
    }

    #[test]
    fn test_locus_finite_across_full_range() {
        let mut kelvin = TEMP_MIN_K;
        while kelvin <= TEMP_MAX_K {
            let c = temperature_to_chromaticity(kelvin);
            assert!(c.x.is_finite() && c.y.is_finite(), "non-finite at {kelvin} K");

            let rgb = illuminant_rgb(kelvin);
            assert!(rgb.is_finite(), "non-finite RGB at {kelvin} K");
            assert!((rgb.luminance() - 1.0).abs() < 1e-4, "not normalized at {kelvin} K");

            kelvin += 37.0;
        }
    }

    #[test]
    fn test_warm_shift_warms_whole_scene() {
        let mut img = test_scene();
        let reference = test_scene();
        white_balance::apply(&mut img, &WhiteBalanceParams { temperature: -60.0, tint: 0.0 });

        let mut warmer = 0usize;
        let mut total = 0usize;
        for y in 0..24 {
            for x in 0..32 {
                let [r0, _, b0] = reference.pixel(x, y);
                let [r1, _, b1] = img.pixel(x, y);
                if r0 > 0.0 && b0 > 0.0 {
                    total += 1;
                    if r1 / b1 > r0 / b0 {
                        warmer += 1;
                    }
                }
            }
        }
        assert_eq!(warmer, total, "some pixels did not warm");
    }

    #[test]
    fn test_white_balance_preserves_luminance_field() {
        let reference = test_scene();
        let mut img = test_scene();
        white_balance::apply(&mut img, &WhiteBalanceParams { temperature: 70.0, tint: -35.0 });

        for y in 0..24 {
            for x in 0..32 {
                let before = luminance(reference.pixel(x, y));
                let after = luminance(img.pixel(x, y));
                assert!(
                    (before - after).abs() < 1e-3,
                    "luminance drift at ({x}, {y}): {before} -> {after}"
                );
            }
        }
    }

    #[test]
    fn test_uniform_grading_offset_ignores_balance() {
        // With the same offset in all three regions, the weighted blend
        // collapses to that offset for every pixel (weights sum to one),
        // so the balance control must have no effect.
        let offset = [0.04, -0.02, 0.01];
        let with_balance = |balance: f32| GradingParams {
            shadows: offset,
            midtones: offset,
            highlights: offset,
            balance,
            ..GradingParams::identity()
        };

        let mut neutral = test_scene();
        grading::apply(&mut neutral, &with_balance(0.0));

        for balance in [-1.0, -0.5, 0.5, 1.0] {
            let mut shifted = test_scene();
            grading::apply(&mut shifted, &with_balance(balance));
            for y in 0..24 {
                for x in 0..32 {
                    let a = neutral.pixel(x, y);
                    let b = shifted.pixel(x, y);
                    for (ca, cb) in a.iter().zip(b.iter()) {
                        assert!(
                            (ca - cb).abs() < 1e-5,
                            "balance {balance} changed a uniform grade at ({x}, {y})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_neutral_pipeline_bitwise_noop() {
        let reference = test_scene();
        let mut img = test_scene();
        Pipeline::neutral().apply(&mut img);

        for y in 0..24 {
            for x in 0..32 {
                assert_eq!(img.pixel(x, y), reference.pixel(x, y));
            }
        }
    }

    #[test]
    fn test_extreme_parameters_never_poison_buffer() {
        let corners = [
            Pipeline {
                white_balance: WhiteBalanceParams { temperature: -100.0, tint: -100.0 },
                grading: GradingParams {
                    shadows: [1.0, -1.0, 1.0],
                    midtones: [-1.0, 1.0, -1.0],
                    highlights: [1.0, 1.0, 1.0],
                    blending: 1.0,
                    balance: -1.0,
                },
            },
            Pipeline {
                white_balance: WhiteBalanceParams { temperature: 100.0, tint: 100.0 },
                grading: GradingParams {
                    shadows: [-1.0, -1.0, -1.0],
                    midtones: [0.0, 0.0, 0.0],
                    highlights: [-1.0, -1.0, -1.0],
                    blending: 1.0,
                    balance: 1.0,
                },
            },
            // Out-of-range parameters must clamp, not explode
            Pipeline {
                white_balance: WhiteBalanceParams { temperature: -5000.0, tint: 5000.0 },
                grading: GradingParams {
                    midtones: [10.0, 10.0, 10.0],
                    blending: 50.0,
                    balance: -50.0,
                    ..GradingParams::identity()
                },
            },
        ];

        for pipeline in corners {
            let mut img = test_scene();
            pipeline.apply(&mut img);
            for y in 0..24 {
                for x in 0..32 {
                    let px = img.pixel(x, y);
                    assert!(
                        px.iter().all(|c| c.is_finite() && *c >= 0.0),
                        "poisoned pixel {px:?} at ({x}, {y}) for {pipeline:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_parallel_pipeline_matches_sequential() {
        let pipeline = Pipeline {
            white_balance: WhiteBalanceParams { temperature: -45.0, tint: 20.0 },
            grading: GradingParams {
                shadows: [0.03, 0.0, -0.01],
                highlights: [-0.02, 0.01, 0.04],
                balance: 0.25,
                ..GradingParams::identity()
            },
        };

        let mut seq = test_scene();
        pipeline.apply(&mut seq);

        let mut par = test_scene();
        darkroom_ops::parallel::process(&mut par, &pipeline);

        for y in 0..24 {
            for x in 0..32 {
                let a = seq.pixel(x, y);
                let b = par.pixel(x, y);
                for (ca, cb) in a.iter().zip(b.iter()) {
                    assert!((ca - cb).abs() < 1e-6, "mismatch at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_pipeline_serde_roundtrip() {
        let pipeline = Pipeline {
            white_balance: WhiteBalanceParams { temperature: -33.5, tint: 12.0 },
            grading: GradingParams {
                shadows: [0.02, 0.0, -0.03],
                midtones: [0.0, 0.01, 0.0],
                highlights: [-0.01, 0.0, 0.02],
                blending: 0.8,
                balance: -0.2,
            },
        };

        let json = serde_json::to_string(&pipeline).unwrap();
        let back: Pipeline = serde_json::from_str(&json).unwrap();
        assert_eq!(pipeline, back);
    }
}
