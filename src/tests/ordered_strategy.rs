#[cfg(test)]
mod ordered_strategy_tests {
    use crate::{
        dithering::threshold::{ThresholdType, ordered_transform::OrderedStrategy},
        tests::utils::*,
        texture::{Texture, TextureRef},
        transform::traits::TextureTransform,
    };

    /// Assert that two level planes match pixel by pixel
    fn assert_planes_match(a: &[u8], b: &[u8], width: usize, strategy_a: &str, strategy_b: &str) {
        assert_eq!(a.len(), b.len(), "plane lengths don't match");
        for (idx, (a_pixel, b_pixel)) in a.iter().zip(b.iter()).enumerate() {
            assert_eq!(
                a_pixel,
                b_pixel,
                "Pixel mismatch at index {} (x={}, y={}): {}={:?}, {}={:?}",
                idx,
                idx % width,
                idx / width,
                strategy_a,
                a_pixel,
                strategy_b,
                b_pixel
            );
        }
    }

    /// Apply a strategy to the given input/output textures
    fn apply_strategy(
        ttype: ThresholdType,
        strategy: OrderedStrategy,
        input: &Texture<u8>,
        output: &mut Texture<u8>,
    ) {
        let mut transform = ttype.to_transform(strategy);
        transform.prepare(input.shape(), output.shape());
        transform.apply(input.as_texture_slice(), output.as_texture_mut_slice());
    }

    /// Macro to generate OrderedStrategy comparison tests
    macro_rules! test_strategy_comparison {
        ($test_name:ident, $ttype:expr, $width:expr, $height:expr) => {
            #[test]
            fn $test_name() {
                let input = gen_random_luma($width, $height);
                let mut output_a = Texture::<u8>::new($width, $height, 1);
                let mut output_b = Texture::<u8>::new($width, $height, 1);

                apply_strategy($ttype, OrderedStrategy::Scalar, &input, &mut output_a);
                apply_strategy($ttype, OrderedStrategy::ScalarPar, &input, &mut output_b);

                assert_planes_match(
                    output_a.as_ref(),
                    output_b.as_ref(),
                    $width as usize,
                    "scalar",
                    "scalar-par",
                );
            }
        };
    }

    test_strategy_comparison!(test_scalar_vs_par_bayer_2x2, ThresholdType::Bayer2x2, 100, 100);
    test_strategy_comparison!(test_scalar_vs_par_bayer_4x4, ThresholdType::Bayer4x4, 100, 100);
    test_strategy_comparison!(test_scalar_vs_par_bayer_8x8, ThresholdType::Bayer8x8, 100, 100);

    // widths that don't line up with the tile size

    test_strategy_comparison!(test_scalar_vs_par_odd_width, ThresholdType::Bayer8x8, 37, 13);
    test_strategy_comparison!(test_scalar_vs_par_single_column, ThresholdType::Bayer4x4, 1, 9);
    test_strategy_comparison!(test_scalar_vs_par_single_row, ThresholdType::Bayer2x2, 17, 1);

    #[test]
    fn test_transform_reused_across_widths() {
        let mut transform = ThresholdType::Bayer4x4.to_transform(OrderedStrategy::Scalar);
        for width in [5u32, 12, 3] {
            let input = gen_random_luma(width, 6);
            let mut reused = Texture::<u8>::new(width, 6, 1);
            let mut fresh = Texture::<u8>::new(width, 6, 1);

            transform.apply(input.as_texture_slice(), reused.as_texture_mut_slice());
            ThresholdType::Bayer4x4
                .to_transform(OrderedStrategy::Scalar)
                .once(input.as_texture_slice(), fresh.as_texture_mut_slice());

            assert_eq!(reused, fresh, "width {width}");
        }
    }

    #[test]
    fn test_auto_strategy() {
        assert_eq!(OrderedStrategy::auto((8, 8)), OrderedStrategy::Scalar);
        let large = OrderedStrategy::auto((4096, 4096));
        if rayon::current_num_threads() > 1 {
            assert_eq!(large, OrderedStrategy::ScalarPar);
        } else {
            assert_eq!(large, OrderedStrategy::Scalar);
        }
    }
}
