//! Near-white to transparent recolor pass.
//!
//! A pixel counts as near white when its red, green and blue channels are all
//! strictly greater than [`BRIGHTNESS_THRESHOLD`]. Such pixels become
//! [`TRANSPARENT_WHITE`]; all others pass through untouched, alpha included.
//! Existing alpha plays no part in the test.

use image::{Rgba, RgbaImage};

/// Channel value a pixel must exceed (on R, G and B) to be treated as white.
pub const BRIGHTNESS_THRESHOLD: u8 = 240;

/// Replacement for near-white pixels: white with zero alpha.
pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Whether all three color channels of `pixel` exceed [`BRIGHTNESS_THRESHOLD`].
#[must_use]
pub fn is_near_white(pixel: Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    r > BRIGHTNESS_THRESHOLD && g > BRIGHTNESS_THRESHOLD && b > BRIGHTNESS_THRESHOLD
}

/// Map a single pixel through the recolor pass.
#[must_use]
pub fn recolor_pixel(pixel: Rgba<u8>) -> Rgba<u8> {
    if is_near_white(pixel) {
        TRANSPARENT_WHITE
    } else {
        pixel
    }
}

/// Map a pixel sequence through the recolor pass.
///
/// The output has the same length as `pixels`, element `i` being
/// `recolor_pixel(pixels[i])`.
#[must_use]
pub fn recolor_pixels(pixels: &[Rgba<u8>]) -> Vec<Rgba<u8>> {
    pixels.iter().copied().map(recolor_pixel).collect()
}

/// Run the recolor pass over an image in place.
///
/// Returns the number of pixels that matched the near-white test. Pixels that
/// were already transparent white are counted too, since they still match.
pub fn whiten_to_transparent(image: &mut RgbaImage) -> usize {
    let mut replaced = 0;
    for px in image.pixels_mut() {
        if is_near_white(*px) {
            *px = TRANSPARENT_WHITE;
            replaced += 1;
        }
    }
    replaced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_white_becomes_transparent() {
        assert_eq!(recolor_pixel(Rgba([255, 255, 255, 255])), TRANSPARENT_WHITE);
    }

    #[test]
    fn partially_transparent_bright_pixel_is_zeroed() {
        assert_eq!(recolor_pixel(Rgba([241, 241, 241, 128])), TRANSPARENT_WHITE);
    }

    #[test]
    fn threshold_is_strict() {
        let px = Rgba([240, 240, 240, 255]);
        assert!(!is_near_white(px));
        assert_eq!(recolor_pixel(px), px);
    }

    #[test]
    fn black_passes_through() {
        let px = Rgba([0, 0, 0, 255]);
        assert_eq!(recolor_pixel(px), px);
    }

    #[test]
    fn one_dim_channel_keeps_pixel() {
        for px in [
            Rgba([240, 255, 255, 255]),
            Rgba([255, 240, 255, 17]),
            Rgba([255, 255, 200, 0]),
        ] {
            assert_eq!(recolor_pixel(px), px, "{px:?} should pass through");
        }
    }

    #[test]
    fn sequence_keeps_length_and_order() {
        let input = vec![
            Rgba([255, 255, 255, 255]),
            Rgba([12, 34, 56, 78]),
            Rgba([250, 245, 242, 10]),
            Rgba([240, 241, 242, 255]),
        ];
        let output = recolor_pixels(&input);
        assert_eq!(output.len(), input.len());
        assert_eq!(
            output,
            vec![
                TRANSPARENT_WHITE,
                Rgba([12, 34, 56, 78]),
                TRANSPARENT_WHITE,
                Rgba([240, 241, 242, 255]),
            ]
        );
    }

    #[test]
    fn empty_sequence_and_image_are_noops() {
        assert!(recolor_pixels(&[]).is_empty());
        let mut img = RgbaImage::new(0, 0);
        assert_eq!(whiten_to_transparent(&mut img), 0);
    }

    #[test]
    fn pass_is_idempotent_over_every_gray_and_alpha() {
        let pixels: Vec<Rgba<u8>> = (0..=255u8)
            .flat_map(|v| [Rgba([v, v, v, 255]), Rgba([v, 255, v, v]), Rgba([255, 255, v, 0])])
            .collect();
        let once = recolor_pixels(&pixels);
        let twice = recolor_pixels(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn in_place_pass_matches_sequence_contract() {
        let mut img = RgbaImage::new(16, 16);
        for (x, y, px) in img.enumerate_pixels_mut() {
            #[allow(clippy::cast_possible_truncation)]
            {
                *px = Rgba([(x * 16) as u8 + 15, (y * 16) as u8 + 15, 250, (x + y) as u8]);
            }
        }
        let expected = recolor_pixels(&img.pixels().copied().collect::<Vec<_>>());

        let replaced = whiten_to_transparent(&mut img);

        assert_eq!(img.pixels().copied().collect::<Vec<_>>(), expected);
        assert_eq!(
            replaced,
            expected.iter().filter(|&&p| p == TRANSPARENT_WHITE).count()
        );
    }
}
