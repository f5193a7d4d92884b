//! Procedural drawing of the anycard app icon.
//!
//! The icon is a stylized credit card: a vertical blue gradient background,
//! a dark rounded-rectangle card with a drop shadow, a diagonal accent stripe
//! clipped to the card's rounded silhouette, and a row of pseudo-barcode
//! bars near the card's bottom edge. Rendering is a pure function of the
//! requested size, so the same size always produces byte-identical pixels.

use image::{GrayImage, Luma, Rgba, RgbaImage};

/// Gradient runs top to bottom, #007AFF to #5856D6.
const GRADIENT_TOP: [u8; 3] = [0, 122, 255];
const GRADIENT_BOTTOM: [u8; 3] = [88, 86, 214];

const CARD_FILL: Rgba<u8> = Rgba([28, 28, 30, 255]);
const SHADOW_FILL: Rgba<u8> = Rgba([0, 0, 0, 80]);
const STRIPE_FILL: Rgba<u8> = Rgba([0, 122, 255, 255]);
const BAR_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Card placement derived from the canvas size. All values are fixed
/// proportions of `size`; nothing here is configurable.
struct CardGeometry {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    radius: f32,
    shadow_offset: f32,
}

impl CardGeometry {
    fn for_size(size: u32) -> Self {
        let size = size as f32;
        let margin = size * 0.15;
        let width = size - 2.0 * margin;
        // Credit card aspect ratio
        let height = width * 0.63;
        Self {
            x: margin,
            y: (size - height) / 2.0,
            width,
            height,
            radius: size * 0.05,
            shadow_offset: size * 0.02,
        }
    }
}

/// Render the icon at `size`×`size` pixels.
///
/// Layering order matters: gradient, shadow, card body, clipped stripe,
/// barcode. Each step composites over the previous ones.
pub fn render(size: u32) -> RgbaImage {
    let mut canvas = RgbaImage::new(size, size);
    fill_gradient(&mut canvas);

    let card = CardGeometry::for_size(size);
    fill_rounded_rect(
        &mut canvas,
        card.x + card.shadow_offset,
        card.y + card.shadow_offset,
        card.width,
        card.height,
        card.radius,
        SHADOW_FILL,
    );
    fill_rounded_rect(
        &mut canvas,
        card.x,
        card.y,
        card.width,
        card.height,
        card.radius,
        CARD_FILL,
    );

    let stripe = clipped_stripe_layer(size, &card);
    composite_over(&mut canvas, &stripe);

    draw_barcode(&mut canvas, &card);

    canvas
}

/// Fill every scanline with the linear interpolation between the two
/// gradient endpoints at ratio `y / size`.
fn fill_gradient(canvas: &mut RgbaImage) {
    let size = canvas.height();
    for y in 0..size {
        let t = y as f32 / size as f32;
        let color = Rgba([
            lerp_channel(GRADIENT_TOP[0], GRADIENT_BOTTOM[0], t),
            lerp_channel(GRADIENT_TOP[1], GRADIENT_BOTTOM[1], t),
            lerp_channel(GRADIENT_TOP[2], GRADIENT_BOTTOM[2], t),
            255,
        ]);
        for x in 0..canvas.width() {
            canvas.put_pixel(x, y, color);
        }
    }
}

// Truncating, to match integer channel math.
fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t) as u8
}

/// Test a point against a rounded rectangle: inside the plain rectangle,
/// and within `radius` of the corner centers in the corner regions.
fn rounded_rect_contains(x: f32, y: f32, w: f32, h: f32, radius: f32, px: f32, py: f32) -> bool {
    if px < x || px > x + w || py < y || py > y + h {
        return false;
    }
    let dx = (x + radius - px).max(px - (x + w - radius)).max(0.0);
    let dy = (y + radius - py).max(py - (y + h - radius)).max(0.0);
    dx * dx + dy * dy <= radius * radius
}

/// Fill a rounded rectangle, alpha-blending `fill` over the existing pixels.
fn fill_rounded_rect(
    canvas: &mut RgbaImage,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    radius: f32,
    fill: Rgba<u8>,
) {
    let (cw, ch) = canvas.dimensions();
    let x0 = x.floor().max(0.0) as u32;
    let y0 = y.floor().max(0.0) as u32;
    let x1 = ((x + w).ceil().max(0.0) as u32).min(cw);
    let y1 = ((y + h).ceil().max(0.0) as u32).min(ch);
    for py in y0..y1 {
        for px in x0..x1 {
            if rounded_rect_contains(x, y, w, h, radius, px as f32 + 0.5, py as f32 + 0.5) {
                let dst = canvas.get_pixel_mut(px, py);
                *dst = blend_over(fill, *dst);
            }
        }
    }
}

/// Standard "over" compositing in 8-bit integer arithmetic.
fn blend_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as u32;
    if sa == 255 {
        return src;
    }
    if sa == 0 {
        return dst;
    }
    let da = dst[3] as u32;
    let out_a = sa + da * (255 - sa) / 255;
    if out_a == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    let mut out = [0u8; 4];
    for c in 0..3 {
        let sc = src[c] as u32;
        let dc = dst[c] as u32;
        out[c] = ((sc * sa * 255 + dc * da * (255 - sa)) / (out_a * 255)) as u8;
    }
    out[3] = out_a as u8;
    Rgba(out)
}

/// Single-channel mask shaped exactly like the card's rounded rectangle:
/// 255 inside, 0 outside.
fn rounded_rect_mask(size: u32, card: &CardGeometry) -> GrayImage {
    let mut mask = GrayImage::new(size, size);
    for (px, py, p) in mask.enumerate_pixels_mut() {
        if rounded_rect_contains(
            card.x,
            card.y,
            card.width,
            card.height,
            card.radius,
            px as f32 + 0.5,
            py as f32 + 0.5,
        ) {
            *p = Luma([255]);
        }
    }
    mask
}

/// Diagonal accent stripe on a transparent layer: a parallelogram whose left
/// edge runs from 10% of the card width at the card's bottom to 40% at its
/// top, with a constant horizontal width of 15% of the card width. Filled by
/// scanline, interpolating the left edge per row.
fn stripe_layer(size: u32, card: &CardGeometry) -> RgbaImage {
    let mut layer = RgbaImage::new(size, size);
    let stripe_width = card.width * 0.15;
    let top = card.y;
    let bottom = card.y + card.height;
    let x_at_bottom = card.x + card.width * 0.10;
    let x_at_top = card.x + card.width * 0.40;

    let y0 = top.floor().max(0.0) as u32;
    let y1 = (bottom.ceil().max(0.0) as u32).min(size);
    for py in y0..y1 {
        let cy = py as f32 + 0.5;
        if cy < top || cy > bottom {
            continue;
        }
        let t = (bottom - cy) / (bottom - top);
        let left = x_at_bottom + (x_at_top - x_at_bottom) * t;
        let right = left + stripe_width;
        let px0 = left.round().max(0.0) as u32;
        let px1 = (right.round().max(0.0) as u32).min(size);
        for px in px0..px1 {
            layer.put_pixel(px, py, STRIPE_FILL);
        }
    }
    layer
}

/// The stripe layer with its alpha intersected against the card mask, so a
/// pixel survives only where both the stripe and the rounded rectangle are
/// opaque. Keeps the stripe from poking past the card's corners.
fn clipped_stripe_layer(size: u32, card: &CardGeometry) -> RgbaImage {
    let mask = rounded_rect_mask(size, card);
    let mut layer = stripe_layer(size, card);
    for (px, py, p) in layer.enumerate_pixels_mut() {
        let m = mask.get_pixel(px, py)[0] as u32;
        p[3] = (p[3] as u32 * m / 255) as u8;
    }
    layer
}

/// Alpha-composite `layer` over the whole canvas.
fn composite_over(canvas: &mut RgbaImage, layer: &RgbaImage) {
    for (px, py, p) in canvas.enumerate_pixels_mut() {
        *p = blend_over(*layer.get_pixel(px, py), *p);
    }
}

/// Axis-aligned opaque rectangle, clamped to the canvas.
fn fill_rect(canvas: &mut RgbaImage, x: f32, y: f32, w: f32, h: f32, fill: Rgba<u8>) {
    let (cw, ch) = canvas.dimensions();
    let x0 = x.round().max(0.0) as u32;
    let y0 = y.round().max(0.0) as u32;
    let x1 = ((x + w).round().max(0.0) as u32).min(cw);
    let y1 = ((y + h).round().max(0.0) as u32).min(ch);
    for py in y0..y1 {
        for px in x0..x1 {
            canvas.put_pixel(px, py, fill);
        }
    }
}

/// White vertical bars across a band near the card's bottom. Bar widths and
/// gaps come from `bar_hash` of the cursor position, so the pattern looks
/// irregular but is fully reproducible. The minimum advance per iteration is
/// 2 × 0.005 × size, which is strictly positive, so the loop terminates and
/// produces at least one bar whenever the band is non-empty.
fn draw_barcode(canvas: &mut RgbaImage, card: &CardGeometry) {
    let unit = canvas.width() as f32 * 0.005;
    let band_top = card.y + card.height * 0.65;
    let band_height = card.height * 0.20;
    let start = card.x + card.width * 0.15;
    let end = card.x + card.width * 0.85;

    let mut cursor = start;
    while cursor < end {
        let width = (bar_hash(cursor) % 3 + 1) as f32 * unit;
        let gap = (bar_hash(cursor + 1.0) % 2 + 1) as f32 * unit;
        fill_rect(canvas, cursor, band_top, width, band_height, BAR_FILL);
        cursor += width + gap;
    }
}

/// 32-bit FNV-1a over the cursor position rounded to the nearest pixel.
/// The hash input is deliberately the quantized integer position rather
/// than any textual or bit-level float representation, so the pattern is
/// stable across runs and platforms.
fn bar_hash(x: f32) -> u32 {
    let quantized = x.round() as i64;
    let mut hash: u32 = 0x811c9dc5;
    for byte in quantized.to_le_bytes() {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(0x01000193);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_deterministic() {
        let a = render(64);
        let b = render(64);
        assert_eq!(a.as_raw(), b.as_raw(), "two renders of the same size must be byte-identical");
    }

    #[test]
    fn test_render_matches_requested_size() {
        let img = render(96);
        assert_eq!(img.width(), 96);
        assert_eq!(img.height(), 96);
    }

    #[test]
    fn test_gradient_boundary_colors() {
        let size = 256u32;
        let img = render(size);

        // Leftmost column stays outside the card, so it is pure gradient.
        let top = img.get_pixel(0, 0);
        assert_eq!(top[0], GRADIENT_TOP[0]);
        assert_eq!(top[1], GRADIENT_TOP[1]);
        assert_eq!(top[2], GRADIENT_TOP[2]);
        assert_eq!(top[3], 255);

        // Bottom scanline interpolates at (size-1)/size, within one unit of
        // the end color per channel.
        let bottom = img.get_pixel(0, size - 1);
        for c in 0..3 {
            let diff = (bottom[c] as i32 - GRADIENT_BOTTOM[c] as i32).abs();
            assert!(diff <= 1, "channel {c} off by {diff}");
        }
        assert_eq!(bottom[3], 255);
    }

    #[test]
    fn test_card_body_covers_center() {
        let size = 256u32;
        let img = render(size);
        // The canvas center lies on the card body, right of the stripe and
        // above the barcode band.
        assert_eq!(*img.get_pixel(size / 2, size / 2), CARD_FILL);
    }

    #[test]
    fn test_stripe_stays_inside_card() {
        let size = 256u32;
        let card = CardGeometry::for_size(size);
        let mask = rounded_rect_mask(size, &card);
        let stripe = clipped_stripe_layer(size, &card);

        let mut visible = 0usize;
        for (px, py, p) in stripe.enumerate_pixels() {
            if p[3] > 0 {
                visible += 1;
                assert!(
                    mask.get_pixel(px, py)[0] > 0,
                    "stripe pixel at ({px}, {py}) escapes the card silhouette"
                );
            }
        }
        assert!(visible > 0, "clipped stripe should not be empty");
    }

    #[test]
    fn test_barcode_draws_bars_in_band() {
        let size = 256u32;
        let img = render(size);
        let card = CardGeometry::for_size(size);

        let band_top = (card.y + card.height * 0.65) as u32;
        let band_bottom = (card.y + card.height * 0.85) as u32;
        let mut white = 0usize;
        for y in band_top..band_bottom {
            for x in 0..size {
                if *img.get_pixel(x, y) == BAR_FILL {
                    white += 1;
                }
            }
        }
        assert!(white > 0, "barcode band should contain white bars");
    }

    #[test]
    fn test_barcode_terminates_for_tiny_sizes() {
        // Minimum advance stays positive even at size 1, so render returns.
        let img = render(1);
        assert_eq!(img.dimensions(), (1, 1));
    }

    #[test]
    fn test_bar_hash_is_position_quantized() {
        // Sub-pixel movement does not change the hash input.
        assert_eq!(bar_hash(100.0), bar_hash(100.2));
        // Adjacent pixel positions do.
        assert_ne!(bar_hash(100.0), bar_hash(101.0));
        // Stable across calls.
        assert_eq!(bar_hash(42.0), bar_hash(42.0));
    }
}
