//! Placeholder icon rendering.
//!
//! When no source image is supplied, the pipeline synthesizes a stylized
//! mouse: a rounded body, two buttons above it, a scroll wheel, and the
//! numeral "3" (TriMouse drives three pointers). All proportions derive
//! from the requested pixel size, so the drawing is deterministic for a
//! fixed (size, style) pair.

use ab_glyph::{Font, FontVec, PxScale};
use image::{Pixel, Rgba, RgbaImage};
use std::fmt;

/// Visual variants for the placeholder icon.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum IconStyle {
    /// Opaque gray body with a light outline.
    #[default]
    Default,
    /// Translucent gray body, outline-led look.
    Minimal,
    /// Saturated fill picked from a fixed palette by icon size.
    Colorful,
}

impl IconStyle {
    /// Returns the lowercase identifier used in CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            IconStyle::Default => "default",
            IconStyle::Minimal => "minimal",
            IconStyle::Colorful => "colorful",
        }
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Fills cycled through by the colorful style, indexed by `size % 4`.
const PALETTE: [Rgba<u8>; 4] = [
    Rgba([255, 100, 100, 255]),
    Rgba([100, 255, 100, 255]),
    Rgba([100, 100, 255, 255]),
    Rgba([255, 255, 100, 255]),
];

const LIGHT_OUTLINE: Rgba<u8> = Rgba([200, 200, 200, 255]);
const BUTTON_FILL: Rgba<u8> = Rgba([180, 180, 180, 255]);
const WHEEL_FILL: Rgba<u8> = Rgba([100, 100, 100, 255]);
const WHEEL_OUTLINE: Rgba<u8> = Rgba([150, 150, 150, 255]);
const NUMERAL_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// TrueType sources for the numeral, tried in order.
const FONT_SOURCES: [&str; 3] = [
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
];

/// Draws the placeholder mouse icon at `size`×`size` pixels.
///
/// The background is fully transparent. The numeral is drawn only at
/// 32 px and above; below that it would not survive rasterization.
pub fn placeholder_icon(size: u32, style: IconStyle) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));

    let margin = (size / 16).max(2);
    let body_w = size.saturating_sub(margin * 2);
    let body_h = (body_w as f32 * 0.6) as u32;
    let body_x = margin;
    let body_y = margin + size.saturating_sub(body_h + margin) / 2;
    let stroke = (size / 32).max(1);

    let (body_fill, body_outline) = match style {
        IconStyle::Default => (Rgba([150, 150, 150, 255]), LIGHT_OUTLINE),
        IconStyle::Minimal => (Rgba([100, 100, 100, 200]), LIGHT_OUTLINE),
        IconStyle::Colorful => (
            PALETTE[size as usize % PALETTE.len()],
            Rgba([255, 255, 255, 255]),
        ),
    };

    draw_rounded_rect(
        &mut img,
        body_x,
        body_y,
        body_w,
        body_h,
        body_w / 4,
        stroke,
        body_fill,
        body_outline,
    );

    // Buttons sit just above the body, one gap apart.
    let button_w = body_w / 3;
    let button_h = (size / 16).max(2);
    let gap = (size / 32).max(1);
    let button_y = body_y.saturating_sub(button_h + gap);
    draw_rect(&mut img, body_x, button_y, button_w, button_h, BUTTON_FILL, LIGHT_OUTLINE);
    draw_rect(
        &mut img,
        body_x + button_w + gap,
        button_y,
        button_w,
        button_h,
        BUTTON_FILL,
        LIGHT_OUTLINE,
    );

    // Scroll wheel centered on the body.
    let wheel = (size / 12).max(2);
    let wheel_x = body_x + body_w / 2 - wheel / 2;
    let wheel_y = body_y + body_h / 2 - wheel / 2;
    draw_circle(&mut img, wheel_x, wheel_y, wheel, WHEEL_FILL, WHEEL_OUTLINE);

    if size >= 32 {
        draw_numeral(&mut img, size);
    }

    img
}

fn draw_numeral(img: &mut RgbaImage, size: u32) {
    let px = (size / 4).max(8);
    match load_numeral_font() {
        Some(font) => draw_glyph(img, &font, px),
        None => {
            log::debug!("no TrueType source available, using built-in numeral glyph");
            draw_builtin_numeral(img, px);
        }
    }
}

fn load_numeral_font() -> Option<FontVec> {
    for path in FONT_SOURCES {
        if let Ok(data) = std::fs::read(path)
            && let Ok(font) = FontVec::try_from_vec(data)
        {
            log::debug!("numeral font: {path}");
            return Some(font);
        }
    }
    None
}

/// Rasterizes '3' at `px` pixels, centered on the image.
fn draw_glyph(img: &mut RgbaImage, font: &FontVec, px: u32) {
    let glyph = font.glyph_id('3').with_scale(PxScale::from(px as f32));
    let Some(outlined) = font.outline_glyph(glyph) else {
        // Font without a '3' outline; unlikely, but the bitmap covers it.
        draw_builtin_numeral(img, px);
        return;
    };

    let bounds = outlined.px_bounds();
    let (width, height) = img.dimensions();
    let left = ((width as f32 - bounds.width()) / 2.0).round() as i64;
    let top = ((height as f32 - bounds.height()) / 2.0).round() as i64;

    outlined.draw(|gx, gy, coverage| {
        let x = left + gx as i64;
        let y = top + gy as i64;
        if coverage > 0.0 && x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height {
            let alpha = (coverage * 255.0) as u8;
            img.get_pixel_mut(x as u32, y as u32)
                .blend(&Rgba([255, 255, 255, alpha]));
        }
    });
}

/// 5x7 bitmap of '3', MSB is the leftmost column.
const NUMERAL_ROWS: [u8; 7] = [
    0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110,
];

fn draw_builtin_numeral(img: &mut RgbaImage, px: u32) {
    let cell = (px / 7).max(1);
    let glyph_w = cell * 5;
    let glyph_h = cell * 7;
    let left = img.width().saturating_sub(glyph_w) / 2;
    let top = img.height().saturating_sub(glyph_h) / 2;

    for (row, bits) in NUMERAL_ROWS.iter().enumerate() {
        for col in 0..5u32 {
            if bits & (1 << (4 - col)) != 0 {
                fill_rect(
                    img,
                    left + col * cell,
                    top + row as u32 * cell,
                    cell,
                    cell,
                    NUMERAL_COLOR,
                );
            }
        }
    }
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    for py in y..(y + h).min(img.height()) {
        for px in x..(x + w).min(img.width()) {
            img.put_pixel(px, py, color);
        }
    }
}

/// Filled rectangle with a one-pixel outline ring.
fn draw_rect(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, fill: Rgba<u8>, outline: Rgba<u8>) {
    if w == 0 || h == 0 {
        return;
    }
    fill_rect(img, x, y, w, h, fill);
    for px in x..(x + w).min(img.width()) {
        if y < img.height() {
            img.put_pixel(px, y, outline);
        }
        if y + h - 1 < img.height() {
            img.put_pixel(px, y + h - 1, outline);
        }
    }
    for py in y..(y + h).min(img.height()) {
        if x < img.width() {
            img.put_pixel(x, py, outline);
        }
        if x + w - 1 < img.width() {
            img.put_pixel(x + w - 1, py, outline);
        }
    }
}

/// Rounded rectangle with `stroke`-wide outline just inside the edge.
///
/// Membership is decided per pixel center against the signed distance to
/// the rounded boundary, which keeps the drawing identical across runs.
#[allow(clippy::too_many_arguments)]
fn draw_rounded_rect(
    img: &mut RgbaImage,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    radius: u32,
    stroke: u32,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
) {
    if w == 0 || h == 0 {
        return;
    }
    let half_w = w as f32 / 2.0;
    let half_h = h as f32 / 2.0;
    let cx = x as f32 + half_w;
    let cy = y as f32 + half_h;
    let r = (radius as f32).min(half_w).min(half_h);
    let stroke = stroke as f32;

    for py in y..(y + h).min(img.height()) {
        for px in x..(x + w).min(img.width()) {
            let qx = (px as f32 + 0.5 - cx).abs() - (half_w - r);
            let qy = (py as f32 + 0.5 - cy).abs() - (half_h - r);
            let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
            let d = outside + qx.max(qy).min(0.0) - r;
            if d > 0.0 {
                continue;
            }
            let color = if d >= -stroke { outline } else { fill };
            img.put_pixel(px, py, color);
        }
    }
}

/// Filled circle with a one-pixel outline, given its bounding box.
fn draw_circle(img: &mut RgbaImage, x: u32, y: u32, diameter: u32, fill: Rgba<u8>, outline: Rgba<u8>) {
    let r = diameter as f32 / 2.0;
    let cx = x as f32 + r;
    let cy = y as f32 + r;
    for py in y..(y + diameter).min(img.height()) {
        for px in x..(x + diameter).min(img.width()) {
            let d = ((px as f32 + 0.5 - cx).powi(2) + (py as f32 + 0.5 - cy).powi(2)).sqrt() - r;
            if d > 0.0 {
                continue;
            }
            let color = if d >= -1.0 { outline } else { fill };
            img.put_pixel(px, py, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_dimensions() {
        for size in [16, 32, 64, 256] {
            let img = placeholder_icon(size, IconStyle::Default);
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    #[test]
    fn test_placeholder_is_deterministic() {
        for style in [IconStyle::Default, IconStyle::Minimal, IconStyle::Colorful] {
            let a = placeholder_icon(64, style);
            let b = placeholder_icon(64, style);
            assert_eq!(a.as_raw(), b.as_raw(), "{style} differed between runs");
        }
    }

    #[test]
    fn test_background_stays_transparent() {
        let img = placeholder_icon(64, IconStyle::Default);
        assert_eq!(img.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(img.get_pixel(63, 63), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_styles_produce_distinct_bodies() {
        let default = placeholder_icon(64, IconStyle::Default);
        let colorful = placeholder_icon(64, IconStyle::Colorful);
        assert_ne!(default.as_raw(), colorful.as_raw());
    }

    #[test]
    fn test_builtin_numeral_draws_within_bounds() {
        let mut img = RgbaImage::from_pixel(32, 32, Rgba([0, 0, 0, 0]));
        draw_builtin_numeral(&mut img, 8);
        let lit = img.pixels().filter(|p| p.0[3] > 0).count();
        assert!(lit > 0);
    }
}
