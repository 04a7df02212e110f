//! Color math: hex parsing, YIQ luma transforms, alpha compositing.
//!
//! All hex strings handled here are bare (no leading `#`) unless noted.
//! Channel values are `f64` in `[0, 1]`; conversions divide by 256 rather
//! than 255 to stay bit-compatible with the scheme files this tool targets.

/// Normalize a hex color: strip a leading `#` and expand 3- or 4-character
/// shorthand by nibble duplication (`"abc"` becomes `"aabbcc"`).
pub fn normalize_hex(color: &str) -> String {
    let color = color.strip_prefix('#').unwrap_or(color);
    if color.len() == 3 || color.len() == 4 {
        let mut out = String::with_capacity(color.len() * 2);
        for c in color.chars() {
            out.push(c);
            out.push(c);
        }
        return out.to_ascii_lowercase();
    }
    color.to_ascii_lowercase()
}

/// Parse the first 6 characters of a normalized hex color into RGB channels
/// in `[0, 1]`. Returns `None` on anything that is not hex.
///
/// 8-character inputs carry alpha in the trailing 2 characters; that byte is
/// the caller's business and is not consumed here.
pub fn hex_to_rgb(hex: &str) -> Option<(f64, f64, f64)> {
    let hex = normalize_hex(hex);
    let channel = |range: std::ops::Range<usize>| -> Option<f64> {
        if hex.len() < range.end {
            return Some(0.0);
        }
        u8::from_str_radix(&hex[range], 16)
            .ok()
            .map(|v| f64::from(v) / 256.0)
    };
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// RGB to YIQ (Python `colorsys` coefficients).
pub fn rgb_to_yiq(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let y = 0.30 * r + 0.59 * g + 0.11 * b;
    let i = 0.74 * (r - y) - 0.27 * (b - y);
    let q = 0.48 * (r - y) + 0.41 * (b - y);
    (y, i, q)
}

/// YIQ back to RGB, channels clamped to `[0, 1]`.
pub fn yiq_to_rgb(y: f64, i: f64, q: f64) -> (f64, f64, f64) {
    let r = y + 0.9468822170900693 * i + 0.6235565819861433 * q;
    let g = y - 0.27478764629897834 * i - 0.6356910791873801 * q;
    let b = y - 1.1085450346420322 * i + 1.7090069284064666 * q;
    (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
}

/// Hex color straight to YIQ. Unparseable input is treated as black.
pub fn hex_to_yiq(hex: &str) -> (f64, f64, f64) {
    let (r, g, b) = hex_to_rgb(hex).unwrap_or((0.0, 0.0, 0.0));
    rgb_to_yiq(r, g, b)
}

/// The Y (luma) component of a hex color, in `[0, 1]`.
pub fn luma(hex: &str) -> f64 {
    hex_to_yiq(hex).0
}

/// RGB channels in `[0, 1]` to a lowercase 6-digit hex string.
/// Each channel is clamped via `min(round(c * 256), 255)`.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    let quant = |c: f64| -> u8 { ((c * 256.0).round() as i64).clamp(0, 255) as u8 };
    format!("{:02x}{:02x}{:02x}", quant(r), quant(g), quant(b))
}

/// Convert a theme color (`#RRGGBB` or `#RRGGBBAA`) into a bare 6-digit hex
/// string. An 8-digit color with a backdrop is alpha-composited over it
/// (`alpha = last byte / 256`); without a backdrop the alpha is dropped.
pub fn from_theme(color: &str, backdrop: Option<&str>) -> Option<String> {
    let rgba = normalize_hex(color);
    if rgba.len() == 8 {
        if let Some(backdrop) = backdrop {
            let (r, g, b) = hex_to_rgb(&rgba)?;
            let (rb, gb, bb) = hex_to_rgb(backdrop)?;
            let alpha = f64::from(u8::from_str_radix(&rgba[6..8], 16).ok()?) / 256.0;
            return Some(rgb_to_hex(
                r * alpha + rb * (1.0 - alpha),
                g * alpha + gb * (1.0 - alpha),
                b * alpha + bb * (1.0 - alpha),
            ));
        }
    }
    if rgba.len() < 6 {
        return None;
    }
    Some(rgba[..6].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_expands_by_nibble_duplication() {
        assert_eq!(normalize_hex("abc"), "aabbcc");
        assert_eq!(normalize_hex("#F0C"), "ff00cc");
        assert_eq!(normalize_hex("#A1B2C3"), "a1b2c3");
    }

    #[test]
    fn hex_rgb_round_trip() {
        for hex in ["000000", "ffffff", "7f7f7f", "1a2b3c", "ff0000"] {
            let (r, g, b) = hex_to_rgb(hex).unwrap();
            assert_eq!(rgb_to_hex(r, g, b), hex, "round trip of {hex}");
        }
    }

    #[test]
    fn short_input_pads_missing_channels_with_zero() {
        // Degenerate but accepted: only the red channel is present.
        let (r, g, b) = hex_to_rgb("ff").unwrap();
        assert!(r > 0.99);
        assert_eq!((g, b), (0.0, 0.0));
    }

    #[test]
    fn rejects_non_hex() {
        assert!(hex_to_rgb("zzzzzz").is_none());
    }

    #[test]
    fn luma_extremes() {
        assert_eq!(luma("000000"), 0.0);
        assert!(luma("ffffff") > 0.9);
        assert!(luma("ffffff") < 1.0);
        // Mid gray sits near the middle.
        let mid = luma("7f7f7f");
        assert!(mid > 0.4 && mid < 0.6);
    }

    #[test]
    fn yiq_round_trip_stays_close() {
        let (r, g, b) = hex_to_rgb("3c6e9f").unwrap();
        let (y, i, q) = rgb_to_yiq(r, g, b);
        let (r2, g2, b2) = yiq_to_rgb(y, i, q);
        assert!((r - r2).abs() < 1e-6);
        assert!((g - g2).abs() < 1e-6);
        assert!((b - b2).abs() < 1e-6);
    }

    #[test]
    fn plain_theme_color_passes_through() {
        assert_eq!(from_theme("#FF0000", None).unwrap(), "ff0000");
        assert_eq!(from_theme("#FF0000", Some("000000")).unwrap(), "ff0000");
    }

    #[test]
    fn rgba_without_backdrop_drops_alpha() {
        assert_eq!(from_theme("#11223380", None).unwrap(), "112233");
    }

    #[test]
    fn rgba_composites_over_backdrop() {
        // Full white at zero alpha disappears into the backdrop.
        assert_eq!(from_theme("#ffffff00", Some("000000")).unwrap(), "000000");
        // Alpha 0x80 of white over black lands at mid gray.
        let blended = from_theme("#ffffff80", Some("000000")).unwrap();
        let (r, _, _) = hex_to_rgb(&blended).unwrap();
        assert!((r - 0.5).abs() < 0.01, "got {blended}");
    }
}
