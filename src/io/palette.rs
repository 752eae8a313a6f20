//! Tile colours derived from signed intensities

use crate::io::configuration::{
    BACKGROUND_COLOR, MIN_TILE_OPACITY, NEGATIVE_COLOR, NEUTRAL_COLOR, POSITIVE_COLOR,
};

/// Largest absolute intensity, ignoring non-finite values
pub fn max_magnitude(intensities: impl IntoIterator<Item = f64>) -> f64 {
    intensities
        .into_iter()
        .map(f64::abs)
        .filter(|magnitude| magnitude.is_finite())
        .fold(0.0, f64::max)
}

/// Opaque colour for a tile with the given intensity
///
/// Positive intensities are green and negative ones red. The strength of the
/// colour grows linearly with `|intensity| / max_magnitude`, starting from
/// [`MIN_TILE_OPACITY`], and is blended over the background. Zero or
/// non-finite intensity, or a zero `max_magnitude`, gives the neutral colour.
pub fn tile_color(intensity: f64, max_magnitude: f64) -> [u8; 4] {
    if !intensity.is_finite() || intensity == 0.0 || max_magnitude <= 0.0 {
        return opaque(NEUTRAL_COLOR);
    }

    let base = if intensity > 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    };
    let strength = (intensity.abs() / max_magnitude).clamp(0.0, 1.0);
    let opacity = (1.0 - MIN_TILE_OPACITY).mul_add(strength, MIN_TILE_OPACITY);

    blend(base, opacity)
}

fn blend(color: [u8; 3], opacity: f64) -> [u8; 4] {
    let [r, g, b] = color;
    let [br, bg, bb, _] = BACKGROUND_COLOR;
    [
        mix(br, r, opacity),
        mix(bg, g, opacity),
        mix(bb, b, opacity),
        u8::MAX,
    ]
}

fn mix(background: u8, foreground: u8, opacity: f64) -> u8 {
    let value = f64::from(foreground).mul_add(opacity, f64::from(background) * (1.0 - opacity));
    value.round().clamp(0.0, 255.0) as u8
}

const fn opaque(color: [u8; 3]) -> [u8; 4] {
    [color[0], color[1], color[2], u8::MAX]
}
