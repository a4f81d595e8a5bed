//! Hours-to-color gradient mapping.
//!
//! # Responsibility
//! - Map recorded sleep hours to a display color deterministically.
//! - Provide the text-contrast rule and legend swatches used by renderers.
//!
//! # Invariants
//! - `sleep_color` is pure; equal inputs always yield equal colors.
//! - Hours clamp to `[2, 11]` before interpolation; out-of-range persisted
//!   values therefore never panic.
//! - Channel interpolation truncates (never rounds) to integer.

/// 24-bit display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `#RRGGBB` form.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Fill for an entry recorded with no sleep data, and for backfilled
/// calendar cells.
pub const NEUTRAL_GRAY: Rgb = Rgb::new(0xDD, 0xDD, 0xDD);

pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

/// Gradient anchor stops: teal at 2h, violet at 6.5h, red at 11h.
pub const STOP_LOW: Rgb = Rgb::new(0x1C, 0xDC, 0xE8);
pub const STOP_MID: Rgb = Rgb::new(0xBB, 0x77, 0xED);
pub const STOP_HIGH: Rgb = Rgb::new(0xF3, 0x4A, 0x62);

/// Hours range covered by the gradient; values outside clamp to the edges.
pub const GRADIENT_MIN_HOURS: f64 = 2.0;
pub const GRADIENT_MAX_HOURS: f64 = 11.0;

/// Maps recorded hours to the gradient color; `None` maps to neutral gray.
pub fn sleep_color(hours: Option<f64>) -> Rgb {
    let Some(hours) = hours else {
        return NEUTRAL_GRAY;
    };
    gradient_at(normalize_hours(hours))
}

/// Samples the gradient at `count` evenly spaced points for a legend bar.
///
/// Returns low-to-high order; the caller labels the ends `2h` and `11h`.
pub fn legend_swatches(count: usize) -> Vec<Rgb> {
    match count {
        0 => Vec::new(),
        1 => vec![STOP_LOW],
        _ => (0..count)
            .map(|i| gradient_at(i as f64 / (count - 1) as f64))
            .collect(),
    }
}

/// Perceived brightness of a fill, in `[0, 1]`.
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = color.r as f64 / 255.0;
    let g = color.g as f64 / 255.0;
    let b = color.b as f64 / 255.0;
    0.299 * r + 0.587 * g + 0.114 * b
}

/// Picks a readable text color for labels drawn over `fill`.
pub fn label_color_on(fill: Rgb) -> Rgb {
    if relative_luminance(fill) < 0.5 {
        WHITE
    } else {
        BLACK
    }
}

fn normalize_hours(hours: f64) -> f64 {
    let clamped = hours.clamp(GRADIENT_MIN_HOURS, GRADIENT_MAX_HOURS);
    (clamped - GRADIENT_MIN_HOURS) / (GRADIENT_MAX_HOURS - GRADIENT_MIN_HOURS)
}

fn gradient_at(t: f64) -> Rgb {
    if t < 0.5 {
        lerp(STOP_LOW, STOP_MID, t * 2.0)
    } else {
        lerp(STOP_MID, STOP_HIGH, (t - 0.5) * 2.0)
    }
}

fn lerp(a: Rgb, b: Rgb, u: f64) -> Rgb {
    Rgb::new(
        lerp_channel(a.r, b.r, u),
        lerp_channel(a.g, b.g, u),
        lerp_channel(a.b, b.b, u),
    )
}

fn lerp_channel(a: u8, b: u8, u: f64) -> u8 {
    // Truncation matches the reference palette exactly; rounding would shift
    // some channels by one.
    ((1.0 - u) * a as f64 + u * b as f64) as u8
}
