//! Fixed-width ASCII progress bars rendered next to each match score.

pub const FILLED_GLYPH: char = '█';
pub const EMPTY_GLYPH: char = '░';
pub const DEFAULT_BAR_LENGTH: usize = 10;
/// Longest bar the service will render.
pub const MAX_BAR_LENGTH: usize = 100;

/// Renders `percentage` (0–100) as a bar of `length` cells followed by the value.
///
/// Filled cells = `floor(length × percentage / 100)`, clamped to `0..=length`.
pub fn ascii_bar(percentage: f64, length: usize) -> String {
    let filled = if percentage.is_finite() {
        ((length as f64 * percentage / 100.0).floor().max(0.0) as usize).min(length)
    } else {
        0
    };

    let mut bar = String::with_capacity(length * FILLED_GLYPH.len_utf8() + 8);
    bar.extend(std::iter::repeat(FILLED_GLYPH).take(filled));
    bar.extend(std::iter::repeat(EMPTY_GLYPH).take(length - filled));
    format!("{bar} {percentage:.1}%")
}
