// Copyright 2025 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks.
//!
//! Label placement needs the size of the rendered text. Shaping stays with the host renderer,
//! so layout code measures through this trait and the renderer supplies the implementation.

use kurbo::Size;

/// A minimal text measurement interface.
///
/// Implementations can be heuristic ([`HeuristicTextMeasurer`]) or backed by a shaping engine.
pub trait TextMeasurer {
    /// Returns the size of a single line of `text` at `font_size`.
    fn measure(&self, text: &str, font_size: f64) -> Size;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        (**self).measure(text, font_size)
    }
}

/// A tiny heuristic text measurer suitable for demos and tests.
///
/// It assumes an average glyph width of ~0.6em and a line height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        let width = 0.6 * font_size * text.chars().count() as f64;
        Size::new(width, font_size)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn heuristic_width_grows_with_glyph_count() {
        let m = HeuristicTextMeasurer;
        assert_eq!(m.measure("", 10.0), Size::new(0.0, 10.0));
        assert_eq!(m.measure("17", 10.0), Size::new(12.0, 10.0));
        // Counts chars, not bytes.
        assert_eq!(m.measure("ºC", 10.0).width, 12.0);
    }
}
