use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// One colour per plotted series, hues evenly spaced around the wheel.
#[derive(Debug, Clone, Default)]
pub struct SeriesPalette {
    colors: Vec<Color32>,
}

impl SeriesPalette {
    pub fn new(n: usize) -> Self {
        let colors = (0..n)
            .map(|i| {
                let hue = (i as f32 / n as f32) * 360.0;
                hsl_to_color32(Hsl::new(hue, 0.75, 0.5))
            })
            .collect();
        SeriesPalette { colors }
    }

    /// Colour of series `i`; out-of-range indices get gray.
    pub fn color_for(&self, i: usize) -> Color32 {
        self.colors.get(i).copied().unwrap_or(Color32::GRAY)
    }
}

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}
