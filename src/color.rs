use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{Accommodation, TripGrade};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            // Hue 210 (blue) first.
            let hue = 210.0 + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.55, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Category colours
// ---------------------------------------------------------------------------

/// Fixed colour per canonical category, shared by the sidebar and charts so
/// a grade keeps its colour whatever the filter selection.
#[derive(Debug, Clone)]
pub struct CategoryColors {
    grades: Vec<Color32>,
    accommodations: Vec<Color32>,
    pub missing: Color32,
}

impl Default for CategoryColors {
    fn default() -> Self {
        CategoryColors {
            grades: generate_palette(TripGrade::ALL.len()),
            accommodations: generate_palette(Accommodation::ALL.len()),
            missing: Color32::GRAY,
        }
    }
}

impl CategoryColors {
    pub fn grade(&self, grade: Option<TripGrade>) -> Color32 {
        grade
            .and_then(|g| TripGrade::ALL.iter().position(|&x| x == g))
            .and_then(|i| self.grades.get(i).copied())
            .unwrap_or(self.missing)
    }

    pub fn accommodation(&self, acc: Option<Accommodation>) -> Color32 {
        acc.and_then(|a| Accommodation::ALL.iter().position(|&x| x == a))
            .and_then(|i| self.accommodations.get(i).copied())
            .unwrap_or(self.missing)
    }
}
