// Cell presentation - colors, elevation and label for one grid square

use crate::display::formatters::format_timestamp_lines;
use crate::grid::selection::Timestamp;
use ratatui::style::Color;

/// 24-bit color that can be blended during transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Blend towards `other`; `t` is clamped to 0..=1
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
        )
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

pub const BACKGROUND: Rgb = Rgb(18, 18, 22);
pub const NEUTRAL_FILL: Rgb = Rgb(62, 64, 72);
pub const SELECTED_FILL: Rgb = Rgb(40, 132, 220);
pub const SHADOW: Rgb = Rgb(0, 0, 0);
pub const LABEL: Rgb = Rgb(255, 255, 255);
pub const FOCUS: Rgb = Rgb(250, 200, 60);

/// Shadow strength of a resting cell
pub const REST_ELEVATION: f32 = 1.0;
/// Shadow strength of a selected cell
pub const RAISED_ELEVATION: f32 = 4.0;

/// What a cell looks like at one moment, possibly mid-transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellAppearance {
    pub fill: Rgb,
    pub elevation: f32,
}

impl CellAppearance {
    pub fn for_state(selected: bool) -> Self {
        if selected {
            Self {
                fill: SELECTED_FILL,
                elevation: RAISED_ELEVATION,
            }
        } else {
            Self {
                fill: NEUTRAL_FILL,
                elevation: REST_ELEVATION,
            }
        }
    }

    pub fn lerp(self, target: CellAppearance, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            fill: self.fill.lerp(target.fill, t),
            elevation: self.elevation + (target.elevation - self.elevation) * t,
        }
    }

    /// Shadow darkens the background in proportion to elevation
    pub fn shadow_color(&self) -> Rgb {
        BACKGROUND.lerp(SHADOW, self.elevation / RAISED_ELEVATION)
    }
}

/// Everything needed to draw one cell, derived fresh on each render
#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    pub index: usize,
    pub selected: bool,
    pub timestamp: Option<Timestamp>,
    pub edge_length: f32,
    pub appearance: CellAppearance,
    pub focused: bool,
}

impl CellView {
    /// Label size in points. Terminals draw text at a fixed size, so this
    /// only decides whether the label fits.
    pub fn font_size(&self) -> f32 {
        self.edge_length / 6.0
    }

    /// `MM/dd` and `HH:mm`, present only for selected cells
    pub fn label_lines(&self) -> Option<(String, String)> {
        if !self.selected {
            return None;
        }
        self.timestamp.as_ref().map(format_timestamp_lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn view(selected: bool) -> CellView {
        let timestamp = selected.then(|| {
            Local
                .with_ymd_and_hms(2025, 3, 5, 14, 7, 0)
                .single()
                .unwrap()
        });
        CellView {
            index: 0,
            selected,
            timestamp,
            edge_length: 60.0,
            appearance: CellAppearance::for_state(selected),
            focused: false,
        }
    }

    #[test]
    fn test_rgb_lerp_endpoints() {
        assert_eq!(NEUTRAL_FILL.lerp(SELECTED_FILL, 0.0), NEUTRAL_FILL);
        assert_eq!(NEUTRAL_FILL.lerp(SELECTED_FILL, 1.0), SELECTED_FILL);
        assert_eq!(Rgb(0, 0, 0).lerp(Rgb(200, 100, 50), 0.5), Rgb(100, 50, 25));
        assert_eq!(Rgb(0, 0, 0).lerp(Rgb(10, 10, 10), 7.0), Rgb(10, 10, 10));
    }

    #[test]
    fn test_selected_cell_sits_higher() {
        let raised = CellAppearance::for_state(true);
        let rest = CellAppearance::for_state(false);
        assert!(raised.elevation > rest.elevation);
        // more elevation means a darker shadow
        assert!(raised.shadow_color().0 < rest.shadow_color().0);
    }

    #[test]
    fn test_font_size_scales_with_edge() {
        assert!((view(true).font_size() - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_label_only_when_selected() {
        assert_eq!(
            view(true).label_lines(),
            Some(("03/05".to_string(), "14:07".to_string()))
        );
        assert_eq!(view(false).label_lines(), None);
    }
}
