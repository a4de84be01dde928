use eframe::egui::{Color32, Frame, Margin, Stroke, Visuals};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub banner_fill: Color32,
    pub banner_text: Color32,
    pub rejected_text: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        heading: Color32::from_rgb(56, 189, 248),
        subsection_heading: Color32::from_rgb(249, 115, 22),
        banner_fill: Color32::from_rgb(120, 53, 15),
        banner_text: Color32::from_rgb(254, 243, 199),
        rejected_text: Color32::from_rgb(244, 63, 94),
    },
    side_panel_width: 240.0,
};

impl UiConfig {
    /// Frame for Left/Right panels (Standard padding), following the active theme
    pub fn side_panel_frame(&self, visuals: &Visuals) -> Frame {
        Frame {
            fill: visuals.panel_fill,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the advisory banner under the top bar
    pub fn banner_frame(&self) -> Frame {
        Frame {
            fill: self.colors.banner_fill,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    /// Frame for Bottom Status bar (Tighter vertical padding)
    pub fn bottom_panel_frame(&self, visuals: &Visuals) -> Frame {
        Frame {
            fill: visuals.panel_fill,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4), // Tighter vertically
            ..Default::default()
        }
    }
}
