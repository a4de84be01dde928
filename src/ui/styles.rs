use {
    crate::{config::plot::PLOT_CONFIG, ui::UI_CONFIG},
    eframe::egui::{Color32, CornerRadius, Response, RichText, Sense, Stroke, StrokeKind, Ui, vec2},
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Parses an HTML hex colour. Unparseable input falls back to the subdued text colour.
pub fn hex_to_color32(hex: &str) -> Color32 {
    match colorgrad::Color::from_html(hex) {
        Ok(color) => {
            let [r, g, b, a] = color.to_rgba8();
            Color32::from_rgba_unmultiplied(r, g, b, a)
        }
        Err(e) => {
            log::warn!("Bad colour {:?}: {}", hex, e);
            PLOT_CONFIG.color_text_subdued
        }
    }
}

pub fn apply_opacity(color: Color32, factor: f32) -> Color32 {
    color.linear_multiply(factor)
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn label_subheader(&mut self, text: impl Into<String>);
    /// Small filled square, used beside series checkboxes
    fn color_swatch(&mut self, color: Color32) -> Response;
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(PLOT_CONFIG.color_text_subdued));
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text).strong());
    }

    fn color_swatch(&mut self, color: Color32) -> Response {
        let size = PLOT_CONFIG.swatch_size;
        let (rect, response) = self.allocate_exact_size(vec2(size, size), Sense::hover());
        self.painter().rect(
            rect,
            CornerRadius::same(2),
            color,
            Stroke::new(1.0, PLOT_CONFIG.color_widget_border),
            StrokeKind::Inside,
        );
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colours_parse() {
        assert_eq!(hex_to_color32("#22c55e"), Color32::from_rgb(0x22, 0xc5, 0x5e));
        assert_eq!(hex_to_color32("nonsense"), PLOT_CONFIG.color_text_subdued);
    }
}
