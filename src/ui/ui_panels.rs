use eframe::egui::{RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;

use crate::config::{DF, definitions_for};
use crate::domain::SeriesCategory;
use crate::models::{SelectionError, SelectionState};
use crate::ui::UI_CONFIG;
use crate::ui::styles::{UiStyleExt, colored_subsection_heading, hex_to_color32};
use crate::ui::ui_text::UI_TEXT;

/// What the panel did this frame.
#[derive(Debug, Default)]
pub struct PanelOutcome {
    pub changed: bool,
    pub reset_window: bool,
    pub rejected: Option<SelectionError>,
}

impl PanelOutcome {
    fn apply(&mut self, result: Result<bool, SelectionError>) {
        match result {
            Ok(changed) => self.changed |= changed,
            Err(e) => {
                #[cfg(debug_assertions)]
                if DF.log_selection {
                    log::info!("🚫 Selection edit rejected: {}", e);
                }
                self.rejected = Some(e);
            }
        }
    }
}

/// Left-hand control panel editing a `SelectionState` in place.
pub struct ControlPanel<'a> {
    selection: &'a mut SelectionState,
    last_rejection: Option<&'a SelectionError>,
}

impl<'a> ControlPanel<'a> {
    pub fn new(selection: &'a mut SelectionState, last_rejection: Option<&'a SelectionError>) -> Self {
        Self {
            selection,
            last_rejection,
        }
    }

    pub fn render(&mut self, ui: &mut Ui) -> PanelOutcome {
        let mut outcome = PanelOutcome::default();

        ui.heading(RichText::new(&UI_TEXT.cp_heading).color(UI_CONFIG.colors.heading));
        ui.separator();

        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            self.render_window(ui, &mut outcome);
            ui.separator();
            self.render_category(ui, SeriesCategory::Macro, &UI_TEXT.cp_macros, &mut outcome);
            ui.separator();
            self.render_category(ui, SeriesCategory::Market, &UI_TEXT.cp_markets, &mut outcome);
            ui.separator();
            self.render_toggles(ui, &mut outcome);

            if let Some(err) = self.last_rejection {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("{} {}", UI_TEXT.label_warning, err))
                        .small()
                        .color(UI_CONFIG.colors.rejected_text),
                );
            }
        });

        outcome
    }

    fn render_window(&mut self, ui: &mut Ui, outcome: &mut PanelOutcome) {
        ui.label_subheader(&UI_TEXT.cp_window);
        let window = &mut self.selection.window;

        ui.horizontal(|ui| {
            ui.label(&UI_TEXT.cp_start);
            if let Some(mut start) = window.start_date()
                && ui
                    .add(DatePickerButton::new(&mut start).id_salt("window_start"))
                    .changed()
            {
                outcome.apply(window.set_start_date(start).map(|_| true));
            }
        });
        ui.horizontal(|ui| {
            ui.label(&UI_TEXT.cp_end);
            if let Some(mut end) = window.end_date()
                && ui
                    .add(DatePickerButton::new(&mut end).id_salt("window_end"))
                    .changed()
            {
                outcome.apply(window.set_end_date(end).map(|_| true));
            }
        });
        if ui.small_button(&UI_TEXT.cp_reset_window).clicked() {
            outcome.reset_window = true;
        }
    }

    fn render_category(
        &mut self,
        ui: &mut Ui,
        category: SeriesCategory,
        heading: &str,
        outcome: &mut PanelOutcome,
    ) {
        ui.label(colored_subsection_heading(heading).strong());
        for def in definitions_for(category) {
            let mut on = self.selection.keys(category).contains(def.key);
            ui.horizontal(|ui| {
                ui.color_swatch(hex_to_color32(def.color));
                if ui.checkbox(&mut on, def.label).changed() {
                    outcome.apply(self.selection.toggle_key(category, def.key, on));
                }
            });
        }
    }

    fn render_toggles(&mut self, ui: &mut Ui, outcome: &mut PanelOutcome) {
        ui.label_subheader(&UI_TEXT.cp_display);
        let s = &mut *self.selection;
        let toggles = [
            (&mut s.rebase, &UI_TEXT.cp_rebase),
            (&mut s.log_scale, &UI_TEXT.cp_log_scale),
            (&mut s.show_annotations, &UI_TEXT.cp_annotations),
            (&mut s.smooth_lines, &UI_TEXT.cp_smooth),
        ];
        for (flag, label) in toggles {
            if ui.checkbox(flag, label.as_str()).changed() {
                outcome.changed = true;
            }
        }
        ui.add_space(4.0);
        ui.label_subdued(&UI_TEXT.cp_shortcuts);
    }
}
