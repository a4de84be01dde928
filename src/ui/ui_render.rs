use eframe::egui::{Align, CentralPanel, Context, Layout, RichText, SidePanel, TopBottomPanel, Ui};

use crate::app::App;
use crate::config::plot::PLOT_CONFIG;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_config::{UI_CONFIG, UI_TEXT};
use crate::ui::ui_panels::ControlPanel;

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(
                    RichText::new(&UI_TEXT.app_title)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.label_subdued(&UI_TEXT.app_subtitle);

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .button(format!("{} {}", UI_TEXT.theme_prefix, self.theme))
                        .on_hover_text(&UI_TEXT.cp_shortcuts)
                        .clicked()
                    {
                        self.cycle_theme(ctx);
                    }
                });
            });
        });
    }

    /// One line per degraded dataset. Hidden when everything loaded from its primary source.
    pub(crate) fn render_advisory_banner(&self, ctx: &Context) {
        if self.advisories.is_empty() {
            return;
        }
        TopBottomPanel::top("advisory_banner")
            .frame(UI_CONFIG.banner_frame())
            .resizable(false)
            .show(ctx, |ui| {
                for message in &self.advisories {
                    ui.label(
                        RichText::new(format!("{} {}", UI_TEXT.label_warning, message))
                            .color(UI_CONFIG.colors.banner_text),
                    );
                }
            });
    }

    /// Returns true when the selection changed and a refresh is due.
    pub(crate) fn render_left_panel(&mut self, ctx: &Context) -> bool {
        let frame = UI_CONFIG.side_panel_frame(&ctx.style().visuals);
        let outcome = SidePanel::left("control_panel")
            .frame(frame)
            .default_width(UI_CONFIG.side_panel_width)
            .resizable(true)
            .show(ctx, |ui| {
                ControlPanel::new(&mut self.selection, self.last_rejection.as_ref()).render(ui)
            })
            .inner;

        if outcome.reset_window {
            self.reset_window();
        }
        match outcome.rejected {
            Some(e) => self.last_rejection = Some(e),
            None if outcome.changed => self.last_rejection = None,
            None => {}
        }
        outcome.changed || outcome.reset_window
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.bottom_panel_frame(&ctx.style().visuals);
        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    self.render_status_window(ui);
                    ui.separator();
                    self.render_status_counts(ui);
                    ui.separator();
                    self.render_status_refresh(ui);
                    ui.separator();
                    ui.label_subdued(&self.load_signature);
                });
            });
    }

    fn render_status_window(&self, ui: &mut Ui) {
        ui.label(
            RichText::new(format!("{}: {}", UI_TEXT.sb_window, self.selection.window))
                .small()
                .color(PLOT_CONFIG.color_info),
        );
    }

    fn render_status_counts(&self, ui: &mut Ui) {
        let Some(frame) = self.engine.as_ref().and_then(|e| e.frame()) else {
            return;
        };
        let points: usize = frame
            .macro_series
            .iter()
            .chain(&frame.market_series)
            .map(|s| s.data.len())
            .sum();
        ui.label(
            RichText::new(format!(
                "{} {} | {} {}",
                frame.clusters.len(),
                UI_TEXT.sb_clusters,
                points,
                UI_TEXT.sb_points
            ))
            .small()
            .color(PLOT_CONFIG.color_text_neutral),
        );
    }

    fn render_status_refresh(&self, ui: &mut Ui) {
        let Some(engine) = self.engine.as_ref() else {
            return;
        };
        ui.label_subdued(format!(
            "{} {} | {} {}",
            UI_TEXT.sb_generation,
            engine.frame_generation(),
            engine.superseded(),
            UI_TEXT.sb_superseded
        ));
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let Some(engine) = self.engine.as_ref() else {
                ui.centered_and_justified(|ui| ui.spinner());
                return;
            };
            match engine.frame() {
                Some(frame) => self.plot_view.render(ui, frame, engine.frame_generation()),
                None => {
                    ui.centered_and_justified(|ui| ui.spinner());
                }
            }
        });
    }
}
