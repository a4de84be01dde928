use {
    crate::{app::BootstrapState, config::plot::PLOT_CONFIG, ui::UI_TEXT},
    eframe::egui::{CentralPanel, Context, RichText},
};

pub(crate) fn render_bootstrap(ctx: &Context, state: &BootstrapState) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.heading(
                RichText::new(&UI_TEXT.ls_title)
                    .size(24.0)
                    .strong()
                    .color(PLOT_CONFIG.color_warning),
            );
            ui.add_space(12.0);
            ui.label(
                RichText::new(&UI_TEXT.ls_loading)
                    .italics()
                    .color(PLOT_CONFIG.color_text_neutral),
            );
            ui.add_space(12.0);
            ui.spinner();
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("{:.1}s", state.started.elapsed().as_secs_f32()))
                    .small()
                    .color(PLOT_CONFIG.color_text_subdued),
            );
        });
    });
}
