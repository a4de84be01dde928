mod plot_layers;
mod screens;
mod styles;
mod ui_config;
mod ui_panels;
mod ui_plot_view;
mod ui_render;
mod ui_text;
pub mod utils;

pub(crate) use screens::render_bootstrap;

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use ui_plot_view::PlotView;
