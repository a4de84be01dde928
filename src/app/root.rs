use {
    eframe::{
        Frame, Storage,
        egui::{Context, Key},
    },
    serde::{Deserialize, Serialize},
    std::{
        mem,
        sync::{
            mpsc,
            mpsc::{Receiver, TryRecvError},
        },
        time::Duration,
    },
};

use crate::{
    Cli,
    app::{AppState, BootstrapState, PhaseView, RunningState},
    config::{DF, GapDays, PERSISTENCE, ThemeMode},
    data::{LoadReport, fetch_datasets},
    engine::TimelineEngine,
    models::{SelectionError, SelectionState},
    ui::{PlotView, render_bootstrap},
    utils::{SlowScope, now_timestamp_ms},
};

#[cfg(not(target_arch = "wasm32"))]
use {std::thread, tokio::runtime::Runtime};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) selection: SelectionState, // persists across sessions (window excepted)
    pub(crate) theme: ThemeMode,
    #[serde(skip)]
    pub(crate) engine: Option<TimelineEngine>,
    #[serde(skip)]
    pub(crate) plot_view: PlotView,
    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    pub(crate) data_rx: Option<Receiver<LoadReport>>,
    #[serde(skip)]
    pub(crate) advisories: Vec<String>,
    #[serde(skip)]
    pub(crate) load_signature: String,
    #[serde(skip)]
    pub(crate) last_rejection: Option<SelectionError>,
    #[serde(skip)]
    pub(crate) min_gap: GapDays,
}

impl Default for App {
    fn default() -> Self {
        Self {
            selection: SelectionState::default(),
            theme: ThemeMode::default(),
            engine: None,
            plot_view: PlotView::new(),
            state: AppState::default(),
            data_rx: None,
            advisories: Vec::new(),
            load_signature: String::new(),
            last_rejection: None,
            min_gap: GapDays::DEFAULT,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.selection = mem::take(&mut app.selection).retain_known();
        #[cfg(debug_assertions)]
        if DF.log_persistence {
            log::info!(
                "📂 RESTORE [App]: macros {:?}, markets {:?}, theme {}",
                app.selection.macros,
                app.selection.markets,
                app.theme
            );
        }

        cc.egui_ctx.set_theme(app.theme.preference());
        cc.egui_ctx
            .style_mut(|s| s.interaction.selectable_labels = false);

        app.min_gap = GapDays::new(args.min_gap_days);
        app.plot_view = PlotView::new();
        app.state = AppState::Bootstrapping(BootstrapState::default());

        let (data_tx, data_rx) = mpsc::channel();
        app.data_rx = Some(data_rx);

        #[cfg(not(target_arch = "wasm32"))]
        {
            thread::spawn(move || match Runtime::new() {
                Ok(rt) => {
                    let report = rt.block_on(fetch_datasets(&args));
                    let _ = data_tx.send(report);
                }
                Err(e) => {
                    // Dropping the sender lets the bootstrap phase carry on with no data.
                    log::error!("Failed to create loader runtime: {}", e);
                }
            });
        }

        #[cfg(target_arch = "wasm32")]
        {
            wasm_bindgen_futures::spawn_local(async move {
                let report = fetch_datasets(&args).await;
                let _ = data_tx.send(report);
            });
        }

        app
    }

    /// Returns the next phase once the loader has reported.
    pub(crate) fn finalize_bootstrap_if_ready(&mut self) -> Option<AppState> {
        let report = match self.data_rx.as_ref()?.try_recv() {
            Ok(report) => report,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                log::error!("Dataset loader exited without a report");
                LoadReport {
                    messages: vec!["Datasets could not be loaded.".to_string()],
                    signature: "missing".to_string(),
                    ..Default::default()
                }
            }
        };
        self.data_rx = None;
        self.build_engine(report);
        Some(AppState::Running(RunningState))
    }

    fn build_engine(&mut self, report: LoadReport) {
        let LoadReport {
            datasets,
            messages,
            signature,
            ..
        } = report;

        let mut engine = TimelineEngine::new(datasets, self.min_gap);
        self.selection.window = engine.initial_window(now_timestamp_ms());
        engine.request(self.selection.clone());

        #[cfg(debug_assertions)]
        if DF.log_engine_core {
            log::info!(
                "🚀 Engine ready ({}), window {}, min gap {}",
                signature,
                self.selection.window,
                self.min_gap
            );
        }

        self.advisories = messages;
        self.load_signature = signature;
        self.engine = Some(engine);
    }

    pub(crate) fn render_bootstrap_phase(&mut self, ctx: &Context, state: &BootstrapState) {
        ctx.request_repaint();
        render_bootstrap(ctx, state);
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        let _frame_scope = SlowScope::start("running frame", 500_000);

        let mut changed = self.handle_global_shortcuts(ctx);
        self.render_top_panel(ctx);
        self.render_advisory_banner(ctx);
        changed |= self.render_left_panel(ctx);
        if changed {
            self.request_refresh();
        }

        if let Some(e) = &mut self.engine {
            e.update();
        }

        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
    }

    /// Hands the current selection to the engine as the newest snapshot.
    pub(crate) fn request_refresh(&mut self) {
        if let Some(e) = &mut self.engine {
            let _generation = e.request(self.selection.clone());
            #[cfg(debug_assertions)]
            if DF.log_selection {
                log::info!(
                    "🎯 Selection changed (gen {}): window {}, rebase {}, log {}",
                    _generation,
                    self.selection.window,
                    self.selection.rebase,
                    self.selection.log_scale
                );
            }
        }
    }

    /// Resets the window to the full extent of the loaded data.
    pub(crate) fn reset_window(&mut self) {
        if let Some(e) = &self.engine {
            self.selection.window = e.initial_window(now_timestamp_ms());
        }
    }

    pub(crate) fn cycle_theme(&mut self, ctx: &Context) {
        self.theme = self.theme.next();
        ctx.set_theme(self.theme.preference());
    }

    /// Keyboard toggles. Returns true when the selection changed.
    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) -> bool {
        if ctx.wants_keyboard_input() {
            // Typing in a date field, leave the keys alone.
            return false;
        }

        let (rebase, log_scale, annotations, smooth, theme) = ctx.input(|i| {
            (
                i.key_pressed(Key::R),
                i.key_pressed(Key::L),
                i.key_pressed(Key::A),
                i.key_pressed(Key::S),
                i.key_pressed(Key::T),
            )
        });

        if rebase {
            self.selection.rebase = !self.selection.rebase;
        }
        if log_scale {
            self.selection.log_scale = !self.selection.log_scale;
        }
        if annotations {
            self.selection.show_annotations = !self.selection.show_annotations;
        }
        if smooth {
            self.selection.smooth_lines = !self.selection.smooth_lines;
        }
        if theme {
            self.cycle_theme(ctx);
        }

        rebase || log_scale || annotations || smooth
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Bootstrapping(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        #[cfg(debug_assertions)]
        if DF.log_persistence {
            log::info!(
                "💾 SAVE [App]: macros {:?}, markets {:?}, theme {}",
                self.selection.macros,
                self.selection.markets,
                self.theme
            );
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(PERSISTENCE.app.auto_save_secs)
    }
}
