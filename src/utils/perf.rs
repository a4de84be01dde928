use crate::config::LOG_PERFORMANCE;
use crate::utils::AppInstant;

/// Warns on drop when the guarded scope outlived its budget.
pub struct SlowScope {
    name: &'static str,
    threshold_micros: u128,
    start: AppInstant,
}

impl SlowScope {
    /// `None` unless `LOG_PERFORMANCE` is on, so the disabled path never reads the clock.
    pub fn start(name: &'static str, threshold_micros: u128) -> Option<Self> {
        LOG_PERFORMANCE.then(|| Self {
            name,
            threshold_micros,
            start: AppInstant::now(),
        })
    }
}

impl Drop for SlowScope {
    fn drop(&mut self) {
        let micros = self.start.elapsed().as_micros();
        if micros > self.threshold_micros {
            let mode = if cfg!(debug_assertions) { "DEBUG" } else { "RELEASE" };
            log::warn!(
                "🐢 SLOW [{}]: '{}' took {:.3}ms (budget {:.3}ms)",
                mode,
                self.name,
                micros as f64 / 1000.0,
                self.threshold_micros as f64 / 1000.0
            );
        }
    }
}

/// Times a block. `$threshold_micros`: 500 for 0.5ms, 2_000 for 2ms, etc.
#[macro_export]
macro_rules! trace_time {
    ($name:expr, $threshold_micros:expr, $block:block) => {{
        let _scope = $crate::utils::SlowScope::start($name, $threshold_micros);
        $block
    }};
}
