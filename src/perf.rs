//! Lightweight profiling instrumentation for interaction hot paths.
//!
//! Pointer-move handling and the paint pass run on every frame during a
//! drag; the `profile_scope!` macro wraps them in a scoped timer that logs
//! any scope exceeding its threshold. Zero-cost unless the `profiling`
//! feature is enabled.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Default threshold for reporting a slow scope, in milliseconds (one frame
/// at 60fps is ~16ms; interaction scopes should be far below that)
const SLOW_SCOPE_MS: f64 = 1.0;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
///
/// # Example
/// ```ignore
/// fn handle_mouse_move() {
///     profile_scope!("handle_mouse_move");
///     // ... event handling code ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
}

pub use profile_scope;

/// Enable or disable profiling at runtime.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Check if profiling is currently enabled.
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// A scoped timer that logs its duration on drop when it exceeds the slow
/// threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    /// Get elapsed time without stopping the timer.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !is_profiling_enabled() {
            return;
        }
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms >= SLOW_SCOPE_MS {
            tracing::debug!(scope = self.name, elapsed_ms, "slow scope");
        }
    }
}
