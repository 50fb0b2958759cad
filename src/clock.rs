//! Wall-clock abstraction
//!
//! The countdown timer and the spawn gate both run off real elapsed time.
//! Injecting the clock lets tests drive time forward without sleeping.

/// Source of monotonically increasing wall-clock milliseconds
pub trait GameClock {
    fn now_ms(&self) -> f64;
}

/// Browser clock backed by `Date.now()`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct BrowserClock;

#[cfg(target_arch = "wasm32")]
impl GameClock for BrowserClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

/// Native clock measured from process start
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct SystemClock {
    origin: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl GameClock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Platform default clock
#[cfg(target_arch = "wasm32")]
pub fn default_clock() -> Box<dyn GameClock> {
    Box::new(BrowserClock)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_clock() -> Box<dyn GameClock> {
    Box::new(SystemClock::default())
}

/// Hand-cranked clock for tests and headless runs.
///
/// Clones share the same underlying time, so a copy can keep advancing the
/// clock after another copy has been boxed into the engine.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: std::rc::Rc<std::cell::Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `ms`
    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }
}

impl GameClock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_across_clones() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        clock.advance(250.0);
        assert_eq!(handle.now_ms(), 250.0);
        handle.advance(750.0);
        assert_eq!(clock.now_ms(), 1000.0);
    }
}
