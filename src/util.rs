//! Memoized values and an elapsed-time stopwatch.
//!
//! Both are single-threaded helpers. The host runs every handler on one UI
//! thread without re-entrancy, so interior mutability is plain `RefCell`.

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

use std::cell::RefCell;
use std::fmt;

/// A lazily computed value that can be invalidated.
///
/// The first [`Memo::get`] runs the producer and caches its result. Later
/// calls return the cached value until [`Memo::clear`] drops it.
pub struct Memo<T> {
    value: RefCell<Option<T>>,
    compute: Box<dyn Fn() -> T>,
}

impl<T: Clone> Memo<T> {
    pub fn new(compute: impl Fn() -> T + 'static) -> Self {
        Self { value: RefCell::new(None), compute: Box::new(compute) }
    }

    /// Cached value, computing it first if needed.
    pub fn get(&self) -> T {
        if let Some(value) = self.value.borrow().as_ref() {
            return value.clone();
        }
        let value = (self.compute)();
        *self.value.borrow_mut() = Some(value.clone());
        value
    }

    /// Drop the cached value so the next [`Memo::get`] recomputes.
    pub fn clear(&self) {
        self.value.borrow_mut().take();
    }

    /// Whether a value is currently cached.
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.value.borrow().is_some()
    }
}

impl<T: fmt::Debug> fmt::Debug for Memo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo").field("value", &self.value).finish_non_exhaustive()
    }
}

/// Source of wall-clock milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock of the running host: `Date.now()` in the browser, the system clock elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(target_arch = "wasm32")]
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_ms(&self) -> f64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |elapsed| elapsed.as_secs_f64() * 1000.0)
    }
}

/// Stopwatch measuring one session at a time.
#[derive(Debug, Default)]
pub struct Timer<C: Clock = SystemClock> {
    clock: C,
    start_at: Option<f64>,
}

impl Timer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> Timer<C> {
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self { clock, start_at: None }
    }

    /// Begin a session, replacing any unfinished one.
    pub fn start(&mut self) {
        self.start_at = Some(self.clock.now_ms());
    }

    /// Discard the current session without measuring it.
    pub fn cancel(&mut self) {
        self.start_at = None;
    }

    /// Milliseconds since [`Timer::start`], ending the session. Zero when no session is active.
    pub fn stop(&mut self) -> f64 {
        match self.start_at.take() {
            Some(started) => (self.clock.now_ms() - started).max(0.0),
            None => 0.0,
        }
    }

    /// Whether a session is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.start_at.is_some()
    }
}
