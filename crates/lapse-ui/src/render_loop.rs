//! Paced render loop.
//!
//! The background worker driving the countdown: once per interval it
//! acquires a frame, paints the fields derived from the *current* remaining
//! duration, publishes, decrements, and sleeps out the rest of the interval.
//! The sleep is interruptible so an external stop terminates the loop
//! promptly, and nothing raised inside an iteration escapes the worker.

use std::sync::mpsc::Sender;
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use lapse_engine::raster;
use lapse_engine::scene::DrawList;
use lapse_engine::surface::{RenderSurface, SurfaceError};
use lapse_engine::text::FontSystem;
use lapse_engine::time::TickPacer;

use crate::clock::{CountdownClock, TimeFields};
use crate::listener::CompletionMsg;
use crate::painter::CountdownPainter;
use crate::style::ResolvedStyle;

/// Fixed cadence: one tick per second.
pub(crate) const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Fixed delay between the final tick and completion delivery.
pub(crate) const COMPLETION_DELAY: Duration = Duration::from_millis(1000);

/// Lifecycle of the paced render loop.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RunState {
    /// No run has happened yet.
    Idle,
    /// A background worker is ticking.
    Running,
    /// The final tick happened; completion is being handed off.
    Stopping,
    /// The worker has exited.
    Stopped,
}

/// State shared between the owner thread and the background worker.
///
/// One mutex guards the whole tick-and-draw step, so the owner never
/// observes a half-updated duration and never races a frame acquire/publish
/// pair.
pub(crate) struct LoopShared {
    pub surface: Box<dyn RenderSurface>,
    pub clock: CountdownClock,
    pub style: ResolvedStyle,
    pub fonts: Arc<FontSystem>,
    pub draw_list: DrawList,
    pub state: RunState,
}

/// Locks `shared`, recovering the inner state if a peer panicked mid-hold.
pub(crate) fn lock_shared(shared: &Mutex<LoopShared>) -> MutexGuard<'_, LoopShared> {
    match shared.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Interruptible sleep for the pacing wait.
///
/// `stop` latches until [`reset`](WakeSignal::reset); a waiter parked in
/// [`wait`](WakeSignal::wait) wakes immediately when a stop is requested.
pub(crate) struct WakeSignal {
    stop: Mutex<bool>,
    condvar: Condvar,
}

impl WakeSignal {
    pub fn new() -> Self {
        Self {
            stop: Mutex::new(false),
            condvar: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, bool> {
        match self.stop.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Clears a latched stop before a new run.
    pub fn reset(&self) {
        *self.lock() = false;
    }

    pub fn request_stop(&self) {
        *self.lock() = true;
        self.condvar.notify_all();
    }

    pub fn stop_requested(&self) -> bool {
        *self.lock()
    }

    /// Blocks for up to `timeout` or until a stop arrives.
    ///
    /// Returns `true` if a stop was requested.
    pub fn wait(&self, timeout: Duration) -> bool {
        let guard = self.lock();
        match self
            .condvar
            .wait_timeout_while(guard, timeout, |stopped| !*stopped)
        {
            Ok((guard, _)) => *guard,
            Err(poisoned) => *poisoned.into_inner().0,
        }
    }
}

/// Acquires a frame, paints `fields` onto it, and publishes it.
///
/// An `Unavailable` acquire bubbles up so the caller can skip the tick; a
/// publish failure is logged and swallowed — the tick still counts, the
/// frame was a best-effort attempt.
pub(crate) fn paint_frame(shared: &mut LoopShared, fields: TimeFields) -> Result<(), SurfaceError> {
    let LoopShared { surface, style, fonts, draw_list, .. } = shared;

    let mut frame = surface.begin_frame()?;

    draw_list.clear();
    CountdownPainter::new(draw_list, fonts).draw_time(
        style,
        &fields.hour_label(),
        &fields.minute_label(),
        &fields.second_label(),
    );
    raster::render_list(&mut frame, draw_list, fonts);

    if let Err(err) = surface.present(frame) {
        log::warn!("frame publish failed: {err}");
    }
    Ok(())
}

/// Body of the background worker.
///
/// Exits on a stop request (no completion) or when the remaining duration
/// goes negative (completion queued with its delivery delay). Either way the
/// shared state ends at `Stopped`.
pub(crate) fn run(
    shared: Arc<Mutex<LoopShared>>,
    signal: Arc<WakeSignal>,
    completion_tx: Sender<CompletionMsg>,
) {
    let mut pacer = TickPacer::new(TICK_INTERVAL);

    loop {
        {
            let mut guard = lock_shared(&shared);

            if signal.stop_requested() {
                guard.state = RunState::Stopped;
                return;
            }

            // The displayed fields come from the value *before* this tick's
            // decrement, so the first frame shows the starting time.
            let fields = guard.clock.fields();
            match paint_frame(&mut guard, fields) {
                Ok(()) => {
                    guard.clock.tick();
                    if guard.clock.remaining_millis() < 0 {
                        guard.state = RunState::Stopping;
                        let due = Instant::now() + COMPLETION_DELAY;
                        if completion_tx.send(CompletionMsg { due }).is_err() {
                            log::debug!("completion dropped: owner side gone");
                        }
                        guard.state = RunState::Stopped;
                        return;
                    }
                }
                Err(SurfaceError::Unavailable) => {
                    // Normal backpressure; retry after the pacing delay.
                    log::debug!("tick skipped: surface unavailable");
                }
                Err(err) => {
                    log::warn!("frame acquire failed: {err}");
                }
            }
        }

        // Pacing happens outside the shared lock so a concurrent stop can
        // take it while this worker sleeps.
        let now = Instant::now();
        if let Some(wait) = pacer.pending(now) {
            if signal.wait(wait) {
                lock_shared(&shared).state = RunState::Stopped;
                return;
            }
        }
        pacer.mark(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    // ── WakeSignal ────────────────────────────────────────────────────────

    #[test]
    fn wait_times_out_without_a_stop() {
        let signal = WakeSignal::new();
        assert!(!signal.wait(Duration::from_millis(20)));
    }

    #[test]
    fn request_stop_wakes_a_parked_waiter() {
        let signal = Arc::new(WakeSignal::new());
        let waiter = {
            let signal = Arc::clone(&signal);
            thread::spawn(move || {
                let start = Instant::now();
                let stopped = signal.wait(Duration::from_secs(10));
                (stopped, start.elapsed())
            })
        };

        thread::sleep(Duration::from_millis(50));
        signal.request_stop();
        let (stopped, waited) = waiter.join().unwrap();
        assert!(stopped);
        assert!(waited < Duration::from_secs(5));
    }

    #[test]
    fn stop_latches_until_reset() {
        let signal = WakeSignal::new();
        signal.request_stop();
        assert!(signal.stop_requested());
        assert!(signal.wait(Duration::from_millis(5)));

        signal.reset();
        assert!(!signal.stop_requested());
    }
}
