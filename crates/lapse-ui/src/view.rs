//! The countdown view.
//!
//! [`CountdownView`] is the component hosts embed: it owns the clock, the
//! resolved style, and the injected surface, reacts to the platform's
//! surface lifecycle, and coordinates the background render loop's
//! start/stop with elapsed-time correction across pauses.

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, Weak};
use std::thread::{self, JoinHandle};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use lapse_engine::scene::DrawList;
use lapse_engine::surface::{RenderSurface, SurfaceEvents};
use lapse_engine::text::FontSystem;

use crate::clock::{CountdownClock, TimeFields};
use crate::listener::{CallbackQueue, CompletionMsg, CountdownListener};
use crate::render_loop::{self, LoopShared, RunState, WakeSignal, lock_shared, paint_frame};
use crate::style::{CountdownStyle, Density};

/// A countdown display over an injected render surface.
///
/// All methods are called from the owning/UI thread; the only other thread
/// of control is the single background worker spawned per run. Completion
/// notifications are queued by the worker and handed to the listener from
/// [`pump_callbacks`](CountdownView::pump_callbacks) on the owning thread.
///
/// # Example
/// ```rust,ignore
/// let surface = BufferSurface::new(132, 34);
/// let mut view = CountdownView::new(
///     surface.clone(),
///     fonts,
///     CountdownStyle::new().font(font),
///     Density(2.0),
/// );
/// view.set_time(0, 1, 30);
/// view.on_surface_available(132, 34);
/// ```
pub struct CountdownView {
    shared: Arc<Mutex<LoopShared>>,
    signal: Arc<WakeSignal>,
    worker: Option<JoinHandle<()>>,
    completion_tx: Sender<CompletionMsg>,
    callbacks: CallbackQueue,
    listener: Option<Weak<dyn CountdownListener>>,

    style: CountdownStyle,
    density: Density,

    auto_resume: bool,
    /// Set when the surface was destroyed while running; consumed on the
    /// next surface-available event.
    pause_mark: Option<Instant>,

    time_hour: u32,
    time_minute: u32,
    time_second: u32,
}

impl CountdownView {
    pub fn new(
        surface: impl RenderSurface + 'static,
        fonts: FontSystem,
        style: CountdownStyle,
        density: Density,
    ) -> Self {
        let (callbacks, completion_tx) = CallbackQueue::new();
        let shared = LoopShared {
            surface: Box::new(surface),
            clock: CountdownClock::new(0),
            style: style.resolve(density),
            fonts: Arc::new(fonts),
            draw_list: DrawList::new(),
            state: RunState::Idle,
        };
        Self {
            shared: Arc::new(Mutex::new(shared)),
            signal: Arc::new(WakeSignal::new()),
            worker: None,
            completion_tx,
            callbacks,
            listener: None,
            style,
            density,
            auto_resume: true,
            pause_mark: None,
            time_hour: 0,
            time_minute: 0,
            time_second: 0,
        }
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Starts the countdown. Idempotent: a second call while running is a
    /// no-op.
    ///
    /// With no time remaining, paints the zero face once synchronously and
    /// stays stopped.
    pub fn start(&mut self) {
        {
            let mut guard = lock_shared(&self.shared);
            match guard.state {
                RunState::Running | RunState::Stopping => return,
                RunState::Idle | RunState::Stopped => {}
            }

            if guard.clock.remaining_millis() <= 0 {
                if let Err(err) = paint_frame(&mut guard, TimeFields::default()) {
                    log::debug!("zero face not painted: {err}");
                }
                return;
            }

            // State flips under the same lock that checked it, so two racing
            // starts cannot both spawn.
            guard.state = RunState::Running;
        }

        self.reap_worker();
        self.signal.reset();

        let shared = Arc::clone(&self.shared);
        let signal = Arc::clone(&self.signal);
        let completion_tx = self.completion_tx.clone();
        let spawned = thread::Builder::new()
            .name("lapse-countdown".into())
            .spawn(move || render_loop::run(shared, signal, completion_tx));

        match spawned {
            Ok(handle) => {
                self.worker = Some(handle);
                self.notify(|l| l.on_countdown_start());
            }
            Err(err) => {
                log::error!("countdown worker spawn failed: {err}");
                lock_shared(&self.shared).state = RunState::Stopped;
            }
        }
    }

    /// Stops the countdown, joining the background worker synchronously.
    /// Idempotent: stopping a non-running countdown is a no-op.
    pub fn stop(&mut self) {
        {
            let guard = lock_shared(&self.shared);
            if guard.state != RunState::Running {
                return;
            }
        }

        self.signal.request_stop();
        self.reap_worker();

        let remaining = lock_shared(&self.shared).clock.remaining_millis();
        self.notify(|l| l.on_countdown_stop(remaining));
    }

    pub fn is_running(&self) -> bool {
        lock_shared(&self.shared).state == RunState::Running
    }

    /// Current remaining duration in milliseconds. Negative once completed.
    pub fn remaining_millis(&self) -> i64 {
        lock_shared(&self.shared).clock.remaining_millis()
    }

    // ── time ──────────────────────────────────────────────────────────────

    /// Sets the countdown target from an hour/minute/second triple. Does not
    /// start the countdown.
    pub fn set_time(&mut self, hour: u32, minute: u32, second: u32) {
        self.time_hour = hour;
        self.time_minute = minute;
        self.time_second = second;
        self.update_time();
    }

    pub fn set_hour(&mut self, hour: u32) {
        self.time_hour = hour;
        self.update_time();
    }

    pub fn set_minute(&mut self, minute: u32) {
        self.time_minute = minute;
        self.update_time();
    }

    pub fn set_second(&mut self, second: u32) {
        self.time_second = second;
        self.update_time();
    }

    /// Sets the countdown target directly in milliseconds.
    pub fn set_time_millis(&mut self, millis: i64) {
        self.pause_mark = None;
        lock_shared(&self.shared).clock.reset(millis);
    }

    /// Sets the countdown target from an absolute timestamp; the instant's
    /// epoch milliseconds become the total duration.
    pub fn set_time_at(&mut self, at: SystemTime) {
        let millis = at
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        self.set_time_millis(millis);
    }

    fn update_time(&mut self) {
        self.set_time_millis(CountdownClock::millis_from_parts(
            self.time_hour,
            self.time_minute,
            self.time_second,
        ));
    }

    // ── behavior ──────────────────────────────────────────────────────────

    /// Enables or disables elapsed-time compensation across a surface
    /// destroy/recreate cycle. Enabled by default.
    pub fn set_auto_resume(&mut self, enabled: bool) {
        self.auto_resume = enabled;
    }

    /// Registers the lifecycle observer. The reference is non-owning: a
    /// dropped listener is skipped silently.
    pub fn set_listener(&mut self, listener: Weak<dyn CountdownListener>) {
        self.listener = Some(listener);
    }

    /// Delivers any due completion notifications on the calling (owning)
    /// thread.
    pub fn pump_callbacks(&mut self) {
        self.callbacks.pump(self.listener.as_ref());
    }

    // ── style ─────────────────────────────────────────────────────────────

    pub fn set_rect_width(&mut self, dp: f32) {
        self.style = self.style.clone().rect_width(dp);
        self.refit();
    }

    pub fn set_rect_height(&mut self, dp: f32) {
        self.style = self.style.clone().rect_height(dp);
        self.refit();
    }

    pub fn set_rect_spacing(&mut self, dp: f32) {
        self.style = self.style.clone().rect_spacing(dp);
        self.refit();
    }

    /// Plate width in device pixels.
    pub fn rect_width(&self) -> f32 {
        lock_shared(&self.shared).style.rect_width
    }

    /// Plate height in device pixels.
    pub fn rect_height(&self) -> f32 {
        lock_shared(&self.shared).style.rect_height
    }

    /// Plate spacing in device pixels.
    pub fn rect_spacing(&self) -> f32 {
        lock_shared(&self.shared).style.rect_spacing
    }

    // ── internal ──────────────────────────────────────────────────────────

    /// Recomputes the px-space geometry from the current style and density.
    fn refit(&mut self) {
        lock_shared(&self.shared).style = self.style.resolve(self.density);
    }

    /// Joins a worker that has exited or been told to stop.
    fn reap_worker(&mut self) {
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                log::error!("countdown worker panicked");
            }
        }
    }

    fn notify(&self, f: impl FnOnce(&dyn CountdownListener)) {
        if let Some(listener) = self.listener.as_ref().and_then(Weak::upgrade) {
            f(&*listener);
        }
    }
}

impl SurfaceEvents for CountdownView {
    fn on_surface_available(&mut self, width: u32, height: u32) {
        let _ = (width, height);
        if let Some(mark) = self.pause_mark.take() {
            let paused = mark.elapsed().as_millis() as i64;
            lock_shared(&self.shared).clock.compensate(paused);
        }
        self.start();
    }

    fn on_surface_size_changed(&mut self, width: u32, height: u32) {
        let _ = (width, height);
        self.refit();
    }

    fn on_surface_destroyed(&mut self) -> bool {
        if self.auto_resume && self.is_running() {
            self.pause_mark = Some(Instant::now());
        }
        self.stop();
        true
    }
}

impl Drop for CountdownView {
    fn drop(&mut self) {
        // Silent teardown: join the worker without listener callbacks.
        self.signal.request_stop();
        self.reap_worker();
    }
}
