//! Countdown callbacks.
//!
//! The view holds a non-owning [`Weak`] observer so a released host is never
//! retained and a dead one is skipped silently. Start/stop notifications are
//! invoked directly on the calling (owner) thread; completion crosses from
//! the background worker through a channel and is delivered by
//! [`CallbackQueue::pump`] on the owner thread, no earlier than its due time.

use std::sync::Weak;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;

/// Observer of countdown lifecycle events.
///
/// All methods default to no-ops so hosts implement only what they need.
pub trait CountdownListener: Send + Sync {
    /// The countdown started ticking.
    fn on_countdown_start(&self) {}

    /// The countdown stopped before reaching zero.
    fn on_countdown_stop(&self, remaining_millis: i64) {
        let _ = remaining_millis;
    }

    /// The countdown ran out.
    fn on_countdown_completed(&self) {}
}

/// Completion notice queued by the render loop.
#[derive(Debug)]
pub(crate) struct CompletionMsg {
    /// Earliest instant the notification may be delivered.
    pub due: Instant,
}

/// Owner-thread delivery queue for completion notices.
pub(crate) struct CallbackQueue {
    rx: Receiver<CompletionMsg>,
    pending: Vec<CompletionMsg>,
}

impl CallbackQueue {
    pub fn new() -> (Self, Sender<CompletionMsg>) {
        let (tx, rx) = mpsc::channel();
        (Self { rx, pending: Vec::new() }, tx)
    }

    /// Delivers every due notice to `listener`, if it is still alive.
    ///
    /// Not-yet-due notices stay queued for a later pump; notices for a dead
    /// listener are dropped silently.
    pub fn pump(&mut self, listener: Option<&Weak<dyn CountdownListener>>) {
        while let Ok(msg) = self.rx.try_recv() {
            self.pending.push(msg);
        }

        let now = Instant::now();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due <= now {
                self.pending.remove(i);
                if let Some(listener) = listener.and_then(Weak::upgrade) {
                    listener.on_countdown_completed();
                }
            } else {
                i += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default)]
    struct Completions(AtomicUsize);

    impl CountdownListener for Completions {
        fn on_countdown_completed(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn due_notice_is_delivered_exactly_once() {
        let (mut queue, tx) = CallbackQueue::new();
        let listener: Arc<Completions> = Arc::new(Completions::default());
        let listener_dyn: Arc<dyn CountdownListener> = listener.clone();
        let weak: Weak<dyn CountdownListener> = Arc::downgrade(&listener_dyn);

        tx.send(CompletionMsg { due: Instant::now() }).unwrap();
        queue.pump(Some(&weak));
        queue.pump(Some(&weak));
        assert_eq!(listener.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn future_notice_waits_for_its_due_time() {
        let (mut queue, tx) = CallbackQueue::new();
        let listener: Arc<Completions> = Arc::new(Completions::default());
        let listener_dyn: Arc<dyn CountdownListener> = listener.clone();
        let weak: Weak<dyn CountdownListener> = Arc::downgrade(&listener_dyn);

        tx.send(CompletionMsg { due: Instant::now() + Duration::from_millis(80) })
            .unwrap();
        queue.pump(Some(&weak));
        assert_eq!(listener.0.load(Ordering::SeqCst), 0);

        std::thread::sleep(Duration::from_millis(100));
        queue.pump(Some(&weak));
        assert_eq!(listener.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dead_listener_drops_the_notice_silently() {
        let (mut queue, tx) = CallbackQueue::new();
        let listener: Arc<dyn CountdownListener> = Arc::new(Completions::default());
        let weak: Weak<dyn CountdownListener> = Arc::downgrade(&listener);
        drop(listener);

        tx.send(CompletionMsg { due: Instant::now() }).unwrap();
        queue.pump(Some(&weak));
    }

    #[test]
    fn no_listener_registered_is_a_no_op() {
        let (mut queue, tx) = CallbackQueue::new();
        tx.send(CompletionMsg { due: Instant::now() }).unwrap();
        queue.pump(None);
    }
}
