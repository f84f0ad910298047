use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::notify;

use super::{FocusTimer, TickOutcome};

const TICK_INTERVAL_MS: u32 = 1_000;

/// Browser services the timer depends on
pub trait TimerHost: 'static {
    /// Handle for a periodic callback; dropping it stops the callback
    type Interval: 'static;

    fn every(&self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> Self::Interval;

    /// Run `task` after the current callback returns
    fn defer(&self, task: Box<dyn FnOnce()>);

    fn notify_complete(&self);
}

/// gloo intervals, the leptos task queue and the Notification API
pub struct BrowserHost;

impl TimerHost for BrowserHost {
    type Interval = Interval;

    fn every(&self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, on_tick)
    }

    fn defer(&self, task: Box<dyn FnOnce()>) {
        spawn_local(async move { task() });
    }

    fn notify_complete(&self) {
        notify::notify_focus_complete();
    }
}

/// Owns the focus timer state and its single periodic callback.
///
/// The interval lives in one slot: storing a new one drops (clears) the
/// previous, and pause/reset/completion empty the slot.
pub struct TimerController<H: TimerHost = BrowserHost> {
    state: RwSignal<FocusTimer>,
    ticker: StoredValue<Option<H::Interval>, LocalStorage>,
    host: StoredValue<H, LocalStorage>,
}

impl<H: TimerHost> Clone for TimerController<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: TimerHost> Copy for TimerController<H> {}

impl TimerController {
    pub fn new(duration_secs: u32) -> Self {
        Self::with_host(duration_secs, BrowserHost)
    }
}

impl<H: TimerHost> TimerController<H> {
    pub fn with_host(duration_secs: u32, host: H) -> Self {
        Self {
            state: RwSignal::new(FocusTimer::new(duration_secs)),
            ticker: StoredValue::new_local(None),
            host: StoredValue::new_local(host),
        }
    }

    /// Current `MM:SS` readout (tracked)
    pub fn display(&self) -> String {
        self.state.with(|timer| timer.display())
    }

    pub fn is_running(&self) -> bool {
        self.state.with(|timer| timer.is_running())
    }

    /// Start/Pause button behaviour
    pub fn toggle(&self) {
        if self.state.with_untracked(|timer| timer.is_running()) {
            self.pause();
        } else {
            self.start();
        }
    }

    pub fn start(&self) {
        let started = self.state.try_update(|timer| timer.start()).unwrap_or(false);
        if !started {
            return;
        }
        let controller = *self;
        let interval = self
            .host
            .with_value(|host| host.every(TICK_INTERVAL_MS, Box::new(move || controller.on_tick())));
        self.ticker.set_value(Some(interval));
        tracing::info!(
            time_left = self.state.with_untracked(|timer| timer.time_left()),
            "focus timer started"
        );
    }

    pub fn pause(&self) {
        let paused = self.state.try_update(|timer| timer.pause()).unwrap_or(false);
        if paused {
            self.cancel_ticker();
            tracing::info!(
                time_left = self.state.with_untracked(|timer| timer.time_left()),
                "focus timer paused"
            );
        }
    }

    pub fn reset(&self) {
        self.cancel_ticker();
        self.state.update(|timer| timer.reset());
        tracing::info!("focus timer reset");
    }

    fn cancel_ticker(&self) {
        self.ticker.set_value(None);
    }

    fn on_tick(&self) {
        let outcome = self
            .state
            .try_update(|timer| timer.tick())
            .unwrap_or(TickOutcome::Ignored);

        if outcome != TickOutcome::Completed {
            return;
        }

        // Dropping the interval from inside its own callback would free the
        // closure mid-call, so defer it.
        let controller = *self;
        self.host
            .with_value(|host| host.defer(Box::new(move || controller.cancel_ticker())));

        tracing::info!("focus session completed");
        self.host.with_value(|host| host.notify_complete());
        self.state.update(|timer| timer.finish());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    const FULL: u32 = 25 * 60;

    struct Scheduled {
        live: Rc<Cell<bool>>,
        on_tick: Option<Box<dyn FnMut()>>,
    }

    #[derive(Default)]
    struct Clock {
        scheduled: Vec<Scheduled>,
        deferred: Vec<Box<dyn FnOnce()>>,
        notifications: u32,
    }

    /// Hand-driven stand-in for the browser event loop
    #[derive(Clone, Default)]
    struct ManualHost(Rc<RefCell<Clock>>);

    struct ManualInterval(Rc<Cell<bool>>);

    impl Drop for ManualInterval {
        fn drop(&mut self) {
            self.0.set(false);
        }
    }

    impl TimerHost for ManualHost {
        type Interval = ManualInterval;

        fn every(&self, _period_ms: u32, on_tick: Box<dyn FnMut()>) -> ManualInterval {
            let live = Rc::new(Cell::new(true));
            self.0.borrow_mut().scheduled.push(Scheduled {
                live: live.clone(),
                on_tick: Some(on_tick),
            });
            ManualInterval(live)
        }

        fn defer(&self, task: Box<dyn FnOnce()>) {
            self.0.borrow_mut().deferred.push(task);
        }

        fn notify_complete(&self) {
            self.0.borrow_mut().notifications += 1;
        }
    }

    impl ManualHost {
        fn created(&self) -> usize {
            self.0.borrow().scheduled.len()
        }

        fn live(&self) -> usize {
            self.0.borrow().scheduled.iter().filter(|s| s.live.get()).count()
        }

        fn notifications(&self) -> u32 {
            self.0.borrow().notifications
        }

        /// One period elapses: every live interval fires once
        fn advance(&self) {
            let count = self.created();
            for index in 0..count {
                let callback = {
                    let mut clock = self.0.borrow_mut();
                    let scheduled = &mut clock.scheduled[index];
                    if !scheduled.live.get() {
                        continue;
                    }
                    scheduled.on_tick.take()
                };
                if let Some(mut on_tick) = callback {
                    on_tick();
                    self.0.borrow_mut().scheduled[index].on_tick = Some(on_tick);
                }
            }
        }

        fn advance_by(&self, periods: u32) {
            for _ in 0..periods {
                self.advance();
            }
        }

        fn run_deferred(&self) {
            let tasks = std::mem::take(&mut self.0.borrow_mut().deferred);
            for task in tasks {
                task();
            }
        }
    }

    fn controller(duration: u32) -> (TimerController<ManualHost>, ManualHost) {
        let host = ManualHost::default();
        (TimerController::with_host(duration, host.clone()), host)
    }

    #[test]
    fn test_start_twice_keeps_one_interval() {
        let (timer, host) = controller(FULL);
        timer.start();
        timer.start();
        assert_eq!(host.created(), 1);
        assert_eq!(host.live(), 1);

        host.advance();
        assert_eq!(timer.display(), "24:59");
    }

    #[test]
    fn test_toggle_replaces_interval() {
        let (timer, host) = controller(FULL);
        timer.toggle();
        assert!(timer.is_running());
        timer.toggle();
        assert!(!timer.is_running());
        assert_eq!(host.live(), 0);

        timer.toggle();
        assert_eq!(host.created(), 2);
        assert_eq!(host.live(), 1);
    }

    #[test]
    fn test_pause_clears_interval_and_keeps_time() {
        let (timer, host) = controller(FULL);
        timer.start();
        host.advance_by(90);
        timer.pause();
        assert_eq!(host.live(), 0);
        assert_eq!(timer.display(), "23:30");

        host.advance_by(5);
        assert_eq!(timer.display(), "23:30");

        timer.start();
        host.advance();
        assert_eq!(timer.display(), "23:29");
    }

    #[test]
    fn test_reset_leaves_no_pending_callback() {
        let (timer, host) = controller(FULL);
        timer.start();
        host.advance_by(10);
        timer.reset();
        assert_eq!(host.live(), 0);
        assert_eq!(timer.display(), "25:00");

        host.advance_by(10);
        assert_eq!(timer.display(), "25:00");
        assert!(!timer.is_running());

        // Reset while idle is harmless
        timer.reset();
        assert_eq!(host.live(), 0);
    }

    #[test]
    fn test_completion_notifies_once_then_idles() {
        let (timer, host) = controller(FULL);
        timer.start();
        host.advance_by(FULL);

        assert_eq!(host.notifications(), 1);
        assert_eq!(timer.display(), "25:00");
        assert!(!timer.is_running());

        // The interval outlives its final callback until the deferred cancel runs
        assert_eq!(host.live(), 1);
        host.run_deferred();
        assert_eq!(host.live(), 0);

        host.advance_by(3);
        assert_eq!(host.notifications(), 1);
        assert_eq!(timer.display(), "25:00");
    }

    #[test]
    fn test_stray_tick_before_deferred_cancel_is_ignored() {
        let (timer, host) = controller(2);
        timer.start();
        host.advance_by(2);
        assert_eq!(host.notifications(), 1);

        host.advance();
        assert_eq!(host.notifications(), 1);
        assert_eq!(timer.display(), "00:02");

        host.run_deferred();
        timer.start();
        assert_eq!(host.live(), 1);
    }
}
