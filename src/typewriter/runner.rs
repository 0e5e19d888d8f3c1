use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Duration,
};

use super::Typewriter;

/// One-shot timers.
pub trait Scheduler: Clone + 'static {
    type Handle: 'static;

    /// Arms `tick` after `delay`, or returns `None` if no timer could be set.
    fn schedule(&self, delay: Duration, tick: Box<dyn FnOnce()>) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

struct State<S: Scheduler> {
    typewriter: Typewriter,
    on_text: Box<dyn FnMut(&str)>,
    pending: Option<S::Handle>,
    stopped: bool,
}

/// Drives a [`Typewriter`] on a [`Scheduler`], handing every new display
/// string to `on_text`.
///
/// Each tick re-arms the next one before returning. Armed callbacks only hold
/// a weak reference to the runner, and [`Runner::stop`] (or dropping the
/// runner) cancels the pending timer, so nothing fires after teardown.
pub struct Runner<S: Scheduler> {
    scheduler: S,
    state: Rc<RefCell<State<S>>>,
}

impl<S: Scheduler> Runner<S> {
    pub fn start(
        scheduler: S,
        typewriter: Typewriter,
        on_text: impl FnMut(&str) + 'static,
    ) -> Self {
        let first = typewriter.first_delay();
        let state = Rc::new(RefCell::new(State {
            typewriter,
            on_text: Box::new(on_text),
            pending: None,
            stopped: false,
        }));
        if let Some(delay) = first {
            arm(&scheduler, &state, delay);
        }
        Self { scheduler, state }
    }

    pub fn is_running(&self) -> bool {
        let state = self.state.borrow();
        !state.stopped && state.pending.is_some()
    }

    pub fn display(&self) -> String {
        self.state.borrow().typewriter.display().to_string()
    }

    pub fn stop(&self) {
        let pending = {
            let mut state = self.state.borrow_mut();
            state.stopped = true;
            state.pending.take()
        };
        if let Some(handle) = pending {
            self.scheduler.cancel(handle);
        }
    }
}

impl<S: Scheduler> Drop for Runner<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn arm<S: Scheduler>(scheduler: &S, state: &Rc<RefCell<State<S>>>, delay: Duration) {
    let weak = Rc::downgrade(state);
    let sched = scheduler.clone();
    let handle = scheduler.schedule(delay, Box::new(move || fire(&sched, &weak)));
    state.borrow_mut().pending = handle;
}

fn fire<S: Scheduler>(scheduler: &S, state: &Weak<RefCell<State<S>>>) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let next = {
        let mut guard = state.borrow_mut();
        if guard.stopped {
            return;
        }
        guard.pending = None;
        let State {
            typewriter,
            on_text,
            ..
        } = &mut *guard;
        let next = typewriter.tick();
        on_text(typewriter.display());
        next
    };
    if let Some(delay) = next {
        arm(scheduler, &state, delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typewriter::Timing;

    type Tick = Box<dyn FnOnce()>;

    #[derive(Default)]
    struct ClockState {
        now: Duration,
        next_id: u64,
        queue: Vec<(Duration, u64, Tick)>,
        refusing: bool,
    }

    // Virtual clock: callbacks only run inside `advance_to`
    #[derive(Clone, Default)]
    struct ManualClock {
        inner: Rc<RefCell<ClockState>>,
    }

    impl ManualClock {
        fn now_ms(&self) -> u64 {
            self.inner.borrow().now.as_millis() as u64
        }

        fn refuse_timers(&self) {
            self.inner.borrow_mut().refusing = true;
        }

        fn pending(&self) -> usize {
            self.inner.borrow().queue.len()
        }

        fn advance_to(&self, ms: u64) {
            let target = Duration::from_millis(ms);
            loop {
                let due = {
                    let mut clock = self.inner.borrow_mut();
                    let next = clock
                        .queue
                        .iter()
                        .enumerate()
                        .filter(|(_, (at, _, _))| *at <= target)
                        .min_by_key(|(_, (at, id, _))| (*at, *id))
                        .map(|(i, _)| i);
                    match next {
                        Some(i) => {
                            let (at, _, tick) = clock.queue.remove(i);
                            clock.now = at;
                            Some(tick)
                        }
                        None => {
                            clock.now = target;
                            None
                        }
                    }
                };
                match due {
                    Some(tick) => tick(),
                    None => break,
                }
            }
        }
    }

    impl Scheduler for ManualClock {
        type Handle = u64;

        fn schedule(&self, delay: Duration, tick: Box<dyn FnOnce()>) -> Option<u64> {
            let mut clock = self.inner.borrow_mut();
            if clock.refusing {
                return None;
            }
            let id = clock.next_id;
            clock.next_id += 1;
            let at = clock.now + delay;
            clock.queue.push((at, id, tick));
            Some(id)
        }

        fn cancel(&self, handle: u64) {
            self.inner
                .borrow_mut()
                .queue
                .retain(|(_, id, _)| *id != handle);
        }
    }

    type Frames = Rc<RefCell<Vec<(u64, String)>>>;

    fn start(clock: &ManualClock, phrases: &[&str]) -> (Runner<ManualClock>, Frames) {
        let frames = Frames::default();
        let sink = frames.clone();
        let time = clock.clone();
        let typewriter = Typewriter::new(
            phrases.iter().copied(),
            Timing {
                typing: Duration::from_millis(100),
                deleting: Duration::from_millis(50),
                pause: Duration::from_millis(1000),
            },
        );
        let runner = Runner::start(clock.clone(), typewriter, move |text: &str| {
            sink.borrow_mut().push((time.now_ms(), text.to_string()))
        });
        (runner, frames)
    }

    fn text_at(frames: &Frames, ms: u64) -> Option<String> {
        frames
            .borrow()
            .iter()
            .rev()
            .find(|(t, _)| *t <= ms)
            .map(|(_, s)| s.clone())
    }

    #[test]
    fn test_two_phrase_timeline() {
        let clock = ManualClock::default();
        let (runner, frames) = start(&clock, &["AB", "C"]);
        assert!(runner.is_running());

        clock.advance_to(2650);
        let frames_vec = frames.borrow().clone();
        assert_eq!(
            frames_vec,
            vec![
                (100, "A".to_string()),
                (200, "AB".to_string()),
                (1200, "AB".to_string()),
                (1250, "A".to_string()),
                (1300, "".to_string()),
                (1400, "C".to_string()),
                (2400, "C".to_string()),
                (2450, "".to_string()),
                (2550, "A".to_string()),
                (2650, "AB".to_string()),
            ]
        );
        assert_eq!(text_at(&frames, 1299), Some("A".to_string()));
        assert_eq!(runner.display(), "AB");
    }

    #[test]
    fn test_nothing_fires_after_stop() {
        let clock = ManualClock::default();
        let (runner, frames) = start(&clock, &["AB", "C"]);
        clock.advance_to(1250);
        let seen = frames.borrow().len();

        runner.stop();
        assert!(!runner.is_running());
        assert_eq!(clock.pending(), 0);

        clock.advance_to(10_000);
        assert_eq!(frames.borrow().len(), seen);
        assert_eq!(runner.display(), "A");
    }

    #[test]
    fn test_nothing_fires_after_drop() {
        let clock = ManualClock::default();
        let (runner, frames) = start(&clock, &["hello", "world"]);
        clock.advance_to(300);
        let seen = frames.borrow().len();
        assert_eq!(text_at(&frames, 300), Some("hel".to_string()));

        drop(runner);
        assert_eq!(clock.pending(), 0);
        clock.advance_to(60_000);
        assert_eq!(frames.borrow().len(), seen);
    }

    #[test]
    fn test_remount_starts_over() {
        let clock = ManualClock::default();
        let (first, first_frames) = start(&clock, &["AB", "C"]);
        clock.advance_to(1400);
        drop(first);
        let frozen = first_frames.borrow().len();

        let (second, second_frames) = start(&clock, &["AB", "C"]);
        clock.advance_to(1500);
        assert_eq!(text_at(&second_frames, 1500), Some("A".to_string()));
        assert_eq!(first_frames.borrow().len(), frozen);
        assert!(second.is_running());
    }

    #[test]
    fn test_empty_list_never_arms() {
        let clock = ManualClock::default();
        let (runner, frames) = start(&clock, &[]);
        assert!(!runner.is_running());
        assert_eq!(clock.pending(), 0);
        clock.advance_to(5_000);
        assert!(frames.borrow().is_empty());
        assert_eq!(runner.display(), "");
    }

    #[test]
    fn test_not_running_when_timer_fails() {
        let clock = ManualClock::default();
        let (runner, frames) = start(&clock, &["AB", "C"]);
        clock.refuse_timers();
        clock.advance_to(100);

        assert_eq!(text_at(&frames, 100), Some("A".to_string()));
        assert_eq!(clock.pending(), 0);
        assert!(!runner.is_running());

        let refused = ManualClock::default();
        refused.refuse_timers();
        let (runner, _) = start(&refused, &["AB"]);
        assert!(!runner.is_running());
    }
}
