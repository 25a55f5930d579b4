//! Frame-coalescing scheduler for scroll- and resize-driven visual work.
//!
//! Scroll and resize events arrive far more often than the page repaints.
//! Each visual effect registers a [`ScheduledUpdate`]; triggering it while
//! a frame is already pending is a no-op, so any number of events between
//! two repaints collapse into a single callback invocation that reads the
//! geometry current at invocation time.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_render::AnimationFrame;

/// Source of "run this at the next frame boundary" tasks.
///
/// The browser implementation is [`BrowserFrames`]; tests drive the
/// scheduler with a manually pumped queue instead.
pub trait FrameSource {
    fn request_frame(&self, task: Box<dyn FnOnce()>);
}

struct UpdateInner {
    pending: Cell<bool>,
    callback: Box<dyn Fn()>,
}

/// A visual update registered with the scheduler: one per effect, created
/// at setup time and shared (cheaply cloned) with the event closures that
/// trigger it.
///
/// `pending` is cleared immediately before the callback runs, not after.
/// An event arriving while the callback executes therefore schedules the
/// next frame instead of being absorbed, and a panicking callback cannot
/// leave the update permanently blocked.
#[derive(Clone)]
pub struct ScheduledUpdate {
    inner: Rc<UpdateInner>,
}

impl ScheduledUpdate {
    pub fn new(callback: impl Fn() + 'static) -> Self {
        Self {
            inner: Rc::new(UpdateInner {
                pending: Cell::new(false),
                callback: Box::new(callback),
            }),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.inner.pending.get()
    }

    /// Runs the callback synchronously, outside any frame. Used for the
    /// initial paint at setup so the page is correct before the first
    /// scroll event.
    pub fn run_now(&self) {
        (self.inner.callback)();
    }
}

pub struct FrameScheduler<F: FrameSource> {
    frames: F,
}

impl<F: FrameSource> FrameScheduler<F> {
    pub fn new(frames: F) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &F {
        &self.frames
    }

    /// Called from event handlers. If the update already has a frame
    /// pending the event is absorbed; otherwise one frame task is
    /// requested for it.
    pub fn trigger(&self, update: &ScheduledUpdate) {
        if update.inner.pending.replace(true) {
            return;
        }
        let inner = Rc::clone(&update.inner);
        self.frames.request_frame(Box::new(move || {
            inner.pending.set(false);
            (inner.callback)();
        }));
    }
}

/// Frame source backed by `requestAnimationFrame`. Each in-flight
/// [`AnimationFrame`] handle is held until its callback fires, since
/// dropping the handle cancels the frame.
pub struct BrowserFrames {
    inflight: Rc<RefCell<HashMap<u64, AnimationFrame>>>,
    next_id: Cell<u64>,
}

impl BrowserFrames {
    pub fn new() -> Self {
        Self {
            inflight: Rc::new(RefCell::new(HashMap::new())),
            next_id: Cell::new(0),
        }
    }
}

impl Default for BrowserFrames {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for BrowserFrames {
    fn request_frame(&self, task: Box<dyn FnOnce()>) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        let inflight = Rc::clone(&self.inflight);
        let handle = gloo_render::request_animation_frame(move |_timestamp| {
            inflight.borrow_mut().remove(&id);
            task();
        });
        self.inflight.borrow_mut().insert(id, handle);
    }
}

/// The shared scheduler handed to every effect's setup function.
pub type SharedScheduler = Rc<FrameScheduler<BrowserFrames>>;

pub fn shared() -> SharedScheduler {
    Rc::new(FrameScheduler::new(BrowserFrames::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    /// Manually pumped frame source. `run_frame` drains only the tasks
    /// queued before the frame started, so a task requested from inside a
    /// callback lands on the following frame, as in the browser.
    #[derive(Default)]
    struct ManualFrames {
        queue: RefCell<Vec<Box<dyn FnOnce()>>>,
    }

    impl ManualFrames {
        fn run_frame(&self) {
            let tasks: Vec<_> = self.queue.borrow_mut().drain(..).collect();
            for task in tasks {
                task();
            }
        }

        fn queued(&self) -> usize {
            self.queue.borrow().len()
        }
    }

    impl FrameSource for ManualFrames {
        fn request_frame(&self, task: Box<dyn FnOnce()>) {
            self.queue.borrow_mut().push(task);
        }
    }

    fn counting_update(count: Rc<Cell<u32>>) -> ScheduledUpdate {
        ScheduledUpdate::new(move || count.set(count.get() + 1))
    }

    #[test]
    fn many_triggers_coalesce_into_one_run() {
        let scheduler = FrameScheduler::new(ManualFrames::default());
        let count = Rc::new(Cell::new(0));
        let update = counting_update(Rc::clone(&count));

        for _ in 0..5 {
            scheduler.trigger(&update);
        }
        assert_eq!(scheduler.frames().queued(), 1);

        scheduler.frames().run_frame();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn callback_sees_latest_state_not_first_event_state() {
        let scheduler = FrameScheduler::new(ManualFrames::default());
        let scroll_pos = Rc::new(Cell::new(0.0));
        let seen = Rc::new(Cell::new(-1.0));

        let update = {
            let scroll_pos = Rc::clone(&scroll_pos);
            let seen = Rc::clone(&seen);
            ScheduledUpdate::new(move || seen.set(scroll_pos.get()))
        };

        scroll_pos.set(10.0);
        scheduler.trigger(&update);
        scroll_pos.set(50.0);
        scheduler.trigger(&update);

        scheduler.frames().run_frame();
        assert_eq!(seen.get(), 50.0);
    }

    #[test]
    fn pending_clears_after_run_and_update_is_reusable() {
        let scheduler = FrameScheduler::new(ManualFrames::default());
        let count = Rc::new(Cell::new(0));
        let update = counting_update(Rc::clone(&count));

        scheduler.trigger(&update);
        assert!(update.is_pending());
        scheduler.frames().run_frame();
        assert!(!update.is_pending());

        scheduler.trigger(&update);
        scheduler.frames().run_frame();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn trigger_while_pending_requests_no_extra_frame() {
        let scheduler = FrameScheduler::new(ManualFrames::default());
        let update = counting_update(Rc::new(Cell::new(0)));

        scheduler.trigger(&update);
        scheduler.trigger(&update);
        scheduler.trigger(&update);
        assert_eq!(scheduler.frames().queued(), 1);
    }

    #[test]
    fn independent_updates_run_once_each_in_same_frame() {
        let scheduler = FrameScheduler::new(ManualFrames::default());
        let a = Rc::new(Cell::new(0));
        let b = Rc::new(Cell::new(0));
        let update_a = counting_update(Rc::clone(&a));
        let update_b = counting_update(Rc::clone(&b));

        scheduler.trigger(&update_a);
        scheduler.trigger(&update_b);
        scheduler.trigger(&update_a);
        scheduler.trigger(&update_b);

        scheduler.frames().run_frame();
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 1);
    }

    #[test]
    fn retrigger_during_callback_runs_next_frame_not_inline() {
        let scheduler = Rc::new(FrameScheduler::new(ManualFrames::default()));
        let count = Rc::new(Cell::new(0));

        // The callback re-triggers its own update, as a layout mutation
        // that fires a synchronous scroll event would.
        let update_slot: Rc<RefCell<Option<ScheduledUpdate>>> = Rc::new(RefCell::new(None));
        let update = {
            let scheduler = Rc::clone(&scheduler);
            let count = Rc::clone(&count);
            let update_slot = Rc::clone(&update_slot);
            ScheduledUpdate::new(move || {
                count.set(count.get() + 1);
                if count.get() < 3 {
                    if let Some(update) = update_slot.borrow().as_ref() {
                        scheduler.trigger(update);
                    }
                }
            })
        };
        *update_slot.borrow_mut() = Some(update.clone());

        scheduler.trigger(&update);
        scheduler.frames().run_frame();
        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.frames().queued(), 1);

        scheduler.frames().run_frame();
        assert_eq!(count.get(), 2);
        scheduler.frames().run_frame();
        assert_eq!(count.get(), 3);
        assert_eq!(scheduler.frames().queued(), 0);
    }

    #[test]
    fn panicking_callback_propagates_and_does_not_wedge_the_update() {
        let scheduler = FrameScheduler::new(ManualFrames::default());
        let should_panic = Rc::new(Cell::new(true));
        let count = Rc::new(Cell::new(0));

        let update = {
            let should_panic = Rc::clone(&should_panic);
            let count = Rc::clone(&count);
            ScheduledUpdate::new(move || {
                if should_panic.get() {
                    panic!("layout bug");
                }
                count.set(count.get() + 1);
            })
        };

        scheduler.trigger(&update);
        let result = catch_unwind(AssertUnwindSafe(|| scheduler.frames().run_frame()));
        assert!(result.is_err());
        assert!(!update.is_pending());

        should_panic.set(false);
        scheduler.trigger(&update);
        scheduler.frames().run_frame();
        assert_eq!(count.get(), 1);
    }
}
