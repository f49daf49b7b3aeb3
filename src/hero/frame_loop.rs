use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::HeroError;

pub type FrameCallback = Rc<dyn Fn(f64)>;

/// Something that calls back once per display frame with a millisecond
/// timestamp. `requestAnimationFrame` in the browser.
pub trait FrameSource {
    fn request(&self, callback: &FrameCallback) -> Result<i32, HeroError>;
    fn cancel(&self, ticket: i32);
    /// Drops whatever the source keeps alive for `request`.
    fn release(&self) {}
}

/// `window.requestAnimationFrame`. Holds one JS closure for its lifetime so
/// a long-running loop does not allocate per frame.
pub struct AnimationFrames {
    window: Window,
    closure: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl AnimationFrames {
    pub fn new() -> Result<Self, HeroError> {
        let window = web_sys::window().ok_or(HeroError::NoWindow)?;
        Ok(Self { window, closure: RefCell::new(None) })
    }
}

impl FrameSource for AnimationFrames {
    fn request(&self, callback: &FrameCallback) -> Result<i32, HeroError> {
        let mut slot = self.closure.borrow_mut();
        let closure = slot.get_or_insert_with(|| {
            let callback = callback.clone();
            Closure::wrap(Box::new(move |now: f64| callback(now)) as Box<dyn FnMut(f64)>)
        });
        Ok(self.window.request_animation_frame(closure.as_ref().unchecked_ref())?)
    }

    fn cancel(&self, ticket: i32) {
        if let Err(err) = self.window.cancel_animation_frame(ticket) {
            warn!("could not cancel frame {}: {}", ticket, HeroError::from(err));
        }
    }

    fn release(&self) {
        self.closure.borrow_mut().take();
    }
}

struct LoopState<S> {
    name: &'static str,
    source: S,
    running: Cell<bool>,
    ticket: Cell<Option<i32>>,
    frames: Cell<u64>,
    last_frame: Cell<Option<f64>>,
    tick: RefCell<Box<dyn FnMut(f64)>>,
    callback: RefCell<Option<FrameCallback>>,
}

impl<S: FrameSource> LoopState<S> {
    fn on_frame(&self, now: f64) {
        if !self.running.get() {
            return;
        }
        self.ticket.set(None);
        self.frames.set(self.frames.get() + 1);
        self.last_frame.set(Some(now));
        {
            let mut tick = self.tick.borrow_mut();
            (*tick)(now);
        }

        let next = self.callback.borrow().clone();
        if let (true, Some(callback)) = (self.running.get(), next) {
            match self.source.request(&callback) {
                Ok(ticket) => self.ticket.set(Some(ticket)),
                Err(err) => {
                    error!("{}: could not schedule next frame: {}", self.name, err);
                    self.running.set(false);
                }
            }
        }
    }
}

/// A self-rescheduling per-frame callback. Stops on `stop()` or drop; after
/// that the tick never runs again.
pub struct FrameLoop<S: FrameSource + 'static> {
    state: Rc<LoopState<S>>,
}

impl<S: FrameSource + 'static> FrameLoop<S> {
    pub fn start<F>(name: &'static str, source: S, tick: F) -> Result<Self, HeroError>
    where
        F: FnMut(f64) + 'static,
    {
        let state = Rc::new(LoopState {
            name,
            source,
            running: Cell::new(true),
            ticket: Cell::new(None),
            frames: Cell::new(0),
            last_frame: Cell::new(None),
            tick: RefCell::new(Box::new(tick)),
            callback: RefCell::new(None),
        });

        // The source only sees a weak handle, so dropping the loop frees it.
        let weak = Rc::downgrade(&state);
        let callback: FrameCallback = Rc::new(move |now| {
            if let Some(state) = weak.upgrade() {
                state.on_frame(now);
            }
        });
        let ticket = state.source.request(&callback)?;
        state.ticket.set(Some(ticket));
        *state.callback.borrow_mut() = Some(callback);
        debug!("{}: frame loop started", name);
        Ok(Self { state })
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    pub fn frames(&self) -> u64 {
        self.state.frames.get()
    }

    pub fn last_frame(&self) -> Option<f64> {
        self.state.last_frame.get()
    }

    pub fn stop(&self) {
        if !self.state.running.replace(false) && self.state.callback.borrow().is_none() {
            return;
        }
        if let Some(ticket) = self.state.ticket.take() {
            self.state.source.cancel(ticket);
        }
        self.state.callback.borrow_mut().take();
        self.state.source.release();
        debug!("{}: frame loop stopped after {} frames", self.state.name, self.frames());
    }
}

impl<S: FrameSource + 'static> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hero::testing::ManualFrames;

    fn counting_loop(frames: &ManualFrames) -> (FrameLoop<ManualFrames>, Rc<Cell<u32>>) {
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let handle = FrameLoop::start("test", frames.clone(), move |_| counter.set(counter.get() + 1))
            .expect("manual source never fails");
        (handle, ticks)
    }

    #[test]
    fn reschedules_itself_every_frame() {
        let frames = ManualFrames::default();
        let (handle, ticks) = counting_loop(&frames);
        for i in 0..5 {
            frames.pump(i as f64 * 16.0);
        }
        assert_eq!(ticks.get(), 5);
        assert_eq!(handle.frames(), 5);
        assert_eq!(handle.last_frame(), Some(64.0));
        assert_eq!(frames.pending(), 1);
    }

    #[test]
    fn stop_cancels_pending_frame_and_silences_ticks() {
        let frames = ManualFrames::default();
        let (handle, ticks) = counting_loop(&frames);
        frames.pump(0.0);
        frames.pump(16.0);
        handle.stop();
        assert_eq!(frames.pending(), 0);
        assert_eq!(frames.cancelled(), 1);

        let requested = frames.requested();
        for i in 2..100 {
            frames.pump(i as f64 * 16.0);
        }
        assert_eq!(ticks.get(), 2);
        assert_eq!(frames.requested(), requested);
        assert!(!handle.is_running());
    }

    #[test]
    fn drop_behaves_like_stop() {
        let frames = ManualFrames::default();
        let (handle, ticks) = counting_loop(&frames);
        frames.pump(0.0);
        drop(handle);
        frames.pump(16.0);
        assert_eq!(ticks.get(), 1);
        assert_eq!(frames.pending(), 0);
    }
}
