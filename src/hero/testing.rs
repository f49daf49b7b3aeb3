//! Test doubles for the drawing, frame and event seams.

use std::cell::RefCell;
use std::rc::Rc;

use super::browser::ListenerTarget;
use super::color::Color;
use super::frame_loop::{FrameCallback, FrameSource};
use super::painter::{Blend, GradientStroke, Painter, Point};
use super::surface::Surface;
use crate::error::HeroError;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Blend(Blend),
    Circle { center: Point, radius: f64, color: Color },
    Glow { center: Point, radius: f64, inner: Color, outer: Color },
    Stroke(GradientStroke),
}

/// Painter that remembers every call. Clones share the log.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<DrawCall>>>,
}

impl Recorder {
    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.borrow().clone()
    }

    pub fn take(&self) -> Vec<DrawCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub fn circles(&self) -> Vec<(Point, f64, Color)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                DrawCall::Circle { center, radius, color } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn strokes(&self) -> Vec<GradientStroke> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                DrawCall::Stroke(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn glows(&self) -> usize {
        self.calls.borrow().iter().filter(|c| matches!(c, DrawCall::Glow { .. })).count()
    }

    fn push(&self, call: DrawCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl Painter for Recorder {
    fn clear(&mut self, _surface: &Surface) {
        self.push(DrawCall::Clear);
    }

    fn set_blend(&mut self, blend: Blend) {
        self.push(DrawCall::Blend(blend));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.push(DrawCall::Circle { center, radius, color });
    }

    fn radial_glow(&mut self, center: Point, radius: f64, inner: Color, outer: Color) {
        self.push(DrawCall::Glow { center, radius, inner, outer });
    }

    fn gradient_stroke(&mut self, stroke: &GradientStroke) {
        self.push(DrawCall::Stroke(stroke.clone()));
    }
}

#[derive(Default)]
struct ManualState {
    next_ticket: i32,
    pending: Vec<(i32, FrameCallback)>,
    requested: usize,
    cancelled: usize,
}

/// Frame source pumped by hand with simulated timestamps.
#[derive(Clone, Default)]
pub struct ManualFrames {
    state: Rc<RefCell<ManualState>>,
}

impl ManualFrames {
    /// Runs every callback requested so far; returns how many ran.
    pub fn pump(&self, now: f64) -> usize {
        let due = std::mem::take(&mut self.state.borrow_mut().pending);
        let count = due.len();
        for (_, callback) in due {
            callback(now);
        }
        count
    }

    /// Pumps frames from `from` to `to` (inclusive) every `step` ms.
    pub fn run(&self, from: f64, to: f64, step: f64) -> usize {
        let mut ran = 0;
        let mut now = from;
        while now <= to {
            ran += self.pump(now);
            now += step;
        }
        ran
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    pub fn requested(&self) -> usize {
        self.state.borrow().requested
    }

    pub fn cancelled(&self) -> usize {
        self.state.borrow().cancelled
    }
}

impl FrameSource for ManualFrames {
    fn request(&self, callback: &FrameCallback) -> Result<i32, HeroError> {
        let mut state = self.state.borrow_mut();
        state.next_ticket += 1;
        let ticket = state.next_ticket;
        state.pending.push((ticket, callback.clone()));
        state.requested += 1;
        Ok(ticket)
    }

    fn cancel(&self, ticket: i32) {
        let mut state = self.state.borrow_mut();
        let before = state.pending.len();
        state.pending.retain(|(t, _)| *t != ticket);
        if state.pending.len() != before {
            state.cancelled += 1;
        }
    }
}

type Registered = (usize, &'static str, Option<Box<dyn FnMut()>>);

#[derive(Default)]
struct TargetState {
    next_id: usize,
    listeners: Vec<Registered>,
    removed: usize,
    fail_removals: bool,
}

/// Event target that fires callbacks only when told to.
#[derive(Clone, Default)]
pub struct ManualTarget {
    state: Rc<RefCell<TargetState>>,
}

impl ManualTarget {
    /// Runs every callback registered for `event`.
    pub fn dispatch(&self, event: &str) {
        let ids: Vec<usize> = self
            .state
            .borrow()
            .listeners
            .iter()
            .filter(|(_, e, _)| *e == event)
            .map(|(id, _, _)| *id)
            .collect();
        for id in ids {
            let taken = self.slot(id).and_then(|mut slot| slot.take());
            if let Some(mut callback) = taken {
                callback();
                if let Some(mut slot) = self.slot(id) {
                    *slot = Some(callback);
                }
            }
        }
    }

    fn slot(&self, id: usize) -> Option<std::cell::RefMut<'_, Option<Box<dyn FnMut()>>>> {
        let state = self.state.borrow_mut();
        let index = state.listeners.iter().position(|(i, _, _)| *i == id)?;
        Some(std::cell::RefMut::map(state, |s| &mut s.listeners[index].2))
    }

    pub fn listening(&self, event: &str) -> usize {
        self.state.borrow().listeners.iter().filter(|(_, e, _)| *e == event).count()
    }

    pub fn removed(&self) -> usize {
        self.state.borrow().removed
    }

    pub fn fail_removals(&self) {
        self.state.borrow_mut().fail_removals = true;
    }
}

impl ListenerTarget for ManualTarget {
    type Handle = usize;

    fn listen(&self, event: &'static str, callback: Box<dyn FnMut()>) -> Result<usize, HeroError> {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        state.listeners.push((id, event, Some(callback)));
        Ok(id)
    }

    fn unlisten(&self, _event: &'static str, handle: &usize) -> Result<(), HeroError> {
        let mut state = self.state.borrow_mut();
        if state.fail_removals {
            return Err(HeroError::Js("removeEventListener failed".into()));
        }
        state.listeners.retain(|(id, _, _)| id != handle);
        state.removed += 1;
        Ok(())
    }
}
