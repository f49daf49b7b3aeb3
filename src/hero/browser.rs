//! Thin wrappers over the DOM calls the hero makes.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlElement, Window};

use super::layer::FrameEnv;
use super::surface::Surface;
use crate::error::HeroError;

pub fn window() -> Result<Window, HeroError> {
    web_sys::window().ok_or(HeroError::NoWindow)
}

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

pub fn document_hidden() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.hidden())
        .unwrap_or(false)
}

/// Environment for a layer that read the motion preference at mount.
pub fn frame_env(reduce_motion: bool) -> FrameEnv {
    FrameEnv { reduce_motion, hidden: document_hidden() }
}

pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn device_pixel_ratio() -> f64 {
    web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Sizes the canvas backing store to its parent container and returns the
/// resulting surface.
pub fn fit_canvas(canvas: &HtmlCanvasElement) -> Result<Surface, HeroError> {
    let parent = canvas.parent_element().ok_or(HeroError::MissingContainer)?;
    let surface = Surface::fit(
        parent.client_width() as f64,
        parent.client_height() as f64,
        device_pixel_ratio(),
    );
    canvas.set_width(surface.width as u32);
    canvas.set_height(surface.height as u32);
    let style = canvas.style();
    style.set_property("width", &format!("{}px", surface.css_width))?;
    style.set_property("height", &format!("{}px", surface.css_height))?;
    Ok(surface)
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, HeroError> {
    canvas
        .get_context("2d")?
        .ok_or(HeroError::MissingContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| HeroError::MissingContext)
}

/// `(top, height)` of the element's bounding box relative to the viewport.
pub fn viewport_rect(element: &Element) -> (f64, f64) {
    let rect = element.get_bounding_client_rect();
    (rect.top(), rect.height())
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        warn!("could not set {}: {}", property, HeroError::from(err));
    }
}

/// Writes a custom property on `<html>`.
pub fn set_root_property(name: &str, value: &str) -> Result<(), HeroError> {
    let root = window()?
        .document()
        .ok_or(HeroError::NoDocument)?
        .document_element()
        .ok_or(HeroError::NoDocument)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| HeroError::NoDocument)?;
    root.style().set_property(name, value)?;
    Ok(())
}

/// Something that dispatches named events to registered callbacks.
pub trait ListenerTarget {
    /// Whatever the target needs back to unregister a callback.
    type Handle;

    fn listen(&self, event: &'static str, callback: Box<dyn FnMut()>) -> Result<Self::Handle, HeroError>;
    fn unlisten(&self, event: &'static str, handle: &Self::Handle) -> Result<(), HeroError>;
}

impl ListenerTarget for Window {
    type Handle = Closure<dyn FnMut()>;

    fn listen(&self, event: &'static str, callback: Box<dyn FnMut()>) -> Result<Self::Handle, HeroError> {
        let closure = Closure::wrap(callback);
        self.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(closure)
    }

    fn unlisten(&self, event: &'static str, handle: &Self::Handle) -> Result<(), HeroError> {
        self.remove_event_listener_with_callback(event, handle.as_ref().unchecked_ref())?;
        Ok(())
    }
}

/// An event listener that removes itself when dropped.
pub struct Listener<T: ListenerTarget> {
    target: T,
    event: &'static str,
    handle: T::Handle,
}

impl<T: ListenerTarget> Listener<T> {
    pub fn attach<F>(target: T, event: &'static str, callback: F) -> Result<Self, HeroError>
    where
        F: FnMut() + 'static,
    {
        let handle = target.listen(event, Box::new(callback))?;
        Ok(Self { target, event, handle })
    }
}

impl<T: ListenerTarget> Drop for Listener<T> {
    fn drop(&mut self) {
        match self.target.unlisten(self.event, &self.handle) {
            Ok(()) => debug!("removed {} listener", self.event),
            Err(err) => warn!("could not remove {} listener: {}", self.event, err),
        }
    }
}

pub type WindowListener = Listener<Window>;

impl Listener<Window> {
    pub fn new<F>(event: &'static str, callback: F) -> Result<Self, HeroError>
    where
        F: FnMut() + 'static,
    {
        Self::attach(window()?, event, callback)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::hero::testing::ManualTarget;

    fn counting(target: &ManualTarget, event: &'static str) -> (Listener<ManualTarget>, Rc<Cell<u32>>) {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let listener = Listener::attach(target.clone(), event, move || counter.set(counter.get() + 1))
            .expect("manual target accepts listeners");
        (listener, hits)
    }

    #[test]
    fn dropping_removes_the_listener() {
        let target = ManualTarget::default();
        let (listener, hits) = counting(&target, "scroll");
        target.dispatch("scroll");
        target.dispatch("resize");
        assert_eq!(hits.get(), 1);
        assert_eq!(target.listening("scroll"), 1);

        drop(listener);
        assert_eq!(target.listening("scroll"), 0);
        assert_eq!(target.removed(), 1);
        target.dispatch("scroll");
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn each_listener_removes_only_itself() {
        let target = ManualTarget::default();
        let (scroll, scrolls) = counting(&target, "scroll");
        let (resize, resizes) = counting(&target, "resize");

        drop(scroll);
        target.dispatch("scroll");
        target.dispatch("resize");
        assert_eq!((scrolls.get(), resizes.get()), (0, 1));
        assert_eq!(target.listening("resize"), 1);

        drop(resize);
        assert_eq!(target.removed(), 2);
        assert_eq!(target.listening("resize"), 0);
    }

    #[test]
    fn failed_removal_is_logged_not_fatal() {
        let target = ManualTarget::default();
        let (listener, _) = counting(&target, "resize");
        target.fail_removals();
        drop(listener);
        assert_eq!(target.removed(), 0);
        assert_eq!(target.listening("resize"), 1);
    }
}
