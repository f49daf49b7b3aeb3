use std::cell::RefCell;
use std::rc::Rc;

use super::painter::Painter;
use super::surface::Surface;

/// Page-level state every layer reads at the start of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameEnv {
    pub reduce_motion: bool,
    /// Document hidden (background tab).
    pub hidden: bool,
}

/// One animated canvas layer of the hero.
pub trait Layer {
    fn name(&self) -> &'static str;
    fn surface(&self) -> Surface;
    fn resize(&mut self, surface: Surface);
    /// Advances the layer to `now_ms` (frame timestamp) and draws it.
    fn frame(&mut self, now_ms: f64, env: FrameEnv, painter: &mut dyn Painter);
}

/// Builds the per-frame callback that drives `layer` with `painter`.
pub fn layer_tick<L, P, E>(layer: Rc<RefCell<L>>, mut painter: P, env: E) -> impl FnMut(f64)
where
    L: Layer + ?Sized + 'static,
    P: Painter + 'static,
    E: Fn() -> FrameEnv + 'static,
{
    move |now| {
        let env = env();
        layer.borrow_mut().frame(now, env, &mut painter);
    }
}
