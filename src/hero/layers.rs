use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, error, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys::{Element, HtmlCanvasElement, HtmlElement};
use yew::prelude::*;

use super::aurora::{AuroraConfig, AuroraRibbon};
use super::browser::{self, WindowListener};
use super::fog::{scroll_progress, FogConfig, GroundFog as FogLayer};
use super::frame_loop::{AnimationFrames, FrameLoop};
use super::layer::{layer_tick, Layer};
use super::meteor::{MeteorConfig, MeteorSpawner};
use super::overrides::{BoostSignal, DebugOverrides};
use super::painter::Canvas2d;
use super::stars::{StarField, StarFieldConfig};
use crate::error::HeroError;

/// A layer running on its canvas. Dropping it stops the frame loop and
/// detaches the resize listener.
pub struct MountedLayer {
    _frames: FrameLoop<AnimationFrames>,
    _resize: WindowListener,
}

pub fn mount_canvas_layer<L>(canvas: &HtmlCanvasElement, mut layer: L) -> Result<MountedLayer, HeroError>
where
    L: Layer + 'static,
{
    let name = layer.name();
    let ctx = browser::context_2d(canvas)?;
    layer.resize(browser::fit_canvas(canvas)?);
    let reduce = browser::prefers_reduced_motion();
    let layer = Rc::new(RefCell::new(layer));

    let resize = {
        let layer = layer.clone();
        let canvas = canvas.clone();
        WindowListener::new("resize", move || match browser::fit_canvas(&canvas) {
            Ok(surface) => layer.borrow_mut().resize(surface),
            Err(err) => warn!("{}: resize failed: {}", name, err),
        })?
    };

    let tick = layer_tick(layer, Canvas2d::new(ctx), move || browser::frame_env(reduce));
    let frames = FrameLoop::start(name, AnimationFrames::new()?, tick)?;
    debug!("{} mounted (reduced motion: {})", name, reduce);
    Ok(MountedLayer { _frames: frames, _resize: resize })
}

/// Mounts the layer built by `make` on `canvas` for as long as the component
/// lives, rebuilding it when `deps` change. A failed mount only blanks this
/// layer.
#[hook]
pub fn use_canvas_layer<D, F, L>(canvas: NodeRef, deps: D, make: F)
where
    D: PartialEq + 'static,
    F: FnOnce(&D) -> L + 'static,
    L: Layer + 'static,
{
    use_effect_with_deps(
        move |(canvas, deps): &(NodeRef, D)| {
            let mounted = canvas
                .cast::<HtmlCanvasElement>()
                .ok_or(HeroError::MissingContainer)
                .and_then(|el| mount_canvas_layer(&el, make(deps)));
            let mounted = match mounted {
                Ok(mounted) => Some(mounted),
                Err(err) => {
                    error!("hero layer failed to mount: {}", err);
                    None
                }
            };
            move || drop(mounted)
        },
        (canvas, deps),
    );
}

#[derive(Properties, PartialEq)]
pub struct StarsProps {
    #[prop_or(300)]
    pub count: usize,
}

#[function_component(Stars)]
pub fn stars(props: &StarsProps) -> Html {
    let canvas = use_node_ref();
    use_canvas_layer(canvas.clone(), props.count, |count| {
        let config = StarFieldConfig { count: *count, ..Default::default() };
        StarField::new(config, &mut StdRng::from_entropy())
    });
    html! { <canvas ref={canvas} class="hero-layer hero-stars" aria-hidden="true" /> }
}

#[function_component(Meteor)]
pub fn meteor() -> Html {
    let canvas = use_node_ref();
    use_canvas_layer(canvas.clone(), (), |_| {
        MeteorSpawner::new(MeteorConfig::default(), StdRng::from_entropy())
    });
    html! { <canvas ref={canvas} class="hero-layer hero-meteor" aria-hidden="true" /> }
}

#[derive(Properties, PartialEq)]
pub struct AuroraProps {
    pub overrides: DebugOverrides,
    #[prop_or_default]
    pub config: AuroraConfig,
}

#[function_component(AuroraCrest)]
pub fn aurora_crest(props: &AuroraProps) -> Html {
    let canvas = use_node_ref();
    use_canvas_layer(
        canvas.clone(),
        (props.config.clone(), props.overrides.clone()),
        |(config, overrides)| AuroraRibbon::new(config.clone(), overrides.clone()),
    );
    html! { <canvas ref={canvas} class="hero-layer hero-aurora" aria-hidden="true" /> }
}

/// Fog running on its element; dropping it stops everything.
pub struct MountedFog {
    _frames: FrameLoop<AnimationFrames>,
    _listeners: Vec<WindowListener>,
}

pub fn mount_fog(element: HtmlElement, hero: Element, mut fog: FogLayer) -> Result<MountedFog, HeroError> {
    let knee = fog.config().knee;
    let progress = Rc::new(Cell::new(0.0));
    let track: Rc<dyn Fn()> = {
        let progress = progress.clone();
        Rc::new(move || {
            let (top, height) = browser::viewport_rect(&hero);
            progress.set(scroll_progress(top, height, knee));
        })
    };
    track();

    let listeners = ["scroll", "resize"]
        .into_iter()
        .map(|event| {
            let track = track.clone();
            WindowListener::new(event, move || track())
        })
        .collect::<Result<Vec<_>, _>>()?;

    let reduce = browser::prefers_reduced_motion();
    let frames = FrameLoop::start("fog", AnimationFrames::new()?, move |now| {
        let style = fog.frame(now, progress.get(), reduce);
        browser::set_style(&element, "transform", &style.transform());
        browser::set_style(&element, "opacity", &style.opacity_css());
    })?;
    debug!("fog mounted (reduced motion: {})", reduce);
    Ok(MountedFog { _frames: frames, _listeners: listeners })
}

#[derive(Properties, PartialEq)]
pub struct GroundFogProps {
    /// The hero section whose scroll position drives the fog.
    pub hero: NodeRef,
    pub overrides: DebugOverrides,
    pub boost: BoostSignal,
    #[prop_or_default]
    pub config: FogConfig,
}

#[function_component(GroundFog)]
pub fn ground_fog(props: &GroundFogProps) -> Html {
    let fog_ref = use_node_ref();
    {
        let deps = (
            fog_ref.clone(),
            props.hero.clone(),
            props.overrides.clone(),
            props.boost.clone(),
            props.config.clone(),
        );
        use_effect_with_deps(
            move |(fog_ref, hero, overrides, boost, config)| {
                let mounted = match (fog_ref.cast::<HtmlElement>(), hero.cast::<Element>()) {
                    (Some(el), Some(hero)) => {
                        let fog = FogLayer::new(config.clone(), overrides.clone(), boost.clone());
                        mount_fog(el, hero, fog)
                    }
                    _ => Err(HeroError::MissingContainer),
                };
                let mounted = match mounted {
                    Ok(mounted) => Some(mounted),
                    Err(err) => {
                        error!("fog failed to mount: {}", err);
                        None
                    }
                };
                move || drop(mounted)
            },
            deps,
        );
    }

    html! { <div ref={fog_ref} class="hero-fog" aria-hidden="true" /> }
}
