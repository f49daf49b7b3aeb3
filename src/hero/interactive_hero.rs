use std::cell::RefCell;
use std::rc::Rc;

use log::{error, warn};
use web_sys::{Element, HtmlElement, HtmlImageElement};
use yew::prelude::*;

use super::browser::{self, WindowListener};
use super::debug_panel::DebugPanel;
use super::layers::{AuroraCrest, GroundFog, Meteor, Stars};
use super::overrides::{BoostSignal, DebugOverrides};
use super::parallax::{hero_scroll_progress, viewport_unit, ParallaxTracker};
use crate::components::nav_bar::NavBar;
use crate::components::pill_button::{PillButton, Size, Variant};
use crate::config;
use crate::error::HeroError;

const MOUNTAIN_WEBP: &str = "assets/mountain-cutout.webp?v=9";
const MOUNTAIN_PNG: &str = "assets/mountain-cutout.png?v=9";

fn write_viewport_unit() -> Result<(), HeroError> {
    let inner = browser::window()?.inner_height()?.as_f64().unwrap_or(0.0);
    browser::set_root_property("--vh", &viewport_unit(inner))
}

/// Keeps `--vh` in step with the real viewport height while mounted.
#[hook]
fn use_viewport_unit() {
    use_effect_with_deps(
        |_| {
            if let Err(err) = write_viewport_unit() {
                warn!("could not set --vh: {}", err);
            }
            let listener = WindowListener::new("resize", || {
                if let Err(err) = write_viewport_unit() {
                    warn!("could not set --vh: {}", err);
                }
            });
            let listener = match listener {
                Ok(listener) => Some(listener),
                Err(err) => {
                    error!("resize listener failed: {}", err);
                    None
                }
            };
            move || drop(listener)
        },
        (),
    );
}

/// Moves `image` and `mist` with the page scroll through the hero behind
/// `wrap`. Styles are written straight to the elements, so scrolling never
/// re-renders the hero.
#[hook]
fn use_parallax(wrap: NodeRef, image: NodeRef, mist: NodeRef) {
    use_effect_with_deps(
        move |(wrap, image, mist): &(NodeRef, NodeRef, NodeRef)| {
            let update: Rc<dyn Fn()> = {
                let (wrap, image, mist) = (wrap.clone(), image.clone(), mist.clone());
                let tracker = RefCell::new(ParallaxTracker::default());
                Rc::new(move || {
                    let Some(hero) = wrap.cast::<Element>() else { return };
                    let (top, height) = browser::viewport_rect(&hero);
                    let Some(offsets) = tracker.borrow_mut().update(hero_scroll_progress(top, height)) else {
                        return;
                    };
                    if let Some(el) = image.cast::<HtmlElement>() {
                        browser::set_style(&el, "transform", &offsets.image_transform());
                    }
                    if let Some(el) = mist.cast::<HtmlElement>() {
                        browser::set_style(&el, "transform", &offsets.mist_transform());
                    }
                })
            };
            update();
            let listeners = ["scroll", "resize"]
                .into_iter()
                .map(|event| {
                    let update = update.clone();
                    WindowListener::new(event, move || update())
                })
                .collect::<Result<Vec<_>, _>>();
            let listeners = match listeners {
                Ok(listeners) => listeners,
                Err(err) => {
                    error!("parallax listeners failed: {}", err);
                    Vec::new()
                }
            };
            move || drop(listeners)
        },
        (wrap, image, mist),
    );
}

#[function_component(InteractiveHero)]
pub fn interactive_hero() -> Html {
    let wrap = use_node_ref();
    let overrides = use_state(DebugOverrides::default);
    let boost = use_state(BoostSignal::default);

    let image = use_node_ref();
    let mist = use_node_ref();

    use_viewport_unit();
    use_parallax(wrap.clone(), image.clone(), mist.clone());

    let on_image_error = Callback::from(|e: Event| {
        let img: HtmlImageElement = e.target_unchecked_into();
        if !img.src().contains("mountain-cutout.png") {
            warn!("webp mountain failed, falling back to png");
            img.set_src(&config::asset_url(MOUNTAIN_PNG));
        }
    });

    let on_cta_enter = {
        let boost = (*boost).clone();
        Callback::from(move |_: MouseEvent| boost.trigger(browser::now_ms()))
    };

    let mountain = config::asset_url(MOUNTAIN_WEBP);

    html! {
        <section ref={wrap.clone()} class="hero">
            <NavBar />

            <div class="hero-sky" />

            <Stars count={300} />
            <Meteor />

            <img
                class="hero-mountain"
                src={mountain.clone()}
                alt="Mountain"
                ref={image}
                onerror={on_image_error}
            />
            <img class="hero-mountain hero-mountain-glow" src={mountain} alt="" aria-hidden="true" />

            <AuroraCrest overrides={(*overrides).clone()} />
            <GroundFog hero={wrap.clone()} overrides={(*overrides).clone()} boost={(*boost).clone()} />

            <div class="hero-overlay hero-peak-glow" />
            <div class="hero-overlay hero-left-feather" />
            <div class="hero-overlay hero-ground-haze" />
            <div class="hero-overlay hero-vignette" />
            <div ref={mist} class="hero-overlay hero-mist">
                <div class="hero-mist-inner" />
            </div>
            <div class="hero-overlay hero-bottom-blend" />

            <div class="hero-copy">
                <div class="hero-copy-column">
                    <h1 class="hero-title text-glow">
                        {"Elevate Your Brand with"}
                        <span class="text-gradient">{" SINAIQ"}</span>
                        {" Marketing Agency"}
                    </h1>
                    <p class="hero-subtitle">
                        {"We blend creativity, data, and AI to deliver marketing strategies that drive business growth and engage your audience."}
                    </p>
                    <div class="hero-actions">
                        <PillButton variant={Variant::Primary} size={Size::Lg} href="#consult" onmouseenter={on_cta_enter}>
                            {"Get Your Free Consultation"}
                        </PillButton>
                        <PillButton variant={Variant::Outline} size={Size::Lg} href="#work">
                            {"See our work"}
                        </PillButton>
                    </div>
                </div>
            </div>

            <DebugPanel overrides={(*overrides).clone()} />

            <style>
                {r#"
                    .hero {
                        position: relative;
                        overflow: hidden;
                        min-height: calc(var(--vh, 1vh) * 100);
                        background: var(--hero-deep);
                    }
                    .hero-sky {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        background: radial-gradient(120% 80% at 50% 0%, #0E1A2A 0%, #08111B 55%, #050B13 100%);
                    }
                    .hero-layer {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        pointer-events: none;
                    }
                    .hero-aurora {
                        z-index: 30;
                        opacity: 0.22;
                        mix-blend-mode: screen;
                    }
                    .hero-mountain {
                        position: absolute;
                        bottom: -1.5vh;
                        right: clamp(-14vw, -10vw, -6vw);
                        width: min(1650px, 118vw);
                        height: auto;
                        z-index: 20;
                        pointer-events: none;
                        user-select: none;
                        will-change: transform;
                    }
                    .hero-mountain-glow {
                        z-index: 30;
                        mix-blend-mode: screen;
                        filter: drop-shadow(0 0 26px rgba(93,168,255,.36)) drop-shadow(0 0 64px rgba(93,168,255,.20));
                        -webkit-mask-image: radial-gradient(120% 110% at 76% 38%, rgba(255,255,255,1) 36%, rgba(255,255,255,.75) 52%, rgba(255,255,255,0) 70%);
                        mask-image: radial-gradient(120% 110% at 76% 38%, rgba(255,255,255,1) 36%, rgba(255,255,255,.75) 52%, rgba(255,255,255,0) 70%);
                        animation: glowPulse 9s ease-in-out infinite;
                        will-change: auto;
                    }
                    .hero-fog {
                        position: absolute;
                        left: -6vw;
                        right: -6vw;
                        bottom: -10vh;
                        height: 45vh;
                        z-index: 30;
                        pointer-events: none;
                        filter: blur(36px);
                        mix-blend-mode: screen;
                        transform-origin: center bottom;
                        opacity: 0.22;
                        background:
                            radial-gradient(70% 80% at 80% 100%, rgba(62,110,210,.22), rgba(0,0,0,0) 58%),
                            radial-gradient(60% 50% at 60% 100%, rgba(32,70,150,.16), rgba(0,0,0,0) 60%);
                    }
                    .hero-overlay {
                        position: absolute;
                        pointer-events: none;
                        z-index: 30;
                    }
                    .hero-peak-glow {
                        right: 20vw;
                        bottom: 26vh;
                        width: 28vw;
                        height: 24vh;
                        mix-blend-mode: screen;
                        background: radial-gradient(closest-side at 58% 40%, rgba(93,168,255,.32), rgba(93,168,255,.10) 48%, rgba(0,0,0,0) 70%);
                        filter: blur(14px) saturate(135%);
                    }
                    .hero-left-feather {
                        left: 0;
                        bottom: 0;
                        width: 72vw;
                        height: 62vh;
                        background: radial-gradient(72% 90% at 90% 78%, rgba(12,18,28,.70), rgba(12,18,28,0) 74%);
                        filter: blur(36px) saturate(112%);
                    }
                    .hero-ground-haze {
                        left: 0;
                        bottom: -2vh;
                        width: 48vw;
                        height: 28vh;
                        background: radial-gradient(70% 100% at 18% 100%, rgba(28,42,70,.35), rgba(10,16,28,0) 62%);
                        filter: blur(28px);
                    }
                    .hero-vignette {
                        inset: 0;
                        z-index: 40;
                        background: linear-gradient(to bottom, rgba(0,0,0,.65) 0%, rgba(0,0,0,0) 40%, rgba(0,0,0,.5) 100%);
                    }
                    .hero-mist {
                        left: 0;
                        right: 0;
                        bottom: -12%;
                        height: 55%;
                        z-index: 20;
                        filter: blur(40px);
                        mix-blend-mode: screen;
                    }
                    .hero-mist-inner {
                        width: 100%;
                        height: 100%;
                        background: radial-gradient(80% 60% at 86% 104%, rgba(54,86,183,.18), rgba(0,9,87,0) 56%);
                    }
                    .hero-bottom-blend {
                        left: 0;
                        right: 0;
                        bottom: 0;
                        height: 26vh;
                        z-index: 40;
                        background: linear-gradient(to bottom, rgba(6,11,18,0) 0%, rgba(6,11,18,.55) 52%, rgba(6,11,18,1) 90%);
                    }
                    .hero-copy {
                        position: relative;
                        z-index: 40;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 8rem 1.5rem 7rem;
                    }
                    .hero-copy-column {
                        max-width: 100%;
                    }
                    .hero-title {
                        max-width: 16ch;
                        margin: 0;
                        font-size: 3rem;
                        line-height: 1.05;
                        font-weight: 600;
                        letter-spacing: -0.025em;
                        color: #fff;
                        text-wrap: balance;
                    }
                    .hero-subtitle {
                        margin-top: 1.25rem;
                        max-width: 42rem;
                        font-size: 1.125rem;
                        color: rgba(255, 255, 255, 0.85);
                    }
                    .hero-actions {
                        margin-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                    }
                    @media (min-width: 640px) {
                        .hero-copy { padding-top: 10rem; }
                    }
                    @media (min-width: 768px) {
                        .hero-copy { padding-top: 12rem; }
                        .hero-copy-column { max-width: 66%; }
                        .hero-title { font-size: 4.5rem; }
                        .hero-subtitle { font-size: 1.25rem; }
                    }
                    @media (min-width: 1024px) {
                        .hero-copy-column { max-width: 58%; }
                    }
                    @media (min-width: 1280px) {
                        .hero-copy-column { max-width: 50%; }
                        .hero-title { font-size: 6rem; }
                    }
                    @keyframes glowPulse {
                        0%, 100% {
                            filter: drop-shadow(0 0 22px rgba(93,168,255,.32)) drop-shadow(0 0 56px rgba(93,168,255,.18));
                        }
                        50% {
                            filter: drop-shadow(0 0 34px rgba(93,168,255,.46)) drop-shadow(0 0 78px rgba(93,168,255,.26));
                        }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .hero-mountain-glow { animation: none !important; }
                        .hero-mountain { will-change: auto; }
                    }
                "#}
            </style>
        </section>
    }
}
