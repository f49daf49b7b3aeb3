//! Layers driven through real frame loops with simulated time.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::aurora::{AuroraConfig, AuroraRibbon};
use super::fog::{scroll_progress, FogConfig, FogStyle, GroundFog};
use super::frame_loop::FrameLoop;
use super::layer::{layer_tick, FrameEnv, Layer};
use super::meteor::{MeteorConfig, MeteorPhase, MeteorSpawner};
use super::overrides::{BoostSignal, DebugOverrides};
use super::stars::{StarField, StarFieldConfig};
use super::surface::Surface;
use super::testing::{DrawCall, ManualFrames, Recorder};

const FRAME: f64 = 1000.0 / 60.0;

struct Scene {
    frames: ManualFrames,
    stars: Rc<RefCell<StarField>>,
    meteor: Rc<RefCell<MeteorSpawner<StdRng>>>,
    aurora: Rc<RefCell<AuroraRibbon>>,
    painted: [Recorder; 3],
    loops: Vec<FrameLoop<ManualFrames>>,
}

fn clears(recorder: &Recorder) -> usize {
    recorder.calls().iter().filter(|c| matches!(c, DrawCall::Clear)).count()
}

fn scene(env: FrameEnv) -> Scene {
    let frames = ManualFrames::default();
    let surface = Surface::fit(1280.0, 800.0, 1.0);
    let mut rng = StdRng::seed_from_u64(7);

    let stars = StarField::new(StarFieldConfig { count: 40, ..Default::default() }, &mut rng);
    let stars = Rc::new(RefCell::new(stars));
    let meteor = Rc::new(RefCell::new(MeteorSpawner::new(MeteorConfig::default(), StdRng::seed_from_u64(11))));
    let aurora = Rc::new(RefCell::new(AuroraRibbon::new(AuroraConfig::default(), DebugOverrides::default())));
    stars.borrow_mut().resize(surface);
    meteor.borrow_mut().resize(surface);
    aurora.borrow_mut().resize(surface);

    let painted = [Recorder::default(), Recorder::default(), Recorder::default()];
    let loops = vec![
        FrameLoop::start("stars", frames.clone(), layer_tick(stars.clone(), painted[0].clone(), move || env)),
        FrameLoop::start("meteor", frames.clone(), layer_tick(meteor.clone(), painted[1].clone(), move || env)),
        FrameLoop::start("aurora", frames.clone(), layer_tick(aurora.clone(), painted[2].clone(), move || env)),
    ]
    .into_iter()
    .collect::<Result<Vec<_>, _>>()
    .expect("manual source never fails");

    Scene { frames, stars, meteor, aurora, painted, loops }
}

#[test]
fn twenty_seconds_of_sky() {
    let s = scene(FrameEnv::default());
    let ran = s.frames.run(0.0, 20_000.0, FRAME);
    let per_layer = ran / 3;
    assert!(per_layer > 1_150);

    // stars repaint every frame, all above the horizon
    assert_eq!(clears(&s.painted[0]), per_layer);
    let sky = s.stars.borrow().surface().sky_line();
    assert!(s.painted[0].circles().iter().all(|(p, _, _)| p.y <= sky));

    // the longest wait is 18s, so at least one meteor has flown
    let meteor = s.meteor.borrow();
    assert!(meteor.shots_fired() >= 1);
    assert_ne!(meteor.phase(), MeteorPhase::Idle);

    // aurora holds 30fps on a 60Hz clock
    let drawn = clears(&s.painted[2]) as f64 / per_layer as f64;
    assert!((0.45..=0.55).contains(&drawn), "aurora drew {:.2} of frames", drawn);
    assert!(s.painted[2].glows() > 0);
}

#[test]
fn dropping_the_scene_stops_every_loop() {
    let mut s = scene(FrameEnv::default());
    s.frames.run(0.0, 1_000.0, FRAME);
    assert_eq!(s.frames.pending(), 3);

    s.loops.clear();
    assert_eq!(s.frames.pending(), 0);
    assert_eq!(s.frames.cancelled(), 3);

    for r in &s.painted {
        r.take();
    }
    assert_eq!(s.frames.run(1_000.0, 5_000.0, FRAME), 0);
    assert!(s.painted.iter().all(|r| r.calls().is_empty()));
}

#[test]
fn reduced_motion_keeps_the_sky_still() {
    let s = scene(FrameEnv { reduce_motion: true, hidden: false });
    s.frames.run(0.0, 60_000.0, FRAME);

    assert_eq!(s.meteor.borrow().shots_fired(), 0);
    assert!(s.painted[1].strokes().is_empty());

    let first = s.painted[0].circles();
    let alphas: Vec<f64> = first.iter().map(|(_, _, c)| c.alpha()).collect();
    assert!(alphas.iter().all(|a| (*a - 0.30).abs() < 1e-9));
}

#[test]
fn hidden_tab_pauses_the_aurora_only() {
    let s = scene(FrameEnv { reduce_motion: false, hidden: true });
    s.frames.run(0.0, 2_000.0, FRAME);
    assert!(s.painted[2].calls().is_empty());
    assert!(clears(&s.painted[0]) > 100);
}

#[test]
fn resize_mid_run_follows_the_new_surface() {
    let s = scene(FrameEnv::default());
    s.frames.run(0.0, 500.0, FRAME);

    let small = Surface::fit(390.0, 844.0, 3.0);
    s.stars.borrow_mut().resize(small);
    s.meteor.borrow_mut().resize(small);
    s.aurora.borrow_mut().resize(small);
    assert_eq!(small.dpr, 2.0);

    s.painted[0].take();
    s.painted[2].take();
    s.frames.pump(520.0);

    let circles = s.painted[0].circles();
    assert!(!circles.is_empty());
    assert!(circles.iter().all(|(p, _, _)| p.x <= small.width && p.y <= small.sky_line()));
    // the cap resets on resize so the aurora repaints straight away
    assert_eq!(clears(&s.painted[2]), 1);
    assert_eq!(s.aurora.borrow().surface(), small);
}

#[test]
fn fog_follows_scroll_and_cta_hover() {
    let frames = ManualFrames::default();
    let boost = BoostSignal::default();
    let config = FogConfig::default();
    let mut fog = GroundFog::new(config.clone(), DebugOverrides::default(), boost.clone());

    let progress = Rc::new(Cell::new(0.0));
    let style = Rc::new(Cell::new(None::<FogStyle>));
    let _fog_loop = {
        let progress = progress.clone();
        let style = style.clone();
        FrameLoop::start("fog", frames.clone(), move |now| style.set(Some(fog.frame(now, progress.get(), false))))
    }
    .expect("manual source never fails");
    let opacity = |now: f64| {
        frames.pump(now);
        style.get().map(|s| s.opacity).unwrap_or(f64::NAN)
    };

    // hero scrolled 30% of its height
    progress.set(scroll_progress(-300.0, 1_000.0, config.knee));
    let scrolled = config.base_opacity + 0.5 * (config.mid_opacity - config.base_opacity);
    assert!((opacity(1_000.0) - scrolled).abs() < 1e-9);

    boost.trigger(1_000.0);
    assert!((opacity(1_500.0) - (scrolled + config.boost_opacity)).abs() < 1e-9);
    assert!((opacity(2_200.0) - scrolled).abs() < 1e-9);

    progress.set(scroll_progress(-2_000.0, 1_000.0, config.knee));
    assert!((opacity(2_300.0) - config.max_opacity).abs() < 1e-9);
    assert!(style.get().map_or(false, |s| s.scale <= config.scale_ceiling));
}
