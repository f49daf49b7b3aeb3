use std::cell::Cell;
use std::rc::Rc;

/// Upper bound of the fog opacity slider.
pub const FOG_OPACITY_MAX: f64 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverrideValues {
    pub enabled: bool,
    pub aurora_intensity: f64,
    pub fog_opacity: f64,
}

impl Default for OverrideValues {
    fn default() -> Self {
        Self { enabled: false, aurora_intensity: 0.6, fog_opacity: 0.28 }
    }
}

/// Live values from the development tuning panel. Layers read it every frame;
/// only the panel writes it.
#[derive(Clone, Default)]
pub struct DebugOverrides(Rc<Cell<OverrideValues>>);

impl PartialEq for DebugOverrides {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl DebugOverrides {
    pub fn get(&self) -> OverrideValues {
        self.0.get()
    }

    pub fn update(&self, f: impl FnOnce(&mut OverrideValues)) {
        let mut values = self.0.get();
        f(&mut values);
        self.0.set(values);
    }

    pub fn aurora_intensity(&self) -> Option<f64> {
        let v = self.0.get();
        v.enabled.then(|| v.aurora_intensity.clamp(0.0, 1.0))
    }

    pub fn fog_opacity(&self) -> Option<f64> {
        let v = self.0.get();
        v.enabled.then(|| v.fog_opacity.clamp(0.0, FOG_OPACITY_MAX))
    }
}

/// Hover events from a call-to-action, handed to the layers that react to
/// them. Holds the timestamp of the latest trigger.
#[derive(Clone, Default)]
pub struct BoostSignal(Rc<Cell<Option<f64>>>);

impl PartialEq for BoostSignal {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl BoostSignal {
    pub fn trigger(&self, now_ms: f64) {
        self.0.set(Some(now_ms));
    }

    /// True while `now_ms` is within `hold_ms` of the latest trigger.
    pub fn active(&self, now_ms: f64, hold_ms: f64) -> bool {
        matches!(self.0.get(), Some(at) if now_ms >= at && now_ms < at + hold_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_only_when_enabled() {
        let overrides = DebugOverrides::default();
        assert_eq!(overrides.aurora_intensity(), None);
        assert_eq!(overrides.fog_opacity(), None);

        let panel = overrides.clone();
        panel.update(|v| {
            v.enabled = true;
            v.aurora_intensity = 0.9;
            v.fog_opacity = 0.5;
        });
        assert_eq!(overrides.aurora_intensity(), Some(0.9));
        assert_eq!(overrides.fog_opacity(), Some(FOG_OPACITY_MAX));
    }

    #[test]
    fn boost_decays_after_hold() {
        let boost = BoostSignal::default();
        assert!(!boost.active(0.0, 1_100.0));
        boost.clone().trigger(500.0);
        assert!(boost.active(500.0, 1_100.0));
        assert!(boost.active(1_599.0, 1_100.0));
        assert!(!boost.active(1_600.0, 1_100.0));
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = BoostSignal::default();
        assert!(a == a.clone());
        assert!(a != BoostSignal::default());
    }
}
