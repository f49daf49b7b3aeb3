use log::debug;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::overrides::{DebugOverrides, FOG_OPACITY_MAX};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct DebugPanelProps {
    pub overrides: DebugOverrides,
}

/// Development-only sliders that pin the aurora intensity and fog opacity.
/// Renders nothing in release builds.
#[function_component(DebugPanel)]
pub fn debug_panel(props: &DebugPanelProps) -> Html {
    let values = use_state(|| props.overrides.get());

    if !config::is_dev_build() {
        return html! {};
    }

    let on_toggle = {
        let overrides = props.overrides.clone();
        let values = values.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            overrides.update(|v| v.enabled = input.checked());
            debug!("debug overrides {}", if input.checked() { "on" } else { "off" });
            values.set(overrides.get());
        })
    };

    let on_aurora = {
        let overrides = props.overrides.clone();
        let values = values.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(v) = input.value().parse::<f64>() {
                overrides.update(|o| o.aurora_intensity = v);
                values.set(overrides.get());
            }
        })
    };

    let on_fog = {
        let overrides = props.overrides.clone();
        let values = values.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(v) = input.value().parse::<f64>() {
                overrides.update(|o| o.fog_opacity = v);
                values.set(overrides.get());
            }
        })
    };

    html! {
        <div class="debug-panel">
            <label class="debug-row">
                <input type="checkbox" checked={values.enabled} onchange={on_toggle} />
                {"Override"}
            </label>
            <label class="debug-row">
                {format!("Aurora {:.2}", values.aurora_intensity)}
                <input
                    type="range"
                    min="0"
                    max="1"
                    step="0.01"
                    value={values.aurora_intensity.to_string()}
                    disabled={!values.enabled}
                    oninput={on_aurora}
                />
            </label>
            <label class="debug-row">
                {format!("Fog {:.2}", values.fog_opacity)}
                <input
                    type="range"
                    min="0"
                    max={FOG_OPACITY_MAX.to_string()}
                    step="0.01"
                    value={values.fog_opacity.to_string()}
                    disabled={!values.enabled}
                    oninput={on_fog}
                />
            </label>
            <style>
                {r#"
                    .debug-panel {
                        position: fixed;
                        right: 16px;
                        bottom: 16px;
                        z-index: 100;
                        display: flex;
                        flex-direction: column;
                        gap: 8px;
                        padding: 12px 14px;
                        border-radius: 12px;
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        background: rgba(8, 17, 27, 0.85);
                        backdrop-filter: blur(8px);
                        color: #cfd8e6;
                        font: 12px/1.4 ui-monospace, SFMono-Regular, Menlo, monospace;
                    }
                    .debug-row {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 10px;
                    }
                    .debug-row input[type="range"] {
                        width: 140px;
                    }
                "#}
            </style>
        </div>
    }
}
