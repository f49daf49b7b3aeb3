use yew::prelude::*;

use crate::hero::browser::prefers_reduced_motion;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or(160)]
    pub width: u32,
    #[prop_or(28)]
    pub height: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// SVG wordmark. The gradient on "AI" sweeps unless motion is reduced.
#[function_component(SinaiqLogo)]
pub fn sinaiq_logo(props: &LogoProps) -> Html {
    let reduce = use_state(prefers_reduced_motion);

    html! {
        <svg
            class={props.class.clone()}
            width={props.width.to_string()}
            height={props.height.to_string()}
            viewBox="0 0 320 56"
            role="img"
            aria-label="SINAIQ"
            xmlns="http://www.w3.org/2000/svg"
        >
            <defs>
                <filter id="softGlow" x="-20%" y="-20%" width="140%" height="140%">
                    <feGaussianBlur in="SourceGraphic" stdDeviation="2" result="blur" />
                    <feMerge>
                        <feMergeNode in="blur" />
                        <feMergeNode in="SourceGraphic" />
                    </feMerge>
                </filter>
                <linearGradient id="aiGradient" x1="0%" y1="0%" x2="100%" y2="0%" gradientUnits="userSpaceOnUse">
                    <stop offset="0%" stop-color="#4DA3FF" />
                    <stop offset="50%" stop-color="#A855F7" />
                    <stop offset="100%" stop-color="#4DA3FF" />
                    if !*reduce {
                        <animate attributeName="x1" values="-100%;0%;-100%" dur="4s" repeatCount="indefinite" />
                        <animate attributeName="x2" values="0%;100%;0%" dur="4s" repeatCount="indefinite" />
                    }
                </linearGradient>
            </defs>
            <text
                x="0"
                y="34"
                font-family="Inter, ui-sans-serif, system-ui, -apple-system"
                font-size="36"
                font-weight="700"
                letter-spacing="3"
                fill="#FFFFFF"
                filter="url(#softGlow)"
            >
                {"SIN"}<tspan fill="url(#aiGradient)">{"AI"}</tspan>{"Q"}
            </text>
        </svg>
    }
}
