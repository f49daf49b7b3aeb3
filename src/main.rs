use log::info;
use yew::prelude::*;

mod config;
mod error;
mod hero {
    pub mod aurora;
    pub mod browser;
    pub mod color;
    pub mod debug_panel;
    pub mod fog;
    pub mod frame_loop;
    pub mod interactive_hero;
    pub mod layer;
    pub mod layers;
    pub mod meteor;
    pub mod noise;
    pub mod overrides;
    pub mod painter;
    pub mod parallax;
    pub mod stars;
    pub mod surface;
    #[cfg(test)]
    pub mod testing;
    #[cfg(test)]
    mod tests;
}
mod components {
    pub mod logo;
    pub mod nav_bar;
    pub mod pill_button;
}
mod pages {
    pub mod about;
    pub mod cta;
    pub mod footer;
    pub mod services;
    pub mod testimonials;
    pub mod why_choose;
}

use hero::interactive_hero::InteractiveHero;
use pages::{
    about::About,
    cta::Cta,
    footer::SiteFooter,
    services::Services,
    testimonials::Testimonials,
    why_choose::WhyChoose,
};

#[function_component(App)]
fn app() -> Html {
    html! {
        <main class="page">
            <InteractiveHero />
            <About />
            <Services />
            <WhyChoose />
            <Testimonials />
            <Cta />
            <SiteFooter />
            <style>
                {r#"
                    :root {
                        --hero-deep: #060B12;
                        --ai-1: #4DA3FF;
                        --ai-2: #A855F7;
                        --ac-1: #5DA8FF;
                        --ac-2: #6D5FFF;
                        --primary: #3B82F6;
                        --surface: #0D1522;
                        --muted: #9AA8BD;
                        --text: #DCE4F0;
                    }
                    html, body {
                        margin: 0;
                        padding: 0;
                        background: var(--hero-deep);
                        color: var(--text);
                        font-family: Inter, ui-sans-serif, system-ui, -apple-system, sans-serif;
                        -webkit-font-smoothing: antialiased;
                    }
                    .page {
                        min-height: 100vh;
                        overflow-x: hidden;
                    }
                    .text-gradient {
                        background: linear-gradient(135deg, var(--ai-1), var(--ai-2));
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .text-glow {
                        text-shadow: 0 0 24px rgba(93, 168, 255, 0.25);
                    }
                    .link-muted {
                        color: rgba(255, 255, 255, 0.7);
                        text-decoration: none;
                        transition: color 150ms;
                    }
                    .link-muted:hover {
                        color: #fff;
                    }
                    .btn-pill {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 999px;
                        border: 1px solid transparent;
                        font-weight: 600;
                        text-decoration: none;
                        cursor: pointer;
                        color: #fff;
                        background: rgba(255, 255, 255, 0.08);
                        transition: transform 200ms, box-shadow 200ms, background 200ms, border-color 200ms;
                    }
                    .btn-pill:hover {
                        transform: translateY(-1px);
                    }
                    .btn-primary {
                        background: linear-gradient(135deg, var(--ac-1), var(--ac-2));
                        box-shadow: 0 8px 24px -8px rgba(93, 168, 255, 0.55);
                    }
                    .btn-primary:hover {
                        box-shadow: 0 10px 32px -6px rgba(109, 95, 255, 0.65);
                    }
                    .btn-outline {
                        background: transparent;
                        border-color: rgba(255, 255, 255, 0.25);
                    }
                    .btn-outline:hover {
                        border-color: rgba(255, 255, 255, 0.5);
                        background: rgba(255, 255, 255, 0.05);
                    }
                    .btn-md {
                        padding: 0.75rem 1.25rem;
                        font-size: 0.875rem;
                    }
                    .btn-lg {
                        padding: 0.875rem 1.5rem;
                        font-size: 1rem;
                    }
                    .section {
                        padding: 6rem 1.5rem;
                    }
                    .section-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .section-inner.medium { max-width: 72rem; }
                    .section-inner.narrow { max-width: 56rem; }
                    .centered { text-align: center; }
                    .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-title {
                        margin: 0;
                        font-size: 1.875rem;
                        font-weight: 700;
                        line-height: 1.25;
                        letter-spacing: -0.025em;
                        color: #fff;
                    }
                    .section-lead {
                        font-size: 1.125rem;
                        line-height: 1.625;
                        color: var(--muted);
                    }
                    .glass-card {
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 1.5rem;
                        backdrop-filter: blur(8px);
                        background: color-mix(in srgb, var(--surface) 70%, transparent);
                    }
                    .lift-card {
                        transition: transform 300ms, border-color 300ms;
                    }
                    .lift-card:hover {
                        transform: scale(1.05);
                        border-color: rgba(255, 255, 255, 0.2);
                    }
                    .card-title {
                        margin: 0 0 1rem;
                        font-size: 1.25rem;
                        font-weight: 600;
                        line-height: 1.25;
                        color: #fff;
                    }
                    .card-text {
                        margin: 0;
                        line-height: 1.625;
                        color: var(--muted);
                    }
                    @media (min-width: 768px) {
                        .btn-md { font-size: 1rem; }
                        .section { padding: 8rem 2rem; }
                        .section-title { font-size: 2.25rem; }
                        .section-lead { font-size: 1.25rem; }
                        .glass-card { padding: 2rem; }
                        .card-title { font-size: 1.5rem; }
                    }
                    @media (min-width: 1024px) {
                        .section-title { font-size: 3rem; }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .btn-pill, .lift-card { transition: none; }
                        .btn-pill:hover, .lift-card:hover { transform: none; }
                    }
                "#}
            </style>
        </main>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }

    info!("Starting landing page (base path {})", config::base_path());
    yew::Renderer::<App>::new().render();
}
