use yew::prelude::*;

use super::pill_button::{PillButton, Variant};

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    html! {
        <header class="top-nav">
            <div class="nav-bar">
                <a href="#" class="nav-wordmark">
                    {"SIN"}<span class="text-gradient">{"AI"}</span>{"Q"}
                </a>

                <nav class="nav-links">
                    <a class="link-muted" href="#services">{"Services"}</a>
                    <a class="link-muted" href="#about">{"About\u{a0}Us"}</a>
                    <a class="link-muted" href="#faq">{"FAQ"}</a>
                </nav>

                <div class="nav-actions">
                    <PillButton variant={Variant::Outline} href="#signin">{"Sign in"}</PillButton>
                    <span class="desktop-only">
                        <PillButton variant={Variant::Primary} href="#signup">{"Sign up"}</PillButton>
                    </span>
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: absolute;
                        inset: 0 0 auto 0;
                        z-index: 50;
                        padding: 20px 16px 0;
                    }
                    .nav-bar {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 8px 16px;
                        border-radius: 999px;
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        background: rgba(255, 255, 255, 0.04);
                        backdrop-filter: blur(12px);
                    }
                    .nav-wordmark {
                        font-size: 1.125rem;
                        font-weight: 600;
                        letter-spacing: 0.14em;
                        color: #fff;
                        text-decoration: none;
                    }
                    .nav-links {
                        display: none;
                        align-items: center;
                        gap: 1.75rem;
                        font-size: 0.875rem;
                    }
                    .nav-actions {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .desktop-only {
                        display: none;
                    }
                    @media (min-width: 768px) {
                        .nav-wordmark { font-size: 1.25rem; }
                        .nav-links { display: flex; }
                        .desktop-only { display: inline-flex; }
                    }
                "#}
            </style>
        </header>
    }
}
