use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::logo::SinaiqLogo;

pub fn copyright_line(year: i32) -> String {
    format!("© {} SINAIQ Marketing Agency. All rights reserved.", year)
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="section-inner">
                <div class="footer-grid">
                    <div>
                        <div class="footer-logo">
                            <SinaiqLogo width={180} height={32} class="logo-glow" />
                        </div>
                        <p class="footer-blurb">
                            {"Empowering brands with AI-driven marketing strategies that deliver measurable growth and lasting impact."}
                        </p>
                    </div>

                    <div class="footer-columns">
                        <div>
                            <h3 class="footer-heading">{"Get in Touch"}</h3>
                            <ul class="footer-list">
                                <li><span>{"📍"}</span><span>{"Cairo, Egypt"}</span></li>
                                <li>
                                    <span>{"📧"}</span>
                                    <a href="mailto:hello@aurimarketing.com">{"hello@aurimarketing.com"}</a>
                                </li>
                                <li>
                                    <span>{"📱"}</span>
                                    <a href="tel:+20XXXXXXXXX">{"+20 XXX XXX XXXX"}</a>
                                </li>
                            </ul>
                        </div>
                        <div>
                            <h3 class="footer-heading">{"Follow Us"}</h3>
                            <ul class="footer-list">
                                <li><a href="#"><span>{"🌐"}</span>{" Facebook"}</a></li>
                                <li><a href="#"><span>{"📸"}</span>{" Instagram"}</a></li>
                                <li><a href="#"><span>{"💼"}</span>{" LinkedIn"}</a></li>
                            </ul>
                        </div>
                    </div>
                </div>

                <div class="footer-divider" />
                <p class="footer-copyright">{copyright_line(year)}</p>
            </div>
            <style>
                {r#"
                    .site-footer {
                        padding: 4rem 1.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .footer-grid {
                        display: grid;
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    .footer-logo { margin-bottom: 1rem; }
                    .logo-glow { filter: drop-shadow(0 0 8px rgba(109, 95, 255, 0.15)); }
                    .footer-blurb {
                        max-width: 28rem;
                        line-height: 1.625;
                        color: var(--muted);
                    }
                    .footer-columns {
                        display: grid;
                        gap: 2rem;
                    }
                    .footer-heading {
                        margin: 0 0 1rem;
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #fff;
                    }
                    .footer-list {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        color: var(--muted);
                    }
                    .footer-list li {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .footer-list a {
                        color: inherit;
                        text-decoration: none;
                        transition: color 150ms;
                    }
                    .footer-list a:hover { color: #fff; }
                    .footer-divider {
                        height: 1px;
                        margin-bottom: 2rem;
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .footer-copyright {
                        text-align: center;
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                    @media (min-width: 640px) {
                        .footer-columns { grid-template-columns: 1fr 1fr; }
                    }
                    @media (min-width: 768px) {
                        .site-footer { padding: 5rem 2rem; }
                        .footer-grid { grid-template-columns: 1fr 1fr; gap: 3rem; }
                    }
                    @media (min-width: 1024px) {
                        .footer-grid { grid-template-columns: 1fr 2fr; }
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_year() {
        assert_eq!(copyright_line(2025), "© 2025 SINAIQ Marketing Agency. All rights reserved.");
    }
}
