use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section">
            <div class="section-inner about-grid">
                <div class="about-copy">
                    <h2 class="section-title">
                        {"A Modern Marketing Partner for "}
                        <span class="text-gradient">{"Ambitious Brands"}</span>
                    </h2>
                    <p class="section-lead">
                        {"At SINAIQ Marketing Agency, we believe marketing should be simple, powerful, and measurable. \
                          We combine human creativity with AI-powered insights to help you connect, convert, and grow \
                          in today's fast-paced digital world."}
                    </p>
                </div>

                <div class="about-card-wrap">
                    <div class="glass-card about-card">
                        <div class="glow-border" />
                        <div class="about-card-body">
                            <div class="about-spark">{"✨"}</div>
                            <blockquote>
                                {"\"At SINAIQ, we don't just run ads, we empower you with AI tools to create media plans, \
                                  manage campaigns, and scale across every platform effortlessly.\""}
                            </blockquote>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .about-grid {
                        display: grid;
                        gap: 3rem;
                        align-items: center;
                    }
                    .about-copy > * + * {
                        margin-top: 1.5rem;
                    }
                    .about-card {
                        position: relative;
                        overflow: hidden;
                    }
                    .glow-border {
                        position: absolute;
                        inset: 0;
                        border-radius: 1rem;
                        opacity: 0.3;
                        padding: 1px;
                        background: linear-gradient(135deg, var(--ai-1), var(--ai-2));
                        -webkit-mask: linear-gradient(#fff 0 0) content-box, linear-gradient(#fff 0 0);
                        -webkit-mask-composite: xor;
                        mask: linear-gradient(#fff 0 0) content-box, linear-gradient(#fff 0 0);
                        mask-composite: exclude;
                    }
                    .about-card-body {
                        position: relative;
                        z-index: 10;
                    }
                    .about-spark {
                        font-size: 1.5rem;
                        margin-bottom: 1rem;
                    }
                    .about-card blockquote {
                        margin: 0;
                        font-size: 1.125rem;
                        font-weight: 500;
                        line-height: 1.625;
                        color: #fff;
                    }
                    @media (min-width: 1024px) {
                        .about-grid {
                            grid-template-columns: 1fr 1fr;
                            gap: 4rem;
                        }
                        .about-card-wrap { padding-left: 2rem; }
                    }
                "#}
            </style>
        </section>
    }
}
