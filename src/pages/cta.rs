use yew::prelude::*;

#[function_component(Cta)]
pub fn cta() -> Html {
    html! {
        <section id="consult" class="section">
            <div class="section-inner narrow centered">
                <div class="glass-card cta-card">
                    <div class="cta-wash" />
                    <div class="cta-body">
                        <h2 class="section-title">
                            {"Ready to "}<span class="text-gradient">{"Transform"}</span>{" Your Marketing?"}
                        </h2>
                        <p class="section-lead cta-lead">
                            {"Let SINAIQ craft strategies that deliver real growth, not just vanity metrics."}
                        </p>
                        <button type="button" class="cta-button">{"Book Your Free Strategy Call"}</button>
                        <p class="cta-note">
                            {"🔒 Your information is secure and will never be shared. No spam, ever."}
                        </p>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .cta-card {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1.5rem;
                        padding: 2rem;
                        background: color-mix(in srgb, var(--surface) 80%, transparent);
                    }
                    .cta-wash {
                        position: absolute;
                        inset: 0;
                        opacity: 0.1;
                        background: radial-gradient(ellipse at center, var(--ai-1) 0%, var(--ai-2) 50%, transparent 70%);
                    }
                    .cta-body {
                        position: relative;
                        z-index: 10;
                    }
                    .cta-lead {
                        max-width: 42rem;
                        margin: 1.5rem auto 2rem;
                    }
                    .cta-button {
                        border: none;
                        cursor: pointer;
                        border-radius: 1rem;
                        padding: 1rem 2rem;
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #fff;
                        background: var(--primary);
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
                        transition: transform 300ms, box-shadow 300ms;
                    }
                    .cta-button:hover {
                        transform: scale(1.05);
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.35);
                    }
                    .cta-note {
                        margin-top: 1rem;
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                    @media (min-width: 768px) {
                        .cta-card { padding: 3rem; }
                        .cta-button { padding: 1.25rem 2.5rem; font-size: 1.25rem; }
                    }
                    @media (min-width: 1024px) {
                        .cta-card { padding: 4rem; }
                    }
                "#}
            </style>
        </section>
    }
}
