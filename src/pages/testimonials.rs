use yew::prelude::*;

struct Testimonial {
    quote: &'static str,
    client: &'static str,
}

const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        quote: "SINAIQ doubled our online engagement in 3 months. They don't just market, they innovate.",
        client: "Client X",
    },
    Testimonial {
        quote: "We cut our lead cost by 40% thanks to SINAIQ's AI-powered campaigns.",
        client: "Client Y",
    },
];

fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="section">
            <div class="section-inner medium">
                <div class="section-header">
                    <h2 class="section-title">
                        {"Proven Results, "}<span class="text-gradient">{"Happy Clients"}</span>
                    </h2>
                </div>

                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <div key={t.client} class="glass-card lift-card">
                            <div class="testimonial-head">
                                <div class="avatar">{initial(t.client)}</div>
                                <div>
                                    <div class="client-name">{t.client}</div>
                                    <div class="client-tag">{"Verified Client"}</div>
                                </div>
                            </div>
                            <blockquote class="testimonial-quote">{format!("\"{}\"", t.quote)}</blockquote>
                            <div class="gradient-rule" />
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .testimonial-grid {
                        display: grid;
                        gap: 2rem;
                    }
                    .testimonial-head {
                        display: flex;
                        align-items: center;
                        margin-bottom: 1.5rem;
                    }
                    .avatar {
                        width: 3rem;
                        height: 3rem;
                        margin-right: 1rem;
                        border-radius: 999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.125rem;
                        font-weight: 700;
                        color: #fff;
                        background: linear-gradient(135deg, var(--ai-1), var(--ai-2));
                    }
                    .client-name {
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #fff;
                    }
                    .client-tag {
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                    .testimonial-quote {
                        margin: 0 0 1rem;
                        font-size: 1.125rem;
                        line-height: 1.625;
                        color: var(--text);
                    }
                    .gradient-rule {
                        height: 4px;
                        width: 4rem;
                        border-radius: 999px;
                        background: linear-gradient(135deg, var(--ai-1), var(--ai-2));
                    }
                    @media (min-width: 768px) {
                        .testimonial-grid {
                            grid-template-columns: 1fr 1fr;
                            gap: 3rem;
                        }
                        .avatar { width: 4rem; height: 4rem; font-size: 1.25rem; }
                        .testimonial-quote { font-size: 1.25rem; }
                    }
                "#}
            </style>
        </section>
    }
}
