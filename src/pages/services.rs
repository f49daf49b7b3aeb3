use yew::prelude::*;

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        title: "Social Media Marketing",
        description: "Build awareness and engagement on Instagram, Facebook, TikTok & LinkedIn.",
    },
    Service {
        title: "Performance Ads",
        description: "Maximize ROI with precision-targeted campaigns.",
    },
    Service {
        title: "Content Creation",
        description: "Stunning visuals, reels, and copywriting that capture attention.",
    },
    Service {
        title: "SEO & Google Ads",
        description: "Boost visibility and attract high-intent customers.",
    },
    Service {
        title: "Brand Strategy",
        description: "Position your business for long-term success.",
    },
    Service {
        title: "AI-Powered Media Planning",
        description: "Plan your campaigns with smart AI tools and make data-driven decisions.",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="section">
            <div class="section-inner">
                <div class="section-header">
                    <h2 class="section-title">
                        {"What We Do "}<span class="text-gradient">{"Best"}</span>
                    </h2>
                </div>

                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div key={service.title} class="glass-card lift-card">
                            <h3 class="card-title">{service.title}</h3>
                            <p class="card-text">{service.description}</p>
                        </div>
                    }) }
                </div>

                <p class="services-footer">
                    <span class="text-gradient">{"All-in-One Platform Reach"}</span>
                    {": run and manage campaigns across all major platforms from one hub."}
                </p>
            </div>
            <style>
                {r#"
                    .services-grid {
                        display: grid;
                        gap: 1.5rem;
                        margin-bottom: 3rem;
                    }
                    .services-footer {
                        text-align: center;
                        font-size: 1.125rem;
                        font-weight: 500;
                        color: var(--muted);
                    }
                    @media (min-width: 768px) {
                        .services-grid {
                            grid-template-columns: repeat(2, 1fr);
                            gap: 2rem;
                        }
                        .services-footer { font-size: 1.25rem; }
                    }
                    @media (min-width: 1024px) {
                        .services-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                "#}
            </style>
        </section>
    }
}
