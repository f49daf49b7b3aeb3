use yew::prelude::*;

const REASONS: [&str; 4] = [
    "AI-driven insights with human creativity.",
    "Transparent reporting & analytics.",
    "Tailored strategies for your industry.",
    "Proven track record of scaling brands.",
];

#[function_component(WhyChoose)]
pub fn why_choose() -> Html {
    html! {
        <section class="section">
            <div class="section-inner narrow centered">
                <h2 class="section-title why-title">
                    {"Why Brands "}<span class="text-gradient">{"Trust Us"}</span>
                </h2>

                <div class="why-list">
                    { for REASONS.iter().map(|reason| html! {
                        <div key={*reason} class="why-item">
                            <span class="why-check">{"✅"}</span>
                            <p>{*reason}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .why-title {
                        margin-bottom: 4rem;
                    }
                    .why-list {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .why-item {
                        display: flex;
                        align-items: center;
                        max-width: 42rem;
                        margin: 0 auto;
                        width: 100%;
                        text-align: left;
                    }
                    .why-check {
                        flex-shrink: 0;
                        width: 2rem;
                        margin-right: 1rem;
                        font-size: 1.5rem;
                        transition: transform 200ms;
                    }
                    .why-item:hover .why-check {
                        transform: scale(1.1);
                    }
                    .why-item p {
                        margin: 0;
                        font-size: 1.125rem;
                        line-height: 1.625;
                        color: var(--text);
                        transition: color 200ms;
                    }
                    .why-item:hover p {
                        color: #fff;
                    }
                    @media (min-width: 768px) {
                        .why-list { gap: 2rem; }
                        .why-check { margin-right: 1.5rem; font-size: 1.875rem; }
                        .why-item p { font-size: 1.25rem; }
                    }
                "#}
            </style>
        </section>
    }
}
