use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::section::Section;
use crate::visibility::use_visibility;

const SOCIAL_FIGURES: &[(&str, &str)] = &[
    ("Healthcare Access", "2M+ Patients"),
    ("Community Programs", "150+ Initiatives"),
    ("Educational Support", "50K+ Students"),
];

const IMPACT: &[(&str, &str, &str)] = &[
    ("🌍", "Community Impact", "Promoting responsible healthcare practices and long-term social value."),
    ("❤", "Patient-Centric Approach", "Focused on safety, quality and reliability across our product portfolio."),
    ("🎓", "Education & Awareness", "Supporting health education and awareness initiatives in collaboration with partners."),
    ("🤝", "Collaborations", "Working with healthcare stakeholders and organizations to amplify social impact."),
];

#[function_component(Sustainability)]
pub fn sustainability() -> Html {
    let node = use_node_ref();
    let visibility = use_visibility(node.clone());

    html! {
        <section id={Section::Sustainability.id()} ref={node} class={classes!("sustainability", "reveal", visibility.class())} aria-label="Sustainability">
            <div class="section-header">
                <div class="badge">{"Vision & Infrastructure"}</div>
                <h2>{"Building a State-of-the-Art "}<span class="accent">{"Manufacturing Facility"}</span></h2>
                <p>
                    {"C Life Pharmaceuticals plans to establish a state-of-the-art manufacturing facility focused on \
                      quality, compliance, and operational excellence. This future facility is envisioned to align with \
                      WHO-GMP standards, advanced automation, and sustainable manufacturing practices."}
                </p>
            </div>

            <div class="facility">
                <FallbackImage
                    src="https://images.unsplash.com/photo-1759548845813-12a8cfc96b70?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080"
                    alt="State-of-the-art pharmaceutical manufacturing facility"
                />
                <div class="facility-overlay">
                    <h3>{"Environmental Commitment"}</h3>
                    <p>
                        {"At C Life Pharmaceuticals, sustainability is an integral part of our long-term vision. We promote \
                          environmentally responsible practices across our value chain through collaboration with compliant \
                          partners. Looking ahead, we plan to establish a state-of-the-art manufacturing facility designed \
                          around sustainability, energy efficiency, and regulatory compliance. Our goal is to support \
                          responsible growth while minimizing environmental impact."}
                    </p>
                </div>
            </div>

            <div class="responsibility">
                <div>
                    <h3>{"Social Responsibility"}</h3>
                    <p>
                        {"At C Life Pharmaceuticals, we believe responsible growth goes hand in hand with social impact. \
                          Our focus is on improving healthcare access, supporting community well-being and fostering \
                          ethical business practices through meaningful collaborations and initiatives."}
                    </p>
                    <div class="figures">
                        { for SOCIAL_FIGURES.iter().map(|(title, value)| html! {
                            <div class="figure">
                                <span>{*title}</span>
                                <span class="figure-value">{*value}</span>
                            </div>
                        }) }
                    </div>
                    <button class="primary-button">{"Learn More About CSR"}</button>
                </div>

                <div class="impact-grid">
                    { for IMPACT.iter().map(|(icon, title, text)| html! {
                        <div class="impact-card">
                            <div class="impact-icon">{*icon}</div>
                            <div class="impact-title">{*title}</div>
                            <div class="impact-text">{*text}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
