use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::section::Section;
use crate::visibility::use_visibility;

struct Value {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const VALUES: &[Value] = &[
    Value {
        icon: "🏅",
        title: "Excellence",
        description: "Committed to the highest standards in pharmaceutical manufacturing and research.",
    },
    Value {
        icon: "👥",
        title: "Patient-Centric",
        description: "Putting patient needs at the forefront of everything we do.",
    },
    Value {
        icon: "🌐",
        title: "National Reach",
        description: "Delivering quality healthcare solutions across multiple Indian states & UT's.",
    },
    Value {
        icon: "📈",
        title: "Research-Driven Care",
        description: "Strengthening healthcare with science-backed formulations and innovation.",
    },
];

#[function_component(About)]
pub fn about() -> Html {
    let node = use_node_ref();
    let visibility = use_visibility(node.clone());

    html! {
        <section id={Section::About.id()} ref={node} class={classes!("about", "reveal", visibility.class())} aria-label="About Us">
            <div class="section-header">
                <div class="badge">{"About C Life Pharmaceuticals"}</div>
                <h2>{"Transforming Lives Through "}<span class="accent">{"Healthcare Excellence"}</span></h2>
                <p>
                    {"Driven by responsible innovation, ethical practices and strong partnerships, we are committed \
                      to advancing healthcare with integrity, upholding the highest standards of safety, quality and \
                      transparency in every step we take."}
                </p>
            </div>

            <div class="about-grid">
                <div class="about-visual">
                    <FallbackImage
                        src="https://images.unsplash.com/photo-1758573466989-bbf14f1db77e?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080"
                        alt="Medical science innovation and pharmaceutical research"
                    />
                    <div class="floating-card">
                        <div class="card-title">{"500K+"}</div>
                        <div class="card-subtitle">{"Lives Served Annually"}</div>
                    </div>
                </div>
                <div class="about-copy">
                    <h3>{"Our Mission"}</h3>
                    <p>
                        {"At C-Life Pharmaceuticals, we place human lives at the heart of everything we do. Our mission \
                          is to deliver reliable, high-quality and affordable pharmaceutical solutions that patients and \
                          healthcare professionals can trust to improve health outcomes and quality of life."}
                    </p>
                    <p>
                        {"We pursue innovation with purpose, practice ethics without compromising and upholding the \
                          highest standards of safety and quality, because when it comes to human lives, nothing else matters."}
                    </p>
                    <button class="primary-button">{"Learn More About Us"}</button>
                </div>
            </div>

            <div class="values-grid">
                { for VALUES.iter().map(|value| html! {
                    <div class="value-card">
                        <div class="value-icon">{value.icon}</div>
                        <h4>{value.title}</h4>
                        <p>{value.description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
