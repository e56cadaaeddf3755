use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::section::Section;
use crate::visibility::use_visibility;

pub struct TherapyArea {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Colour theme suffix for the card.
    pub tone: &'static str,
}

pub const THERAPY_AREAS: &[TherapyArea] = &[
    TherapyArea {
        title: "Cardiovascular",
        description: "Comprehensive solutions for heart health and cardiovascular diseases.",
        icon: "♥",
        tone: "red",
    },
    TherapyArea {
        title: "Diabetes Care",
        description: "Advanced medications for effective diabetes management and control.",
        icon: "〰",
        tone: "blue",
    },
    TherapyArea {
        title: "Neutraceuticals",
        description: "Science-backed nutritional solutions designed to support overall health, wellness and preventive care.",
        icon: "❋",
        tone: "cyan",
    },
    TherapyArea {
        title: "Gastroenterology",
        description: "Effective therapies for digestive health, supporting the management of gastrointestinal and liver-related conditions.",
        icon: "⛨",
        tone: "purple",
    },
    TherapyArea {
        title: "Nephrology",
        description: "Reliable treatments focused on kidney health and the management of renal and metabolic disorders.",
        icon: "→",
        tone: "green",
    },
    TherapyArea {
        title: "Oncology",
        description: "Advanced treatments for cancer, providing hope and support to patients and their families.",
        icon: "💧",
        tone: "pink",
    },
    TherapyArea {
        title: "Neurology",
        description: "Innovative solutions for neurological disorders, improving the quality of life for patients.",
        icon: "✦",
        tone: "yellow",
    },
    TherapyArea {
        title: "Ophthalmology",
        description: "Specialized treatments for eye health, ensuring clear vision and overall ocular well-being.",
        icon: "👁",
        tone: "gray",
    },
    TherapyArea {
        title: "Orthopedics",
        description: "Effective therapies for bone and joint health, supporting the management of musculoskeletal conditions.",
        icon: "🦴",
        tone: "orange",
    },
    TherapyArea {
        title: "Pediatrics",
        description: "Specialized care for children, addressing their unique healthcare needs with precision and compassion.",
        icon: "👶",
        tone: "teal",
    },
];

const CERTIFICATIONS: &[&str] = &["WHO-GMP", "FDA Approved", "ISO 9001:2015", "EMA Certified"];

#[function_component(Products)]
pub fn products() -> Html {
    let node = use_node_ref();
    let visibility = use_visibility(node.clone());
    let active_card = use_state(|| 0usize);

    let cards = THERAPY_AREAS.iter().enumerate().map(|(index, area)| {
        let onclick = {
            let active_card = active_card.clone();
            Callback::from(move |_: MouseEvent| active_card.set(index))
        };
        let selected = *active_card == index;
        html! {
            <div class={classes!("therapy-card", format!("tone-{}", area.tone), selected.then_some("selected"))} {onclick}>
                <div class="therapy-icon">{area.icon}</div>
                <h3>{area.title}</h3>
                <p>{area.description}</p>
                <button class="card-button">{"Explore Products"}</button>
            </div>
        }
    });

    html! {
        <section id={Section::Products.id()} ref={node} class={classes!("products", "reveal", visibility.class())} aria-label="Products">
            <div class="section-header">
                <div class="badge">{"Our Therapy Areas"}</div>
                <h2><span class="accent">{"Focused Solutions for "}</span>{"Better Health"}</h2>
                <p>
                    {"Explore our range of high-quality pharmaceutical products developed to support effective disease \
                      management across multiple therapeutic segments, addressing key healthcare needs with safety, \
                      quality and care at the core."}
                </p>
            </div>

            <div class="therapy-grid">
                { for cards }
            </div>

            <div class="showcase">
                <FallbackImage
                    src="https://images.unsplash.com/photo-1675851143055-23ae996bb212?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080"
                    alt="Healthcare medicine and pharmaceutical products"
                />
                <div class="showcase-overlay">
                    <h3>{"Quality You Can Trust"}</h3>
                    <p>
                        {"C Life Pharmaceuticals partners with certified manufacturing facilities that comply with WHO-GMP \
                          and applicable regulatory guidelines, ensuring consistent quality, safety, and efficacy across \
                          its product portfolio."}
                    </p>
                    <button class="primary-button light">{"View Product Catalog"}</button>
                </div>
            </div>

            <div class="certifications">
                { for CERTIFICATIONS.iter().map(|cert| html! {
                    <div class="certification">
                        <div class="check">{"✓"}</div>
                        <div>{*cert}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}
