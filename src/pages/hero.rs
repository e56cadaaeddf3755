use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::fallback_image::FallbackImage;
use crate::section::{NavTarget, Section};

const STATS: &[(&str, &str)] = &[
    ("20+", "Indian States & UT's"),
    ("70+", "Quality Products"),
    ("500K+", "Lives Served"),
];

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<NavTarget>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let go_to = |section: Section| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section.into());
        })
    };

    html! {
        <section id={Section::Home.id()} class="hero" aria-label="Home">
            <div class="hero-background"></div>
            <div class="hero-content">
                <div class="hero-copy">
                    <h1>
                        {"A Vision For "}<br />
                        <span class="accent">{"Healthier Lives"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"C-Life Pharmaceuticals is committed to improving lives through high-quality, \
                          reliable and ethically driven healthcare solutions. Guided by science and care, \
                          we strive to deliver trusted medicines that support healthier communities and a better future."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#products" class="hero-cta" onclick={go_to(Section::Products)}>
                            {"Explore Our Products →"}
                        </a>
                        <a href="#research" class="hero-cta secondary" onclick={go_to(Section::Research)}>
                            {"Our Research"}
                        </a>
                    </div>
                    <div class="hero-stats">
                        { for STATS.iter().map(|(value, label)| html! {
                            <div class="stat">
                                <div class="stat-value">{*value}</div>
                                <div class="stat-label">{*label}</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="hero-visual">
                    <FallbackImage
                        src="https://images.unsplash.com/photo-1738778151585-36b19054059a?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080"
                        alt="Pharmaceutical research laboratory with advanced equipment"
                        class={classes!("hero-image")}
                    />
                    <div class="floating-card bottom-left">
                        <div class="card-title">{"✓ ISO Certified"}</div>
                        <div class="card-subtitle">{"Quality Assured"}</div>
                    </div>
                    <div class="floating-card top-right">
                        <div class="card-title">{"♥ Patient First"}</div>
                        <div class="card-subtitle">{"Healthcare Focus"}</div>
                    </div>
                </div>
            </div>
            <div class="scroll-indicator"><span></span></div>
        </section>
    }
}
