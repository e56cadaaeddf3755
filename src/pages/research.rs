use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::components::fallback_image::FallbackImage;
use crate::section::Section;
use crate::visibility::use_visibility;

const COUNTER_DURATION_MS: u32 = 2000;
const COUNTER_FRAMES: u32 = 60;

const PRODUCT_COUNT: u32 = 70;
const PARTNER_COUNT: u32 = 10;

/// Counter value after `frame` ticks of a run that ends at `target`.
pub fn counter_value(target: u32, frame: u32) -> u32 {
    (target * frame / COUNTER_FRAMES).min(target)
}

const INNOVATIONS: &[(&str, &str, &str)] = &[
    (
        "🔬",
        "Research",
        "Data-driven evaluation of therapeutic needs, market demand, and formulation feasibility to identify high-impact pharmaceutical products.",
    ),
    (
        "⚗",
        "Formulation & Development",
        "Strategic development of pharmaceutical formulations in collaboration with GMP-certified manufacturing partners, from concept to market-ready products.",
    ),
    (
        "👥",
        "Quality & Regulatory Excellence",
        "Robust quality assurance and regulatory oversight ensuring all products comply with applicable CDSCO and WHO-GMP standards.",
    ),
    (
        "📈",
        "Strategic Partnerships",
        "Collaborative relationships with experienced manufacturers, suppliers and healthcare stakeholders to deliver reliable and scalable pharmaceutical solutions.",
    ),
];

#[function_component(Research)]
pub fn research() -> Html {
    let node = use_node_ref();
    let visibility = use_visibility(node.clone());
    let frame = use_state(|| 0u32);

    // One frame per timeout; stops by itself after the last frame.
    {
        let frame_setter = frame.setter();
        use_effect_with_deps(
            move |&(shown, current): &(bool, u32)| {
                let timeout = (shown && current < COUNTER_FRAMES).then(|| {
                    Timeout::new(COUNTER_DURATION_MS / COUNTER_FRAMES, move || {
                        frame_setter.set(current + 1);
                    })
                });
                move || drop(timeout)
            },
            (visibility.is_shown(), *frame),
        );
    }

    let stat_cards = [
        (format!("{}+", counter_value(PRODUCT_COUNT, *frame)), "Products Across Key Therapies", "primary"),
        (format!("{}+", counter_value(PARTNER_COUNT, *frame)), "Certified Manufacturing Partners", "accent"),
        ("Pan-India".to_string(), "Distribution Network", "dark"),
    ];

    html! {
        <section id={Section::Research.id()} ref={node} class={classes!("research", "reveal", visibility.class())} aria-label="Research & Innovation">
            <div class="section-header">
                <div class="badge">{"Research-Driven"}</div>
                <h2>{"Pioneering the "}<span class="accent">{"Future of Medicine"}</span></h2>
                <p>
                    {"C Life Pharmaceuticals combines market insight, regulatory expertise, and strong manufacturing \
                      partnerships to deliver dependable pharmaceutical solutions that meet today's healthcare needs."}
                </p>
            </div>

            <div class="stat-grid">
                { for stat_cards.into_iter().map(|(value, label, tone)| html! {
                    <div class={classes!("stat-card", tone)}>
                        <div class="stat-value">{value}</div>
                        <div class="stat-label">{label}</div>
                    </div>
                }) }
            </div>

            <div class="innovation-grid">
                <div class="innovation-visual">
                    <FallbackImage
                        src="https://images.unsplash.com/photo-1738778151585-36b19054059a?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080"
                        alt="Pharmaceutical research laboratory conducting innovative experiments"
                    />
                    <div class="floating-badge">
                        <div class="badge-icon">{"🏆"}</div>
                        <div class="badge-title">{"Innovation Award"}</div>
                        <div class="badge-year">{"2024"}</div>
                    </div>
                </div>
                <div class="innovation-cards">
                    { for INNOVATIONS.iter().map(|(icon, title, description)| html! {
                        <div class="innovation-card">
                            <div class="innovation-icon">{*icon}</div>
                            <div>
                                <h4>{*title}</h4>
                                <p>{*description}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero_and_land_on_target() {
        assert_eq!(counter_value(PRODUCT_COUNT, 0), 0);
        assert_eq!(counter_value(PRODUCT_COUNT, COUNTER_FRAMES), 70);
        assert_eq!(counter_value(PARTNER_COUNT, COUNTER_FRAMES), 10);
    }

    #[test]
    fn counters_floor_intermediate_frames() {
        assert_eq!(counter_value(PRODUCT_COUNT, 1), 1);
        assert_eq!(counter_value(PRODUCT_COUNT, 30), 35);
        assert_eq!(counter_value(PARTNER_COUNT, 5), 0);
        assert_eq!(counter_value(PARTNER_COUNT, 30), 5);
    }

    #[test]
    fn counters_never_overshoot() {
        assert_eq!(counter_value(PRODUCT_COUNT, COUNTER_FRAMES + 40), 70);
    }
}
