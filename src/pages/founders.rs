use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::fallback_image::FallbackImage;
use crate::config::SITE_NAME;
use crate::navigation::NavigationController;
use crate::viewport::BrowserViewport;
use crate::visibility::Visibility;

struct Founder {
    name: &'static str,
    title: &'static str,
    image: &'static str,
    message: &'static str,
}

const FOUNDERS: &[Founder] = &[
    Founder {
        name: "Nehrika Sharma",
        title: "Managing Director",
        image: "https://images.unsplash.com/photo-1758518727888-ffa196002e59?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        message: "\"At C-Life Pharmaceuticals, we see more than medicines - we see lives. This belief is the foundation of everything we do and the driving force behind our commitment to healthcare excellence.\n\nGuided by care, science, and integrity, we are dedicated to improving health and enhancing quality of life through reliable and effective healthcare solutions. Our focus remains on delivering high-quality medicines that meet global standards while addressing the evolving needs of patients and healthcare professionals.\n\nWith a clear vision of \"A Vision for Healthier Lives,\" C-Life Pharmaceuticals continuously strives for innovation, ethical practices, and sustainable growth. We believe that trust, transparency, and responsibility are essential in building long-lasting relationships with doctors, partners, and communities.\n\nAs we move forward, our mission remains unchanged, to serve humanity with compassion, uphold excellence in every endeavor, and contribute meaningfully to a healthier society.\"",
    },
    Founder {
        name: "Simren Kaur",
        title: "Director of Promotions",
        image: "https://images.unsplash.com/photo-1767362828069-3a8c5324be53?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        message: "\"The pharmaceutical industry today is moving beyond short-term objectives toward purpose-driven growth. We are expanding strongly across the country, with a clear vision to become self-manufacturers of high-quality medicines that place patient's health, well-being, and trust at the heart of everything we do.\n\nWhat truly sets us apart is our unwavering commitment to every patient we serve, understanding their needs, supporting their health journey, and ensuring they can rely on us for safe and effective therapies. As part of this journey, we are developing state-of-the-art, sustainable manufacturing facilities that allow us to deliver medicines responsibly and reliably. Above all, our work is guided by the people we serve helping every patient live healthier, fuller lives is what drives us every day.\"",
    },
];

/// Blank-line separated paragraphs of a founder's message.
pub fn paragraphs(message: &str) -> impl Iterator<Item = &str> {
    message.split("\n\n")
}

#[derive(Properties, PartialEq)]
pub struct FoundersProps {
    pub on_back: Callback<()>,
}

#[function_component(Founders)]
pub fn founders(props: &FoundersProps) -> Html {
    let visibility = use_state_eq(Visibility::default);

    // Whole page is the viewport: show at once and start from the top.
    {
        let visibility = visibility.clone();
        use_effect_with_deps(move |_| {
            visibility.set(Visibility::Hidden.observe(true));
            NavigationController::new(BrowserViewport).scroll_to_top();
            || ()
        }, ());
    }

    let back = {
        let on_back = props.on_back.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_back.emit(());
        })
    };

    html! {
        <div class={classes!("founders-page", "reveal", visibility.class())}>
            <button class="back-button" onclick={back.clone()}>
                {"← "}<span>{"Back to Home"}</span>
            </button>

            <div class="section-header">
                <div class="badge">{"Leadership Insights"}</div>
                <h1><span class="accent">{"Meet Our "}</span>{"Founders"}</h1>
                <p>{"Visionary leaders driving innovation and excellence in pharmaceutical healthcare"}</p>
            </div>

            <div class="founder-list">
                { for FOUNDERS.iter().map(|founder| html! {
                    <article class="founder-card">
                        <div class="founder-portrait">
                            <FallbackImage src={founder.image} alt={founder.name} />
                            <div class="founder-caption">
                                <h3>{founder.name}</h3>
                                <p>{founder.title}</p>
                                <p class="company">{SITE_NAME}</p>
                            </div>
                        </div>
                        <div class="founder-message">
                            <div class="quote-mark">{"❝"}</div>
                            { for paragraphs(founder.message).map(|paragraph| html! { <p>{paragraph}</p> }) }
                            <p class="signature">{format!("— {}", founder.name)}</p>
                        </div>
                    </article>
                }) }
            </div>

            <div class="founders-cta">
                <h2>{"Join Our Mission"}</h2>
                <p>
                    {"Be part of a team that's dedicated to making a difference in healthcare. \
                      Explore career opportunities at C Life Pharmaceuticals."}
                </p>
                <button class="primary-button light" onclick={back}>{"Explore Opportunities"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_split_on_blank_lines() {
        let counts: Vec<_> = FOUNDERS.iter().map(|f| paragraphs(f.message).count()).collect();
        assert_eq!(counts, vec![4, 2]);
    }

    #[test]
    fn single_newlines_stay_inside_a_paragraph() {
        let parts: Vec<_> = paragraphs("one\ntwo\n\nthree").collect();
        assert_eq!(parts, vec!["one\ntwo", "three"]);
    }
}
