use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::logo::{Logo, LogoVariant};
use crate::config::SITE_NAME;
use crate::pages::products::THERAPY_AREAS;
use crate::section::{NavTarget, Section};

const COMPANY_LINKS: &[&str] = &["About Us", "Leadership", "Careers", "Investors", "Newsroom"];
const RESOURCE_LINKS: &[&str] = &[
    "Research & Development",
    "Clinical Trials",
    "Quality Assurance",
    "Publications",
    "Downloads",
];
const SUPPORT_LINKS: &[&str] = &[
    "Contact Us",
    "Customer Service",
    "FAQs",
    "Adverse Events",
    "Product Support",
];

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "f"),
    ("Twitter", "𝕏"),
    ("LinkedIn", "in"),
    ("Instagram", "◎"),
    ("YouTube", "▶"),
];

/// Section a footer link label jumps to, if any.
pub fn footer_link_target(label: &str) -> Option<NavTarget> {
    let id = match label {
        "About Us" | "Leadership" | "Investors" => "about",
        "Careers" | "Contact Us" | "Customer Service" | "FAQs" | "Adverse Events"
        | "Product Support" => "contact",
        "Newsroom" => "news",
        "Research & Development" | "Clinical Trials" | "Quality Assurance" | "Publications"
        | "Downloads" => "research",
        _ if THERAPY_AREAS.iter().any(|area| area.title == label) => "products",
        _ => return None,
    };
    NavTarget::from_id(id)
}

fn footer_href(label: &str) -> String {
    footer_link_target(label)
        .map(|target| format!("#{}", target.id()))
        .unwrap_or_else(|| "#".to_string())
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<NavTarget>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let link = |label: &'static str| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(target) = footer_link_target(label) {
                on_navigate.emit(target);
            }
        });
        html! {
            <li><a href={footer_href(label)} class="footer-link" {onclick}>{label}</a></li>
        }
    };

    let products: Vec<&'static str> = THERAPY_AREAS.iter().map(|area| area.title).collect();
    let groups: [(&str, &[&'static str]); 4] = [
        ("Company", COMPANY_LINKS),
        ("Products", &products),
        ("Resources", RESOURCE_LINKS),
        ("Support", SUPPORT_LINKS),
    ];

    let go_home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Section::Home.into());
        })
    };

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <a href="#home" onclick={go_home}>
                        <Logo variant={LogoVariant::Footer} />
                    </a>
                    <p>{"A Vision For Healthier Lives."}</p>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|(label, glyph)| html! {
                            <a href="#" class="social-link" aria-label={*label}>{*glyph}</a>
                        }) }
                    </div>
                </div>

                { for groups.iter().map(|(title, links)| html! {
                    <div class="footer-group">
                        <h4>{*title}</h4>
                        <ul>{ for links.iter().map(|label| link(*label)) }</ul>
                    </div>
                }) }
            </div>

            <div class="footer-bottom">
                <div class="legal-links">
                    <a href="#">{"Privacy Policy"}</a>
                    <a href="#">{"Terms of Use"}</a>
                    <a href="#">{"Cookie Policy"}</a>
                </div>
                <p>{format!("© 2024 {}. All rights reserved.", SITE_NAME)}</p>
            </div>

            <p class="disclaimer">
                {"This website is for informational purposes only and does not constitute medical advice. \
                  Always consult with a qualified healthcare provider regarding any medical condition or treatment. \
                  Products and services may vary by region."}
            </p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_and_support_links_map_to_sections() {
        assert_eq!(footer_link_target("Leadership"), Some(Section::About.into()));
        assert_eq!(footer_link_target("Careers"), Some(Section::Contact.into()));
        assert_eq!(footer_link_target("Newsroom"), Some(Section::News.into()));
        assert_eq!(footer_link_target("Downloads"), Some(Section::Research.into()));
        assert_eq!(footer_link_target("FAQs"), Some(Section::Contact.into()));
    }

    #[test]
    fn every_therapy_area_links_to_products() {
        for area in THERAPY_AREAS {
            assert_eq!(footer_link_target(area.title), Some(Section::Products.into()));
        }
    }

    #[test]
    fn unknown_labels_render_inert_links() {
        assert_eq!(footer_link_target("Cookie Policy"), None);
        assert_eq!(footer_href("Cookie Policy"), "#");
        assert_eq!(footer_href("About Us"), "#about");
    }
}
