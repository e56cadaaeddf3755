use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::logo::{Logo, LogoVariant};
use crate::pages::products::THERAPY_AREAS;
use crate::section::{NavTarget, Section};
use crate::tracker::header_is_compact;
use crate::viewport::{BrowserViewport, Viewport};

const NAV_ITEMS: &[NavTarget] = &[
    NavTarget::Section(Section::Home),
    NavTarget::Section(Section::About),
    NavTarget::Section(Section::Products),
    NavTarget::Section(Section::Research),
    NavTarget::Section(Section::Sustainability),
    NavTarget::Section(Section::News),
    NavTarget::Founders,
];

fn nav_label(target: NavTarget) -> &'static str {
    match target {
        NavTarget::Section(section) => section.label(),
        NavTarget::Founders => "Founders",
    }
}

const CAREERS: NavTarget = NavTarget::Section(Section::Contact);

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active_section: Section,
    pub on_navigate: Callback<NavTarget>,
}

fn link_class(active: bool) -> Classes {
    classes!("nav-link", active.then_some("active"))
}

/// `onclick` that swallows the anchor's default jump and navigates instead.
fn nav_click(on_navigate: &Callback<NavTarget>, target: NavTarget, after: Option<Callback<()>>) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_navigate.emit(target);
        if let Some(after) = &after {
            after.emit(());
        }
    })
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { active_section, on_navigate } = props;
    let menu_open = use_state(|| false);
    let products_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let viewport = BrowserViewport;
            let subscription = viewport.on_scroll(Box::new(move || {
                is_scrolled.set(header_is_compact(viewport.scroll_y()));
            }));
            move || drop(subscription)
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let close_products = {
        let products_open = products_open.clone();
        Callback::from(move |_: ()| products_open.set(false))
    };

    let open_products = {
        let products_open = products_open.clone();
        Callback::from(move |_: MouseEvent| products_open.set(true))
    };

    let leave_products = {
        let products_open = products_open.clone();
        Callback::from(move |_: MouseEvent| products_open.set(false))
    };

    let is_active = |target: NavTarget| target == NavTarget::Section(*active_section);

    let desktop_items = NAV_ITEMS.iter().map(|&target| {
        let label = nav_label(target);
        if target == NavTarget::Section(Section::Products) {
            html! {
                <div class="nav-dropdown" onmouseenter={open_products.clone()} onmouseleave={leave_products.clone()}>
                    <a href="#products"
                        class={link_class(is_active(target))}
                        onclick={nav_click(on_navigate, target, None)}>
                        {label}
                        <span class="chevron">{"▾"}</span>
                    </a>
                    {
                        if *products_open {
                            html! {
                                <div class="dropdown-menu">
                                    { for THERAPY_AREAS.iter().map(|area| html! {
                                        <a href="#products"
                                            class="dropdown-item"
                                            onclick={nav_click(on_navigate, target, Some(close_products.clone()))}>
                                            {area.title}
                                        </a>
                                    }) }
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            }
        } else {
            html! {
                <a href={format!("#{}", target.id())}
                    class={link_class(is_active(target))}
                    onclick={nav_click(on_navigate, target, None)}>
                    {label}
                </a>
            }
        }
    });

    html! {
        <header class={classes!("site-header", (*is_scrolled).then_some("scrolled"))}>
            <nav class="nav-content">
                <div class="nav-logo" onclick={nav_click(on_navigate, Section::Home.into(), None)}>
                    <Logo variant={LogoVariant::Default} />
                </div>

                <div class="nav-right">
                    { for desktop_items }
                    <button type="button" class="nav-cta" onclick={nav_click(on_navigate, CAREERS, None)}>
                        {"Careers"}
                    </button>
                </div>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </nav>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_ITEMS.iter().map(|&target| html! {
                                <button
                                    class={classes!("mobile-link", is_active(target).then_some("active"))}
                                    onclick={nav_click(on_navigate, target, Some(close_menu.clone()))}>
                                    {nav_label(target)}
                                </button>
                            }) }
                            <button class="nav-cta" onclick={nav_click(on_navigate, CAREERS, Some(close_menu.clone()))}>
                                {"Careers"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
