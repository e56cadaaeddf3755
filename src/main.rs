use yew::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod mail;
mod metadata;
mod navigation;
mod section;
mod tracker;
mod viewport;
mod visibility;

mod components {
    pub mod fallback_image;
    pub mod footer;
    pub mod header;
    pub mod logo;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod founders;
    pub mod hero;
    pub mod news;
    pub mod products;
    pub mod research;
    pub mod sustainability;
}

use components::{footer::Footer, header::Header};
use navigation::{NavAction, NavigationController, NavigationState, View};
use pages::{
    about::About,
    contact::Contact,
    founders::Founders,
    hero::Hero,
    news::News,
    products::Products,
    research::Research,
    sustainability::Sustainability,
};
use section::NavTarget;
use tracker::ScrollTracker;
use viewport::{BrowserViewport, Viewport};

#[function_component]
fn App() -> Html {
    let nav = use_reducer(NavigationState::default);
    let controller = NavigationController::new(BrowserViewport);

    // Scroll tracking for the whole page lifetime
    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(move |_| {
            let tracker = ScrollTracker::new(BrowserViewport);
            let subscription = BrowserViewport.on_scroll(Box::new(move || {
                dispatcher.dispatch(NavAction::Scrolled(tracker.sample()));
            }));
            move || drop(subscription)
        }, ());
    }

    // Title, meta tags and JSON-LD
    use_effect_with_deps(move |_| {
        let script = metadata::install();
        move || {
            if let Some(script) = script {
                script.remove();
            }
        }
    }, ());

    let on_navigate = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |target: NavTarget| {
            if target == NavTarget::Founders {
                info!("Rendering Founders page");
            }
            controller.perform(NavAction::Navigate(target), |action| dispatcher.dispatch(action));
        })
    };

    let on_back = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: ()| {
            info!("Rendering main site");
            controller.perform(NavAction::BackFromFounders, |action| dispatcher.dispatch(action));
        })
    };

    let scroll_to_top = Callback::from(move |_: MouseEvent| controller.scroll_to_top());

    match nav.view() {
        View::Founders => html! {
            <div class="site">
                <Founders on_back={on_back} />
            </div>
        },
        View::MainSite => html! {
            <div class="site">
                <a href="#main-content" class="skip-link">{"Skip to main content"}</a>
                <Header active_section={nav.active_section} on_navigate={on_navigate.clone()} />
                <main id="main-content">
                    <Hero on_navigate={on_navigate.clone()} />
                    <About />
                    <Products />
                    <Research />
                    <Sustainability />
                    <News />
                    <Contact />
                </main>
                <Footer on_navigate={on_navigate} />
                {
                    if nav.show_scroll_to_top {
                        html! {
                            <button class="scroll-to-top" aria-label="Scroll to top" onclick={scroll_to_top}>
                                {"▲"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        },
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
