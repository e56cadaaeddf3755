use yew::prelude::*;

use crate::section::Section;
use crate::visibility::use_visibility;

#[function_component(News)]
pub fn news() -> Html {
    let node = use_node_ref();
    let visibility = use_visibility(node.clone());

    html! {
        <section id={Section::News.id()} ref={node} class={classes!("news", "reveal", visibility.class())} aria-label="News & Updates">
            <div class="section-header">
                <div class="badge">{"Latest News & Updates"}</div>
                <h2>{"Stay Informed With "}<span class="accent">{"Our Latest News"}</span></h2>
                <p>
                    {"Keep up with the latest developments, breakthroughs, and achievements from C Life Pharmaceuticals."}
                </p>
            </div>

            <div class="press-releases">
                <div>
                    <h3>{"📈 Press Releases"}</h3>
                    <p>
                        {"Access our complete archive of press releases, financial reports, and corporate announcements."}
                    </p>
                </div>
                <div class="press-actions">
                    <button class="primary-button">{"View All Press Releases"}</button>
                    <button class="secondary-button">{"Subscribe to Updates"}</button>
                </div>
            </div>
        </section>
    }
}
