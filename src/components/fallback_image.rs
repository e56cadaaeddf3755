use yew::prelude::*;
use web_sys::HtmlElement;

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    /// Load immediately instead of lazily, for above-the-fold images.
    #[prop_or_default]
    pub eager: bool,
}

/// `<img>` that hides itself instead of showing a broken-image icon.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let onerror = Callback::from(|e: Event| {
        if let Some(img) = e.target_dyn_into::<HtmlElement>() {
            let _ = img.style().set_property("display", "none");
        }
    });

    html! {
        <img
            src={props.src.clone()}
            alt={props.alt.clone()}
            class={props.class.clone()}
            style={props.style.clone()}
            loading={if props.eager { "eager" } else { "lazy" }}
            {onerror}
        />
    }
}
