use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::VISIBILITY_THRESHOLD;

/// One-shot entrance latch for a section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    /// `Hidden -> Shown` on the first intersection; `Shown` is terminal.
    pub fn observe(self, is_intersecting: bool) -> Visibility {
        match self {
            Visibility::Shown => Visibility::Shown,
            Visibility::Hidden if is_intersecting => Visibility::Shown,
            Visibility::Hidden => Visibility::Hidden,
        }
    }

    pub fn is_shown(self) -> bool {
        self == Visibility::Shown
    }

    /// Class toggled on `.reveal` elements to run their entrance transition.
    pub fn class(self) -> Option<&'static str> {
        self.is_shown().then_some("shown")
    }
}

/// Watches one element until it first intersects, then lets go.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    target: Element,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn watch(target: Element, on_shown: impl Fn() + 'static) -> Option<Self> {
        let watched = target.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if Visibility::Hidden.observe(intersecting).is_shown() {
                on_shown();
                observer.unobserve(&watched);
                observer.disconnect();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
        observer.observe(&target);

        Some(Self {
            observer,
            target,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.unobserve(&self.target);
        self.observer.disconnect();
    }
}

/// Latches to `Shown` the first time the referenced element scrolls into view.
#[hook]
pub fn use_visibility(node: NodeRef) -> Visibility {
    let visibility = use_state_eq(Visibility::default);

    {
        let visibility = visibility.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    VisibilityObserver::watch(element, move || visibility.set(Visibility::Shown))
                });
                move || drop(observer)
            },
            node,
        );
    }

    *visibility
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_intersection_latches() {
        assert_eq!(Visibility::Hidden.observe(false), Visibility::Hidden);
        assert_eq!(Visibility::Hidden.observe(true), Visibility::Shown);
    }

    #[test]
    fn leaving_the_viewport_never_hides_again() {
        let mut visibility = Visibility::default();
        let mut transitions = 0;
        for intersecting in [false, true, false, true, false, false, true] {
            let next = visibility.observe(intersecting);
            if next != visibility {
                transitions += 1;
            }
            visibility = next;
        }
        assert_eq!(visibility, Visibility::Shown);
        assert_eq!(transitions, 1);
    }

    #[test]
    fn class_only_when_shown() {
        assert_eq!(Visibility::Hidden.class(), None);
        assert_eq!(Visibility::Shown.class(), Some("shown"));
    }
}
