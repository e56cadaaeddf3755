use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

/// Vertical extent of an element relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn crosses(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// The slice of the browser window the tracker and navigator need.
///
/// Lookups return `None` when an element is missing; callers treat that as
/// "skip", never as an error.
pub trait Viewport {
    /// Released when dropped.
    type Subscription;

    fn scroll_y(&self) -> f64;

    fn bounds(&self, id: &str) -> Option<Bounds>;

    fn smooth_scroll_to(&self, top: f64);

    fn on_scroll(&self, handler: Box<dyn FnMut()>) -> Option<Self::Subscription>;

    /// Offset of the element's top edge from the top of the document.
    fn document_top(&self, id: &str) -> Option<f64> {
        self.bounds(id).map(|bounds| bounds.top + self.scroll_y())
    }
}

impl<V: Viewport + ?Sized> Viewport for &V {
    type Subscription = V::Subscription;

    fn scroll_y(&self) -> f64 {
        (**self).scroll_y()
    }

    fn bounds(&self, id: &str) -> Option<Bounds> {
        (**self).bounds(id)
    }

    fn smooth_scroll_to(&self, top: f64) {
        (**self).smooth_scroll_to(top)
    }

    fn on_scroll(&self, handler: Box<dyn FnMut()>) -> Option<Self::Subscription> {
        (**self).on_scroll(handler)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    type Subscription = ScrollSubscription;

    fn scroll_y(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn bounds(&self, id: &str) -> Option<Bounds> {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        let rect = element.get_bounding_client_rect();
        Some(Bounds::new(rect.top(), rect.bottom()))
    }

    fn smooth_scroll_to(&self, top: f64) {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    fn on_scroll(&self, handler: Box<dyn FnMut()>) -> Option<ScrollSubscription> {
        ScrollSubscription::attach(handler)
    }
}

/// A window "scroll" listener that lives exactly as long as this value.
pub struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    fn attach(handler: Box<dyn FnMut()>) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(handler);
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { window, callback })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
pub mod fake {
    use super::{Bounds, Viewport};
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    type Slot = Rc<RefCell<Option<Box<dyn FnMut()>>>>;

    /// In-memory viewport that records every scroll command it receives.
    #[derive(Default)]
    pub struct FakeViewport {
        pub scroll_y: Cell<f64>,
        pub bounds: RefCell<HashMap<String, Bounds>>,
        pub scrolls: RefCell<Vec<f64>>,
        handler: Slot,
    }

    impl FakeViewport {
        pub fn with_sections(sections: &[(&str, f64, f64)]) -> Self {
            let viewport = Self::default();
            for (id, top, bottom) in sections {
                viewport.set_bounds(id, *top, *bottom);
            }
            viewport
        }

        pub fn set_bounds(&self, id: &str, top: f64, bottom: f64) {
            self.bounds
                .borrow_mut()
                .insert(id.to_string(), Bounds::new(top, bottom));
        }

        pub fn fire_scroll(&self) {
            if let Some(handler) = self.handler.borrow_mut().as_mut() {
                handler();
            }
        }

        pub fn is_subscribed(&self) -> bool {
            self.handler.borrow().is_some()
        }
    }

    pub struct FakeSubscription {
        slot: Slot,
    }

    impl Drop for FakeSubscription {
        fn drop(&mut self) {
            self.slot.borrow_mut().take();
        }
    }

    impl Viewport for FakeViewport {
        type Subscription = FakeSubscription;

        fn scroll_y(&self) -> f64 {
            self.scroll_y.get()
        }

        fn bounds(&self, id: &str) -> Option<Bounds> {
            self.bounds.borrow().get(id).copied()
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
            self.scroll_y.set(top);
        }

        fn on_scroll(&self, handler: Box<dyn FnMut()>) -> Option<FakeSubscription> {
            *self.handler.borrow_mut() = Some(handler);
            Some(FakeSubscription {
                slot: self.handler.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeViewport;
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn crossing_is_inclusive_at_both_edges() {
        assert!(Bounds::new(100.0, 400.0).crosses(100.0));
        assert!(Bounds::new(-300.0, 100.0).crosses(100.0));
        assert!(!Bounds::new(101.0, 400.0).crosses(100.0));
        assert!(!Bounds::new(-300.0, 99.5).crosses(100.0));
    }

    #[test]
    fn document_top_adds_current_scroll() {
        let viewport = FakeViewport::with_sections(&[("about", 250.0, 900.0)]);
        viewport.scroll_y.set(1000.0);
        assert_eq!(viewport.document_top("about"), Some(1250.0));
        assert_eq!(viewport.document_top("missing"), None);
    }

    #[test]
    fn dropping_subscription_detaches_handler() {
        let viewport = FakeViewport::default();
        let hits = Rc::new(Cell::new(0));
        let subscription = {
            let hits = hits.clone();
            viewport.on_scroll(Box::new(move || hits.set(hits.get() + 1)))
        };
        viewport.fire_scroll();
        assert_eq!(hits.get(), 1);

        drop(subscription);
        assert!(!viewport.is_subscribed());
        viewport.fire_scroll();
        assert_eq!(hits.get(), 1);
    }
}
