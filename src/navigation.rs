use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::config::HEADER_OFFSET;
use crate::section::{NavTarget, Section};
use crate::tracker::ScrollSample;
use crate::viewport::Viewport;

/// Which of the two mutually exclusive page trees is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    MainSite,
    Founders,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    pub active_section: Section,
    pub show_founders_page: bool,
    pub show_scroll_to_top: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_section: Section::Home,
            show_founders_page: false,
            show_scroll_to_top: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Scrolled(ScrollSample),
    Navigate(NavTarget),
    BackFromFounders,
}

impl NavigationState {
    pub fn view(&self) -> View {
        if self.show_founders_page {
            View::Founders
        } else {
            View::MainSite
        }
    }

    /// State half of every transition. Scroll commands live in
    /// [`NavigationController`].
    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::Scrolled(sample) => {
                self.show_scroll_to_top = sample.show_scroll_to_top();
                if let Some(active) = sample.active {
                    self.active_section = active;
                }
            }
            NavAction::Navigate(NavTarget::Founders) => self.show_founders_page = true,
            NavAction::Navigate(NavTarget::Section(section)) => self.active_section = section,
            NavAction::BackFromFounders => self.show_founders_page = false,
        }
    }
}

impl Reducible for NavigationState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Issues the imperative scroll that goes with a navigation action.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavigationController<V> {
    viewport: V,
}

impl<V: Viewport> NavigationController<V> {
    pub fn new(viewport: V) -> Self {
        Self { viewport }
    }

    pub fn scroll_for(&self, action: NavAction) {
        match action {
            NavAction::Navigate(NavTarget::Section(Section::Home)) | NavAction::BackFromFounders => {
                self.scroll_to_top()
            }
            NavAction::Navigate(NavTarget::Section(section)) => {
                match self.viewport.document_top(section.id()) {
                    Some(top) => self.viewport.smooth_scroll_to(top - HEADER_OFFSET),
                    None => debug!("no #{} element, skipping scroll", section.id()),
                }
            }
            NavAction::Navigate(NavTarget::Founders) | NavAction::Scrolled(_) => {}
        }
    }

    /// Hands the state change to `apply`, then scrolls.
    pub fn perform(&self, action: NavAction, apply: impl FnOnce(NavAction)) {
        apply(action);
        self.scroll_for(action);
    }

    pub fn scroll_to_top(&self) {
        self.viewport.smooth_scroll_to(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::fake::FakeViewport;

    fn navigate<V: Viewport>(controller: &NavigationController<V>, state: &mut NavigationState, target: NavTarget) {
        controller.perform(NavAction::Navigate(target), |action| state.apply(action));
    }

    fn go_back<V: Viewport>(controller: &NavigationController<V>, state: &mut NavigationState) {
        controller.perform(NavAction::BackFromFounders, |action| state.apply(action));
    }

    #[test]
    fn section_navigation_clears_fixed_header() {
        let viewport = FakeViewport::with_sections(&[("about", 900.0, 1700.0)]);
        viewport.scroll_y.set(200.0);
        let controller = NavigationController::new(&viewport);
        let mut state = NavigationState::default();

        navigate(&controller, &mut state, Section::About.into());

        assert_eq!(state.active_section, Section::About);
        assert_eq!(*viewport.scrolls.borrow(), vec![1020.0]);
    }

    #[test]
    fn missing_element_updates_state_without_scrolling() {
        let viewport = FakeViewport::default();
        let controller = NavigationController::new(&viewport);
        let mut state = NavigationState::default();

        navigate(&controller, &mut state, Section::About.into());

        assert_eq!(state.active_section, Section::About);
        assert!(viewport.scrolls.borrow().is_empty());
    }

    #[test]
    fn home_scrolls_to_absolute_top() {
        let viewport = FakeViewport::with_sections(&[("home", -3000.0, -2200.0)]);
        viewport.scroll_y.set(3000.0);
        let controller = NavigationController::new(&viewport);
        let mut state = NavigationState {
            active_section: Section::News,
            ..NavigationState::default()
        };

        navigate(&controller, &mut state, Section::Home.into());

        assert_eq!(state.active_section, Section::Home);
        assert_eq!(*viewport.scrolls.borrow(), vec![0.0]);
    }

    #[test]
    fn founders_round_trip_restores_initial_view() {
        let viewport = FakeViewport::default();
        let controller = NavigationController::new(&viewport);
        let mut state = NavigationState::default();

        navigate(&controller, &mut state, NavTarget::Founders);
        assert_eq!(state.view(), View::Founders);
        assert_eq!(state.active_section, Section::Home);
        assert!(viewport.scrolls.borrow().is_empty());

        go_back(&controller, &mut state);
        assert_eq!(state, NavigationState::default());
        assert_eq!(state.view(), View::MainSite);
        assert_eq!(viewport.scroll_y(), 0.0);
    }

    #[test]
    fn scroll_without_match_keeps_active_section() {
        let mut state = NavigationState {
            active_section: Section::Research,
            ..NavigationState::default()
        };
        state.apply(NavAction::Scrolled(ScrollSample { scroll_y: 2400.0, active: None }));
        assert_eq!(state.active_section, Section::Research);
        assert!(state.show_scroll_to_top);

        state.apply(NavAction::Scrolled(ScrollSample {
            scroll_y: 120.0,
            active: Some(Section::Home),
        }));
        assert_eq!(state.active_section, Section::Home);
        assert!(!state.show_scroll_to_top);
    }

    #[test]
    fn tracker_subscription_drives_state() {
        use crate::tracker::ScrollTracker;
        use std::cell::RefCell;

        let viewport = Rc::new(FakeViewport::with_sections(&[("products", 40.0, 900.0)]));
        let state = Rc::new(RefCell::new(NavigationState::default()));
        let subscription = {
            let state = state.clone();
            let tracker_viewport = viewport.clone();
            viewport.on_scroll(Box::new(move || {
                let sample = ScrollTracker::new(&*tracker_viewport).sample();
                state.borrow_mut().apply(NavAction::Scrolled(sample));
            }))
        };

        viewport.scroll_y.set(1800.0);
        viewport.fire_scroll();
        assert_eq!(state.borrow().active_section, Section::Products);
        assert!(state.borrow().show_scroll_to_top);

        drop(subscription);
        viewport.set_bounds("products", 400.0, 1200.0);
        viewport.set_bounds("about", -200.0, 400.0);
        viewport.fire_scroll();
        assert_eq!(state.borrow().active_section, Section::Products);
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let state = Rc::new(NavigationState::default());
        let same = state.clone().reduce(NavAction::Scrolled(ScrollSample {
            scroll_y: 10.0,
            active: Some(Section::Home),
        }));
        assert!(Rc::ptr_eq(&state, &same));

        let moved = state.clone().reduce(NavAction::Navigate(NavTarget::Founders));
        assert!(moved.show_founders_page);
        assert!(!state.show_founders_page);
    }
}
