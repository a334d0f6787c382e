//! Transient UI state: which overlays are open, which expertise cell shows
//! its preview panel, and the navigation flags.
//!
//! Every transition is a synchronous update of a single slot. `apply`
//! reports whether the state actually changed so the reducer can skip
//! re-rendering on no-op events.

use std::rc::Rc;

use log::debug;
use yew::functional::UseReducerHandle;
use yew::Reducible;

use crate::config::TOUCH_BREAKPOINT_PX;
use crate::content::model::CategoryFilter;

/// How the expertise grid reacts to input, fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Hover reveals the preview panel, a click opens the detail.
    PointerHover,
    /// First tap reveals the preview panel, a second tap opens the detail.
    /// A mouse in a narrow window still hovers.
    TouchActivate,
}

impl InputMode {
    pub fn for_viewport(width: f64, can_hover: bool) -> InputMode {
        if width < TOUCH_BREAKPOINT_PX || !can_hover {
            InputMode::TouchActivate
        } else {
            InputMode::PointerHover
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CaseStudy {
    #[default]
    Closed,
    Open(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpertiseDetail {
    #[default]
    Closed,
    Open(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    #[default]
    None,
    Disclosed(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    OpenProject(String),
    CloseProject,
    PointerEnter(usize),
    PointerLeave(usize),
    Activate(usize),
    ViewMore(usize),
    DismissDisclosure,
    CloseExpertise,
    ToggleMenu,
    CloseMenu,
    Scrolled(bool),
    SetFilter(CategoryFilter),
}

/// Where a click on an expertise cell physically landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    Cell,
    ViewMore,
}

/// Maps one physical click to the single event it produces. A click on the
/// "view more" affector never also counts as an activation of its cell.
pub fn cell_click(origin: ClickOrigin, index: usize) -> Interaction {
    match origin {
        ClickOrigin::Cell => Interaction::Activate(index),
        ClickOrigin::ViewMore => Interaction::ViewMore(index),
    }
}

/// Maps a pointer crossing the boundary of cell `index` to a disclosure
/// event. Only mouse pointers hover; touch and pen contacts are left to the
/// tap rule, since browsers fire enter/leave around every touch.
pub fn pointer_hover(pointer_type: &str, index: usize, entering: bool) -> Option<Interaction> {
    if pointer_type != "mouse" {
        return None;
    }
    Some(if entering {
        Interaction::PointerEnter(index)
    } else {
        Interaction::PointerLeave(index)
    })
}

/// Shared through a context provider so the nav and the page drive one state.
pub type InteractionHandle = UseReducerHandle<InteractionState>;

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    pub mode: InputMode,
    pub case_study: CaseStudy,
    pub expertise_detail: ExpertiseDetail,
    pub disclosure: Disclosure,
    pub filter: CategoryFilter,
    pub menu_open: bool,
    pub scrolled: bool,
}

impl InteractionState {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            case_study: CaseStudy::Closed,
            expertise_detail: ExpertiseDetail::Closed,
            disclosure: Disclosure::None,
            filter: CategoryFilter::All,
            menu_open: false,
            scrolled: false,
        }
    }

    /// The nav bar is drawn solid once scrolled or while the mobile menu covers the page.
    pub fn nav_solid(&self) -> bool {
        self.scrolled || self.menu_open
    }

    pub fn any_overlay_open(&self) -> bool {
        self.case_study != CaseStudy::Closed || self.expertise_detail != ExpertiseDetail::Closed
    }

    pub fn is_disclosed(&self, index: usize) -> bool {
        self.disclosure == Disclosure::Disclosed(index)
    }

    pub fn apply(&mut self, event: Interaction) -> bool {
        let before = self.clone();
        match event {
            Interaction::OpenProject(id) => {
                self.case_study = CaseStudy::Open(id);
                self.menu_open = false;
            }
            Interaction::CloseProject => self.case_study = CaseStudy::Closed,
            Interaction::PointerEnter(index) => self.disclosure = Disclosure::Disclosed(index),
            Interaction::PointerLeave(index) => {
                if self.is_disclosed(index) {
                    self.disclosure = Disclosure::None;
                }
            }
            Interaction::Activate(index) => match self.mode {
                InputMode::PointerHover => self.expertise_detail = ExpertiseDetail::Open(index),
                InputMode::TouchActivate => {
                    if self.is_disclosed(index) {
                        self.expertise_detail = ExpertiseDetail::Open(index);
                    } else {
                        self.disclosure = Disclosure::Disclosed(index);
                    }
                }
            },
            Interaction::ViewMore(index) => self.expertise_detail = ExpertiseDetail::Open(index),
            Interaction::DismissDisclosure => {
                if self.mode == InputMode::TouchActivate {
                    self.disclosure = Disclosure::None;
                }
            }
            Interaction::CloseExpertise => self.expertise_detail = ExpertiseDetail::Closed,
            Interaction::ToggleMenu => self.menu_open = !self.menu_open,
            Interaction::CloseMenu => self.menu_open = false,
            Interaction::Scrolled(scrolled) => self.scrolled = scrolled,
            Interaction::SetFilter(filter) => self.filter = filter,
        }
        *self != before
    }
}

impl Reducible for InteractionState {
    type Action = Interaction;

    fn reduce(self: Rc<Self>, action: Interaction) -> Rc<Self> {
        let mut next = (*self).clone();
        let label = format!("{:?}", action);
        if next.apply(action) {
            debug!("{} -> {:?} / {:?} / {:?}", label, next.case_study, next.expertise_detail, next.disclosure);
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::Category;

    fn touch() -> InteractionState {
        InteractionState::new(InputMode::TouchActivate)
    }

    fn pointer() -> InteractionState {
        InteractionState::new(InputMode::PointerHover)
    }

    #[test]
    fn input_mode_follows_breakpoint_and_hover_capability() {
        assert_eq!(InputMode::for_viewport(1023.0, true), InputMode::TouchActivate);
        assert_eq!(InputMode::for_viewport(1024.0, true), InputMode::PointerHover);
        assert_eq!(InputMode::for_viewport(1920.0, false), InputMode::TouchActivate);
    }

    #[test]
    fn opening_and_closing_a_case_study() {
        let mut state = pointer();
        assert!(state.apply(Interaction::OpenProject("villa".into())));
        assert_eq!(state.case_study, CaseStudy::Open("villa".into()));
        assert!(state.apply(Interaction::CloseProject));
        assert_eq!(state.case_study, CaseStudy::Closed);
    }

    #[test]
    fn second_project_replaces_the_first() {
        let mut state = pointer();
        state.apply(Interaction::OpenProject("villa".into()));
        state.apply(Interaction::OpenProject("office".into()));
        assert_eq!(state.case_study, CaseStudy::Open("office".into()));
    }

    #[test]
    fn opening_a_project_closes_the_menu() {
        let mut state = touch();
        state.apply(Interaction::ToggleMenu);
        assert!(state.menu_open);
        state.apply(Interaction::OpenProject("villa".into()));
        assert!(!state.menu_open);
    }

    #[test]
    fn touch_first_tap_reveals_second_tap_opens() {
        let mut state = touch();
        state.apply(Interaction::Activate(2));
        assert_eq!(state.disclosure, Disclosure::Disclosed(2));
        assert_eq!(state.expertise_detail, ExpertiseDetail::Closed);

        state.apply(Interaction::Activate(2));
        assert_eq!(state.expertise_detail, ExpertiseDetail::Open(2));
        assert_eq!(state.disclosure, Disclosure::Disclosed(2));
    }

    #[test]
    fn touch_tap_on_other_cell_retargets_disclosure() {
        let mut state = touch();
        state.apply(Interaction::Activate(0));
        state.apply(Interaction::Activate(3));
        assert_eq!(state.disclosure, Disclosure::Disclosed(3));
        assert_eq!(state.expertise_detail, ExpertiseDetail::Closed);
    }

    #[test]
    fn touch_contacts_produce_no_hover_events() {
        assert_eq!(pointer_hover("touch", 1, true), None);
        assert_eq!(pointer_hover("touch", 1, false), None);
        assert_eq!(pointer_hover("pen", 1, true), None);

        let mut state = touch();
        state.apply(Interaction::Activate(1));
        assert!(state.is_disclosed(1));
        assert_eq!(state.expertise_detail, ExpertiseDetail::Closed);
    }

    #[test]
    fn mouse_hovers_in_a_narrow_window() {
        let mode = InputMode::for_viewport(800.0, true);
        assert_eq!(mode, InputMode::TouchActivate);
        let mut state = InteractionState::new(mode);

        let enter = pointer_hover("mouse", 2, true);
        assert_eq!(enter, Some(Interaction::PointerEnter(2)));
        assert!(enter.map_or(false, |event| state.apply(event)));
        assert!(state.is_disclosed(2));

        // The click that follows the hover opens the detail.
        state.apply(cell_click(ClickOrigin::Cell, 2));
        assert_eq!(state.expertise_detail, ExpertiseDetail::Open(2));

        let leave = pointer_hover("mouse", 2, false);
        assert!(leave.map_or(false, |event| state.apply(event)));
        assert_eq!(state.disclosure, Disclosure::None);
    }

    #[test]
    fn touch_dismiss_clears_disclosure() {
        let mut state = touch();
        state.apply(Interaction::Activate(4));
        assert!(state.apply(Interaction::DismissDisclosure));
        assert_eq!(state.disclosure, Disclosure::None);
    }

    #[test]
    fn pointer_activation_opens_detail_directly() {
        let mut state = pointer();
        state.apply(Interaction::Activate(1));
        assert_eq!(state.expertise_detail, ExpertiseDetail::Open(1));
        assert_eq!(state.disclosure, Disclosure::None);

        let mut hovered = pointer();
        hovered.apply(Interaction::PointerEnter(3));
        hovered.apply(Interaction::Activate(1));
        assert_eq!(hovered.expertise_detail, ExpertiseDetail::Open(1));
        assert_eq!(hovered.disclosure, Disclosure::Disclosed(3));
    }

    #[test]
    fn hover_enter_and_leave() {
        let mut state = pointer();
        state.apply(Interaction::PointerEnter(2));
        assert!(state.is_disclosed(2));
        assert!(!state.apply(Interaction::PointerLeave(0)));
        assert!(state.apply(Interaction::PointerLeave(2)));
        assert_eq!(state.disclosure, Disclosure::None);
    }

    #[test]
    fn view_more_opens_detail_without_touching_disclosure() {
        for mut state in [touch(), pointer()] {
            state.disclosure = Disclosure::Disclosed(1);
            let event = cell_click(ClickOrigin::ViewMore, 1);
            assert_eq!(event, Interaction::ViewMore(1));
            state.apply(event);
            assert_eq!(state.expertise_detail, ExpertiseDetail::Open(1));
            assert_eq!(state.disclosure, Disclosure::Disclosed(1));
        }
    }

    #[test]
    fn cell_click_maps_to_activation() {
        assert_eq!(cell_click(ClickOrigin::Cell, 4), Interaction::Activate(4));
    }

    #[test]
    fn closing_expertise_keeps_disclosure() {
        let mut state = touch();
        state.apply(Interaction::Activate(0));
        state.apply(Interaction::Activate(0));
        state.apply(Interaction::CloseExpertise);
        assert_eq!(state.expertise_detail, ExpertiseDetail::Closed);
        assert!(state.is_disclosed(0));
    }

    #[test]
    fn both_overlays_may_be_open_independently() {
        let mut state = pointer();
        state.apply(Interaction::Activate(0));
        state.apply(Interaction::OpenProject("villa".into()));
        assert!(state.any_overlay_open());
        state.apply(Interaction::CloseProject);
        assert_eq!(state.expertise_detail, ExpertiseDetail::Open(0));
    }

    #[test]
    fn redundant_events_are_no_ops() {
        let mut state = pointer();
        assert!(!state.apply(Interaction::CloseProject));
        assert!(!state.apply(Interaction::CloseExpertise));
        assert!(!state.apply(Interaction::CloseMenu));
        state.apply(Interaction::PointerEnter(2));
        assert!(!state.apply(Interaction::PointerEnter(2)));
        assert!(!state.apply(Interaction::SetFilter(CategoryFilter::All)));
    }

    #[test]
    fn nav_is_solid_when_scrolled_or_menu_open() {
        let mut state = touch();
        assert!(!state.nav_solid());
        state.apply(Interaction::ToggleMenu);
        assert!(state.nav_solid());
        state.apply(Interaction::ToggleMenu);
        state.apply(Interaction::Scrolled(true));
        assert!(state.nav_solid());
    }

    #[test]
    fn filter_does_not_close_case_study() {
        let mut state = pointer();
        state.apply(Interaction::OpenProject("villa".into()));
        state.apply(Interaction::SetFilter(CategoryFilter::Only(Category::Commercial)));
        assert_eq!(state.case_study, CaseStudy::Open("villa".into()));
    }

    #[test]
    fn reducer_keeps_allocation_on_no_op() {
        let state = Rc::new(pointer());
        let same = state.clone().reduce(Interaction::CloseProject);
        assert!(Rc::ptr_eq(&state, &same));
        let changed = state.clone().reduce(Interaction::ToggleMenu);
        assert!(!Rc::ptr_eq(&state, &changed));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_event() -> impl Strategy<Value = Interaction> {
        let index = 0usize..5;
        prop_oneof![
            prop_oneof![Just("villa"), Just("office"), Just("loft")]
                .prop_map(|id| Interaction::OpenProject(id.to_string())),
            Just(Interaction::CloseProject),
            index.clone().prop_map(Interaction::PointerEnter),
            index.clone().prop_map(Interaction::PointerLeave),
            index.clone().prop_map(Interaction::Activate),
            index.prop_map(Interaction::ViewMore),
            Just(Interaction::DismissDisclosure),
            Just(Interaction::CloseExpertise),
            Just(Interaction::ToggleMenu),
        ]
    }

    fn arb_mode() -> impl Strategy<Value = InputMode> {
        prop_oneof![Just(InputMode::PointerHover), Just(InputMode::TouchActivate)]
    }

    proptest! {
        #[test]
        fn prop_mode_never_changes(mode in arb_mode(), events in prop::collection::vec(arb_event(), 0..40)) {
            let mut state = InteractionState::new(mode);
            for event in events {
                state.apply(event);
            }
            prop_assert_eq!(state.mode, mode);
        }

        #[test]
        fn prop_reapplying_last_close_is_no_op(mode in arb_mode(), events in prop::collection::vec(arb_event(), 0..40)) {
            let mut state = InteractionState::new(mode);
            for event in events {
                state.apply(event);
            }
            state.apply(Interaction::CloseProject);
            prop_assert!(!state.apply(Interaction::CloseProject));
            state.apply(Interaction::CloseExpertise);
            prop_assert!(!state.apply(Interaction::CloseExpertise));
        }

        #[test]
        fn prop_open_project_wins(mode in arb_mode(), events in prop::collection::vec(arb_event(), 0..40)) {
            let mut state = InteractionState::new(mode);
            for event in events {
                state.apply(event);
            }
            state.apply(Interaction::OpenProject("last".into()));
            prop_assert_eq!(state.case_study, CaseStudy::Open("last".into()));
        }

        #[test]
        fn prop_view_more_preserves_disclosure(mode in arb_mode(), events in prop::collection::vec(arb_event(), 0..40), index in 0usize..5) {
            let mut state = InteractionState::new(mode);
            for event in events {
                state.apply(event);
            }
            let disclosure = state.disclosure;
            state.apply(Interaction::ViewMore(index));
            prop_assert_eq!(state.disclosure, disclosure);
            prop_assert_eq!(state.expertise_detail, ExpertiseDetail::Open(index));
        }
    }
}
