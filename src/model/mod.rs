//! Configurator state and the reducer that drives every screen.

pub mod cart;
pub mod catalog;
pub mod lead;
pub mod pricing;
pub mod product;
pub mod qualification;
pub mod wizard;

use rust_decimal::Decimal;
use std::rc::Rc;
use yew::Reducible;

pub use cart::{Cart, CartItem, Incentive};
pub use catalog::{ColorChoice, DIMENSION_PRESETS, FRAME_TYPES, FrameId, FrameType, Opening};
pub use lead::{LeadForm, check_email};
pub use product::ProductDraft;
pub use qualification::{ProjectType, Qualification, Scope, Timeline};
pub use wizard::{Screen, StepStatus, Wizard};

use crate::error::ConfiguratorError;

#[derive(Clone, Debug, PartialEq)]
pub struct ConfiguratorState {
    pub wizard: Wizard,
    /// Glazed or frame-only; defaults to glazed.
    pub has_glass: bool,
    pub frame: Option<FrameId>,
    pub draft: ProductDraft,
    pub cart: Cart,
    /// Cart index being edited in the configurator, if any.
    pub editing: Option<usize>,
    pub qualification: Qualification,
    pub captured_email: Option<String>,
    /// Why the last action was rejected; cleared by the next accepted one.
    pub last_error: Option<ConfiguratorError>,
    /// Bumped on every accepted action.
    pub version: u64,
}

impl Default for ConfiguratorState {
    fn default() -> Self {
        Self {
            wizard: Wizard::default(),
            has_glass: true,
            frame: None,
            draft: ProductDraft::default(),
            cart: Cart::default(),
            editing: None,
            qualification: Qualification::default(),
            captured_email: None,
            last_error: None,
            version: 0,
        }
    }
}

impl ConfiguratorState {
    /// Fresh session around a cart carried over from an earlier visit.
    pub fn with_cart(cart: Cart) -> Self {
        Self {
            cart,
            ..Self::default()
        }
    }

    pub fn frame_type(&self) -> Option<&'static FrameType> {
        self.frame.map(FrameId::frame)
    }

    /// Live price of the draft; `None` hides the price and disables "add".
    pub fn draft_price(&self) -> Option<Decimal> {
        let frame = self.frame_type()?;
        let dims = self.draft.dimensions().ok()?;
        pricing::line_price(frame, self.has_glass, dims.width, dims.height, self.draft.quantity)
    }

    pub fn can_add_to_cart(&self) -> bool {
        self.draft_price().is_some()
    }

    fn apply(&mut self, action: ConfigAction) -> Result<(), ConfiguratorError> {
        use ConfigAction::*;
        match action {
            SelectFrame(id) => {
                self.frame = Some(id);
                if self.editing.is_none() {
                    self.draft = ProductDraft::default();
                }
                self.wizard.go_to(Screen::Configurator);
            }
            SetGlass(g) => self.has_glass = g,
            SetWidth(text) => self.draft.width_text = text,
            SetHeight(text) => self.draft.height_text = text,
            ApplyPreset { width, height } => self.draft.set_preset(width, height),
            SetColor(c) => self.draft.color = c,
            SetCustomColor(text) => self.draft.custom_color = text,
            SetOpening(o) => self.draft.opening = o,
            AdjustQuantity(delta) => self.draft.adjust_quantity(delta),
            AddToCart => {
                let frame = self.frame.ok_or(ConfiguratorError::NoFrameSelected)?;
                let dims = self.draft.dimensions()?;
                let item = CartItem::from_draft(frame, self.has_glass, &self.draft, dims)?;
                match self.editing {
                    Some(i) => self.cart.replace(i, item)?,
                    None => self.cart.push(item),
                }
                self.editing = None;
                self.wizard.go_to(Screen::Cart);
            }
            EditItem(index) => {
                let item = self.cart.get(index)?.clone();
                self.editing = Some(index);
                self.has_glass = item.has_glass;
                self.frame = Some(item.frame_id);
                self.draft = item.to_draft();
                self.wizard.go_to(Screen::Configurator);
            }
            RemoveItem(index) => {
                self.cart.remove(index)?;
                self.editing = match self.editing {
                    Some(e) if e == index => None,
                    Some(e) if e > index => Some(e - 1),
                    other => other,
                };
            }
            AddAnother => {
                self.editing = None;
                self.has_glass = true;
                self.frame = None;
                self.draft = ProductDraft::default();
                self.wizard.go_to(Screen::Frame);
            }
            Back => {
                self.wizard.back();
            }
            GoTo(screen) => self.wizard.go_to(screen),
            // answers advance only from their own screen
            SelectProjectType(p) => {
                self.qualification.project_type = Some(p);
                if self.wizard.current == Screen::ProjectType {
                    self.wizard.go_to(Screen::Timeline);
                }
            }
            SelectTimeline(t) => {
                self.qualification.timeline = Some(t);
                if self.wizard.current == Screen::Timeline {
                    self.wizard.go_to(Screen::Scope);
                }
            }
            SelectScope(s) => self.qualification.scope = Some(s),
            SubmitEmail(raw) => {
                let email = check_email(&raw)?.to_string();
                log::info!(target: "lead", "email captured: {email}");
                self.captured_email = Some(email);
                self.wizard.go_to(Screen::Success);
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub enum ConfigAction {
    SelectFrame(FrameId),
    SetGlass(bool),
    SetWidth(String),
    SetHeight(String),
    ApplyPreset { width: u32, height: u32 },
    SetColor(ColorChoice),
    SetCustomColor(String),
    SetOpening(Opening),
    AdjustQuantity(i32),
    AddToCart,
    EditItem(usize),
    RemoveItem(usize),
    AddAnother,
    Back,
    GoTo(Screen),
    SelectProjectType(ProjectType),
    SelectTimeline(Timeline),
    SelectScope(Scope),
    SubmitEmail(String),
}

impl Reducible for ConfiguratorState {
    type Action = ConfigAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        let label = format!("{action:?}");
        match new.apply(action) {
            Ok(()) => {
                new.last_error = None;
                new.version = new.version.wrapping_add(1);
                log::debug!(target: "state", "{label} -> {:?}", new.wizard.current);
                Rc::new(new)
            }
            Err(e) => {
                log::warn!(target: "state", "{label} rejected: {e}");
                let mut kept = (*self).clone();
                kept.last_error = Some(e);
                Rc::new(kept)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn run(actions: Vec<ConfigAction>) -> Rc<ConfiguratorState> {
        actions
            .into_iter()
            .fold(Rc::new(ConfiguratorState::default()), |s, a| s.reduce(a))
    }

    fn configure(frame: FrameId, w: &str, h: &str) -> Vec<ConfigAction> {
        vec![
            ConfigAction::SelectFrame(frame),
            ConfigAction::SetWidth(w.into()),
            ConfigAction::SetHeight(h.into()),
        ]
    }

    #[test]
    fn price_appears_only_with_valid_dimensions() {
        let s = run(vec![
            ConfigAction::SelectFrame(FrameId::Classic),
            ConfigAction::SetWidth("100".into()),
        ]);
        assert_eq!(s.draft_price(), None);
        assert!(!s.can_add_to_cart());
        let s = s.reduce(ConfigAction::SetHeight("100".into()));
        assert_eq!(s.draft_price(), Some(Decimal::from(485)));
        let s = s.reduce(ConfigAction::SetGlass(false));
        assert_eq!(s.draft_price(), Some(Decimal::from(285)));
    }

    #[test]
    fn add_to_cart_moves_to_cart_screen() {
        let mut actions = configure(FrameId::TiltTurn, "120", "180");
        actions.push(ConfigAction::AdjustQuantity(1));
        actions.push(ConfigAction::AddToCart);
        let s = run(actions);
        assert_eq!(s.wizard.current, Screen::Cart);
        assert_eq!(s.cart.len(), 1);
        assert_eq!(s.cart.total(), Decimal::from_str("2224.8").unwrap());
        assert_eq!(
            s.wizard.history,
            vec![Screen::Frame, Screen::Configurator]
        );
    }

    #[test]
    fn rejected_action_keeps_state_and_records_error() {
        let s = run(configure(FrameId::Classic, "0", "100"));
        let before = s.version;
        let after = s.clone().reduce(ConfigAction::AddToCart);
        assert!(after.cart.is_empty());
        assert_eq!(after.version, before);
        assert!(matches!(
            after.last_error,
            Some(ConfiguratorError::InvalidDimension { field: "width", .. })
        ));
        let fresh = run(vec![ConfigAction::AddToCart]);
        assert_eq!(fresh.last_error, Some(ConfiguratorError::NoFrameSelected));
    }

    #[test]
    fn edit_replaces_item_in_place() {
        let mut actions = configure(FrameId::Classic, "100", "100");
        actions.push(ConfigAction::AddToCart);
        actions.push(ConfigAction::AddAnother);
        actions.extend(configure(FrameId::Fixed, "60", "60"));
        actions.push(ConfigAction::AddToCart);
        let s = run(actions);
        assert_eq!(s.cart.len(), 2);

        let s = s.reduce(ConfigAction::EditItem(0));
        assert_eq!(s.editing, Some(0));
        assert_eq!(s.frame, Some(FrameId::Classic));
        assert_eq!(s.draft.width_text, "100");
        assert_eq!(s.wizard.current, Screen::Configurator);

        let s = s
            .reduce(ConfigAction::SetWidth("200".into()))
            .reduce(ConfigAction::AddToCart);
        assert_eq!(s.editing, None);
        assert_eq!(s.cart.len(), 2);
        assert_eq!(s.cart.items()[0].price, Decimal::from(970));
        assert_eq!(s.cart.items()[1].frame_id, FrameId::Fixed);
    }

    #[test]
    fn editing_keeps_draft_when_frame_reselected() {
        let mut actions = configure(FrameId::Classic, "100", "100");
        actions.push(ConfigAction::AddToCart);
        actions.push(ConfigAction::EditItem(0));
        actions.push(ConfigAction::Back);
        let s = run(actions);
        assert_eq!(s.wizard.current, Screen::Cart);
        let s = s.reduce(ConfigAction::SelectFrame(FrameId::Slide));
        assert_eq!(s.draft.width_text, "100");
    }

    #[test]
    fn selecting_frame_resets_draft_but_keeps_glass() {
        let s = run(vec![
            ConfigAction::SelectFrame(FrameId::Classic),
            ConfigAction::SetGlass(false),
            ConfigAction::SetWidth("50".into()),
            ConfigAction::Back,
            ConfigAction::SelectFrame(FrameId::Slide),
        ]);
        assert_eq!(s.draft, ProductDraft::default());
        assert!(!s.has_glass);
    }

    #[test]
    fn add_another_resets_configuration() {
        let mut actions = configure(FrameId::Slide, "200", "220");
        actions.push(ConfigAction::SetGlass(false));
        actions.push(ConfigAction::SetOpening(Opening::Left));
        actions.push(ConfigAction::AddToCart);
        actions.push(ConfigAction::AddAnother);
        let s = run(actions);
        assert_eq!(s.wizard.current, Screen::Frame);
        assert!(s.has_glass);
        assert_eq!(s.frame, None);
        assert_eq!(s.draft, ProductDraft::default());
        assert_eq!(s.cart.items()[0].opening, Some(Opening::Left));
    }

    #[test]
    fn removing_shifts_editing_index() {
        let mut actions = Vec::new();
        for _ in 0..3 {
            actions.extend(configure(FrameId::Classic, "100", "100"));
            actions.push(ConfigAction::AddToCart);
            actions.push(ConfigAction::AddAnother);
        }
        actions.push(ConfigAction::EditItem(2));
        actions.push(ConfigAction::RemoveItem(0));
        let s = run(actions);
        assert_eq!(s.cart.len(), 2);
        assert_eq!(s.editing, Some(1));
        let s = s.reduce(ConfigAction::RemoveItem(1));
        assert_eq!(s.editing, None);
        let s = s.reduce(ConfigAction::RemoveItem(9));
        assert_eq!(
            s.last_error,
            Some(ConfiguratorError::ItemOutOfRange { index: 9, len: 1 })
        );
    }

    #[test]
    fn qualification_steps_advance() {
        let s = run(vec![
            ConfigAction::GoTo(Screen::ProjectType),
            ConfigAction::SelectProjectType(ProjectType::Renovation),
            ConfigAction::SelectTimeline(Timeline::OneToTwoMonths),
            ConfigAction::SelectScope(Scope::Medium),
        ]);
        assert_eq!(s.wizard.current, Screen::Scope);
        assert_eq!(
            s.qualification,
            Qualification {
                project_type: Some(ProjectType::Renovation),
                timeline: Some(Timeline::OneToTwoMonths),
                scope: Some(Scope::Medium),
            }
        );
    }

    #[test]
    fn repeated_answer_advances_once() {
        let s = run(vec![
            ConfigAction::GoTo(Screen::ProjectType),
            ConfigAction::SelectProjectType(ProjectType::Renovation),
            ConfigAction::SelectProjectType(ProjectType::NewBuild),
        ]);
        assert_eq!(s.wizard.current, Screen::Timeline);
        assert_eq!(s.wizard.history, vec![Screen::Frame, Screen::ProjectType]);
        assert_eq!(s.qualification.project_type, Some(ProjectType::NewBuild));

        let s = s
            .reduce(ConfigAction::SelectTimeline(Timeline::Urgent))
            .reduce(ConfigAction::SelectTimeline(Timeline::Urgent));
        assert_eq!(s.wizard.current, Screen::Scope);
        let s = s.reduce(ConfigAction::Back);
        assert_eq!(s.wizard.current, Screen::Timeline);
        let s = s.reduce(ConfigAction::Back);
        assert_eq!(s.wizard.current, Screen::ProjectType);
    }

    #[test]
    fn oversized_draft_has_no_price_and_cannot_be_added() {
        let s = run(configure(FrameId::Classic, "1000000000000000", "1000000000000000"));
        assert_eq!(s.draft_price(), None);
        assert!(!s.can_add_to_cart());
        let s = s.reduce(ConfigAction::AddToCart);
        assert!(s.cart.is_empty());
        assert_eq!(s.wizard.current, Screen::Configurator);
        assert!(matches!(
            s.last_error,
            Some(ConfiguratorError::InvalidDimension { field: "area", .. })
        ));
    }

    #[test]
    fn email_capture_validates_then_succeeds() {
        let s = run(vec![
            ConfigAction::GoTo(Screen::Email),
            ConfigAction::SubmitEmail("nope".into()),
        ]);
        assert_eq!(s.wizard.current, Screen::Email);
        assert!(s.last_error.is_some());
        let s = s.reduce(ConfigAction::SubmitEmail(" ion@casa.ro".into()));
        assert_eq!(s.wizard.current, Screen::Success);
        assert_eq!(s.captured_email.as_deref(), Some("ion@casa.ro"));
    }
}
