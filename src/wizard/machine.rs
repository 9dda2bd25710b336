//! The step wizard state machine
//!
//! Owns the current step and the three field records. The step index is
//! read from the injected store once at mount and written back on every
//! transition; validation failures go to the injected notifier and never
//! reach the caller as errors.

use thiserror::Error;
use tracing::{debug, info, warn};

use super::fields::{BusinessInfo, Field, LocationInfo, PersonalInfo};
use super::step::Step;
use crate::storage::KeyValueStore;

/// Store key holding the persisted step index
pub const STEP_KEY: &str = "currentStep";

/// Message shown when a step's required fields are incomplete
pub const VALIDATION_MESSAGE: &str = "Please fill all required fields.";

/// Receives user-facing error messages
pub trait Notifier {
    fn notify_error(&mut self, message: &str);
}

/// Required fields of the current step are empty
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Please fill all required fields.")]
pub struct ValidationError {
    /// Step whose gate failed
    pub step: Step,
    /// Required fields that were empty
    pub missing: Vec<Field>,
}

/// What a call to [`Wizard::advance`] or [`Wizard::retreat`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The step changed and the new index was persisted
    Moved { from: Step, to: Step },
    /// The validation gate failed; the user has been notified
    Invalid,
    /// Advance on the last step; the form is complete and the step stays put
    Complete,
    /// Retreat on the first step; nothing happened
    AtFirstStep,
}

/// Three-step form wizard
pub struct Wizard<S, N> {
    step: Step,
    personal: PersonalInfo,
    location: LocationInfo,
    business: BusinessInfo,
    store: S,
    notifier: N,
}

impl<S: KeyValueStore, N: Notifier> Wizard<S, N> {
    /// Create the wizard, restoring the step index from `store`.
    ///
    /// A missing, malformed or out-of-range index starts at step 1.
    pub fn mount(store: S, notifier: N) -> Self {
        let step = restore_step(&store);
        info!(step = step.number(), "wizard mounted");

        Self {
            step,
            personal: PersonalInfo::default(),
            location: LocationInfo::default(),
            business: BusinessInfo::default(),
            store,
            notifier,
        }
    }

    pub fn current_step(&self) -> Step {
        self.step
    }

    pub fn personal(&self) -> &PersonalInfo {
        &self.personal
    }

    pub fn location(&self) -> &LocationInfo {
        &self.location
    }

    pub fn business(&self) -> &BusinessInfo {
        &self.business
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Current value of `field`
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Personal(f) => self.personal.get(f),
            Field::Location(f) => self.location.get(f),
            Field::Business(f) => self.business.get(f),
        }
    }

    /// Write a field value. No validation happens here.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        debug!(field = field.key(), len = value.len(), "field updated");
        match field {
            Field::Personal(f) => self.personal.set(f, value),
            Field::Location(f) => self.location.set(f, value),
            Field::Business(f) => self.business.set(f, value),
        }
    }

    /// Write a field addressed by its key.
    ///
    /// Returns `false`, leaving every record untouched, when the key names
    /// no field of the form.
    pub fn set_field_by_key(&mut self, key: &str, value: impl Into<String>) -> bool {
        match Field::from_key(key) {
            Some(field) => {
                self.set_field(field, value);
                true
            }
            None => {
                warn!(key, "ignoring unknown field");
                false
            }
        }
    }

    /// Required fields of the current step that are still empty
    pub fn missing_fields(&self) -> Vec<Field> {
        match self.step {
            Step::Personal => self
                .personal
                .missing()
                .into_iter()
                .map(Field::Personal)
                .collect(),
            Step::Location => self
                .location
                .missing()
                .into_iter()
                .map(Field::Location)
                .collect(),
            Step::Business => Vec::new(),
        }
    }

    /// Check the current step's validation gate
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                step: self.step,
                missing,
            })
        }
    }

    /// Move to the next step if the current one is complete
    pub fn advance(&mut self) -> Transition {
        if let Err(err) = self.validate() {
            debug!(step = self.step.number(), missing = err.missing.len(), "advance blocked");
            self.notifier.notify_error(&err.to_string());
            return Transition::Invalid;
        }

        match self.step.next() {
            Some(to) => self.move_to(to),
            None => {
                info!("form complete");
                Transition::Complete
            }
        }
    }

    /// Move to the previous step; a no-op on the first step
    pub fn retreat(&mut self) -> Transition {
        match self.step.prev() {
            Some(to) => self.move_to(to),
            None => Transition::AtFirstStep,
        }
    }

    /// Whether the Back control is enabled
    pub fn can_go_back(&self) -> bool {
        !self.step.is_first()
    }

    /// Whether the Next control is shown
    pub fn shows_next(&self) -> bool {
        !self.step.is_last()
    }

    /// Forget the persisted step and start over with an empty form
    pub fn reset(&mut self) {
        if let Err(e) = self.store.remove(STEP_KEY) {
            warn!(error = %e, "failed to clear persisted step");
        }
        self.step = Step::Personal;
        self.personal = PersonalInfo::default();
        self.location = LocationInfo::default();
        self.business = BusinessInfo::default();
        info!("wizard reset");
    }

    fn move_to(&mut self, to: Step) -> Transition {
        let from = self.step;
        self.step = to;
        self.persist();
        info!(from = from.number(), to = to.number(), "step changed");
        Transition::Moved { from, to }
    }

    fn persist(&mut self) {
        let value = self.step.number().to_string();
        if let Err(e) = self.store.set(STEP_KEY, &value) {
            warn!(error = %e, step = %value, "failed to persist step");
        }
    }
}

/// Read the persisted step index from `store`
pub fn restore_step<S: KeyValueStore>(store: &S) -> Step {
    match store.get(STEP_KEY) {
        None => Step::Personal,
        Some(raw) => Step::parse(&raw).unwrap_or_else(|| {
            warn!(value = %raw, "ignoring invalid persisted step");
            Step::Personal
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StepformError, StepformResult};
    use crate::storage::MemoryStore;
    use crate::wizard::fields::{BusinessField, LocationField, PersonalField};

    #[derive(Debug, Default)]
    struct Recorder {
        messages: Vec<String>,
    }

    impl Notifier for Recorder {
        fn notify_error(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }

    /// Store whose writes always fail
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> StepformResult<()> {
            Err(StepformError::Storage("disk full".into()))
        }

        fn remove(&mut self, _key: &str) -> StepformResult<()> {
            Err(StepformError::Storage("disk full".into()))
        }
    }

    fn fresh() -> Wizard<MemoryStore, Recorder> {
        Wizard::mount(MemoryStore::new(), Recorder::default())
    }

    fn at_step(n: &str) -> Wizard<MemoryStore, Recorder> {
        Wizard::mount(MemoryStore::with_entry(STEP_KEY, n), Recorder::default())
    }

    fn fill_personal<S: KeyValueStore, N: Notifier>(wizard: &mut Wizard<S, N>) {
        wizard.set_field_by_key("firstName", "A");
        wizard.set_field_by_key("lastName", "B");
        wizard.set_field_by_key("email", "a@b.com");
        wizard.set_field_by_key("phone", "123");
    }

    fn fill_location<S: KeyValueStore, N: Notifier>(wizard: &mut Wizard<S, N>) {
        wizard.set_field_by_key("country", "Country 1");
        wizard.set_field_by_key("city", "City 2");
        wizard.set_field_by_key("zipCode", "1207");
        wizard.set_field_by_key("region", "Region 1");
    }

    fn persisted(wizard: &Wizard<MemoryStore, Recorder>) -> Option<String> {
        wizard.store().get(STEP_KEY)
    }

    #[test]
    fn test_fresh_wizard_starts_at_step_one() {
        let wizard = fresh();
        assert_eq!(wizard.current_step(), Step::Personal);
        assert!(!wizard.can_go_back());
        assert!(wizard.shows_next());
        assert_eq!(persisted(&wizard), None);
    }

    #[test]
    fn test_valid_personal_info_advances_and_persists() {
        let mut wizard = fresh();
        fill_personal(&mut wizard);

        let transition = wizard.advance();

        assert_eq!(
            transition,
            Transition::Moved {
                from: Step::Personal,
                to: Step::Location
            }
        );
        assert_eq!(wizard.current_step(), Step::Location);
        assert_eq!(persisted(&wizard).as_deref(), Some("2"));
        assert!(wizard.notifier().messages.is_empty());
    }

    #[test]
    fn test_any_empty_personal_field_blocks_advance() {
        for field in PersonalField::ALL {
            let mut wizard = fresh();
            fill_personal(&mut wizard);
            wizard.set_field(Field::Personal(field), "");

            assert_eq!(wizard.advance(), Transition::Invalid);
            assert_eq!(wizard.current_step(), Step::Personal);
            assert_eq!(wizard.notifier().messages, vec![VALIDATION_MESSAGE]);
            assert_eq!(persisted(&wizard), None);
        }
    }

    #[test]
    fn test_missing_zip_code_blocks_step_two() {
        let mut wizard = at_step("2");
        fill_location(&mut wizard);
        wizard.set_field_by_key("zipCode", "");

        assert_eq!(wizard.advance(), Transition::Invalid);
        assert_eq!(wizard.current_step(), Step::Location);
        assert_eq!(
            wizard.notifier().messages,
            vec!["Please fill all required fields."]
        );
        assert_eq!(
            wizard.missing_fields(),
            vec![Field::Location(LocationField::ZipCode)]
        );
    }

    #[test]
    fn test_step_two_gate_ignores_personal_info() {
        let mut wizard = at_step("2");
        fill_location(&mut wizard);

        assert!(matches!(wizard.advance(), Transition::Moved { .. }));
        assert_eq!(wizard.current_step(), Step::Business);
        assert_eq!(persisted(&wizard).as_deref(), Some("3"));
    }

    #[test]
    fn test_retreat_from_step_two() {
        let mut wizard = at_step("2");

        let transition = wizard.retreat();

        assert_eq!(
            transition,
            Transition::Moved {
                from: Step::Location,
                to: Step::Personal
            }
        );
        assert_eq!(wizard.current_step(), Step::Personal);
        assert_eq!(persisted(&wizard).as_deref(), Some("1"));
    }

    #[test]
    fn test_retreat_on_step_one_is_noop() {
        let mut wizard = fresh();
        fill_personal(&mut wizard);
        let before = wizard.personal().clone();

        assert_eq!(wizard.retreat(), Transition::AtFirstStep);
        assert_eq!(wizard.current_step(), Step::Personal);
        assert_eq!(wizard.personal(), &before);
        assert_eq!(persisted(&wizard), None);
        assert!(wizard.notifier().messages.is_empty());
    }

    #[test]
    fn test_advance_on_last_step_clamps() {
        let mut wizard = at_step("3");

        assert_eq!(wizard.advance(), Transition::Complete);
        assert_eq!(wizard.current_step(), Step::Business);
        assert_eq!(persisted(&wizard).as_deref(), Some("3"));
        assert!(wizard.notifier().messages.is_empty());
        assert!(!wizard.shows_next());
        assert!(wizard.can_go_back());
    }

    #[test]
    fn test_persisted_step_survives_remount() {
        let mut wizard = fresh();
        fill_personal(&mut wizard);
        wizard.advance();

        let Wizard { store, .. } = wizard;
        let remounted = Wizard::mount(store, Recorder::default());

        assert_eq!(remounted.current_step(), Step::Location);
        // Form contents do not survive, only the step
        assert_eq!(remounted.personal(), &PersonalInfo::default());
    }

    #[test]
    fn test_invalid_persisted_values_restore_to_step_one() {
        for raw in ["0", "4", "abc", "", "2.5"] {
            let wizard = at_step(raw);
            assert_eq!(wizard.current_step(), Step::Personal, "value {raw:?}");
        }
    }

    #[test]
    fn test_set_field_does_not_cross_sections() {
        let mut wizard = at_step("2");

        wizard.set_field_by_key("firstName", "Ada");
        assert_eq!(wizard.personal().first_name, "Ada");
        assert_eq!(wizard.location(), &LocationInfo::default());
        assert_eq!(wizard.business(), &BusinessInfo::default());

        wizard.set_field_by_key("region", "Region 2");
        assert_eq!(wizard.location().region, "Region 2");
        assert_eq!(wizard.personal().last_name, "");

        wizard.set_field_by_key("companyName", "CQD");
        assert_eq!(wizard.business().company_name, "CQD");

        assert_eq!(wizard.current_step(), Step::Location);
        assert_eq!(persisted(&wizard).as_deref(), Some("2"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let mut wizard = fresh();
        assert!(!wizard.set_field_by_key("nickname", "x"));
        assert_eq!(wizard.personal(), &PersonalInfo::default());
        assert_eq!(wizard.location(), &LocationInfo::default());
    }

    #[test]
    fn test_business_step_needs_nothing() {
        let wizard = at_step("3");
        assert!(wizard.missing_fields().is_empty());
        assert!(wizard.validate().is_ok());
    }

    #[test]
    fn test_validation_error_lists_missing_fields() {
        let mut wizard = fresh();
        wizard.set_field(Field::Personal(PersonalField::FirstName), "A");

        let err = wizard.validate().unwrap_err();
        assert_eq!(err.step, Step::Personal);
        assert_eq!(err.missing.len(), 3);
        assert_eq!(err.to_string(), VALIDATION_MESSAGE);
    }

    #[test]
    fn test_full_walk_through() {
        let mut wizard = fresh();
        fill_personal(&mut wizard);
        wizard.advance();
        fill_location(&mut wizard);
        wizard.advance();
        wizard.set_field(Field::Business(BusinessField::ShareSubscription), "true");

        assert_eq!(wizard.current_step(), Step::Business);
        assert!(wizard.business().share_subscription);
        assert_eq!(wizard.value(Field::Location(LocationField::City)), "City 2");

        wizard.retreat();
        wizard.retreat();
        assert_eq!(wizard.current_step(), Step::Personal);
        assert_eq!(wizard.retreat(), Transition::AtFirstStep);
        // Values entered earlier are kept while navigating
        assert_eq!(wizard.personal().email, "a@b.com");
    }

    #[test]
    fn test_reset_clears_step_and_form() {
        let mut wizard = at_step("3");
        wizard.set_field_by_key("firstName", "A");

        wizard.reset();

        assert_eq!(wizard.current_step(), Step::Personal);
        assert_eq!(wizard.personal(), &PersonalInfo::default());
        assert_eq!(persisted(&wizard), None);
    }

    #[test]
    fn test_persist_failure_still_moves() {
        let mut wizard = Wizard::mount(BrokenStore, Recorder::default());
        fill_personal(&mut wizard);

        assert!(matches!(wizard.advance(), Transition::Moved { .. }));
        assert_eq!(wizard.current_step(), Step::Location);
        assert!(wizard.notifier().messages.is_empty());
    }
}
