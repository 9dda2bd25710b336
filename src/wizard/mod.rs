//! The three-step form wizard
//!
//! - `step`: the step enum and the field set of each step
//! - `fields`: field identifiers and the per-section records
//! - `machine`: the state machine with its persistence and notification seams

pub mod fields;
pub mod machine;
pub mod step;

pub use fields::{
    BusinessField, BusinessInfo, Field, FieldKind, LocationField, LocationInfo, PersonalField,
    PersonalInfo,
};
pub use machine::{
    restore_step, Notifier, Transition, ValidationError, Wizard, STEP_KEY, VALIDATION_MESSAGE,
};
pub use step::Step;
