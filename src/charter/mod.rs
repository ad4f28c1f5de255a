//! Charter registration form contracts.
//!
//! One canonical multi-step form schema plus its step projections and
//! the partial-update (PATCH) variant used when editing an existing
//! charter.
//!
//! # Design Principles
//!
//! - Step schemas are field projections of the canonical schema: they
//!   run the same per-group check functions, so a step can never drift
//!   from the full form's rules
//! - Defaults (empty lists, `false` policy flags, the friendly tone)
//!   are applied during validation and are stable under re-validation
//! - The one cross-field rule (pickup fee when pickup is available) is
//!   checked only after the pickup object's own fields validate, and is
//!   reported at `pickup.fee`

mod steps;
mod types;
mod update;
mod validator;

pub use steps::{BasicsStep, DescriptionStep, ExperienceStep, MediaPricingStep, TripsStep};
pub use types::{
    Boat, CharterForm, CharterStyle, Operator, Pickup, Policies, Tone, Trip, UploadedMedia,
};
pub use update::{
    BoatUpdate, CaptainUpdate, CharterDetailsUpdate, CharterUpdate, PickupUpdate, PoliciesUpdate,
    TripUpdate,
};
