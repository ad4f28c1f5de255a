//! charter-contracts - shared validation contracts for charter onboarding
//! and media upload flows
//!
//! Every schema in this crate exposes a single operation: validate a
//! structurally-unknown JSON value and return either the typed, defaulted
//! output or the full list of per-field violations. Nothing here performs
//! I/O, holds state, or knows about HTTP framing; callers turn a failed
//! validation into whatever client-facing response they need.

pub mod catalog;
pub mod charter;
pub mod draft;
pub mod media;
pub mod upload;
pub mod validate;
pub mod video;
