//! Crew personas
//!
//! A persona is the identity a responder speaks as: a role, a goal, and an
//! expertise tag. [`roster`] carries the predefined catalog and team presets.

pub mod entities;
pub mod roster;

pub use entities::{Persona, PersonaId};
pub use roster::PersonaSpec;
