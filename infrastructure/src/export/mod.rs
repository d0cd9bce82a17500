//! Session export adapters.

pub mod archive;

pub use archive::{SessionArchive, SessionRecord, TeamMemberRecord};
