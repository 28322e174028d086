//! Platform-agnostic helpers shared by the sections.

pub mod format;
pub mod scroll;
pub mod timing;
