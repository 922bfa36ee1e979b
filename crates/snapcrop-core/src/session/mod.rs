//! Multi-image edit session: entry storage, parameter updates, active-entry
//! orchestration, and batch export.
//!
//! The session is an explicitly constructed value with no global instance;
//! the embedding application owns exactly one and passes it wherever edits
//! happen. All mutation goes through `&mut self`, so a reader can never
//! observe a half-applied add, update, or removal.

mod edit;
mod export;
mod store;
mod update;

pub use edit::EditSession;
pub use export::{BatchExport, ExportError, ExportFailure, ExportedImage};
pub use store::{EntryId, ImageEntry, SessionError, SessionStore};
pub use update::EditUpdate;
