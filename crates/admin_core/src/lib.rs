//! In-memory member administration table.
//!
//! Records are loaded once from a [`RecordSource`] into an [`AppState`], then
//! searched, paged, selected, edited and deleted through [`Command`]s applied
//! with [`AppState::apply`]. Nothing is written back to the source.

pub mod controller;
pub mod edit;
pub mod error;
pub mod filter;
pub mod pager;
pub mod selection;
pub mod source;
pub mod state;
pub mod store;
pub mod view;

pub use controller::{Command, IgnoreReason, Transition};
pub use edit::{Draft, EditSession};
pub use error::LoadError;
pub use pager::{PageNav, DEFAULT_PAGE_SIZE};
pub use source::{fetch_load, FileRecordSource, HttpRecordSource, RecordSource};
pub use state::{AppState, LoadStatus};
pub use view::{EditView, RowView, ViewSnapshot};
