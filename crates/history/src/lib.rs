//! Build history persistence.
//!
//! History is dynamic user data, unlike catalogs which are static content.
//! The list rules live in [`HistoryList`]; repositories only decide where the
//! list is kept:
//! - [`FileHistoryRepository`] stores a single JSON file
//! - [`InMemoryHistoryRepository`] keeps it in memory for tests and one-off runs

mod error;
mod file;
mod list;
mod memory;
mod traits;

pub use error::{HistoryError, Result};
pub use file::FileHistoryRepository;
pub use list::{HISTORY_CAP, HistoryList};
pub use memory::InMemoryHistoryRepository;
pub use traits::HistoryRepository;
