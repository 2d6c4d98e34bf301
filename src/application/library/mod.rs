mod errors;
mod library_store;

pub use errors::{LibraryError, Result};
pub use library_store::LibraryStore;
