//! Page addressing: file naming, range resolution and page selection.

pub mod index;
pub mod naming;
pub mod select;

pub use index::{PageIndex, resolve_range};
pub use naming::PageFileName;
pub use select::PageSelector;
