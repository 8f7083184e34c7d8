pub mod mirror;
pub mod root_entry;

pub use mirror::*;
pub use root_entry::*;
