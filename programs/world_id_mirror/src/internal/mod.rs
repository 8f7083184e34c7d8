pub mod rent_vault;
pub mod root_history;

pub use rent_vault::*;
pub use root_history::*;
