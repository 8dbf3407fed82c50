pub mod list;
pub mod time;
pub mod types;

pub use list::*;
pub use time::*;
pub use types::*;
