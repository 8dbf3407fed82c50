pub mod error;
pub mod outcome;
pub mod registry;
pub mod types;


pub use error::*;
pub use outcome::*;
pub use registry::*;
pub use types::*;
