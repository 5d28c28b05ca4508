pub mod error;
pub mod store;
pub mod todo;

pub use error::*;
pub use store::*;
pub use todo::*;
