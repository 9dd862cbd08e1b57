//! Request and response types.

pub mod request;
pub mod response;

pub use request::*;
pub use response::{Address, Suggestion};
