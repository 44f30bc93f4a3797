pub mod handler;
pub mod response;

pub use handler::{handle_event, invoke, FunctionError};
