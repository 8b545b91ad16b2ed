mod env;
mod jobs;
mod log_error;
mod test_logger;
pub mod types;

pub use env::*;
pub use jobs::*;
pub use log_error::*;
pub use test_logger::*;
