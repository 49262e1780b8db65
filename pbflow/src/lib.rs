mod error;
mod flow;
mod addr;

pub use error::Error;
pub use flow::*;
