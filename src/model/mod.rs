pub use addr::{Address, Mac, MAC_LEN};
pub use record::{Direction, FlowContent, Interface, Record};

pub mod meta;

mod addr;
mod record;

#[cfg(test)]
mod test;
