pub use export::{Collector, Export};
pub use pack::{address, ip, pack};
pub use stream::Stream;

mod export;
mod pack;
mod stream;
