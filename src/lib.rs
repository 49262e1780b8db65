pub mod args;
pub mod clock;
pub mod context;
pub mod decode;
pub mod export;
pub mod link;
pub mod model;

#[cfg(test)]
mod test;
