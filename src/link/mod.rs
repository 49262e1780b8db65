pub use interfaces::Interfaces;

mod interfaces;

/// Resolves an interface index to a display name.
pub trait Namer: Send + Sync {
    fn name(&self, index: u32) -> String;
}

impl<F: Fn(u32) -> String + Send + Sync> Namer for F {
    fn name(&self, index: u32) -> String {
        self(index)
    }
}

/// Placeholder used until a real namer is configured.
#[derive(Debug)]
pub struct Unset;

impl Namer for Unset {
    fn name(&self, index: u32) -> String {
        format!("[namer unset] {}", index)
    }
}
