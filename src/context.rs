use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use crate::link::{Namer, Unset};

/// Agent identity and interface naming shared by every record build.
/// Built once at startup, never mutated, cheap to clone.
#[derive(Clone)]
pub struct Context {
    agent: IpAddr,
    namer: Arc<dyn Namer>,
}

impl Context {
    pub fn new<N: Namer + 'static>(agent: IpAddr, namer: N) -> Self {
        Self {
            agent: agent,
            namer: Arc::new(namer),
        }
    }

    pub fn agent(&self) -> IpAddr {
        self.agent
    }

    pub fn namer(&self) -> &dyn Namer {
        &*self.namer
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED.into(), Unset)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Context").field("agent", &self.agent).finish()
    }
}
