use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use log::{debug, trace};
use parking_lot::{Mutex, RwLock};
use pnet::datalink;
use super::Namer;

const RELOAD: Duration = Duration::from_secs(10);

/// Interface names of the host, reloaded when an unknown index is
/// looked up, at most once per reload interval.
pub struct Interfaces {
    names:    RwLock<HashMap<u32, String>>,
    loaded:   Mutex<Instant>,
    interval: Duration,
    reloads:  AtomicUsize,
}

impl Interfaces {
    pub fn load() -> Self {
        let links = Self::new(HashMap::new());
        links.reload();
        links
    }

    pub fn new(names: HashMap<u32, String>) -> Self {
        Self::with_reload(names, RELOAD)
    }

    pub fn with_reload(names: HashMap<u32, String>, interval: Duration) -> Self {
        Self {
            names:    RwLock::new(names),
            loaded:   Mutex::new(Instant::now()),
            interval: interval,
            reloads:  AtomicUsize::new(0),
        }
    }

    pub fn reload(&self) {
        *self.loaded.lock() = Instant::now();
        self.refresh();
    }

    fn refresh(&self) {
        let names = datalink::interfaces().into_iter().map(|link| {
            (link.index, link.name)
        }).collect::<HashMap<_, _>>();

        debug!("loaded {} interfaces", names.len());

        *self.names.write() = names;
        self.reloads.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of times the table was read from the host.
    pub fn reloads(&self) -> usize {
        self.reloads.load(Ordering::Relaxed)
    }

    fn get(&self, index: u32) -> Option<String> {
        self.names.read().get(&index).cloned()
    }

    /// Claim the next reload if the table is stale. Only one caller
    /// wins per interval.
    fn claim(&self) -> bool {
        let mut loaded = self.loaded.lock();
        if loaded.elapsed() < self.interval {
            return false;
        }
        *loaded = Instant::now();
        true
    }
}

impl Namer for Interfaces {
    fn name(&self, index: u32) -> String {
        if let Some(name) = self.get(index) {
            return name;
        }

        if self.claim() {
            self.refresh();
        }

        self.get(index).unwrap_or_else(|| {
            trace!("no interface at index {}", index);
            index.to_string()
        })
    }
}
