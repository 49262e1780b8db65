use std::mem;
use anyhow::Result;
use log::{debug, warn};
use pbflow::Records;
use crate::model::Record;
use super::pack;

/// Delivers batches of records to a collector.
pub trait Collector {
    fn send(&mut self, records: Records) -> Result<()>;
}

pub struct Export<C: Collector> {
    collector: C,
    batch:     usize,
    pending:   Vec<pbflow::Record>,
}

impl<C: Collector> Export<C> {
    pub fn new(collector: C, batch: usize) -> Self {
        let batch = batch.max(1);
        Self {
            collector: collector,
            batch:     batch,
            pending:   Vec::with_capacity(batch),
        }
    }

    pub fn export(&mut self, record: &Record) {
        self.pending.push(pack(record));
        if self.pending.len() >= self.batch {
            self.flush();
        }
    }

    /// Send pending records. A failed batch is logged and dropped.
    pub fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let entries = mem::replace(&mut self.pending, Vec::with_capacity(self.batch));
        debug!("exporting {} flows", entries.len());

        if let Err(e) = self.collector.send(Records { entries }) {
            warn!("failed to deliver flows: {:?}", e);
        }
    }

    pub fn into_inner(mut self) -> C {
        self.flush();
        self.collector
    }
}
