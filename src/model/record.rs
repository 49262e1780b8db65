use std::net::IpAddr;
use std::time::{Duration, SystemTime};
use log::{log_enabled, trace, Level::Trace};
use serde::Serialize;
use serde_json::{Map, Value};
use crate::clock::Reference;
use crate::context::Context;
use crate::decode::{AdditionalMetrics, FlowKey, FlowMetrics};

/// Direction of an observation, as IPFIX field 61.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum Direction {
    Ingress,
    Egress,
    Unknown(u8),
}

/// Flow metrics with the optional additional metrics of the same flow.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FlowContent {
    pub metrics:    FlowMetrics,
    pub additional: Option<AdditionalMetrics>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Interface {
    pub name:      String,
    pub direction: Direction,
}

/// A flow in wall clock time, ready for enrichment and export.
#[derive(Clone, Debug, Serialize)]
pub struct Record {
    pub id:              FlowKey,
    pub metrics:         FlowContent,
    pub time_flow_start: SystemTime,
    pub time_flow_end:   SystemTime,
    pub dns_latency:     Duration,
    pub time_flow_rtt:   Duration,
    pub interfaces:      Vec<Interface>,
    pub agent:           IpAddr,
    pub network_events:  Vec<Map<String, Value>>,
}

impl Record {
    pub fn new(ctx: &Context, id: FlowKey, metrics: FlowContent, now: &Reference) -> Self {
        let first = metrics.metrics;
        let namer = ctx.namer();

        let mut record = Record {
            id:              id,
            metrics:         metrics,
            time_flow_start: now.absolute(first.start_mono_time_ts),
            time_flow_end:   now.absolute(first.end_mono_time_ts),
            dns_latency:     Duration::ZERO,
            time_flow_rtt:   Duration::ZERO,
            interfaces:      vec![Interface {
                name:      namer.name(first.if_index_first_seen),
                direction: first.direction_first_seen.into(),
            }],
            agent:           ctx.agent(),
            network_events:  Vec::new(),
        };

        if let Some(extra) = &metrics.additional {
            record.interfaces.extend(extra.observed_interfaces().iter().map(|intf| {
                Interface {
                    name:      namer.name(intf.if_index),
                    direction: intf.direction.into(),
                }
            }));

            if extra.flow_rtt != 0 {
                record.time_flow_rtt = extra.rtt();
            }

            if extra.dns_record.latency != 0 {
                record.dns_latency = extra.dns_latency();
            }
        }

        if log_enabled!(Trace) {
            trace!("{}:{} -> {}:{} on {:?}",
                   id.src_ip, id.src_port,
                   id.dst_ip, id.dst_port,
                   record.interfaces,
            );
        }

        record
    }

    /// First-seen observation, absent only when enrichment emptied
    /// the list.
    pub fn interface(&self) -> Option<&Interface> {
        self.interfaces.first()
    }
}

impl From<FlowMetrics> for FlowContent {
    fn from(metrics: FlowMetrics) -> Self {
        Self { metrics, additional: None }
    }
}

impl FlowContent {
    pub fn with(metrics: FlowMetrics, additional: AdditionalMetrics) -> Self {
        Self { metrics, additional: Some(additional) }
    }
}

impl From<u8> for Direction {
    fn from(raw: u8) -> Self {
        match raw {
            0 => Direction::Ingress,
            1 => Direction::Egress,
            n => Direction::Unknown(n),
        }
    }
}

impl Direction {
    pub fn raw(self) -> u8 {
        match self {
            Direction::Ingress    => 0,
            Direction::Egress     => 1,
            Direction::Unknown(n) => n,
        }
    }
}
