use std::time::Duration;
use log::warn;
use serde::Serialize;
use crate::model::Address;
use crate::model::meta::{self, Tag, MAX_EVENTS};
use super::abi::{Abi, Reader, Writer, MAX_SIZE};

pub const MAX_OBSERVED_INTERFACES: usize = 4;

/// `additional_metrics`: per-flow data gathered outside the main
/// flow map, such as extra observation points, DNS and RTT tracking,
/// kernel packet drops and address translation.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct AdditionalMetrics {
    pub start_mono_time_ts: u64,
    pub end_mono_time_ts:   u64,
    pub dns_record:         DnsRecord,
    pub pkt_drops:          PktDrops,
    pub flow_rtt:           u64,
    pub network_events_idx: u8,
    pub network_events:     [Tag; MAX_EVENTS],
    #[serde(skip)]
    pub pad0:               [u8; 1],
    pub translated_flow:    TranslatedFlow,
    #[serde(skip)]
    pub pad1:               [u8; 2],
    pub observed_intf:      [ObservedIntf; MAX_OBSERVED_INTERFACES],
    pub eth_protocol:       u16,
    pub nb_observed_intf:   u8,
    #[serde(skip)]
    pub pad2:               [u8; 1],
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DnsRecord {
    pub id:      u16,
    pub flags:   u16,
    #[serde(skip)]
    pub pad0:    [u8; 4],
    pub latency: u64,
    pub errno:   u8,
    #[serde(skip)]
    pub pad1:    [u8; 7],
}

/// Packets of the flow freed by the kernel before delivery.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PktDrops {
    pub packets:           u32,
    #[serde(skip)]
    pub pad0:              [u8; 4],
    pub bytes:             u64,
    pub latest_flags:      u16,
    pub latest_state:      u8,
    #[serde(skip)]
    pub pad1:              [u8; 1],
    pub latest_drop_cause: u32,
}

/// Addressing of the flow after NAT, all zero when untranslated.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct TranslatedFlow {
    pub src_ip:   Address,
    pub dst_ip:   Address,
    pub src_port: u16,
    pub dst_port: u16,
    pub zone_id:  u16,
    pub icmp_id:  u8,
    #[serde(skip)]
    pub pad:      [u8; 1],
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ObservedIntf {
    pub direction: u8,
    #[serde(skip)]
    pub pad:       [u8; 3],
    pub if_index:  u32,
}

impl AdditionalMetrics {
    /// Observations recorded beyond the first-seen one, in stored order.
    /// A count above capacity is capped.
    pub fn observed_interfaces(&self) -> &[ObservedIntf] {
        let n = self.nb_observed_intf as usize;
        &self.observed_intf[..n.min(MAX_OBSERVED_INTERFACES)]
    }

    pub fn drops(&self) -> Option<&PktDrops> {
        match self.pkt_drops.packets {
            0 => None,
            _ => Some(&self.pkt_drops),
        }
    }

    pub fn translated(&self) -> Option<&TranslatedFlow> {
        match self.translated_flow == TranslatedFlow::default() {
            true  => None,
            false => Some(&self.translated_flow),
        }
    }

    /// Non-empty network event tags.
    pub fn network_events(&self) -> impl Iterator<Item = &Tag> + '_ {
        self.network_events.iter().filter(|tag| !meta::all_zero(tag))
    }

    pub fn rtt(&self) -> Duration {
        Duration::from_nanos(self.flow_rtt)
    }

    pub fn dns_latency(&self) -> Duration {
        Duration::from_nanos(self.dns_record.latency)
    }
}

impl Abi for AdditionalMetrics {
    const SIZE: usize = 184;

    fn parse(r: &mut Reader<'_>) -> Self {
        let start_mono_time_ts = r.u64();
        let end_mono_time_ts   = r.u64();
        let dns_record         = DnsRecord::parse(r);
        let pkt_drops          = PktDrops::parse(r);
        let flow_rtt           = r.u64();
        let network_events_idx = r.u8();

        let mut network_events = [Tag::default(); MAX_EVENTS];
        for tag in network_events.iter_mut() {
            *tag = r.bytes();
        }

        let pad0            = r.bytes();
        let translated_flow = TranslatedFlow::parse(r);
        let pad1            = r.bytes();

        let mut observed_intf = [ObservedIntf::default(); MAX_OBSERVED_INTERFACES];
        for intf in observed_intf.iter_mut() {
            *intf = ObservedIntf::parse(r);
        }

        let eth_protocol     = r.u16();
        let nb_observed_intf = r.u8();

        if nb_observed_intf as usize > MAX_OBSERVED_INTERFACES {
            warn!("observed interface count {} exceeds {}", nb_observed_intf, MAX_OBSERVED_INTERFACES);
        }

        Self {
            start_mono_time_ts,
            end_mono_time_ts,
            dns_record,
            pkt_drops,
            flow_rtt,
            network_events_idx,
            network_events,
            pad0,
            translated_flow,
            pad1,
            observed_intf,
            eth_protocol,
            nb_observed_intf,
            pad2: r.bytes(),
        }
    }

    fn emit(&self, w: &mut Writer) {
        w.u64(self.start_mono_time_ts);
        w.u64(self.end_mono_time_ts);
        self.dns_record.emit(w);
        self.pkt_drops.emit(w);
        w.u64(self.flow_rtt);
        w.u8(self.network_events_idx);
        self.network_events.iter().for_each(|tag| w.bytes(tag));
        w.bytes(&self.pad0);
        self.translated_flow.emit(w);
        w.bytes(&self.pad1);
        self.observed_intf.iter().for_each(|intf| intf.emit(w));
        w.u16(self.eth_protocol);
        w.u8(self.nb_observed_intf);
        w.bytes(&self.pad2);
    }
}

impl Abi for DnsRecord {
    const SIZE: usize = 24;

    fn parse(r: &mut Reader<'_>) -> Self {
        Self {
            id:      r.u16(),
            flags:   r.u16(),
            pad0:    r.bytes(),
            latency: r.u64(),
            errno:   r.u8(),
            pad1:    r.bytes(),
        }
    }

    fn emit(&self, w: &mut Writer) {
        w.u16(self.id);
        w.u16(self.flags);
        w.bytes(&self.pad0);
        w.u64(self.latency);
        w.u8(self.errno);
        w.bytes(&self.pad1);
    }
}

impl Abi for PktDrops {
    const SIZE: usize = 24;

    fn parse(r: &mut Reader<'_>) -> Self {
        Self {
            packets:           r.u32(),
            pad0:              r.bytes(),
            bytes:             r.u64(),
            latest_flags:      r.u16(),
            latest_state:      r.u8(),
            pad1:              r.bytes(),
            latest_drop_cause: r.u32(),
        }
    }

    fn emit(&self, w: &mut Writer) {
        w.u32(self.packets);
        w.bytes(&self.pad0);
        w.u64(self.bytes);
        w.u16(self.latest_flags);
        w.u8(self.latest_state);
        w.bytes(&self.pad1);
        w.u32(self.latest_drop_cause);
    }
}

impl Abi for TranslatedFlow {
    const SIZE: usize = 40;

    fn parse(r: &mut Reader<'_>) -> Self {
        Self {
            src_ip:   Address::from_octets(r.bytes()),
            dst_ip:   Address::from_octets(r.bytes()),
            src_port: r.u16(),
            dst_port: r.u16(),
            zone_id:  r.u16(),
            icmp_id:  r.u8(),
            pad:      r.bytes(),
        }
    }

    fn emit(&self, w: &mut Writer) {
        w.bytes(&self.src_ip.octets());
        w.bytes(&self.dst_ip.octets());
        w.u16(self.src_port);
        w.u16(self.dst_port);
        w.u16(self.zone_id);
        w.u8(self.icmp_id);
        w.bytes(&self.pad);
    }
}

impl Abi for ObservedIntf {
    const SIZE: usize = 8;

    fn parse(r: &mut Reader<'_>) -> Self {
        Self {
            direction: r.u8(),
            pad:       r.bytes(),
            if_index:  r.u32(),
        }
    }

    fn emit(&self, w: &mut Writer) {
        w.u8(self.direction);
        w.bytes(&self.pad);
        w.u32(self.if_index);
    }
}

const _: () = assert!(AdditionalMetrics::SIZE <= MAX_SIZE);
