use serde::Serialize;
use crate::model::{Address, Mac};
use super::abi::{Abi, Reader, Writer, MAX_SIZE};

/// `flow_id`: addressing and protocol identifiers of a flow.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize)]
pub struct FlowKey {
    pub src_ip:    Address,
    pub dst_ip:    Address,
    pub src_port:  u16,
    pub dst_port:  u16,
    pub protocol:  u8,
    pub icmp_type: u8,
    pub icmp_code: u8,
    #[serde(skip)]
    pub pad:       [u8; 1],
}

/// `flow_metrics`: counters and first-seen observation of a flow.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FlowMetrics {
    #[serde(skip)]
    pub lock:                 [u8; 4],
    pub eth_protocol:         u16,
    pub src_mac:              Mac,
    pub dst_mac:              Mac,
    #[serde(skip)]
    pub pad0:                 [u8; 2],
    pub packets:              u32,
    pub bytes:                u64,
    pub start_mono_time_ts:   u64,
    pub end_mono_time_ts:     u64,
    pub flags:                u16,
    pub errno:                u8,
    pub dscp:                 u8,
    pub sampling:             u32,
    pub direction_first_seen: u8,
    #[serde(skip)]
    pub pad1:                 [u8; 3],
    pub if_index_first_seen:  u32,
}

/// `flow_record`: the unit submitted on the ring buffer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RawFlowRecord {
    pub id:      FlowKey,
    pub metrics: FlowMetrics,
}

impl Abi for FlowKey {
    const SIZE: usize = 40;

    fn parse(r: &mut Reader<'_>) -> Self {
        Self {
            src_ip:    Address::from_octets(r.bytes()),
            dst_ip:    Address::from_octets(r.bytes()),
            src_port:  r.u16(),
            dst_port:  r.u16(),
            protocol:  r.u8(),
            icmp_type: r.u8(),
            icmp_code: r.u8(),
            pad:       r.bytes(),
        }
    }

    fn emit(&self, w: &mut Writer) {
        w.bytes(&self.src_ip.octets());
        w.bytes(&self.dst_ip.octets());
        w.u16(self.src_port);
        w.u16(self.dst_port);
        w.u8(self.protocol);
        w.u8(self.icmp_type);
        w.u8(self.icmp_code);
        w.bytes(&self.pad);
    }
}

impl Abi for FlowMetrics {
    const SIZE: usize = 64;

    fn parse(r: &mut Reader<'_>) -> Self {
        Self {
            lock:                 r.bytes(),
            eth_protocol:         r.u16(),
            src_mac:              Mac(r.bytes()),
            dst_mac:              Mac(r.bytes()),
            pad0:                 r.bytes(),
            packets:              r.u32(),
            bytes:                r.u64(),
            start_mono_time_ts:   r.u64(),
            end_mono_time_ts:     r.u64(),
            flags:                r.u16(),
            errno:                r.u8(),
            dscp:                 r.u8(),
            sampling:             r.u32(),
            direction_first_seen: r.u8(),
            pad1:                 r.bytes(),
            if_index_first_seen:  r.u32(),
        }
    }

    fn emit(&self, w: &mut Writer) {
        w.bytes(&self.lock);
        w.u16(self.eth_protocol);
        w.bytes(&self.src_mac.0);
        w.bytes(&self.dst_mac.0);
        w.bytes(&self.pad0);
        w.u32(self.packets);
        w.u64(self.bytes);
        w.u64(self.start_mono_time_ts);
        w.u64(self.end_mono_time_ts);
        w.u16(self.flags);
        w.u8(self.errno);
        w.u8(self.dscp);
        w.u32(self.sampling);
        w.u8(self.direction_first_seen);
        w.bytes(&self.pad1);
        w.u32(self.if_index_first_seen);
    }
}

impl Abi for RawFlowRecord {
    const SIZE: usize = FlowKey::SIZE + FlowMetrics::SIZE;

    fn parse(r: &mut Reader<'_>) -> Self {
        Self {
            id:      FlowKey::parse(r),
            metrics: FlowMetrics::parse(r),
        }
    }

    fn emit(&self, w: &mut Writer) {
        self.id.emit(w);
        self.metrics.emit(w);
    }
}

const _: () = assert!(RawFlowRecord::SIZE <= MAX_SIZE);
