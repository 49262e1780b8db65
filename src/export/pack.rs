use std::time::{Duration, SystemTime};
use log::{log_enabled, trace, Level::Trace};
use pbflow::{DataLink, DupMapEntry, Ip, Network, Transport, Xlat};
use crate::decode::{PktDrops, TranslatedFlow};
use crate::model::{Address, Direction, Interface, Record};

pub fn pack(record: &Record) -> pbflow::Record {
    let Record { id, metrics, interfaces, .. } = record;
    let flow  = &metrics.metrics;
    let extra = metrics.additional.as_ref();

    if log_enabled!(Trace) {
        trace!("pack {} -> {} ({} interfaces)", id.src_ip, id.dst_ip, interfaces.len());
    }

    let (name, dir) = match record.interface() {
        Some(first) => (first.name.clone(), first.direction),
        None        => (String::new(), Direction::Ingress),
    };

    let (dns_id, dns_flags, dns_errno) = match extra {
        Some(extra) => {
            let dns = &extra.dns_record;
            (dns.id as u32, dns.flags as u32, dns.errno as i32)
        },
        None => (0, 0, 0),
    };

    let drops = extra.and_then(|e| e.drops()).copied().unwrap_or_default();
    let xlat  = extra.and_then(|e| e.translated()).map(translated);

    pbflow::Record {
        eth_protocol:    flow.eth_protocol as u32,
        direction:       direction(dir),
        time_flow_start: Some(timestamp(record.time_flow_start)),
        time_flow_end:   Some(timestamp(record.time_flow_end)),
        data_link:       Some(DataLink {
            src_mac: flow.src_mac.to_u64(),
            dst_mac: flow.dst_mac.to_u64(),
        }),
        network:         Some(Network {
            src_addr: Some(ip(&id.src_ip)),
            dst_addr: Some(ip(&id.dst_ip)),
            dscp:     flow.dscp as u32,
        }),
        transport:       Some(Transport {
            src_port: id.src_port as u32,
            dst_port: id.dst_port as u32,
            protocol: id.protocol as u32,
        }),
        bytes:           flow.bytes,
        packets:         flow.packets as u64,
        interface:       name,
        agent_ip:        Some(ip(&Address::from(record.agent))),
        flags:           flow.flags as u32,
        icmp_type:       id.icmp_type as u32,
        icmp_code:       id.icmp_code as u32,
        sampling:        flow.sampling,
        time_flow_rtt:   duration(record.time_flow_rtt),
        dns_id:          dns_id,
        dns_flags:       dns_flags,
        dns_errno:       dns_errno,
        dns_latency:     duration(record.dns_latency),
        dup_list:        interfaces.iter().map(dup).collect(),
        xlat:            xlat,
        ..dropped(&drops)
    }
}

/// Wire form of an address: a 32-bit value for IPv4, raw bytes otherwise.
pub fn ip(addr: &Address) -> Ip {
    match addr.is_v4() {
        true  => Ip::v4(addr.v4_bits()),
        false => Ip::v6(addr.octets().to_vec()),
    }
}

pub fn address(ip: &Ip) -> Result<Address, pbflow::Error> {
    Ok(Address::from_octets(ip.octets()?))
}

fn direction(d: Direction) -> i32 {
    match d {
        Direction::Ingress    => pbflow::Direction::Ingress as i32,
        Direction::Egress     => pbflow::Direction::Egress  as i32,
        Direction::Unknown(n) => n as i32,
    }
}

fn dup(Interface { name, direction: d }: &Interface) -> DupMapEntry {
    DupMapEntry {
        interface: name.clone(),
        direction: direction(*d),
    }
}

fn dropped(drops: &PktDrops) -> pbflow::Record {
    pbflow::Record {
        pkt_drop_bytes:             drops.bytes,
        pkt_drop_packets:           drops.packets as u64,
        pkt_drop_latest_flags:      drops.latest_flags as u32,
        pkt_drop_latest_state:      drops.latest_state as u32,
        pkt_drop_latest_drop_cause: drops.latest_drop_cause,
        ..Default::default()
    }
}

fn translated(xlat: &TranslatedFlow) -> Xlat {
    Xlat {
        src_addr: Some(ip(&xlat.src_ip)),
        dst_addr: Some(ip(&xlat.dst_ip)),
        src_port: xlat.src_port as u32,
        dst_port: xlat.dst_port as u32,
        zone_id:  xlat.zone_id as u32,
        icmp_id:  xlat.icmp_id as u32,
    }
}

fn timestamp(t: SystemTime) -> prost_types::Timestamp {
    prost_types::Timestamp::from(t)
}

fn duration(d: Duration) -> Option<prost_types::Duration> {
    if d.is_zero() {
        return None;
    }
    Some(prost_types::Duration {
        seconds: d.as_secs() as i64,
        nanos:   d.subsec_nanos() as i32,
    })
}
