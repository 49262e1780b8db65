use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use serde_json::json;
use crate::clock::Reference;
use crate::context::Context;
use crate::decode::{AdditionalMetrics, FlowKey, FlowMetrics};
use super::meta::{all_zero, contains, Tag};
use super::*;

#[test]
fn v4_mapped_address() {
    let addr = Address::from(Ipv4Addr::new(192, 168, 1, 10));
    let octets = addr.octets();

    assert_eq!([0; 10], octets[..10]);
    assert_eq!([0xFF, 0xFF, 192, 168, 1, 10], octets[10..]);
    assert!(addr.is_v4());
    assert_eq!(0xC0A8010A, addr.v4_bits());
    assert_eq!("192.168.1.10", addr.to_string());
    assert_eq!(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 10)), addr.ip());
}

#[test]
fn v6_address() {
    let ip   = "2001:db8::1".parse::<Ipv6Addr>().unwrap();
    let addr = Address::from(IpAddr::V6(ip));

    assert!(!addr.is_v4());
    assert_eq!(ip.octets(), addr.octets());
    assert_eq!("2001:db8::1", addr.to_string());
    assert_eq!(IpAddr::V6(ip), addr.ip());
}

#[test]
fn unspecified_address() {
    assert!(Address::default().is_unspecified());
    assert!(Address::from(Ipv4Addr::UNSPECIFIED).is_unspecified());
    assert!(!Address::from(Ipv4Addr::LOCALHOST).is_unspecified());
    assert!(!Address::from(Ipv6Addr::LOCALHOST).is_unspecified());
}

#[test]
fn mac_text() {
    let mac = Mac([0x0a, 0x1b, 0x2c, 0xd3, 0xe4, 0xff]);
    assert_eq!("0A:1B:2C:D3:E4:FF", mac.to_string());
    assert_eq!(0x0a1b2cd3e4ff, mac.to_u64());
}

#[test]
fn serialize_as_text() {
    let addr = Address::from(Ipv4Addr::new(10, 0, 0, 1));
    let mac  = Mac([0, 1, 2, 3, 4, 5]);
    assert_eq!(json!("10.0.0.1"), serde_json::to_value(addr).unwrap());
    assert_eq!(json!("00:01:02:03:04:05"), serde_json::to_value(mac).unwrap());
}

#[test]
fn event_tags() {
    let a: Tag = [1, 0, 0, 0, 0, 0, 0, 0];
    let b: Tag = [0, 0, 0, 0, 0, 0, 0, 2];

    assert!(all_zero(&[0; 8]));
    assert!(!all_zero(&a));
    assert!(!all_zero(&b));

    assert!(!contains(&[], &a));
    assert!(contains(&[b, a], &a));
    assert!(!contains(&[b, [0; 8]], &a));
}

fn reference() -> Reference {
    Reference::new(UNIX_EPOCH + Duration::from_secs(1_000_000), 50_000_000_000)
}

fn metrics() -> FlowMetrics {
    FlowMetrics {
        start_mono_time_ts:   40_000_000_000,
        end_mono_time_ts:     49_500_000_000,
        if_index_first_seen:  3,
        direction_first_seen: 0,
        packets:              10,
        bytes:                4_200,
        ..Default::default()
    }
}

fn context() -> Context {
    let agent = IpAddr::V4(Ipv4Addr::new(10, 1, 2, 3));
    Context::new(agent, |index: u32| match index {
        3 => "eth0".to_owned(),
        5 => "veth1".to_owned(),
        9 => "br0".to_owned(),
        n => format!("if{}", n),
    })
}

#[test]
fn build_without_additional() {
    let ctx    = context();
    let record = Record::new(&ctx, FlowKey::default(), metrics().into(), &reference());

    let eth0 = Interface { name: "eth0".to_owned(), direction: Direction::Ingress };
    assert_eq!(vec![eth0], record.interfaces);
    assert_eq!(Duration::ZERO, record.dns_latency);
    assert_eq!(Duration::ZERO, record.time_flow_rtt);
    assert!(record.network_events.is_empty());
    assert_eq!(ctx.agent(), record.agent);
    assert_eq!(metrics(), record.metrics.metrics);
}

#[test]
fn build_times() {
    let now    = reference();
    let record = Record::new(&context(), FlowKey::default(), metrics().into(), &now);

    assert_eq!(now.wall - Duration::from_secs(10),    record.time_flow_start);
    assert_eq!(now.wall - Duration::from_millis(500), record.time_flow_end);
    assert!(record.time_flow_start <= record.time_flow_end);
    assert!(record.time_flow_end <= now.wall);
}

#[test]
fn build_with_additional() {
    let mut extra = AdditionalMetrics::default();
    extra.observed_intf[0].if_index  = 5;
    extra.observed_intf[0].direction = 1;
    extra.observed_intf[1].if_index  = 9;
    extra.observed_intf[1].direction = 0;
    extra.observed_intf[2].if_index  = 11;
    extra.nb_observed_intf           = 2;
    extra.flow_rtt                   = 1_500_000;
    extra.dns_record.latency         = 20_000;

    let content = FlowContent::with(metrics(), extra);
    let record  = Record::new(&context(), FlowKey::default(), content, &reference());

    let names = record.interfaces.iter().map(|i| i.name.as_str()).collect::<Vec<_>>();
    let dirs  = record.interfaces.iter().map(|i| i.direction).collect::<Vec<_>>();

    assert_eq!(vec!["eth0", "veth1", "br0"], names);
    assert_eq!(vec![Direction::Ingress, Direction::Egress, Direction::Ingress], dirs);
    assert_eq!(Duration::from_micros(1_500), record.time_flow_rtt);
    assert_eq!(Duration::from_micros(20),    record.dns_latency);
    assert_eq!(Some(extra), record.metrics.additional);
}

#[test]
fn build_keeps_unset_durations() {
    let extra   = AdditionalMetrics::default();
    let content = FlowContent::with(metrics(), extra);
    let record  = Record::new(&context(), FlowKey::default(), content, &reference());

    assert_eq!(1, record.interfaces.len());
    assert_eq!(Duration::ZERO, record.time_flow_rtt);
    assert_eq!(Duration::ZERO, record.dns_latency);
}

#[test]
fn build_keeps_duplicate_observations() {
    let mut extra = AdditionalMetrics::default();
    extra.observed_intf[0].if_index = 3;
    extra.observed_intf[1].if_index = 3;
    extra.nb_observed_intf          = 2;

    let content = FlowContent::with(metrics(), extra);
    let record  = Record::new(&context(), FlowKey::default(), content, &reference());

    assert_eq!(3, record.interfaces.len());
    assert!(record.interfaces.iter().all(|i| i.name == "eth0"));
}

#[test]
fn build_with_default_context() {
    let record = Record::new(&Context::default(), FlowKey::default(), metrics().into(), &reference());
    let first = record.interface().map(|i| i.name.as_str());
    assert_eq!(Some("[namer unset] 3"), first);
    assert_eq!(IpAddr::V4(Ipv4Addr::UNSPECIFIED), record.agent);
}

#[test]
fn unknown_direction_preserved() {
    let mut m = metrics();
    m.direction_first_seen = 7;
    let record = Record::new(&context(), FlowKey::default(), m.into(), &reference());
    let dir = record.interface().map(|i| i.direction);
    assert_eq!(Some(Direction::Unknown(7)), dir);
    assert_eq!(Some(7), dir.map(Direction::raw));
}

#[test]
fn first_interface_absent_after_clear() {
    let mut record = Record::new(&context(), FlowKey::default(), metrics().into(), &reference());
    record.interfaces.clear();
    assert_eq!(None, record.interface());
}

#[test]
fn record_json() {
    let mut key = FlowKey::default();
    key.src_ip   = Address::from(Ipv4Addr::new(10, 0, 0, 1));
    key.src_port = 8080;

    let record = Record::new(&context(), key, metrics().into(), &reference());
    let value  = serde_json::to_value(&record).unwrap();

    assert_eq!(json!("10.0.0.1"), value["id"]["src_ip"]);
    assert_eq!(json!(8080),       value["id"]["src_port"]);
    assert_eq!(json!("eth0"),     value["interfaces"][0]["name"]);
    assert_eq!(json!("Ingress"),  value["interfaces"][0]["direction"]);
    assert_eq!(json!(4_200),      value["metrics"]["metrics"]["bytes"]);
    assert!(value["id"].get("pad").is_none());
}

#[test]
fn reference_wall_is_upper_bound() {
    let now = reference();
    for ts in &[0, 1, 49_999_999_999, 50_000_000_000] {
        let t: SystemTime = now.absolute(*ts);
        assert!(t <= now.wall);
        assert_eq!(now.wall - Duration::from_nanos(now.mono - ts), t);
    }
}
