use prost::alloc::string::String;
use prost::alloc::vec::Vec;
use prost_types::{Duration, Timestamp};

/// The request of `Collector.Send`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Records {
    #[prost(message, repeated, tag = "1")]
    pub entries: Vec<Record>,
}

/// Empty acknowledgement returned by `Collector.Send`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CollectorReply {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Record {
    /// EtherType, e.g. 0x0800 for IPv4.
    #[prost(uint32, tag = "1")]
    pub eth_protocol: u32,
    #[prost(enumeration = "Direction", tag = "2")]
    pub direction: i32,
    #[prost(message, optional, tag = "3")]
    pub time_flow_start: Option<Timestamp>,
    #[prost(message, optional, tag = "4")]
    pub time_flow_end: Option<Timestamp>,
    #[prost(message, optional, tag = "5")]
    pub data_link: Option<DataLink>,
    #[prost(message, optional, tag = "6")]
    pub network: Option<Network>,
    #[prost(message, optional, tag = "7")]
    pub transport: Option<Transport>,
    #[prost(uint64, tag = "8")]
    pub bytes: u64,
    #[prost(uint64, tag = "9")]
    pub packets: u64,
    #[prost(string, tag = "10")]
    pub interface: String,
    #[prost(message, optional, tag = "11")]
    pub agent_ip: Option<Ip>,
    #[prost(uint32, tag = "12")]
    pub flags: u32,
    #[prost(uint32, tag = "13")]
    pub icmp_type: u32,
    #[prost(uint32, tag = "14")]
    pub icmp_code: u32,
    #[prost(uint32, tag = "15")]
    pub sampling: u32,
    #[prost(message, optional, tag = "16")]
    pub time_flow_rtt: Option<Duration>,
    #[prost(uint32, tag = "17")]
    pub dns_id: u32,
    #[prost(uint32, tag = "18")]
    pub dns_flags: u32,
    #[prost(int32, tag = "19")]
    pub dns_errno: i32,
    #[prost(message, optional, tag = "20")]
    pub dns_latency: Option<Duration>,
    /// Every interface the flow was observed on, first-seen included.
    #[prost(message, repeated, tag = "21")]
    pub dup_list: Vec<DupMapEntry>,
    #[prost(uint64, tag = "22")]
    pub pkt_drop_bytes: u64,
    #[prost(uint64, tag = "23")]
    pub pkt_drop_packets: u64,
    /// TCP flags of the last dropped packet.
    #[prost(uint32, tag = "24")]
    pub pkt_drop_latest_flags: u32,
    /// TCP state of the socket at the last drop.
    #[prost(uint32, tag = "25")]
    pub pkt_drop_latest_state: u32,
    /// Kernel `skb_drop_reason` of the last drop.
    #[prost(uint32, tag = "26")]
    pub pkt_drop_latest_drop_cause: u32,
    #[prost(message, optional, tag = "27")]
    pub xlat: Option<Xlat>,
}

/// Flow addressing after NAT.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Xlat {
    #[prost(message, optional, tag = "1")]
    pub src_addr: Option<Ip>,
    #[prost(message, optional, tag = "2")]
    pub dst_addr: Option<Ip>,
    #[prost(uint32, tag = "3")]
    pub src_port: u32,
    #[prost(uint32, tag = "4")]
    pub dst_port: u32,
    #[prost(uint32, tag = "5")]
    pub zone_id: u32,
    #[prost(uint32, tag = "6")]
    pub icmp_id: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DataLink {
    #[prost(uint64, tag = "1")]
    pub src_mac: u64,
    #[prost(uint64, tag = "2")]
    pub dst_mac: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Network {
    #[prost(message, optional, tag = "1")]
    pub src_addr: Option<Ip>,
    #[prost(message, optional, tag = "2")]
    pub dst_addr: Option<Ip>,
    #[prost(uint32, tag = "3")]
    pub dscp: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Ip {
    #[prost(oneof = "ip::IpFamily", tags = "1, 2")]
    pub ip_family: Option<ip::IpFamily>,
}

pub mod ip {
    use prost::alloc::vec::Vec;

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum IpFamily {
        /// IPv4 address in host order, e.g. 10.0.0.1 is 0x0a000001.
        #[prost(fixed32, tag = "1")]
        Ipv4(u32),
        /// Raw 16 byte IPv6 address.
        #[prost(bytes, tag = "2")]
        Ipv6(Vec<u8>),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transport {
    #[prost(uint32, tag = "1")]
    pub src_port: u32,
    #[prost(uint32, tag = "2")]
    pub dst_port: u32,
    /// IANA protocol number, e.g. 6 for TCP.
    #[prost(uint32, tag = "3")]
    pub protocol: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DupMapEntry {
    #[prost(string, tag = "1")]
    pub interface: String,
    #[prost(enumeration = "Direction", tag = "2")]
    pub direction: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Direction {
    Ingress = 0,
    Egress  = 1,
}
