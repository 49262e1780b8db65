use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use serde::{Serialize, Serializer};

pub const MAC_LEN: usize = 6;

/// An IPv4 or IPv6 address in a fixed 16 byte form, IPv4 stored
/// as `::ffff:a.b.c.d`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Address([u8; 16]);

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Mac(pub [u8; MAC_LEN]);

impl Address {
    pub const fn from_octets(octets: [u8; 16]) -> Self {
        Self(octets)
    }

    pub fn octets(&self) -> [u8; 16] {
        self.0
    }

    pub fn is_v4(&self) -> bool {
        self.v6().to_ipv4_mapped().is_some()
    }

    /// Last four bytes as a big-endian integer. Only meaningful
    /// when `is_v4` holds.
    pub fn v4_bits(&self) -> u32 {
        let [.., a, b, c, d] = self.0;
        u32::from_be_bytes([a, b, c, d])
    }

    pub fn is_unspecified(&self) -> bool {
        match self.ip() {
            IpAddr::V4(ip) => ip.is_unspecified(),
            IpAddr::V6(ip) => ip.is_unspecified(),
        }
    }

    pub fn ip(&self) -> IpAddr {
        let v6 = self.v6();
        match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None     => IpAddr::V6(v6),
        }
    }

    fn v6(&self) -> Ipv6Addr {
        Ipv6Addr::from(self.0)
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(ip) => ip.into(),
            IpAddr::V6(ip) => ip.into(),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Self(ip.to_ipv6_mapped().octets())
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Self {
        Self(ip.octets())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.ip())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl Mac {
    /// 48-bit integer form, first octet most significant.
    pub fn to_u64(&self) -> u64 {
        self.0.iter().fold(0, |n, &b| n << 8 | b as u64)
    }
}

impl fmt::Display for Mac {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}", a, b, c, d, e, g)
    }
}

impl Serialize for Mac {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}
