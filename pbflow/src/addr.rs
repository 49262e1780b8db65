use std::convert::TryFrom;
use prost::alloc::vec::Vec;
use crate::{Error, Ip};
use crate::ip::IpFamily;

const V4_PREFIX: [u8; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xFF, 0xFF];

impl Ip {
    pub fn v4(bits: u32) -> Self {
        Self { ip_family: Some(IpFamily::Ipv4(bits)) }
    }

    pub fn v6(octets: Vec<u8>) -> Self {
        Self { ip_family: Some(IpFamily::Ipv6(octets)) }
    }

    /// Fixed 16 byte form, IPv4 values expanded to `::ffff:a.b.c.d`.
    pub fn octets(&self) -> Result<[u8; 16], Error> {
        let mut octets = [0u8; 16];
        match &self.ip_family {
            Some(IpFamily::Ipv4(bits)) => {
                octets[..12].copy_from_slice(&V4_PREFIX);
                octets[12..].copy_from_slice(&bits.to_be_bytes());
            },
            Some(IpFamily::Ipv6(v6)) => {
                let v6 = <[u8; 16]>::try_from(v6.as_slice()).map_err(|_| {
                    Error::Length(v6.len())
                })?;
                octets = v6;
            },
            None => return Err(Error::Empty),
        }
        Ok(octets)
    }
}
