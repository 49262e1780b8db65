use std::io::{ErrorKind, Read, Write};
use byteorder::{ByteOrder, LE};
use super::Error;

/// Largest fixed record any `Abi` type may declare.
pub const MAX_SIZE: usize = 256;

/// A fixed size little-endian record shared with the kernel side.
/// Fields are read and written one by one in declaration order;
/// padding is carried as opaque bytes.
pub trait Abi: Sized {
    const SIZE: usize;

    fn parse(r: &mut Reader<'_>) -> Self;

    fn emit(&self, w: &mut Writer);

    /// Decode from the front of a received sample.
    fn decode(buf: &[u8]) -> Result<Self, Error> {
        if buf.len() < Self::SIZE {
            return Err(Error::Short { read: buf.len(), size: Self::SIZE });
        }
        Ok(Self::parse(&mut Reader::new(&buf[..Self::SIZE])))
    }

    fn encode(&self) -> Vec<u8> {
        let mut w = Writer::with_capacity(Self::SIZE);
        self.emit(&mut w);
        w.buf
    }

    fn write_to<W: Write>(&self, w: &mut W) -> Result<(), Error> {
        Ok(w.write_all(&self.encode())?)
    }
}

/// Read exactly one `T` from `reader`.
pub fn read_from<T: Abi, R: Read>(reader: &mut R) -> Result<T, Error> {
    let mut buf  = [0u8; MAX_SIZE];
    let buf  = &mut buf[..T::SIZE];
    let mut read = 0;

    while read < buf.len() {
        match reader.read(&mut buf[read..]) {
            Ok(0)                                       => break,
            Ok(n)                                       => read += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e)                                      => return Err(e.into()),
        }
    }

    match read {
        0                => Err(Error::Eof),
        n if n < T::SIZE => Err(Error::Short { read: n, size: T::SIZE }),
        _                => Ok(T::parse(&mut Reader::new(buf))),
    }
}

pub struct Reader<'a> {
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    pub fn u8(&mut self) -> u8 {
        self.take(1)[0]
    }

    pub fn u16(&mut self) -> u16 {
        LE::read_u16(self.take(2))
    }

    pub fn u32(&mut self) -> u32 {
        LE::read_u32(self.take(4))
    }

    pub fn u64(&mut self) -> u64 {
        LE::read_u64(self.take(8))
    }

    pub fn bytes<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N));
        out
    }

    fn take(&mut self, n: usize) -> &'a [u8] {
        let (head, tail) = self.buf.split_at(n);
        self.buf = tail;
        head
    }
}

pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    fn with_capacity(n: usize) -> Self {
        Self { buf: Vec::with_capacity(n) }
    }

    pub fn u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub fn u16(&mut self, v: u16) {
        let mut b = [0u8; 2];
        LE::write_u16(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    pub fn u32(&mut self, v: u32) {
        let mut b = [0u8; 4];
        LE::write_u32(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    pub fn u64(&mut self, v: u64) {
        let mut b = [0u8; 8];
        LE::write_u64(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    pub fn bytes(&mut self, v: &[u8]) {
        self.buf.extend_from_slice(v);
    }
}
