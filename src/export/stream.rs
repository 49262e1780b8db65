use std::io::Write;
use anyhow::Result;
use prost::Message;
use pbflow::Records;
use super::Collector;

/// Collector writing each batch as a length-delimited protobuf frame.
pub struct Stream<W: Write> {
    writer: W,
}

impl<W: Write> Stream<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Collector for Stream<W> {
    fn send(&mut self, records: Records) -> Result<()> {
        let frame = records.encode_length_delimited_to_vec();
        self.writer.write_all(&frame)?;
        self.writer.flush()?;
        Ok(())
    }
}
