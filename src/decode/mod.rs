pub use abi::{Abi, Reader, Writer, read_from};
pub use error::Error;
pub use extra::{AdditionalMetrics, DnsRecord, ObservedIntf, PktDrops, TranslatedFlow};
pub use extra::MAX_OBSERVED_INTERFACES;
pub use flow::{FlowKey, FlowMetrics, RawFlowRecord};

mod abi;
mod error;
mod extra;
mod flow;
