//! Error kinds raised by the wire codec (`dns::bitfield`, `dns::label`, `dns::question`,
//! `dns::record`, `dns::packet`). Every decode/encode entry point returns `Result<_, CodecError>`;
//! the forwarder wraps these in `anyhow::Error` at the datagram boundary.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("buffer too short: need at least {needed} bytes from offset {offset}, have {available}")]
    BufferTooShort {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("field '{field}' value {value} out of range for {width}-bit width (max {max})")]
    OutOfRange {
        field: &'static str,
        value: u64,
        width: u32,
        max: u64,
    },

    #[error("unknown label flags {flags:#04b} at offset {offset} (01/10 are reserved)")]
    UnknownLabelFlags { offset: usize, flags: u8 },

    #[error("compression pointer at offset {offset} targets {target}, past message end {len}")]
    PointerOutOfRange {
        offset: usize,
        target: usize,
        len: usize,
    },

    #[error("compression pointer at offset {offset} revisits offset {target} (loop)")]
    PointerLoop { offset: usize, target: usize },

    #[error("invalid label {label:?}: {reason}")]
    InvalidLabel { label: Vec<u8>, reason: &'static str },
}

pub type CodecResult<T> = Result<T, CodecError>;
