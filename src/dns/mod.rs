//! DNS wire format: bit-field header codec, label sequences with compression, and the
//! question/resource-record/packet codecs built on top of them.

pub mod bitfield;
pub mod header;
pub mod label;
pub mod packet;
pub mod question;
pub mod record;
pub mod types;
