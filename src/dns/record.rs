//! Resource record codec: `name || atype (u16) || aclass (u16) || ttl (i32) || rdlength (u16)
//! || data`.

use crate::dns::label::LabelSequence;
use crate::dns::types::{AnswerClass, AnswerType};
use crate::error::{CodecError, CodecResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: LabelSequence,
    pub atype: u16,
    pub aclass: u16,
    pub ttl: i32,
    pub data: Vec<u8>,
}

impl ResourceRecord {
    pub fn new(
        name: LabelSequence,
        atype: AnswerType,
        aclass: AnswerClass,
        ttl: i32,
        data: Vec<u8>,
    ) -> Self {
        ResourceRecord {
            name,
            atype: atype.to_u16(),
            aclass: aclass.to_u16(),
            ttl,
            data,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = self.name.encode();
        out.extend_from_slice(&self.atype.to_be_bytes());
        out.extend_from_slice(&self.aclass.to_be_bytes());
        out.extend_from_slice(&self.ttl.to_be_bytes());
        out.extend_from_slice(&(self.data.len() as u16).to_be_bytes());
        out.extend_from_slice(&self.data);
        out
    }

    pub fn decode(data: &[u8], start: usize) -> CodecResult<(Self, usize)> {
        let (name, after_name) = LabelSequence::decode(data, start)?;
        if after_name + 10 > data.len() {
            return Err(CodecError::BufferTooShort {
                offset: after_name,
                needed: 10,
                available: data.len().saturating_sub(after_name),
            });
        }
        let atype = u16::from_be_bytes([data[after_name], data[after_name + 1]]);
        let aclass = u16::from_be_bytes([data[after_name + 2], data[after_name + 3]]);
        let ttl = i32::from_be_bytes([
            data[after_name + 4],
            data[after_name + 5],
            data[after_name + 6],
            data[after_name + 7],
        ]);
        let rdlength = u16::from_be_bytes([data[after_name + 8], data[after_name + 9]]) as usize;
        let rdata_start = after_name + 10;
        if rdata_start + rdlength > data.len() {
            return Err(CodecError::BufferTooShort {
                offset: rdata_start,
                needed: rdlength,
                available: data.len().saturating_sub(rdata_start),
            });
        }
        let record = ResourceRecord {
            name,
            atype,
            aclass,
            ttl,
            data: data[rdata_start..rdata_start + rdlength].to_vec(),
        };
        Ok((record, rdata_start + rdlength))
    }
}
