//! Question section codec: `name || qtype (u16) || qclass (u16)`.

use crate::dns::label::LabelSequence;
use crate::dns::types::{QuestionClass, QuestionType};
use crate::error::{CodecError, CodecResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question {
    pub name: LabelSequence,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(name: LabelSequence, qtype: QuestionType, qclass: QuestionClass) -> Self {
        Question {
            name,
            qtype: qtype.to_u16(),
            qclass: qclass.to_u16(),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = self.name.encode();
        out.extend_from_slice(&self.qtype.to_be_bytes());
        out.extend_from_slice(&self.qclass.to_be_bytes());
        out
    }

    pub fn decode(data: &[u8], start: usize) -> CodecResult<(Self, usize)> {
        let (name, after_name) = LabelSequence::decode(data, start)?;
        read_qtype_qclass(data, after_name).map(|(qtype, qclass, next)| {
            (
                Question {
                    name,
                    qtype,
                    qclass,
                },
                next,
            )
        })
    }
}

fn read_qtype_qclass(data: &[u8], offset: usize) -> CodecResult<(u16, u16, usize)> {
    if offset + 4 > data.len() {
        return Err(CodecError::BufferTooShort {
            offset,
            needed: 4,
            available: data.len().saturating_sub(offset),
        });
    }
    let qtype = u16::from_be_bytes([data[offset], data[offset + 1]]);
    let qclass = u16::from_be_bytes([data[offset + 2], data[offset + 3]]);
    Ok((qtype, qclass, offset + 4))
}
