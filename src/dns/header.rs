//! The 12-byte DNS message header (RFC 1035 §4.1.1), packed through the generic bit-field
//! codec in `dns::bitfield`.

use crate::dns::bitfield::{pack_bit_fields, unpack_bit_fields, Schema};
use crate::error::{CodecError, CodecResult};

const SCHEMA: Schema = &[
    ("packet_identifier", 16),
    ("query_response", 1),
    ("operation_code", 4),
    ("authoritative_answer", 1),
    ("truncation", 1),
    ("recursion_desired", 1),
    ("recursion_available", 1),
    ("reserved", 3),
    ("response_code", 4),
    ("question_count", 16),
    ("answer_record_count", 16),
    ("authority_record_count", 16),
    ("additional_record_count", 16),
];

pub const HEADER_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub packet_identifier: u16,
    pub query_response: u8,
    pub operation_code: u8,
    pub authoritative_answer: u8,
    pub truncation: u8,
    pub recursion_desired: u8,
    pub recursion_available: u8,
    pub reserved: u8,
    pub response_code: u8,
    pub question_count: u16,
    pub answer_record_count: u16,
    pub authority_record_count: u16,
    pub additional_record_count: u16,
}

impl Header {
    /// Construct and validate a header; fails with `OUT_OF_RANGE` if any field overflows
    /// its declared bit width.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        packet_identifier: u16,
        query_response: u8,
        operation_code: u8,
        authoritative_answer: u8,
        truncation: u8,
        recursion_desired: u8,
        recursion_available: u8,
        response_code: u8,
        question_count: u16,
        answer_record_count: u16,
        authority_record_count: u16,
        additional_record_count: u16,
    ) -> CodecResult<Self> {
        let header = Header {
            packet_identifier,
            query_response,
            operation_code,
            authoritative_answer,
            truncation,
            recursion_desired,
            recursion_available,
            reserved: 0,
            response_code,
            question_count,
            answer_record_count,
            authority_record_count,
            additional_record_count,
        };
        // Validate by running the values through the same range check `encode` uses.
        pack_bit_fields(SCHEMA, &header.to_values())?;
        Ok(header)
    }

    fn to_values(&self) -> Vec<u64> {
        vec![
            self.packet_identifier as u64,
            self.query_response as u64,
            self.operation_code as u64,
            self.authoritative_answer as u64,
            self.truncation as u64,
            self.recursion_desired as u64,
            self.recursion_available as u64,
            self.reserved as u64,
            self.response_code as u64,
            self.question_count as u64,
            self.answer_record_count as u64,
            self.authority_record_count as u64,
            self.additional_record_count as u64,
        ]
    }

    fn from_values(values: &[u64]) -> Self {
        Header {
            packet_identifier: values[0] as u16,
            query_response: values[1] as u8,
            operation_code: values[2] as u8,
            authoritative_answer: values[3] as u8,
            truncation: values[4] as u8,
            recursion_desired: values[5] as u8,
            recursion_available: values[6] as u8,
            reserved: values[7] as u8,
            response_code: values[8] as u8,
            question_count: values[9] as u16,
            answer_record_count: values[10] as u16,
            authority_record_count: values[11] as u16,
            additional_record_count: values[12] as u16,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        // Values were already validated at construction time; this cannot fail.
        pack_bit_fields(SCHEMA, &self.to_values()).expect("Header fields validated at construction")
    }

    pub fn decode(data: &[u8], start: usize) -> CodecResult<(Self, usize)> {
        let (values, next) = unpack_bit_fields(SCHEMA, data, start)?;
        Ok((Header::from_values(&values), next))
    }
}
