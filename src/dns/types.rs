//! Named constants for the QTYPE/QCLASS (and their answer-restricted subsets) enumerated in
//! the data model. `Question`/`ResourceRecord` store the raw `u16` wire value directly so
//! unknown numeric values always round-trip; these enums are a convenience layer for
//! constructing known values and for diagnostics, never the storage type of a field.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
    A,
    NS,
    MD,
    MF,
    CNAME,
    SOA,
    MB,
    MG,
    MR,
    NULL,
    WKS,
    PTR,
    HINFO,
    MINFO,
    MX,
    TXT,
    AXFR,
    MAILB,
    MAILA,
    ALL,
    Unknown(u16),
}

impl From<u16> for QuestionType {
    fn from(v: u16) -> Self {
        match v {
            1 => QuestionType::A,
            2 => QuestionType::NS,
            3 => QuestionType::MD,
            4 => QuestionType::MF,
            5 => QuestionType::CNAME,
            6 => QuestionType::SOA,
            7 => QuestionType::MB,
            8 => QuestionType::MG,
            9 => QuestionType::MR,
            10 => QuestionType::NULL,
            11 => QuestionType::WKS,
            12 => QuestionType::PTR,
            13 => QuestionType::HINFO,
            14 => QuestionType::MINFO,
            15 => QuestionType::MX,
            16 => QuestionType::TXT,
            252 => QuestionType::AXFR,
            253 => QuestionType::MAILB,
            254 => QuestionType::MAILA,
            255 => QuestionType::ALL,
            other => QuestionType::Unknown(other),
        }
    }
}

impl QuestionType {
    pub fn to_u16(self) -> u16 {
        match self {
            QuestionType::A => 1,
            QuestionType::NS => 2,
            QuestionType::MD => 3,
            QuestionType::MF => 4,
            QuestionType::CNAME => 5,
            QuestionType::SOA => 6,
            QuestionType::MB => 7,
            QuestionType::MG => 8,
            QuestionType::MR => 9,
            QuestionType::NULL => 10,
            QuestionType::WKS => 11,
            QuestionType::PTR => 12,
            QuestionType::HINFO => 13,
            QuestionType::MINFO => 14,
            QuestionType::MX => 15,
            QuestionType::TXT => 16,
            QuestionType::AXFR => 252,
            QuestionType::MAILB => 253,
            QuestionType::MAILA => 254,
            QuestionType::ALL => 255,
            QuestionType::Unknown(v) => v,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionClass {
    IN,
    CS,
    CH,
    HS,
    ALL,
    Unknown(u16),
}

impl From<u16> for QuestionClass {
    fn from(v: u16) -> Self {
        match v {
            1 => QuestionClass::IN,
            2 => QuestionClass::CS,
            3 => QuestionClass::CH,
            4 => QuestionClass::HS,
            255 => QuestionClass::ALL,
            other => QuestionClass::Unknown(other),
        }
    }
}

impl QuestionClass {
    pub fn to_u16(self) -> u16 {
        match self {
            QuestionClass::IN => 1,
            QuestionClass::CS => 2,
            QuestionClass::CH => 3,
            QuestionClass::HS => 4,
            QuestionClass::ALL => 255,
            QuestionClass::Unknown(v) => v,
        }
    }
}

/// Strict subset of `QuestionType`: no `AXFR`/`MAILB`/`MAILA`/`ALL`, which are meaningful
/// only in a question, never in an actual resource record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerType {
    A,
    NS,
    MD,
    MF,
    CNAME,
    SOA,
    MB,
    MG,
    MR,
    NULL,
    WKS,
    PTR,
    HINFO,
    MINFO,
    MX,
    TXT,
    Unknown(u16),
}

impl AnswerType {
    pub fn to_u16(self) -> u16 {
        match self {
            AnswerType::A => 1,
            AnswerType::NS => 2,
            AnswerType::MD => 3,
            AnswerType::MF => 4,
            AnswerType::CNAME => 5,
            AnswerType::SOA => 6,
            AnswerType::MB => 7,
            AnswerType::MG => 8,
            AnswerType::MR => 9,
            AnswerType::NULL => 10,
            AnswerType::WKS => 11,
            AnswerType::PTR => 12,
            AnswerType::HINFO => 13,
            AnswerType::MINFO => 14,
            AnswerType::MX => 15,
            AnswerType::TXT => 16,
            AnswerType::Unknown(v) => v,
        }
    }
}

/// Strict subset of `QuestionClass`: no `ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerClass {
    IN,
    CS,
    CH,
    HS,
    Unknown(u16),
}

impl AnswerClass {
    pub fn to_u16(self) -> u16 {
        match self {
            AnswerClass::IN => 1,
            AnswerClass::CS => 2,
            AnswerClass::CH => 3,
            AnswerClass::HS => 4,
            AnswerClass::Unknown(v) => v,
        }
    }
}
