//! DNS name (label sequence) codec: RFC 1035 §3.1 wire format with §4.1.4 message
//! compression on decode. The encoder never emits pointers; this server only ever reads
//! compressed names, it doesn't need to produce them.

use std::collections::HashSet;
use std::fmt;

use crate::error::{CodecError, CodecResult};

const POINTER_FLAG: u8 = 0xC0;
const MAX_LABEL_LEN: usize = 63;

/// An ordered sequence of raw, wire-format label bytes. The empty sequence is the DNS root.
///
/// Labels decoded off the wire are kept byte-for-byte, even if they would fail the
/// in-memory construction grammar — a caller can still inspect malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelSequence(Vec<Vec<u8>>);

impl LabelSequence {
    pub fn root() -> Self {
        LabelSequence(Vec::new())
    }

    /// Build a name from in-memory label strings, validating grammar and length.
    pub fn from_labels<I, S>(labels: I) -> CodecResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Vec::new();
        for label in labels {
            let label = label.as_ref();
            validate_label(label.as_bytes())?;
            out.push(label.as_bytes().to_vec());
        }
        Ok(LabelSequence(out))
    }

    pub fn labels(&self) -> &[Vec<u8>] {
        &self.0
    }

    /// Encode to wire format: length-prefixed labels terminated by a zero byte. Never emits
    /// a compression pointer.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for label in &self.0 {
            out.push(label.len() as u8);
            out.extend_from_slice(label);
        }
        out.push(0);
        out
    }

    /// Decode a name starting at `start` within `data`, following compression pointers.
    /// Returns the decoded sequence and the offset just past what the *outer* call consumed
    /// (a followed pointer never moves that offset further).
    pub fn decode(data: &[u8], start: usize) -> CodecResult<(Self, usize)> {
        let mut visited = HashSet::new();
        visited.insert(start);

        let mut labels = Vec::new();
        let mut pos = start;
        let mut next_offset: Option<usize> = None;

        loop {
            if pos >= data.len() {
                return Err(CodecError::BufferTooShort {
                    offset: pos,
                    needed: 1,
                    available: 0,
                });
            }
            let len_byte = data[pos];
            match len_byte & POINTER_FLAG {
                0x00 => {
                    let len = len_byte as usize;
                    if len == 0 {
                        if next_offset.is_none() {
                            next_offset = Some(pos + 1);
                        }
                        break;
                    }
                    if pos + 1 + len > data.len() {
                        return Err(CodecError::BufferTooShort {
                            offset: pos + 1,
                            needed: len,
                            available: data.len().saturating_sub(pos + 1),
                        });
                    }
                    labels.push(data[pos + 1..pos + 1 + len].to_vec());
                    pos += 1 + len;
                }
                POINTER_FLAG => {
                    if pos + 1 >= data.len() {
                        return Err(CodecError::BufferTooShort {
                            offset: pos,
                            needed: 2,
                            available: data.len().saturating_sub(pos),
                        });
                    }
                    let target = (((len_byte & 0x3F) as usize) << 8) | data[pos + 1] as usize;
                    if next_offset.is_none() {
                        next_offset = Some(pos + 2);
                    }
                    if target >= data.len() {
                        return Err(CodecError::PointerOutOfRange {
                            offset: pos,
                            target,
                            len: data.len(),
                        });
                    }
                    if visited.contains(&target) {
                        return Err(CodecError::PointerLoop {
                            offset: pos,
                            target,
                        });
                    }
                    visited.insert(target);
                    pos = target;
                }
                _ => {
                    return Err(CodecError::UnknownLabelFlags {
                        offset: pos,
                        flags: len_byte,
                    });
                }
            }
        }

        Ok((LabelSequence(labels), next_offset.expect("loop always sets next_offset before breaking")))
    }
}

impl fmt::Display for LabelSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, ".");
        }
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|l| String::from_utf8_lossy(l).into_owned())
            .collect();
        write!(f, "{}", parts.join("."))
    }
}

fn validate_label(label: &[u8]) -> CodecResult<()> {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return Err(CodecError::InvalidLabel {
            label: label.to_vec(),
            reason: "length must be in [1, 63]",
        });
    }
    let is_letter = |b: u8| b.is_ascii_alphabetic();
    let is_letter_digit_hyphen = |b: u8| b.is_ascii_alphanumeric() || b == b'-';

    if !is_letter(label[0]) || !is_letter(*label.last().unwrap()) {
        return Err(CodecError::InvalidLabel {
            label: label.to_vec(),
            reason: "must start and end with a letter",
        });
    }
    if !label.iter().all(|&b| is_letter_digit_hyphen(b)) {
        return Err(CodecError::InvalidLabel {
            label: label.to_vec(),
            reason: "must contain only letters, digits and hyphens",
        });
    }
    Ok(())
}
