//! Whole-message codec: header, then `question_count` questions, then `answer_record_count`
//! resource records. Authority and additional sections are decoded (so offsets stay correct
//! for any trailing bytes) but their records are discarded rather than retained on `Packet`.

use crate::dns::header::Header;
use crate::dns::question::Question;
use crate::dns::record::ResourceRecord;
use crate::error::CodecResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
}

impl Packet {
    /// Build a packet. When `auto_set_header` is true, `header`'s four count fields are
    /// overwritten from `questions`/`answers` before the packet is stored (authority and
    /// additional counts are always set to zero — this crate never emits those sections).
    pub fn new(mut header: Header, questions: Vec<Question>, answers: Vec<ResourceRecord>, auto_set_header: bool) -> Self {
        if auto_set_header {
            header.question_count = questions.len() as u16;
            header.answer_record_count = answers.len() as u16;
            header.authority_record_count = 0;
            header.additional_record_count = 0;
        }
        Packet {
            header,
            questions,
            answers,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = self.header.encode();
        for question in &self.questions {
            out.extend_from_slice(&question.encode());
        }
        for answer in &self.answers {
            out.extend_from_slice(&answer.encode());
        }
        out
    }

    /// Decode a whole message starting at offset 0. Returns the packet and the offset just
    /// past the last byte consumed.
    pub fn decode(data: &[u8]) -> CodecResult<(Self, usize)> {
        let (header, mut offset) = Header::decode(data, 0)?;

        let mut questions = Vec::with_capacity(header.question_count as usize);
        for _ in 0..header.question_count {
            let (question, next) = Question::decode(data, offset)?;
            questions.push(question);
            offset = next;
        }

        let mut answers = Vec::with_capacity(header.answer_record_count as usize);
        for _ in 0..header.answer_record_count {
            let (record, next) = ResourceRecord::decode(data, offset)?;
            answers.push(record);
            offset = next;
        }

        // Authority and additional sections are skipped: advance past them for correct
        // framing, but don't keep the records around.
        for _ in 0..header.authority_record_count {
            let (_, next) = ResourceRecord::decode(data, offset)?;
            offset = next;
        }
        for _ in 0..header.additional_record_count {
            let (_, next) = ResourceRecord::decode(data, offset)?;
            offset = next;
        }

        Ok((
            Packet {
                header,
                questions,
                answers,
            },
            offset,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::label::LabelSequence;
    use crate::dns::types::{AnswerClass, AnswerType, QuestionClass, QuestionType};

    fn sample_header(qdcount: u16, ancount: u16) -> Header {
        Header::new(1234, 0, 0, 0, 0, 1, 0, 0, qdcount, ancount, 0, 0).unwrap()
    }

    #[test]
    fn round_trip_question_only() {
        let question = Question::new(
            LabelSequence::from_labels(["codecrafters", "io"]).unwrap(),
            QuestionType::A,
            QuestionClass::IN,
        );
        let packet = Packet::new(sample_header(0, 0), vec![question], vec![], true);
        assert_eq!(packet.header.question_count, 1);

        let encoded = packet.encode();
        let (decoded, next) = Packet::decode(&encoded).unwrap();
        assert_eq!(decoded, packet);
        assert_eq!(next, encoded.len());
    }

    #[test]
    fn round_trip_with_answers() {
        let question = Question::new(LabelSequence::root(), QuestionType::A, QuestionClass::IN);
        let answer = ResourceRecord::new(
            LabelSequence::root(),
            AnswerType::A,
            AnswerClass::IN,
            60,
            vec![8, 8, 8, 8],
        );
        let packet = Packet::new(sample_header(0, 0), vec![question], vec![answer], true);
        let encoded = packet.encode();
        let (decoded, next) = Packet::decode(&encoded).unwrap();
        assert_eq!(decoded, packet);
        assert_eq!(next, encoded.len());
    }

    #[test]
    fn authority_and_additional_sections_are_skipped_not_retained() {
        let question = Question::new(LabelSequence::root(), QuestionType::A, QuestionClass::IN);
        let authority = ResourceRecord::new(LabelSequence::root(), AnswerType::NS, AnswerClass::IN, 1, vec![]);

        let mut header = sample_header(0, 0);
        header.question_count = 1;
        header.authority_record_count = 1;

        let mut data = header.encode();
        data.extend_from_slice(&question.encode());
        data.extend_from_slice(&authority.encode());

        let (decoded, next) = Packet::decode(&data).unwrap();
        assert_eq!(decoded.questions, vec![question]);
        assert!(decoded.answers.is_empty());
        assert_eq!(next, data.len());
    }

    #[test]
    fn decode_fails_when_truncated_mid_question() {
        let mut header = sample_header(0, 0);
        header.question_count = 1;
        let data = header.encode();
        assert!(Packet::decode(&data).is_err());
    }
}
