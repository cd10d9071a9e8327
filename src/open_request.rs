//! The open-request table: the set of in-flight client queries and the per-question answer
//! slots the forwarder is waiting to fill, plus the `transaction_id -> request` subrequest
//! index used to correlate asynchronous upstream replies back to the request that spawned
//! them.
//!
//! Two indexes point at the same state. Rather than sharing ownership of an `OpenRequest`
//! between them (which would need `Rc`/`RefCell` for a supposedly single-threaded table),
//! the live set owns the value and the subrequest index stores only the lookup key;
//! `match_upstream_reply` re-resolves through the live set.

use std::collections::HashMap;
use std::net::SocketAddr;

use crate::dns::header::Header;
use crate::dns::packet::Packet;
use crate::dns::question::Question;
use crate::dns::record::ResourceRecord;

pub type OpenRequestKey = (SocketAddr, u16);

/// A client query currently being resolved, with one answer slot per question.
pub struct OpenRequest {
    pub source: SocketAddr,
    pub request: Packet,
    // Insertion-ordered so the eventual reply preserves the client's original question order;
    // a HashMap would scramble that, and there's no need for one at these list sizes.
    answers: Vec<(Question, Option<ResourceRecord>)>,
}

impl OpenRequest {
    fn new(source: SocketAddr, request: Packet) -> Self {
        let answers = request.questions.iter().cloned().map(|q| (q, None)).collect();
        OpenRequest {
            source,
            request,
            answers,
        }
    }

    pub fn key(&self) -> OpenRequestKey {
        (self.source, self.request.header.packet_identifier)
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(|(_, answer)| answer.is_some())
    }

    /// Fill the slot matching `question`, if this request has one open for it. A reply for a
    /// question this request never asked (or already resolved) is simply ignored.
    pub fn set_answer(&mut self, question: &Question, record: ResourceRecord) {
        if let Some(slot) = self.answers.iter_mut().find(|(q, _)| q == question) {
            slot.1 = Some(record);
        }
    }

    /// Consume a completed request into its aggregate reply, in original question order.
    ///
    /// Panics if called before `is_complete()`; the forwarder only calls this after checking.
    pub fn into_response(self) -> Packet {
        assert!(self.is_complete(), "into_response called on an incomplete open request");
        let original = &self.request.header;
        let response_code = if original.operation_code == 0 { 0 } else { 4 };
        let header = Header::new(
            original.packet_identifier,
            1,
            original.operation_code,
            0,
            0,
            original.recursion_desired,
            0,
            response_code,
            0,
            0,
            0,
            0,
        )
        .expect("fields copied from an already-valid header stay in range");
        let answers = self.answers.into_iter().filter_map(|(_, answer)| answer).collect();
        Packet::new(header, self.request.questions, answers, true)
    }
}

/// The live open-request set plus the subrequest correlation index.
#[derive(Default)]
pub struct OpenRequestTable {
    open: HashMap<OpenRequestKey, OpenRequest>,
    subrequests: HashMap<u16, OpenRequestKey>,
}

impl OpenRequestTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a newly arrived client query, with every question starting `UNRESOLVED`.
    pub fn open(&mut self, source: SocketAddr, request: Packet) -> OpenRequestKey {
        let open_request = OpenRequest::new(source, request);
        let key = open_request.key();
        self.open.insert(key, open_request);
        key
    }

    /// Record that `tid` was minted for a subrequest belonging to `key`.
    pub fn register_subrequest(&mut self, key: OpenRequestKey, tid: u16) {
        self.subrequests.insert(tid, key);
    }

    pub fn get_mut(&mut self, key: &OpenRequestKey) -> Option<&mut OpenRequest> {
        self.open.get_mut(key)
    }

    /// Resolve an upstream reply's transaction id back to its owning request. The subrequest
    /// entry is consumed; a second reply for the same `tid` (or one that never had a matching
    /// subrequest) returns `None`.
    pub fn match_upstream_reply(&mut self, packet_identifier: u16) -> Option<&mut OpenRequest> {
        let key = self.subrequests.remove(&packet_identifier)?;
        self.open.get_mut(&key)
    }

    /// Apply every answer in `reply` to `open_request`'s matching slot.
    ///
    /// The lookup key for each answer is `Question(name, qtype=atype, qclass=atype)` — note
    /// `qclass` is built from `atype`, not `aclass`. That's a preserved upstream quirk, not a
    /// typo: fixing it would change which slot a reply lands in for any question whose class
    /// isn't also its own type value, and this crate matches that reference behavior rather
    /// than silently correcting it.
    pub fn apply_answers(open_request: &mut OpenRequest, reply: &Packet) {
        for answer in &reply.answers {
            let question = Question {
                name: answer.name.clone(),
                qtype: answer.atype,
                qclass: answer.atype,
            };
            open_request.set_answer(&question, answer.clone());
        }
    }

    pub fn is_complete(&self, key: &OpenRequestKey) -> bool {
        self.open.get(key).map(OpenRequest::is_complete).unwrap_or(false)
    }

    pub fn close(&mut self, key: &OpenRequestKey) -> Option<OpenRequest> {
        self.open.remove(key)
    }
}
