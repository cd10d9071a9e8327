//! The event loop: one UDP socket, reacting to one datagram at a time. Client queries are
//! opened against the open-request table and either forwarded one question at a time to a
//! configured upstream, or answered immediately with synthetic records. Upstream replies are
//! correlated back to their owning request by transaction id. A request's aggregate reply is
//! sent as soon as every question slot is resolved.

use std::net::SocketAddr;

use rand::Rng;
use tokio::net::UdpSocket;
use tracing::{debug, error, info, warn};

use crate::dns::packet::Packet;
use crate::dns::record::ResourceRecord;
use crate::dns::types::{AnswerClass, AnswerType};
use crate::open_request::{OpenRequestKey, OpenRequestTable};

/// RFC 1035 §4.2.1: UDP messages carrying DNS should be no larger than 512 bytes.
const MAX_DATAGRAM: usize = 512;

pub struct Forwarder {
    socket: UdpSocket,
    upstream: Option<SocketAddr>,
    table: OpenRequestTable,
}

impl Forwarder {
    pub async fn bind(port: u16, upstream: Option<SocketAddr>) -> anyhow::Result<Self> {
        let socket = UdpSocket::bind(("127.0.0.1", port)).await?;
        info!(port, ?upstream, "forwarder listening");
        Ok(Forwarder {
            socket,
            upstream,
            table: OpenRequestTable::new(),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Run forever. Any error handling a datagram is logged and propagated, ending the loop —
    /// this crate implements the strict "log and stop" contract rather than dropping the
    /// datagram and continuing.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut buf = vec![0u8; MAX_DATAGRAM];
        loop {
            let (len, peer) = self.socket.recv_from(&mut buf).await?;
            if let Err(err) = self.handle_datagram(&buf[..len], peer).await {
                error!(%err, %peer, "error handling datagram, stopping");
                return Err(err);
            }
        }
    }

    async fn handle_datagram(&mut self, data: &[u8], peer: SocketAddr) -> anyhow::Result<()> {
        let packet = match Packet::decode(data) {
            Ok((packet, _)) => packet,
            Err(err) => {
                warn!(%err, %peer, "dropping undecodable datagram");
                return Ok(());
            }
        };

        if Some(peer) == self.upstream {
            self.handle_upstream_reply(packet).await
        } else {
            self.handle_client_query(packet, peer).await
        }
    }

    async fn handle_upstream_reply(&mut self, reply: Packet) -> anyhow::Result<()> {
        let id = reply.header.packet_identifier;
        let key = {
            let Some(open_request) = self.table.match_upstream_reply(id) else {
                debug!(id, "upstream reply matched no open request, dropping");
                return Ok(());
            };
            OpenRequestTable::apply_answers(open_request, &reply);
            open_request.key()
        };
        self.complete_if_ready(key).await
    }

    async fn handle_client_query(&mut self, request: Packet, source: SocketAddr) -> anyhow::Result<()> {
        let key = self.table.open(source, request.clone());

        if let Some(upstream) = self.upstream {
            for question in &request.questions {
                let tid: u16 = rand::thread_rng().gen_range(0..u16::MAX);
                self.table.register_subrequest(key, tid);

                let mut subrequest_header = request.header;
                subrequest_header.packet_identifier = tid;
                let subrequest = Packet::new(subrequest_header, vec![question.clone()], vec![], true);
                self.socket.send_to(&subrequest.encode(), upstream).await?;
            }
        } else {
            let open_request = self.table.get_mut(&key).expect("just opened");
            for (index, question) in open_request.request.questions.clone().iter().enumerate() {
                let answer = ResourceRecord::new(
                    question.name.clone(),
                    AnswerType::A,
                    AnswerClass::IN,
                    123 + 10 * index as i32,
                    vec![0x01, 0x02, 0x03, 0x04],
                );
                open_request.set_answer(question, answer);
            }
        }

        self.complete_if_ready(key).await
    }

    async fn complete_if_ready(&mut self, key: OpenRequestKey) -> anyhow::Result<()> {
        if !self.table.is_complete(&key) {
            return Ok(());
        }
        let Some(open_request) = self.table.close(&key) else {
            return Ok(());
        };
        let destination = open_request.source;
        let response = open_request.into_response();
        info!(id = response.header.packet_identifier, %destination, "sending aggregate reply");
        self.socket.send_to(&response.encode(), destination).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::header::Header;
    use crate::dns::label::LabelSequence;
    use crate::dns::question::Question;
    use crate::dns::types::{QuestionClass, QuestionType};
    use tokio::net::UdpSocket as TokioUdpSocket;

    fn client_query(id: u16, names: &[&str]) -> Packet {
        let header = Header::new(id, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0).unwrap();
        let questions = names
            .iter()
            .map(|n| Question::new(LabelSequence::from_labels([*n]).unwrap(), QuestionType::A, QuestionClass::IN))
            .collect();
        Packet::new(header, questions, vec![], true)
    }

    #[tokio::test]
    async fn no_upstream_answers_with_synthetic_records() {
        let mut forwarder = Forwarder::bind(0, None).await.unwrap();
        let server_addr = forwarder.local_addr().unwrap();

        let client = TokioUdpSocket::bind("127.0.0.1:0").await.unwrap();
        let query = client_query(1234, &["codecrafters"]);
        client.send_to(&query.encode(), server_addr).await.unwrap();

        tokio::select! {
            result = forwarder.run() => { result.unwrap(); }
            _ = async {
                let mut buf = vec![0u8; 512];
                let (len, _) = client.recv_from(&mut buf).await.unwrap();
                let (response, _) = Packet::decode(&buf[..len]).unwrap();
                assert_eq!(response.header.packet_identifier, 1234);
                assert_eq!(response.header.query_response, 1);
                assert_eq!(response.header.response_code, 0);
                assert_eq!(response.answers.len(), 1);
                assert_eq!(response.answers[0].ttl, 123);
                assert_eq!(response.answers[0].data, vec![1, 2, 3, 4]);
            } => {}
        }
    }

    #[tokio::test]
    async fn with_upstream_two_questions_aggregate_into_one_reply() {
        let upstream_socket = TokioUdpSocket::bind("127.0.0.1:0").await.unwrap();
        let upstream_addr = upstream_socket.local_addr().unwrap();

        let mut forwarder = Forwarder::bind(0, Some(upstream_addr)).await.unwrap();
        let server_addr = forwarder.local_addr().unwrap();

        let client = TokioUdpSocket::bind("127.0.0.1:0").await.unwrap();
        let query = client_query(7, &["one", "two"]);
        client.send_to(&query.encode(), server_addr).await.unwrap();

        let upstream_task = async {
            let mut buf = vec![0u8; 512];
            for _ in 0..2 {
                let (len, peer) = upstream_socket.recv_from(&mut buf).await.unwrap();
                let (subrequest, _) = Packet::decode(&buf[..len]).unwrap();
                assert_eq!(subrequest.questions.len(), 1);
                let answer = ResourceRecord::new(
                    subrequest.questions[0].name.clone(),
                    AnswerType::A,
                    AnswerClass::IN,
                    60,
                    vec![9, 9, 9, 9],
                );
                let reply_header = Header::new(subrequest.header.packet_identifier, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0).unwrap();
                let reply = Packet::new(reply_header, vec![], vec![answer], true);
                upstream_socket.send_to(&reply.encode(), peer).await.unwrap();
            }
        };

        let client_task = async {
            let mut buf = vec![0u8; 512];
            let (len, _) = client.recv_from(&mut buf).await.unwrap();
            let (response, _) = Packet::decode(&buf[..len]).unwrap();
            assert_eq!(response.header.packet_identifier, 7);
            assert_eq!(response.questions.len(), 2);
            assert_eq!(response.answers.len(), 2);
        };

        tokio::select! {
            result = forwarder.run() => { result.unwrap(); }
            _ = async {
                tokio::join!(upstream_task, client_task);
            } => {}
        }
    }
}
