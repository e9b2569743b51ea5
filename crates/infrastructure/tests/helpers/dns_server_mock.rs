use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

const TYPE_A: u16 = 1;
const TYPE_AAAA: u16 = 28;

#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Answer A queries with `v4` and AAAA queries with `v6`.
    Answer { v4: Vec<Ipv4Addr>, v6: Vec<Ipv6Addr> },
    /// Reply with the given RCODE and no answers.
    Rcode(u8),
    /// Send a datagram with the wrong ID first, then the real answer.
    WrongIdFirst { v4: Vec<Ipv4Addr> },
    /// Answer A queries with `v4` and the TC bit set; AAAA gets no answers.
    Truncated { v4: Vec<Ipv4Addr> },
    /// Never reply.
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = queries.clone();

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            for response in Self::build_responses(&buf[..len], &behavior) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn build_responses(query: &[u8], behavior: &MockBehavior) -> Vec<Vec<u8>> {
        if query.len() < 12 {
            return vec![];
        }

        let qtype = Self::query_type(query);

        match behavior {
            MockBehavior::Silent => vec![],
            MockBehavior::Rcode(rcode) => vec![Self::build_response(query, *rcode, &[])],
            MockBehavior::Answer { v4, v6 } => {
                let rdata = Self::rdata_for(qtype, v4, v6);
                vec![Self::build_response(query, 0, &rdata)]
            }
            MockBehavior::WrongIdFirst { v4 } => {
                let rdata = Self::rdata_for(qtype, v4, &[]);
                let real = Self::build_response(query, 0, &rdata);
                let mut bogus = real.clone();
                bogus[0] = !bogus[0];
                vec![bogus, real]
            }
            MockBehavior::Truncated { v4 } => {
                let rdata = Self::rdata_for(qtype, v4, &[]);
                let mut response = Self::build_response(query, 0, &rdata);
                response[2] |= 0x02;
                vec![response]
            }
        }
    }

    fn rdata_for(qtype: u16, v4: &[Ipv4Addr], v6: &[Ipv6Addr]) -> Vec<(u16, Vec<u8>)> {
        match qtype {
            TYPE_A => v4.iter().map(|ip| (TYPE_A, ip.octets().to_vec())).collect(),
            TYPE_AAAA => v6.iter().map(|ip| (TYPE_AAAA, ip.octets().to_vec())).collect(),
            _ => vec![],
        }
    }

    /// QTYPE follows the first QNAME, which starts right after the header.
    fn query_type(query: &[u8]) -> u16 {
        let mut pos = 12;
        while pos < query.len() && query[pos] != 0 {
            pos += query[pos] as usize + 1;
        }
        if pos + 2 < query.len() {
            u16::from_be_bytes([query[pos + 1], query[pos + 2]])
        } else {
            0
        }
    }

    fn build_response(query: &[u8], rcode: u8, answers: &[(u16, Vec<u8>)]) -> Vec<u8> {
        let mut response = Vec::with_capacity(512);

        response.extend_from_slice(&query[0..2]);

        response.push(0x81);
        response.push(0x80 | (rcode & 0x0f));

        response.extend_from_slice(&query[4..6]);

        response.extend_from_slice(&(answers.len() as u16).to_be_bytes());

        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&query[12..]);

        for (rtype, data) in answers {
            response.extend_from_slice(&[0xc0, 0x0c]);
            response.extend_from_slice(&rtype.to_be_bytes());
            response.extend_from_slice(&[0x00, 0x01]);
            response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
            response.extend_from_slice(&(data.len() as u16).to_be_bytes());
            response.extend_from_slice(data);
        }

        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
