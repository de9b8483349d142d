#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock upstream reacts to each query.
#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    /// Answer with one A record (93.184.216.34) carrying this TTL
    Answer { ttl: u32 },
    /// Answer NXDOMAIN with no records
    NxDomain,
    /// Receive but never reply (forces a timeout)
    Silent,
    /// Reply with a transaction ID that does not match the query
    WrongId,
    /// Reply with bytes that are not a DNS message
    Garbage,
}

/// Local UDP DNS server standing in for an upstream resolver.
pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Start on an OS-assigned loopback port.
    pub async fn start(behavior: MockBehavior) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        let received = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&received);

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
                            if let Some(response) = Self::build_response(&buf[..len], behavior) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Number of queries this server has received.
    pub fn received(&self) -> usize {
        self.received.load(Ordering::SeqCst)
    }

    fn build_response(query: &[u8], behavior: MockBehavior) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        match behavior {
            MockBehavior::Silent => None,
            MockBehavior::Garbage => Some(vec![0xde, 0xad, 0xbe]),
            MockBehavior::Answer { ttl } => Some(Self::answer(query, ttl, 0x00)),
            MockBehavior::NxDomain => Some(Self::empty(query, 0x03)),
            MockBehavior::WrongId => {
                let mut response = Self::answer(query, 60, 0x00);
                response[0] ^= 0xff;
                Some(response)
            }
        }
    }

    fn header(query: &[u8], rcode: u8, answers: u16) -> Vec<u8> {
        let mut response = Vec::with_capacity(512);
        response.extend_from_slice(&query[0..2]); // Transaction ID
        response.push(0x81); // QR=1, Opcode=0, AA=0, TC=0, RD=1
        response.push(0x80 | rcode); // RA=1, Z=0, RCODE
        response.extend_from_slice(&query[4..6]); // Questions count
        response.extend_from_slice(&answers.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x00]); // Authority RRs
        response.extend_from_slice(&[0x00, 0x00]); // Additional RRs
        response.extend_from_slice(&query[12..]); // Question section
        response
    }

    fn empty(query: &[u8], rcode: u8) -> Vec<u8> {
        Self::header(query, rcode, 0)
    }

    fn answer(query: &[u8], ttl: u32, rcode: u8) -> Vec<u8> {
        let mut response = Self::header(query, rcode, 1);
        response.extend_from_slice(&[
            0xc0, 0x0c, // Name pointer to question
            0x00, 0x01, // Type A
            0x00, 0x01, // Class IN
        ]);
        response.extend_from_slice(&ttl.to_be_bytes());
        response.extend_from_slice(&[
            0x00, 0x04, // Data length: 4 bytes
            93, 184, 216, 34, // IP: 93.184.216.34
        ]);
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
