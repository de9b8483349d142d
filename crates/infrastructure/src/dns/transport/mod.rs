pub mod udp;

pub use udp::{UdpTransport, MAX_UDP_RESPONSE_SIZE};
