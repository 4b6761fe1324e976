use std::net::{SocketAddr, UdpSocket};
use std::time::Duration;

use crate::error::Result;
use crate::writer::MAX_PACKET_SIZE;

/// Transport primitive: one query datagram out, one response datagram
/// back. Stubbed out by resolver tests.
pub trait Handler {
    fn send_to(&self, buf: &[u8], addr: SocketAddr) -> Result<Vec<u8>>;
}

pub struct UdpHandler {
    timeout: Duration,
}

impl UdpHandler {
    pub fn new(timeout: Duration) -> UdpHandler {
        UdpHandler { timeout }
    }
}

impl Handler for UdpHandler {
    fn send_to(&self, buf: &[u8], addr: SocketAddr) -> Result<Vec<u8>> {
        let socket = UdpSocket::bind(("0.0.0.0", 0))?;
        socket.set_read_timeout(Some(self.timeout))?;
        socket.set_write_timeout(Some(self.timeout))?;

        socket.send_to(buf, addr)?;

        let mut res = [0u8; MAX_PACKET_SIZE];
        let (n, _) = socket.recv_from(&mut res)?;

        Ok(res[..n].to_vec())
    }
}
