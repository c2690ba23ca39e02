use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use crate::constants::NOTIFY_PAYLOAD;
use crate::error::{Error, Result};
use log::debug;

/// Fire-and-forget smile signal.
pub trait Notifier {
    fn notify(&mut self) -> Result<()>;
}

/// Sends the smile datagram from one process-wide socket. No ack, no retry.
pub(crate) struct UdpNotifier {
    socket: UdpSocket,
    target: SocketAddr,
}

impl UdpNotifier {
    pub fn bind(target: impl ToSocketAddrs) -> Result<Self> {
        let target = target.to_socket_addrs()?.next().ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "notification address resolved to nothing",
            ))
        })?;
        let local: SocketAddr = if target.is_ipv4() {
            ([0, 0, 0, 0], 0).into()
        } else {
            ([0u16; 8], 0).into()
        };
        let socket = UdpSocket::bind(local)?;
        debug!("notifier bound to {} -> {}", socket.local_addr()?, target);
        Ok(Self { socket, target })
    }
}

impl Notifier for UdpNotifier {
    fn notify(&mut self) -> Result<()> {
        self.socket
            .send_to(NOTIFY_PAYLOAD, self.target)
            .map_err(Error::Notify)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_sends_exact_payload() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        receiver
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();

        let mut notifier = UdpNotifier::bind(receiver.local_addr().unwrap()).unwrap();
        notifier.notify().unwrap();

        let mut buf = [0u8; 64];
        let (len, _) = receiver.recv_from(&mut buf).unwrap();
        assert_eq!(&buf[..len], b"smile");
    }

    #[test]
    fn test_each_notify_is_one_datagram() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        receiver
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();

        let mut notifier = UdpNotifier::bind(receiver.local_addr().unwrap()).unwrap();
        notifier.notify().unwrap();
        notifier.notify().unwrap();

        let mut buf = [0u8; 64];
        for _ in 0..2 {
            let (len, _) = receiver.recv_from(&mut buf).unwrap();
            assert_eq!(len, 5);
        }
    }
}
