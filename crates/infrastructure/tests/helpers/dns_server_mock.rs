#![allow(dead_code)]

use super::builders::Reply;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

#[derive(Default)]
struct Script {
    udp: Mutex<VecDeque<Reply>>,
    tcp: Mutex<VecDeque<Reply>>,
    udp_hits: AtomicUsize,
    tcp_hits: AtomicUsize,
}

/// Loopback nameserver listening on UDP and TCP on the same port. Each
/// protocol serves its scripted replies in order and stays silent once
/// its script runs out.
pub struct MockDnsServer {
    addr: SocketAddr,
    script: Arc<Script>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start() -> std::io::Result<Self> {
        let udp = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = udp.local_addr()?;
        let tcp = TcpListener::bind(addr).await?;

        let script = Arc::new(Script::default());
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let server_script = Arc::clone(&script);
        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = udp.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        server_script.udp_hits.fetch_add(1, Ordering::SeqCst);
                        let reply = server_script.udp.lock().unwrap().pop_front();
                        if let Some(reply) = reply {
                            let _ = udp.send_to(&reply.render(&buf[..len]), peer).await;
                        }
                    }
                    result = tcp.accept() => {
                        let Ok((mut stream, _)) = result else { continue };
                        let script = Arc::clone(&server_script);
                        tokio::spawn(async move {
                            let mut len_buf = [0u8; 2];
                            if stream.read_exact(&mut len_buf).await.is_err() {
                                return;
                            }
                            let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                            if stream.read_exact(&mut query).await.is_err() {
                                return;
                            }
                            script.tcp_hits.fetch_add(1, Ordering::SeqCst);
                            let reply = script.tcp.lock().unwrap().pop_front();
                            if let Some(reply) = reply {
                                let body = reply.render(&query);
                                let _ = stream.write_all(&(body.len() as u16).to_be_bytes()).await;
                                let _ = stream.write_all(&body).await;
                            }
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            script,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn push_udp(&self, reply: Reply) {
        self.script.udp.lock().unwrap().push_back(reply);
    }

    pub fn push_tcp(&self, reply: Reply) {
        self.script.tcp.lock().unwrap().push_back(reply);
    }

    pub fn udp_hits(&self) -> usize {
        self.script.udp_hits.load(Ordering::SeqCst)
    }

    pub fn tcp_hits(&self) -> usize {
        self.script.tcp_hits.load(Ordering::SeqCst)
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
