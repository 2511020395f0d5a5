//! One-way channel from the content script to the background handler.
//!
//! Each message may carry a single acknowledgment slot. The background
//! answers it only when the relayed signal was accepted by the API.
use pulseboard_core::PageCapture;
use tokio::sync::{mpsc, oneshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayAck {
    SignalSent,
}

#[derive(Debug)]
pub struct RelayEnvelope {
    pub signal: PageCapture,
    pub ack: Option<oneshot::Sender<RelayAck>>,
}

impl RelayEnvelope {
    /// Answers the acknowledgment slot, if any. The sender may have gone away.
    pub fn acknowledge(self) {
        if let Some(ack) = self.ack {
            let _ = ack.send(RelayAck::SignalSent);
        }
    }
}

#[derive(Debug, Clone)]
pub struct RelaySender {
    tx: mpsc::Sender<RelayEnvelope>,
}

#[derive(Debug)]
pub struct RelayReceiver {
    rx: mpsc::Receiver<RelayEnvelope>,
}

/// Pending acknowledgment for one relayed message.
#[derive(Debug)]
pub struct AckHandle {
    rx: oneshot::Receiver<RelayAck>,
}

impl AckHandle {
    /// Resolves to `None` when the background dropped the slot.
    pub async fn wait(self) -> Option<RelayAck> {
        self.rx.await.ok()
    }
}

pub fn relay_channel(capacity: usize) -> (RelaySender, RelayReceiver) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (RelaySender { tx }, RelayReceiver { rx })
}

impl RelaySender {
    /// Fire-and-forget send. Returns `None` when the queue is full or the
    /// background has gone away.
    pub fn send(&self, signal: PageCapture) -> Option<AckHandle> {
        let (ack_tx, ack_rx) = oneshot::channel();
        let envelope = RelayEnvelope {
            signal,
            ack: Some(ack_tx),
        };
        self.tx.try_send(envelope).ok()?;
        Some(AckHandle { rx: ack_rx })
    }
}

impl RelayReceiver {
    pub async fn recv(&mut self) -> Option<RelayEnvelope> {
        self.rx.recv().await
    }
}
