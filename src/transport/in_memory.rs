use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::common::ProtocolError;
use crate::protocol::Message;
use crate::transport::Transport;

/// Typed in-process channels, one per direction.
pub struct InMemoryTransport {
    tx: UnboundedSender<Message>,
    rx: UnboundedReceiver<Message>,
}

impl InMemoryTransport {
    /// Two connected ends: whatever one sends, the other receives.
    pub fn pair() -> (Self, Self) {
        let (tx1, rx1) = unbounded_channel();
        let (tx2, rx2) = unbounded_channel();
        (Self { tx: tx1, rx: rx2 }, Self { tx: tx2, rx: rx1 })
    }
}

#[async_trait::async_trait]
impl Transport for InMemoryTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        self.tx
            .send(msg)
            .map_err(|_| ProtocolError::ChannelClosed { partial: 0 })?;
        Ok(())
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        match self.rx.recv().await {
            Some(msg) => Ok(msg),
            None => Err(ProtocolError::ChannelClosed { partial: 0 }.into()),
        }
    }
}
