use crate::common::ProtocolError;
use crate::protocol::Message;

/// One side's end of the pair of one-way channels linking the players.
#[async_trait::async_trait]
pub trait Transport: Send {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()>;
    async fn recv(&mut self) -> anyhow::Result<Message>;
}

/// Whether `err` reports that the opponent's end of the channel is gone.
pub fn is_channel_closed(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<ProtocolError>(),
        Some(ProtocolError::ChannelClosed { .. })
    )
}

pub mod in_memory;
pub mod pipe;
