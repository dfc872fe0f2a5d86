use std::io::ErrorKind;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, Stdin, Stdout};

use crate::common::ProtocolError;
use crate::protocol::{decode, encode, Message, FRAME_LEN};
use crate::transport::Transport;

/// Transport over a pair of one-way byte streams, typically OS pipes.
///
/// Frames are written as-is with no acknowledgement; a read blocks until a
/// whole frame arrives or the writer goes away.
pub struct PipeTransport<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> PipeTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Read exactly one frame, distinguishing a clean end-of-stream from one
    /// that cut a frame short.
    async fn read_frame(&mut self) -> anyhow::Result<[u8; FRAME_LEN]> {
        let mut frame = [0u8; FRAME_LEN];
        let mut filled = 0;
        while filled < FRAME_LEN {
            let n = match self.reader.read(&mut frame[filled..]).await {
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == ErrorKind::ConnectionReset => 0,
                Err(e) => return Err(anyhow::anyhow!("Read error: {}", e)),
            };
            if n == 0 {
                return Err(ProtocolError::ChannelClosed { partial: filled }.into());
            }
            filled += n;
        }
        Ok(frame)
    }
}

impl PipeTransport<Stdin, Stdout> {
    /// The process's own stdin/stdout as the inbound/outbound channels.
    pub fn stdio() -> Self {
        Self::new(tokio::io::stdin(), tokio::io::stdout())
    }
}

fn write_error(e: std::io::Error) -> anyhow::Error {
    if e.kind() == ErrorKind::BrokenPipe || e.kind() == ErrorKind::ConnectionReset {
        ProtocolError::ChannelClosed { partial: 0 }.into()
    } else {
        anyhow::anyhow!("Write error: {}", e)
    }
}

#[async_trait::async_trait]
impl<R, W> Transport for PipeTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        let frame = encode(&msg)?;
        self.writer.write_all(&frame).await.map_err(write_error)?;
        self.writer.flush().await.map_err(write_error)?;
        Ok(())
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        let frame = self.read_frame().await?;
        Ok(decode(&frame)?)
    }
}
