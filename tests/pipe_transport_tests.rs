use duel::protocol::FRAME_LEN;
use duel::transport::{is_channel_closed, pipe::PipeTransport, Transport};
use duel::{Guess, Message, ProtocolError};
use tokio::io::{duplex, AsyncReadExt, AsyncWriteExt};

#[tokio::test]
async fn test_pipe_pair_exchanges_guesses() -> anyhow::Result<()> {
    // two one-way byte channels, like the pipes between the processes
    let (parent_out, child_in) = duplex(64);
    let (child_out, parent_in) = duplex(64);
    let mut parent = PipeTransport::new(parent_in, parent_out);
    let mut child = PipeTransport::new(child_in, child_out);

    parent.send(Message::Guess(Guess::new(1, 2))).await?;
    assert_eq!(child.recv().await?, Message::Guess(Guess::new(1, 2)));

    child.send(Message::Guess(Guess::new(3, 0))).await?;
    child.send(Message::Defeat).await?;
    assert_eq!(parent.recv().await?, Message::Guess(Guess::new(3, 0)));
    assert_eq!(parent.recv().await?, Message::Defeat);
    Ok(())
}

#[tokio::test]
async fn test_frames_are_raw_int_pairs() -> anyhow::Result<()> {
    let (writer, mut raw) = duplex(64);
    let (_unused, reader) = duplex(64);
    let mut transport = PipeTransport::new(reader, writer);

    transport.send(Message::Guess(Guess::new(2, 5))).await?;
    let mut buf = [0u8; FRAME_LEN];
    raw.read_exact(&mut buf).await?;
    assert_eq!(&buf[..4], &2i32.to_ne_bytes());
    assert_eq!(&buf[4..], &5i32.to_ne_bytes());
    Ok(())
}

#[tokio::test]
async fn test_frame_split_across_writes() -> anyhow::Result<()> {
    let (mut raw, reader) = duplex(64);
    let (writer, _sink) = duplex(64);
    let mut transport = PipeTransport::new(reader, writer);

    let feeder = tokio::spawn(async move {
        raw.write_all(&1i32.to_ne_bytes()[..3]).await.unwrap();
        tokio::task::yield_now().await;
        let mut rest = vec![1i32.to_ne_bytes()[3]];
        rest.extend_from_slice(&3i32.to_ne_bytes());
        raw.write_all(&rest).await.unwrap();
        raw
    });

    assert_eq!(transport.recv().await?, Message::Guess(Guess::new(1, 3)));
    feeder.await?;
    Ok(())
}

#[tokio::test]
async fn test_eof_between_frames_is_channel_closed() {
    let (raw, reader) = duplex(64);
    let (writer, _sink) = duplex(64);
    let mut transport = PipeTransport::new(reader, writer);
    drop(raw);

    let err = transport.recv().await.unwrap_err();
    assert!(is_channel_closed(&err));
    assert_eq!(
        err.downcast_ref::<ProtocolError>(),
        Some(&ProtocolError::ChannelClosed { partial: 0 })
    );
}

#[tokio::test]
async fn test_truncated_frame_is_channel_closed() {
    let (mut raw, reader) = duplex(64);
    let (writer, _sink) = duplex(64);
    let mut transport = PipeTransport::new(reader, writer);

    raw.write_all(&[0u8; 5]).await.unwrap();
    drop(raw);

    let err = transport.recv().await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<ProtocolError>(),
        Some(&ProtocolError::ChannelClosed { partial: 5 })
    );
}

#[tokio::test]
async fn test_negative_coordinate_from_wire() {
    let (mut raw, reader) = duplex(64);
    let (writer, _sink) = duplex(64);
    let mut transport = PipeTransport::new(reader, writer);

    let mut bytes = (-3i32).to_ne_bytes().to_vec();
    bytes.extend_from_slice(&0i32.to_ne_bytes());
    raw.write_all(&bytes).await.unwrap();

    let err = transport.recv().await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<ProtocolError>(),
        Some(&ProtocolError::OutOfBounds { row: -3, col: 0 })
    );
}

#[tokio::test]
async fn test_write_after_reader_gone_is_channel_closed() {
    let (writer, raw) = duplex(64);
    let (_unused, reader) = duplex(64);
    let mut transport = PipeTransport::new(reader, writer);
    drop(raw);

    let err = transport.send(Message::Defeat).await.unwrap_err();
    assert!(is_channel_closed(&err));
}
