use std::io::ErrorKind;

use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::files::ResolvedPath;
use crate::http::response::{CONTENT_TYPE, Response, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.0";

/// Chunk size for streaming file bodies.
const FILE_CHUNK_SIZE: usize = 8192;

fn serialize_head(status: StatusCode, content_type: &str, content_length: u64) -> Vec<u8> {
    format!(
        "{HTTP_VERSION} {} {}\r\nContent-Type: {content_type}\r\nContent-Length: {content_length}\r\n\r\n",
        status.as_u16(),
        status.reason_phrase(),
    )
    .into_bytes()
}

/// Write a short fixed response and flush it.
pub async fn send_error<W>(stream: &mut W, status: StatusCode) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let response = Response::error(status);

    let mut buf = serialize_head(
        response.status,
        response.content_type,
        response.body.len() as u64,
    );
    buf.extend_from_slice(&response.body);

    stream.write_all(&buf).await?;
    stream.flush().await?;

    Ok(())
}

/// Stat, open and stream a file to the client.
///
/// `Content-Length` is committed from the stat size before the first body
/// byte is written; if the file changes size mid-stream the client sees a
/// truncated or over-long transfer.
///
/// For HEAD requests only the header block is written. Closing the stream
/// itself is the caller's responsibility; the file handle is released here.
pub async fn send_file<W>(
    stream: &mut W,
    path: &ResolvedPath,
    is_head: bool,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let meta = match tokio::fs::metadata(path.as_path()).await {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return send_error(stream, StatusCode::NotFound).await;
        }
        Err(_) => {
            return send_error(stream, StatusCode::InternalServerError).await;
        }
    };

    let mut file = match File::open(path.as_path()).await {
        Ok(file) => file,
        Err(_) => {
            return send_error(stream, StatusCode::PermissionDenied).await;
        }
    };

    let head = serialize_head(StatusCode::Ok, CONTENT_TYPE, meta.len());
    stream.write_all(&head).await?;

    if !is_head {
        stream_body(&mut file, stream).await?;
    }

    stream.flush().await?;

    Ok(())
}

async fn stream_body<R, W>(file: &mut R, stream: &mut W) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut chunk = [0u8; FILE_CHUNK_SIZE];

    loop {
        let n = file.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        stream.write_all(&chunk[..n]).await?;
    }

    Ok(())
}
