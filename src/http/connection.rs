use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::files::{self, ResolveError};
use crate::http::parser;
use crate::http::request::Method;
use crate::http::response::StatusCode;
use crate::http::writer;

/// Upper bound on the single request read. A request line that does not
/// fit in one read of this size is answered as malformed.
const REQUEST_BUFFER_SIZE: usize = 1024;

/// One accepted client connection and its private read buffer.
///
/// The connection is owned exclusively by its worker task and closes when
/// that task drops it, on every exit path.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
}

impl Connection {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(REQUEST_BUFFER_SIZE),
        }
    }

    /// Serve exactly one request, then let the stream drop.
    ///
    /// A failed or empty initial read is a transport fault and gets no
    /// response. Every error the server itself detects is answered with a
    /// well-formed HTTP response before the connection closes.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let n = match self.stream.read_buf(&mut self.buffer).await {
            Ok(n) => n,
            Err(e) => {
                tracing::debug!(error = %e, "Client read failed");
                return Ok(());
            }
        };

        if n == 0 {
            tracing::debug!("Client disconnected before sending a request");
            return Ok(());
        }

        let request = match parser::parse_request_line(&self.buffer) {
            Ok(request) => request,
            Err(_) => {
                return writer::send_error(&mut self.stream, StatusCode::BadRequest).await;
            }
        };

        tracing::debug!(method = %request.method, path = %request.path, "Request");

        // Traversal is rejected before the method is looked at.
        let resolved = match files::resolve(&request.path) {
            Ok(resolved) => resolved,
            Err(ResolveError::Traversal) => {
                return writer::send_error(&mut self.stream, StatusCode::PermissionDenied)
                    .await;
            }
        };

        match Method::from_str(&request.method) {
            Some(method) if method.is_supported() => {
                let is_head = method == Method::HEAD;
                writer::send_file(&mut self.stream, &resolved, is_head).await
            }
            _ => writer::send_error(&mut self.stream, StatusCode::NotImplemented).await,
        }
    }
}
