use bytes::{Buf, BytesMut};
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tokio::time::timeout;

use crate::config::{HANDLE_REQUEST_TIMEOUT, READ_REQUEST_TIMEOUT, WRITE_RESPONSE_TIMEOUT};
use crate::files::handler::StaticFileHandler;
use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::response::ConnectionDirective;
use crate::http::writer::ResponseWriter;

/// One client connection. Generic over the stream so the TLS-wrapped
/// socket slots in the same as a plain one in tests.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    handler: Arc<StaticFileHandler>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter, bool), // bool = keep_alive?
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, handler: Arc<StaticFileHandler>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            handler,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection until it closes.
    ///
    /// Each of the three phases runs under its own time limit; an expired
    /// limit errors out of here, dropping the connection without a response.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    let read = timeout(READ_REQUEST_TIMEOUT, self.read_request())
                        .await
                        .map_err(|_| anyhow::anyhow!("timed out waiting for next request"))??;

                    match read {
                        Some(req) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        None => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let requested_keep_alive = req.keep_alive();

                    let response = timeout(HANDLE_REQUEST_TIMEOUT, self.handler.handle(req))
                        .await
                        .map_err(|_| anyhow::anyhow!("request handling timed out"))?;

                    let keep_alive = requested_keep_alive
                        && response.directive != ConnectionDirective::Close;

                    let writer = ResponseWriter::new(response);
                    self.state = ConnectionState::Writing(writer, keep_alive);
                }

                ConnectionState::Writing(writer, keep_alive) => {
                    timeout(
                        WRITE_RESPONSE_TIMEOUT,
                        writer.write_to_stream(&mut self.stream),
                    )
                    .await
                    .map_err(|_| anyhow::anyhow!("timed out writing response"))??;

                    if *keep_alive {
                        self.state = ConnectionState::Reading; // go back for next request
                    } else {
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try parsing whatever we already have
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    // Remove consumed bytes
                    self.buffer.advance(consumed);
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    // Malformed request → protocol error
                    return Err(anyhow::anyhow!("HTTP parse error: {:?}", e));
                }
            }

            // Read more data
            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                // Client closed connection
                return Ok(None);
            }
        }
    }
}
