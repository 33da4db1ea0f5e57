use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::response::{BodySource, Response};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Chunk size for streaming file bodies
const BUFFER_SIZE: usize = 8192;

/// Serializes the status line and headers, up to and including the blank
/// line that separates them from the body.
fn serialize_head(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers, in insertion order
    for (k, v) in &resp.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Writes a response to a stream: head first, then the body streamed in
/// chunks. The file handle inside a file body closes when the writer drops,
/// on success and on failure alike.
pub struct ResponseWriter {
    head: Vec<u8>,
    body: BodySource,
}

impl ResponseWriter {
    pub fn new(response: Response) -> Self {
        Self {
            head: serialize_head(&response),
            body: response.body,
        }
    }

    pub async fn write_to_stream<S>(&mut self, stream: &mut S) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        stream.write_all(&self.head).await?;

        if let BodySource::File { file, .. } = &mut self.body {
            let mut chunk = [0u8; BUFFER_SIZE];

            loop {
                let n = file.read(&mut chunk).await?;
                if n == 0 {
                    break;
                }
                stream.write_all(&chunk[..n]).await?;
            }
        }

        stream.flush().await?;
        Ok(())
    }
}
