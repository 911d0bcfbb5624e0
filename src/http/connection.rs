use std::sync::Arc;
use std::time::Duration;

use bytes::{Buf, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::app::App;
use crate::error::HttpError;
use crate::http::parser::{ParseLimits, RequestParser};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// One client connection, driven through a single request/response cycle.
///
/// Connections are never kept alive: after the response is flushed the
/// connection closes.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    parser: RequestParser,
    state: ConnectionState,
    app: Arc<App>,
    read_timeout: Option<Duration>,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, app: Arc<App>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            parser: RequestParser::default(),
            state: ConnectionState::Reading,
            app,
            read_timeout: None,
        }
    }

    pub fn with_read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Bounds on head and body size. Requests over them get 431 or 413.
    pub fn with_limits(mut self, limits: ParseLimits) -> Self {
        self.parser = RequestParser::new(limits);
        self
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.state = match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => match self.read_request().await? {
                    Ok(Some(req)) => ConnectionState::Processing(req),
                    Ok(None) => ConnectionState::Closed,
                    Err(response) => ConnectionState::Writing(ResponseWriter::new(&response)),
                },

                ConnectionState::Processing(req) => {
                    let response = self.dispatch(req).await;
                    ConnectionState::Writing(ResponseWriter::new(&response))
                }

                ConnectionState::Writing(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    /// Reads until one full request is buffered.
    ///
    /// `Ok(None)` means the client closed before sending a full request.
    /// A malformed or oversized request yields the error response to send
    /// back.
    pub async fn read_request(&mut self) -> anyhow::Result<Result<Option<Request>, Response>> {
        loop {
            // Try parsing whatever we already have
            match self.parser.parse(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.advance(consumed);
                    return Ok(Ok(Some(request)));
                }

                Err(e) if e.is_malformed() => {
                    tracing::warn!(error = %e, "Rejecting request");
                    return Ok(Err(HttpError::from(e).into_response()));
                }

                Err(_) => {
                    // Need more data → fall through to read
                }
            }

            let n = self.read_more().await?;

            if n == 0 {
                // Client closed connection
                return Ok(Ok(None));
            }
        }
    }

    async fn read_more(&mut self) -> anyhow::Result<usize> {
        let read = self.stream.read_buf(&mut self.buffer);
        let n = match self.read_timeout {
            Some(limit) => tokio::time::timeout(limit, read)
                .await
                .map_err(|_| anyhow::anyhow!("read timed out after {:?}", limit))??,
            None => read.await?,
        };
        Ok(n)
    }

    /// Runs routing and the controller off the async workers, since static
    /// resolution reads files with blocking calls.
    async fn dispatch(&self, req: Request) -> Response {
        let app = Arc::clone(&self.app);
        match tokio::task::spawn_blocking(move || app.handle(&req)).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "Request handler panicked");
                Response::internal_error()
            }
        }
    }
}
