use crate::http::request::{Method, Request};
use std::collections::HashMap;
use thiserror::Error;

/// Default upper bound on the start line plus headers, terminator included.
pub const DEFAULT_MAX_HEAD_BYTES: usize = 8 * 1024;
/// Default upper bound on a request body.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("start line must be `METHOD SP target SP VERSION`")]
    MalformedStartLine,
    #[error("header line without `: ` separator")]
    MalformedHeader,
    #[error("request head is not valid UTF-8")]
    InvalidEncoding,
    #[error("request head exceeds {0} bytes")]
    HeadTooLarge(usize),
    #[error("request body of {length} bytes exceeds {limit} bytes")]
    BodyTooLarge { length: usize, limit: usize },
    #[error("request is incomplete")]
    Incomplete,
}

impl ParseError {
    /// Whether this error means the bytes are wrong rather than not there yet.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, ParseError::Incomplete)
    }
}

/// Size bounds applied while a request is buffered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    pub max_head_bytes: usize,
    pub max_body_bytes: usize,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            max_head_bytes: DEFAULT_MAX_HEAD_BYTES,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Incremental parser for one request arriving over several reads.
///
/// Remembers how far the head terminator search got, and keeps the parsed
/// head while the body is still arriving, so each byte is looked at once
/// however the input is split.
#[derive(Debug, Default)]
pub struct RequestParser {
    limits: ParseLimits,
    scanned: usize,
    head: Option<(Request, usize)>,
}

impl RequestParser {
    pub fn new(limits: ParseLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Parses one request from the front of `buf`.
    ///
    /// `buf` must only grow between calls. On success returns the request and
    /// the number of bytes it occupied, so the caller can drain them.
    /// `ParseError::Incomplete` asks for more input.
    pub fn parse(&mut self, buf: &[u8]) -> Result<(Request, usize), ParseError> {
        if self.head.is_none() {
            self.head = Some(self.find_head(buf)?);
        }
        let Some((request, head_len)) = &self.head else {
            return Err(ParseError::Incomplete);
        };
        let head_len = *head_len;

        // Body. A missing or unparsable Content-Length means no body.
        let content_length = request.content_length();
        if content_length > self.limits.max_body_bytes {
            return Err(ParseError::BodyTooLarge {
                length: content_length,
                limit: self.limits.max_body_bytes,
            });
        }

        let body_bytes = &buf[head_len..];
        if body_bytes.len() < content_length {
            return Err(ParseError::Incomplete);
        }

        let Some((mut request, _)) = self.head.take() else {
            return Err(ParseError::Incomplete);
        };
        request.body = body_bytes[..content_length].to_vec();
        self.scanned = 0;

        Ok((request, head_len + content_length))
    }

    /// Finds and parses the head, returning it with its length in bytes
    /// including the terminator.
    fn find_head(&mut self, buf: &[u8]) -> Result<(Request, usize), ParseError> {
        let Some(headers_end) = find_headers_end(buf, self.scanned) else {
            // A terminator may straddle this read and the next one.
            self.scanned = buf.len().saturating_sub(HEAD_TERMINATOR.len() - 1);
            if buf.len() > self.limits.max_head_bytes {
                return Err(ParseError::HeadTooLarge(self.limits.max_head_bytes));
            }
            return Err(ParseError::Incomplete);
        };
        self.scanned = headers_end;

        let head_len = headers_end + HEAD_TERMINATOR.len();
        if head_len > self.limits.max_head_bytes {
            return Err(ParseError::HeadTooLarge(self.limits.max_head_bytes));
        }

        Ok((parse_head(&buf[..headers_end])?, head_len))
    }
}

/// Parses one complete request from the front of `buf` with default limits.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    RequestParser::default().parse(buf)
}

fn parse_head(header_bytes: &[u8]) -> Result<Request, ParseError> {
    let headers_str = std::str::from_utf8(header_bytes)
        .map_err(|_| ParseError::InvalidEncoding)?;

    let mut lines = headers_str.split("\r\n");

    // Request line
    let request_line = lines.next().ok_or(ParseError::MalformedStartLine)?;
    let (method, target, version) = parse_start_line(request_line)?;
    let (path, query) = split_target(target);

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        let (key, value) = line
            .split_once(": ")
            .ok_or(ParseError::MalformedHeader)?;

        if key.is_empty() {
            return Err(ParseError::MalformedHeader);
        }

        headers.insert(key.to_string(), value.trim().to_string());
    }

    Ok(Request {
        method,
        path,
        query,
        version: version.to_string(),
        headers,
        body: Vec::new(),
    })
}

fn parse_start_line(line: &str) -> Result<(Method, &str, &str), ParseError> {
    let mut parts = line.split(' ');

    let (Some(method), Some(target), Some(version), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(ParseError::MalformedStartLine);
    };

    if method.is_empty() || target.is_empty() || version.is_empty() {
        return Err(ParseError::MalformedStartLine);
    }

    Ok((Method::from_token(method), target, version))
}

/// Splits a request-target on the first `?` into path and query map.
pub fn split_target(target: &str) -> (String, HashMap<String, String>) {
    match target.split_once('?') {
        Some((path, query)) => (path.to_string(), parse_query(query)),
        None => (target.to_string(), HashMap::new()),
    }
}

/// Parses `k=v&k2=v2`.
///
/// Each segment splits on its first `=`. Segments without `=` (including
/// empty ones) are dropped. Later duplicate keys overwrite earlier ones.
/// Values are kept as sent, without percent-decoding.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter_map(|segment| segment.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Position of the head terminator, searching from `from` onwards.
fn find_headers_end(buf: &[u8], from: usize) -> Option<usize> {
    buf.get(from..)?
        .windows(HEAD_TERMINATOR.len())
        .position(|w| w == HEAD_TERMINATOR)
        .map(|pos| from + pos)
}
