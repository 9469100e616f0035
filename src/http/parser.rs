use crate::http::request::Request;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The request line is not valid UTF-8.
    InvalidEncoding,
    /// Fewer than three whitespace-separated tokens on the request line.
    MissingTokens,
}

/// Decode the request line out of one raw read.
///
/// Exactly three tokens are extracted from the first line: method, path and
/// protocol version. Tokens past the third, and every line after the first,
/// are ignored. A request line that does not fit in the caller's single
/// read, or that arrives split across TCP segments, is not handled.
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    // Bound parsing to the first line so a binary payload after the
    // request line cannot fail UTF-8 validation.
    let line_end = buf
        .iter()
        .position(|&b| b == b'\n')
        .unwrap_or(buf.len());

    let line = std::str::from_utf8(&buf[..line_end])
        .map_err(|_| ParseError::InvalidEncoding)?;

    let mut tokens = line.split_whitespace();
    let method = tokens.next().ok_or(ParseError::MissingTokens)?;
    let path = tokens.next().ok_or(ParseError::MissingTokens)?;
    let version = tokens.next().ok_or(ParseError::MissingTokens)?;

    Ok(Request {
        method: method.to_string(),
        path: path.to_string(),
        version: version.to_string(),
    })
}
