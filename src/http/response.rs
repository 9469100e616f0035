/// Content type attached to every response.
///
/// The server does no MIME negotiation; files and error bodies alike are
/// labelled with this fixed default.
pub const CONTENT_TYPE: &str = "text/html";

/// HTTP status codes the server can produce.
///
/// - `Ok` (200): File served
/// - `BadRequest` (400): Unparsable request line
/// - `PermissionDenied` (403): Traversal attempt or open failure
/// - `NotFound` (404): No such file
/// - `InternalServerError` (500): Unexpected stat failure
/// - `NotImplemented` (501): Method other than GET/HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Permission Denied
    PermissionDenied,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::PermissionDenied => 403,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the reason phrase emitted on the status line.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::PermissionDenied => "Permission Denied",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }

    /// Looks up a status by numeric code; anything unrecognized collapses
    /// to 500.
    pub fn from_u16(code: u16) -> Self {
        match code {
            200 => StatusCode::Ok,
            400 => StatusCode::BadRequest,
            403 => StatusCode::PermissionDenied,
            404 => StatusCode::NotFound,
            501 => StatusCode::NotImplemented,
            _ => StatusCode::InternalServerError,
        }
    }
}

/// A fully-buffered response.
///
/// File bodies never pass through here; the writer streams them straight
/// from disk. `Response` covers the short fixed-message replies.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Response {
    /// An error reply whose body is the status reason phrase.
    pub fn error(status: StatusCode) -> Self {
        Self {
            status,
            content_type: CONTENT_TYPE,
            body: status.reason_phrase().as_bytes().to_vec(),
        }
    }
}
