/// HTTP request methods.
///
/// The server serves GET and HEAD. The remaining verbs are recognized but
/// answered with 501 Not Implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
}

/// A parsed request line.
///
/// Only the first line of a request is ever consulted; headers and any body
/// bytes that arrived in the same read are ignored. All three fields are
/// non-empty whitespace-separated tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The method token, exactly as sent (e.g. "GET")
    pub method: String,
    /// The request path (e.g. "/index.html")
    pub path: String,
    /// The protocol token (e.g. "HTTP/1.0"), validated but not interpreted
    pub version: String,
}

impl Method {
    /// Parses an HTTP method from a token.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "HEAD" => Some(Method::HEAD),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }

    /// Whether the server serves this method at all.
    pub fn is_supported(&self) -> bool {
        matches!(self, Method::GET | Method::HEAD)
    }
}
