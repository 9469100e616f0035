//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.0 surface: each connection carries exactly
//! one request and one response, then closes. There is no keep-alive, no
//! header interpretation, and no body handling.
//!
//! # Architecture
//!
//! - **`connection`**: per-client flow, read → parse → resolve → respond
//! - **`parser`**: decodes the request line out of a single bounded read
//! - **`request`**: request-line representation and the method set
//! - **`response`**: status codes and fixed-message responses
//! - **`writer`**: serializes responses and streams file bodies
//!
//! # Connection lifecycle
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One bounded read of the request line
//!        └──────┬──────┘
//!               │ Request parsed
//!               ▼
//!        ┌──────────────────┐
//!        │    Resolving     │ ← Map the URL path under the document root
//!        └──────┬───────────┘
//!               │ Path accepted
//!               ▼
//!        ┌──────────────────┐
//!        │     Writing      │ ← Stream the file or a fixed error body
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!             Closed
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
