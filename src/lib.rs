//! staticd - Minimal HTTP/1.0 Static File Server
//!
//! Core library for the request-handling pipeline: accept, parse, resolve,
//! respond.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
