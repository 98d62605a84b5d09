//! Browser-facing implementations: HTTP transport, console logging, canvas drawing.

pub mod http;
pub mod rendering;
pub mod services;
