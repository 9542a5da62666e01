//! Protocol implementations for portal probing.
//!
//! Only HTTP is needed today; the `Transport` trait is the seam that lets
//! tests swap in fake transports.

/// HTTP GET probes
pub mod http;

// Re-export commonly used types
pub use http::{HttpTransport, Transport};
