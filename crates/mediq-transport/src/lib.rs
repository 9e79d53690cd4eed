//! MedIQ Transport - HTTP client for the AI operations
//!
//! Implements `mediq_core::Transport` over `reqwest`: one JSON POST per
//! call to `<base_url>/<operation>`, response `data` unwrapped, every
//! failure classified as network or remote.

pub mod http;

pub use http::HttpTransport;
