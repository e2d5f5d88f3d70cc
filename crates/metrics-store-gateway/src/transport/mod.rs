//! Transport layer (HTTP).
//!
//! Method dispatch, content-type and size guards, and response formatting for
//! the `/metrics` route. Decoding and storage live in the services layer.

pub mod http;
