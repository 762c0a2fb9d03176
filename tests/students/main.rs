//! Student registry integration tests.


#[cfg(feature = "http")]
mod transport_http;
