use crate::{Request, Result};
use std::future::Future;
use std::time::Duration;

#[cfg(test)]
mod tests;

pub mod reqwest;

/// Settings for building a transport. Fixed once the transport exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub ssl_check: bool,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            ssl_check: true,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    pub fn new(ssl_check: bool) -> Self {
        Self {
            ssl_check,
            ..Self::default()
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
}

/// The transport a [`Fetcher`](crate::Fetcher) submits requests through.
///
/// Implementations are shared by every call and must not keep per-request
/// state.
pub trait HttpClient: Send + Sync {
    type Response: HttpResponse;

    fn execute(&self, request: Request) -> impl Future<Output = Result<Self::Response>> + Send;
}

/// A response whose entity has not been read yet.
///
/// Holding one keeps the underlying connection resource open; dropping it
/// releases that resource.
pub trait HttpResponse: Send {
    fn status(&self) -> u16;

    /// Reads the remaining entity into memory.
    fn read_body(&mut self) -> impl Future<Output = Result<Vec<u8>>> + Send;
}
