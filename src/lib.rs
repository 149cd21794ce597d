//! # http-fetch
//!
//! A minimal asynchronous HTTP fetch core. A request is declared as a
//! [`FetchConfig`] value, resolved into an immutable [`RequestDescriptor`],
//! and executed by a [`Fetcher`] against a transport handle that is created
//! once and injected.
//!
//! The response is owned by the executor for exactly as long as it takes to
//! read the entity. It is released before the body is decoded or returned,
//! and it is also released on a read error, a panic, or when the calling
//! future is dropped.
//!
//! ## Usage
//!
//! ```no_run
//! use http_fetch::http_client::reqwest::ReqwestHttpClient;
//! use http_fetch::{ClientConfig, FetchConfig, Fetcher, HttpMethod, ResponseBody};
//!
//! # async fn run() -> http_fetch::Result<()> {
//! let fetcher = Fetcher::new(ReqwestHttpClient::create(ClientConfig::default())?);
//!
//! let items = fetcher.fetch("https://api.example.com/items").await?;
//!
//! let created = fetcher
//!     .fetch_with(
//!         "https://api.example.com/items",
//!         FetchConfig::new()
//!             .method(HttpMethod::Post)
//!             .headers(|h| {
//!                 h.append("Content-Type", "application/json");
//!             })
//!             .body(r#"{"a":1}"#),
//!     )
//!     .await?;
//!
//! if let ResponseBody::NoBody = created {
//!     println!("created, nothing returned");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every failure is one of three [`Error`] variants: a malformed request,
//! a transport failure, or a body that does not decode as text. None of
//! them is retried and none of them is folded into
//! [`ResponseBody::NoBody`].

pub mod config;
pub mod error;
pub mod executor;
pub mod http_client;
pub mod model;
pub mod output;

pub use config::{trim_indent, FetchConfig, HeaderBuilder};
pub use error::{BoxError, Error};
pub use executor::Fetcher;
pub use http_client::{ClientConfig, HttpClient, HttpResponse};
pub use model::{Headers, HttpMethod, Request, RequestDescriptor, ResponseBody};

pub type Result<T> = std::result::Result<T, Error>;
