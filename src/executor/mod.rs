use crate::http_client::{HttpClient, HttpResponse};
use crate::{Error, FetchConfig, Request, RequestDescriptor, ResponseBody, Result};
use log::{debug, warn};
use url::Url;


/// Runs requests against a transport handed in at construction.
///
/// Clone it to share the transport between tasks; calls never see each
/// other's requests or responses.
#[derive(Debug, Clone)]
pub struct Fetcher<C> {
    client: C,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C) -> Self {
        Fetcher { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// `GET`s `url` with no headers and no body.
    pub async fn fetch(&self, url: &str) -> Result<ResponseBody> {
        self.fetch_with(url, FetchConfig::default()).await
    }

    pub async fn fetch_with(&self, url: &str, config: FetchConfig) -> Result<ResponseBody> {
        let descriptor = RequestDescriptor::from(config);
        let request = Request::new(parse_url(url)?, descriptor);
        debug!("{}", request);

        let mut response = self
            .client
            .execute(request)
            .await
            .map_err(|err| log_failure(url, err))?;
        let status = response.status();
        let read = response.read_body().await;
        // the connection goes back before anything else happens to the body
        drop(response);

        let body = read.map_err(|err| log_failure(url, err))?;
        debug!("{} answered {} with {} byte(s)", url, status, body.len());
        Ok(ResponseBody::from_text(String::from_utf8(body)?))
    }
}

fn log_failure(url: &str, err: Error) -> Error {
    if err.is_transport() {
        warn!("{} failed: {}", url, err);
    }
    err
}

fn parse_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url)?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(Error::MalformedRequest(format!(
            "Unsupported URL scheme '{}' in {}",
            scheme, url
        ))),
    }
}
