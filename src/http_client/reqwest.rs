use crate::http_client::{ClientConfig, HttpClient, HttpResponse};
use crate::{Error, Request, Result};
use log::trace;
use reqwest::{Client, RequestBuilder};
use std::future::Future;

/// Transport backed by a single `reqwest::Client`.
///
/// Cloning is cheap and every clone shares the same connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn create(config: ClientConfig) -> Result<ReqwestHttpClient> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!config.ssl_check)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| Error::Transport(Box::new(e)))?;

        Ok(ReqwestHttpClient { client })
    }

    pub(crate) fn build(&self, request: Request) -> Result<reqwest::Request> {
        let Request {
            method,
            url,
            headers,
            body,
        } = request;
        let mut request_builder = self.client.request(method.into(), url);
        request_builder = set_headers(headers, request_builder);
        if let Some(body) = body {
            request_builder = request_builder.body(body);
        }
        request_builder.build().map_err(into_error)
    }
}

impl HttpClient for ReqwestHttpClient {
    type Response = ReqwestResponse;

    fn execute(&self, request: Request) -> impl Future<Output = Result<Self::Response>> + Send {
        let built = self.build(request);
        async move {
            let request = built?;
            trace!("sending {} header(s)", request.headers().len());
            let response = self.client.execute(request).await.map_err(into_error)?;
            Ok(ReqwestResponse(response))
        }
    }
}

#[derive(Debug)]
pub struct ReqwestResponse(reqwest::Response);

impl HttpResponse for ReqwestResponse {
    fn status(&self) -> u16 {
        self.0.status().as_u16()
    }

    fn read_body(&mut self) -> impl Future<Output = Result<Vec<u8>>> + Send {
        async move {
            let mut body = Vec::new();
            while let Some(chunk) = self.0.chunk().await.map_err(into_error)? {
                body.extend_from_slice(&chunk);
            }
            Ok(body)
        }
    }
}

fn set_headers(
    headers: impl IntoIterator<Item = (String, String)>,
    mut request_builder: RequestBuilder,
) -> RequestBuilder {
    for (key, value) in headers {
        request_builder = request_builder.header(key, value);
    }
    request_builder
}

fn into_error(err: reqwest::Error) -> Error {
    if err.is_builder() {
        Error::MalformedRequest(err.to_string())
    } else if err.is_decode() {
        Error::Decode(Box::new(err))
    } else {
        Error::Transport(Box::new(err))
    }
}
