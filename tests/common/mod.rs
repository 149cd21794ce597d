use http_fetch::http_client::reqwest::ReqwestHttpClient;
use http_fetch::{ClientConfig, Fetcher};
use std::net::TcpListener;

pub fn fetcher() -> Fetcher<ReqwestHttpClient> {
    fetcher_with(ClientConfig::default())
}

pub fn fetcher_with(config: ClientConfig) -> Fetcher<ReqwestHttpClient> {
    let _ = env_logger::builder().is_test(true).try_init();
    Fetcher::new(ReqwestHttpClient::create(config).unwrap())
}

/// A local port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}
