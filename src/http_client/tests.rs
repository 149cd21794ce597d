use crate::http_client::reqwest::ReqwestHttpClient;
use crate::http_client::{ClientConfig, HttpClient, HttpResponse};
use crate::{Headers, HttpMethod, Request};
use httpmock::MockServer;
use std::time::Duration;
use url::Url;

fn request(method: HttpMethod, url: &str, headers: Headers, body: Option<&str>) -> Request {
    Request {
        method,
        url: Url::parse(url).unwrap(),
        headers,
        body: body.map(String::from),
    }
}

#[tokio::test]
async fn execute() {
    let body = "{\"result\": \"content\"}";

    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(httpmock::Method::POST)
                .path("/defaults")
                .body(body)
                .header("X-Custom-Header", "test_validate_verify")
                .header("Content-Type", "application/json");
            then.status(200).body("done");
        })
        .await;

    let headers = vec![
        ("Content-Type", "application/json"),
        ("X-Custom-Header", "test_validate_verify"),
    ]
    .into_iter()
    .collect();
    let client = ReqwestHttpClient::create(ClientConfig::default()).unwrap();
    let mut res = client
        .execute(request(
            HttpMethod::Post,
            &server.url("/defaults"),
            headers,
            Some(body),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(res.read_body().await.unwrap(), b"done".to_vec());
    mock.assert_async().await;
}

#[test]
fn headers_are_added_in_order() {
    let headers = vec![
        ("X-First", "1"),
        ("Accept", "application/json"),
        ("X-Second", "2"),
        ("Accept", "text/plain"),
    ]
    .into_iter()
    .collect();
    let client = ReqwestHttpClient::create(ClientConfig::default()).unwrap();

    let built = client
        .build(request(
            HttpMethod::Get,
            "http://localhost/ordered",
            headers,
            None,
        ))
        .unwrap();

    let names: Vec<&str> = built.headers().keys().map(|name| name.as_str()).collect();
    assert_eq!(vec!["x-first", "accept", "x-second"], names);
    let accept: Vec<&str> = built
        .headers()
        .get_all("accept")
        .iter()
        .map(|value| value.to_str().unwrap())
        .collect();
    assert_eq!(vec!["application/json", "text/plain"], accept);
}

#[test]
fn body_is_sent_without_content_type() {
    let client = ReqwestHttpClient::create(ClientConfig::default()).unwrap();

    let built = client
        .build(request(
            HttpMethod::Get,
            "http://localhost/search",
            Headers::new(),
            Some("{\"a\":1}"),
        ))
        .unwrap();

    assert_eq!(reqwest::Method::GET, *built.method());
    assert!(built.headers().get("content-type").is_none());
    let sent = built.body().and_then(|body| body.as_bytes()).unwrap();
    assert_eq!(b"{\"a\":1}", sent);
}

#[test]
fn missing_body_sends_no_payload() {
    let client = ReqwestHttpClient::create(ClientConfig::default()).unwrap();

    let built = client
        .build(request(
            HttpMethod::Post,
            "http://localhost/empty",
            Headers::new(),
            None,
        ))
        .unwrap();

    assert!(built.body().is_none());
}

#[tokio::test]
async fn invalid_header_name_is_malformed() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.path("/bad_header");
            then.status(200);
        })
        .await;

    let headers = vec![("Bad Header", "value")].into_iter().collect();
    let client = ReqwestHttpClient::create(ClientConfig::default()).unwrap();
    let err = client
        .execute(request(
            HttpMethod::Get,
            &server.url("/bad_header"),
            headers,
            None,
        ))
        .await
        .unwrap_err();

    assert!(err.is_malformed_request());
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn slow_peer_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/slow");
            then.status(200).delay(Duration::from_secs(5));
        })
        .await;

    let config = ClientConfig::default().timeout(Duration::from_millis(200));
    let client = ReqwestHttpClient::create(config).unwrap();
    let err = client
        .execute(request(
            HttpMethod::Get,
            &server.url("/slow"),
            Headers::new(),
            None,
        ))
        .await
        .unwrap_err();

    assert!(err.is_transport());
}

#[test]
fn config_defaults() {
    let config = ClientConfig::default();
    assert!(config.ssl_check);
    assert_eq!(Duration::from_secs(30), config.timeout);
    assert_eq!(Duration::from_secs(10), config.connect_timeout);

    let config = ClientConfig::new(false).connect_timeout(Duration::from_secs(1));
    assert!(!config.ssl_check);
    assert_eq!(Duration::from_secs(30), config.timeout);
    assert_eq!(Duration::from_secs(1), config.connect_timeout);
}
