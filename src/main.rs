//! # http-fetch
//!
//! Command-line front end for the `http_fetch` library: one request per
//! invocation, body on stdout.
//!
//! ```text,no_run
//! $ http-fetch https://httpbin.org/get
//! $ http-fetch -X POST -H 'Content-Type: application/json' -d '{"a":1}' https://httpbin.org/post
//! $ http-fetch -p https://httpbin.org/json
//! ```
//!
//! A response with an empty entity prints `<no body>`. Set `RUST_LOG=debug`
//! to see the request line and status on stderr.

use anyhow::{anyhow, Context, Result};
use clap::{App, Arg};
use http_fetch::http_client::reqwest::ReqwestHttpClient;
use http_fetch::output::render;
use http_fetch::{ClientConfig, FetchConfig, Fetcher, HttpMethod};
use std::time::Duration;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let matches = App::new("http-fetch")
        .version(VERSION)
        .about("Fetches a URL and prints the response body")
        .arg(
            Arg::with_name("METHOD")
                .short("X")
                .long("request")
                .takes_value(true)
                .possible_values(&["GET", "POST", "PUT", "DELETE"])
                .case_insensitive(true)
                .default_value("GET")
                .help("The HTTP method to use"),
        )
        .arg(
            Arg::with_name("HEADER")
                .short("H")
                .long("header")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .validator(is_valid_header)
                .help("A header in the form 'Name: value', sent in the order given"),
        )
        .arg(
            Arg::with_name("DATA")
                .short("d")
                .long("data")
                .takes_value(true)
                .help("The request body, sent as-is after stripping common indentation"),
        )
        .arg(
            Arg::with_name("TIMEOUT")
                .short("t")
                .long("timeout")
                .takes_value(true)
                .default_value("30")
                .validator(is_valid_timeout)
                .help("Seconds to wait for the whole exchange"),
        )
        .arg(
            Arg::with_name("ACCEPT_INVALID_CERT")
                .short("k")
                .long("danger-accept-invalid-certs")
                .help("Controls the use of certificate validation."),
        )
        .arg(
            Arg::with_name("PRETTY")
                .short("p")
                .long("pretty")
                .help("Pretty-print JSON object and array bodies"),
        )
        .arg(Arg::with_name("URL").required(true).index(1))
        .usage("http-fetch [OPTIONS] <URL>")
        .get_matches();

    let url = matches.value_of("URL").unwrap();
    let method: HttpMethod = matches.value_of("METHOD").unwrap().parse()?;
    let timeout: u64 = matches.value_of("TIMEOUT").unwrap().parse()?;
    let ignore_certificates = matches.is_present("ACCEPT_INVALID_CERT");
    let pretty = matches.is_present("PRETTY");

    let mut config = FetchConfig::new().method(method);
    for header in matches.values_of("HEADER").into_iter().flatten() {
        let (name, value) = split_header(header)?;
        config = config.header(name, value);
    }
    if let Some(data) = matches.value_of("DATA") {
        config = config.body(data);
    }

    let client_config =
        ClientConfig::new(!ignore_certificates).timeout(Duration::from_secs(timeout));
    let client =
        ReqwestHttpClient::create(client_config).with_context(|| "Failed creating HTTP client")?;
    let fetcher = Fetcher::new(client);

    let body = fetcher
        .fetch_with(url, config)
        .await
        .with_context(|| format!("Error fetching {}", url))?;

    println!("{}", render(&body, pretty));

    Ok(())
}

fn split_header(header: &str) -> Result<(&str, &str)> {
    header
        .split_once(':')
        .map(|(name, value)| (name.trim(), value.trim()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| anyhow!("Header '{}' is not in the form 'Name: value'", header))
}

fn is_valid_header(val: String) -> Result<(), String> {
    split_header(&val).map(|_| ()).map_err(|e| e.to_string())
}

fn is_valid_timeout(val: String) -> Result<(), String> {
    match val.parse::<u64>() {
        Ok(0) => Err(String::from("Timeout must be at least one second")),
        Ok(_) => Ok(()),
        Err(_) => Err(String::from("Timeout is not a valid integer")),
    }
}
