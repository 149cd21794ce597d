pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every way a fetch can fail.
///
/// The variants stay distinct all the way to the caller. A successful
/// exchange with an empty entity is not an error; see
/// [`ResponseBody::NoBody`](crate::ResponseBody::NoBody).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be assembled: bad URL, unsupported scheme,
    /// unknown method name, or a header the transport refuses.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// The exchange with the peer failed (DNS, refused connection, TLS,
    /// timeout, or the connection dropped while reading the body).
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    /// The response entity could not be decoded as text.
    #[error("Could not decode response body: {0}")]
    Decode(#[source] BoxError),
}

impl Error {
    pub fn is_malformed_request(&self) -> bool {
        matches!(self, Error::MalformedRequest(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::MalformedRequest(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Decode(Box::new(err))
    }
}
