use crate::model::{Headers, HttpMethod, RequestDescriptor};


/// Per-request configuration, passed by value to
/// [`Fetcher::fetch_with`](crate::Fetcher::fetch_with).
///
/// Everything is optional. An untouched config resolves to a `GET` with no
/// headers and no body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchConfig {
    pub method: Option<HttpMethod>,
    pub headers: Headers,
    pub body: Option<String>,
}

impl FetchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` falls back to `GET`.
    pub fn method(mut self, method: impl Into<Option<HttpMethod>>) -> Self {
        self.method = method.into();
        self
    }

    /// Replaces the header list with whatever `build` leaves in a fresh
    /// [`HeaderBuilder`].
    pub fn headers<F>(mut self, build: F) -> Self
    where
        F: FnOnce(&mut HeaderBuilder),
    {
        let mut builder = HeaderBuilder::default();
        build(&mut builder);
        self.headers = builder.build();
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn without_body(mut self) -> Self {
        self.body = None;
        self
    }
}

impl From<FetchConfig> for RequestDescriptor {
    fn from(config: FetchConfig) -> Self {
        let FetchConfig {
            method,
            headers,
            body,
        } = config;
        RequestDescriptor {
            method: method.unwrap_or_default(),
            headers,
            body: body.as_deref().map(trim_indent),
        }
    }
}

#[derive(Debug, Default)]
pub struct HeaderBuilder {
    headers: Headers,
}

impl HeaderBuilder {
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.append(name, value);
        self
    }

    fn build(self) -> Headers {
        self.headers
    }
}

/// Strips the indentation shared by every non-blank line.
///
/// A blank first or last line is dropped, so a body written as an indented
/// multi-line literal comes out flush left without the surrounding newlines.
/// Blank lines do not count towards the common indent.
pub fn trim_indent(text: &str) -> String {
    let mut lines: Vec<&str> = text.lines().collect();
    // `lines` drops a single trailing newline; put the empty last line back
    if text.ends_with('\n') {
        lines.push("");
    }

    if lines.last().map_or(false, |line| is_blank(line)) {
        lines.pop();
    }
    if lines.first().map_or(false, |line| is_blank(line)) {
        lines.remove(0);
    }

    let indent = lines
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| {
            let cut = line
                .char_indices()
                .nth(indent)
                .map_or(line.len(), |(idx, _)| idx);
            &line[cut..]
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}
