use tokio::fs::File;

/// HTTP status codes the server produces.
///
/// - `Ok` (200): File found, body streamed back
/// - `Forbidden` (403): Request path carried a traversal marker
/// - `NotFound` (404): File missing or unreadable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use bastion::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// Where the response body comes from.
///
/// A file body hands the open handle to the writer, which streams it and
/// closes it on drop. Error responses carry no body.
#[derive(Debug)]
pub enum BodySource {
    /// No body
    Empty,
    /// Stream the contents of an already-opened file
    File {
        /// Open handle, positioned at the start
        file: File,
        /// File length in bytes, used for Content-Length
        len: u64,
    },
}

impl BodySource {
    /// Body length in bytes, as advertised in Content-Length.
    pub fn len(&self) -> u64 {
        match self {
            BodySource::Empty => 0,
            BodySource::File { len, .. } => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What the connection should do once the response is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionDirective {
    /// Leave the decision to the connection (the client's keep-alive preference)
    Default,
    /// Close the connection after this response
    Close,
}

/// Represents a complete HTTP response ready to be sent to a client.
///
/// Headers keep their insertion order; names are matched case-insensitively.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers in insertion order
    pub headers: Vec<(String, String)>,
    /// Response body
    pub body: BodySource,
    /// Connection handling after the response is written
    pub directive: ConnectionDirective,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/html")
///     .body(BodySource::File { file, len })
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: BodySource,
    directive: ConnectionDirective,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: BodySource::Empty,
            directive: ConnectionDirective::Default,
        }
    }

    /// Appends a header, preserving insertion order.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: BodySource) -> Self {
        self.body = body;
        self
    }

    /// Marks the connection for closing once the response is written.
    pub fn close(mut self) -> Self {
        self.directive = ConnectionDirective::Close;
        self
    }

    /// Builds the final Response.
    ///
    /// Appends a Content-Length header based on the body unless one was
    /// already set.
    pub fn build(mut self) -> Response {
        let has_content_length = self
            .headers
            .iter()
            .any(|(key, _)| key.eq_ignore_ascii_case("Content-Length"));

        if !has_content_length {
            self.headers
                .push(("Content-Length".to_string(), self.body.len().to_string()));
        }

        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
            directive: self.directive,
        }
    }
}

impl Response {
    /// Creates a 403 Forbidden response carrying only a Date header.
    /// The connection closes after it is written.
    pub fn forbidden() -> Self {
        ResponseBuilder::new(StatusCode::Forbidden)
            .header(
                "Date",
                httpdate::fmt_http_date(std::time::SystemTime::now()),
            )
            .close()
            .build()
    }

    /// Creates a 404 Not Found response carrying only a Date header.
    /// The connection closes after it is written.
    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound)
            .header(
                "Date",
                httpdate::fmt_http_date(std::time::SystemTime::now()),
            )
            .close()
            .build()
    }

    /// Retrieves the first header with the given name, case-insensitively.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
