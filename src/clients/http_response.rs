//! HTTP response type for the BrickLink API client.

/// An HTTP response from the BrickLink API.
///
/// The body has already been parsed as JSON; interpreting the
/// `{meta, data}` envelope is left to the REST layer.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, body: serde_json::Value) -> Self {
        Self { code, body }
    }
}
