//! Synchronous HTTP transport behind a trait, so tests can inject fakes.

/// The request method of an HTTP builtin call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// `http_get`
    Get,
    /// `http_post`
    Post,
}

/// The observable outcome of an HTTP request.
///
/// Transport failures and non-success statuses both surface as
/// `status_ok: false`; the interpreter does not distinguish them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Whether the request succeeded.
    pub status_ok: bool,
    /// The response body, empty on failure.
    pub body: String,
}

/// A synchronous HTTP capability.
///
/// `perform` blocks until the request completes and never panics; every
/// failure mode is reported through [`HttpResponse::status_ok`].
pub trait HttpClient {
    /// Performs one request. `body` is only meaningful for POST.
    fn perform(&self, method: HttpMethod, url: &str, body: Option<&str>) -> HttpResponse;
}

/// The production [`HttpClient`], backed by a [`ureq::Agent`].
pub struct UreqClient {
    agent: ureq::Agent,
}

impl Default for UreqClient {
    fn default() -> Self {
        Self {
            agent: ureq::Agent::new(),
        }
    }
}

impl HttpClient for UreqClient {
    fn perform(&self, method: HttpMethod, url: &str, body: Option<&str>) -> HttpResponse {
        let result = match method {
            HttpMethod::Get => self.agent.get(url).call(),
            HttpMethod::Post => self.agent.post(url).send_string(body.unwrap_or("")),
        };

        match result.map(ureq::Response::into_string) {
            Ok(Ok(body)) => HttpResponse {
                status_ok: true,
                body,
            },
            _ => HttpResponse {
                status_ok: false,
                body: String::new(),
            },
        }
    }
}
