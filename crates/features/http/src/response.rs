use hdesign_domain::Expression;
use hdesign_domain::attribute::{AttributeExpr, AttributeMapExpr};
use hdesign_domain::constants::ERROR_MEDIA;
use std::borrow::Cow;

/// A named HTTP response definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponseExpr {
    pub name: String,
    pub status: u16,
    pub description: Option<String>,
    pub headers: AttributeMapExpr,
    pub content_type: Option<String>,
}

impl HttpResponseExpr {
    pub fn new(name: impl Into<String>, status: u16) -> Self {
        Self {
            name: name.into(),
            status,
            description: None,
            headers: AttributeMapExpr::new(),
            content_type: None,
        }
    }

    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, attr: AttributeExpr) -> Self {
        self.headers.insert(name, attr);
        self
    }

    #[must_use]
    pub fn content_type(mut self, mime: impl Into<String>) -> Self {
        self.content_type = Some(mime.into());
        self
    }

    /// Whether the status is a client or server error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.status >= 400
    }
}

impl Expression for HttpResponseExpr {
    fn eval_name(&self) -> Cow<'static, str> {
        format!("response {:?}", self.name).into()
    }
}

/// Name and status of every built-in response.
const BUILTIN: &[(&str, u16)] = &[
    ("Continue", 100),
    ("SwitchingProtocols", 101),
    ("OK", 200),
    ("Created", 201),
    ("Accepted", 202),
    ("NonAuthoritativeInfo", 203),
    ("NoContent", 204),
    ("ResetContent", 205),
    ("PartialContent", 206),
    ("MultipleChoices", 300),
    ("MovedPermanently", 301),
    ("Found", 302),
    ("SeeOther", 303),
    ("NotModified", 304),
    ("UseProxy", 305),
    ("TemporaryRedirect", 307),
    ("BadRequest", 400),
    ("Unauthorized", 401),
    ("PaymentRequired", 402),
    ("Forbidden", 403),
    ("NotFound", 404),
    ("MethodNotAllowed", 405),
    ("NotAcceptable", 406),
    ("ProxyAuthRequired", 407),
    ("RequestTimeout", 408),
    ("Conflict", 409),
    ("Gone", 410),
    ("LengthRequired", 411),
    ("PreconditionFailed", 412),
    ("RequestEntityTooLarge", 413),
    ("RequestURITooLong", 414),
    ("UnsupportedMediaType", 415),
    ("RequestedRangeNotSatisfiable", 416),
    ("ExpectationFailed", 417),
    ("Teapot", 418),
    ("UnprocessableEntity", 422),
    ("InternalServerError", 500),
    ("NotImplemented", 501),
    ("BadGateway", 502),
    ("ServiceUnavailable", 503),
    ("GatewayTimeout", 504),
    ("HTTPVersionNotSupported", 505),
];

/// Builds the framework-provided default responses, ordered by status.
///
/// Error statuses are bound to the built-in error media type.
#[must_use]
pub fn builtin_responses() -> Vec<HttpResponseExpr> {
    BUILTIN
        .iter()
        .map(|&(name, status)| {
            let resp = HttpResponseExpr::new(name, status);
            if resp.is_error() { resp.content_type(ERROR_MEDIA) } else { resp }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_unique_and_sorted() {
        let builtins = builtin_responses();
        assert!(builtins.windows(2).all(|w| w[0].status < w[1].status));

        let mut names: Vec<_> = builtins.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), builtins.len());
    }

    #[test]
    fn error_builtins_use_error_media() {
        let builtins = builtin_responses();
        let not_found = builtins.iter().find(|r| r.name == "NotFound").expect("NotFound builtin");
        assert_eq!(not_found.status, 404);
        assert_eq!(not_found.content_type.as_deref(), Some(ERROR_MEDIA));

        let ok = builtins.iter().find(|r| r.name == "OK").expect("OK builtin");
        assert!(ok.content_type.is_none());
    }
}
