use serde::{Deserialize, Serialize};

/// A content encoding an API consumes or produces.
///
/// `package_path` and `function` point a generator at a custom encoder/decoder constructor;
/// both are empty for the standard encodings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodingExpr {
    pub mime_types: Vec<String>,
    pub package_path: Option<String>,
    pub function: Option<String>,
}

impl EncodingExpr {
    pub fn new<I, S>(mime_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { mime_types: mime_types.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    #[must_use]
    pub fn with_function(mut self, package_path: impl Into<String>, function: impl Into<String>) -> Self {
        self.package_path = Some(package_path.into());
        self.function = Some(function.into());
        self
    }

    /// Whether `mime` is handled by this encoding; parameters such as `; charset=utf-8` are ignored.
    #[must_use]
    pub fn supports(&self, mime: &str) -> bool {
        let essence = mime.split(';').next().unwrap_or(mime).trim();
        self.mime_types.iter().any(|m| m.eq_ignore_ascii_case(essence))
    }
}
