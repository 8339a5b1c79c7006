//! Transport-agnostic service model.
//!
//! Services and endpoints are owned by the evaluator; the HTTP model only holds shared
//! handles (`Arc`) to them, so a descriptor can be referenced from several expressions
//! without being copied.

use crate::expression::Expression;
use std::borrow::Cow;
use std::sync::Arc;

/// A single operation declared on a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointExpr {
    pub name: String,
    pub description: Option<String>,
    /// Name of the declaring service, filled in by [`ServiceExpr::endpoint`].
    pub service: String,
}

impl EndpointExpr {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), description: None, service: String::new() }
    }

    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Expression for EndpointExpr {
    fn eval_name(&self) -> Cow<'static, str> {
        if self.service.is_empty() {
            format!("endpoint {:?}", self.name).into()
        } else {
            format!("endpoint {:?} of service {:?}", self.name, self.service).into()
        }
    }
}

/// A named group of endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceExpr {
    pub name: String,
    pub description: Option<String>,
    pub endpoints: Vec<Arc<EndpointExpr>>,
}

impl ServiceExpr {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), description: None, endpoints: Vec::new() }
    }

    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends an endpoint, binding it to this service.
    #[must_use]
    pub fn endpoint(mut self, mut endpoint: EndpointExpr) -> Self {
        endpoint.service.clone_from(&self.name);
        self.endpoints.push(Arc::new(endpoint));
        self
    }

    #[must_use]
    pub fn find_endpoint(&self, name: &str) -> Option<&Arc<EndpointExpr>> {
        self.endpoints.iter().find(|e| e.name == name)
    }

    /// Wraps the finished descriptor for sharing with the HTTP model.
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Expression for ServiceExpr {
    fn eval_name(&self) -> Cow<'static, str> {
        format!("service {:?}", self.name).into()
    }
}
