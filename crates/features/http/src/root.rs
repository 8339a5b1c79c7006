//! # Root Expression
//!
//! [`RootExpr`] is the aggregate the HTTP DSL builds: API-wide defaults (base path, shared
//! parameters, schemes, encodings) plus three registries:
//!
//! * **Resources**, one per service, created on first reference by [`RootExpr::resource_for`]
//!   and kept in creation order. Generators walk them in that order.
//! * **Responses** declared by the design, looked up by name.
//! * **Default responses** provided by the framework, looked up by name in a separate
//!   namespace. A name in one population is invisible to the lookup on the other.
//!
//! ## Build, then read
//!
//! The root has a single writer. The evaluator owns it mutably while the DSL runs, then hands
//! it over to generators, which only get `&RootExpr`. Mutating methods take `&mut self`, so
//! the phase barrier is enforced by the borrow checker rather than by a lock.
//!
//! Resources and actions are never removed or rebuilt; the structure is append-only.

use crate::resource::{ResourceExpr, ResourceId};
use crate::response::{HttpResponseExpr, builtin_responses};
use crate::wildcard::extract_wildcards;
use fxhash::FxHashMap;
use hdesign_domain::Expression;
use hdesign_domain::attribute::{AttributeExpr, AttributeMapExpr};
use hdesign_domain::config::HttpConfig;
use hdesign_domain::constants::ROOT_EVAL_NAME;
use hdesign_domain::encoding::EncodingExpr;
use hdesign_domain::schemes::{ApiScheme, SchemeSet};
use hdesign_domain::service::ServiceExpr;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, trace};

/// The data structure built by the top level HTTP DSL.
#[derive(Debug, Default)]
pub struct RootExpr {
    /// Common request path prefix of every endpoint.
    pub path: String,
    /// Request parameters shared by every endpoint.
    pub params: AttributeMapExpr,
    /// Supported URL schemes.
    pub schemes: SchemeSet,
    /// Encodings accepted in request bodies.
    pub consumes: Vec<EncodingExpr>,
    /// Encodings generated in response bodies.
    pub produces: Vec<EncodingExpr>,
    responses: Vec<HttpResponseExpr>,
    default_responses: Vec<HttpResponseExpr>,
    resources: Vec<ResourceExpr>,
    index: FxHashMap<String, ResourceId>,
}

impl RootExpr {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a root seeded with the configured API-wide defaults.
    #[must_use]
    pub fn from_config(config: &HttpConfig) -> Self {
        let mut root = Self {
            path: config.path.clone(),
            schemes: config.schemes,
            ..Self::default()
        };
        if !config.consumes.is_empty() {
            root.consumes.push(EncodingExpr::new(config.consumes.iter().cloned()));
        }
        if !config.produces.is_empty() {
            root.produces.push(EncodingExpr::new(config.produces.iter().cloned()));
        }
        if config.default_responses {
            root.default_responses = builtin_responses();
        }
        root
    }

    // --- Responses ---

    /// Returns the response with the given name if any.
    #[must_use]
    pub fn response(&self, name: &str) -> Option<&HttpResponseExpr> {
        self.responses.iter().find(|r| r.name == name)
    }

    /// Returns the default response with the given name if any.
    #[must_use]
    pub fn default_response(&self, name: &str) -> Option<&HttpResponseExpr> {
        self.default_responses.iter().find(|r| r.name == name)
    }

    /// Declared responses in declaration order.
    #[must_use]
    pub fn responses(&self) -> &[HttpResponseExpr] {
        &self.responses
    }

    /// Built-in responses in registration order.
    #[must_use]
    pub fn default_responses(&self) -> &[HttpResponseExpr] {
        &self.default_responses
    }

    /// Registers a response available to all actions.
    ///
    /// Lookups return the first response registered under a name.
    pub fn add_response(&mut self, response: HttpResponseExpr) {
        debug!(response = %response.name, status = response.status, "response registered");
        self.responses.push(response);
    }

    /// Registers a built-in response.
    pub fn add_default_response(&mut self, response: HttpResponseExpr) {
        debug!(response = %response.name, status = response.status, "default response registered");
        self.default_responses.push(response);
    }

    // --- Resources ---

    /// Returns the resource of the service with the given name if any.
    #[must_use]
    pub fn resource(&self, name: &str) -> Option<&ResourceExpr> {
        self.index.get(name).and_then(|&id| self.resource_by_id(id))
    }

    #[must_use]
    pub fn resource_by_id(&self, id: ResourceId) -> Option<&ResourceExpr> {
        self.resources.get(id.index())
    }

    /// Resources in creation order.
    #[must_use]
    pub fn resources(&self) -> &[ResourceExpr] {
        &self.resources
    }

    /// Creates a new or returns the existing resource for `service`.
    ///
    /// Resources are keyed by service name. An existing resource is returned as is, even if the
    /// service has gained endpoints since; its actions are never re-synchronized. A new
    /// resource gets one action per endpoint of the service and is appended after the
    /// existing ones.
    pub fn resource_for(&mut self, service: &Arc<ServiceExpr>) -> &ResourceExpr {
        let id = if let Some(&id) = self.index.get(service.name.as_str()) {
            trace!(resource = %service.name, "resource already defined");
            id
        } else {
            let id = ResourceId(self.resources.len());
            let resource = ResourceExpr::new(id, Arc::clone(service));
            debug!(resource = %service.name, actions = resource.actions().len(), "resource created");
            self.resources.push(resource);
            self.index.insert(service.name.clone(), id);
            id
        };
        &self.resources[id.index()]
    }

    // --- API-wide defaults ---

    /// Names of the wildcards declared by the base path.
    #[must_use]
    pub fn path_wildcards(&self) -> Vec<String> {
        extract_wildcards(&self.path)
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    /// Adds a shared parameter, replacing any previous one with the same name.
    pub fn add_param(&mut self, name: impl Into<String>, attr: AttributeExpr) {
        self.params.insert(name, attr);
    }

    pub fn add_scheme(&mut self, scheme: ApiScheme) {
        self.schemes |= SchemeSet::from(scheme);
    }

    pub fn add_consumes(&mut self, encoding: EncodingExpr) {
        self.consumes.push(encoding);
    }

    pub fn add_produces(&mut self, encoding: EncodingExpr) {
        self.produces.push(encoding);
    }
}

impl Expression for RootExpr {
    fn eval_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(ROOT_EVAL_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdesign_domain::attribute::AttributeKind;
    use hdesign_domain::service::EndpointExpr;

    fn users() -> Arc<ServiceExpr> {
        ServiceExpr::new("users")
            .endpoint(EndpointExpr::new("list"))
            .endpoint(EndpointExpr::new("show"))
            .shared()
    }

    #[test]
    fn resource_for_is_get_or_create() {
        let mut root = RootExpr::new();
        let svc = users();

        let first: *const ResourceExpr = root.resource_for(&svc);
        let second: *const ResourceExpr = root.resource_for(&svc);

        assert!(std::ptr::eq(first, second));
        assert_eq!(root.resources().len(), 1);
    }

    #[test]
    fn index_and_sequence_agree() {
        let mut root = RootExpr::new();
        root.resource_for(&users());
        root.resource_for(&ServiceExpr::new("orders").shared());

        for (position, resource) in root.resources().iter().enumerate() {
            assert_eq!(resource.id().index(), position);
            assert_eq!(root.resource(resource.name()).map(ResourceExpr::id), Some(resource.id()));
        }
        assert!(root.resource("missing").is_none());
    }

    #[test]
    fn from_config_applies_defaults() {
        let config = HttpConfig { path: "/api/:version".to_owned(), ..HttpConfig::default() };
        let root = RootExpr::from_config(&config);

        assert_eq!(root.path_wildcards(), vec!["version"]);
        assert_eq!(root.schemes, SchemeSet::HTTP);
        assert_eq!(root.consumes.len(), 1);
        assert!(root.default_response("NotFound").is_some());
        assert!(root.responses().is_empty());
    }

    #[test]
    fn from_config_without_builtins() {
        let config = HttpConfig { default_responses: false, consumes: Vec::new(), ..HttpConfig::default() };
        let root = RootExpr::from_config(&config);

        assert!(root.default_responses().is_empty());
        assert!(root.consumes.is_empty());
        assert_eq!(root.produces.len(), 1);
    }

    #[test]
    fn shared_params_keep_declaration_order() {
        let mut root = RootExpr::new();
        root.add_param("version", AttributeExpr::new(AttributeKind::String).required());
        root.add_param("tenant", AttributeExpr::new(AttributeKind::Int));

        assert_eq!(root.params.names().collect::<Vec<_>>(), vec!["version", "tenant"]);
    }

    #[test]
    fn root_eval_name() {
        assert_eq!(RootExpr::new().eval_name(), "API HTTP");
    }
}
