use crate::root::RootExpr;
use hdesign_domain::Expression;
use hdesign_domain::service::{EndpointExpr, ServiceExpr};
use std::borrow::Cow;
use std::sync::Arc;

/// Position of a resource in its [`RootExpr`].
///
/// Actions refer back to their resource through this id instead of a pointer: the resource
/// owns its actions, never the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId(pub(crate) usize);

impl ResourceId {
    /// Creation order of the resource, starting at zero.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// The HTTP surface of one service.
#[derive(Debug)]
pub struct ResourceExpr {
    id: ResourceId,
    service: Arc<ServiceExpr>,
    actions: Vec<ActionExpr>,
}

impl ResourceExpr {
    /// One action per endpoint currently declared on `service`, in endpoint order.
    pub(crate) fn new(id: ResourceId, service: Arc<ServiceExpr>) -> Self {
        let actions = service
            .endpoints
            .iter()
            .map(|endpoint| ActionExpr { endpoint: Arc::clone(endpoint), resource: id })
            .collect();
        Self { id, service, actions }
    }

    #[must_use]
    pub const fn id(&self) -> ResourceId {
        self.id
    }

    /// Name of the wrapped service; unique within a root.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.service.name
    }

    #[must_use]
    pub const fn service(&self) -> &Arc<ServiceExpr> {
        &self.service
    }

    #[must_use]
    pub fn actions(&self) -> &[ActionExpr] {
        &self.actions
    }

    #[must_use]
    pub fn action(&self, name: &str) -> Option<&ActionExpr> {
        self.actions.iter().find(|a| a.name() == name)
    }
}

impl Expression for ResourceExpr {
    fn eval_name(&self) -> Cow<'static, str> {
        format!("resource {:?}", self.name()).into()
    }
}

/// The HTTP binding of one endpoint.
#[derive(Debug, Clone)]
pub struct ActionExpr {
    endpoint: Arc<EndpointExpr>,
    resource: ResourceId,
}

impl ActionExpr {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.endpoint.name
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Arc<EndpointExpr> {
        &self.endpoint
    }

    /// Id of the owning resource.
    #[must_use]
    pub const fn resource_id(&self) -> ResourceId {
        self.resource
    }

    /// Resolves the owning resource in `root`.
    ///
    /// `None` only when the action is looked up in a root it was not created by.
    #[must_use]
    pub fn resource<'a>(&self, root: &'a RootExpr) -> Option<&'a ResourceExpr> {
        root.resource_by_id(self.resource)
    }

    /// Diagnostic name, e.g. `action "show" of resource "users"`.
    #[must_use]
    pub fn eval_name(&self, root: &RootExpr) -> Cow<'static, str> {
        match self.resource(root) {
            Some(resource) => format!("action {:?} of resource {:?}", self.name(), resource.name()),
            None => format!("action {:?}", self.name()),
        }
        .into()
    }
}
