//! Role and action registries
//!
//! Both registries are built once, handed to the [`Authorizer`], and never
//! mutated afterwards. Role names and action names live in separate
//! namespaces; the two maps are never merged.
//!
//! [`Authorizer`]: crate::Authorizer

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// A caller-supplied membership check for one role.
///
/// Predicates receive the opaque user value bound to a session and decide
/// whether that user holds the role. A predicate may fail (for example when
/// it consults an upstream directory); the failure is surfaced to the caller
/// verbatim when the role is checked in isolation.
///
/// Plain synchronous closures of shape `Fn(&U) -> anyhow::Result<bool>`
/// implement this trait; anything that needs to await (a database lookup, an
/// HTTP call) implements it directly.
#[async_trait]
pub trait RolePredicate<U>: Send + Sync {
    /// Decide whether `user` holds this role.
    async fn check(&self, user: &U) -> anyhow::Result<bool>;
}

#[async_trait]
impl<U, F> RolePredicate<U> for F
where
    U: Sync,
    F: Fn(&U) -> anyhow::Result<bool> + Send + Sync,
{
    async fn check(&self, user: &U) -> anyhow::Result<bool> {
        self(user)
    }
}

/// Mapping from role name to role predicate.
pub struct RoleRegistry<U> {
    funcs: HashMap<String, Arc<dyn RolePredicate<U>>>,
}

impl<U> RoleRegistry<U> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            funcs: HashMap::new(),
        }
    }

    /// Register a predicate under `name`, replacing any previous one.
    pub fn with_role(
        mut self,
        name: impl Into<String>,
        predicate: impl RolePredicate<U> + 'static,
    ) -> Self {
        self.funcs.insert(name.into(), Arc::new(predicate));
        self
    }

    /// Look up the predicate for `name`.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn RolePredicate<U>>> {
        self.funcs.get(name)
    }

    /// Whether a predicate is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.funcs.contains_key(name)
    }

    /// Number of registered roles.
    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }

    /// Names of all registered roles, in arbitrary order.
    pub fn names(&self) -> Vec<&str> {
        self.funcs.keys().map(String::as_str).collect()
    }
}

impl<U> Default for RoleRegistry<U> {
    fn default() -> Self {
        Self::new()
    }
}

/// Mapping from action name to the roles allowed to perform it.
///
/// The role list is kept in registration order and may contain duplicates;
/// neither affects the decision, since action evaluation is existential.
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    defs: HashMap<String, Vec<String>>,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            defs: HashMap::new(),
        }
    }

    /// Define `name` as performable by any one of `roles`, replacing any
    /// previous definition. An empty role list is a valid definition; the
    /// action is simply unattainable.
    pub fn with_action<I, S>(mut self, name: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.defs
            .insert(name.into(), roles.into_iter().map(Into::into).collect());
        self
    }

    /// Roles allowed to perform `name`, if the action is defined.
    pub fn roles_for(&self, name: &str) -> Option<&[String]> {
        self.defs.get(name).map(Vec::as_slice)
    }

    /// Whether `name` has a definition.
    pub fn contains(&self, name: &str) -> bool {
        self.defs.contains_key(name)
    }

    /// Number of defined actions.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Names of all defined actions, in arbitrary order.
    pub fn names(&self) -> Vec<&str> {
        self.defs.keys().map(String::as_str).collect()
    }
}
