//! Authorizer construction and configuration

use crate::gate::{GateBuilder, UserSource};
use crate::registry::{ActionRegistry, RoleRegistry};
use crate::session::Session;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Authorizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizerConfig {
    /// Whether referencing an undefined role or action is an error.
    /// When `false`, undefined names evaluate to a plain `false` decision.
    #[serde(default = "default_strict")]
    pub error_on_missing_definitions: bool,
}

impl Default for AuthorizerConfig {
    fn default() -> Self {
        Self {
            error_on_missing_definitions: true,
        }
    }
}

fn default_strict() -> bool {
    true
}

/// Registries and configuration shared by every session and gate derived
/// from one authorizer. Read-only after construction.
pub(crate) struct Shared<U> {
    pub(crate) roles: RoleRegistry<U>,
    pub(crate) actions: ActionRegistry,
    pub(crate) config: AuthorizerConfig,
}

/// The authorization checker.
///
/// Holds the immutable role and action registries plus configuration, and
/// acts as the factory for per-user [`Session`]s and for request-pipeline
/// [`Gate`]s. Construction happens once per process; the authorizer is cheap
/// to clone and safe to share across tasks, since every derived view only
/// reads the registries.
///
/// [`Gate`]: crate::Gate
pub struct Authorizer<U> {
    shared: Arc<Shared<U>>,
}

impl<U> Authorizer<U> {
    /// Build an authorizer from its registries and configuration. Both
    /// registries may be empty.
    pub fn new(roles: RoleRegistry<U>, actions: ActionRegistry, config: AuthorizerConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                roles,
                actions,
                config,
            }),
        }
    }

    /// Bind `user` into a new session over this authorizer's registries.
    /// Pure and synchronous; nothing is evaluated yet.
    pub fn for_user(&self, user: U) -> Session<U> {
        Session::bind(self.shared.clone(), user)
    }

    /// Capture a user-extraction source and return a builder for
    /// action-bound gates over request values of type `R`.
    pub fn gates<R>(&self, source: impl UserSource<R, U> + 'static) -> GateBuilder<U, R> {
        GateBuilder::new(self.shared.clone(), Arc::new(source))
    }

    /// The configuration this authorizer was built with.
    pub fn config(&self) -> &AuthorizerConfig {
        &self.shared.config
    }

    /// The role registry.
    pub fn roles(&self) -> &RoleRegistry<U> {
        &self.shared.roles
    }

    /// The action registry.
    pub fn actions(&self) -> &ActionRegistry {
        &self.shared.actions
    }
}

impl<U> Clone for Authorizer<U> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}
