//! Per-user role and permission evaluation
//!
//! A [`Session`] answers two questions for the user it is bound to: "is the
//! user in role R?" and "can the user perform action A?". Action checks are
//! existential over the action's role list: any one listed role granting
//! access decides the action, and the listed predicates are raced
//! concurrently so an early grant does not wait for stragglers.

use crate::authorizer::Shared;
use crate::error::{AuthzError, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;
use tracing::{debug, warn};

/// Per-user evaluation context over an authorizer's registries.
///
/// Sessions are ephemeral: derive one, run a check or a short burst of
/// checks, and drop it. Nothing is cached; repeated checks re-invoke the
/// underlying predicates every time.
pub struct Session<U> {
    shared: Arc<Shared<U>>,
    user: U,
}

impl<U> Session<U> {
    pub(crate) fn bind(shared: Arc<Shared<U>>, user: U) -> Self {
        Self { shared, user }
    }

    /// The user this session is bound to.
    pub fn user(&self) -> &U {
        &self.user
    }

    /// Whether the bound user holds `role`.
    ///
    /// An undefined role is an [`AuthzError::MissingRole`] under the strict
    /// default configuration and a plain `false` otherwise. A failing
    /// predicate propagates verbatim as [`AuthzError::Upstream`].
    pub async fn is_in_role(&self, role: &str) -> Result<bool> {
        let Some(predicate) = self.shared.roles.get(role) else {
            if self.shared.config.error_on_missing_definitions {
                return Err(AuthzError::MissingRole(role.to_string()));
            }
            return Ok(false);
        };

        predicate
            .check(&self.user)
            .await
            .map_err(AuthzError::Upstream)
    }

    /// Whether the bound user may perform `action`.
    ///
    /// The action's role list is checked existentially: the listed roles are
    /// raced as concurrent futures and the first affirmative result decides
    /// the action without waiting for the rest. If every check completes
    /// without an affirmative result the decision is `false`.
    ///
    /// A role check that fails during the scan, whether from a failing
    /// predicate or a role name with no definition, counts as "this role
    /// does not grant access": it is logged and the scan continues. Only an
    /// undefined *action* surfaces an error here, under the strict default
    /// configuration.
    pub async fn can_perform(&self, action: &str) -> Result<bool> {
        let Some(roles) = self.shared.actions.roles_for(action) else {
            if self.shared.config.error_on_missing_definitions {
                return Err(AuthzError::MissingAction(action.to_string()));
            }
            debug!("action '{}' has no definition, denying", action);
            return Ok(false);
        };

        let mut checks: FuturesUnordered<_> = roles
            .iter()
            .map(|role| async move { (role.as_str(), self.is_in_role(role).await) })
            .collect();

        while let Some((role, outcome)) = checks.next().await {
            match outcome {
                Ok(true) => {
                    debug!("action '{}' granted by role '{}'", action, role);
                    return Ok(true);
                }
                Ok(false) => {}
                Err(err) => {
                    warn!(
                        "role '{}' check failed while scanning action '{}', treating as not granted: {}",
                        role, action, err
                    );
                }
            }
        }

        debug!("action '{}' denied, no listed role granted access", action);
        Ok(false)
    }
}
