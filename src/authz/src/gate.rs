//! Request-pipeline gates
//!
//! A [`Gate`] composes user extraction, a permission check, and pass/deny
//! signaling into a single reusable check for one action. `Ok(())` from
//! [`Gate::check`] means "proceed"; any failure is terminal for that
//! invocation and reported exactly once.

use crate::authorizer::Shared;
use crate::error::{AuthzError, Result};
use crate::session::Session;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Extracts the acting user from an incoming request-like value.
///
/// `Ok(None)` means the request carries no user; the gate turns that into
/// an [`AuthzError::UserNotFound`]. Failures propagate to the gate's caller
/// verbatim.
///
/// Plain synchronous closures of shape `Fn(&R) -> anyhow::Result<Option<U>>`
/// implement this trait; extraction that needs to await (a session store, a
/// token introspection call) implements it directly.
#[async_trait]
pub trait UserSource<R, U>: Send + Sync {
    /// Extract the user from `request`.
    async fn retrieve(&self, request: &R) -> anyhow::Result<Option<U>>;
}

#[async_trait]
impl<R, U, F> UserSource<R, U> for F
where
    R: Sync,
    F: Fn(&R) -> anyhow::Result<Option<U>> + Send + Sync,
{
    async fn retrieve(&self, request: &R) -> anyhow::Result<Option<U>> {
        self(request)
    }
}

/// Factory for action-bound gates sharing one user source.
///
/// Obtained from [`Authorizer::gates`]; mint one gate per protected action
/// and reuse it for the process lifetime.
///
/// [`Authorizer::gates`]: crate::Authorizer::gates
pub struct GateBuilder<U, R> {
    shared: Arc<Shared<U>>,
    source: Arc<dyn UserSource<R, U>>,
}

impl<U, R> GateBuilder<U, R> {
    pub(crate) fn new(shared: Arc<Shared<U>>, source: Arc<dyn UserSource<R, U>>) -> Self {
        Self { shared, source }
    }

    /// A reusable gate for `action`. Nothing is evaluated until the gate is
    /// invoked.
    pub fn ensure_authorized_to(&self, action: impl Into<String>) -> Gate<U, R> {
        Gate {
            shared: self.shared.clone(),
            source: self.source.clone(),
            action: action.into(),
        }
    }
}

impl<U, R> Clone for GateBuilder<U, R> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
            source: self.source.clone(),
        }
    }
}

/// A pass/fail check for one action, pluggable into a request pipeline.
pub struct Gate<U, R> {
    shared: Arc<Shared<U>>,
    source: Arc<dyn UserSource<R, U>>,
    action: String,
}

impl<U, R> Gate<U, R> {
    /// The action this gate protects.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Run the gate against `request`.
    ///
    /// The pipeline is linear with no retry: extract the user, require one
    /// to be present, evaluate the permission, and require an affirmative
    /// decision. The first failure ends the invocation:
    ///
    /// - extraction failure propagates verbatim;
    /// - an absent user is [`AuthzError::UserNotFound`];
    /// - an evaluation failure propagates unchanged;
    /// - a negative decision is [`AuthzError::NotAuthorized`];
    /// - `Ok(())` signals "proceed".
    pub async fn check(&self, request: &R) -> Result<()> {
        let user = self
            .source
            .retrieve(request)
            .await
            .map_err(AuthzError::Upstream)?;

        let Some(user) = user else {
            debug!("gate '{}': no user in request", self.action);
            return Err(AuthzError::UserNotFound);
        };

        let allowed = Session::bind(self.shared.clone(), user)
            .can_perform(&self.action)
            .await?;

        if !allowed {
            debug!("gate '{}': permission denied", self.action);
            return Err(AuthzError::NotAuthorized(self.action.clone()));
        }

        Ok(())
    }
}

impl<U, R> Clone for Gate<U, R> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
            source: self.source.clone(),
            action: self.action.clone(),
        }
    }
}
