//! Shared fixtures for the end-to-end tests

use gatekit_authz::{ActionRegistry, Authorizer, AuthorizerConfig, RoleRegistry};

/// The user type used across the end-to-end scenarios.
#[derive(Debug, Clone, Default)]
pub struct Account {
    pub name: String,
    pub is_admin: bool,
}

impl Account {
    pub fn admin(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_admin: true,
        }
    }

    pub fn member(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_admin: false,
        }
    }
}

/// Inbound request stand-in: may or may not carry an authenticated user.
pub struct Request {
    pub account: Option<Account>,
}

/// Extraction function handed to gates in the scenarios.
pub fn account_source(request: &Request) -> anyhow::Result<Option<Account>> {
    Ok(request.account.clone())
}

/// The reference role/action setup: an `admin` role backed by the account
/// flag, a `user` role that always holds, one admin-only action, and one
/// action reachable through either role.
pub fn standard_authorizer(config: AuthorizerConfig) -> Authorizer<Account> {
    let roles = RoleRegistry::new()
        .with_role("admin", |account: &Account| Ok(account.is_admin))
        .with_role("user", |_: &Account| Ok(true));

    let actions = ActionRegistry::new()
        .with_action("add new user", ["admin"])
        .with_action("do something else", ["admin", "user"]);

    Authorizer::new(roles, actions, config)
}
