//! # gatekit-authz
//!
//! A minimal role-based authorization checker. Callers register named roles
//! backed by predicates and named actions mapped to allowed-role lists; the
//! checker answers "is this user allowed to perform this action?" and mints
//! gate checks for request pipelines.
//!
//! ## Features
//!
//! - **Opaque users**: the core never inspects the user value, it only hands
//!   it to the registered predicates
//! - **Existential action checks** racing the listed role predicates, with
//!   a first-affirmative short-circuit
//! - **Strict-by-default absence policy**: referencing an undefined role or
//!   action is an error unless configured otherwise
//! - **Stable error codes** for pipeline callers to match on
//! - **Runtime-agnostic**: built on `futures` primitives only
//!
//! ## Example
//!
//! ```rust
//! use gatekit_authz::{ActionRegistry, Authorizer, AuthorizerConfig, RoleRegistry};
//!
//! struct Account {
//!     is_admin: bool,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let roles = RoleRegistry::new()
//!         .with_role("admin", |account: &Account| Ok(account.is_admin))
//!         .with_role("user", |_: &Account| Ok(true));
//!
//!     let actions = ActionRegistry::new()
//!         .with_action("add new user", ["admin"])
//!         .with_action("do something else", ["admin", "user"]);
//!
//!     let authz = Authorizer::new(roles, actions, AuthorizerConfig::default());
//!
//!     let session = authz.for_user(Account { is_admin: false });
//!     assert!(!session.can_perform("add new user").await?);
//!     assert!(session.can_perform("do something else").await?);
//!
//!     Ok(())
//! }
//! ```

pub mod authorizer;
pub mod error;
pub mod gate;
pub mod registry;
pub mod session;

// Re-export commonly used types
pub use authorizer::{Authorizer, AuthorizerConfig};
pub use error::{code, AuthzError, Result};
pub use gate::{Gate, GateBuilder, UserSource};
pub use registry::{ActionRegistry, RolePredicate, RoleRegistry};
pub use session::Session;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
