//! End-to-end walkthrough of the authorization checker
//!
//! Demonstrates:
//! 1. Registering roles and action definitions
//! 2. Per-user sessions and direct role/permission checks
//! 3. A gate protecting an action inside a request pipeline
//! 4. The strict missing-definition policy and upstream failures

use gatekit_authz::{
    code, ActionRegistry, Authorizer, AuthorizerConfig, RoleRegistry,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone)]
struct Account {
    name: String,
    is_admin: bool,
}

/// Stand-in for an inbound request that may carry an authenticated user.
struct Request {
    account: Option<Account>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Gatekit Authorization Walkthrough ===\n");

    // Step 1: Define roles and the actions they unlock
    println!("Step 1: Registering roles and actions...");

    let roles = RoleRegistry::new()
        .with_role("admin", |account: &Account| Ok(account.is_admin))
        .with_role("user", |_: &Account| Ok(true));

    let actions = ActionRegistry::new()
        .with_action("add new user", ["admin"])
        .with_action("do something else", ["admin", "user"]);

    let authz = Authorizer::new(roles, actions, AuthorizerConfig::default());

    println!("✓ Roles: admin, user");
    println!("✓ Actions: \"add new user\" (admin), \"do something else\" (admin or user)\n");

    // Step 2: Direct session checks
    println!("Step 2: Checking permissions per user...");

    let alice = Account {
        name: "alice".into(),
        is_admin: true,
    };
    let bob = Account {
        name: "bob".into(),
        is_admin: false,
    };

    for account in [alice.clone(), bob.clone()] {
        let session = authz.for_user(account);
        println!(
            "  {} → add new user: {}, do something else: {}",
            session.user().name,
            session.can_perform("add new user").await?,
            session.can_perform("do something else").await?,
        );
    }
    println!();

    // Step 3: Gate an action inside a request pipeline
    println!("Step 3: Running requests through a gate...");

    let gates = authz.gates(|request: &Request| Ok(request.account.clone()));
    let gate = gates.ensure_authorized_to("add new user");

    let requests = [
        ("alice's request", Request { account: Some(alice) }),
        ("bob's request", Request { account: Some(bob) }),
        ("anonymous request", Request { account: None }),
    ];

    for (label, request) in &requests {
        match gate.check(request).await {
            Ok(()) => println!("  {} → proceed", label),
            Err(err) => println!(
                "  {} → rejected ({})",
                label,
                err.code().unwrap_or("upstream failure"),
            ),
        }
    }
    println!();

    // Step 4: The missing-definition policy
    println!("Step 4: Referencing an undefined action...");

    let session = authz.for_user(Account {
        name: "carol".into(),
        is_admin: false,
    });

    match session.can_perform("launch missiles").await {
        Err(err) if err.code() == Some(code::MISSING_DEFINITION) => {
            println!("✓ Strict config rejects it: {}\n", err);
        }
        other => println!("  unexpected outcome: {:?}\n", other.is_ok()),
    }

    println!("=== Walkthrough complete ===");
    Ok(())
}
