//! End-to-end gate scenarios: the request pipeline from user extraction to
//! proceed/deny signaling.

use gatekit_authz::{code, AuthorizerConfig};
use gatekit_e2e_tests::{account_source, standard_authorizer, Account, Request};

#[tokio::test]
async fn admin_request_proceeds() {
    let authz = standard_authorizer(AuthorizerConfig::default());
    let gate = authz
        .gates(account_source)
        .ensure_authorized_to("add new user");

    let request = Request {
        account: Some(Account::admin("alice")),
    };
    gate.check(&request).await.unwrap();
}

#[tokio::test]
async fn normal_user_request_is_rejected() {
    let authz = standard_authorizer(AuthorizerConfig::default());
    let gate = authz
        .gates(account_source)
        .ensure_authorized_to("add new user");

    let request = Request {
        account: Some(Account::member("bob")),
    };
    let err = gate.check(&request).await.unwrap_err();
    assert_eq!(err.code(), Some(code::NOT_AUTHORIZED));
}

#[tokio::test]
async fn anonymous_request_is_rejected_before_evaluation() {
    let authz = standard_authorizer(AuthorizerConfig::default());
    let gate = authz
        .gates(account_source)
        .ensure_authorized_to("add new user");

    let err = gate.check(&Request { account: None }).await.unwrap_err();
    assert_eq!(err.code(), Some(code::USER_NOT_FOUND));
}

#[tokio::test]
async fn gates_are_reusable_across_requests_and_tasks() {
    let authz = standard_authorizer(AuthorizerConfig::default());
    let gate = authz
        .gates(account_source)
        .ensure_authorized_to("do something else");

    let mut handles = Vec::new();
    for _ in 0..8 {
        let gate = gate.clone();
        handles.push(tokio::spawn(async move {
            let request = Request {
                account: Some(Account::member("bob")),
            };
            gate.check(&request).await.unwrap();
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }
}

#[tokio::test]
async fn one_source_feeds_every_gate() {
    let authz = standard_authorizer(AuthorizerConfig::default());
    let gates = authz.gates(account_source);

    let add = gates.ensure_authorized_to("add new user");
    let other = gates.ensure_authorized_to("do something else");

    let request = Request {
        account: Some(Account::member("bob")),
    };
    assert_eq!(
        add.check(&request).await.unwrap_err().code(),
        Some(code::NOT_AUTHORIZED)
    );
    other.check(&request).await.unwrap();
}

#[tokio::test]
async fn extraction_failures_pass_through_unwrapped() {
    let authz = standard_authorizer(AuthorizerConfig::default());
    let gate = authz
        .gates(|_: &Request| Err(anyhow::anyhow!("session store down")))
        .ensure_authorized_to("add new user");

    let err = gate.check(&Request { account: None }).await.unwrap_err();
    assert_eq!(err.code(), None);
    assert_eq!(err.to_string(), "session store down");
}
