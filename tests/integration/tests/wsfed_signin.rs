//! WS-Federation sign-in flow tests.
//!
//! Each test starts from the encoded path and query the hosting pipeline
//! receives and runs it through the parser and the validator.

use kc_model::Client;
use kc_protocol_wsfed::{
    Principal, RelyingParty, RelyingPartyProvider, SignInError, SignInOutcome,
    WsFederationConfig, parse_sign_in_request,
};
use kc_storage::ClientProvider;

use crate::common::{REALM, REPLY_URL, TestEnv, encoded_sign_in_request, sample_relying_party};

/// Tests the full round trip: login prompt first, then token issuance.
#[tokio::test]
async fn test_sign_in_flow() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let request = encoded_sign_in_request(REALM, "");

    let message = parse_sign_in_request(&request)
        .ok_or_else(|| anyhow::anyhow!("request should parse as a sign-in message"))?;
    assert_eq!(message.wtrealm.as_deref(), Some(REALM));
    assert_eq!(message.wreply.as_deref(), Some(REPLY_URL));
    assert_eq!(message.wctx.as_deref(), Some("WsFedOwinState"));

    // Anonymous caller is sent to the login page
    let result = env
        .validator
        .validate(message.clone(), Some(Principal::anonymous()))
        .await?;
    assert_eq!(result.outcome(), SignInOutcome::SignInRequired);
    assert_eq!(result.relying_party, Some(sample_relying_party()));
    assert!(result.user.is_none());

    // After login the token goes to the registered reply address
    let user = env.user_authenticated_minutes_ago(1);
    let result = env.validator.validate(message, Some(user)).await?;
    assert_eq!(
        result.outcome(),
        SignInOutcome::Issue {
            reply_url: REPLY_URL
        }
    );
    let user = result
        .user
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("user should be set"))?;
    assert_eq!(user.subject(), Some("user1"));
    assert_eq!(user.find_first("email"), Some("testUser1@email.com"));

    Ok(())
}

/// Tests that `wfresh=0` forces a new login and is consumed.
#[tokio::test]
async fn test_wfresh_zero_forces_login() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let request = encoded_sign_in_request(REALM, "%26wfresh%3D0");

    let message = parse_sign_in_request(&request)
        .ok_or_else(|| anyhow::anyhow!("request should parse as a sign-in message"))?;
    assert_eq!(message.wfresh.as_deref(), Some("0"));

    let result = env
        .validator
        .validate(message, Some(env.user_authenticated_minutes_ago(0)))
        .await?;
    assert!(result.sign_in_required);
    assert!(result.error.is_none());
    let message = result
        .message
        .ok_or_else(|| anyhow::anyhow!("message should be set"))?;
    assert!(message.wfresh.is_none());
    assert_eq!(message.wctx.as_deref(), Some("WsFedOwinState"));

    Ok(())
}

/// Tests that `wfresh=N` bounds how old the login may be.
#[tokio::test]
async fn test_wfresh_max_age() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let request = encoded_sign_in_request(REALM, "%26wfresh%3D30");
    let message = parse_sign_in_request(&request)
        .ok_or_else(|| anyhow::anyhow!("request should parse as a sign-in message"))?;

    let stale = env
        .validator
        .validate(message.clone(), Some(env.user_authenticated_minutes_ago(45)))
        .await?;
    assert_eq!(stale.outcome(), SignInOutcome::SignInRequired);

    let fresh = env
        .validator
        .validate(message, Some(env.user_authenticated_minutes_ago(15)))
        .await?;
    assert!(matches!(fresh.outcome(), SignInOutcome::Issue { .. }));

    Ok(())
}

/// Tests that an unregistered realm is rejected.
#[tokio::test]
async fn test_unknown_realm_rejected() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let request = encoded_sign_in_request("urn:unknown", "");
    let message = parse_sign_in_request(&request)
        .ok_or_else(|| anyhow::anyhow!("request should parse as a sign-in message"))?;

    let result = env.validator.validate(message, None).await?;
    assert_eq!(
        result.outcome(),
        SignInOutcome::Error(SignInError::InvalidRelyingParty)
    );
    assert_eq!(result.summary().error, Some("invalid_relying_party"));
    assert_eq!(SignInError::InvalidRelyingParty.http_status(), 400);

    Ok(())
}

/// Tests that registration changes take effect on the next request.
#[tokio::test]
async fn test_registration_changes_apply() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let request = encoded_sign_in_request(REALM, "");
    let message = parse_sign_in_request(&request)
        .ok_or_else(|| anyhow::anyhow!("request should parse as a sign-in message"))?;

    let client = env
        .clients
        .get_by_client_id(REALM)
        .await?
        .ok_or_else(|| anyhow::anyhow!("sample client should exist"))?;

    env.clients.update(&client.clone().with_enabled(false)).await?;
    let result = env.validator.validate(message.clone(), None).await?;
    assert!(result.is_error());

    let insecure = client.with_redirect_uri("http://localhost:10313/");
    env.clients.update(&insecure).await?;
    let result = env.validator.validate(message, None).await?;
    assert!(result.is_error());

    Ok(())
}

/// Tests that a realm without relying party settings uses the defaults.
#[tokio::test]
async fn test_relying_party_defaults() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    assert!(env.relying_parties.remove(REALM).await);
    assert!(env.relying_parties.find_by_realm(REALM).await?.is_none());

    let other = Client::new_ws_federation("https://rp.example.com/")
        .with_redirect_uri("https://rp.example.com/signin-wsfed");
    env.clients.create(&other).await?;

    for realm in [REALM, "https://rp.example.com/"] {
        let message = parse_sign_in_request(&encoded_sign_in_request(realm, ""))
            .ok_or_else(|| anyhow::anyhow!("request should parse as a sign-in message"))?;
        let result = env.validator.validate(message, None).await?;

        assert!(result.error.is_none());
        assert_eq!(
            result.relying_party,
            Some(RelyingParty::from_defaults(
                realm,
                &WsFederationConfig::default()
            ))
        );
    }

    Ok(())
}

/// Tests that non sign-in requests never reach the validator.
#[test]
fn test_non_sign_in_requests_ignored() {
    let sign_out = "%2Fwsfederation%3Fwa%3Dwsignout1.0%26wtrealm%3Durn%253Aowinrp";
    assert!(parse_sign_in_request(sign_out).is_none());
    assert!(parse_sign_in_request("%2Fwsfederation").is_none());
    assert!(parse_sign_in_request("%2Fwsfederation%3F").is_none());
}
