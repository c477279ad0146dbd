//! Common test utilities and fixtures.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use kc_model::Client;
use kc_protocol_wsfed::{
    FixedClock, InMemoryRelyingPartyProvider, Principal, RelyingParty, SignInValidator,
    WsFederationConfig, jwt_claim_types, token_types, ws_claim_types,
};
use kc_storage::{ClientProvider, InMemoryClientProvider};

/// Realm registered by the sample relying party.
pub const REALM: &str = "urn:owinrp";

/// Reply address registered by the sample relying party.
pub const REPLY_URL: &str = "https://localhost:10313/";

/// Validator wired to in-memory stores.
pub type TestValidator = SignInValidator<InMemoryClientProvider, InMemoryRelyingPartyProvider>;

/// Test environment with seeded stores and a fixed clock.
pub struct TestEnv {
    /// Client store, for adding or changing registrations.
    pub clients: Arc<InMemoryClientProvider>,
    /// Relying party store.
    pub relying_parties: Arc<InMemoryRelyingPartyProvider>,
    /// Validator under test.
    pub validator: TestValidator,
    /// Current time as seen by the validator.
    pub now: DateTime<Utc>,
}

impl TestEnv {
    /// Creates an environment holding the sample relying party.
    pub async fn new() -> anyhow::Result<Self> {
        // Initialize tracing for tests
        let _ = tracing_subscriber::fmt()
            .with_env_filter("kc_protocol_wsfed=debug")
            .with_test_writer()
            .try_init();

        let now = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .ok_or_else(|| anyhow::anyhow!("invalid fixture time"))?;

        let clients = Arc::new(InMemoryClientProvider::new());
        clients.create(&sample_client()).await?;

        let relying_parties = Arc::new(InMemoryRelyingPartyProvider::new());
        relying_parties.upsert(sample_relying_party()).await;

        let validator = SignInValidator::new(
            WsFederationConfig::default(),
            Arc::clone(&clients),
            Arc::clone(&relying_parties),
        )
        .with_clock(Arc::new(FixedClock::new(now)));

        Ok(Self {
            clients,
            relying_parties,
            validator,
            now,
        })
    }

    /// Returns the sample user, authenticated `minutes` ago.
    pub fn user_authenticated_minutes_ago(&self, minutes: i64) -> Principal {
        Principal::authenticated("user1", self.now - Duration::minutes(minutes))
            .with_claim(jwt_claim_types::NAME, "testName")
            .with_claim(jwt_claim_types::EMAIL, "testUser1@email.com")
    }
}

/// The sample relying party's client registration.
pub fn sample_client() -> Client {
    Client::new_ws_federation(REALM)
        .with_name("OWIN relying party")
        .with_redirect_uri(REPLY_URL)
}

/// The sample relying party's token settings.
pub fn sample_relying_party() -> RelyingParty {
    RelyingParty::from_defaults(REALM, &WsFederationConfig::default())
        .with_token_type(token_types::SAML11_TOKEN_PROFILE11)
        .with_claim_mapping(jwt_claim_types::SUBJECT, ws_claim_types::NAME_IDENTIFIER)
        .with_claim_mapping(jwt_claim_types::NAME, ws_claim_types::NAME)
        .with_claim_mapping(jwt_claim_types::EMAIL, ws_claim_types::EMAIL)
        .with_claim_mapping(
            jwt_claim_types::AUTHENTICATION_TIME,
            ws_claim_types::AUTHENTICATION_INSTANT,
        )
}

/// Builds the doubly encoded path and query a relying party redirect
/// produces for a sign-in request.
pub fn encoded_sign_in_request(realm: &str, extra: &str) -> String {
    let realm = realm.replace(':', "%253A");
    format!(
        "%2Fwsfederation%3Fwtrealm%3D{realm}%26wa%3Dwsignin1.0%26wreply%3Dhttps%253A%252F%252Flocalhost%253A10313%252F%26wctx%3DWsFedOwinState{extra}"
    )
}
