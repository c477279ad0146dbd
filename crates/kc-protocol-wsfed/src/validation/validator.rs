//! WS-Federation sign-in request validation.
//!
//! The validator runs a fixed sequence of gates over a parsed sign-in
//! message:
//!
//! 1. the realm resolves to an enabled client
//! 2. the client is enabled
//! 3. the client speaks WS-Federation
//! 4. no redirect URI uses plain `http:`
//! 5. the first redirect URI becomes the reply address
//! 6. relying party settings are resolved, or synthesized from defaults
//! 7. SAML 1.1 relying parties have a URI shaped client id
//! 8. an unauthenticated caller must sign in
//! 9. `wfresh` may force or bound re-authentication
//!
//! Gates 1-5 and 7 reject with `invalid_relying_party`. Only collaborator
//! failures surface as `Err`.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use kc_model::{Client, Protocol};
use kc_storage::ClientProvider;
use url::Url;

use crate::clock::{Clock, SystemClock};
use crate::config::WsFederationConfig;
use crate::error::{SignInError, WsFedResult};
use crate::principal::Principal;
use crate::store::{RelyingPartyProvider, resolve_relying_party};
use crate::types::WsFederationMessage;

use super::result::SignInValidationResult;

/// Redirect URIs with this prefix are rejected. The match is literal and
/// case-sensitive.
const INSECURE_SCHEME_PREFIX: &str = "http:";

/// Why a request was rejected. Only used for diagnostics; every variant
/// maps to [`SignInError::InvalidRelyingParty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    ClientNotFound,
    ClientDisabled,
    NotWsFederation,
    InsecureRedirectUri,
    NoRedirectUri,
    ClientIdNotUri,
}

impl Rejection {
    const fn reason(self) -> &'static str {
        match self {
            Self::ClientNotFound => "Client not found",
            Self::ClientDisabled => "Client is disabled",
            Self::NotWsFederation => "Client is not configured for WS-Federation",
            Self::InsecureRedirectUri => "Bad client redirect URI setup, https is required",
            Self::NoRedirectUri => "Client has no redirect URI",
            Self::ClientIdNotUri => "Client ID must be a valid URI when using SAML 1.1 tokens",
        }
    }
}

/// Result of applying a `wfresh` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// No usable directive; nothing to do.
    Ignored,
    /// `wfresh=0`: the caller must sign in again and the directive is spent.
    ForceSignIn,
    /// The authentication is older than the requested maximum age.
    Expired,
    /// The authentication is recent enough.
    Fresh,
}

/// Evaluates a `wfresh` value against the caller's authentication time.
///
/// Values that are not 32-bit integers are ignored. A caller without a
/// known authentication time cannot prove freshness and is treated as
/// expired.
#[must_use]
pub fn evaluate_freshness(
    wfresh: &str,
    auth_time: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Freshness {
    let Ok(max_age_minutes) = wfresh.trim().parse::<i32>() else {
        return Freshness::Ignored;
    };
    if max_age_minutes == 0 {
        return Freshness::ForceSignIn;
    }
    let Some(auth_time) = auth_time else {
        return Freshness::Expired;
    };
    match auth_time.checked_add_signed(Duration::minutes(i64::from(max_age_minutes))) {
        Some(deadline) if now > deadline => Freshness::Expired,
        _ => Freshness::Fresh,
    }
}

/// Validates WS-Federation sign-in requests.
///
/// Holds only shared, immutable collaborators and can be cloned freely
/// across request handlers.
pub struct SignInValidator<C, R>
where
    C: ClientProvider,
    R: RelyingPartyProvider,
{
    clients: Arc<C>,
    relying_parties: Arc<R>,
    clock: Arc<dyn Clock>,
    config: Arc<WsFederationConfig>,
}

impl<C, R> Clone for SignInValidator<C, R>
where
    C: ClientProvider,
    R: RelyingPartyProvider,
{
    fn clone(&self) -> Self {
        Self {
            clients: Arc::clone(&self.clients),
            relying_parties: Arc::clone(&self.relying_parties),
            clock: Arc::clone(&self.clock),
            config: Arc::clone(&self.config),
        }
    }
}

impl<C, R> SignInValidator<C, R>
where
    C: ClientProvider,
    R: RelyingPartyProvider,
{
    /// Creates a validator using the system clock.
    #[must_use]
    pub fn new(config: WsFederationConfig, clients: Arc<C>, relying_parties: Arc<R>) -> Self {
        Self {
            clients,
            relying_parties,
            clock: Arc::new(SystemClock),
            config: Arc::new(config),
        }
    }

    /// Replaces the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &WsFederationConfig {
        &self.config
    }

    /// Validates a sign-in message for the given caller.
    ///
    /// # Errors
    ///
    /// Returns an error only if the client or relying party store fails.
    /// Rejected requests are reported through
    /// [`SignInValidationResult::error`].
    pub async fn validate(
        &self,
        mut message: WsFederationMessage,
        user: Option<Principal>,
    ) -> WsFedResult<SignInValidationResult> {
        tracing::info!("Start WS-Federation signin request validation");

        let Some(realm) = message.realm().map(str::to_string) else {
            return Ok(reject(None, None, Rejection::ClientNotFound));
        };

        let Some(client) = self.clients.find_enabled_by_client_id(&realm).await? else {
            return Ok(reject(Some(&realm), None, Rejection::ClientNotFound));
        };
        if let Some(rejection) = check_client(&client) {
            return Ok(reject(Some(&realm), Some(&client.client_id), rejection));
        }
        let Some(reply_url) = client.primary_redirect_uri().map(str::to_string) else {
            return Ok(reject(
                Some(&realm),
                Some(&client.client_id),
                Rejection::NoRedirectUri,
            ));
        };

        let relying_party =
            resolve_relying_party(self.relying_parties.as_ref(), &realm, &self.config).await?;

        // The client id becomes the token audience, which SAML 1.1 requires to be a URI
        if relying_party.is_saml11() && Url::parse(&client.client_id).is_err() {
            return Ok(reject(
                Some(&realm),
                Some(&client.client_id),
                Rejection::ClientIdNotUri,
            ));
        }

        let mut result = SignInValidationResult {
            message: None,
            client: Some(client),
            relying_party: Some(relying_party),
            reply_url: Some(reply_url),
            user: None,
            sign_in_required: false,
            error: None,
        };

        let Some(user) = user.filter(Principal::is_authenticated) else {
            tracing::debug!(realm = %realm, "Showing login: user is not authenticated");
            result.message = Some(message);
            result.sign_in_required = true;
            return Ok(log_success(result));
        };

        if let Some(wfresh) = message.wfresh.as_deref() {
            match evaluate_freshness(wfresh, user.authentication_time(), self.clock.now()) {
                Freshness::ForceSignIn => {
                    tracing::info!("Showing login: Requested wfresh=0.");
                    message.wfresh = None;
                    result.sign_in_required = true;
                }
                Freshness::Expired => {
                    tracing::info!("Showing login: Requested wfresh time exceeded.");
                    result.sign_in_required = true;
                }
                Freshness::Ignored | Freshness::Fresh => {}
            }
        }

        result.user = Some(user);
        result.message = Some(message);
        Ok(log_success(result))
    }
}

/// Gates 2-4: checks on the resolved client registration.
fn check_client(client: &Client) -> Option<Rejection> {
    // The store already filters on enabled; a store that does not is still caught here
    if !client.enabled {
        return Some(Rejection::ClientDisabled);
    }
    if client.protocol != Protocol::WsFederation {
        return Some(Rejection::NotWsFederation);
    }
    if client
        .redirect_uris
        .iter()
        .any(|uri| uri.starts_with(INSECURE_SCHEME_PREFIX))
    {
        return Some(Rejection::InsecureRedirectUri);
    }
    None
}

fn reject(
    realm: Option<&str>,
    client_id: Option<&str>,
    rejection: Rejection,
) -> SignInValidationResult {
    let error = SignInError::InvalidRelyingParty;
    tracing::warn!(
        error = error.code(),
        realm,
        client_id,
        "{}",
        rejection.reason()
    );
    SignInValidationResult::rejected(error)
}

fn log_success(result: SignInValidationResult) -> SignInValidationResult {
    let summary = result.summary();
    tracing::info!(
        realm = summary.realm.as_deref(),
        client_id = summary.client_id.as_deref(),
        sign_in_required = summary.sign_in_required,
        "End WS-Federation signin request validation"
    );
    result
}
