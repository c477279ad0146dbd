//! Sign-in validation result.

use kc_model::Client;
use serde::Serialize;

use crate::error::SignInError;
use crate::principal::Principal;
use crate::types::{RelyingParty, WsFederationMessage};

/// Outcome of validating a sign-in request.
///
/// Either [`Self::error`] is set and nothing else is populated, or the
/// request resolved to a client and relying party. In the latter case
/// [`Self::sign_in_required`] tells the caller whether to show a login page
/// before issuing a token to [`Self::reply_url`].
#[derive(Debug, Clone, Default)]
pub struct SignInValidationResult {
    /// The validated message. A `wfresh=0` directive has been cleared.
    pub message: Option<WsFederationMessage>,
    /// Resolved client.
    pub client: Option<Client>,
    /// Resolved relying party settings.
    pub relying_party: Option<RelyingParty>,
    /// Address the token will be posted to.
    pub reply_url: Option<String>,
    /// Authenticated caller.
    pub user: Option<Principal>,
    /// Whether interactive authentication must happen first.
    pub sign_in_required: bool,
    /// Rejection code.
    pub error: Option<SignInError>,
}

/// What the caller should do with a validated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInOutcome<'a> {
    /// Render an error page.
    Error(SignInError),
    /// Show the login page, then validate again.
    SignInRequired,
    /// Issue a token and post it to the reply address.
    Issue {
        /// Reply address.
        reply_url: &'a str,
    },
}

/// Flat, log-safe description of a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    /// Rejection code, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    /// Realm from the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,
    /// Resolved client identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Whether sign-in is required.
    pub sign_in_required: bool,
}

impl SignInValidationResult {
    /// Creates a rejected result carrying only the error code.
    #[must_use]
    pub fn rejected(error: SignInError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    /// Returns true if the request was rejected.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Projects the result onto the action the caller should take.
    ///
    /// A result without error, sign-in requirement or reply address cannot
    /// be produced by the validator and is reported as an invalid relying
    /// party.
    #[must_use]
    pub fn outcome(&self) -> SignInOutcome<'_> {
        if let Some(error) = self.error {
            return SignInOutcome::Error(error);
        }
        if self.sign_in_required {
            return SignInOutcome::SignInRequired;
        }
        match self.reply_url.as_deref() {
            Some(reply_url) => SignInOutcome::Issue { reply_url },
            None => SignInOutcome::Error(SignInError::InvalidRelyingParty),
        }
    }

    /// Returns a summary suitable for logging. The principal and the full
    /// message are left out.
    ///
    /// A rejected result carries nothing but its error code, so its summary
    /// has no realm or client id. The validator logs those at the point of
    /// rejection.
    #[must_use]
    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary {
            error: self.error.map(|error| error.code()),
            realm: self
                .message
                .as_ref()
                .and_then(|message| message.wtrealm.clone()),
            client_id: self.client.as_ref().map(|client| client.client_id.clone()),
            sign_in_required: self.sign_in_required,
        }
    }
}
