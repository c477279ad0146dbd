//! WS-Federation protocol message.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::constants::{actions, parameters};

/// Action requested by a WS-Federation message (`wa`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WsFederationAction {
    /// `wsignin1.0`
    SignIn,
    /// `wsignout1.0`
    SignOut,
    /// `wsignoutcleanup1.0`
    SignOutCleanup,
    /// Missing or unrecognised action.
    Unknown,
}

impl WsFederationAction {
    /// Classifies an action code. Matching is exact.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            actions::SIGN_IN => Self::SignIn,
            actions::SIGN_OUT => Self::SignOut,
            actions::SIGN_OUT_CLEANUP => Self::SignOutCleanup,
            _ => Self::Unknown,
        }
    }

    /// Returns the action code, or `None` for [`Self::Unknown`].
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::SignIn => Some(actions::SIGN_IN),
            Self::SignOut => Some(actions::SIGN_OUT),
            Self::SignOutCleanup => Some(actions::SIGN_OUT_CLEANUP),
            Self::Unknown => None,
        }
    }
}

/// A WS-Federation passive requestor message.
///
/// The well-known parameters are exposed as fields; every other query
/// parameter is kept in [`Self::extra`] so nothing the relying party sent
/// is lost.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WsFederationMessage {
    /// Action (`wa`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wa: Option<String>,

    /// Realm of the relying party (`wtrealm`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wtrealm: Option<String>,

    /// Reply address (`wreply`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wreply: Option<String>,

    /// Opaque relying party context (`wctx`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wctx: Option<String>,

    /// Freshness requirement in minutes (`wfresh`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wfresh: Option<String>,

    /// Any other parameters, keyed by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl WsFederationMessage {
    /// Builds a message from decoded query pairs.
    ///
    /// The first occurrence of a repeated key wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut message = Self::default();
        for (key, value) in pairs {
            let key = key.as_ref();
            let slot = match key {
                parameters::WA => &mut message.wa,
                parameters::WTREALM => &mut message.wtrealm,
                parameters::WREPLY => &mut message.wreply,
                parameters::WCTX => &mut message.wctx,
                parameters::WFRESH => &mut message.wfresh,
                _ => {
                    message
                        .extra
                        .entry(key.to_string())
                        .or_insert_with(|| value.into());
                    continue;
                }
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        message
    }

    /// Creates a sign-in request for the given realm.
    #[must_use]
    pub fn sign_in(realm: impl Into<String>) -> Self {
        Self {
            wa: Some(actions::SIGN_IN.to_string()),
            wtrealm: Some(realm.into()),
            ..Self::default()
        }
    }

    /// Sets the freshness requirement.
    #[must_use]
    pub fn with_wfresh(mut self, wfresh: impl Into<String>) -> Self {
        self.wfresh = Some(wfresh.into());
        self
    }

    /// Sets the reply address.
    #[must_use]
    pub fn with_wreply(mut self, wreply: impl Into<String>) -> Self {
        self.wreply = Some(wreply.into());
        self
    }

    /// Sets the relying party context.
    #[must_use]
    pub fn with_wctx(mut self, wctx: impl Into<String>) -> Self {
        self.wctx = Some(wctx.into());
        self
    }

    /// Returns the requested action.
    #[must_use]
    pub fn action(&self) -> WsFederationAction {
        self.wa
            .as_deref()
            .map_or(WsFederationAction::Unknown, WsFederationAction::from_code)
    }

    /// Returns true if this is a sign-in request (`wa=wsignin1.0`).
    #[must_use]
    pub fn is_sign_in_message(&self) -> bool {
        self.action() == WsFederationAction::SignIn
    }

    /// Returns true if this is a sign-out request (`wa=wsignout1.0`).
    #[must_use]
    pub fn is_sign_out_message(&self) -> bool {
        self.action() == WsFederationAction::SignOut
    }

    /// Returns the realm, treating an empty value as absent.
    #[must_use]
    pub fn realm(&self) -> Option<&str> {
        self.wtrealm.as_deref().filter(|realm| !realm.is_empty())
    }

    /// Looks up any parameter by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        match name {
            parameters::WA => self.wa.as_deref(),
            parameters::WTREALM => self.wtrealm.as_deref(),
            parameters::WREPLY => self.wreply.as_deref(),
            parameters::WCTX => self.wctx.as_deref(),
            parameters::WFRESH => self.wfresh.as_deref(),
            _ => self.extra.get(name).map(String::as_str),
        }
    }
}
