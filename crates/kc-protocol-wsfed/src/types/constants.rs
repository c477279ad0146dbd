//! WS-Federation constants and URIs.
//!
//! Contains action codes, query parameter names, token type URIs,
//! algorithm URIs and claim type URIs used by the passive requestor
//! profile.

/// WS-Federation action codes (`wa` values).
pub mod actions {
    /// Sign-in request.
    pub const SIGN_IN: &str = "wsignin1.0";

    /// Sign-out request.
    pub const SIGN_OUT: &str = "wsignout1.0";

    /// Sign-out cleanup request.
    pub const SIGN_OUT_CLEANUP: &str = "wsignoutcleanup1.0";
}

/// WS-Federation query parameter names. Keys are case-sensitive.
pub mod parameters {
    /// Action.
    pub const WA: &str = "wa";

    /// Realm of the requesting relying party.
    pub const WTREALM: &str = "wtrealm";

    /// Reply address.
    pub const WREPLY: &str = "wreply";

    /// Opaque context round-tripped by the relying party.
    pub const WCTX: &str = "wctx";

    /// Freshness requirement, in minutes.
    pub const WFRESH: &str = "wfresh";

    /// Home realm hint.
    pub const WHR: &str = "whr";

    /// Requested authentication type.
    pub const WAUTH: &str = "wauth";

    /// Current time at the requestor.
    pub const WCT: &str = "wct";

    /// Resource being accessed.
    pub const WRES: &str = "wres";
}

// ============================================================================
// Token Types
// ============================================================================

/// Security token types a relying party can request.
pub mod token_types {
    /// SAML 1.1 token profile 1.1.
    pub const SAML11_TOKEN_PROFILE11: &str =
        "http://docs.oasis-open.org/wss/oasis-wss-saml-token-profile-1.1#SAMLV1.1";

    /// SAML 2.0 token profile 1.1.
    pub const SAML2_TOKEN_PROFILE11: &str =
        "http://docs.oasis-open.org/wss/oasis-wss-saml-token-profile-1.1#SAMLV2.0";
}

// ============================================================================
// Algorithms
// ============================================================================

/// XML signature algorithms.
pub mod signature_algorithms {
    /// RSA-SHA256 signature algorithm.
    pub const RSA_SHA256: &str = "http://www.w3.org/2001/04/xmldsig-more#rsa-sha256";

    /// RSA-SHA384 signature algorithm.
    pub const RSA_SHA384: &str = "http://www.w3.org/2001/04/xmldsig-more#rsa-sha384";

    /// RSA-SHA512 signature algorithm.
    pub const RSA_SHA512: &str = "http://www.w3.org/2001/04/xmldsig-more#rsa-sha512";
}

/// Digest algorithms.
pub mod digest_algorithms {
    /// SHA-256 digest algorithm.
    pub const SHA256: &str = "http://www.w3.org/2001/04/xmlenc#sha256";

    /// SHA-384 digest algorithm.
    pub const SHA384: &str = "http://www.w3.org/2001/04/xmldsig-more#sha384";

    /// SHA-512 digest algorithm.
    pub const SHA512: &str = "http://www.w3.org/2001/04/xmlenc#sha512";
}

/// SAML name identifier formats.
pub mod name_identifier_formats {
    /// Unspecified format.
    pub const UNSPECIFIED: &str = "urn:oasis:names:tc:SAML:1.1:nameid-format:unspecified";

    /// Email address format.
    pub const EMAIL: &str = "urn:oasis:names:tc:SAML:1.1:nameid-format:emailAddress";

    /// Persistent identifier format.
    pub const PERSISTENT: &str = "urn:oasis:names:tc:SAML:2.0:nameid-format:persistent";

    /// Transient identifier format.
    pub const TRANSIENT: &str = "urn:oasis:names:tc:SAML:2.0:nameid-format:transient";
}

// ============================================================================
// Claims
// ============================================================================

/// Short (JWT style) claim names carried by an authenticated principal.
pub mod jwt_claim_types {
    /// Subject identifier.
    pub const SUBJECT: &str = "sub";
    /// Full name.
    pub const NAME: &str = "name";
    /// Email address.
    pub const EMAIL: &str = "email";
    /// Given name.
    pub const GIVEN_NAME: &str = "given_name";
    /// Family name.
    pub const FAMILY_NAME: &str = "family_name";
    /// Birth date.
    pub const BIRTH_DATE: &str = "birthdate";
    /// Website.
    pub const WEBSITE: &str = "website";
    /// Gender.
    pub const GENDER: &str = "gender";
    /// Role.
    pub const ROLE: &str = "role";
    /// Authentication time (Unix seconds).
    pub const AUTHENTICATION_TIME: &str = "auth_time";
}

/// WS-* claim type URIs emitted in issued tokens.
pub mod ws_claim_types {
    /// Name identifier.
    pub const NAME_IDENTIFIER: &str =
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier";
    /// Name.
    pub const NAME: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name";
    /// Email address.
    pub const EMAIL: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress";
    /// Given name.
    pub const GIVEN_NAME: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/givenname";
    /// Surname.
    pub const SURNAME: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/surname";
    /// Date of birth.
    pub const DATE_OF_BIRTH: &str =
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/dateofbirth";
    /// Web page.
    pub const WEBPAGE: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/webpage";
    /// Gender.
    pub const GENDER: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/gender";
    /// Role.
    pub const ROLE: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";
    /// Authentication instant.
    pub const AUTHENTICATION_INSTANT: &str =
        "http://schemas.microsoft.com/ws/2008/06/identity/claims/authenticationinstant";
}
