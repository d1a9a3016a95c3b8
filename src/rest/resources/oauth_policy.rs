//! OAuth policy resource.

use crate::rest::resources::{Application, Tenant};

resource_type! {
    /// Token lifetimes for an application's OAuth endpoint.
    OAuthPolicy => OAuthPolicy
}

impl OAuthPolicy {
    accessors! {
        /// Returns the access token lifetime as an ISO 8601 duration (`PT1H`).
        access_token_ttl, set_access_token_ttl: String = "accessTokenTtl";
        /// Returns the refresh token lifetime as an ISO 8601 duration.
        refresh_token_ttl, set_refresh_token_ttl: String = "refreshTokenTtl";
        /// Returns the URL tokens are requested from.
        token_endpoint: String = "tokenEndpoint";
    }

    links! {
        /// Returns the application the policy belongs to.
        application: Application = "application";
        /// Returns the owning tenant.
        tenant: Tenant = "tenant";
    }
}
