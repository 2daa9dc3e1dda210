use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use canvas_insight_application::credential::ApiCredential;

pub type BearerHeader = Option<TypedHeader<Authorization<Bearer>>>;

/// A non-empty bearer token wins over a key sent in the body.
pub fn resolve_credential(bearer: BearerHeader, body_key: Option<String>) -> ApiCredential {
    let from_header = bearer
        .map(|TypedHeader(Authorization(bearer))| bearer.token().to_string())
        .filter(|token| !token.trim().is_empty());

    from_header
        .or(body_key)
        .map_or_else(ApiCredential::empty, ApiCredential::new)
}
