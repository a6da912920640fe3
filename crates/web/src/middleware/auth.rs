use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use storage::{Database, models::Principal, repository::user::UserRepository};
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::policy::{Action, Resource};

/// State of the per-resource authentication layer
#[derive(Clone)]
pub struct AuthState {
    db: Database,
    resource: Resource,
}

impl AuthState {
    pub fn new(db: Database, resource: Resource) -> Self {
        Self { db, resource }
    }
}

/// Resolve the caller from its API key and apply the resource's class-level
/// policy. On success the [`Principal`] is stored in the request extensions.
pub async fn require_permission(
    State(auth): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let principal = resolve_principal(&auth.db, request.headers()).await?;
    let action = Action::from_method(request.method());

    if !auth
        .resource
        .policy()
        .has_permission(principal.as_ref(), action)
    {
        tracing::warn!(
            user_id = principal.map(|p| p.user_id),
            resource = auth.resource.name(),
            ?action,
            "Permission denied"
        );
        return Err(WebError::Forbidden);
    }

    if let Some(principal) = principal {
        request.extensions_mut().insert(principal);
    }

    Ok(next.run(request).await)
}

async fn resolve_principal(db: &Database, headers: &HeaderMap) -> WebResult<Option<Principal>> {
    let Some(api_key) = extract_api_key(headers) else {
        return Ok(None);
    };

    let user = UserRepository::new(db.pool())
        .find_by_api_key(api_key)
        .await?;

    if user.is_none() {
        tracing::warn!("Unknown API key");
    }

    Ok(user.as_ref().map(Principal::from))
}

/// Read `Authorization: Bearer <key>` (or `Token <key>`) as a UUID key
pub fn extract_api_key(headers: &HeaderMap) -> Option<Uuid> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, key) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") && !scheme.eq_ignore_ascii_case("token") {
        return None;
    }

    Uuid::parse_str(key.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_and_token_schemes() {
        let key = Uuid::new_v4();
        assert_eq!(extract_api_key(&headers(&format!("Bearer {key}"))), Some(key));
        assert_eq!(extract_api_key(&headers(&format!("bearer {key}"))), Some(key));
        assert_eq!(extract_api_key(&headers(&format!("Token {key}"))), Some(key));
    }

    #[test]
    fn test_rejects_missing_or_malformed_keys() {
        assert_eq!(extract_api_key(&HeaderMap::new()), None);
        assert_eq!(extract_api_key(&headers("Bearer")), None);
        assert_eq!(extract_api_key(&headers("Bearer not-a-uuid")), None);
        assert_eq!(
            extract_api_key(&headers(&format!("Basic {}", Uuid::new_v4()))),
            None
        );
    }
}
