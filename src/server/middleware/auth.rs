use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::context::ActorContext,
    service::auth::AuthService,
    state::AppState,
};

/// Resolves the `Authorization` header of a request into an `ActorContext`.
pub struct AuthGuard<'a> {
    auth: AuthService<'a>,
}

impl<'a> AuthGuard<'a> {
    pub fn new(auth: AuthService<'a>) -> Self {
        Self { auth }
    }

    pub fn from_state(state: &'a AppState) -> Self {
        Self::new(AuthService::new(
            &state.db,
            &state.tokens,
            &state.otp,
            &state.notifications,
        ))
    }

    /// Builds the caller context from the request headers.
    ///
    /// # Returns
    /// - `Ok(ActorContext::anonymous())` - No `Authorization` header
    /// - `Ok(ActorContext)` - Valid bearer token for an existing account
    /// - `Err(AuthError)` - Malformed header, bad token or unknown subject
    pub async fn resolve(&self, headers: &HeaderMap) -> Result<ActorContext, AppError> {
        let Some(value) = headers.get(AUTHORIZATION) else {
            return Ok(ActorContext::anonymous());
        };

        let token = value
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MalformedHeader)?;

        let claims = self
            .auth
            .verify_token(token)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        self.auth
            .resolve_actor(&claims.sub)
            .await?
            .ok_or_else(|| AuthError::UnknownSubject(claims.sub).into())
    }

    /// Same as `resolve` but rejects anonymous callers.
    pub async fn require(&self, headers: &HeaderMap) -> Result<ActorContext, AppError> {
        let ctx = self.resolve(headers).await?;

        if ctx.is_anonymous() {
            return Err(AuthError::Unauthenticated.into());
        }

        Ok(ctx)
    }
}

/// Extractor yielding the caller context, anonymous when no token is sent.
pub struct Actor(pub ActorContext);

impl FromRequestParts<AppState> for Actor {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        AuthGuard::from_state(state)
            .resolve(&parts.headers)
            .await
            .map(Actor)
    }
}

/// Extractor that only accepts authenticated callers.
pub struct Authenticated(pub ActorContext);

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        AuthGuard::from_state(state)
            .require(&parts.headers)
            .await
            .map(Authenticated)
    }
}

