//! Authentication extractors.
//!
//! The actor of every mutation comes from a bearer token; request bodies can
//! never name it.

use std::future::{Ready, ready};
use std::sync::Arc;

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};

use chirp_core::IdentityRef;
use chirp_core::ports::{AuthError, TokenClaims, TokenService};
use chirp_shared::ErrorResponse;

/// Authenticated actor extractor.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.actor)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub actor: IdentityRef,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            actor: claims.subject,
        }
    }
}

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let message = match &self.0 {
            AuthError::TokenExpired => "Your authentication token has expired".to_string(),
            AuthError::InvalidToken(msg) => format!("Invalid token: {}", msg),
            AuthError::MissingAuth => {
                "Please provide a valid Bearer token in the Authorization header".to_string()
            }
        };

        actix_web::HttpResponse::build(self.status_code()).json(ErrorResponse::unauthorized(message))
    }
}

fn authenticate(req: &HttpRequest) -> Result<Identity, AuthenticationError> {
    let token_service = req
        .app_data::<web::Data<Arc<dyn TokenService>>>()
        .ok_or_else(|| {
            tracing::error!("TokenService not found in app data");
            AuthenticationError(AuthError::InvalidToken(
                "Server configuration error".to_string(),
            ))
        })?;

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthenticationError(AuthError::MissingAuth))?;

    let auth_str = auth_header.to_str().map_err(|_| {
        AuthenticationError(AuthError::InvalidToken(
            "Invalid authorization header".to_string(),
        ))
    })?;

    let token = auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        AuthenticationError(AuthError::InvalidToken("Expected Bearer token".to_string()))
    })?;

    token_service
        .validate_token(token)
        .map(Identity::from)
        .map_err(AuthenticationError)
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

/// Optional identity extractor - anonymous readers get `None`.
pub struct OptionalIdentity(pub Option<Identity>);

impl OptionalIdentity {
    pub fn actor(&self) -> Option<IdentityRef> {
        self.0.as_ref().map(|identity| identity.actor)
    }
}

impl FromRequest for OptionalIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(OptionalIdentity(authenticate(req).ok())))
    }
}
