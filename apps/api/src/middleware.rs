use std::net::{IpAddr, SocketAddr};

use axum::Json;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use folio_application::{RateLimitOutcome, RateLimitRequest, RateLimitRule, RateLimitService};
use folio_core::{AppError, UserIdentity};

use crate::error::{ApiResult, ErrorResponse};
use crate::state::AppState;

const FORWARDED_FOR: &str = "x-forwarded-for";

/// How the client address used for `ip:<address>` keys is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientIpSource {
    /// The TCP peer address.
    PeerAddress,
    /// The first `X-Forwarded-For` entry, falling back to the peer address.
    ForwardedFor,
}

impl ClientIpSource {
    pub fn resolve(self, request: &Request) -> Option<IpAddr> {
        let peer = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(address)| address.ip());

        match self {
            Self::PeerAddress => peer,
            Self::ForwardedFor => forwarded_for(request.headers()).or(peer),
        }
    }
}

fn forwarded_for(headers: &HeaderMap) -> Option<IpAddr> {
    headers
        .get(FORWARDED_FOR)?
        .to_str()
        .ok()?
        .split(',')
        .next()?
        .trim()
        .parse()
        .ok()
}

/// Middleware state for one rate-limited route group.
#[derive(Clone)]
pub struct RateLimitGuard {
    pub service: RateLimitService,
    pub rule: RateLimitRule,
    pub client_ip: ClientIpSource,
}

impl RateLimitGuard {
    pub fn new(state: &AppState, rule: RateLimitRule) -> Self {
        Self {
            service: state.rate_limit_service.clone(),
            rule,
            client_ip: state.client_ip,
        }
    }
}

/// Resolves an optional bearer token into a [`UserIdentity`] extension.
///
/// Requests without an `Authorization: Bearer` header pass through
/// anonymously; a bearer token that fails verification is rejected.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_owned());

    if let Some(token) = token {
        let identity = state.user_service.authenticate(&token).await?;
        request.extensions_mut().insert(identity);
    }

    Ok(next.run(request).await)
}

pub async fn require_auth(request: Request, next: Next) -> ApiResult<Response> {
    if request.extensions().get::<UserIdentity>().is_none() {
        return Err(AppError::Unauthorized(
            "Authentication credentials were not provided.".to_owned(),
        )
        .into());
    }

    Ok(next.run(request).await)
}

/// Admits the request against the guard's rule or answers 429.
///
/// Store failures propagate as errors and the route handler does not run.
pub async fn rate_limit(
    State(guard): State<RateLimitGuard>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    let mut rate_limit_request =
        RateLimitRequest::new(request.method().as_str(), request.uri().path());
    rate_limit_request.identity = request.extensions().get::<UserIdentity>().cloned();
    rate_limit_request.ip_address = guard.client_ip.resolve(&request);

    let outcome = guard
        .service
        .guard(&guard.rule, &rate_limit_request, move || next.run(request))
        .await?;

    Ok(match outcome {
        RateLimitOutcome::Admitted(response) => response,
        RateLimitOutcome::Rejected(exceeded) => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse::new(exceeded.detail())),
        )
            .into_response(),
    })
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr, SocketAddr};

    use axum::body::Body;
    use axum::extract::ConnectInfo;
    use axum::http::Request;

    use super::ClientIpSource;

    fn request(forwarded: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/api/login/");
        if let Some(forwarded) = forwarded {
            builder = builder.header("x-forwarded-for", forwarded);
        }

        let mut request = builder.body(Body::empty()).unwrap_or_default();
        request.extensions_mut().insert(ConnectInfo(SocketAddr::from((
            Ipv4Addr::new(10, 0, 0, 9),
            4000,
        ))));
        request
    }

    #[test]
    fn peer_address_ignores_forwarded_header() {
        let resolved = ClientIpSource::PeerAddress.resolve(&request(Some("203.0.113.7")));
        assert_eq!(resolved, Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 9))));
    }

    #[test]
    fn forwarded_for_uses_first_entry() {
        let resolved =
            ClientIpSource::ForwardedFor.resolve(&request(Some("203.0.113.7, 10.0.0.1")));
        assert_eq!(resolved, Some(IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7))));
    }

    #[test]
    fn malformed_forwarded_for_falls_back_to_peer() {
        let resolved = ClientIpSource::ForwardedFor.resolve(&request(Some("not-an-ip")));
        assert_eq!(resolved, Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 9))));
    }
}
