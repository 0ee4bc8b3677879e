use axum::extract::MatchedPath;
use axum::extract::Request;
use axum::extract::State;
use axum::http::Method;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::Role;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Authenticated identity attached to request extensions by the guard.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub role: Role,
}

/// One row of the authorization policy table.
pub struct RoutePolicy {
    pub method: &'static str,
    /// Route template as registered with the router, e.g. "/employees/:id"
    pub route: &'static str,
    pub allowed: &'static [Role],
}

const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Declarative route → required-role mapping.
///
/// Routes not listed here accept any authenticated role. Everything behind
/// the guard already requires a valid token; this table only adds the role
/// stage for mutating operations.
pub const ROUTE_POLICIES: &[RoutePolicy] = &[
    RoutePolicy {
        method: "POST",
        route: "/employees",
        allowed: ADMIN_ONLY,
    },
    RoutePolicy {
        method: "PUT",
        route: "/employees/:id",
        allowed: ADMIN_ONLY,
    },
    RoutePolicy {
        method: "DELETE",
        route: "/employees/:id",
        allowed: ADMIN_ONLY,
    },
];

/// Look up the allow-list for a route; None means any authenticated role.
pub fn required_roles(method: &Method, route: &str) -> Option<&'static [Role]> {
    ROUTE_POLICIES
        .iter()
        .find(|policy| policy.method == method.as_str() && policy.route == route)
        .map(|policy| policy.allowed)
}

/// Two-stage authorization guard.
///
/// Stage one verifies the bearer token and attaches `CurrentUser` to the
/// request; stage two consults the policy table for the matched route. The
/// handler only ever runs after both stages pass.
pub async fn authorize(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    // Authentication stage
    let token = extract_token_from_header(&req)?;

    let claims: auth::Claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
    })?;

    let current_user = parse_claims(&claims).map_err(|e| {
        tracing::warn!("Malformed token claims: {}", e);
        ApiError::Unauthorized("Invalid token format".to_string()).into_response()
    })?;

    // Role stage: consult the policy table for the matched route template
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string());

    if !route_allowed(req.method(), route.as_deref(), current_user.role) {
        tracing::warn!(
            user_id = current_user.id,
            role = %current_user.role,
            route = route.as_deref().unwrap_or("<unmatched>"),
            "Role not permitted for route"
        );
        return Err(
            ApiError::Forbidden("Insufficient role for this operation".to_string())
                .into_response(),
        );
    }

    req.extensions_mut().insert(current_user);

    Ok(next.run(req).await)
}

/// Evaluate the role stage for one request.
///
/// A request reaching the guard without a matched route template is denied
/// outright: without the template the policy table cannot be consulted, and
/// skipping the role stage would let the request through unchecked.
fn route_allowed(method: &Method, route: Option<&str>, role: Role) -> bool {
    match route {
        Some(route) => {
            required_roles(method, route).map_or(true, |allowed| allowed.contains(&role))
        }
        None => false,
    }
}

fn parse_claims(claims: &auth::Claims) -> Result<CurrentUser, String> {
    let id = claims
        .sub
        .parse::<i64>()
        .map_err(|e| format!("bad subject: {}", e))?;
    let role = claims
        .role
        .parse::<Role>()
        .map_err(|e| format!("bad role: {}", e))?;

    Ok(CurrentUser { id, role })
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            ApiError::Unauthorized("Missing Authorization header".to_string()).into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        ApiError::Unauthorized("Invalid Authorization header".to_string()).into_response()
    })?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
        .into_response()
    })
}
