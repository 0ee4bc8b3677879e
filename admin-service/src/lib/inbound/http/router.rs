use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_employee::create_employee;
use super::handlers::delete_employee::delete_employee;
use super::handlers::get_employee::get_employee;
use super::handlers::list_employees::list_employees;
use super::handlers::login::login;
use super::handlers::me::me;
use super::handlers::update_employee::update_employee;
use super::middleware::authorize;
use crate::domain::employee::service::EmployeeService;
use crate::domain::user::service::AuthService;
use crate::outbound::repositories::employee::PostgresEmployeeRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PostgresUserRepository>>,
    pub employee_service: Arc<EmployeeService<PostgresEmployeeRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    auth_service: Arc<AuthService<PostgresUserRepository>>,
    employee_service: Arc<EmployeeService<PostgresEmployeeRepository>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        auth_service,
        employee_service,
        authenticator,
    };

    let public_routes = Router::new().route("/auth/login", post(login));

    // Everything below the guard; the role stage is driven by the policy
    // table in middleware.rs
    let protected_routes = Router::new()
        .route("/auth/me", get(me))
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), authorize));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
