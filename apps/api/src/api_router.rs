mod cors;

use axum::Router;
use axum::extract::Extension;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use cableflow_core::{AppError, Role};
use cableflow_domain::RouteRequirement;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{auth, handlers, middleware};

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let admin_routes = Router::new()
        .route("/admin", get(handlers::admin::dashboard_handler))
        .route("/admin/members", get(handlers::admin::list_members_handler))
        .route(
            "/admin/members/add",
            get(handlers::admin::member_form_handler),
        )
        .route(
            "/admin/members/{member_id}",
            get(handlers::admin::member_detail_handler),
        )
        .route(
            "/admin/recharge",
            get(handlers::admin::recharge_candidates_handler),
        )
        .route(
            "/admin/recharge/{member_id}",
            post(handlers::admin::recharge_member_handler),
        )
        .route("/admin/reports", get(handlers::admin::reports_handler))
        .route("/admin/settings", get(handlers::admin::settings_handler))
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_route_access,
        ))
        .layer(Extension(RouteRequirement::Role(Role::Administrator)));

    let member_routes = Router::new()
        .route("/member", get(handlers::member::overview_handler))
        .route("/member/plan", get(handlers::member::plan_handler))
        .route("/member/payments", get(handlers::member::payments_handler))
        .route(
            "/member/recharge",
            get(handlers::member::recharge_options_handler)
                .post(handlers::member::recharge_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_route_access,
        ))
        .layer(Extension(RouteRequirement::Role(Role::Subscriber)));

    let app = Router::new()
        .route("/", get(handlers::navigation::index_handler))
        .route("/health", get(handlers::health::health_handler))
        .route("/auth/login", post(auth::login_handler))
        .route("/auth/logout", post(auth::logout_handler))
        .route("/auth/me", get(auth::me_handler))
        .route(
            "/api/navigation",
            get(handlers::navigation::navigation_handler),
        )
        .merge(admin_routes)
        .merge(member_routes)
        .fallback(handlers::navigation::not_found_handler)
        .layer(TraceLayer::new_for_http())
        .layer(cors::build_cors_layer(frontend_url)?)
        .with_state(app_state);

    Ok(app)
}
