use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::database::ActivityStore;

pub mod routes;

use routes::{activities, signup};

pub fn router(store: ActivityStore) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/activities") }))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(signup::signup_handler).delete(signup::unregister_handler),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .with_state(store)
}
