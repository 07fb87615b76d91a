use axum::Router;

use crate::AppState;

pub mod orders_routes;

pub fn app(state: AppState) -> Router {
    let router = Router::<AppState>::new();

    let router = orders_routes::add_routes(router);

    router.with_state(state)
}
