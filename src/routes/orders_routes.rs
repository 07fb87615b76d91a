use axum::{Router, routing::get};

use crate::{AppState, controllers::orders_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    // Any other verb on /orders is answered 405 by the method router, before
    // a handler (and therefore the store) is ever reached.
    router.route(
        "/orders",
        get(orders_controller::get_orders).post(orders_controller::create_order),
    )
}
