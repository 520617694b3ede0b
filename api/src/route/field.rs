use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    availability::{get_availability, quote},
    field::{register_field, show_field, show_field_list},
    reservation::create_reservation,
    schedule::{add_window, remove_window, window_list},
};

pub fn build_field_routers() -> Router<AppRegistry> {
    let fields_routers = Router::new()
        .route("/", post(register_field))
        .route("/", get(show_field_list))
        .route("/:field_id", get(show_field))
        .route("/:field_id/windows", post(add_window))
        .route("/:field_id/windows", get(window_list))
        .route("/:field_id/windows/:window_id", delete(remove_window))
        .route("/:field_id/availability", get(get_availability))
        .route("/:field_id/quote", post(quote))
        .route("/:field_id/reservations", post(create_reservation));

    Router::new().nest("/fields", fields_routers)
}
