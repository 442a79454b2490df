//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
mod payload;
pub mod state;
pub mod tickets;
pub mod users;

use actix_web::web;

pub use error::ApiResult;

/// Register the users and tickets endpoints with their shared state.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use helpdesk::domain::ShapePolicy;
/// use helpdesk::inbound::http::{configure_api, state::HttpState};
///
/// let state = HttpState::in_memory(ShapePolicy::Advisory);
/// let app = App::new().configure(configure_api(state));
/// ```
pub fn configure_api(state: state::HttpState) -> impl FnOnce(&mut web::ServiceConfig) {
    let state = web::Data::new(state);
    move |cfg| {
        cfg.app_data(state)
            .app_data(error::json_config())
            .service(users::list_users)
            .service(users::get_user)
            .service(users::create_user)
            .service(users::update_user)
            .service(users::delete_user)
            .service(tickets::list_tickets)
            .service(tickets::get_ticket)
            .service(tickets::create_ticket)
            .service(tickets::update_ticket_status)
            .service(tickets::delete_ticket);
    }
}
