//! OpenAPI documentation configuration.
//!
//! The generated document is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{Ticket, TicketStatus, User};
use crate::inbound::http::error::{ErrorBody, MessageBody};
use crate::inbound::http::tickets::{CreateTicketRequest, TicketStatusResponse, UpdateStatusRequest};
use crate::inbound::http::users::{UserMutationResponse, UserRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Helpdesk API",
        description = "Users and support tickets over JSON."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::tickets::list_tickets,
        crate::inbound::http::tickets::get_ticket,
        crate::inbound::http::tickets::create_ticket,
        crate::inbound::http::tickets::update_ticket_status,
        crate::inbound::http::tickets::delete_ticket,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        UserRequest,
        UserMutationResponse,
        Ticket,
        TicketStatus,
        CreateTicketRequest,
        UpdateStatusRequest,
        TicketStatusResponse,
        ErrorBody,
        MessageBody,
    )),
    tags(
        (name = "users", description = "User accounts"),
        (name = "tickets", description = "Support tickets raised by users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document's shape.

    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    fn assert_object_schema_has_fields(name: &str, fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas
            .get(name)
            .unwrap_or_else(|| panic!("{name} schema registered"));
        let RefOr::T(Schema::Object(object)) = schema else {
            panic!("{name} should be an object schema");
        };
        for field in fields {
            assert!(
                object.properties.contains_key(*field),
                "{name} should have field '{field}'"
            );
        }
    }

    #[rstest]
    #[case("User", &["id", "name", "email"])]
    #[case("Ticket", &["id", "userId", "description", "status", "createdAt"])]
    #[case("ErrorBody", &["error"])]
    #[case("MessageBody", &["message"])]
    fn schemas_expose_wire_field_names(#[case] name: &str, #[case] fields: &[&str]) {
        assert_object_schema_has_fields(name, fields);
    }

    #[rstest]
    #[case("/users")]
    #[case("/users/{id}")]
    #[case("/tickets")]
    #[case("/tickets/{id}")]
    #[case("/tickets/{id}/status")]
    #[case("/health/ready")]
    fn paths_are_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}
