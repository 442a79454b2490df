//! Tickets API handlers.
//!
//! ```text
//! GET /tickets
//! GET /tickets/{id}
//! POST /tickets {"userId":1,"description":"printer broken"}
//! PUT /tickets/{id}/status {"status":"In Progress"}
//! DELETE /tickets/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{Error, TICKET_NOT_FOUND, Ticket, TicketId, TicketInput};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{ApiError, ErrorBody, MessageBody};
use crate::inbound::http::payload::{scalar_text, string_only};
use crate::inbound::http::state::HttpState;

/// Success message for `PUT /tickets/{id}/status`.
pub const TICKET_STATUS_UPDATED: &str = "Ticket status updated successfully.";
/// Success message for `DELETE /tickets/{id}`.
pub const TICKET_DELETED: &str = "Ticket deleted successfully.";

/// Request body for `POST /tickets`.
///
/// `userId` is accepted as a JSON number or a numeric string. A
/// `description` that is not a string is treated as missing.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    #[schema(value_type = Option<u64>, example = 1)]
    pub user_id: Option<Value>,
    #[schema(value_type = Option<String>, example = "printer broken")]
    pub description: Option<Value>,
}

impl From<CreateTicketRequest> for TicketInput {
    fn from(value: CreateTicketRequest) -> Self {
        Self {
            user_id: scalar_text(value.user_id),
            description: string_only(value.description),
        }
    }
}

/// Request body for `PUT /tickets/{id}/status`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    #[schema(value_type = Option<String>, example = "In Progress")]
    pub status: Option<Value>,
}

impl UpdateStatusRequest {
    fn into_status(self) -> Option<String> {
        string_only(self.status)
    }
}

/// Body returned by a successful status update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketStatusResponse {
    #[schema(example = "Ticket status updated successfully.")]
    pub message: String,
    pub ticket: Ticket,
}

fn parse_ticket_id(raw: &str) -> Result<TicketId, Error> {
    TicketId::parse(raw).ok_or_else(|| Error::not_found(TICKET_NOT_FOUND))
}

/// List all tickets in creation order.
#[utoipa::path(
    get,
    path = "/tickets",
    responses(
        (status = 200, description = "Tickets", body = [Ticket]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["tickets"],
    operation_id = "listTickets"
)]
#[get("/tickets")]
pub async fn list_tickets(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Ticket>>> {
    let tickets = state.tickets.list_tickets().await?;
    Ok(web::Json(tickets))
}

/// Fetch one ticket.
#[utoipa::path(
    get,
    path = "/tickets/{id}",
    params(("id" = u64, Path, description = "Ticket identifier")),
    responses(
        (status = 200, description = "Ticket", body = Ticket),
        (status = 404, description = "Ticket not found", body = ErrorBody)
    ),
    tags = ["tickets"],
    operation_id = "getTicket"
)]
#[get("/tickets/{id}")]
pub async fn get_ticket(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Ticket>> {
    let id = parse_ticket_id(&path)?;
    let ticket = state.tickets.get_ticket(id).await?;
    Ok(web::Json(ticket))
}

/// Open a ticket for an existing user.
#[utoipa::path(
    post,
    path = "/tickets",
    request_body = CreateTicketRequest,
    responses(
        (status = 201, description = "Ticket opened", body = Ticket),
        (status = 400, description = "Missing fields or malformed JSON", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody)
    ),
    tags = ["tickets"],
    operation_id = "createTicket"
)]
#[post("/tickets")]
pub async fn create_ticket(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTicketRequest>,
) -> ApiResult<HttpResponse> {
    let ticket = state
        .tickets_command
        .create_ticket(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(ticket))
}

/// Set a ticket's status.
///
/// Failures are reported under the `message` key. An unrecognised status,
/// including a body that is not JSON at all, is indistinguishable from an
/// unknown ticket.
#[utoipa::path(
    put,
    path = "/tickets/{id}/status",
    params(("id" = u64, Path, description = "Ticket identifier")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = TicketStatusResponse),
        (status = 404, description = "Ticket not found or status invalid", body = MessageBody)
    ),
    tags = ["tickets"],
    operation_id = "updateTicketStatus"
)]
#[put("/tickets/{id}/status")]
pub async fn update_ticket_status(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: Result<web::Json<UpdateStatusRequest>, actix_web::Error>,
) -> ApiResult<web::Json<TicketStatusResponse>> {
    let id = parse_ticket_id(&path).map_err(ApiError::message_keyed)?;
    let status = payload
        .ok()
        .and_then(|body| body.into_inner().into_status());
    let ticket = state
        .tickets_command
        .update_ticket_status(id, status)
        .await
        .map_err(ApiError::message_keyed)?;
    Ok(web::Json(TicketStatusResponse {
        message: TICKET_STATUS_UPDATED.to_owned(),
        ticket,
    }))
}

/// Delete a ticket.
#[utoipa::path(
    delete,
    path = "/tickets/{id}",
    params(("id" = u64, Path, description = "Ticket identifier")),
    responses(
        (status = 200, description = "Ticket deleted", body = MessageBody),
        (status = 404, description = "Ticket not found", body = ErrorBody)
    ),
    tags = ["tickets"],
    operation_id = "deleteTicket"
)]
#[delete("/tickets/{id}")]
pub async fn delete_ticket(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageBody>> {
    let id = parse_ticket_id(&path)?;
    state.tickets_command.delete_ticket(id).await?;
    Ok(web::Json(MessageBody {
        message: TICKET_DELETED.to_owned(),
    }))
}

#[cfg(test)]
mod tests;
