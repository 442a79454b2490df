//! Tests for tickets API handlers.

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test as actix_test};
use chrono::{TimeZone, Utc};
use mockall::predicate::eq;
use rstest::rstest;
use serde_json::json;

use super::*;
use crate::domain::ports::{MockTicketsCommand, MockTicketsQuery, MockUsersCommand, MockUsersQuery};
use crate::domain::{TicketDraft, TicketStatus, USER_NOT_FOUND, UserId};
use crate::inbound::http::error::json_config;

fn printer_ticket(id: u64) -> Ticket {
    let created_at = Utc
        .with_ymd_and_hms(2026, 10, 19, 9, 30, 0)
        .single()
        .expect("valid timestamp");
    Ticket::open(
        TicketId::new(id),
        TicketDraft::new(UserId::new(1), "printer broken", created_at),
    )
}

fn state(query: MockTicketsQuery, command: MockTicketsCommand) -> HttpState {
    HttpState {
        users: Arc::new(MockUsersQuery::new()),
        users_command: Arc::new(MockUsersCommand::new()),
        tickets: Arc::new(query),
        tickets_command: Arc::new(command),
    }
}

fn command_only(command: MockTicketsCommand) -> HttpState {
    state(MockTicketsQuery::new(), command)
}

async fn call(state: HttpState, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(json_config())
            .service(list_tickets)
            .service(get_ticket)
            .service(create_ticket)
            .service(update_ticket_status)
            .service(delete_ticket),
    )
    .await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body_json(response).await;
    (status, body)
}

#[rstest]
#[actix_web::test]
async fn get_serialises_camel_case_fields() {
    let mut query = MockTicketsQuery::new();
    query
        .expect_get_ticket()
        .with(eq(TicketId::new(4)))
        .times(1)
        .return_once(|_| Ok(printer_ticket(4)));

    let (status, body) = call(
        state(query, MockTicketsCommand::new()),
        actix_test::TestRequest::get().uri("/tickets/4"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 4,
            "userId": 1,
            "description": "printer broken",
            "status": "Open",
            "createdAt": "2026-10-19T09:30:00Z"
        })
    );
}

#[rstest]
#[case(json!({"userId": 1, "description": "printer broken"}), Some("1"))]
#[case(json!({"userId": "1", "description": "printer broken"}), Some("1"))]
#[case(json!({"userId": null, "description": "printer broken"}), None)]
#[case(json!({"description": "printer broken"}), None)]
#[case(json!({"userId": true, "description": "printer broken"}), Some("true"))]
#[actix_web::test]
async fn create_passes_user_id_as_text(#[case] body: Value, #[case] expected: Option<&'static str>) {
    let mut command = MockTicketsCommand::new();
    command
        .expect_create_ticket()
        .withf(move |input| input.user_id.as_deref() == expected)
        .times(1)
        .return_once(|_| Ok(printer_ticket(1)));

    let (status, response) = call(
        command_only(command),
        actix_test::TestRequest::post().uri("/tickets").set_json(body),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response.get("status"), Some(&json!("Open")));
}

#[rstest]
#[case(json!({"userId": 1, "description": 5}))]
#[case(json!({"userId": 1, "description": ["printer broken"]}))]
#[actix_web::test]
async fn non_string_description_is_forwarded_as_absent(#[case] body: Value) {
    let mut command = MockTicketsCommand::new();
    command
        .expect_create_ticket()
        .withf(|input| input.description.is_none())
        .times(1)
        .return_once(|_| Err(Error::invalid_request("The fields userId and description are required.")));

    let (status, response) = call(
        command_only(command),
        actix_test::TestRequest::post().uri("/tickets").set_json(body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response,
        json!({"error": "The fields userId and description are required."})
    );
}

#[rstest]
#[actix_web::test]
async fn create_reports_unknown_user_under_error_key() {
    let mut command = MockTicketsCommand::new();
    command
        .expect_create_ticket()
        .times(1)
        .return_once(|_| Err(Error::not_found(USER_NOT_FOUND)));

    let (status, body) = call(
        command_only(command),
        actix_test::TestRequest::post()
            .uri("/tickets")
            .set_json(json!({"userId": 999, "description": "printer broken"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": USER_NOT_FOUND}));
}

#[rstest]
#[actix_web::test]
async fn status_update_wraps_ticket_with_message() {
    let mut command = MockTicketsCommand::new();
    command
        .expect_update_ticket_status()
        .with(eq(TicketId::new(2)), eq(Some("Closed".to_owned())))
        .times(1)
        .return_once(|_, _| {
            let mut ticket = printer_ticket(2);
            ticket.set_status(TicketStatus::Closed);
            Ok(ticket)
        });

    let (status, body) = call(
        command_only(command),
        actix_test::TestRequest::put()
            .uri("/tickets/2/status")
            .set_json(json!({"status": "Closed"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.get("message"), Some(&json!(TICKET_STATUS_UPDATED)));
    assert_eq!(body.pointer("/ticket/status"), Some(&json!("Closed")));
}

#[rstest]
#[case(json!({"status": 3}))]
#[case(json!({"status": null}))]
#[case(json!({}))]
#[actix_web::test]
async fn non_string_status_is_forwarded_as_absent(#[case] body: Value) {
    let mut command = MockTicketsCommand::new();
    command
        .expect_update_ticket_status()
        .with(eq(TicketId::new(2)), eq(None))
        .times(1)
        .return_once(|_, _| Err(Error::not_found(TICKET_NOT_FOUND)));

    let (status, response) = call(
        command_only(command),
        actix_test::TestRequest::put()
            .uri("/tickets/2/status")
            .set_json(body),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response, json!({"message": TICKET_NOT_FOUND}));
}

#[rstest]
#[case("status=Closed", "application/x-www-form-urlencoded")]
#[case("{\"status\":", "application/json")]
#[actix_web::test]
async fn unreadable_status_body_is_forwarded_as_absent(
    #[case] payload: &'static str,
    #[case] content_type: &'static str,
) {
    let mut command = MockTicketsCommand::new();
    command
        .expect_update_ticket_status()
        .with(eq(TicketId::new(2)), eq(None))
        .times(1)
        .return_once(|_, _| Err(Error::not_found(TICKET_NOT_FOUND)));

    let (status, response) = call(
        command_only(command),
        actix_test::TestRequest::put()
            .uri("/tickets/2/status")
            .insert_header(("content-type", content_type))
            .set_payload(payload),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response, json!({"message": TICKET_NOT_FOUND}));
}

#[rstest]
#[actix_web::test]
async fn status_update_on_non_numeric_id_uses_message_key() {
    let (status, body) = call(
        command_only(MockTicketsCommand::new()),
        actix_test::TestRequest::put()
            .uri("/tickets/abc/status")
            .set_json(json!({"status": "Open"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": TICKET_NOT_FOUND}));
    assert!(body.get("ticket").is_none());
}

#[rstest]
#[actix_web::test]
async fn delete_returns_only_message() {
    let mut command = MockTicketsCommand::new();
    command
        .expect_delete_ticket()
        .with(eq(TicketId::new(5)))
        .times(1)
        .return_once(|_| Ok(printer_ticket(5)));

    let (status, body) = call(
        command_only(command),
        actix_test::TestRequest::delete().uri("/tickets/5"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": TICKET_DELETED}));
}

#[rstest]
#[actix_web::test]
async fn delete_unknown_ticket_uses_error_key() {
    let mut command = MockTicketsCommand::new();
    command
        .expect_delete_ticket()
        .times(1)
        .return_once(|_| Err(Error::not_found(TICKET_NOT_FOUND)));

    let (status, body) = call(
        command_only(command),
        actix_test::TestRequest::delete().uri("/tickets/5"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": TICKET_NOT_FOUND}));
}
