//! Behavioural tests for the users and tickets use-cases over in-memory stores.
use std::sync::{Arc, Mutex};

use futures::executor::block_on;
use helpdesk::domain::{
    Error, ErrorCode, ShapePolicy, Ticket, TicketId, TicketInput, USER_CONFLICT, User, UserInput,
};
use helpdesk::inbound::http::state::HttpState;
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then, when};

struct ResourceContext {
    state: HttpState,
    users: Vec<User>,
    ticket: Option<Ticket>,
    last_error: Option<Error>,
}

type SharedContext = Arc<Mutex<ResourceContext>>;

#[fixture]
fn world() -> SharedContext {
    Arc::new(Mutex::new(ResourceContext {
        state: HttpState::in_memory(ShapePolicy::Advisory),
        users: Vec::new(),
        ticket: None,
        last_error: None,
    }))
}

fn state(world: &SharedContext) -> HttpState {
    world.lock().expect("context lock").state.clone()
}

fn record<T>(world: &SharedContext, result: Result<T, Error>) -> Option<T> {
    let mut ctx = world.lock().expect("context lock");
    match result {
        Ok(value) => {
            ctx.last_error = None;
            Some(value)
        }
        Err(err) => {
            ctx.last_error = Some(err);
            None
        }
    }
}

#[given("a registered user {name} with email {email}")]
fn a_registered_user(world: SharedContext, name: String, email: String) {
    let state = state(&world);
    let user = block_on(state.users_command.create_user(UserInput::new(name, email)))
        .expect("user registers");
    world.lock().expect("context lock").users.push(user);
}

#[given("an open ticket for the first user")]
fn an_open_ticket(world: SharedContext) {
    let state = state(&world);
    let user_id = world.lock().expect("context lock").users[0].id();
    let ticket = block_on(
        state
            .tickets_command
            .create_ticket(TicketInput::new(user_id.to_string(), "printer broken")),
    )
    .expect("ticket opens");
    world.lock().expect("context lock").ticket = Some(ticket);
}

#[when("someone registers {name} with email {email}")]
fn someone_registers(world: SharedContext, name: String, email: String) {
    let state = state(&world);
    let result = block_on(state.users_command.create_user(UserInput::new(name, email)));
    if let Some(user) = record(&world, result) {
        world.lock().expect("context lock").users.push(user);
    }
}

#[when("the second user takes the first user's email")]
fn second_user_takes_first_email(world: SharedContext) {
    let state = state(&world);
    let (second, input) = {
        let ctx = world.lock().expect("context lock");
        (
            ctx.users[1].id(),
            UserInput::new(ctx.users[1].name(), ctx.users[0].email()),
        )
    };
    let result = block_on(state.users_command.update_user(second, input));
    record(&world, result);
}

#[when("the first user is deleted")]
fn first_user_is_deleted(world: SharedContext) {
    let state = state(&world);
    let id = world.lock().expect("context lock").users[0].id();
    let result = block_on(state.users_command.delete_user(id));
    record(&world, result);
}

#[when("the ticket status is set to {status}")]
fn ticket_status_is_set(world: SharedContext, status: String) {
    let state = state(&world);
    let id = ticket_id(&world);
    let result = block_on(
        state
            .tickets_command
            .update_ticket_status(id, Some(status)),
    );
    if let Some(ticket) = record(&world, result) {
        world.lock().expect("context lock").ticket = Some(ticket);
    }
}

fn ticket_id(world: &SharedContext) -> TicketId {
    world
        .lock()
        .expect("context lock")
        .ticket
        .as_ref()
        .map(Ticket::id)
        .expect("ticket opened")
}

fn assert_last_error(world: &SharedContext, code: ErrorCode, message: &str) {
    let ctx = world.lock().expect("context lock");
    let err = ctx.last_error.as_ref().expect("request failed");
    assert_eq!(err.code(), code);
    assert_eq!(err.message(), message);
}

#[then("the request conflicts with {message}")]
fn the_request_conflicts(world: SharedContext, message: String) {
    assert_last_error(&world, ErrorCode::Conflict, &message);
}

#[then("the request is not found with {message}")]
fn the_request_is_not_found(world: SharedContext, message: String) {
    assert_last_error(&world, ErrorCode::NotFound, &message);
}

#[then("{count} users are registered")]
fn users_are_registered(world: SharedContext, count: usize) {
    let state = state(&world);
    let users = block_on(state.users.list_users()).expect("list users");
    assert_eq!(users.len(), count);
}

#[then("the ticket is still stored with status {status}")]
fn ticket_is_stored_with_status(world: SharedContext, status: String) {
    let state = state(&world);
    let id = ticket_id(&world);
    let ticket = block_on(state.tickets.get_ticket(id)).expect("ticket still stored");
    assert_eq!(ticket.status().as_str(), status);
}

#[rstest]
fn duplicate_email_is_rejected_on_create(world: SharedContext) {
    a_registered_user(world.clone(), "Maria Silva".into(), "maria@x.com".into());
    someone_registers(world.clone(), "Maria Souza".into(), "maria@x.com".into());
    the_request_conflicts(world.clone(), USER_CONFLICT.into());
    users_are_registered(world, 1);
}

#[rstest]
fn update_cannot_steal_another_users_email(world: SharedContext) {
    a_registered_user(world.clone(), "Maria Silva".into(), "maria@x.com".into());
    a_registered_user(world.clone(), "Ana Souza".into(), "ana@x.com".into());
    second_user_takes_first_email(world.clone());
    the_request_conflicts(world.clone(), USER_CONFLICT.into());
    users_are_registered(world, 2);
}

#[rstest]
fn deleting_a_user_twice_reports_not_found(world: SharedContext) {
    a_registered_user(world.clone(), "Maria Silva".into(), "maria@x.com".into());
    first_user_is_deleted(world.clone());
    users_are_registered(world.clone(), 0);
    first_user_is_deleted(world.clone());
    the_request_is_not_found(world, "User not found.".into());
}

#[rstest]
fn ticket_survives_its_user_and_keeps_changing_status(world: SharedContext) {
    a_registered_user(world.clone(), "Maria Silva".into(), "maria@x.com".into());
    an_open_ticket(world.clone());
    first_user_is_deleted(world.clone());
    ticket_status_is_set(world.clone(), "In Progress".into());
    ticket_is_stored_with_status(world, "In Progress".into());
}

#[rstest]
fn unknown_status_is_reported_as_missing_ticket(world: SharedContext) {
    a_registered_user(world.clone(), "Maria Silva".into(), "maria@x.com".into());
    an_open_ticket(world.clone());
    ticket_status_is_set(world.clone(), "null".into());
    the_request_is_not_found(world.clone(), "Ticket not found.".into());
    ticket_is_stored_with_status(world, "Open".into());
}
