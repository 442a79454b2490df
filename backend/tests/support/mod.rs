//! Shared helpers for HTTP integration suites.

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

/// Send a request and decode the JSON body, yielding `Value::Null` for empty
/// bodies.
pub async fn send<S, R, B>(app: &S, request: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = test::call_service(app, request).await;
    let status = response.status();
    let body = test::read_body(response).await;
    if body.is_empty() {
        return (status, Value::Null);
    }
    let value = serde_json::from_slice(&body).expect("response body is JSON");
    (status, value)
}

/// Extract the numeric `id` of a created resource.
pub fn id_of(body: &Value) -> u64 {
    body.get("id")
        .and_then(Value::as_u64)
        .expect("resource has a numeric id")
}
