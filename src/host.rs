//! Function host: adapts real HTTP traffic to the invocation contract.
//!
//! The host owns fault surfacing. A `FunctionError` propagating out of an
//! invocation is answered with actix's default `ResponseError` handling;
//! the function layer never constructs that response itself.

use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use std::collections::HashMap;
use tracing::error;

use crate::modules::verification::adapter::incoming::function::{invoke, FunctionError};
use crate::shared::api::envelope::{FunctionEvent, FunctionResponse};
use crate::FunctionConfig;

impl ResponseError for FunctionError {}

/// Catch-all entrypoint: every method on every path becomes one invocation.
pub async fn function_entrypoint(
    req: HttpRequest,
    body: web::Bytes,
    config: web::Data<FunctionConfig>,
) -> Result<HttpResponse, FunctionError> {
    let event = event_from_request(&req, &body);

    match invoke(&event, &config.database_url).await {
        Ok(response) => Ok(render(response)),
        Err(fault) => {
            error!("unhandled function fault: {}", fault);
            Err(fault)
        }
    }
}

fn event_from_request(req: &HttpRequest, body: &[u8]) -> FunctionEvent {
    let query = web::Query::<HashMap<String, String>>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .ok()
        .filter(|params| !params.is_empty());

    FunctionEvent {
        http_method: req.method().as_str().to_string(),
        query_string_parameters: query,
        body: if body.is_empty() {
            None
        } else {
            Some(String::from_utf8_lossy(body).into_owned())
        },
    }
}

fn render(response: FunctionResponse) -> HttpResponse {
    let status = StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::OK);
    let mut builder = HttpResponse::build(status);
    for (name, value) in &response.headers {
        builder.insert_header((name.as_str(), value.as_str()));
    }
    builder.body(response.body)
}
