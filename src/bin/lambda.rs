//! AWS Lambda HTTP handler for the solar project projection
//!
//! POST a JSON object with any subset of the parameter fields (or an empty
//! body for the reference project). Responds with the dashboard JSON, or 400
//! with an error message when the parameters are rejected.

use lambda_http::{run, service_fn, Body, Request, Response};
use lambda_runtime::Error;
use log::{info, warn};
use serde_json::json;
use solar_projection::{
    compute,
    parameters::{load_overrides_from_reader, ParameterOverrides, ProjectParameters, DEFAULT_PROJECT_NAME},
    report::Dashboard,
    ProjectionError,
};

fn parse_overrides(body: &[u8]) -> Result<ParameterOverrides, ProjectionError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ParameterOverrides::default());
    }
    load_overrides_from_reader(body)
}

fn build_dashboard(body: &[u8]) -> Result<Dashboard, ProjectionError> {
    let params = parse_overrides(body)?.apply(&ProjectParameters::default());
    let result = compute(&params)?;
    Ok(Dashboard::build(DEFAULT_PROJECT_NAME, &params, &result))
}

fn json_response(status: u16, body: String) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?)
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let body: &[u8] = event.body().as_ref();

    match build_dashboard(body) {
        Ok(dashboard) => {
            info!(
                "Projection served: NPV={:.2}, IRR={:?}",
                dashboard.summary.net_present_value, dashboard.summary.internal_rate_of_return
            );
            json_response(200, dashboard.to_json()?)
        }
        Err(err @ (ProjectionError::InvalidParameter { .. } | ProjectionError::Json(_))) => {
            warn!("Rejected request: {}", err);
            json_response(400, json!({ "error": err.to_string() }).to_string())
        }
        Err(err) => Err(err.into()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
