//! AWS Lambda handler for business plan projections
//!
//! Accepts a JSON body with `annual_revenue` (or `revenue_m`) plus any
//! scenario sections, and returns the projected plan as JSON.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

use stay_cover::company::REVENUE_UNIT;
use stay_cover::projection::PlanSummary;
use stay_cover::{PlanResult, ProjectionEngine, ScenarioConfig};

#[derive(Debug, Deserialize)]
struct PlanRequest {
    /// Annual hotel revenue in currency units
    #[serde(default)]
    annual_revenue: Option<f64>,

    /// Annual hotel revenue in millions (dataset convention)
    #[serde(default)]
    revenue_m: Option<f64>,

    #[serde(flatten)]
    scenario: ScenarioConfig,
}

impl PlanRequest {
    fn annual_revenue(&self) -> Result<f64, String> {
        let revenue = match (self.annual_revenue, self.revenue_m) {
            (Some(r), None) => r,
            (None, Some(m)) => m * REVENUE_UNIT,
            (Some(_), Some(_)) => return Err("Provide annual_revenue or revenue_m, not both".to_string()),
            (None, None) => return Err("Missing annual_revenue".to_string()),
        };
        if !(revenue.is_finite() && revenue >= 0.0) {
            return Err(format!("Invalid annual revenue: {}", revenue));
        }
        Ok(revenue)
    }
}

#[derive(Debug, Serialize)]
struct PlanResponse {
    #[serde(flatten)]
    plan: PlanResult,
    summary: PlanSummary,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn json_response<T: Serialize>(status: u16, payload: &T) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(payload)?;
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?;
    Ok(response)
}

fn bad_request(message: String) -> Result<Response<Body>, Error> {
    log::warn!("Rejected plan request: {}", message);
    json_response(400, &ErrorResponse { error: message })
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let request: PlanRequest = match serde_json::from_slice(event.body().as_ref()) {
        Ok(r) => r,
        Err(e) => return bad_request(format!("Invalid request body: {}", e)),
    };

    let annual_revenue = match request.annual_revenue() {
        Ok(r) => r,
        Err(message) => return bad_request(message),
    };
    if let Err(e) = request.scenario.validate() {
        return bad_request(e.to_string());
    }

    let engine = ProjectionEngine::from_scenario(&request.scenario);
    let plan = engine.project(annual_revenue);
    let summary = plan.summary();
    log::info!(
        "Projected {} strategy over {} year(s) for revenue {:.0}",
        plan.strategy,
        summary.horizon_years,
        annual_revenue
    );

    json_response(200, &PlanResponse { plan, summary })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
