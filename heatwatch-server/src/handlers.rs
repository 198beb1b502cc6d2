use actix_cors::Cors;
use actix_web::{HttpRequest, HttpResponse, Responder, error, post, web};
use heatwatch_core::{AnalysisRequest, AnalysisResponse, Tracker};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::AppState;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Register the analysis route, its JSON body handling, and an open CORS policy.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .wrap(Cors::permissive())
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .service(analyze),
    );
}

#[post("/analyze")]
pub async fn analyze(data: web::Data<AppState>, body: web::Json<AnalysisRequest>) -> impl Responder {
    let response = run_analysis(&data.tracker, &body).await;

    HttpResponse::Ok().json(response)
}

#[instrument(
    skip_all,
    fields(
        threshold = request.threshold,
        consecutive_days = request.consecutive_days.get(),
        cities = request.cities.len()
    )
)]
async fn run_analysis(tracker: &Tracker, request: &AnalysisRequest) -> AnalysisResponse {
    let response = tracker.analyze_all(request).await;
    info!(results = response.results.len(), "analysis finished");

    response
}

fn json_error(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    warn!(%message, "rejected request body");

    let response = HttpResponse::BadRequest().json(ErrorBody { error: message });
    error::InternalError::from_response(err, response).into()
}
