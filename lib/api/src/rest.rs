use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use folio_core::Error;
use folio_storage::ModelManager;
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

#[derive(Deserialize)]
struct RecommendQuery {
    isbn: Option<String>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(manager: Arc<ModelManager>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new().wrap(cors).configure(Self::routes(manager.clone()))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }

    /// Route table, shared by the server and the tests.
    pub fn routes(manager: Arc<ModelManager>) -> impl FnOnce(&mut web::ServiceConfig) {
        move |cfg| {
            cfg.app_data(web::Data::new(manager))
                .route("/recommend", web::get().to(recommend))
                .route("/retrain", web::post().to(retrain))
                .route("/model", web::get().to(model_info));
        }
    }
}

async fn recommend(
    manager: web::Data<Arc<ModelManager>>,
    query: web::Query<RecommendQuery>,
) -> ActixResult<HttpResponse> {
    let Some(isbn) = query.into_inner().isbn else {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Missing 'isbn' query parameter"
        })));
    };

    match manager.recommend(&isbn) {
        Ok(ids) => Ok(HttpResponse::Ok().json(ids)),
        Err(Error::NotFound(_)) => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Book not found or model outdated"
        }))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

async fn retrain(manager: web::Data<Arc<ModelManager>>) -> ActixResult<HttpResponse> {
    let manager = manager.get_ref().clone();
    // Training is CPU-bound; keep it off the async workers.
    let outcome = match web::block(move || manager.retrain()).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Retrain task failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Retrain task failed"
            })));
        }
    };

    match outcome {
        Ok(info) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "Model retrained successfully",
            "snapshot": info
        }))),
        Err(Error::Busy) => Ok(HttpResponse::Conflict().json(serde_json::json!({
            "error": Error::Busy.to_string()
        }))),
        Err(e) if e.is_build_failure() => {
            let mut response = match &e {
                Error::DataSourceUnavailable(_) => HttpResponse::ServiceUnavailable(),
                _ => HttpResponse::InternalServerError(),
            };
            Ok(response.json(serde_json::json!({ "error": e.to_string() })))
        }
        Err(e) => {
            error!("Unexpected retrain error: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            })))
        }
    }
}

async fn model_info(manager: web::Data<Arc<ModelManager>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(manager.info()))
}
