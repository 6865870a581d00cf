use actix_web::{HttpResponse, Responder};
use serde_json::json;

/// Demonstration figures for the admin dashboard. Not derived from any
/// real state.
pub async fn dashboard() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "totalUsers": 100,
        "regions": ["North America", "Europe", "Asia"],
        "storageUsage": [
            {"provider": "Google Drive", "users": 40},
            {"provider": "Dropbox", "users": 30},
            {"provider": "OneDrive", "users": 30}
        ]
    }))
}
