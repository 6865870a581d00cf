//! `/api/storage/{provider}` routes.

use crate::api::error::ApiError;
use crate::api::upload::read_upload_request;
use crate::app_context::AppContext;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use storeit_cloud_storage::Provider;

fn provider_from(path: &web::Path<String>) -> Result<Provider, ApiError> {
    Ok(path.parse::<Provider>()?)
}

pub async fn list_files(path: web::Path<String>, context: web::Data<AppContext>) -> Result<HttpResponse, ApiError> {
    let provider = provider_from(&path)?;
    Ok(HttpResponse::Ok().json(context.storage.list_files(provider).await?))
}

/// Like `list_files`, but with each entry's MIME type.
pub async fn list_entries(path: web::Path<String>, context: web::Data<AppContext>) -> Result<HttpResponse, ApiError> {
    let provider = provider_from(&path)?;
    Ok(HttpResponse::Ok().json(context.storage.list_entries(provider).await?))
}

pub async fn list_photos(path: web::Path<String>, context: web::Data<AppContext>) -> Result<HttpResponse, ApiError> {
    let provider = provider_from(&path)?;
    Ok(HttpResponse::Ok().json(context.storage.list_photos(provider).await?))
}

pub async fn list_videos(path: web::Path<String>, context: web::Data<AppContext>) -> Result<HttpResponse, ApiError> {
    let provider = provider_from(&path)?;
    Ok(HttpResponse::Ok().json(context.storage.list_videos(provider).await?))
}

pub async fn upload_file(
    path: web::Path<String>,
    payload: Multipart,
    context: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let provider = provider_from(&path)?;
    let request = read_upload_request(payload, context.max_upload_bytes).await?;
    let receipt = context.storage.upload_file(provider, request).await?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(receipt.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::api::configure;
    use crate::api::test_support::{multipart_body, sample_context, BOUNDARY};
    use actix_web::{test, App};

    #[actix_web::test]
    async fn lists_by_provider_path() {
        let app = test::init_service(App::new().app_data(sample_context()).configure(configure)).await;

        let files: Vec<String> =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/storage/google/list").to_request()).await;
        let photos: Vec<String> =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/storage/gdrive/photos").to_request()).await;
        let videos: Vec<String> =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/storage/google/videos").to_request()).await;

        assert_eq!(files, vec!["a.jpg", "b.mp4", "c.txt"]);
        assert_eq!(photos, vec!["a.jpg"]);
        assert_eq!(videos, vec!["b.mp4"]);
    }

    #[actix_web::test]
    async fn entries_include_mime_type() {
        let app = test::init_service(App::new().app_data(sample_context()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/api/storage/google/entries").to_request();

        let entries: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(entries[0], serde_json::json!({"name": "a.jpg", "mimeType": "image/jpeg"}));
        assert_eq!(entries.as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn unknown_provider_is_bad_request() {
        let app = test::init_service(App::new().app_data(sample_context()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/api/storage/dropbox/list").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_request");
    }

    #[actix_web::test]
    async fn uploads_to_named_provider() {
        let app = test::init_service(App::new().app_data(sample_context()).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/storage/google/upload")
            .insert_header(("content-type", format!("multipart/form-data; boundary={}", BOUNDARY)))
            .set_payload(multipart_body("file", "e.mov", "video/quicktime", b"mov"))
            .to_request();

        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "File uploaded successfully to Google Drive with ID: fake-e.mov");

        let req = test::TestRequest::get().uri("/api/storage/google/videos").to_request();
        let videos: Vec<String> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(videos, vec!["b.mp4", "e.mov"]);
    }
}
