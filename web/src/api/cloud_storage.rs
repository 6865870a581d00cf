//! `/cloud-storage` routes. The provider is implied: Google Drive.

use crate::api::error::ApiError;
use crate::api::upload::read_upload_request;
use crate::app_context::AppContext;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use storeit_cloud_storage::Provider;

const DEFAULT_PROVIDER: Provider = Provider::Google;

pub async fn list_files(context: web::Data<AppContext>) -> Result<HttpResponse, ApiError> {
    let names = context.storage.list_files(DEFAULT_PROVIDER).await?;
    Ok(HttpResponse::Ok().json(names))
}

pub async fn list_photos(context: web::Data<AppContext>) -> Result<HttpResponse, ApiError> {
    let names = context.storage.list_photos(DEFAULT_PROVIDER).await?;
    Ok(HttpResponse::Ok().json(names))
}

pub async fn list_videos(context: web::Data<AppContext>) -> Result<HttpResponse, ApiError> {
    let names = context.storage.list_videos(DEFAULT_PROVIDER).await?;
    Ok(HttpResponse::Ok().json(names))
}

pub async fn upload_file(payload: Multipart, context: web::Data<AppContext>) -> Result<HttpResponse, ApiError> {
    let request = read_upload_request(payload, context.max_upload_bytes).await?;
    let receipt = context.storage.upload_file(DEFAULT_PROVIDER, request).await?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(receipt.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::api::configure;
    use crate::api::test_support::{multipart_body, sample_context, FakeGateway, BOUNDARY};
    use actix_web::{test, web, App};
    use storeit_cloud_storage::StorageError;

    #[actix_web::test]
    async fn lists_names_by_category() {
        let app = test::init_service(App::new().app_data(sample_context()).configure(configure)).await;

        let files: Vec<String> =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/cloud-storage/files").to_request()).await;
        let photos: Vec<String> =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/cloud-storage/photos").to_request()).await;
        let videos: Vec<String> =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/cloud-storage/videos").to_request()).await;

        assert_eq!(files, vec!["a.jpg", "b.mp4", "c.txt"]);
        assert_eq!(photos, vec!["a.jpg"]);
        assert_eq!(videos, vec!["b.mp4"]);
    }

    #[actix_web::test]
    async fn legacy_google_drive_path_lists_files() {
        let app = test::init_service(App::new().app_data(sample_context()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/cloud-storage/google-drive/files").to_request();

        let files: Vec<String> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(files.len(), 3);
    }

    #[actix_web::test]
    async fn empty_drive_is_an_empty_array() {
        let context = web::Data::new(FakeGateway::empty().into_context());
        let app = test::init_service(App::new().app_data(context).configure(configure)).await;
        let req = test::TestRequest::get().uri("/cloud-storage/files").to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        assert_eq!(body, "[]");
    }

    #[actix_web::test]
    async fn upload_returns_plain_receipt() {
        let app = test::init_service(App::new().app_data(sample_context()).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/cloud-storage/upload")
            .insert_header(("content-type", format!("multipart/form-data; boundary={}", BOUNDARY)))
            .set_payload(multipart_body("file", "d.png", "image/png", b"png-bytes"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        assert_eq!(body, "File uploaded successfully to Google Drive with ID: fake-d.png");

        let req = test::TestRequest::get().uri("/cloud-storage/photos").to_request();
        let photos: Vec<String> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(photos, vec!["a.jpg", "d.png"]);
    }

    #[actix_web::test]
    async fn upload_without_file_part_is_bad_request() {
        let app = test::init_service(App::new().app_data(sample_context()).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/cloud-storage/upload")
            .insert_header(("content-type", format!("multipart/form-data; boundary={}", BOUNDARY)))
            .set_payload(multipart_body("attachment", "d.png", "image/png", b"png-bytes"))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 400);
    }

    #[actix_web::test]
    async fn upload_over_the_size_limit_is_bad_request() {
        let context = web::Data::new(FakeGateway::empty().into_context().with_max_upload_bytes(8));
        let app = test::init_service(App::new().app_data(context).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/cloud-storage/upload")
            .insert_header(("content-type", format!("multipart/form-data; boundary={}", BOUNDARY)))
            .set_payload(multipart_body("file", "big.bin", "application/octet-stream", &[0u8; 9]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_request");

        let req = test::TestRequest::post()
            .uri("/cloud-storage/upload")
            .insert_header(("content-type", format!("multipart/form-data; boundary={}", BOUNDARY)))
            .set_payload(multipart_body("file", "fits.bin", "application/octet-stream", &[0u8; 8]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let req = test::TestRequest::get().uri("/cloud-storage/files").to_request();
        let files: Vec<String> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(files, vec!["fits.bin"]);
    }

    #[actix_web::test]
    async fn provider_failure_is_reported_with_kind() {
        let context = web::Data::new(
            FakeGateway::failing(StorageError::CredentialUnavailable("key file missing".into())).into_context(),
        );
        let app = test::init_service(App::new().app_data(context).configure(configure)).await;
        let req = test::TestRequest::get().uri("/cloud-storage/videos").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 503);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "credential_unavailable");
    }
}
