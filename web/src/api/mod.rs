pub mod admin;
pub mod cloud_storage;
pub mod error;
pub mod storage_api;
pub mod upload;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/cloud-storage")
            .route("/files", web::get().to(cloud_storage::list_files))
            .route("/photos", web::get().to(cloud_storage::list_photos))
            .route("/videos", web::get().to(cloud_storage::list_videos))
            .route("/upload", web::post().to(cloud_storage::upload_file))
            .route("/google-drive/files", web::get().to(cloud_storage::list_files))
            .route("/google-drive/upload", web::post().to(cloud_storage::upload_file)),
    )
    .service(
        web::scope("/api/storage/{provider}")
            .route("/list", web::get().to(storage_api::list_files))
            .route("/entries", web::get().to(storage_api::list_entries))
            .route("/photos", web::get().to(storage_api::list_photos))
            .route("/videos", web::get().to(storage_api::list_videos))
            .route("/upload", web::post().to(storage_api::upload_file)),
    )
    .service(web::scope("/admin").route("/dashboard", web::get().to(admin::dashboard)));
}
