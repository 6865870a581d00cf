mod google_drive_utils;
pub mod google_drive_hub_adapter;
pub mod drive_hub_adapter;
pub mod google_drive_hub_adapter_builder;
pub mod google_drive_gateway;
pub mod hub_cache;

pub use google_drive_utils::{DRIVE_SCOPE, LIST_FIELDS, UPLOAD_FIELDS};
