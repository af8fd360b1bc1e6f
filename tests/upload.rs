//! Upload operation contracts: size pre-check, response parsing and the
//! file-pick reader.

use std::path::Path;

use qrdrop::camera::ImageBlob;
use qrdrop::upload::{
    self, MAX_UPLOAD_BYTES, UploadConfig, UploadError, extract_secure_url, read_image_file,
};

fn blob_of(len: usize) -> ImageBlob {
    ImageBlob {
        bytes: vec![0u8; len],
        mime: "image/jpeg".to_string(),
        file_name: "photo.jpg".to_string(),
    }
}

#[test]
fn precheck_accepts_limit_and_rejects_one_more_byte() {
    assert_eq!(upload::precheck(&blob_of(MAX_UPLOAD_BYTES)), Ok(()));
    assert_eq!(
        upload::precheck(&blob_of(MAX_UPLOAD_BYTES + 1)),
        Err(UploadError::TooLarge)
    );
}

#[tokio::test]
async fn oversized_upload_fails_without_touching_the_network() {
    // The endpoint host does not exist; reaching it would error differently,
    // so a TooLarge result proves the request never left the process.
    let config = UploadConfig {
        cloud_name: "does-not-exist.invalid".to_string(),
        upload_preset: "preset".to_string(),
    };
    let client = reqwest::Client::new();
    let result = upload::upload_image(&client, &config, blob_of(MAX_UPLOAD_BYTES + 1)).await;
    assert_eq!(result, Err(UploadError::TooLarge));
}

#[test]
fn secure_url_extraction_handles_shapes() {
    let ok = serde_json::json!({"secure_url": "https://img.example/a.jpg", "bytes": 123});
    assert_eq!(
        extract_secure_url(&ok).as_deref(),
        Some("https://img.example/a.jpg")
    );
    assert_eq!(
        extract_secure_url(&serde_json::json!({"error": "denied"})),
        None
    );
    assert_eq!(extract_secure_url(&serde_json::json!(null)), None);
}

#[test]
fn read_image_file_loads_bytes_and_guesses_mime() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("proof.png");
    std::fs::write(&path, b"not-a-real-png").expect("file written");

    let blob = read_image_file(&path).expect("file should be readable");
    assert_eq!(blob.bytes, b"not-a-real-png");
    assert_eq!(blob.mime, "image/png");
    assert_eq!(blob.file_name, "proof.png");
}

#[test]
fn read_image_file_reports_missing_files() {
    let err = read_image_file(Path::new("/no/such/file.jpg"))
        .expect_err("missing file must be an error");
    assert!(!err.is_empty());
}

#[test]
fn upload_error_maps_to_localized_message_keys() {
    assert_eq!(
        UploadError::TooLarge.message_key(),
        "errorMessages.fileTooLarge"
    );
    assert_eq!(
        UploadError::Remote("timeout".to_string()).message_key(),
        "errorMessages.uploadFailed"
    );
}

#[test]
fn default_config_points_at_the_shipped_account() {
    let config = UploadConfig::default();
    assert_eq!(
        config.endpoint(),
        "https://api.cloudinary.com/v1_1/dqjz4xwfg/image/upload"
    );
    assert_eq!(config.upload_preset, "delivery_images");
}
