//! Browser-side helpers for the edit view: dirty tracking, the global
//! `app_dirty` flag and photo previews.

use base64::{engine::general_purpose, Engine as _};
use gloo_file::{futures::read_as_bytes, Blob};
use js_sys::Reflect;
use wasm_bindgen::JsValue;

use super::machine::ImageFile;

/// Computes the hex MD5 digest of `input`.
///
/// The edit workflow hashes the serialized update payload right after a load
/// and after every persisted change; comparing the current hash with that
/// baseline is how unsaved edits are detected.
///
/// # Arguments
/// * `input` - The serialized payload.
///
/// # Returns
/// The 32-character lowercase hex digest.
pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

/// Publishes whether the page holds unsaved changes.
///
/// Sets `window.app_dirty`, which the `beforeunload` handler installed by
/// `index.html` reads to decide whether to ask before leaving. Failing to set
/// the property is ignored; the worst case is a missing prompt.
///
/// # Arguments
/// * `dirty` - `true` while the form differs from the stored card.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(dirty),
        );
    }
}

impl ImageFile for web_sys::File {
    fn mime_type(&self) -> String {
        self.type_()
    }

    fn size(&self) -> u64 {
        web_sys::Blob::size(self) as u64
    }
}

/// Reads a picked photo into a `data:` URL for the preview `<img>`.
///
/// The file is read through `gloo_file` and base64-encoded, keeping the
/// declared MIME type so the browser renders it without sniffing.
///
/// # Arguments
/// * `file` - The file taken from the hidden `<input type="file">`.
///
/// # Returns
/// The `data:` URL, or the read error as text.
pub async fn read_data_url(file: web_sys::File) -> Result<String, String> {
    let mime = file.type_();
    let blob = Blob::from(file);
    let bytes = read_as_bytes(&blob).await.map_err(|e| e.to_string())?;
    Ok(data_url(&mime, &bytes))
}

fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(bytes))
}
