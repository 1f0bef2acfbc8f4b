use crate::constants::{FONTS_FAILED_CLASS, FONTS_LOADED_CLASS};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Wait for the document's font set to settle and tag `<html>` with the
/// outcome. Returns whether the fonts loaded.
pub async fn wait_for_fonts(document: &web::Document) -> bool {
    let loaded = match document.fonts().ready() {
        Ok(promise) => JsFuture::from(promise).await.is_ok(),
        Err(e) => {
            log::warn!("[fonts] document.fonts.ready unavailable: {:?}", e);
            false
        }
    };
    if let Some(root) = document.document_element() {
        let class = if loaded {
            FONTS_LOADED_CLASS
        } else {
            FONTS_FAILED_CLASS
        };
        _ = root.class_list().add_1(class);
    }
    log::info!("[fonts] ready loaded={}", loaded);
    loaded
}
