//! Overlay image loading
//!
//! The browser decodes the image (SVG included) and hands back an
//! `ImageBitmap` the renderer can copy straight into a texture.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Load and decode `url` into a bitmap
pub async fn load_bitmap(
    window: &web_sys::Window,
    document: &web_sys::Document,
    url: &str,
) -> Result<web_sys::ImageBitmap, JsValue> {
    let image: web_sys::HtmlImageElement = document.create_element("img")?.dyn_into()?;
    image.set_cross_origin(Some("anonymous"));
    image.set_src(url);
    JsFuture::from(image.decode()).await?;

    let bitmap = JsFuture::from(window.create_image_bitmap_with_html_image_element(&image)?).await?;
    bitmap.dyn_into()
}
