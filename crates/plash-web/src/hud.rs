//! On-screen FPS counter

use wasm_bindgen::JsValue;

/// `<div class="fps-counter"><span class="fps-label">FPS</span><span class="fps-value"/></div>`
pub struct FpsCounter {
    value: web_sys::Element,
}

impl FpsCounter {
    /// Create the counter and append it to `<body>`
    pub fn attach(document: &web_sys::Document) -> Result<Self, JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let counter = document.create_element("div")?;
        counter.set_class_name("fps-counter");

        let label = document.create_element("span")?;
        label.set_class_name("fps-label");
        label.set_text_content(Some("FPS"));

        let value = document.create_element("span")?;
        value.set_class_name("fps-value");

        counter.append_child(&label)?;
        counter.append_child(&value)?;
        body.append_child(&counter)?;

        let hud = Self { value };
        hud.show(plash_scene::fps::display_value(0.0));
        Ok(hud)
    }

    pub fn show(&self, fps: u32) {
        self.value.set_text_content(Some(&fps.to_string()));
    }
}
