use wasm_bindgen::JsCast;
use web_sys as web;

/// Maintain the canvas backing store at CSS size * devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn add_class(document: &web::Document, element_id: &str, class: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let _ = el.class_list().add_1(class);
    }
}

#[inline]
pub fn remove_class(document: &web::Document, element_id: &str, class: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let _ = el.class_list().remove_1(class);
    }
}

/// Resolve an element by id and downcast it to a concrete type.
pub fn get_as<T: JsCast>(document: &web::Document, element_id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("#{} has an unexpected element type", element_id))
}
