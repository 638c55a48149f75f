//! DOM lookups and small mutations.

use crate::error::AppError;
use kurbo::{Point, Size};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, MouseEvent};

pub fn document() -> Result<Document, AppError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(AppError::NoDocument)
}

/// Look up an element by id and cast it to the expected type.
pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, AppError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| AppError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| AppError::WrongElementType(id.to_string()))
}

/// Create an element with a class attribute.
pub fn create_element(document: &Document, tag: &str, class: &str) -> Result<Element, AppError> {
    let element = document.create_element(tag)?;
    element.set_class_name(class);
    Ok(element)
}

/// Add or remove a class, logging instead of failing.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(err) = result {
        log::warn!("Failed to toggle class {class}: {err:?}");
    }
}

/// Pointer position relative to the canvas's top-left corner.
pub fn event_to_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    Point::new(
        f64::from(event.client_x()) - rect.left(),
        f64::from(event.client_y()) - rect.top(),
    )
}

/// Match the canvas backing store to its displayed size. Resizing clears
/// the canvas.
pub fn resize_canvas(canvas: &HtmlCanvasElement) -> Size {
    let width = canvas.offset_width().max(0) as u32;
    let height = canvas.offset_height().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    Size::new(f64::from(width), f64::from(height))
}
