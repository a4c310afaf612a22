use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, HtmlElement, Window};

pub const HIDDEN_CLASS: &str = "hidden";

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Result<Document, JsValue> {
    window()
        .and_then(|win| win.document())
        .ok_or_else(|| JsValue::from_str("Document unavailable"))
}

pub fn log(message: &str) {
    console::log_1(&JsValue::from_str(message));
}

pub fn get_html_element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element #{id}")))
        .and_then(|el| {
            el.dyn_into::<HtmlElement>()
                .map_err(|_| JsValue::from_str(&format!("Element #{id} is not HtmlElement")))
        })
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn set_hidden(element: &Element, hidden: bool) {
    let classes = element.class_list();
    if hidden {
        let _ = classes.add_1(HIDDEN_CLASS);
    } else {
        let _ = classes.remove_1(HIDDEN_CLASS);
    }
}

pub fn is_hidden(element: &Element) -> bool {
    has_class(element, HIDDEN_CLASS)
}

pub fn focus_by_id(id: &str) {
    let Ok(document) = document() else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };
    if let Ok(target) = element.dyn_into::<HtmlElement>() {
        let _ = target.focus();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    fn body() -> HtmlElement {
        document().expect("document").body().expect("body")
    }

    #[wasm_bindgen_test]
    fn set_hidden_adds_and_removes_the_class() {
        let body = body();
        body.set_inner_html(r#"<div id="dom-box"></div>"#);
        let document = document().unwrap();
        let element = document.get_element_by_id("dom-box").unwrap();

        set_hidden(&element, true);
        assert!(is_hidden(&element));
        set_hidden(&element, true);
        assert!(is_hidden(&element), "adding twice keeps a single class");

        set_hidden(&element, false);
        assert!(!is_hidden(&element));
    }

    #[wasm_bindgen_test]
    fn get_html_element_reports_the_missing_id() {
        body().set_inner_html("");
        let document = document().unwrap();
        let err = get_html_element(&document, "nowhere").unwrap_err();
        let message = err.as_string().unwrap_or_default();
        assert!(message.contains("#nowhere"), "unexpected error: {message}");
    }

    #[wasm_bindgen_test]
    fn focus_by_id_tolerates_a_missing_target() {
        body().set_inner_html("");
        focus_by_id("nowhere");
    }
}
