mod clue;
mod dom;
mod input;
mod panel;
mod registry;
mod state;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::registry::Registry;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = dom::document()?;
    let registry = Rc::new(Registry::discover(&document)?);
    input::install_listeners(Rc::clone(&registry))?;

    dom::log(&format!(
        "sbb_widgets ready: {} toggle controls, {} clues wired",
        registry.buttons().len(),
        registry.clues().len()
    ));

    Ok(())
}

#[wasm_bindgen]
pub fn focus_field(id: &str) {
    dom::focus_by_id(id);
}
