use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::registry::Registry;

pub fn install_listeners(registry: Rc<Registry>) -> Result<(), JsValue> {
    for (index, button) in registry.buttons().iter().enumerate() {
        let owner = Rc::clone(&registry);
        let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
            owner.activate(index);
        }) as Box<dyn FnMut(_)>);
        button
            .element()
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    for (index, clue) in registry.clues().iter().enumerate() {
        let owner = Rc::clone(&registry);
        let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
            owner.toggle_clue(index);
        }) as Box<dyn FnMut(_)>);
        clue.element()
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
