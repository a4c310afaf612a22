use std::collections::HashMap;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::clue::ClueCard;
use crate::panel::ToggleButton;

const TOGGLE_SELECTOR: &str = "[data-target]";
const CLUE_SELECTOR: &str = ".clue";

pub struct Registry {
    buttons: Vec<ToggleButton>,
    buttons_by_id: HashMap<String, usize>,
    clues: Vec<ClueCard>,
}

impl Registry {
    pub fn discover(document: &Document) -> Result<Self, JsValue> {
        let mut buttons = Vec::new();
        let mut buttons_by_id = HashMap::new();
        let trigger_nodes = document.query_selector_all(TOGGLE_SELECTOR)?;
        for index in 0..trigger_nodes.length() {
            let Some(node) = trigger_nodes.item(index) else {
                continue;
            };
            let element = node
                .dyn_into::<HtmlElement>()
                .map_err(|_| JsValue::from_str("Toggle control is not an HtmlElement"))?;
            let id = element.id();
            let button = ToggleButton::bind(document, element)?;
            if !id.is_empty() {
                buttons_by_id.insert(id, buttons.len());
            }
            buttons.push(button);
        }

        let mut clues = Vec::new();
        let clue_nodes = document.query_selector_all(CLUE_SELECTOR)?;
        for index in 0..clue_nodes.length() {
            let Some(node) = clue_nodes.item(index) else {
                continue;
            };
            let element = node
                .dyn_into::<HtmlElement>()
                .map_err(|_| JsValue::from_str("Clue element is not an HtmlElement"))?;
            clues.push(ClueCard::bind(document, element)?);
        }

        let registry = Self {
            buttons,
            buttons_by_id,
            clues,
        };
        registry.check_opposites()?;
        Ok(registry)
    }

    fn check_opposites(&self) -> Result<(), JsValue> {
        for button in &self.buttons {
            if let Some(opposite_id) = button.opposite_id() {
                if !self.buttons_by_id.contains_key(opposite_id) {
                    return Err(JsValue::from_str(&format!(
                        "data-opposite-button references `{opposite_id}` but no toggle control has that id"
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn buttons(&self) -> &[ToggleButton] {
        &self.buttons
    }

    pub fn clues(&self) -> &[ClueCard] {
        &self.clues
    }

    pub fn activate(&self, index: usize) {
        let Some(button) = self.buttons.get(index) else {
            return;
        };
        button.activate();
        if let Some(opposite) = button
            .opposite_id()
            .and_then(|id| self.buttons_by_id.get(id))
            .and_then(|&slot| self.buttons.get(slot))
        {
            opposite.force_close();
        }
    }

    pub fn toggle_clue(&self, index: usize) {
        if let Some(clue) = self.clues.get(index) {
            clue.toggle();
        }
    }
}
