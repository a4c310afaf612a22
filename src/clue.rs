use std::cell::Cell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom;
use crate::state::{letter_from_answer, BoxState, Visibility};

const BOX_SELECTOR: &str = ".empty-box, .filled-box";
const ICON_SELECTOR: &str = ".eye";
const DEFINITION_ATTR: &str = "data-definition";
const ANSWER_ATTR: &str = "data-answer";
const LETTER_ATTR: &str = "data-letter";

struct LetterBox {
    element: HtmlElement,
    letter: String,
    state: Cell<BoxState>,
}

struct RevealIcon {
    element: Element,
    visibility: Cell<Visibility>,
}

struct DefinitionPanel {
    element: HtmlElement,
    visibility: Cell<Visibility>,
}

pub struct ClueCard {
    root: HtmlElement,
    boxes: Vec<LetterBox>,
    icons: Vec<RevealIcon>,
    definition: Option<DefinitionPanel>,
}

impl ClueCard {
    pub fn bind(document: &Document, root: HtmlElement) -> Result<Self, JsValue> {
        let answer = root.get_attribute(ANSWER_ATTR).filter(|a| !a.is_empty());

        let nodes = root.query_selector_all(BOX_SELECTOR)?;
        let mut boxes = Vec::with_capacity(nodes.length() as usize);
        for index in 0..nodes.length() {
            let Some(node) = nodes.item(index) else {
                continue;
            };
            let element = node.dyn_into::<HtmlElement>().map_err(|_| {
                JsValue::from_str(&format!(
                    "Letter box {index} of clue `{}` is not an HtmlElement",
                    root.id()
                ))
            })?;
            let state = if dom::has_class(&element, BoxState::Filled.class()) {
                BoxState::Filled
            } else {
                BoxState::Empty
            };
            let letter = element
                .get_attribute(LETTER_ATTR)
                .filter(|letter| !letter.is_empty())
                .or_else(|| {
                    answer
                        .as_deref()
                        .and_then(|answer| letter_from_answer(answer, index as usize))
                })
                .ok_or_else(|| {
                    JsValue::from_str(&format!(
                        "Letter box {index} of clue `{}` has no {LETTER_ATTR} and no answer letter",
                        root.id()
                    ))
                })?;
            boxes.push(LetterBox {
                element,
                letter,
                state: Cell::new(state),
            });
        }

        let icons = collect_icons(&root)?;
        let definition = root
            .get_attribute(DEFINITION_ATTR)
            .and_then(|id| document.get_element_by_id(&id))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|element| {
                let visibility = Visibility::from_hidden(dom::is_hidden(&element));
                DefinitionPanel {
                    element,
                    visibility: Cell::new(visibility),
                }
            });

        Ok(Self {
            root,
            boxes,
            icons,
            definition,
        })
    }

    pub fn element(&self) -> &HtmlElement {
        &self.root
    }

    pub fn toggle(&self) {
        for letter_box in &self.boxes {
            let next = letter_box.state.get().flipped();
            letter_box.state.set(next);
            let classes = letter_box.element.class_list();
            let _ = classes.remove_1(next.flipped().class());
            let _ = classes.add_1(next.class());
            match next {
                BoxState::Filled => letter_box
                    .element
                    .set_text_content(Some(&letter_box.letter)),
                BoxState::Empty => letter_box.element.set_text_content(Some("")),
            }
        }
        for icon in &self.icons {
            let next = icon.visibility.get().flipped();
            icon.visibility.set(next);
            dom::set_hidden(&icon.element, next.is_hidden());
        }
        if let Some(definition) = &self.definition {
            let next = definition.visibility.get().flipped();
            definition.visibility.set(next);
            dom::set_hidden(&definition.element, next.is_hidden());
        }
    }
}

fn collect_icons(root: &HtmlElement) -> Result<Vec<RevealIcon>, JsValue> {
    let mut icons = icons_under(root)?;
    if icons.is_empty() {
        // Some clue markup keeps the eye icons next to the clue, not inside it.
        if let Some(sibling) = root.next_element_sibling() {
            icons = icons_under(&sibling)?;
        }
    }
    Ok(icons)
}

fn icons_under(container: &Element) -> Result<Vec<RevealIcon>, JsValue> {
    let nodes = container.query_selector_all(ICON_SELECTOR)?;
    let mut icons = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<Element>() {
            let visibility = Visibility::from_hidden(dom::is_hidden(&element));
            icons.push(RevealIcon {
                element,
                visibility: Cell::new(visibility),
            });
        }
    }
    Ok(icons)
}
