use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement};

use crate::dom;
use crate::state::{PanelPhase, GLYPH_PAIR, WORD_PAIR};

const TARGET_ATTR: &str = "data-target";
const OPPOSITE_ATTR: &str = "data-opposite-button";
const OPACITY_SHOWN: &str = "opacity-100";
const OPACITY_FADED: &str = "opacity-0";
const COLLAPSE_DELAY_MS: u32 = 300;

pub struct ToggleButton {
    button: HtmlElement,
    label: Option<HtmlElement>,
    panel: HtmlElement,
    animated: bool,
    opposite: Option<String>,
    phase: Rc<Cell<PanelPhase>>,
    collapse_epoch: Rc<Cell<u64>>,
}

impl ToggleButton {
    pub fn bind(document: &Document, button: HtmlElement) -> Result<Self, JsValue> {
        let target_id = button.get_attribute(TARGET_ATTR).ok_or_else(|| {
            JsValue::from_str(&format!(
                "Toggle control `{}` is missing {TARGET_ATTR}",
                button.id()
            ))
        })?;
        let panel = dom::get_html_element(document, &target_id)?;
        let label = button
            .query_selector("span")?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let animated =
            dom::has_class(&panel, OPACITY_SHOWN) || dom::has_class(&panel, OPACITY_FADED);
        let phase = if dom::is_hidden(&panel) {
            PanelPhase::Closed
        } else {
            PanelPhase::Open
        };
        let opposite = button
            .get_attribute(OPPOSITE_ATTR)
            .filter(|id| !id.is_empty());

        Ok(Self {
            button,
            label,
            panel,
            animated,
            opposite,
            phase: Rc::new(Cell::new(phase)),
            collapse_epoch: Rc::new(Cell::new(0)),
        })
    }

    pub fn element(&self) -> &HtmlElement {
        &self.button
    }

    pub fn opposite_id(&self) -> Option<&str> {
        self.opposite.as_deref()
    }

    pub fn activate(&self) {
        if self.phase.get().is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn force_close(&self) {
        match self.phase.get() {
            PanelPhase::Open => self.close(),
            // A collapse is already under way; its timer keeps the deadline.
            PanelPhase::Fading => self.render_label(false),
            PanelPhase::Closed => {
                self.render_panel();
                self.render_label(false);
            }
        }
    }

    fn open(&self) {
        self.collapse_epoch.set(self.collapse_epoch.get() + 1);
        self.phase.set(PanelPhase::Open);
        self.render_panel();
        self.render_label(true);
    }

    fn close(&self) {
        self.collapse_epoch.set(self.collapse_epoch.get() + 1);
        let next = if self.animated {
            PanelPhase::Fading
        } else {
            PanelPhase::Closed
        };
        self.phase.set(next);
        self.render_panel();
        self.render_label(false);
        if self.animated {
            self.schedule_hide(self.collapse_epoch.get());
        }
    }

    fn schedule_hide(&self, epoch: u64) {
        let panel = self.panel.clone();
        let phase = Rc::clone(&self.phase);
        let current_epoch = Rc::clone(&self.collapse_epoch);
        spawn_local(async move {
            TimeoutFuture::new(COLLAPSE_DELAY_MS).await;
            if current_epoch.get() != epoch {
                // Toggled again before the fade finished.
                return;
            }
            phase.set(PanelPhase::Closed);
            dom::set_hidden(&panel, true);
        });
    }

    fn render_panel(&self) {
        let classes = self.panel.class_list();
        match self.phase.get() {
            PanelPhase::Open => {
                dom::set_hidden(&self.panel, false);
                if self.animated {
                    let _ = classes.remove_1(OPACITY_FADED);
                    let _ = classes.add_1(OPACITY_SHOWN);
                }
            }
            PanelPhase::Fading => {
                let _ = classes.remove_1(OPACITY_SHOWN);
                let _ = classes.add_1(OPACITY_FADED);
            }
            PanelPhase::Closed => {
                dom::set_hidden(&self.panel, true);
                if self.animated {
                    let _ = classes.remove_1(OPACITY_SHOWN);
                    let _ = classes.add_1(OPACITY_FADED);
                }
            }
        }
    }

    fn render_label(&self, open: bool) {
        let Some(label) = &self.label else {
            return;
        };
        let mut text = label.text_content().unwrap_or_default();
        let mut changed = false;
        for pair in [&WORD_PAIR, &GLYPH_PAIR] {
            if let Some(rewritten) = pair.rewrite(&text, open) {
                text = rewritten;
                changed = true;
            }
        }
        if changed {
            label.set_text_content(Some(&text));
        }
    }
}
