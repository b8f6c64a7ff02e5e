//! Score display in two DOM text elements

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

pub struct Scoreboard {
    lines: [Element; 2],
}

impl Scoreboard {
    pub fn new(document: &Document, player1_id: &str, player2_id: &str) -> Result<Self, JsValue> {
        Ok(Self {
            lines: [
                find_element(document, player1_id)?,
                find_element(document, player2_id)?,
            ],
        })
    }

    pub fn update(&self, text: &[String; 2]) {
        for (line, text) in self.lines.iter().zip(text) {
            line.set_text_content(Some(text.as_str()));
        }
    }
}

pub fn find_element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element #{id} not found")))
}
