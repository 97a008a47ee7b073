use std::collections::HashMap;

/// A node of the host page that the initializer writes into.
pub trait Element {
    fn set_text_content(&mut self, text: &str);

    /// Replaces the element's children with the given markup.
    fn set_inner_html(&mut self, html: &str);
}

/// Query-by-identifier access to the host page.
pub trait Document {
    type Element: Element;

    fn get_element_by_id(&mut self, id: &str) -> Option<&mut Self::Element>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryElement {
    pub text_content: String,
    pub inner_html: String,
}

impl Element for MemoryElement {
    fn set_text_content(&mut self, text: &str) {
        self.text_content = text.to_string();
        self.inner_html = text.to_string();
    }

    fn set_inner_html(&mut self, html: &str) {
        self.inner_html = html.to_string();
        self.text_content.clear();
    }
}

/// A page held in memory, keyed by element id.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: HashMap<String, MemoryElement>,
}

impl MemoryDocument {
    pub fn new() -> MemoryDocument {
        MemoryDocument::default()
    }

    pub fn with_element(mut self, id: &str) -> MemoryDocument {
        self.elements.insert(id.to_string(), MemoryElement::default());
        self
    }

    pub fn element(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.get(id)
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn get_element_by_id(&mut self, id: &str) -> Option<&mut MemoryElement> {
        self.elements.get_mut(id)
    }
}
