use std::collections::HashMap;

/// A named text field, the stand-in for a host input element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextField {
    pub id: String,
    pub attrs: HashMap<String, String>,
    pub value: String,
}

impl TextField {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            attrs: HashMap::new(),
            value: String::new(),
        }
    }

    /// Builder-style attribute setter; a generator field carries the marker
    /// attribute naming its target.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Field length as the user perceives it, in characters.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Ordered collection of fields; the document the binder scans.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: Vec<TextField>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_field(&mut self, field: TextField) {
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[TextField] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&TextField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn field_mut(&mut self, id: &str) -> Option<&mut TextField> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.field(id).is_some()
    }

    pub fn value(&self, id: &str) -> &str {
        self.field(id).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn set_value(&mut self, id: &str, value: &str) {
        if let Some(field) = self.field_mut(id) {
            field.value = value.to_string();
        }
    }

    pub fn push_char(&mut self, id: &str, c: char) {
        if let Some(field) = self.field_mut(id) {
            field.value.push(c);
        }
    }

    pub fn pop_char(&mut self, id: &str) {
        if let Some(field) = self.field_mut(id) {
            field.value.pop();
        }
    }
}
