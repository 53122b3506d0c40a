// tests/support/builders.rs
use serde_json::{Value, json};

/// JSON body for a product that passes every validation rule.
pub struct ProductJson {
    body: Value,
}

impl ProductJson {
    pub fn new(name: &str) -> Self {
        Self {
            body: json!({
                "name": name,
                "description": "Hand made in small batches",
                "price": 499.0,
                "images": ["https://cdn.example/a.jpg"],
            }),
        }
    }

    pub fn set(mut self, field: &str, value: Value) -> Self {
        self.body[field] = value;
        self
    }

    pub fn without(mut self, field: &str) -> Self {
        if let Some(map) = self.body.as_object_mut() {
            map.remove(field);
        }
        self
    }

    pub fn build(self) -> Value {
        self.body
    }
}

pub fn category_json(name: &str) -> Value {
    json!({ "name": name, "description": "Things of a kind" })
}
