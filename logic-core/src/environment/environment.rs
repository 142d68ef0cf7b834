use std::collections::HashMap;

/// Variable bindings for evaluation, plus a separate map of named settings
/// used by the front end (e.g. the AST output toggle). Last write wins.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Environment {
    store: HashMap<String, bool>,
    settings: HashMap<String, bool>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
            settings: HashMap::new()
        }
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.store.get(name).copied()
    }

    pub fn set(&mut self, name: impl Into<String>, value: bool) {
        self.store.insert(name.into(), value);
    }

    pub fn get_setting(&self, name: &str) -> bool {
        self.settings.get(name).copied().unwrap_or(false)
    }

    pub fn set_setting(&mut self, name: impl Into<String>, value: bool) {
        self.settings.insert(name.into(), value);
    }
}
