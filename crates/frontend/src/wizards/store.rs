use contracts::shared::wizard::WizardStoreId;
use leptos::prelude::*;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// In-progress data of a wizard flow, shared by all of its steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    pub active_step: usize,
    pub values: Map<String, Value>,
    pub finished: bool,
}

impl WizardState {
    /// Merges an object-shaped `input` into the values.
    ///
    /// Returns false (and leaves the state untouched) for any other shape
    /// except `null`, which is a valid "no input".
    pub fn seed(&mut self, input: &Value) -> bool {
        match input {
            Value::Null => true,
            Value::Object(fields) => {
                for (key, value) in fields {
                    self.values.insert(key.clone(), value.clone());
                }
                true
            }
            _ => false,
        }
    }

    pub fn next(&mut self, step_count: usize) {
        if self.active_step + 1 < step_count {
            self.active_step += 1;
        }
    }

    pub fn back(&mut self) {
        self.active_step = self.active_step.saturating_sub(1);
    }

    /// Text shown in a field input; non-string values are shown as JSON.
    pub fn value_text(&self, field: &str) -> String {
        match self.values.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

/// Reactive handle to one wizard store. Copies share the same state.
#[derive(Clone, Copy)]
pub struct WizardStore {
    id: WizardStoreId,
    state: RwSignal<WizardState>,
}

impl WizardStore {
    fn new(id: WizardStoreId) -> Self {
        Self {
            id,
            state: RwSignal::new(WizardState::default()),
        }
    }

    pub fn id(&self) -> WizardStoreId {
        self.id
    }

    pub fn state(&self) -> WizardState {
        self.state.get()
    }

    pub fn active_step(&self) -> usize {
        self.state.with(|s| s.active_step)
    }

    pub fn is_finished(&self) -> bool {
        self.state.with(|s| s.finished)
    }

    pub fn value_text(&self, field: &str) -> String {
        self.state.with(|s| s.value_text(field))
    }

    /// Starts a new flow: clears previous data and applies `input`.
    pub fn start(&self, input: &Value) {
        let mut fresh = WizardState::default();
        if !fresh.seed(input) {
            log::warn!(
                "wizard store {:?}: ignoring non-object input {}",
                self.id,
                input
            );
        }
        self.state.set(fresh);
    }

    pub fn set_value(&self, field: &str, value: String) {
        self.state.update(|s| {
            s.values.insert(field.to_string(), Value::String(value));
        });
    }

    pub fn next(&self, step_count: usize) {
        self.state.update(|s| s.next(step_count));
    }

    pub fn back(&self) {
        self.state.update(|s| s.back());
    }

    pub fn finish(&self) {
        self.state.update(|s| s.finished = true);
    }

    pub fn reset(&self) {
        self.state.set(WizardState::default());
    }
}

/// Process-wide wizard stores: one per store family, created at app start.
#[derive(Clone)]
pub struct WizardStores {
    stores: HashMap<WizardStoreId, WizardStore>,
}

impl WizardStores {
    pub fn new() -> Self {
        Self {
            stores: WizardStoreId::ALL
                .iter()
                .map(|&id| (id, WizardStore::new(id)))
                .collect(),
        }
    }

    pub fn get(&self, id: WizardStoreId) -> Option<WizardStore> {
        self.stores.get(&id).copied()
    }
}

impl Default for WizardStores {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seed_object_input() {
        let mut state = WizardState::default();
        assert!(state.seed(&json!({"name": "purchases", "version": 2})));
        assert_eq!(state.value_text("name"), "purchases");
        assert_eq!(state.value_text("version"), "2");
        assert_eq!(state.value_text("missing"), "");
    }

    #[test]
    fn test_seed_rejects_non_object() {
        let mut state = WizardState::default();
        assert!(state.seed(&Value::Null));
        assert!(!state.seed(&json!(["a"])));
        assert!(!state.seed(&json!("a")));
        assert!(state.values.is_empty());
    }

    #[test]
    fn test_step_navigation_is_bounded() {
        let mut state = WizardState::default();
        state.back();
        assert_eq!(state.active_step, 0);
        state.next(2);
        state.next(2);
        assert_eq!(state.active_step, 1);
        state.back();
        assert_eq!(state.active_step, 0);
    }
}
