use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::NavAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping navigation actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key strings (e.g. `Forward` → `["ArrowUp", "KeyW"]`).
    pub bindings: HashMap<NavAction, Vec<String>>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (NavAction::Forward, vec!["ArrowUp".into(), "KeyW".into()]),
            (NavAction::Backward, vec!["ArrowDown".into(), "KeyS".into()]),
            (NavAction::StrafeLeft, vec!["ArrowLeft".into(), "KeyA".into()]),
            (NavAction::StrafeRight, vec!["ArrowRight".into(), "KeyD".into()]),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    ///
    /// If a key is bound to several actions the first in
    /// [`NavAction::ALL`] order wins, so lookups are deterministic.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<NavAction> {
        NavAction::ALL.into_iter().find(|action| {
            self.bindings
                .get(action)
                .is_some_and(|keys| keys.iter().any(|k| k == key))
        })
    }
}
