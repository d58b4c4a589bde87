//! Key code → [`KeyAction`] table.
//!
//! Bindings are stored per action and serialized in action order, so a saved
//! preset diffs cleanly. Key strings are DOM `KeyboardEvent.code` values
//! (`"KeyM"`, `"PageUp"`); the host passes the same strings in
//! [`InputEvent::Key`](crate::input::InputEvent::Key).

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

const DEFAULT_BINDINGS: [(KeyAction, &str); 9] = [
    (KeyAction::ToggleMode, "KeyM"),
    (KeyAction::ToggleFollow, "KeyF"),
    (KeyAction::RequestGps, "KeyG"),
    (KeyAction::FloorUp, "PageUp"),
    (KeyAction::FloorDown, "PageDown"),
    (KeyAction::MoveForward, "KeyW"),
    (KeyAction::MoveBack, "KeyS"),
    (KeyAction::MoveLeft, "KeyA"),
    (KeyAction::MoveRight, "KeyD"),
];

/// Which key fires each engine action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeybindingOptions {
    /// Key code per action. An action missing here is unbound.
    pub bindings: BTreeMap<KeyAction, String>,
    /// Index for event dispatch. Call
    /// [`rebuild_reverse_map`](Self::rebuild_reverse_map) after editing
    /// `bindings` directly.
    #[serde(skip)]
    by_key: FxHashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let mut opts = Self {
            bindings: DEFAULT_BINDINGS
                .iter()
                .map(|(action, key)| (*action, (*key).to_owned()))
                .collect(),
            by_key: FxHashMap::default(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Re-index `bindings` for [`lookup`](Self::lookup).
    ///
    /// A key claimed by several actions goes to the first in action order;
    /// the others are logged and never fire.
    pub fn rebuild_reverse_map(&mut self) {
        self.by_key.clear();
        for (action, key) in &self.bindings {
            if let Some(owner) = self.by_key.get(key) {
                log::warn!("keybindings: {key} already fires {owner:?}, ignoring it for {action:?}");
                continue;
            }
            let _ = self.by_key.insert(key.clone(), *action);
        }
    }

    /// Bind `action` to `key`. Any other action on `key` becomes unbound.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let key = key.into();
        self.bindings.retain(|a, k| *a == action || *k != key);
        let _ = self.bindings.insert(action, key);
        self.rebuild_reverse_map();
    }

    /// Remove the binding of `action`, if any.
    pub fn unbind(&mut self, action: KeyAction) {
        if self.bindings.remove(&action).is_some() {
            self.rebuild_reverse_map();
        }
    }

    /// Action fired by `key`.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.by_key.get(key).copied()
    }

    /// Key bound to `action`.
    #[must_use]
    pub fn key_for(&self, action: KeyAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }
}
