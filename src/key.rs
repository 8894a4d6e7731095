//! Key bindings for list components.
//!
//! A [`Binding`] pairs a set of key codes with the help text shown for
//! them. Components expose their bindings through the [`KeyMap`] trait so
//! callers can build contextual help lines.
//!
//! # Examples
//!
//! ```rust
//! use listing_widgets::key::Binding;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let toggle = Binding::new(vec![KeyCode::Char(' '), KeyCode::Char('x')])
//!     .with_help("space/x", "toggle");
//!
//! let press = KeyMsg { key: KeyCode::Char('x'), modifiers: KeyModifiers::NONE };
//! assert!(toggle.matches(&press));
//! assert_eq!(toggle.help().key, "space/x");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label, e.g. `"←/h"`.
    pub key: String,
    /// Action description, e.g. `"prev page"`.
    pub desc: String,
}

/// A set of keys that trigger the same action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyCode>,
    modifiers: KeyModifiers,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding for the given keys without modifiers.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            modifiers: KeyModifiers::NONE,
            help: Help::default(),
            disabled: false,
        }
    }

    /// Requires the given modifiers to be held (builder pattern).
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Sets the help label and description (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Enables or disables the binding.
    ///
    /// Disabled bindings never match and are omitted from help.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns true if the binding is enabled.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Returns the bound key codes.
    pub fn keys(&self) -> &[KeyCode] {
        &self.keys
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns true if `msg` triggers this binding.
    ///
    /// Shift is ignored for character keys since terminals already report
    /// the shifted character (`'G'` rather than shift+`'g'`).
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if !self.enabled() || !self.keys.contains(&msg.key) {
            return false;
        }
        let mut held = msg.modifiers;
        if matches!(msg.key, KeyCode::Char(_)) {
            held.remove(KeyModifiers::SHIFT);
        }
        held == self.modifiers
    }
}

/// Exposes a component's bindings for help rendering.
pub trait KeyMap {
    /// The handful of bindings shown in a one-line help.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Renders bindings as a single `key desc • key desc` line.
///
/// Disabled bindings are skipped.
pub fn short_help_line(bindings: &[&Binding]) -> String {
    bindings
        .iter()
        .filter(|b| b.enabled())
        .map(|b| format!("{} {}", b.help.key, b.help.desc))
        .collect::<Vec<_>>()
        .join(" • ")
}
