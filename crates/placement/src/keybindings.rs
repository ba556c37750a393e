//! Configurable keybindings for the editor.
//!
//! Systems read from the `KeyBindings` resource instead of hardcoding
//! `KeyCode` values. Bindings load from an optional JSON file at startup
//! and fall back to the defaults when the file is absent; a malformed file
//! is reported and never prevents startup.

use std::fmt;
use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// =============================================================================
// KeyBinding
// =============================================================================

/// A single key plus required modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyBinding {
    /// Create a simple binding with no modifiers.
    pub const fn simple(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    /// Create a binding that requires Ctrl.
    pub const fn ctrl(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: true,
            shift: false,
        }
    }

    /// Check if this binding was just pressed (just_pressed for the key,
    /// modifiers must be held).
    pub fn just_pressed(self, keys: &ButtonInput<KeyCode>) -> bool {
        if !keys.just_pressed(self.key) {
            return false;
        }
        let ctrl_held = keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight);
        let shift_held = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);
        ctrl_held == self.ctrl && shift_held == self.shift
    }

    /// Human-readable label (e.g. "Ctrl+Z", "Space").
    pub fn display_label(self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(keycode_name(self.key));
        parts.join("+")
    }
}

/// Modifier that must be held for a scroll-wheel gesture to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollModifier {
    Alt,
    Ctrl,
    Shift,
}

impl ScrollModifier {
    pub fn held(self, keys: &ButtonInput<KeyCode>) -> bool {
        match self {
            Self::Alt => keys.pressed(KeyCode::AltLeft) || keys.pressed(KeyCode::AltRight),
            Self::Ctrl => {
                keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight)
            }
            Self::Shift => keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Alt => "Alt",
            Self::Ctrl => "Ctrl",
            Self::Shift => "Shift",
        }
    }
}

// =============================================================================
// KeyBindings resource
// =============================================================================

/// Central resource holding the editor's configurable bindings.
/// Systems read from this instead of hardcoding `KeyCode` values.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct KeyBindings {
    /// Held while scrolling to cycle the selected template.
    pub cycle_modifier: ScrollModifier,
    /// Held while scrolling to rotate the candidate in 90-degree steps.
    pub rotate_modifier: ScrollModifier,
    pub confirm: KeyBinding,
    pub toggle_snap: KeyBinding,
    /// Engages/disengages the placement tool as a whole.
    pub toggle_tool: KeyBinding,
    pub escape: KeyBinding,
    pub undo: KeyBinding,
    pub redo: KeyBinding,
    pub redo_alt: KeyBinding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            cycle_modifier: ScrollModifier::Alt,
            rotate_modifier: ScrollModifier::Ctrl,
            confirm: KeyBinding::simple(KeyCode::Space),
            toggle_snap: KeyBinding::simple(KeyCode::KeyF),
            toggle_tool: KeyBinding::simple(KeyCode::Tab),
            escape: KeyBinding::simple(KeyCode::Escape),
            undo: KeyBinding::ctrl(KeyCode::KeyZ),
            redo: KeyBinding::ctrl(KeyCode::KeyY),
            redo_alt: KeyBinding {
                key: KeyCode::KeyZ,
                ctrl: true,
                shift: true,
            },
        }
    }
}

impl KeyBindings {
    /// Load bindings from `path`, merging over the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let ser: SerKeyBindings = serde_json::from_str(&text)?;
        Self::from_ser(ser)
    }

    /// Load from `path` when it exists, otherwise the defaults. Failures
    /// are logged and the defaults applied.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(bindings) => {
                info!("Loaded keybindings from {}", path.display());
                bindings
            }
            Err(e) => {
                warn!(
                    "Failed to load keybindings from {}: {} (using defaults)",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    fn from_ser(ser: SerKeyBindings) -> Result<Self, ConfigError> {
        let mut bindings = Self::default();
        if let Some(m) = ser.cycle_modifier {
            bindings.cycle_modifier = m;
        }
        if let Some(m) = ser.rotate_modifier {
            bindings.rotate_modifier = m;
        }
        if let Some(b) = ser.confirm {
            bindings.confirm = b.to_binding()?;
        }
        if let Some(b) = ser.toggle_snap {
            bindings.toggle_snap = b.to_binding()?;
        }
        if let Some(b) = ser.toggle_tool {
            bindings.toggle_tool = b.to_binding()?;
        }
        if let Some(b) = ser.undo {
            bindings.undo = b.to_binding()?;
        }
        if let Some(b) = ser.redo {
            bindings.redo = b.to_binding()?;
        }
        if let Some(b) = ser.redo_alt {
            bindings.redo_alt = b.to_binding()?;
        }
        Ok(bindings)
    }
}

// =============================================================================
// Serializable mirror for the config file
// =============================================================================

#[derive(Serialize, Deserialize)]
struct SerBinding {
    key: String,
    #[serde(default)]
    ctrl: bool,
    #[serde(default)]
    shift: bool,
}

impl SerBinding {
    fn to_binding(&self) -> Result<KeyBinding, ConfigError> {
        let key = keycode_from_name(&self.key)
            .ok_or_else(|| ConfigError::UnknownKey(self.key.clone()))?;
        Ok(KeyBinding {
            key,
            ctrl: self.ctrl,
            shift: self.shift,
        })
    }
}

/// Every field is optional so a config file only needs to name the bindings
/// it changes. The escape binding is deliberately not rebindable.
#[derive(Serialize, Deserialize, Default)]
struct SerKeyBindings {
    cycle_modifier: Option<ScrollModifier>,
    rotate_modifier: Option<ScrollModifier>,
    confirm: Option<SerBinding>,
    toggle_snap: Option<SerBinding>,
    toggle_tool: Option<SerBinding>,
    undo: Option<SerBinding>,
    redo: Option<SerBinding>,
    redo_alt: Option<SerBinding>,
}

// =============================================================================
// Config errors
// =============================================================================

/// Errors that can occur while loading the keybindings file.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading the file.
    Io(std::io::Error),
    /// The file was not valid JSON for the expected schema.
    Parse(serde_json::Error),
    /// A binding named a key this build does not recognize.
    UnknownKey(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "Parse error: {e}"),
            ConfigError::UnknownKey(name) => write!(f, "Unknown key name: {name:?}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::UnknownKey(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

// =============================================================================
// Key name table
// =============================================================================

/// Human-readable / config-file name for the keys this editor supports.
pub fn keycode_name(key: KeyCode) -> &'static str {
    match key {
        KeyCode::KeyA => "A",
        KeyCode::KeyB => "B",
        KeyCode::KeyC => "C",
        KeyCode::KeyD => "D",
        KeyCode::KeyE => "E",
        KeyCode::KeyF => "F",
        KeyCode::KeyG => "G",
        KeyCode::KeyH => "H",
        KeyCode::KeyI => "I",
        KeyCode::KeyJ => "J",
        KeyCode::KeyK => "K",
        KeyCode::KeyL => "L",
        KeyCode::KeyM => "M",
        KeyCode::KeyN => "N",
        KeyCode::KeyO => "O",
        KeyCode::KeyP => "P",
        KeyCode::KeyQ => "Q",
        KeyCode::KeyR => "R",
        KeyCode::KeyS => "S",
        KeyCode::KeyT => "T",
        KeyCode::KeyU => "U",
        KeyCode::KeyV => "V",
        KeyCode::KeyW => "W",
        KeyCode::KeyX => "X",
        KeyCode::KeyY => "Y",
        KeyCode::KeyZ => "Z",
        KeyCode::Digit0 => "0",
        KeyCode::Digit1 => "1",
        KeyCode::Digit2 => "2",
        KeyCode::Digit3 => "3",
        KeyCode::Digit4 => "4",
        KeyCode::Digit5 => "5",
        KeyCode::Digit6 => "6",
        KeyCode::Digit7 => "7",
        KeyCode::Digit8 => "8",
        KeyCode::Digit9 => "9",
        KeyCode::Space => "Space",
        KeyCode::Enter => "Enter",
        KeyCode::Escape => "Escape",
        KeyCode::Tab => "Tab",
        KeyCode::Delete => "Delete",
        KeyCode::Backspace => "Backspace",
        KeyCode::ArrowUp => "Up",
        KeyCode::ArrowDown => "Down",
        KeyCode::ArrowLeft => "Left",
        KeyCode::ArrowRight => "Right",
        _ => "?",
    }
}

fn keycode_from_name(name: &str) -> Option<KeyCode> {
    let key = match name {
        "A" => KeyCode::KeyA,
        "B" => KeyCode::KeyB,
        "C" => KeyCode::KeyC,
        "D" => KeyCode::KeyD,
        "E" => KeyCode::KeyE,
        "F" => KeyCode::KeyF,
        "G" => KeyCode::KeyG,
        "H" => KeyCode::KeyH,
        "I" => KeyCode::KeyI,
        "J" => KeyCode::KeyJ,
        "K" => KeyCode::KeyK,
        "L" => KeyCode::KeyL,
        "M" => KeyCode::KeyM,
        "N" => KeyCode::KeyN,
        "O" => KeyCode::KeyO,
        "P" => KeyCode::KeyP,
        "Q" => KeyCode::KeyQ,
        "R" => KeyCode::KeyR,
        "S" => KeyCode::KeyS,
        "T" => KeyCode::KeyT,
        "U" => KeyCode::KeyU,
        "V" => KeyCode::KeyV,
        "W" => KeyCode::KeyW,
        "X" => KeyCode::KeyX,
        "Y" => KeyCode::KeyY,
        "Z" => KeyCode::KeyZ,
        "0" => KeyCode::Digit0,
        "1" => KeyCode::Digit1,
        "2" => KeyCode::Digit2,
        "3" => KeyCode::Digit3,
        "4" => KeyCode::Digit4,
        "5" => KeyCode::Digit5,
        "6" => KeyCode::Digit6,
        "7" => KeyCode::Digit7,
        "8" => KeyCode::Digit8,
        "9" => KeyCode::Digit9,
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "Tab" => KeyCode::Tab,
        "Delete" => KeyCode::Delete,
        "Backspace" => KeyCode::Backspace,
        "Up" => KeyCode::ArrowUp,
        "Down" => KeyCode::ArrowDown,
        "Left" => KeyCode::ArrowLeft,
        "Right" => KeyCode::ArrowRight,
        _ => return None,
    };
    Some(key)
}
