//! Transient control labels
//!
//! A control can temporarily show an outcome ("Valid ✔", "Copied ✔") that
//! reverts to its idle label after a delay. Each flash bumps a per-control
//! generation; a revert only applies if no newer flash happened since, so a
//! second click restarts the timer instead of being cut short by the first.

/// Outcome shown after a successful validation
pub const LABEL_VALID: &str = "Valid ✔";

/// Outcome shown after a failed validation
pub const LABEL_INVALID: &str = "Invalid ✘";

/// Outcome shown after a successful copy
pub const LABEL_COPIED: &str = "Copied ✔";

/// Toolbar control carrying a transient label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Validate,
    Copy,
}

impl Control {
    /// Label shown while no outcome is displayed
    pub fn idle_label(&self) -> &'static str {
        match self {
            Control::Validate => "Validate",
            Control::Copy => "Copy",
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Slot {
    text: Option<String>,
    generation: u64,
}

/// Label state for every transient control
#[derive(Debug, Clone, Default)]
pub struct Feedback {
    validate: Slot,
    copy: Slot,
}

impl Feedback {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, control: Control) -> &Slot {
        match control {
            Control::Validate => &self.validate,
            Control::Copy => &self.copy,
        }
    }

    fn slot_mut(&mut self, control: Control) -> &mut Slot {
        match control {
            Control::Validate => &mut self.validate,
            Control::Copy => &mut self.copy,
        }
    }

    /// Text the control currently shows
    pub fn label(&self, control: Control) -> &str {
        self.slot(control)
            .text
            .as_deref()
            .unwrap_or_else(|| control.idle_label())
    }

    /// Whether an outcome is currently displayed
    pub fn is_flashing(&self, control: Control) -> bool {
        self.slot(control).text.is_some()
    }

    /// Show `text` on `control`, returning the generation to revert with
    pub fn flash(&mut self, control: Control, text: impl Into<String>) -> u64 {
        let slot = self.slot_mut(control);
        slot.generation = slot.generation.wrapping_add(1);
        slot.text = Some(text.into());
        slot.generation
    }

    /// Restore the idle label if `generation` is still the latest flash.
    ///
    /// Returns whether the label changed.
    pub fn revert(&mut self, control: Control, generation: u64) -> bool {
        let slot = self.slot_mut(control);
        if slot.generation != generation || slot.text.is_none() {
            return false;
        }
        slot.text = None;
        true
    }
}
