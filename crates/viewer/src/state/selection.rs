use shared::PanelLabel;

/// Single-panel selection, keyed by label
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PanelSelection {
    selected: Option<PanelLabel>,
}

impl PanelSelection {
    /// Currently selected label
    pub fn get(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selected.as_deref() == Some(label)
    }

    /// Replace the selection. Returns true if it changed.
    pub fn set(&mut self, label: Option<PanelLabel>) -> bool {
        if self.selected == label {
            return false;
        }
        self.selected = label;
        true
    }

    pub fn clear(&mut self) -> bool {
        self.set(None)
    }

    /// Apply a pick result: re-picking the selected label clears it, any other
    /// hit selects it, and a miss always clears.
    pub fn apply_pick(&mut self, hit: Option<&str>) -> bool {
        match hit {
            Some(label) if self.is_selected(label) => self.clear(),
            Some(label) => self.set(Some(label.to_string())),
            None => self.clear(),
        }
    }
}
