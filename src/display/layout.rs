/// Arrangement of the clock pane and the settings pane.
///
/// The settings pane starts open. Dismissing it leaves a reopen hint in the
/// corner of the clock pane. A layout built with [`PaneLayout::clock_only`]
/// never shows the pane or the hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    settings_enabled: bool,
    settings_open: bool,
}

impl Default for PaneLayout {
    fn default() -> Self {
        Self {
            settings_enabled: true,
            settings_open: true,
        }
    }
}

impl PaneLayout {
    /// A layout without settings pane.
    pub fn clock_only() -> Self {
        Self {
            settings_enabled: false,
            settings_open: false,
        }
    }

    /// Whether the settings pane is drawn.
    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    /// Closes the settings pane.
    pub fn dismiss(&mut self) {
        self.settings_open = false;
    }

    /// Opens the settings pane again. No effect on a clock-only layout.
    pub fn reopen(&mut self) {
        self.settings_open = self.settings_enabled;
    }

    /// Opens a closed pane, closes an open one.
    pub fn toggle(&mut self) {
        if self.settings_open {
            self.dismiss();
        } else {
            self.reopen();
        }
    }

    /// Whether the floating "Customize" hint is drawn.
    pub fn shows_reopen_control(&self) -> bool {
        self.settings_enabled && !self.settings_open
    }
}
