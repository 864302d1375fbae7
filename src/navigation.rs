// navigation.rs
//! Sidebar sections and which one is highlighted.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const SECTIONS: [Section; 6] = [
    Section { id: "overview", label: "Overview", icon: "🏠" },
    Section { id: "analytics", label: "Analytics", icon: "📊" },
    Section { id: "alerts", label: "Alerts", icon: "🔔" },
    Section { id: "risks", label: "Risk Radar", icon: "🛡" },
    Section { id: "account", label: "Account", icon: "📖" },
    Section { id: "help", label: "Help", icon: "❓" },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    active: &'static str,
    pending_scroll: Option<&'static str>,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            active: SECTIONS[0].id,
            pending_scroll: None,
        }
    }
}

impl Navigation {
    pub fn active(&self) -> &'static str {
        self.active
    }

    pub fn active_label(&self) -> &'static str {
        SECTIONS
            .iter()
            .find(|s| s.id == self.active)
            .map_or(SECTIONS[0].label, |s| s.label)
    }

    /// Highlights `id` and asks the view to scroll it into place. Unknown ids are ignored.
    pub fn navigate(&mut self, id: &str) {
        if let Some(section) = SECTIONS.iter().find(|s| s.id == id) {
            self.active = section.id;
            self.pending_scroll = Some(section.id);
        }
    }

    /// Consumed once by the section that has to scroll.
    pub fn take_scroll_request(&mut self, id: &str) -> bool {
        if self.pending_scroll == Some(id) {
            self.pending_scroll = None;
            true
        } else {
            false
        }
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.pending_scroll.is_some()
    }

    /// Highlights the first visible section. Skipped while a requested scroll is still in flight.
    pub fn observe(&mut self, visibility: &[(&'static str, bool)]) {
        if self.pending_scroll.is_some() {
            return;
        }
        if let Some((id, _)) = visibility.iter().find(|(_, visible)| *visible) {
            self.active = *id;
        }
    }
}
