// risk.rs
//! Risk list with a single expanded entry.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Medium,
    High,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Risk {
    pub id: &'static str,
    pub title: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub mitigation: &'static str,
}

/// Accordion state. Holds the id of the open entry, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAccordion {
    open: Option<&'static str>,
}

impl RiskAccordion {
    /// Opens the first risk of `risks`, or nothing for an empty list.
    pub fn new(risks: &[Risk]) -> Self {
        Self {
            open: risks.first().map(|r| r.id),
        }
    }

    pub fn open_id(&self) -> Option<&'static str> {
        self.open
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open == Some(id)
    }

    /// Opening an entry closes whichever one was open before.
    pub fn toggle(&mut self, id: &'static str) {
        self.open = if self.is_open(id) { None } else { Some(id) };
    }
}
