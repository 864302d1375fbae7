// preferences.rs
//! Alerts, profile, workspace and subscription forms.
//!
//! State lives only as long as the window; nothing here is submitted or saved.

pub const PRICE_THRESHOLD_RANGE: std::ops::RangeInclusive<u8> = 1..=20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookback {
    OneDay,
    OneWeek,
    OneMonth,
}

impl Lookback {
    pub const ALL: [Lookback; 3] = [Lookback::OneDay, Lookback::OneWeek, Lookback::OneMonth];

    pub fn label(self) -> &'static str {
        match self {
            Lookback::OneDay => "1 Day",
            Lookback::OneWeek => "1 Week",
            Lookback::OneMonth => "1 Month",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertPreferences {
    pub enable_email: bool,
    pub enable_push: bool,
    price_threshold: u8,
    pub include_news: bool,
    pub include_filings: bool,
    pub include_sentiment: bool,
    pub lookback: Lookback,
}

impl Default for AlertPreferences {
    fn default() -> Self {
        Self {
            enable_email: true,
            enable_push: false,
            price_threshold: 5,
            include_news: true,
            include_filings: true,
            include_sentiment: true,
            lookback: Lookback::OneDay,
        }
    }
}

impl AlertPreferences {
    /// Daily % move that triggers an alert.
    pub fn price_threshold(&self) -> u8 {
        self.price_threshold
    }

    pub fn set_price_threshold(&mut self, percent: u8) {
        self.price_threshold =
            percent.clamp(*PRICE_THRESHOLD_RANGE.start(), *PRICE_THRESHOLD_RANGE.end());
    }

    pub fn threshold_caption(&self) -> String {
        format!("Alert when daily change exceeds {}%.", self.price_threshold)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    Starter,
    Growth,
    Institutional,
}

impl Plan {
    pub fn label(self) -> &'static str {
        match self {
            Plan::Starter => "Starter",
            Plan::Growth => "Growth",
            Plan::Institutional => "Institutional",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub plan: Plan,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            full_name: "Arjun Mehra".to_string(),
            email: "arjun.mehra@example.com".to_string(),
            role: "Portfolio Manager".to_string(),
            plan: Plan::Growth,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl DigestFrequency {
    pub const ALL: [DigestFrequency; 3] = [
        DigestFrequency::Daily,
        DigestFrequency::Weekly,
        DigestFrequency::Monthly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DigestFrequency::Daily => "Daily",
            DigestFrequency::Weekly => "Weekly",
            DigestFrequency::Monthly => "Monthly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspacePreferences {
    pub refresh_daily: bool,
    pub share_with_team: bool,
    pub digest: DigestFrequency,
}

impl Default for WorkspacePreferences {
    fn default() -> Self {
        Self {
            refresh_daily: true,
            share_with_team: false,
            digest: DigestFrequency::Weekly,
        }
    }
}

/// Inert buttons on the alerts and account panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    SaveAlertPreferences,
    ManageBilling,
    UpgradePlan,
}

impl FormAction {
    pub fn label(self) -> &'static str {
        match self {
            FormAction::SaveAlertPreferences => "Save Preferences",
            FormAction::ManageBilling => "Manage billing",
            FormAction::UpgradePlan => "Upgrade to Institutional",
        }
    }
}

/// Buttons have no endpoint; the press is only logged.
pub fn press(action: FormAction) {
    log::info!("'{}' pressed; no submission endpoint, state stays local", action.label());
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountForms {
    pub profile: ProfileForm,
    pub workspace: WorkspacePreferences,
}

impl AccountForms {
    pub fn plan_caption(&self) -> String {
        format!("{} Plan", self.profile.plan.label())
    }
}
