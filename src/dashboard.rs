// dashboard.rs
//! Selection state and everything derived from it.
//!
//! `(company, timeframe)` is the only state that drives recomputation. Every
//! change calls the pure generator and transforms again and replaces their
//! output wholesale. Per-company widgets (table, accordion, help filter,
//! dialog) are rebuilt on a company switch. The alert and account forms are
//! not company-derived and survive it.

use crate::catalog::{self, CompanyProfile};
use crate::config::Config;
use crate::datawindow::{CandleWindow, ViewRange};
use crate::error::{Error, Result};
use crate::gauge::GaugeModal;
use crate::help::HelpCenter;
use crate::metrics_table::MetricsTable;
use crate::navigation::Navigation;
use crate::preferences::{AccountForms, AlertPreferences};
use crate::risk::RiskAccordion;
use crate::search::CompanySearch;
use crate::timeframe::Timeframe;
use crate::transforms::{self, RatioBars, RevenueSeries};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub profile: &'static CompanyProfile,
    pub timeframe: Timeframe,
}

impl Selection {
    pub fn ticker(&self) -> &'static str {
        self.profile.company.ticker
    }
}

#[derive(Debug)]
pub struct Dashboard {
    selection: Selection,
    pub candles: CandleWindow,
    pub revenue: RevenueSeries,
    pub revenue_view: ViewRange,
    pub ratios: RatioBars,
    pub ratio_view: ViewRange,
    pub search: CompanySearch,
    pub metrics_table: MetricsTable,
    pub risks: RiskAccordion,
    pub help: HelpCenter,
    pub gauge: GaugeModal,
    pub navigation: Navigation,
    pub alerts: AlertPreferences,
    pub account: AccountForms,
}

impl Dashboard {
    pub fn new(config: &Config, now: DateTime<Utc>) -> Self {
        let profile = catalog::find(&config.general.default_ticker).unwrap_or_else(|| {
            log::warn!(
                "configured ticker '{}' is not in the catalog, falling back to {}",
                config.general.default_ticker,
                catalog::default_profile().company.ticker
            );
            catalog::default_profile()
        });
        let selection = Selection {
            profile,
            timeframe: config.general.default_timeframe,
        };

        let mut dashboard = Self {
            selection,
            candles: CandleWindow::new(Vec::new()),
            revenue: RevenueSeries {
                labels: Vec::new(),
                values: Vec::new(),
            },
            revenue_view: ViewRange::full(0),
            ratios: transforms::scale_ratios(&profile.ratios, selection.timeframe),
            ratio_view: ViewRange::full(0),
            search: CompanySearch::for_selected(&profile.company),
            metrics_table: MetricsTable::default(),
            risks: RiskAccordion::new(profile.risks),
            help: HelpCenter::default(),
            gauge: GaugeModal::default(),
            navigation: Navigation::default(),
            alerts: AlertPreferences::default(),
            account: AccountForms::default(),
        };
        dashboard.recompute(now);
        dashboard
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn profile(&self) -> &'static CompanyProfile {
        self.selection.profile
    }

    pub fn timeframe(&self) -> Timeframe {
        self.selection.timeframe
    }

    pub fn select_company(&mut self, ticker: &str, now: DateTime<Utc>) -> Result<()> {
        let profile = catalog::find(ticker).ok_or_else(|| Error::UnknownTicker(ticker.to_string()))?;
        log::info!("company selected: {}", profile.company.display_name());

        self.selection.profile = profile;
        self.search = CompanySearch::for_selected(&profile.company);
        self.metrics_table = MetricsTable::default();
        self.risks = RiskAccordion::new(profile.risks);
        self.help = HelpCenter::default();
        self.gauge = GaugeModal::default();
        self.recompute(now);
        Ok(())
    }

    pub fn select_timeframe(&mut self, timeframe: Timeframe, now: DateTime<Utc>) {
        if timeframe != self.selection.timeframe {
            log::info!("timeframe changed: {} -> {}", self.selection.timeframe, timeframe);
        }
        self.selection.timeframe = timeframe;
        self.recompute(now);
    }

    /// Rebuilds the series against a new reference time, keeping the selection.
    pub fn refresh(&mut self, now: DateTime<Utc>) {
        self.recompute(now);
    }

    /// Returns every chart to its original extents.
    pub fn reset_views(&mut self) {
        self.candles.reset_view();
        self.revenue_view.reset();
        self.ratio_view.reset();
    }

    fn recompute(&mut self, now: DateTime<Utc>) {
        let Selection { profile, timeframe } = self.selection;

        self.candles.replace(profile.series_seed.generate(timeframe, now));
        self.revenue = transforms::revenue_window(profile.revenue_labels, profile.revenue, timeframe);
        self.revenue_view = ViewRange::full(self.revenue.len());
        self.ratios = transforms::scale_ratios(&profile.ratios, timeframe);
        self.ratio_view = ViewRange::full(self.ratios.values.len());

        log::debug!(
            "recomputed {} {}: {} candles every {}d, {} revenue points, multiplier {}",
            profile.company.ticker,
            timeframe,
            self.candles.candles.len(),
            timeframe.policy().step_size_days,
            self.revenue.len(),
            timeframe.ratio_multiplier()
        );
    }
}
