// metrics_table.rs
//! Yearly metrics table: filter by year, sort by any column, fixed-size pages.

use crate::settings::TABLE_PAGE_SIZE;
use std::cmp::Ordering;

pub const NO_MATCHES: &str = "No records match the current filter.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRow {
    pub year: &'static str,
    /// ₹ crore.
    pub revenue: f64,
    pub profit_margin: f64,
    pub roe: f64,
    pub debt_equity: f64,
    pub market_share: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Year,
    Revenue,
    ProfitMargin,
    Roe,
    DebtEquity,
    MarketShare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Year,
        SortKey::Revenue,
        SortKey::ProfitMargin,
        SortKey::Roe,
        SortKey::DebtEquity,
        SortKey::MarketShare,
    ];

    pub fn header(self) -> &'static str {
        match self {
            SortKey::Year => "Year",
            SortKey::Revenue => "Revenue ₹Cr",
            SortKey::ProfitMargin => "Profit Margin %",
            SortKey::Roe => "ROE %",
            SortKey::DebtEquity => "Debt/Equity",
            SortKey::MarketShare => "Market Share %",
        }
    }

    fn compare(self, a: &MetricRow, b: &MetricRow) -> Ordering {
        let numeric = |f: fn(&MetricRow) -> f64| f(a).total_cmp(&f(b));
        match self {
            SortKey::Year => a.year.cmp(b.year),
            SortKey::Revenue => numeric(|r| r.revenue),
            SortKey::ProfitMargin => numeric(|r| r.profit_margin),
            SortKey::Roe => numeric(|r| r.roe),
            SortKey::DebtEquity => numeric(|r| r.debt_equity),
            SortKey::MarketShare => numeric(|r| r.market_share),
        }
    }
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "⏶",
            SortDirection::Descending => "⏷",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsTable {
    filter: String,
    sort_key: SortKey,
    direction: SortDirection,
    page: usize,
}

impl Default for MetricsTable {
    fn default() -> Self {
        Self {
            filter: String::new(),
            sort_key: SortKey::Year,
            direction: SortDirection::Descending,
            page: 0,
        }
    }
}

impl MetricsTable {
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Any filter edit goes back to the first page.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page = 0;
    }

    /// Header click: flip direction on the active key, otherwise switch key, descending.
    pub fn sort_by(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.direction = self.direction.flipped();
        } else {
            self.sort_key = key;
            self.direction = SortDirection::Descending;
        }
    }

    /// Filtered and sorted rows, across all pages.
    pub fn rows<'a>(&self, rows: &'a [MetricRow]) -> Vec<&'a MetricRow> {
        let needle = self.filter.to_lowercase();
        let mut filtered: Vec<&MetricRow> = rows
            .iter()
            .filter(|row| row.year.to_lowercase().contains(&needle))
            .collect();
        filtered.sort_by(|a, b| {
            let ord = self.sort_key.compare(a, b);
            match self.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
        filtered
    }

    pub fn page_rows<'a>(&self, rows: &'a [MetricRow]) -> Vec<&'a MetricRow> {
        self.rows(rows)
            .into_iter()
            .skip(self.page * TABLE_PAGE_SIZE)
            .take(TABLE_PAGE_SIZE)
            .collect()
    }

    pub fn total_pages(&self, rows: &[MetricRow]) -> usize {
        self.rows(rows).len().div_ceil(TABLE_PAGE_SIZE)
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 0
    }

    pub fn can_go_next(&self, rows: &[MetricRow]) -> bool {
        self.page + 1 < self.total_pages(rows)
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn next_page(&mut self, rows: &[MetricRow]) {
        if self.can_go_next(rows) {
            self.page += 1;
        }
    }

    /// `(first, last, total)` for the "Showing a-b of n" footer, 1-based.
    pub fn showing(&self, rows: &[MetricRow]) -> (usize, usize, usize) {
        let total = self.rows(rows).len();
        if total == 0 {
            return (0, 0, 0);
        }
        let first = self.page * TABLE_PAGE_SIZE + 1;
        let last = ((self.page + 1) * TABLE_PAGE_SIZE).min(total);
        (first, last, total)
    }

    /// "Page x of y", never "of 0".
    pub fn page_label(&self, rows: &[MetricRow]) -> String {
        format!("Page {} of {}", self.page + 1, self.total_pages(rows).max(1))
    }
}
