// search.rs
//! Company combobox: free-text filtering plus keyboard navigation of the suggestions.

use crate::catalog::Company;
use crate::settings::{SUGGESTIONS_WITHOUT_QUERY, SUGGESTIONS_WITH_QUERY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanySearch {
    query: String,
    open: bool,
    active: Option<usize>,
}

pub fn matches(company: &Company, needle: &str) -> bool {
    format!(
        "{} {} {} {}",
        company.name, company.ticker, company.sector, company.market_cap
    )
    .to_lowercase()
    .contains(needle)
}

/// First five companies for a blank query, otherwise up to eight case-insensitive matches.
pub fn suggestions<'a>(
    companies: impl IntoIterator<Item = &'a Company>,
    query: &str,
) -> Vec<&'a Company> {
    let needle = query.trim().to_lowercase();
    let companies = companies.into_iter();
    if needle.is_empty() {
        return companies.take(SUGGESTIONS_WITHOUT_QUERY).collect();
    }
    companies
        .filter(|c| matches(c, &needle))
        .take(SUGGESTIONS_WITH_QUERY)
        .collect()
}

impl CompanySearch {
    /// Box prefilled with the current selection, list closed.
    pub fn for_selected(company: &Company) -> Self {
        Self {
            query: company.display_name(),
            open: false,
            active: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.open = true;
        self.active = None;
    }

    pub fn focus(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.active = None;
    }

    pub fn suggestions<'a>(
        &self,
        companies: impl IntoIterator<Item = &'a Company>,
    ) -> Vec<&'a Company> {
        suggestions(companies, &self.query)
    }

    /// Applies a key press against the current suggestion list.
    /// Returns the company picked with `Enter`, if any.
    pub fn handle_key<'a>(&mut self, key: SearchKey, suggestions: &[&'a Company]) -> Option<&'a Company> {
        let count = suggestions.len();
        if count == 0 {
            return None;
        }
        match key {
            SearchKey::ArrowDown => {
                self.active = Some(self.active.map_or(0, |i| (i + 1) % count));
            }
            SearchKey::ArrowUp => {
                self.active = Some(match self.active {
                    None | Some(0) => count - 1,
                    Some(i) => i.min(count) - 1,
                });
            }
            SearchKey::Enter => {
                let company = self.active.and_then(|i| suggestions.get(i).copied())?;
                self.select(company);
                return Some(company);
            }
            SearchKey::Escape => self.close(),
        }
        None
    }

    pub fn select(&mut self, company: &Company) {
        self.query = company.display_name();
        self.close();
    }
}
