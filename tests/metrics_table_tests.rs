use multibagger_lens::catalog;
use multibagger_lens::metrics_table::{MetricRow, MetricsTable, SortDirection, SortKey};

fn rows() -> &'static [MetricRow] {
    catalog::find("RELIANCE").unwrap().metrics_table
}

fn years(rows: &[&MetricRow]) -> Vec<&'static str> {
    rows.iter().map(|r| r.year).collect()
}

#[test]
fn defaults_to_newest_year_first() {
    let table = MetricsTable::default();
    assert_eq!(table.sort_key(), SortKey::Year);
    assert_eq!(table.direction(), SortDirection::Descending);
    assert_eq!(years(&table.page_rows(rows())), vec!["FY24", "FY23", "FY22", "FY21", "FY20"]);
}

#[test]
fn clicking_a_header_twice_reverses_the_order() {
    let mut table = MetricsTable::default();
    table.sort_by(SortKey::Revenue);
    assert_eq!(table.direction(), SortDirection::Descending);
    let descending = table.rows(rows());
    assert_eq!(descending[0].year, "FY24");

    table.sort_by(SortKey::Revenue);
    assert_eq!(table.direction(), SortDirection::Ascending);
    let mut ascending = table.rows(rows());
    assert_eq!(ascending[0].year, "FY19");
    ascending.reverse();
    assert_eq!(ascending, descending);

    table.sort_by(SortKey::Revenue);
    assert_eq!(table.direction(), SortDirection::Descending);
    assert_eq!(table.rows(rows()), descending);
}

#[test]
fn switching_key_starts_descending() {
    let mut table = MetricsTable::default();
    table.sort_by(SortKey::Year);
    assert_eq!(table.direction(), SortDirection::Ascending);
    table.sort_by(SortKey::DebtEquity);
    assert_eq!(table.direction(), SortDirection::Descending);
    let debt: Vec<f64> = table.rows(rows()).iter().map(|r| r.debt_equity).collect();
    assert!(debt.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn pagination() {
    let mut table = MetricsTable::default();
    assert_eq!(table.total_pages(rows()), 2);
    assert_eq!(table.page_label(rows()), "Page 1 of 2");
    assert_eq!(table.showing(rows()), (1, 5, 6));
    assert!(!table.can_go_previous());
    assert!(table.can_go_next(rows()));

    table.next_page(rows());
    assert_eq!(table.page(), 1);
    assert_eq!(years(&table.page_rows(rows())), vec!["FY19"]);
    assert_eq!(table.showing(rows()), (6, 6, 6));

    table.next_page(rows());
    assert_eq!(table.page(), 1);
    table.previous_page();
    table.previous_page();
    assert_eq!(table.page(), 0);
}

#[test]
fn filtering_resets_to_the_first_page() {
    let mut table = MetricsTable::default();
    table.next_page(rows());
    table.set_filter("fy2");
    assert_eq!(table.page(), 0);
    assert_eq!(years(&table.rows(rows())), vec!["FY24", "FY23", "FY22", "FY21", "FY20"]);
    assert_eq!(table.total_pages(rows()), 1);
}

#[test]
fn no_matches_is_a_single_empty_page() {
    let mut table = MetricsTable::default();
    table.set_filter("2099");
    assert!(table.page_rows(rows()).is_empty());
    assert_eq!(table.page_label(rows()), "Page 1 of 1");
    assert_eq!(table.showing(rows()), (0, 0, 0));
    assert!(!table.can_go_next(rows()));
}
