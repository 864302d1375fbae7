use multibagger_lens::catalog;
use multibagger_lens::search::{suggestions, CompanySearch, SearchKey};

#[test]
fn blank_query_lists_first_five() {
    let list = suggestions(catalog::companies(), "");
    assert_eq!(list.len(), 5);
    assert_eq!(list[0].ticker, "RELIANCE");
    assert_eq!(suggestions(catalog::companies(), "   ").len(), 5);
}

#[test]
fn matches_are_case_insensitive_across_fields() {
    let tcs = suggestions(catalog::companies(), "TCS");
    assert_eq!(tcs.len(), 1);
    assert_eq!(tcs[0].ticker, "TCS");

    let banks = suggestions(catalog::companies(), "banking");
    assert_eq!(banks.len(), 1);
    assert_eq!(banks[0].ticker, "HDFCBANK");

    assert_eq!(suggestions(catalog::companies(), "  pharma ")[0].ticker, "DIVISLAB");
    assert!(suggestions(catalog::companies(), "nonexistent").is_empty());
}

#[test]
fn arrow_keys_wrap_around() {
    let mut search = CompanySearch::default();
    search.set_query("");
    let list = search.suggestions(catalog::companies());

    search.handle_key(SearchKey::ArrowUp, &list);
    assert_eq!(search.active_index(), Some(4));
    search.handle_key(SearchKey::ArrowDown, &list);
    assert_eq!(search.active_index(), Some(0));
    search.handle_key(SearchKey::ArrowUp, &list);
    assert_eq!(search.active_index(), Some(4));
    search.handle_key(SearchKey::ArrowUp, &list);
    assert_eq!(search.active_index(), Some(3));
}

#[test]
fn enter_picks_the_highlighted_company() {
    let mut search = CompanySearch::default();
    search.set_query("a");
    let list = search.suggestions(catalog::companies());
    assert!(search.is_open());

    assert!(search.handle_key(SearchKey::Enter, &list).is_none());
    search.handle_key(SearchKey::ArrowDown, &list);
    search.handle_key(SearchKey::ArrowDown, &list);
    let picked = search.handle_key(SearchKey::Enter, &list).unwrap();

    assert_eq!(picked.ticker, list[1].ticker);
    assert_eq!(search.query(), picked.display_name());
    assert!(!search.is_open());
    assert_eq!(search.active_index(), None);
}

#[test]
fn escape_closes_and_typing_reopens() {
    let mut search = CompanySearch::default();
    search.set_query("re");
    let list = search.suggestions(catalog::companies());
    search.handle_key(SearchKey::ArrowDown, &list);
    search.handle_key(SearchKey::Escape, &list);
    assert!(!search.is_open());
    assert_eq!(search.active_index(), None);

    search.set_query("ret");
    assert!(search.is_open());
    assert_eq!(search.active_index(), None);
}

#[test]
fn keys_are_ignored_without_suggestions() {
    let mut search = CompanySearch::default();
    search.set_query("zzz");
    let list = search.suggestions(catalog::companies());
    assert!(list.is_empty());
    assert!(search.handle_key(SearchKey::ArrowDown, &list).is_none());
    assert_eq!(search.active_index(), None);
    assert!(search.is_open());
}
