use multibagger_lens::catalog;
use multibagger_lens::gauge;
use std::collections::HashSet;

#[test]
fn five_companies_with_unique_tickers_and_seeds() {
    assert_eq!(catalog::companies().len(), 5);
    let tickers: HashSet<_> = catalog::companies().map(|c| c.ticker).collect();
    assert_eq!(tickers.len(), 5);
    let seeds: HashSet<_> = catalog::profiles().iter().map(|p| p.series_seed.seed).collect();
    assert_eq!(seeds.len(), 5);
}

#[test]
fn lookup_by_ticker() {
    let tcs = catalog::find("TCS").unwrap();
    assert_eq!(tcs.company.name, "Tata Consultancy Services");
    assert_eq!(tcs.company.display_name(), "Tata Consultancy Services (TCS)");
    assert!(catalog::find("tcs").is_none());
    assert!(catalog::find("INFY").is_none());
    assert_eq!(catalog::default_profile().company.ticker, "RELIANCE");
}

#[test]
fn profiles_are_consistent() {
    for p in catalog::profiles() {
        let ticker = p.company.ticker;
        assert_eq!(p.revenue_labels.len(), p.revenue.len(), "{ticker}");
        assert_eq!(gauge::total_weight(p.factors), 100, "{ticker}");
        assert!(p.gauge_score <= gauge::MAX_SCORE, "{ticker}");
        assert!(p.factors.iter().all(|f| f.score <= gauge::MAX_FACTOR_SCORE), "{ticker}");
        assert!(!p.risks.is_empty(), "{ticker}");
        assert!(!p.metrics_table.is_empty(), "{ticker}");
        assert!(!p.faqs.is_empty(), "{ticker}");
        for item in p.news {
            assert!(item.published_at().is_some(), "{} has time {}", item.id, item.time);
        }
    }
}

#[test]
fn risk_ids_are_unique_per_company() {
    for p in catalog::profiles() {
        let ids: HashSet<_> = p.risks.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), p.risks.len());
    }
}
