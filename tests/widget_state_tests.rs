use multibagger_lens::catalog;
use multibagger_lens::gauge::GaugeModal;
use multibagger_lens::help::HelpCenter;
use multibagger_lens::navigation::{Navigation, SECTIONS};
use multibagger_lens::preferences::{AccountForms, AlertPreferences, Lookback, Plan};
use multibagger_lens::risk::RiskAccordion;

#[test]
fn accordion_keeps_at_most_one_entry_open() {
    let risks = catalog::find("RELIANCE").unwrap().risks;
    let mut accordion = RiskAccordion::new(risks);
    assert_eq!(accordion.open_id(), Some("reliance-risk-1"));

    accordion.toggle("reliance-risk-2");
    assert!(accordion.is_open("reliance-risk-2"));
    assert!(!accordion.is_open("reliance-risk-1"));

    accordion.toggle("reliance-risk-2");
    assert_eq!(accordion.open_id(), None);

    assert_eq!(RiskAccordion::new(&[]).open_id(), None);
}

#[test]
fn navigation_scrolls_once_and_then_follows_visibility() {
    let mut nav = Navigation::default();
    assert_eq!(nav.active(), SECTIONS[0].id);

    nav.navigate("risks");
    assert_eq!(nav.active(), "risks");
    assert_eq!(nav.active_label(), "Risk Radar");
    assert!(nav.has_pending_scroll());

    nav.observe(&[("overview", true), ("risks", false)]);
    assert_eq!(nav.active(), "risks");

    assert!(!nav.take_scroll_request("help"));
    assert!(nav.take_scroll_request("risks"));
    assert!(!nav.take_scroll_request("risks"));

    nav.observe(&[("overview", false), ("analytics", true), ("alerts", true)]);
    assert_eq!(nav.active(), "analytics");

    nav.observe(&[("overview", false)]);
    assert_eq!(nav.active(), "analytics");
}

#[test]
fn unknown_section_is_ignored() {
    let mut nav = Navigation::default();
    nav.navigate("pricing");
    assert_eq!(nav.active(), "overview");
    assert!(!nav.has_pending_scroll());
}

#[test]
fn alert_threshold_is_clamped() {
    let mut alerts = AlertPreferences::default();
    assert_eq!(alerts.price_threshold(), 5);
    assert!(alerts.enable_email && !alerts.enable_push);
    assert_eq!(alerts.lookback, Lookback::OneDay);

    alerts.set_price_threshold(0);
    assert_eq!(alerts.price_threshold(), 1);
    alerts.set_price_threshold(45);
    assert_eq!(alerts.price_threshold(), 20);
    assert_eq!(alerts.threshold_caption(), "Alert when daily change exceeds 20%.");
}

#[test]
fn account_defaults() {
    let account = AccountForms::default();
    assert_eq!(account.profile.full_name, "Arjun Mehra");
    assert_eq!(account.profile.plan, Plan::Growth);
    assert_eq!(account.plan_caption(), "Growth Plan");
}

#[test]
fn help_filter() {
    let faqs = catalog::find("RELIANCE").unwrap().faqs;
    let mut help = HelpCenter::default();
    assert_eq!(help.filtered(faqs).len(), faqs.len());

    help.query = "ENERGY SPREADS".to_string();
    let hits = help.filtered(faqs);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "reliance-faq-3");

    help.query = "quantum".to_string();
    assert!(help.filtered(faqs).is_empty());
}

#[test]
fn gauge_modal_toggles() {
    let mut modal = GaugeModal::default();
    assert!(!modal.is_open());
    modal.open();
    assert!(modal.is_open());
    modal.close();
    assert!(!modal.is_open());
}
