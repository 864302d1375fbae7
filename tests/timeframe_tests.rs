use multibagger_lens::timeframe::{policy_for_label, BucketUnit, Timeframe};
use multibagger_lens::Error;

#[test]
fn labels_parse_back() {
    for timeframe in Timeframe::ALL {
        assert_eq!(timeframe.label().parse::<Timeframe>().unwrap(), timeframe);
        assert_eq!(timeframe.to_string(), timeframe.label());
    }
}

#[test]
fn unknown_label_is_rejected() {
    match "2Y".parse::<Timeframe>() {
        Err(Error::UnknownTimeframe(label)) => assert_eq!(label, "2Y"),
        other => panic!("unexpected {other:?}"),
    }
    assert!("1y".parse::<Timeframe>().is_err());
    assert!(policy_for_label("2Y").is_none());
}

#[test]
fn policies() {
    let expected = [
        ("1M", 22, 1, BucketUnit::Day),
        ("3M", 66, 1, BucketUnit::Week),
        ("1Y", 220, 1, BucketUnit::Week),
        ("5Y", 360, 5, BucketUnit::Month),
        ("Max", 420, 7, BucketUnit::Month),
    ];
    for (label, points, step, unit) in expected {
        let policy = policy_for_label(label).unwrap();
        assert_eq!(policy.point_count, points, "{label}");
        assert_eq!(policy.step_size_days, step, "{label}");
        assert_eq!(policy.bucket_unit, unit, "{label}");
    }
}

#[test]
fn default_is_one_year() {
    assert_eq!(Timeframe::default(), Timeframe::OneYear);
}

#[test]
fn serializes_as_label() {
    assert_eq!(serde_json::to_string(&Timeframe::FiveYears).unwrap(), "\"5Y\"");
    let parsed: Timeframe = serde_json::from_str("\"Max\"").unwrap();
    assert_eq!(parsed, Timeframe::Max);
}
