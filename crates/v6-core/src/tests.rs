use crate::*;

// ========== Strategy ==========

#[test]
fn test_strategy_default_is_rightmost() {
    assert_eq!(Strategy::default(), Strategy::Rightmost);
}

#[test]
fn test_strategy_parse() {
    assert_eq!("rightmost".parse::<Strategy>().unwrap(), Strategy::Rightmost);
    assert_eq!("LEFTMOST".parse::<Strategy>().unwrap(), Strategy::Leftmost);
    assert_eq!(" left ".parse::<Strategy>().unwrap(), Strategy::Leftmost);
}

#[test]
fn test_strategy_parse_unknown() {
    let err = "middle".parse::<Strategy>().unwrap_err();
    assert!(matches!(err, V6Error::UnknownStrategy(ref s) if s == "middle"));
}

#[test]
fn test_strategy_display_roundtrips() {
    for s in Strategy::ALL {
        assert_eq!(s.to_string().parse::<Strategy>().unwrap(), s);
    }
}

#[test]
fn test_rightmost_prefers_ties() {
    assert!(Strategy::Rightmost.prefers(3, 3));
    assert!(Strategy::Rightmost.prefers(4, 3));
    assert!(!Strategy::Rightmost.prefers(2, 3));
}

#[test]
fn test_leftmost_keeps_ties() {
    assert!(!Strategy::Leftmost.prefers(3, 3));
    assert!(Strategy::Leftmost.prefers(4, 3));
}

#[test]
fn test_strategy_serde_lowercase() {
    assert_eq!(serde_json::to_string(&Strategy::Leftmost).unwrap(), "\"leftmost\"");
    let s: Strategy = serde_json::from_str("\"rightmost\"").unwrap();
    assert_eq!(s, Strategy::Rightmost);
}

// ========== ZeroRun ==========

#[test]
fn test_zero_run_range() {
    let run = ZeroRun::new(2, 3);
    assert_eq!(run.end(), 5);
    assert_eq!(run.range(), 2..5);
    assert!(run.is_eligible());
    assert!(!ZeroRun::new(0, 1).is_eligible());
}

#[test]
fn test_zero_run_end_saturates() {
    let run = ZeroRun::new(usize::MAX, 2);
    assert_eq!(run.end(), usize::MAX);
    assert!(run.range().is_empty());
}

// ========== Comparison ==========

#[test]
fn test_comparison_diverges() {
    let c = Comparison {
        input: "x".into(),
        rightmost: "2001::db8:0:0:db8:1".into(),
        leftmost: "2001:0:0:db8::db8:1".into(),
    };
    assert!(c.diverges());
}

// ========== Errors ==========

#[test]
fn test_invalid_address_message() {
    let err = InvalidAddress::group_count("1:2:3", 3);
    assert_eq!(err.reason, MalformedAddress::MalformedGroupCount { found: 3 });
    assert!(err.to_string().contains("expected 8 groups, found 3"));
}

#[test]
fn test_invalid_address_into_v6_error() {
    let err: V6Error = InvalidAddress::hex_group("a", 0, "zzzz").into();
    assert!(matches!(err, V6Error::InvalidAddress(_)));
    assert!(err.to_string().contains("zzzz"));
}

// ========== Config ==========

#[test]
fn test_config_defaults() {
    let c = V6Config::default();
    assert_eq!(c.abbreviation.strategy, Strategy::Rightmost);
    assert_eq!(c.logging.filter, "warn");
}

#[test]
fn test_config_partial_json() {
    let c = V6Config::from_json_str(r#"{"abbreviation":{"strategy":"leftmost"}}"#).unwrap();
    assert_eq!(c.abbreviation.strategy, Strategy::Leftmost);
    assert_eq!(c.logging, LoggingConfig::default());
}

#[test]
fn test_config_bad_strategy() {
    let err = V6Config::from_json_str(r#"{"abbreviation":{"strategy":"middle"}}"#).unwrap_err();
    assert!(matches!(err, V6Error::Config(_)));
}

#[test]
fn test_config_json_roundtrip() {
    let mut c = V6Config::default();
    c.logging.filter = "v6_abbrev=debug".into();
    let back = V6Config::from_json_str(&serde_json::to_string_pretty(&c).unwrap()).unwrap();
    assert_eq!(back, c);
}

#[test]
fn test_config_load_missing_file() {
    let err = V6Config::load("/nonexistent/v6abbrev.json").unwrap_err();
    assert!(matches!(err, V6Error::Io(_)));
}
