use crate::{
    env_wo_default, errors::RouterConfigError, matcher_from_str, MatcherKind,
    RouterOptions,
};

#[test]
fn matcher_from_str_test() {
    assert_eq!(matcher_from_str("reference").unwrap(), MatcherKind::Reference);
    assert_eq!(matcher_from_str("DFS").unwrap(), MatcherKind::Reference);
    assert_eq!(
        matcher_from_str(" Accelerated ").unwrap(),
        MatcherKind::Accelerated
    );
    assert_eq!(matcher_from_str("flat").unwrap(), MatcherKind::Accelerated);
    assert!(matcher_from_str("trie").is_err());
    assert!(matcher_from_str("").is_err());
}

#[test]
fn matcher_display_parses_back() {
    for kind in [MatcherKind::Reference, MatcherKind::Accelerated] {
        assert_eq!(kind.to_string().parse::<MatcherKind>().unwrap(), kind);
    }
}

#[test]
fn builder_defaults() {
    let options = RouterOptions::builder().build();
    assert_eq!(options, RouterOptions::default());
    assert_eq!(options.matcher, MatcherKind::Reference);
    assert_eq!(options.history_limit, None);

    let options = RouterOptions::builder()
        .matcher(MatcherKind::Accelerated)
        .history_limit(8)
        .build();
    assert_eq!(options.history_limit, Some(8));
}

#[test]
fn zero_history_limit_is_rejected() {
    let options = RouterOptions::builder().history_limit(0).build();
    assert_eq!(options.validate(), Err(RouterConfigError::InvalidHistoryLimit));
}

#[test]
fn env_wo_default_test() {
    temp_env::with_var("TRELLIS_CONFIG_ENV_TEST", Some("custom"), || {
        assert_eq!(
            env_wo_default("TRELLIS_CONFIG_ENV_TEST").unwrap(),
            Some(String::from("custom"))
        );
    });

    temp_env::with_var_unset("TRELLIS_CONFIG_ENV_TEST", || {
        assert_eq!(env_wo_default("TRELLIS_CONFIG_ENV_TEST").unwrap(), None);
    });
}
