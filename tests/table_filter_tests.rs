use crudgen::config::StrategyConfig;

#[test]
fn test_deny_wins_even_when_allow_listed() {
    let mut strategy = StrategyConfig::new();
    strategy.add_generate_tables(["t_user", "t_order"]);
    strategy.add_un_generate_tables(["t_order"]);

    assert!(strategy.is_support_generate("t_user"));
    assert!(!strategy.is_support_generate("t_order"));
}

#[test]
fn test_empty_allow_list_admits_everything_not_denied() {
    let mut strategy = StrategyConfig::new();
    strategy.add_un_generate_tables(["t_log"]);

    assert!(strategy.is_support_generate("t_user"));
    assert!(strategy.is_support_generate("t_anything_else"));
    assert!(!strategy.is_support_generate("t_log"));
}

#[test]
fn test_empty_configuration_admits_everything() {
    let strategy = StrategyConfig::new();
    assert!(strategy.is_support_generate("t_user"));
    assert!(strategy.is_support_generate(""));
}

#[test]
fn test_allow_list_membership_is_required_once_populated() {
    let mut strategy = StrategyConfig::new();
    strategy.add_generate_tables(["t_user"]);

    assert!(strategy.is_support_generate("t_user"));
    assert!(!strategy.is_support_generate("t_order"));
}

#[test]
fn test_matching_is_case_sensitive_and_exact() {
    let mut strategy = StrategyConfig::new();
    strategy.add_generate_tables(["t_user"]);

    assert!(!strategy.is_support_generate("T_USER"));
    assert!(!strategy.is_support_generate("t_user "));
    assert!(strategy.is_support_generate("t_user"));
}

#[test]
fn test_list_entries_are_trimmed_on_insert() {
    let mut strategy = StrategyConfig::new();
    strategy.add_generate_tables(["  t_user  "]);
    strategy.add_un_generate_tables([" t_log "]);

    assert!(strategy.is_support_generate("t_user"));
    assert!(!strategy.is_support_generate("t_log"));
}

#[test]
fn test_blank_entries_are_dropped_silently() {
    let mut strategy = StrategyConfig::new();
    strategy.add_generate_tables(["", "   ", "\t"]);

    // Nothing was inserted, so the allow-list stays open.
    assert!(strategy.generate_tables().is_empty());
    assert!(strategy.is_support_generate("t_user"));
}

#[test]
fn test_re_adding_a_name_is_idempotent() {
    let mut strategy = StrategyConfig::new();
    strategy.add_generate_tables(["t_user"]);
    strategy.add_generate_tables(["t_user", "t_user"]);

    assert_eq!(strategy.generate_tables().len(), 1);
}
