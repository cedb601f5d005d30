#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::config::{ HoursPolicy, KanbanConfig, TaskIdPolicy, ValidationRules };
    use crate::errors::KanbanError;
    use crate::implementations::config::{ ConfigError, CONFIG_ENV_VAR };

    #[test]
    fn defaults_match_the_standard_rules() {
        let config = KanbanConfig::default();
        assert_eq!(config.rules.username_max_len, 5);
        assert_eq!(config.rules.username_separator, '_');
        assert_eq!(config.rules.password_min_len, 8);
        assert_eq!(config.rules.password_specials, "@$!%*?&");
        assert_eq!(config.rules.description_max_len, 50);
        assert_eq!(config.ledger.task_id_policy, TaskIdPolicy::Creation);
        assert_eq!(config.ledger.hours_policy, HoursPolicy::Cumulative);
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let config = KanbanConfig::from_yaml(
            "rules:\n  description_max_len: 80\nledger:\n  hours_policy: live\n"
        ).unwrap();

        assert_eq!(config.rules.description_max_len, 80);
        assert_eq!(config.rules.username_max_len, 5);
        assert_eq!(config.ledger.hours_policy, HoursPolicy::Live);
        assert_eq!(config.ledger.task_id_policy, TaskIdPolicy::Creation);
    }

    #[test]
    fn empty_mapping_is_the_default_config() {
        assert_eq!(KanbanConfig::from_yaml("{}").unwrap(), KanbanConfig::default());
    }

    #[test]
    fn unknown_policy_is_a_parse_error() {
        let err = KanbanConfig::from_yaml("ledger:\n  task_id_policy: sometimes\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)), "got: {err}");
    }

    #[test]
    fn unsatisfiable_rules_are_rejected() {
        let err = KanbanConfig::from_yaml("rules:\n  password_specials: \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRule { ref rule, .. } if rule == "password_specials"));

        let err = KanbanConfig::from_yaml("rules:\n  username_separator: a\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRule { ref rule, .. } if rule == "username_separator"));

        let mut config = KanbanConfig::default();
        config.rules = ValidationRules { username_max_len: 0, ..ValidationRules::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "ledger:\n  task_id_policy: display").expect("write");

        let config = KanbanConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.ledger.task_id_policy, TaskIdPolicy::Display);
    }

    // Only test that touches the process environment
    #[test]
    fn env_var_is_used_when_no_path_is_given() {
        let mut from_env = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(from_env, "ledger:\n  hours_policy: live").expect("write");
        let mut explicit = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(explicit, "rules:\n  description_max_len: 80").expect("write");

        std::env::set_var(CONFIG_ENV_VAR, from_env.path());
        let fallback = KanbanConfig::load(None);
        let overridden = KanbanConfig::load(Some(explicit.path()));
        std::env::remove_var(CONFIG_ENV_VAR);

        let fallback = fallback.unwrap();
        assert_eq!(fallback.ledger.hours_policy, HoursPolicy::Live);

        let overridden = overridden.unwrap();
        assert_eq!(overridden.rules.description_max_len, 80);
        assert_eq!(overridden.ledger.hours_policy, HoursPolicy::Cumulative);

        assert_eq!(KanbanConfig::load(None).unwrap(), KanbanConfig::default());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = KanbanConfig::from_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileReadError(_)), "got: {err}");

        let wrapped: KanbanError = err.into();
        assert!(wrapped.to_string().starts_with("Configuration error"));
    }
}
