#[cfg(test)]
mod tests {
    use crate::config::ValidationRules;
    use crate::errors::{ KanbanError, RecoverableError };
    use crate::implementations::in_memory_registry::InMemoryAccountRegistry;
    use crate::tests::setup;
    use crate::traits::account_registry::AccountRegistry;

    fn registry() -> InMemoryAccountRegistry {
        setup();
        InMemoryAccountRegistry::new(ValidationRules::default())
    }

    #[test]
    fn register_stores_and_returns_account() {
        let mut registry = registry();
        let account = registry.register("Kyle", "Smith", "kyl_1", "Ch&&sec@ke99!").unwrap();

        assert_eq!(account.username, "kyl_1");
        assert_eq!(account.full_name(), "Kyle Smith");
        assert!(registry.contains("kyl_1"));
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn duplicate_username_fails_second_time() {
        let mut registry = registry();
        registry.register("Kyle", "Smith", "kyl_1", "Abcd123!").unwrap();

        let err = registry.register("Other", "Person", "kyl_1", "Zyxw987$").unwrap_err();
        assert!(matches!(err, KanbanError::DuplicateUsername(ref u) if u == "kyl_1"), "got: {err}");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("kyl_1").unwrap().first_name, "Kyle");
    }

    #[test]
    fn checks_run_in_order_and_stop_at_first_failure() {
        let mut registry = registry();
        registry.register("Kyle", "Smith", "kyl_1", "Abcd123!").unwrap();

        // Bad username and bad password: username wins
        let err = registry.register("A", "B", "toolong", "weak").unwrap_err();
        assert!(matches!(err, KanbanError::InvalidUsernameFormat { .. }), "got: {err}");

        // Taken username and bad password: uniqueness wins
        let err = registry.register("A", "B", "kyl_1", "weak").unwrap_err();
        assert!(matches!(err, KanbanError::DuplicateUsername(_)), "got: {err}");

        let err = registry.register("A", "B", "a_b", "weak").unwrap_err();
        assert!(matches!(err, KanbanError::InvalidPasswordFormat { min_len: 8 }), "got: {err}");
        assert!(!registry.contains("a_b"));
    }

    #[test]
    fn failure_messages_are_distinct_and_readable() {
        let mut registry = registry();
        let username = registry.register("A", "B", "kyle!!!!!!!", "Abcd123!").unwrap_err().to_string();
        let password = registry.register("A", "B", "a_b", "password").unwrap_err().to_string();

        assert!(username.contains("underscore"), "got: {username}");
        assert!(username.contains("5 characters"), "got: {username}");
        assert!(password.contains("at least 8 characters"), "got: {password}");
        assert_ne!(username, password);
    }

    #[test]
    fn username_message_names_the_configured_separator() {
        setup();
        let rules = ValidationRules { username_separator: '.', ..ValidationRules::default() };
        let mut registry = InMemoryAccountRegistry::new(rules);

        let message = registry.register("A", "B", "abc", "Abcd123!").unwrap_err().to_string();
        assert!(message.contains("contains a '.'"), "got: {message}");
        assert!(!message.contains("underscore"), "got: {message}");

        assert!(registry.register("A", "B", "a.b", "Abcd123!").is_ok());
    }

    #[test]
    fn authenticate_unknown_user() {
        let registry = registry();
        let err = registry.authenticate("nob_y", "Abcd123!").unwrap_err();
        assert!(matches!(err, KanbanError::UnknownUser(ref u) if u == "nob_y"), "got: {err}");
        assert!(err.is_recoverable());
    }

    #[test]
    fn authenticate_wrong_password() {
        let mut registry = registry();
        registry.register("Kyle", "Smith", "kyl_1", "Abcd123!").unwrap();

        let err = registry.authenticate("kyl_1", "abcd123!").unwrap_err();
        assert!(matches!(err, KanbanError::InvalidCredential), "got: {err}");
    }

    #[test]
    fn every_registered_pair_authenticates() {
        let mut registry = registry();
        let pairs = [("a_1", "Abcd123!"), ("b_2", "Zz9$Zz9$"), ("c_3", "Qwerty7&x")];
        for (username, password) in pairs {
            registry.register("First", "Last", username, password).unwrap();
        }

        for (username, password) in pairs {
            let account = registry.authenticate(username, password).unwrap();
            assert_eq!(account.username, username);
        }
    }

    #[test]
    fn debug_output_hides_password() {
        let mut registry = registry();
        let account = registry.register("Kyle", "Smith", "kyl_1", "Abcd123!").unwrap();
        let debug = format!("{:?}", account);
        assert!(!debug.contains("Abcd123!"));
        assert!(debug.contains("<redacted>"));
    }
}
