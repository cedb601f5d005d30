#[cfg(test)]
mod tests {
    use crate::config::KanbanConfig;
    use crate::errors::KanbanError;
    use crate::models::task::TaskStatus;
    use crate::session::Session;
    use crate::tests::setup;
    use crate::traits::task_ledger::TaskLedger;

    fn session() -> Session {
        setup();
        Session::new(KanbanConfig::default())
    }

    #[test]
    fn ledger_is_gated_by_login() {
        let mut session = session();
        assert!(matches!(session.ledger(), Err(KanbanError::NotAuthenticated)));
        assert!(matches!(session.ledger_mut(), Err(KanbanError::NotAuthenticated)));

        session.register("Kyle", "Smith", "kyl_1", "Abcd123!").unwrap();
        session.login("kyl_1", "Abcd123!").unwrap();

        assert!(session.is_authenticated());
        assert!(session.ledger().is_ok());
    }

    #[test]
    fn failed_login_leaves_session_unauthenticated() {
        let mut session = session();
        session.register("Kyle", "Smith", "kyl_1", "Abcd123!").unwrap();

        assert!(matches!(session.login("kyl_1", "wrong"), Err(KanbanError::InvalidCredential)));
        assert!(matches!(session.login("nob_y", "Abcd123!"), Err(KanbanError::UnknownUser(_))));
        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn login_records_current_user_and_logout_clears_it() {
        let mut session = session();
        session.register("Kyle", "Smith", "kyl_1", "Abcd123!").unwrap();

        let name = session.login("kyl_1", "Abcd123!").unwrap().full_name();
        assert_eq!(name, "Kyle Smith");
        assert_eq!(session.current_user().unwrap().username, "kyl_1");

        session.logout();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn sessions_do_not_share_state() {
        let mut first = session();
        let mut second = session();

        first.register("Kyle", "Smith", "kyl_1", "Abcd123!").unwrap();
        first.login("kyl_1", "Abcd123!").unwrap();
        first
            .ledger_mut()
            .unwrap()
            .add_task("Login", "desc", "Mike", "Smith", 4.0, TaskStatus::Doing)
            .unwrap();

        second.register("Kyle", "Smith", "kyl_1", "Abcd123!").unwrap();
        second.login("kyl_1", "Abcd123!").unwrap();
        assert_eq!(second.ledger().unwrap().task_count(), 0);
        assert_eq!(second.ledger().unwrap().total_hours(), 0.0);
        assert_eq!(first.ledger().unwrap().task_count(), 1);
    }
}
