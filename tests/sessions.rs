#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate};
    use fieldlog::db::sessions::Sessions;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SessionTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            SessionTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_start_creates_open_session(_ctx: &mut SessionTestContext) {
        let sessions = Sessions::new().unwrap();
        let login = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap().and_hms_opt(9, 0, 0).unwrap();

        let (id, created) = sessions.start("agent-1", "org-1", login).unwrap();
        assert!(created);

        let session = sessions.fetch(id).unwrap().unwrap();
        assert_eq!(session.agent_id, "agent-1");
        assert_eq!(session.org_id, "org-1");
        assert_eq!(session.login, login);
        assert!(session.logout.is_none());
        assert!(session.duration.is_none());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_start_resumes_same_day(_ctx: &mut SessionTestContext) {
        let sessions = Sessions::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let login = date.and_hms_opt(9, 0, 0).unwrap();
        let reload = date.and_hms_opt(9, 5, 0).unwrap();

        let (first_id, created) = sessions.start("agent-1", "org-1", login).unwrap();
        assert!(created);

        // A reload five minutes later adopts the open row instead of
        // fragmenting the day into two sessions.
        let (second_id, created) = sessions.start("agent-1", "org-1", reload).unwrap();
        assert!(!created);
        assert_eq!(first_id, second_id);

        let rows = sessions.fetch_date(date).unwrap();
        assert_eq!(rows.len(), 1);
        // The stored login is the original one, not the reload time.
        assert_eq!(rows[0].login, login);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_start_after_logout_creates_new_row(_ctx: &mut SessionTestContext) {
        let sessions = Sessions::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

        let (first_id, _) = sessions.start("agent-1", "org-1", date.and_hms_opt(9, 0, 0).unwrap()).unwrap();
        sessions.set_logout(first_id, date.and_hms_opt(12, 0, 0).unwrap()).unwrap();

        // Only the open state blocks re-creation; after a logout the same
        // day gets a fresh session row.
        let (second_id, created) = sessions.start("agent-1", "org-1", date.and_hms_opt(13, 0, 0).unwrap()).unwrap();
        assert!(created);
        assert_ne!(first_id, second_id);
        assert_eq!(sessions.fetch_date(date).unwrap().len(), 2);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_open_sessions_are_scoped_per_agent_and_org(_ctx: &mut SessionTestContext) {
        let sessions = Sessions::new().unwrap();
        let login = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap().and_hms_opt(9, 0, 0).unwrap();

        let (a, _) = sessions.start("agent-1", "org-1", login).unwrap();
        let (b, _) = sessions.start("agent-2", "org-1", login).unwrap();
        let (c, _) = sessions.start("agent-1", "org-2", login).unwrap();

        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_set_logout_closes_exactly_once(_ctx: &mut SessionTestContext) {
        let sessions = Sessions::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let (id, _) = sessions.start("agent-1", "org-1", date.and_hms_opt(9, 0, 0).unwrap()).unwrap();

        assert_eq!(sessions.set_logout(id, date.and_hms_opt(9, 21, 0).unwrap()).unwrap(), 1);
        // A second close touches nothing.
        assert_eq!(sessions.set_logout(id, date.and_hms_opt(11, 0, 0).unwrap()).unwrap(), 0);

        let session = sessions.fetch(id).unwrap().unwrap();
        assert_eq!(session.logout, date.and_hms_opt(9, 21, 0));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_fetch_open_by_day(_ctx: &mut SessionTestContext) {
        let sessions = Sessions::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let (id, _) = sessions.start("agent-1", "org-1", date.and_hms_opt(9, 0, 0).unwrap()).unwrap();

        let open = sessions.fetch_open("agent-1", "org-1", date).unwrap().unwrap();
        assert_eq!(open.id, id);
        assert!(sessions.fetch_open("agent-1", "org-1", date.succ_opt().unwrap()).unwrap().is_none());

        sessions.set_logout(id, date.and_hms_opt(10, 0, 0).unwrap()).unwrap();
        assert!(sessions.fetch_open("agent-1", "org-1", date).unwrap().is_none());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_fetch_nonexistent_session(_ctx: &mut SessionTestContext) {
        let sessions = Sessions::new().unwrap();
        assert!(sessions.fetch(42).unwrap().is_none());
        assert!(sessions.fetch_date(Local::now().date_naive()).unwrap().is_empty());
    }
}
