use crate::db::sessions::Session;
use crate::libs::formatter::format_minutes;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn sessions(sessions: &[Session]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "AGENT", "ORG", "LOGIN", "LOGOUT", "DURATION"]);
        for session in sessions {
            table.add_row(row![
                session.id,
                session.agent_id,
                session.org_id,
                session.login.format("%H:%M"),
                session.logout.map_or_else(|| "-".to_string(), |l| l.format("%H:%M").to_string()),
                session.duration.map_or_else(|| "--:--".to_string(), format_minutes)
            ]);
        }
        table.printstd();

        Ok(())
    }
}
