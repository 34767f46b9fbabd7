//! Database operations for agent working sessions.
//!
//! A session is one login-to-logout working period for one agent within one
//! organization and one local calendar day. The table holds the immutable
//! login timestamp, the nullable logout timestamp and the derived duration
//! in minutes, which is present exactly when the logout is.

use crate::db::db::Db;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SCHEMA_SESSIONS: &str = "CREATE TABLE IF NOT EXISTS sessions (
    id INTEGER NOT NULL PRIMARY KEY,
    agent_id TEXT NOT NULL,
    org_id TEXT NOT NULL,
    login TIMESTAMP NOT NULL,
    logout TIMESTAMP,
    duration INTEGER
)";

/// Conditional insert: creates a row only when no open session exists for the
/// same agent, organization and local calendar day. A single statement, so two
/// near-simultaneous starts against the same store cannot both insert.
const INSERT_OPEN_SESSION: &str = "INSERT INTO sessions (agent_id, org_id, login)
    SELECT ?1, ?2, ?3
    WHERE NOT EXISTS (
        SELECT 1 FROM sessions
        WHERE agent_id = ?1 AND org_id = ?2 AND logout IS NULL AND date(login) = date(?3)
    )";

const SELECT_OPEN_SESSION: &str = "SELECT id, agent_id, org_id, login, logout, duration FROM sessions
    WHERE agent_id = ?1 AND org_id = ?2 AND logout IS NULL AND date(login) = date(?3)
    ORDER BY id LIMIT 1";

const SELECT_BY_ID: &str = "SELECT id, agent_id, org_id, login, logout, duration FROM sessions WHERE id = ?1";

const SELECT_BY_DATE: &str = "SELECT id, agent_id, org_id, login, logout, duration FROM sessions
    WHERE date(login) = date(?1) ORDER BY login";

/// The logout guard keeps a session closable exactly once.
const UPDATE_LOGOUT: &str = "UPDATE sessions SET logout = ?2 WHERE id = ?1 AND logout IS NULL";

const UPDATE_DURATION: &str = "UPDATE sessions SET duration = ?2 WHERE id = ?1";

#[derive(Debug, Clone)]
pub struct Session {
    pub id: i64,
    pub agent_id: String,
    pub org_id: String,
    pub login: NaiveDateTime,
    pub logout: Option<NaiveDateTime>,
    /// Minutes between login and logout, rounded; set at logout.
    pub duration: Option<i64>,
}

/// Database manager for session records.
///
/// The connection is shared behind a mutex so the monitor loop and CLI
/// commands can operate on the same store without racing.
pub struct Sessions {
    pub conn: Arc<Mutex<Connection>>,
}

impl Sessions {
    pub fn new() -> Result<Sessions> {
        let db_conn = Db::new()?.conn;
        db_conn.execute(SCHEMA_SESSIONS, [])?;
        Ok(Sessions {
            conn: Arc::new(Mutex::new(db_conn)),
        })
    }

    /// Opens or resumes the agent's session for the calendar day of `login`.
    ///
    /// Returns the id of the open session together with a flag telling
    /// whether a new row was created. Re-invoking within the same day adopts
    /// the existing open row instead of fragmenting the day into several
    /// session records.
    pub fn start(&self, agent_id: &str, org_id: &str, login: NaiveDateTime) -> Result<(i64, bool)> {
        let login_str = login.format(TIMESTAMP_FORMAT).to_string();
        let conn_guard = self.conn.lock();
        let created = conn_guard.execute(INSERT_OPEN_SESSION, params![agent_id, org_id, login_str])? > 0;
        let session = conn_guard.query_row(SELECT_OPEN_SESSION, params![agent_id, org_id, login_str], map_session)?;
        Ok((session.id, created))
    }

    /// The open (logout IS NULL) session for the agent, organization and day.
    pub fn fetch_open(&self, agent_id: &str, org_id: &str, date: NaiveDate) -> Result<Option<Session>> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let conn_guard = self.conn.lock();
        let session = conn_guard
            .query_row(SELECT_OPEN_SESSION, params![agent_id, org_id, date_str], map_session)
            .optional()?;
        Ok(session)
    }

    pub fn fetch(&self, id: i64) -> Result<Option<Session>> {
        let conn_guard = self.conn.lock();
        let session = conn_guard.query_row(SELECT_BY_ID, params![id], map_session).optional()?;
        Ok(session)
    }

    pub fn fetch_date(&self, date: NaiveDate) -> Result<Vec<Session>> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let conn_guard = self.conn.lock();
        let mut stmt = conn_guard.prepare(SELECT_BY_DATE)?;
        let session_iter = stmt.query_map(params![date_str], map_session)?;
        let mut sessions = Vec::new();
        for session in session_iter {
            sessions.push(session?);
        }
        Ok(sessions)
    }

    /// Writes the logout timestamp. Returns the number of rows updated:
    /// zero means the session was already closed elsewhere.
    pub fn set_logout(&self, id: i64, logout: NaiveDateTime) -> Result<usize> {
        let logout_str = logout.format(TIMESTAMP_FORMAT).to_string();
        let conn_guard = self.conn.lock();
        Ok(conn_guard.execute(UPDATE_LOGOUT, params![id, logout_str])?)
    }

    pub fn set_duration(&self, id: i64, minutes: i64) -> Result<()> {
        let conn_guard = self.conn.lock();
        conn_guard.execute(UPDATE_DURATION, params![id, minutes])?;
        Ok(())
    }
}

fn map_session(row: &Row) -> rusqlite::Result<Session> {
    Ok(Session {
        id: row.get(0)?,
        agent_id: row.get(1)?,
        org_id: row.get(2)?,
        login: NaiveDateTime::parse_from_str(&row.get::<_, String>(3)?, TIMESTAMP_FORMAT).unwrap(),
        logout: row
            .get::<_, Option<String>>(4)?
            .map(|s| NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).unwrap()),
        duration: row.get(5)?,
    })
}
