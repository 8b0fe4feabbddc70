//! SQLite persistence for reports, template metadata and the export
//! configuration.
//!
//! `ReportStore` is the single owner of the database file. It keeps the
//! path rather than a live connection; every operation opens its own
//! short-lived connection, which keeps the handle trivially shareable
//! across actix worker threads.

use std::fs;
use std::path::{Path, PathBuf};

use common::model::export::ExportConfig;
use common::model::report::Report;
use common::model::template::TemplateMeta;
use common::requests::{NewReport, ReportPatch};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Error;

/// Filename pattern seeded into a fresh database.
pub const DEFAULT_FILENAME_PATTERN: &str = "{DATE}_{NAME}_weekly_report.docx";

const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS reports (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT NOT NULL,
    date       TEXT NOT NULL,
    summary    TEXT NOT NULL DEFAULT '',
    plan       TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE TABLE IF NOT EXISTS templates (
    id          TEXT PRIMARY KEY,
    filename    TEXT NOT NULL,
    content_md5 TEXT NOT NULL,
    uploaded_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE TABLE IF NOT EXISTS export_config (
    id               INTEGER PRIMARY KEY CHECK (id = 1),
    filename_pattern TEXT NOT NULL
);
";

/// Handle to the report database.
#[derive(Debug, Clone)]
pub struct ReportStore {
    db_path: PathBuf,
}

impl ReportStore {
    /// Open or create the database at the given path and initialize the
    /// schema. Parent directories are created if missing, and the
    /// export-config singleton is seeded with the default pattern.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let db_path = path.as_ref().to_path_buf();
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let store = Self { db_path };
        let conn = store.conn()?;
        conn.execute_batch(SCHEMA)?;
        conn.execute(
            "INSERT OR IGNORE INTO export_config (id, filename_pattern) VALUES (1, ?1)",
            params![DEFAULT_FILENAME_PATTERN],
        )?;
        debug!("database ready at {}", store.db_path.display());
        Ok(store)
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn conn(&self) -> Result<Connection, Error> {
        Ok(Connection::open(&self.db_path)?)
    }

    /// Insert a new report and return the stored row.
    pub fn create_report(&self, new: &NewReport) -> Result<Report, Error> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO reports (name, date, summary, plan) VALUES (?1, ?2, ?3, ?4)",
            params![new.name, new.date, new.summary, new.plan],
        )?;
        let id = conn.last_insert_rowid();
        debug!("created report {id}");
        Self::query_report(&conn, id)
    }

    /// Fetch a single report by id.
    pub fn get_report(&self, id: i64) -> Result<Report, Error> {
        let conn = self.conn()?;
        Self::query_report(&conn, id)
    }

    /// All reports, newest date first, ties broken by newest id.
    pub fn list_reports(&self) -> Result<Vec<Report>, Error> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, date, summary, plan, created_at, updated_at
             FROM reports ORDER BY date DESC, id DESC",
        )?;
        let reports = stmt
            .query_map([], Self::row_to_report)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(reports)
    }

    /// Overwrite only the fields supplied in `patch` and refresh
    /// `updated_at`.
    pub fn update_report(&self, id: i64, patch: &ReportPatch) -> Result<Report, Error> {
        let conn = self.conn()?;
        let current = Self::query_report(&conn, id)?;
        let name = patch.name.clone().unwrap_or(current.name);
        let date = patch.date.clone().unwrap_or(current.date);
        let summary = patch.summary.clone().unwrap_or(current.summary);
        let plan = patch.plan.clone().unwrap_or(current.plan);
        conn.execute(
            "UPDATE reports
             SET name = ?1, date = ?2, summary = ?3, plan = ?4, updated_at = datetime('now')
             WHERE id = ?5",
            params![name, date, summary, plan, id],
        )?;
        Self::query_report(&conn, id)
    }

    /// Remove a report permanently.
    pub fn delete_report(&self, id: i64) -> Result<(), Error> {
        let conn = self.conn()?;
        let affected = conn.execute("DELETE FROM reports WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(Error::NotFound("report"));
        }
        Ok(())
    }

    /// Name on the most recently created report, used to prefill the
    /// new-report form.
    pub fn last_report_name(&self) -> Result<Option<String>, Error> {
        let conn = self.conn()?;
        let name = conn
            .query_row(
                "SELECT name FROM reports ORDER BY id DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?;
        Ok(name)
    }

    /// Insert template metadata, replacing any existing row with the
    /// same id.
    pub fn insert_template(&self, meta: &TemplateMeta) -> Result<TemplateMeta, Error> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT OR REPLACE INTO templates (id, filename, content_md5, uploaded_at)
             VALUES (?1, ?2, ?3, datetime('now'))",
            params![meta.id, meta.filename, meta.content_md5],
        )?;
        Self::query_template(&conn, &meta.id)
    }

    pub fn get_template(&self, id: &str) -> Result<TemplateMeta, Error> {
        let conn = self.conn()?;
        Self::query_template(&conn, id)
    }

    pub fn list_templates(&self) -> Result<Vec<TemplateMeta>, Error> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, filename, content_md5, uploaded_at
             FROM templates ORDER BY uploaded_at DESC, id",
        )?;
        let templates = stmt
            .query_map([], Self::row_to_template)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(templates)
    }

    /// Remove a template row, returning its metadata so the caller can
    /// delete the stored file as well.
    pub fn delete_template(&self, id: &str) -> Result<TemplateMeta, Error> {
        let conn = self.conn()?;
        let meta = Self::query_template(&conn, id)?;
        conn.execute("DELETE FROM templates WHERE id = ?1", params![id])?;
        Ok(meta)
    }

    pub fn export_config(&self) -> Result<ExportConfig, Error> {
        let conn = self.conn()?;
        Self::query_config(&conn)
    }

    pub fn set_filename_pattern(&self, pattern: &str) -> Result<ExportConfig, Error> {
        let conn = self.conn()?;
        conn.execute(
            "UPDATE export_config SET filename_pattern = ?1 WHERE id = 1",
            params![pattern],
        )?;
        Self::query_config(&conn)
    }

    fn query_report(conn: &Connection, id: i64) -> Result<Report, Error> {
        conn.query_row(
            "SELECT id, name, date, summary, plan, created_at, updated_at
             FROM reports WHERE id = ?1",
            params![id],
            Self::row_to_report,
        )
        .optional()?
        .ok_or(Error::NotFound("report"))
    }

    fn query_template(conn: &Connection, id: &str) -> Result<TemplateMeta, Error> {
        conn.query_row(
            "SELECT id, filename, content_md5, uploaded_at FROM templates WHERE id = ?1",
            params![id],
            Self::row_to_template,
        )
        .optional()?
        .ok_or(Error::NotFound("template"))
    }

    fn query_config(conn: &Connection) -> Result<ExportConfig, Error> {
        let filename_pattern = conn.query_row(
            "SELECT filename_pattern FROM export_config WHERE id = 1",
            [],
            |row| row.get(0),
        )?;
        Ok(ExportConfig { filename_pattern })
    }

    fn row_to_report(row: &rusqlite::Row) -> rusqlite::Result<Report> {
        Ok(Report {
            id: row.get(0)?,
            name: row.get(1)?,
            date: row.get(2)?,
            summary: row.get(3)?,
            plan: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }

    fn row_to_template(row: &rusqlite::Row) -> rusqlite::Result<TemplateMeta> {
        Ok(TemplateMeta {
            id: row.get(0)?,
            filename: row.get(1)?,
            content_md5: row.get(2)?,
            uploaded_at: row.get(3)?,
        })
    }
}
