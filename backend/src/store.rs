//! SQLite persistence for inspections and templates.
//!
//! Records are stored as JSON documents next to the few scalar columns the
//! queries filter on. A connection is opened per operation, so a `Store` is
//! only a path and can be cloned into every worker.

use chrono::Utc;
use common::model::inspection::{EquipmentType, Inspection, InspectionSummary, NewInspection};
use common::model::template::InspectionTemplate;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use thiserror::Error;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS inspections (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    reference TEXT NOT NULL,
    equipment_type TEXT NOT NULL,
    template_id TEXT,
    qr_md5 TEXT,
    data TEXT NOT NULL,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_inspections_equipment_type ON inspections (equipment_type);
CREATE TABLE IF NOT EXISTS templates (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    data TEXT NOT NULL
);
";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("invalid data: {0}")]
    Invalid(String),
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Opens (creating if needed) the database at `path` and applies the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = Store {
            path: path.as_ref().to_path_buf(),
        };
        store.connect()?.execute_batch(SCHEMA)?;
        Ok(store)
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.path)?)
    }

    pub fn create_inspection(&self, payload: NewInspection) -> Result<Inspection, StoreError> {
        payload.validate().map_err(StoreError::Invalid)?;

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let created_at = Utc::now();
        tx.execute(
            "INSERT INTO inspections (reference, equipment_type, template_id, data, created_at)
             VALUES (?1, ?2, ?3, '{}', ?4)",
            params![
                payload.reference.trim(),
                payload.equipment_type.as_str(),
                payload.template_id,
                created_at.to_rfc3339()
            ],
        )?;
        let id = tx.last_insert_rowid();
        let inspection = payload.into_inspection(id, created_at);
        tx.execute(
            "UPDATE inspections SET data = ?1 WHERE id = ?2",
            params![serde_json::to_string(&inspection)?, id],
        )?;
        tx.commit()?;

        debug!("Stored inspection {} ({})", id, inspection.reference);
        Ok(inspection)
    }

    pub fn get_inspection(&self, id: i64) -> Result<Inspection, StoreError> {
        let conn = self.connect()?;
        let data: Option<String> = conn
            .query_row(
                "SELECT data FROM inspections WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?;
        let data = data.ok_or_else(|| StoreError::NotFound(format!("inspection {}", id)))?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Newest first, optionally restricted to one equipment family.
    pub fn list_inspections(
        &self,
        equipment_type: Option<EquipmentType>,
    ) -> Result<Vec<InspectionSummary>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT data FROM inspections
             WHERE ?1 IS NULL OR equipment_type = ?1
             ORDER BY id DESC",
        )?;
        let rows = stmt.query_map(params![equipment_type.map(|t| t.as_str())], |row| {
            row.get::<_, String>(0)
        })?;

        let mut summaries = Vec::new();
        for data in rows {
            let inspection: Inspection = serde_json::from_str(&data?)?;
            summaries.push(inspection.summary());
        }
        Ok(summaries)
    }

    /// Replaces the stored QR image. Returns `false` when the new image is
    /// identical to the stored one and nothing was written.
    pub fn update_qr_code(&self, id: i64, qr_code: &str) -> Result<bool, StoreError> {
        let computed_md5 = format!("{:x}", md5::compute(qr_code));

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let row: Option<(Option<String>, String)> = tx
            .query_row(
                "SELECT qr_md5, data FROM inspections WHERE id = ?1",
                params![id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        let (stored_md5, data) =
            row.ok_or_else(|| StoreError::NotFound(format!("inspection {}", id)))?;

        if stored_md5.as_deref() == Some(computed_md5.as_str()) {
            return Ok(false);
        }

        let mut inspection: Inspection = serde_json::from_str(&data)?;
        inspection.qr_code = Some(qr_code.to_string());
        tx.execute(
            "UPDATE inspections SET data = ?1, qr_md5 = ?2 WHERE id = ?3",
            params![serde_json::to_string(&inspection)?, computed_md5, id],
        )?;
        tx.commit()?;
        Ok(true)
    }

    /// Inserts or replaces a template.
    pub fn save_template(&self, template: &InspectionTemplate) -> Result<(), StoreError> {
        template
            .validate()
            .map_err(|e| StoreError::Invalid(e.to_string()))?;

        let conn = self.connect()?;
        conn.execute(
            "INSERT OR REPLACE INTO templates (id, name, data) VALUES (?1, ?2, ?3)",
            params![template.id, template.name, serde_json::to_string(template)?],
        )?;
        Ok(())
    }

    pub fn get_template(&self, template_id: &str) -> Result<InspectionTemplate, StoreError> {
        let conn = self.connect()?;
        let data: Option<String> = conn
            .query_row(
                "SELECT data FROM templates WHERE id = ?1",
                params![template_id],
                |row| row.get(0),
            )
            .optional()?;
        let data =
            data.ok_or_else(|| StoreError::NotFound(format!("template {}", template_id)))?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn list_templates(&self) -> Result<Vec<InspectionTemplate>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT data FROM templates ORDER BY name")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut templates = Vec::new();
        for data in rows {
            templates.push(serde_json::from_str(&data?)?);
        }
        Ok(templates)
    }
}
