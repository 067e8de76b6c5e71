//! Persistence for resource records (SQLite) and their documents (files on disk).
//!
//! `ResourceStore` owns a single `rusqlite::Connection` behind a mutex; actix workers
//! take turns. Records keep their insertion order through an autoincrement `seq`
//! column, which is what the listing is sorted by.

mod documents;

pub use documents::DocumentStore;

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use common::model::resource::Resource;
use common::workflow::ResourceForm;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::ServiceError;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS resources (
        seq          INTEGER PRIMARY KEY AUTOINCREMENT,
        id           TEXT NOT NULL UNIQUE,
        subject_name TEXT NOT NULL,
        unit_name    TEXT NOT NULL,
        topic        TEXT NOT NULL,
        extra_info   TEXT,
        pdf_path     TEXT
    )";

const COLUMNS: &str = "id, subject_name, unit_name, topic, extra_info, pdf_path";

pub struct ResourceStore {
    conn: Mutex<Connection>,
}

impl ResourceStore {
    pub fn open(path: &Path) -> Result<Self, ServiceError> {
        Self::init(Connection::open(path)?)
    }

    pub fn in_memory() -> Result<Self, ServiceError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, ServiceError> {
        conn.execute(SCHEMA, [])?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, ServiceError> {
        self.conn
            .lock()
            .map_err(|e| ServiceError::Internal(format!("store lock poisoned: {}", e)))
    }

    /// Every resource, oldest first.
    pub fn list(&self) -> Result<Vec<Resource>, ServiceError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("SELECT {} FROM resources ORDER BY seq", COLUMNS))?;
        let resources = stmt
            .query_map([], row_to_resource)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(resources)
    }

    /// Stores a new record under a fresh UUID and returns it.
    pub fn insert(
        &self,
        form: &ResourceForm,
        pdf_path: Option<String>,
    ) -> Result<Resource, ServiceError> {
        let resource = Resource {
            id: uuid::Uuid::new_v4().to_string(),
            subject_name: form.subject_name.clone(),
            unit_name: form.unit_name.clone(),
            topic: form.topic.clone(),
            extra_info: non_empty(&form.extra_info),
            document_path: pdf_path,
        };

        self.conn()?.execute(
            "INSERT INTO resources (id, subject_name, unit_name, topic, extra_info, pdf_path)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                &resource.id,
                &resource.subject_name,
                &resource.unit_name,
                &resource.topic,
                &resource.extra_info,
                &resource.document_path
            ],
        )?;
        Ok(resource)
    }

    /// Replaces every editable field. `pdf_path: None` keeps the stored document.
    /// Returns `None` when no record has that id.
    ///
    /// Read, write and re-read happen under one lock, so the returned
    /// `replaced_document` is exactly the file this call detached.
    pub fn update(
        &self,
        id: &str,
        form: &ResourceForm,
        pdf_path: Option<String>,
    ) -> Result<Option<UpdatedResource>, ServiceError> {
        let conn = self.conn()?;
        let Some(previous) = select_one(&conn, id)? else {
            return Ok(None);
        };

        conn.execute(
            "UPDATE resources
             SET subject_name = ?2, unit_name = ?3, topic = ?4, extra_info = ?5,
                 pdf_path = COALESCE(?6, pdf_path)
             WHERE id = ?1",
            params![
                id,
                &form.subject_name,
                &form.unit_name,
                &form.topic,
                non_empty(&form.extra_info),
                &pdf_path
            ],
        )?;

        let resource = select_one(&conn, id)?
            .ok_or_else(|| ServiceError::Internal(format!("resource {} vanished during update", id)))?;
        let replaced_document = pdf_path
            .and(previous.document_path)
            .filter(|old| resource.document_path.as_deref() != Some(old.as_str()));

        Ok(Some(UpdatedResource {
            resource,
            replaced_document,
        }))
    }

    /// Removes the record and returns it, so the caller can clean up its document.
    /// Of two concurrent deletes of one id, only one gets the record back.
    pub fn delete(&self, id: &str) -> Result<Option<Resource>, ServiceError> {
        let resource = self
            .conn()?
            .query_row(
                &format!("DELETE FROM resources WHERE id = ?1 RETURNING {}", COLUMNS),
                params![id],
                row_to_resource,
            )
            .optional()?;
        Ok(resource)
    }
}

/// Outcome of [`ResourceStore::update`].
#[derive(Debug, PartialEq)]
pub struct UpdatedResource {
    pub resource: Resource,
    /// Public path of the document the update detached, if any.
    pub replaced_document: Option<String>,
}

fn select_one(conn: &Connection, id: &str) -> Result<Option<Resource>, ServiceError> {
    let resource = conn
        .query_row(
            &format!("SELECT {} FROM resources WHERE id = ?1", COLUMNS),
            params![id],
            row_to_resource,
        )
        .optional()?;
    Ok(resource)
}

fn row_to_resource(row: &Row<'_>) -> rusqlite::Result<Resource> {
    Ok(Resource {
        id: row.get(0)?,
        subject_name: row.get(1)?,
        unit_name: row.get(2)?,
        topic: row.get(3)?,
        extra_info: row.get(4)?,
        document_path: row.get(5)?,
    })
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
