//! Form repository: owner-scoped lifecycle of form definitions.

use forms_core::entities::{DEFAULT_FORM_TITLE, FieldDef, Form, FormSummary, default_field_set};
use forms_core::errors::CoreError;
use forms_core::version::new_version_token;

use crate::error::DatabaseError;
use crate::helpers::{get_json, to_json};
use crate::service::FormService;

fn row_to_form(row: &libsql::Row) -> Result<Form, DatabaseError> {
    Ok(Form {
        id: row.get::<i64>(0)?,
        user_id: row.get::<i64>(1)?,
        title: row.get::<String>(2)?,
        fields: get_json(row, 3)?,
        version: row.get::<String>(4)?,
    })
}

impl FormService {
    /// Create a form for `user_id` with the default title and field set.
    pub async fn create_form(&self, user_id: i64) -> Result<Form, DatabaseError> {
        let fields = default_field_set();
        let version = new_version_token();

        self.db()
            .conn()
            .execute(
                "INSERT INTO forms (user_id, title, fields, version) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![user_id, DEFAULT_FORM_TITLE, to_json(&fields)?, version.as_str()],
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();
        tracing::debug!(form_id = id, user_id, "form created");

        Ok(Form {
            id,
            user_id,
            title: DEFAULT_FORM_TITLE.to_string(),
            fields,
            version,
        })
    }

    /// The owner's forms in creation order.
    pub async fn list_forms(
        &self,
        user_id: i64,
        limit: u32,
    ) -> Result<Vec<FormSummary>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, title, version FROM forms WHERE user_id = ?1 ORDER BY id LIMIT ?2",
                libsql::params![user_id, i64::from(limit)],
            )
            .await?;

        let mut forms = Vec::new();
        while let Some(row) = rows.next().await? {
            forms.push(FormSummary {
                id: row.get::<i64>(0)?,
                title: row.get::<String>(1)?,
                version: row.get::<String>(2)?,
            });
        }
        Ok(forms)
    }

    /// Load a form for its owner.
    ///
    /// A form owned by someone else is reported as not found.
    pub async fn load_form(&self, id: i64, user_id: i64) -> Result<Form, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, user_id, title, fields, version FROM forms WHERE id = ?1 AND user_id = ?2",
                libsql::params![id, user_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::form_not_found(id))?;
        row_to_form(&row)
    }

    /// Load a form for a respondent. No owner check.
    pub async fn use_form(&self, id: i64) -> Result<Form, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, user_id, title, fields, version FROM forms WHERE id = ?1",
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::form_not_found(id))?;
        row_to_form(&row)
    }

    pub async fn form_exists(&self, id: i64, user_id: i64) -> Result<bool, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT 1 FROM forms WHERE id = ?1 AND user_id = ?2",
                libsql::params![id, user_id],
            )
            .await?;
        Ok(rows.next().await?.is_some())
    }

    /// Persist a committed edit and return the new version token.
    ///
    /// Last writer wins: there is no check against the version the editor
    /// started from.
    pub async fn save_form(
        &self,
        id: i64,
        user_id: i64,
        title: &str,
        fields: &[FieldDef],
    ) -> Result<String, DatabaseError> {
        let version = new_version_token();
        let updated = self
            .db()
            .conn()
            .execute(
                "UPDATE forms SET title = ?1, fields = ?2, version = ?3 WHERE id = ?4 AND user_id = ?5",
                libsql::params![title, to_json(fields)?, version.as_str(), id, user_id],
            )
            .await?;
        if updated == 0 {
            return Err(CoreError::form_not_found(id).into());
        }
        tracing::debug!(form_id = id, %version, "form saved");
        Ok(version)
    }

    /// Delete a form together with its versions and responses.
    pub async fn delete_form(&self, id: i64, user_id: i64) -> Result<(), DatabaseError> {
        let deleted = self
            .db()
            .conn()
            .execute(
                "DELETE FROM forms WHERE id = ?1 AND user_id = ?2",
                libsql::params![id, user_id],
            )
            .await?;
        if deleted == 0 {
            return Err(CoreError::form_not_found(id).into());
        }
        tracing::debug!(form_id = id, "form deleted");
        Ok(())
    }
}
