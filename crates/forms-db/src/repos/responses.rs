//! Response repository: version headers, responses, recording and grouping.
//!
//! A version header freezes the title and column labels respondents saw for
//! one version token. Responses reference `(form_id, version)` so deleting
//! a header or its form removes the responses with it.

use std::collections::HashMap;

use chrono::Utc;
use forms_core::aggregate::group_responses;
use forms_core::entities::{FormVersion, Response, ResponseSet};
use forms_core::errors::CoreError;
use forms_core::responses::SubmitResponse;
use forms_core::submission::{capture_submission, check_version};

use crate::error::DatabaseError;
use crate::helpers::{get_json, parse_datetime, to_json};
use crate::service::FormService;

/// What [`FormService::record`] stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recorded {
    pub response_id: i64,
    /// Whether this submission created the version header.
    pub new_version: bool,
}

fn row_to_version(row: &libsql::Row) -> Result<FormVersion, DatabaseError> {
    Ok(FormVersion {
        form_id: row.get::<i64>(0)?,
        version: row.get::<String>(1)?,
        title: row.get::<String>(2)?,
        labels: get_json(row, 3)?,
    })
}

fn row_to_response(row: &libsql::Row) -> Result<Response, DatabaseError> {
    Ok(Response {
        id: row.get::<i64>(0)?,
        form_id: row.get::<i64>(1)?,
        version: row.get::<String>(2)?,
        values: get_json(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl FormService {
    /// Insert the version header unless one already exists.
    ///
    /// Returns `false` when the header was already there.
    pub async fn insert_version_if_absent(
        &self,
        form_id: i64,
        version: &str,
        title: &str,
        labels: &[String],
    ) -> Result<bool, DatabaseError> {
        let inserted = self
            .db()
            .conn()
            .execute(
                "INSERT INTO versions (form_id, version, title, labels) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT (form_id, version) DO NOTHING",
                libsql::params![form_id, version, title, to_json(labels)?],
            )
            .await?;
        Ok(inserted > 0)
    }

    pub async fn insert_response(
        &self,
        form_id: i64,
        version: &str,
        values: &[String],
    ) -> Result<i64, DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO responses (form_id, version, vals, created_at) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![form_id, version, to_json(values)?, Utc::now().to_rfc3339()],
            )
            .await?;
        Ok(self.db().conn().last_insert_rowid())
    }

    /// Version headers of a form, ordered by version token.
    pub async fn load_versions(&self, form_id: i64) -> Result<Vec<FormVersion>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT form_id, version, title, labels FROM versions
                 WHERE form_id = ?1 ORDER BY version",
                [form_id],
            )
            .await?;
        let mut versions = Vec::new();
        while let Some(row) = rows.next().await? {
            versions.push(row_to_version(&row)?);
        }
        Ok(versions)
    }

    /// Responses of a form, ordered by version token and then by submission.
    pub async fn load_responses(&self, form_id: i64) -> Result<Vec<Response>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, form_id, version, vals, created_at FROM responses
                 WHERE form_id = ?1 ORDER BY version, id",
                [form_id],
            )
            .await?;
        let mut responses = Vec::new();
        while let Some(row) = rows.next().await? {
            responses.push(row_to_response(&row)?);
        }
        Ok(responses)
    }

    /// Store one submission made against `submitted`.
    ///
    /// Rejects a stale token, or values that do not line up with the column
    /// labels, before writing anything. The header insert and the response
    /// insert are separate statements; a failure between them leaves a header
    /// with no responses.
    pub async fn record(
        &self,
        form_id: i64,
        submitted: &str,
        current: &str,
        title: &str,
        labels: &[String],
        values: &[String],
    ) -> Result<Recorded, DatabaseError> {
        check_version(form_id, submitted, current)?;
        if labels.len() != values.len() {
            return Err(CoreError::InvalidField(format!(
                "{} values for {} columns",
                values.len(),
                labels.len()
            ))
            .into());
        }

        let new_version = self
            .insert_version_if_absent(form_id, submitted, title, labels)
            .await?;
        let response_id = self.insert_response(form_id, submitted, values).await?;
        tracing::debug!(form_id, version = submitted, response_id, new_version, "response recorded");

        Ok(Recorded {
            response_id,
            new_version,
        })
    }

    /// Capture and record a respondent's posted values.
    ///
    /// `posted` maps field index (`"0"`, `"1"`, ...) to the raw posted value.
    pub async fn submit_response(
        &self,
        form_id: i64,
        posted_version: &str,
        posted: &HashMap<String, String>,
    ) -> Result<SubmitResponse, DatabaseError> {
        let form = self.use_form(form_id).await?;
        let captured = capture_submission(&form.fields, posted);
        let recorded = self
            .record(
                form_id,
                posted_version,
                &form.version,
                &form.title,
                &captured.labels,
                &captured.values,
            )
            .await?;

        Ok(SubmitResponse {
            form_id,
            version: posted_version.to_string(),
            response_id: recorded.response_id,
            new_version: recorded.new_version,
        })
    }

    /// Group a form's responses under their version headers.
    ///
    /// A form with no versions yields an empty list.
    pub async fn aggregate_responses(
        &self,
        form_id: i64,
    ) -> Result<Vec<ResponseSet>, DatabaseError> {
        let versions = self.load_versions(form_id).await?;
        let responses = self.load_responses(form_id).await?;
        let grouped = group_responses(versions, responses);
        if !grouped.unmatched.is_empty() {
            tracing::warn!(
                form_id,
                count = grouped.unmatched.len(),
                "responses without a matching version header"
            );
        }
        Ok(grouped.sets)
    }

    /// Remove one version header and its responses. Owner-scoped.
    ///
    /// Returns `false` if no such header existed.
    pub async fn delete_response_set(
        &self,
        form_id: i64,
        user_id: i64,
        version: &str,
    ) -> Result<bool, DatabaseError> {
        if !self.form_exists(form_id, user_id).await? {
            return Err(CoreError::form_not_found(form_id).into());
        }
        let deleted = self
            .db()
            .conn()
            .execute(
                "DELETE FROM versions WHERE form_id = ?1 AND version = ?2",
                libsql::params![form_id, version],
            )
            .await?;
        tracing::debug!(form_id, version, deleted, "response set deleted");
        Ok(deleted > 0)
    }

    /// Remove the response set at `index` in aggregation order.
    ///
    /// Returns the version token removed.
    pub async fn delete_response_set_at(
        &self,
        form_id: i64,
        user_id: i64,
        index: usize,
    ) -> Result<String, DatabaseError> {
        if !self.form_exists(form_id, user_id).await? {
            return Err(CoreError::form_not_found(form_id).into());
        }
        let versions = self.load_versions(form_id).await?;
        let version = versions
            .into_iter()
            .nth(index)
            .map(|v| v.version)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "response set".to_string(),
                id: index.to_string(),
            })?;
        self.delete_response_set(form_id, user_id, &version).await?;
        Ok(version)
    }
}
