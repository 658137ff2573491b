//! Shared test utilities for forms-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use forms_core::entities::Form;

    use crate::FormsDb;
    use crate::service::FormService;

    pub const OWNER: i64 = 1;

    /// Create an in-memory `FormService`.
    pub async fn test_service() -> FormService {
        let db = FormsDb::open_local(":memory:").await.unwrap();
        FormService::from_db(db)
    }

    /// Create a default form owned by [`OWNER`].
    pub async fn seeded_form(svc: &FormService) -> Form {
        svc.create_form(OWNER).await.unwrap()
    }
}
