#[cfg(test)]
mod integration_tests {
    use super::super::*;
    use sqlx::PgPool;

    // These tests require a Postgres database reachable through DATABASE_URL.
    // The SQLx test macro creates a fresh database per test.

    #[sqlx::test(migrations = false)]
    #[ignore = "requires DATABASE_URL"]
    async fn test_insert_and_find(pool: PgPool) -> sqlx::Result<()> {
        ensure_schema(&pool).await.unwrap();
        let store = PgRecordStore::new(pool);

        let inserted = store.insert("QmTestIdentifier").await.unwrap();
        assert!(inserted.id > 0);
        assert_eq!(inserted.identifier, "QmTestIdentifier");
        assert_eq!(inserted.created_at, inserted.updated_at);

        let found = store.find_by_identifier("QmTestIdentifier").await.unwrap();
        assert_eq!(found, Some(inserted));

        let missing = store.find_by_identifier("QmNeverStored").await.unwrap();
        assert!(missing.is_none());

        Ok(())
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires DATABASE_URL"]
    async fn test_duplicate_identifier_rejected(pool: PgPool) -> sqlx::Result<()> {
        ensure_schema(&pool).await.unwrap();
        let store = PgRecordStore::new(pool);

        store.insert("QmDuplicate").await.unwrap();
        let err = store.insert("QmDuplicate").await.unwrap_err();

        assert!(err.is_integrity_error());
        assert!(matches!(err, DatabaseError::IntegrityError(_)));

        Ok(())
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires DATABASE_URL"]
    async fn test_ensure_schema_is_idempotent(pool: PgPool) -> sqlx::Result<()> {
        ensure_schema(&pool).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        health_check(&pool).await.unwrap();

        Ok(())
    }
}
