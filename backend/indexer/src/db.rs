//! Database layer: migrations, queries and cursor management.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::errors::Result;
use crate::events::{EventRecord, MarketEvent, SubjectKind};

const EVENT_COLUMNS: &str = "id, event_id, event_type, subject_type, subject_id, actor, \
                             counterparty, amount, ledger, timestamp, contract_id, tx_hash, created_at";

/// Open (creating if needed) the SQLite database and run pending migrations.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool> {
    let url = if database_url.starts_with("sqlite:") {
        database_url.to_string()
    } else {
        format!("sqlite:{database_url}")
    };

    let options = SqliteConnectOptions::from_str(&url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;
    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied successfully");
    Ok(())
}

// ─────────────────────────────────────────────────────────
// Cursor helpers
// ─────────────────────────────────────────────────────────

/// Read the last-seen ledger from the cursor row.
/// Returns `0` when no cursor has been persisted yet.
pub async fn get_last_ledger(pool: &SqlitePool) -> Result<i64> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT last_ledger FROM indexer_cursor WHERE id = 1")
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|(v,)| v).unwrap_or(0))
}

/// Persist the last-seen ledger and the pagination cursor, if any.
pub async fn save_cursor(
    pool: &SqlitePool,
    last_ledger: i64,
    last_cursor: Option<&str>,
) -> Result<()> {
    sqlx::query("UPDATE indexer_cursor SET last_ledger = ?1, last_cursor = ?2 WHERE id = 1")
        .bind(last_ledger)
        .bind(last_cursor)
        .execute(pool)
        .await?;
    Ok(())
}

/// Read back the raw cursor string (used to resume pagination mid-ledger).
pub async fn get_cursor_string(pool: &SqlitePool) -> Result<Option<String>> {
    let row: Option<(Option<String>,)> =
        sqlx::query_as("SELECT last_cursor FROM indexer_cursor WHERE id = 1")
            .fetch_optional(pool)
            .await?;
    Ok(row.and_then(|(v,)| v))
}

// ─────────────────────────────────────────────────────────
// Event writes
// ─────────────────────────────────────────────────────────

/// Persist a batch of decoded events in one transaction. Events whose
/// `event_id` is already stored are skipped. Returns the number of new rows.
pub async fn insert_events(pool: &SqlitePool, events: &[MarketEvent]) -> Result<usize> {
    let mut tx = pool.begin().await?;
    let mut count = 0usize;
    for ev in events {
        let rows_affected = sqlx::query(
            r#"
            INSERT OR IGNORE INTO events
                (event_id, event_type, subject_type, subject_id, actor, counterparty,
                 amount, ledger, timestamp, contract_id, tx_hash)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
        )
        .bind(&ev.event_id)
        .bind(&ev.event_type)
        .bind(&ev.subject_type)
        .bind(&ev.subject_id)
        .bind(&ev.actor)
        .bind(&ev.counterparty)
        .bind(&ev.amount)
        .bind(ev.ledger)
        .bind(ev.timestamp)
        .bind(&ev.contract_id)
        .bind(&ev.tx_hash)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        count += rows_affected as usize;
    }
    tx.commit().await?;
    Ok(count)
}

// ─────────────────────────────────────────────────────────
// Event reads
// ─────────────────────────────────────────────────────────

/// Fetch every event, optionally restricted to one `event_type`.
pub async fn get_all_events(pool: &SqlitePool, event_type: Option<&str>) -> Result<Vec<EventRecord>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM events \
         WHERE ?1 IS NULL OR event_type = ?1 \
         ORDER BY ledger ASC, id ASC"
    );
    let rows = sqlx::query_as::<_, EventRecord>(&sql)
        .bind(event_type)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Fetch the history of one project or certificate.
pub async fn get_events_for_subject(
    pool: &SqlitePool,
    subject: SubjectKind,
    subject_id: &str,
) -> Result<Vec<EventRecord>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM events \
         WHERE subject_type = ?1 AND subject_id = ?2 \
         ORDER BY ledger ASC, id ASC"
    );
    let rows = sqlx::query_as::<_, EventRecord>(&sql)
        .bind(subject.as_str())
        .bind(subject_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Fetch every event an address took part in, on either side.
pub async fn get_events_for_account(pool: &SqlitePool, address: &str) -> Result<Vec<EventRecord>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM events \
         WHERE actor = ?1 OR counterparty = ?1 \
         ORDER BY ledger ASC, id ASC"
    );
    let rows = sqlx::query_as::<_, EventRecord>(&sql)
        .bind(address)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        migrate(&pool).await.unwrap();
        pool
    }

    fn event(event_id: &str, event_type: &str, ledger: i64) -> MarketEvent {
        MarketEvent {
            event_id: event_id.to_string(),
            event_type: event_type.to_string(),
            subject_type: None,
            subject_id: None,
            actor: None,
            counterparty: None,
            amount: None,
            ledger,
            timestamp: 1_704_067_200,
            contract_id: "CTEST".to_string(),
            tx_hash: None,
        }
    }

    #[tokio::test]
    async fn inserts_are_idempotent() {
        let pool = memory_pool().await;
        let batch = vec![event("e1", "credits_sold", 10), event("e2", "credits_bought", 11)];

        assert_eq!(insert_events(&pool, &batch).await.unwrap(), 2);
        assert_eq!(insert_events(&pool, &batch).await.unwrap(), 0);
        assert_eq!(get_all_events(&pool, None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn filters_by_event_type() {
        let pool = memory_pool().await;
        let batch = vec![
            event("e1", "credits_sold", 10),
            event("e2", "credits_bought", 11),
            event("e3", "credits_sold", 12),
        ];
        insert_events(&pool, &batch).await.unwrap();

        let sold = get_all_events(&pool, Some("credits_sold")).await.unwrap();
        assert_eq!(sold.len(), 2);
        assert!(sold.iter().all(|e| e.event_type == "credits_sold"));
        assert_eq!(sold[0].ledger, 10);
    }

    #[tokio::test]
    async fn project_and_certificate_ids_do_not_collide() {
        let pool = memory_pool().await;
        let mut created = event("e1", "project_created", 5);
        created.subject_type = Some("project".to_string());
        created.subject_id = Some("1".to_string());
        let mut minted = event("e2", "certificate_minted", 6);
        minted.subject_type = Some("certificate".to_string());
        minted.subject_id = Some("1".to_string());
        insert_events(&pool, &[created, minted]).await.unwrap();

        let project = get_events_for_subject(&pool, SubjectKind::Project, "1")
            .await
            .unwrap();
        assert_eq!(project.len(), 1);
        assert_eq!(project[0].event_type, "project_created");

        let cert = get_events_for_subject(&pool, SubjectKind::Certificate, "1")
            .await
            .unwrap();
        assert_eq!(cert.len(), 1);
        assert_eq!(cert[0].event_type, "certificate_minted");
    }

    #[tokio::test]
    async fn account_history_covers_both_sides() {
        let pool = memory_pool().await;
        let mut sent = event("e1", "transfer", 1);
        sent.actor = Some("GALICE".to_string());
        sent.counterparty = Some("GBOB".to_string());
        let mut retired = event("e2", "credits_retired", 2);
        retired.actor = Some("GBOB".to_string());
        let mut other = event("e3", "credits_retired", 3);
        other.actor = Some("GCAROL".to_string());
        insert_events(&pool, &[sent, retired, other]).await.unwrap();

        let bob = get_events_for_account(&pool, "GBOB").await.unwrap();
        assert_eq!(bob.len(), 2);
        assert_eq!(bob[0].event_type, "transfer");
        assert_eq!(bob[1].event_type, "credits_retired");
    }

    #[tokio::test]
    async fn cursor_round_trip() {
        let pool = memory_pool().await;
        assert_eq!(get_last_ledger(&pool).await.unwrap(), 0);
        assert_eq!(get_cursor_string(&pool).await.unwrap(), None);

        save_cursor(&pool, 4242, Some("0000-1")).await.unwrap();

        assert_eq!(get_last_ledger(&pool).await.unwrap(), 4242);
        assert_eq!(
            get_cursor_string(&pool).await.unwrap().as_deref(),
            Some("0000-1")
        );
    }
}
