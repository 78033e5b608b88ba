use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREATE_CONTACT_ENQUIRY_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS a001_contact_enquiry (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT,
        subject TEXT NOT NULL,
        message TEXT NOT NULL,
        created_at TEXT NOT NULL
    );
"#;

const CREATE_EVENT_ENQUIRY_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS a002_event_enquiry (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        phone TEXT NOT NULL,
        email TEXT,
        event_type TEXT NOT NULL,
        event_date TEXT NOT NULL,
        guest_count TEXT,
        message TEXT,
        created_at TEXT NOT NULL
    );
"#;

pub(crate) fn build_sqlite_url(path: &Path) -> String {
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

/// Open the SQLite file (creating it and its directory when missing) and
/// make sure both enquiry tables exist.
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    let db_url = build_sqlite_url(&absolute_path);
    tracing::info!("Opening database: {}", absolute_path.display());
    let conn = Database::connect(&db_url).await?;

    for (table, sql) in [
        ("a001_contact_enquiry", CREATE_CONTACT_ENQUIRY_TABLE),
        ("a002_event_enquiry", CREATE_EVENT_ENQUIRY_TABLE),
    ] {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
        tracing::info!("Table {} ready", table);
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("database already initialized"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("database connection is not initialized")
}
