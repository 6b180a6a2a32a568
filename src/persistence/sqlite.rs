use super::{BackupSnapshot, ConfigStore, PersistenceResult};
use crate::config::PlanConfig;
use rusqlite::{Connection, OptionalExtension, params};
use std::sync::Mutex;

/// Schema-versioned storage key. Bump the suffix when the backup shape
/// changes incompatibly.
pub const STORAGE_KEY: &str = "worklog.config.v2";

pub struct SqliteConfigStore {
    connection: Mutex<Connection>,
}

impl SqliteConfigStore {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> PersistenceResult<Self> {
        let connection = Connection::open(path)?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn initialize_schema(connection: &Connection) -> PersistenceResult<()> {
        let ddl = r#"
            CREATE TABLE IF NOT EXISTS plan_config (
                storage_key TEXT PRIMARY KEY,
                config_json TEXT NOT NULL
            );
        "#;
        connection.execute_batch(ddl)?;
        Ok(())
    }
}

impl ConfigStore for SqliteConfigStore {
    fn save_config(&self, config: &PlanConfig) -> PersistenceResult<()> {
        let snapshot = BackupSnapshot::from_config(config);
        let json = serde_json::to_string(&snapshot)?;
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        conn.execute(
            "INSERT OR REPLACE INTO plan_config (storage_key, config_json) VALUES (?1, ?2)",
            params![STORAGE_KEY, json],
        )?;
        Ok(())
    }

    fn load_config(&self) -> PersistenceResult<Option<PlanConfig>> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");

        let mut stmt = conn.prepare("SELECT config_json FROM plan_config WHERE storage_key = ?1")?;
        let json_opt: Option<String> = stmt
            .query_row(params![STORAGE_KEY], |row| row.get(0))
            .optional()?;

        let Some(json) = json_opt else {
            return Ok(None);
        };

        let snapshot: BackupSnapshot = serde_json::from_str(&json)?;
        Ok(Some(snapshot.into_config()?))
    }
}
