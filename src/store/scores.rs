use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::game::{FinalScore, GameId};

const DROP_TABLE: &str = "DROP TABLE IF EXISTS scores";

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS scores (
    row_id INTEGER PRIMARY KEY,
    game_id INT,
    home_team_score INT,
    away_team_score INT
)";

const INSERT_SCORE: &str =
    "INSERT INTO scores (game_id, home_team_score, away_team_score) VALUES (?1, ?2, ?3)";

/// Where final scores are written.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// SQLite file; persistence is skipped when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
    /// Drop and recreate the table before writing.
    pub reset_table: bool,
}

/// One row of the `scores` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoredScore {
    pub row_id: i64,
    pub score: FinalScore,
}

/// SQLite-backed table of final scores.
pub struct ScoreStore {
    conn: Connection,
}

impl ScoreStore {
    /// Open (or create) the database file and make sure the table exists.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|e| StoreError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), "opened score database");
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        let store = ScoreStore { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Open according to `config`, or `None` when no database is configured.
    pub fn from_config(config: &StoreConfig) -> Result<Option<Self>, StoreError> {
        let Some(path) = &config.database_path else {
            return Ok(None);
        };
        let store = Self::open(path)?;
        if config.reset_table {
            store.reset()?;
        }
        Ok(Some(store))
    }

    pub fn ensure_schema(&self) -> Result<(), StoreError> {
        self.conn.execute(CREATE_TABLE, [])?;
        Ok(())
    }

    /// Drop every stored score and start with an empty table.
    pub fn reset(&self) -> Result<(), StoreError> {
        self.conn.execute(DROP_TABLE, [])?;
        self.conn.execute(CREATE_TABLE, [])?;
        info!("score table reset");
        Ok(())
    }

    /// Insert one score, returning its row id.
    pub fn insert(&self, score: &FinalScore) -> Result<i64, StoreError> {
        self.conn.execute(
            INSERT_SCORE,
            params![score.game_id.0, score.home, score.away],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a batch of scores in one transaction.
    pub fn insert_all(&mut self, scores: &[FinalScore]) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(INSERT_SCORE)?;
            for score in scores {
                stmt.execute(params![score.game_id.0, score.home, score.away])?;
            }
        }
        tx.commit()?;
        info!(rows = scores.len(), "scores saved");
        Ok(scores.len())
    }

    /// Every stored row, oldest first.
    pub fn all(&self) -> Result<Vec<StoredScore>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT row_id, game_id, home_team_score, away_team_score FROM scores ORDER BY row_id",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok(StoredScore {
                row_id: r.get(0)?,
                score: FinalScore {
                    game_id: GameId(r.get(1)?),
                    home: r.get(2)?,
                    away: r.get(3)?,
                },
            })
        })?;
        let scores = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(scores)
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM scores", [], |r| r.get(0))?;
        Ok(n as usize)
    }
}
