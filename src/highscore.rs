#![cfg(feature = "std")]

//! File-backed high-score table.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

/// One row of the high-score table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreRecord {
    pub id: i64,
    pub player: String,
    pub score: u32,
    pub moves: u32,
    pub date: String,
}

/// Append-only high-score store backed by a local SQLite file.
///
/// Schema:
/// - highscore(id INTEGER PRIMARY KEY AUTOINCREMENT, player TEXT,
///   score INTEGER, moves INTEGER, date DATE)
pub struct HighScoreStore {
    conn: Connection,
}

impl HighScoreStore {
    /// Default database location in the user's home directory.
    pub fn default_path() -> PathBuf {
        let home = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .unwrap_or_default();
        PathBuf::from(home).join(".twentyfortyeight_hs.sqlite")
    }

    /// Create or open the store at `path`, ensure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS highscore (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                player TEXT NOT NULL,
                score INTEGER NOT NULL,
                moves INTEGER NOT NULL,
                date DATE NOT NULL
            );
            "#,
        )?;
        Ok(Self { conn })
    }

    /// Append one finished session, dated today. Returns the new row id.
    pub fn record(&mut self, player: &str, score: u32, moves: u32) -> Result<i64, rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO highscore (player, score, moves, date)
             VALUES (?1, ?2, ?3, date('now', 'localtime'))",
            params![player, score as i64, moves as i64],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// First `limit` rows of the table, in insertion order.
    pub fn list(&self, limit: usize) -> Result<Vec<HighScoreRecord>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, player, score, moves, date FROM highscore LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok(HighScoreRecord {
                id: row.get::<_, i64>(0)?,
                player: row.get::<_, String>(1)?,
                score: row.get::<_, i64>(2)? as u32,
                moves: row.get::<_, i64>(3)? as u32,
                date: row.get::<_, String>(4)?,
            })
        })?;
        rows.collect()
    }
}
