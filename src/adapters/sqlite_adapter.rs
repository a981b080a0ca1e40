//! SQLite journal store adapter.

use crate::domain::error::JournalError;
use crate::domain::profile::TraderProfile;
use crate::domain::trade::{Emotion, MistakeKind, Trade, TradeResult, TradeType};
use crate::ports::config_port::ConfigPort;
use crate::ports::journal_port::JournalPort;
use chrono::NaiveDate;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;

pub struct SqliteAdapter {
    pool: Pool<SqliteConnectionManager>,
}

fn pool_err(e: r2d2::Error) -> JournalError {
    JournalError::Database {
        reason: e.to_string(),
    }
}

fn query_err(e: rusqlite::Error) -> JournalError {
    JournalError::DatabaseQuery {
        reason: e.to_string(),
    }
}

/// List-valued fields are stored as one TEXT column, `;`-joined.
fn join_list(items: &[String]) -> String {
    items.join(";")
}

fn split_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        Vec::new()
    } else {
        value.split(';').map(|s| s.to_string()).collect()
    }
}

fn bad_tag(idx: usize, value: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        idx,
        rusqlite::types::Type::Text,
        format!("unrecognized tag: {value}").into(),
    )
}

impl SqliteAdapter {
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, JournalError> {
        let db_path =
            config
                .get_string("sqlite", "path")
                .ok_or_else(|| JournalError::ConfigMissing {
                    section: "sqlite".into(),
                    key: "path".into(),
                })?;

        let pool_size = config.get_int("sqlite", "pool_size", 4) as u32;

        let manager = SqliteConnectionManager::file(&db_path);
        let pool = Pool::builder()
            .max_size(pool_size)
            .build(manager)
            .map_err(pool_err)?;

        Ok(Self { pool })
    }

    pub fn in_memory() -> Result<Self, JournalError> {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .map_err(pool_err)?;

        Ok(Self { pool })
    }

    pub fn initialize_schema(&self) -> Result<(), JournalError> {
        let conn = self.pool.get().map_err(pool_err)?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS trades (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                date TEXT NOT NULL,
                entry_time TEXT NOT NULL,
                exit_time TEXT NOT NULL,
                asset TEXT NOT NULL,
                timeframe TEXT NOT NULL,
                trade_type TEXT NOT NULL,
                setup TEXT NOT NULL,
                confluences TEXT NOT NULL,
                entry_price REAL NOT NULL,
                stop_loss REAL NOT NULL,
                take_profit REAL NOT NULL,
                risk_pct REAL NOT NULL,
                risk_usd REAL NOT NULL,
                result TEXT NOT NULL,
                result_pips REAL NOT NULL,
                result_usd REAL NOT NULL,
                result_pct REAL NOT NULL,
                rr_planned REAL NOT NULL,
                rr_actual REAL NOT NULL,
                emotion_before TEXT NOT NULL,
                emotion_during TEXT NOT NULL,
                emotion_after TEXT NOT NULL,
                plan_followed INTEGER NOT NULL,
                mistake TEXT NOT NULL,
                mistake_details TEXT NOT NULL,
                notes TEXT NOT NULL,
                images TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_trades_date ON trades(date);
            CREATE TABLE IF NOT EXISTS profile (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                initial_capital REAL NOT NULL,
                current_capital REAL NOT NULL,
                daily_goal REAL NOT NULL,
                weekly_goal REAL NOT NULL,
                max_daily_risk REAL NOT NULL,
                max_trade_risk REAL NOT NULL
            );",
        )
        .map_err(query_err)?;

        Ok(())
    }

    fn row_to_trade(row: &rusqlite::Row<'_>) -> rusqlite::Result<Trade> {
        let date_str: String = row.get(1)?;
        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                1,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })?;

        let trade_type_str: String = row.get(6)?;
        let trade_type =
            TradeType::parse(&trade_type_str).ok_or_else(|| bad_tag(6, &trade_type_str))?;

        let result_str: String = row.get(14)?;
        let result = TradeResult::parse(&result_str).ok_or_else(|| bad_tag(14, &result_str))?;

        let emotion_before_str: String = row.get(20)?;
        let emotion_before =
            Emotion::parse(&emotion_before_str).ok_or_else(|| bad_tag(20, &emotion_before_str))?;
        let emotion_during_str: String = row.get(21)?;
        let emotion_during =
            Emotion::parse(&emotion_during_str).ok_or_else(|| bad_tag(21, &emotion_during_str))?;
        let emotion_after_str: String = row.get(22)?;
        let emotion_after =
            Emotion::parse(&emotion_after_str).ok_or_else(|| bad_tag(22, &emotion_after_str))?;

        let mistake_str: String = row.get(24)?;
        let mistake = MistakeKind::parse(&mistake_str).ok_or_else(|| bad_tag(24, &mistake_str))?;

        let confluences: String = row.get(8)?;
        let mistake_details: String = row.get(25)?;
        let images: String = row.get(27)?;

        Ok(Trade {
            id: row.get(0)?,
            date,
            entry_time: row.get(2)?,
            exit_time: row.get(3)?,
            asset: row.get(4)?,
            timeframe: row.get(5)?,
            trade_type,
            setup: row.get(7)?,
            confluences: split_list(&confluences),
            entry_price: row.get(9)?,
            stop_loss: row.get(10)?,
            take_profit: row.get(11)?,
            risk_pct: row.get(12)?,
            risk_usd: row.get(13)?,
            result,
            result_pips: row.get(15)?,
            result_usd: row.get(16)?,
            result_pct: row.get(17)?,
            rr_planned: row.get(18)?,
            rr_actual: row.get(19)?,
            emotion_before,
            emotion_during,
            emotion_after,
            plan_followed: row.get(23)?,
            mistake,
            mistake_details: split_list(&mistake_details),
            notes: row.get(26)?,
            images: split_list(&images),
        })
    }
}

const TRADE_COLUMNS: &str = "id, date, entry_time, exit_time, asset, timeframe, trade_type, \
     setup, confluences, entry_price, stop_loss, take_profit, risk_pct, risk_usd, result, \
     result_pips, result_usd, result_pct, rr_planned, rr_actual, emotion_before, \
     emotion_during, emotion_after, plan_followed, mistake, mistake_details, notes, images";

impl JournalPort for SqliteAdapter {
    fn insert_trade(&self, trade: &Trade) -> Result<(), JournalError> {
        let conn = self.pool.get().map_err(pool_err)?;

        conn.execute(
            &format!(
                "INSERT OR REPLACE INTO trades ({TRADE_COLUMNS})
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14,
                         ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26, ?27, ?28)"
            ),
            params![
                trade.id,
                trade.date.format("%Y-%m-%d").to_string(),
                trade.entry_time,
                trade.exit_time,
                trade.asset,
                trade.timeframe,
                trade.trade_type.as_str(),
                trade.setup,
                join_list(&trade.confluences),
                trade.entry_price,
                trade.stop_loss,
                trade.take_profit,
                trade.risk_pct,
                trade.risk_usd,
                trade.result.as_str(),
                trade.result_pips,
                trade.result_usd,
                trade.result_pct,
                trade.rr_planned,
                trade.rr_actual,
                trade.emotion_before.as_str(),
                trade.emotion_during.as_str(),
                trade.emotion_after.as_str(),
                trade.plan_followed,
                trade.mistake.as_str(),
                join_list(&trade.mistake_details),
                trade.notes,
                join_list(&trade.images),
            ],
        )
        .map_err(query_err)?;

        Ok(())
    }

    fn list_trades(&self) -> Result<Vec<Trade>, JournalError> {
        let conn = self.pool.get().map_err(pool_err)?;

        let query = format!("SELECT {TRADE_COLUMNS} FROM trades ORDER BY seq ASC");
        let mut stmt = conn.prepare(&query).map_err(query_err)?;

        let rows = stmt
            .query_map([], |row| Self::row_to_trade(row))
            .map_err(query_err)?;

        let mut trades = Vec::new();
        for row in rows {
            trades.push(row.map_err(query_err)?);
        }

        Ok(trades)
    }

    fn delete_trade(&self, id: &str) -> Result<bool, JournalError> {
        let conn = self.pool.get().map_err(pool_err)?;

        let affected = conn
            .execute("DELETE FROM trades WHERE id = ?1", params![id])
            .map_err(query_err)?;

        Ok(affected > 0)
    }

    fn load_profile(&self) -> Result<Option<TraderProfile>, JournalError> {
        let conn = self.pool.get().map_err(pool_err)?;

        let result = conn.query_row(
            "SELECT initial_capital, current_capital, daily_goal, weekly_goal,
                    max_daily_risk, max_trade_risk
             FROM profile WHERE id = 1",
            [],
            |row| {
                Ok(TraderProfile {
                    initial_capital: row.get(0)?,
                    current_capital: row.get(1)?,
                    daily_goal: row.get(2)?,
                    weekly_goal: row.get(3)?,
                    max_daily_risk: row.get(4)?,
                    max_trade_risk: row.get(5)?,
                })
            },
        );

        match result {
            Ok(profile) => Ok(Some(profile)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(query_err(e)),
        }
    }

    fn save_profile(&self, profile: &TraderProfile) -> Result<(), JournalError> {
        let conn = self.pool.get().map_err(pool_err)?;

        conn.execute(
            "INSERT OR REPLACE INTO profile
                 (id, initial_capital, current_capital, daily_goal, weekly_goal,
                  max_daily_risk, max_trade_risk)
             VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                profile.initial_capital,
                profile.current_capital,
                profile.daily_goal,
                profile.weekly_goal,
                profile.max_daily_risk,
                profile.max_trade_risk,
            ],
        )
        .map_err(query_err)?;

        Ok(())
    }
}
