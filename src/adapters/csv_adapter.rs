//! CSV import/export of the journal.
//!
//! One row per trade, one header row, list-valued fields `;`-joined —
//! the same encoding the SQLite store uses.

use crate::domain::error::JournalError;
use crate::domain::trade::{Emotion, MistakeKind, Trade, TradeResult, TradeType};
use crate::domain::trade_validation::validate_trade;
use chrono::NaiveDate;
use std::path::Path;

const COLUMNS: [&str; 28] = [
    "id",
    "date",
    "entry_time",
    "exit_time",
    "asset",
    "timeframe",
    "trade_type",
    "setup",
    "confluences",
    "entry_price",
    "stop_loss",
    "take_profit",
    "risk_pct",
    "risk_usd",
    "result",
    "result_pips",
    "result_usd",
    "result_pct",
    "rr_planned",
    "rr_actual",
    "emotion_before",
    "emotion_during",
    "emotion_after",
    "plan_followed",
    "mistake",
    "mistake_details",
    "notes",
    "images",
];

pub struct CsvAdapter;

impl CsvAdapter {
    pub fn export_trades<P: AsRef<Path>>(path: P, trades: &[Trade]) -> Result<(), JournalError> {
        let mut writer = csv::Writer::from_path(path.as_ref()).map_err(|e| JournalError::Csv {
            line: 0,
            reason: e.to_string(),
        })?;

        writer
            .write_record(COLUMNS)
            .map_err(|e| JournalError::Csv {
                line: 0,
                reason: e.to_string(),
            })?;

        for trade in trades {
            writer
                .write_record(trade_record(trade))
                .map_err(|e| JournalError::Csv {
                    line: 0,
                    reason: e.to_string(),
                })?;
        }

        writer.flush().map_err(JournalError::Io)?;
        Ok(())
    }

    /// Parse and validate every row. Hard failures abort with a
    /// line-numbered error; sign-consistency issues come back as
    /// warnings alongside the parsed trades.
    pub fn import_trades<P: AsRef<Path>>(
        path: P,
    ) -> Result<(Vec<Trade>, Vec<String>), JournalError> {
        let mut reader =
            csv::Reader::from_path(path.as_ref()).map_err(|e| JournalError::Csv {
                line: 0,
                reason: e.to_string(),
            })?;

        let mut trades = Vec::new();
        let mut warnings = Vec::new();

        for result in reader.records() {
            let record = result.map_err(|e| JournalError::Csv {
                line: e.position().map(|p| p.line()).unwrap_or(0),
                reason: e.to_string(),
            })?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let trade = parse_record(&record, line)?;
            warnings.extend(validate_trade(&trade)?);
            trades.push(trade);
        }

        Ok((trades, warnings))
    }
}

fn trade_record(trade: &Trade) -> Vec<String> {
    vec![
        trade.id.clone(),
        trade.date.format("%Y-%m-%d").to_string(),
        trade.entry_time.clone(),
        trade.exit_time.clone(),
        trade.asset.clone(),
        trade.timeframe.clone(),
        trade.trade_type.to_string(),
        trade.setup.clone(),
        trade.confluences.join(";"),
        trade.entry_price.to_string(),
        trade.stop_loss.to_string(),
        trade.take_profit.to_string(),
        trade.risk_pct.to_string(),
        trade.risk_usd.to_string(),
        trade.result.to_string(),
        trade.result_pips.to_string(),
        trade.result_usd.to_string(),
        trade.result_pct.to_string(),
        trade.rr_planned.to_string(),
        trade.rr_actual.to_string(),
        trade.emotion_before.to_string(),
        trade.emotion_during.to_string(),
        trade.emotion_after.to_string(),
        trade.plan_followed.to_string(),
        trade.mistake.to_string(),
        trade.mistake_details.join(";"),
        trade.notes.clone(),
        trade.images.join(";"),
    ]
}

fn field<'a>(
    record: &'a csv::StringRecord,
    idx: usize,
    line: u64,
) -> Result<&'a str, JournalError> {
    record.get(idx).ok_or_else(|| JournalError::Csv {
        line,
        reason: format!("missing {} column", COLUMNS[idx]),
    })
}

fn parse_f64(record: &csv::StringRecord, idx: usize, line: u64) -> Result<f64, JournalError> {
    field(record, idx, line)?
        .trim()
        .parse()
        .map_err(|e| JournalError::Csv {
            line,
            reason: format!("invalid {} value: {}", COLUMNS[idx], e),
        })
}

fn parse_date(record: &csv::StringRecord, idx: usize, line: u64) -> Result<NaiveDate, JournalError> {
    let value = field(record, idx, line)?;
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| JournalError::Csv {
        line,
        reason: format!("invalid {} format, expected YYYY-MM-DD", COLUMNS[idx]),
    })
}

fn parse_bool(record: &csv::StringRecord, idx: usize, line: u64) -> Result<bool, JournalError> {
    match field(record, idx, line)?.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(JournalError::Csv {
            line,
            reason: format!("invalid {} value: {}", COLUMNS[idx], other),
        }),
    }
}

fn parse_list(record: &csv::StringRecord, idx: usize, line: u64) -> Result<Vec<String>, JournalError> {
    let value = field(record, idx, line)?;
    if value.is_empty() {
        Ok(Vec::new())
    } else {
        Ok(value.split(';').map(|s| s.to_string()).collect())
    }
}

fn parse_record(record: &csv::StringRecord, line: u64) -> Result<Trade, JournalError> {
    let trade_type_str = field(record, 6, line)?;
    let trade_type = TradeType::parse(trade_type_str).ok_or_else(|| JournalError::Csv {
        line,
        reason: format!("unknown trade_type: {trade_type_str}"),
    })?;

    let result_str = field(record, 14, line)?;
    let result = TradeResult::parse(result_str).ok_or_else(|| JournalError::Csv {
        line,
        reason: format!("unknown result: {result_str}"),
    })?;

    let emotion = |idx: usize| -> Result<Emotion, JournalError> {
        let value = field(record, idx, line)?;
        Emotion::parse(value).ok_or_else(|| JournalError::Csv {
            line,
            reason: format!("unknown {}: {}", COLUMNS[idx], value),
        })
    };

    let mistake_str = field(record, 24, line)?;
    let mistake = MistakeKind::parse(mistake_str).ok_or_else(|| JournalError::Csv {
        line,
        reason: format!("unknown mistake: {mistake_str}"),
    })?;

    Ok(Trade {
        id: field(record, 0, line)?.to_string(),
        date: parse_date(record, 1, line)?,
        entry_time: field(record, 2, line)?.to_string(),
        exit_time: field(record, 3, line)?.to_string(),
        asset: field(record, 4, line)?.to_string(),
        timeframe: field(record, 5, line)?.to_string(),
        trade_type,
        setup: field(record, 7, line)?.to_string(),
        confluences: parse_list(record, 8, line)?,
        entry_price: parse_f64(record, 9, line)?,
        stop_loss: parse_f64(record, 10, line)?,
        take_profit: parse_f64(record, 11, line)?,
        risk_pct: parse_f64(record, 12, line)?,
        risk_usd: parse_f64(record, 13, line)?,
        result,
        result_pips: parse_f64(record, 15, line)?,
        result_usd: parse_f64(record, 16, line)?,
        result_pct: parse_f64(record, 17, line)?,
        rr_planned: parse_f64(record, 18, line)?,
        rr_actual: parse_f64(record, 19, line)?,
        emotion_before: emotion(20)?,
        emotion_during: emotion(21)?,
        emotion_after: emotion(22)?,
        plan_followed: parse_bool(record, 23, line)?,
        mistake,
        mistake_details: parse_list(record, 25, line)?,
        notes: field(record, 26, line)?.to_string(),
        images: parse_list(record, 27, line)?,
    })
}
