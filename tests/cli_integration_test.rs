//! CLI integration tests for command orchestration.
//!
//! Tests cover:
//! - Trade construction from CLI flags (build_trade)
//! - Config parsing and validation with real INI files on disk
//! - Opening the journal from a config file

mod common;

use tradelog::adapters::file_config_adapter::FileConfigAdapter;
use tradelog::cli::{build_trade, split_csv_flag, TradeArgs};
use tradelog::domain::error::JournalError;
use tradelog::domain::trade::{Emotion, MistakeKind, TradeResult, TradeType};

fn default_args() -> TradeArgs {
    TradeArgs {
        id: Some("t1".to_string()),
        date: "2024-03-01".to_string(),
        entry_time: "09:30".to_string(),
        exit_time: "11:00".to_string(),
        asset: "eurusd".to_string(),
        timeframe: "M15".to_string(),
        trade_type: "BUY".to_string(),
        setup: "Breakout".to_string(),
        confluences: "Trend, Support".to_string(),
        entry_price: 1.085,
        stop_loss: 1.082,
        take_profit: 1.091,
        risk_pct: 1.0,
        risk_usd: 100.0,
        result: "GAIN".to_string(),
        result_pips: 30.0,
        result_usd: 200.0,
        result_pct: 2.0,
        rr_planned: 2.0,
        rr_actual: 2.0,
        emotion_before: "CALM".to_string(),
        emotion_during: "confident".to_string(),
        emotion_after: "CALM".to_string(),
        plan_followed: "true".to_string(),
        mistake: "NONE".to_string(),
        mistake_details: String::new(),
        notes: String::new(),
        images: String::new(),
    }
}

mod trade_construction {
    use super::*;

    #[test]
    fn builds_trade_from_flags() {
        let trade = build_trade(&default_args()).unwrap();

        assert_eq!(trade.id, "t1");
        assert_eq!(trade.asset, "EURUSD");
        assert_eq!(trade.trade_type, TradeType::Buy);
        assert_eq!(trade.result, TradeResult::Gain);
        assert_eq!(trade.emotion_during, Emotion::Confident);
        assert_eq!(trade.mistake, MistakeKind::None);
        assert!(trade.plan_followed);
        assert_eq!(
            trade.confluences,
            vec!["Trend".to_string(), "Support".to_string()]
        );
    }

    #[test]
    fn generates_id_when_omitted() {
        let mut args = default_args();
        args.id = None;
        let trade = build_trade(&args).unwrap();
        assert!(!trade.id.is_empty());
    }

    #[test]
    fn bad_date_is_invalid_trade() {
        let mut args = default_args();
        args.date = "01/03/2024".to_string();
        match build_trade(&args) {
            Err(JournalError::InvalidTrade { field, .. }) => assert_eq!(field, "date"),
            other => panic!("expected InvalidTrade, got {other:?}"),
        }
    }

    #[test]
    fn bad_result_tag_is_invalid_trade() {
        let mut args = default_args();
        args.result = "WINNER".to_string();
        match build_trade(&args) {
            Err(JournalError::InvalidTrade { field, .. }) => assert_eq!(field, "result"),
            other => panic!("expected InvalidTrade, got {other:?}"),
        }
    }

    #[test]
    fn bad_emotion_is_invalid_trade() {
        let mut args = default_args();
        args.emotion_after = "ECSTATIC".to_string();
        match build_trade(&args) {
            Err(JournalError::InvalidTrade { field, .. }) => assert_eq!(field, "emotion_after"),
            other => panic!("expected InvalidTrade, got {other:?}"),
        }
    }

    #[test]
    fn bad_plan_followed_is_invalid_trade() {
        let mut args = default_args();
        args.plan_followed = "maybe".to_string();
        assert!(build_trade(&args).is_err());
    }

    #[test]
    fn split_csv_flag_trims_and_drops_empties() {
        assert_eq!(
            split_csv_flag(" a , b ,, c "),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert!(split_csv_flag("").is_empty());
    }
}

mod config_files {
    use super::*;
    use std::io::Write;
    use tradelog::domain::config_validation::{validate_review_config, validate_store_config};

    fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tradelog.ini");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_config_from_disk() {
        let (_dir, path) = write_config("[sqlite]\npath = journal.db\npool_size = 2\n");
        let config = FileConfigAdapter::from_file(&path).unwrap();
        assert!(validate_store_config(&config).is_ok());
    }

    #[test]
    fn missing_sqlite_path_fails_validation() {
        let config = FileConfigAdapter::from_string("[sqlite]\npool_size = 2\n").unwrap();
        match validate_store_config(&config) {
            Err(JournalError::ConfigMissing { section, key }) => {
                assert_eq!(section, "sqlite");
                assert_eq!(key, "path");
            }
            other => panic!("expected ConfigMissing, got {other:?}"),
        }
    }

    #[test]
    fn review_config_requires_api_key() {
        let config = FileConfigAdapter::from_string("[gemini]\nmodel = gemini-1.5-pro\n").unwrap();
        match validate_review_config(&config) {
            Err(JournalError::ConfigMissing { section, key }) => {
                assert_eq!(section, "gemini");
                assert_eq!(key, "api_key");
            }
            other => panic!("expected ConfigMissing, got {other:?}"),
        }
    }

    #[test]
    fn review_config_rejects_out_of_range_temperature() {
        let config =
            FileConfigAdapter::from_string("[gemini]\napi_key = k\ntemperature = 5.0\n").unwrap();
        assert!(validate_review_config(&config).is_err());
    }
}

#[cfg(feature = "sqlite")]
mod journal_from_config {
    use super::*;
    use std::io::Write;
    use tradelog::adapters::sqlite_adapter::SqliteAdapter;
    use tradelog::domain::trade::TradeResult;
    use tradelog::ports::journal_port::JournalPort;

    #[test]
    fn opens_journal_at_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("journal.db");
        let config_path = dir.path().join("tradelog.ini");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "[sqlite]").unwrap();
        writeln!(file, "path = {}", db_path.display()).unwrap();
        writeln!(file, "pool_size = 1").unwrap();

        let config = FileConfigAdapter::from_file(&config_path).unwrap();
        let journal = SqliteAdapter::from_config(&config).unwrap();
        journal.initialize_schema().unwrap();

        let trade = build_trade(&default_args()).unwrap();
        journal.insert_trade(&trade).unwrap();

        // Reopen from the same config and read back.
        let reopened = SqliteAdapter::from_config(&config).unwrap();
        let trades = reopened.list_trades().unwrap();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].result, TradeResult::Gain);
        assert!(db_path.exists());
    }
}
