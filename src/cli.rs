//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::error::JournalError;
use crate::domain::trade::{Emotion, MistakeKind, Trade, TradeResult, TradeType};
use crate::domain::trade_validation::validate_trade;

#[derive(Parser, Debug)]
#[command(name = "tradelog", about = "Personal trading journal and analytics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the journal database schema
    Init {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Log a trade
    Add {
        #[arg(short, long)]
        config: PathBuf,
        #[command(flatten)]
        trade: TradeArgs,
    },
    /// List journalled trades
    List {
        #[arg(short, long)]
        config: PathBuf,
        /// Show only the most recent N trades
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Remove a trade by id
    Delete {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        id: String,
    },
    /// Compute aggregate performance statistics
    Stats {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Print the equity curve
    Equity {
        #[arg(short, long)]
        config: PathBuf,
        /// Write the curve to a CSV file instead of stdout
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Show or update the trader profile
    Profile {
        #[arg(short, long)]
        config: PathBuf,
        #[command(flatten)]
        updates: ProfileArgs,
    },
    /// Import trades from a CSV file
    Import {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Export the journal to a CSV file
    Export {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Narrative performance review of recent trades
    Review {
        #[arg(short, long)]
        config: PathBuf,
    },
}

/// Trade fields as CLI flags. Enum-valued fields take their uppercase
/// wire tags and are parsed in [`build_trade`] so that bad values surface
/// as `InvalidTrade` with the offending field named.
#[derive(clap::Args, Debug)]
pub struct TradeArgs {
    /// Generated from a UTC timestamp when omitted
    #[arg(long)]
    pub id: Option<String>,
    /// Trade date, YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    #[arg(long, default_value = "")]
    pub entry_time: String,
    #[arg(long, default_value = "")]
    pub exit_time: String,
    #[arg(long)]
    pub asset: String,
    #[arg(long, default_value = "M15")]
    pub timeframe: String,
    /// BUY or SELL
    #[arg(long = "type", default_value = "BUY")]
    pub trade_type: String,
    #[arg(long, default_value = "")]
    pub setup: String,
    /// Comma-separated list
    #[arg(long, default_value = "")]
    pub confluences: String,
    #[arg(long, default_value_t = 0.0)]
    pub entry_price: f64,
    #[arg(long, default_value_t = 0.0)]
    pub stop_loss: f64,
    #[arg(long, default_value_t = 0.0)]
    pub take_profit: f64,
    #[arg(long, default_value_t = 0.0)]
    pub risk_pct: f64,
    #[arg(long, default_value_t = 0.0)]
    pub risk_usd: f64,
    /// GAIN, LOSS or BREAK_EVEN
    #[arg(long)]
    pub result: String,
    #[arg(long, default_value_t = 0.0)]
    pub result_pips: f64,
    #[arg(long)]
    pub result_usd: f64,
    #[arg(long, default_value_t = 0.0)]
    pub result_pct: f64,
    #[arg(long, default_value_t = 0.0)]
    pub rr_planned: f64,
    #[arg(long, default_value_t = 0.0)]
    pub rr_actual: f64,
    /// CALM, ANXIOUS, CONFIDENT or FEARFUL
    #[arg(long, default_value = "CALM")]
    pub emotion_before: String,
    #[arg(long, default_value = "CALM")]
    pub emotion_during: String,
    #[arg(long, default_value = "CALM")]
    pub emotion_after: String,
    #[arg(long, default_value = "true")]
    pub plan_followed: String,
    /// TECHNICAL, PSYCHOLOGICAL or NONE
    #[arg(long, default_value = "NONE")]
    pub mistake: String,
    /// Comma-separated list
    #[arg(long, default_value = "")]
    pub mistake_details: String,
    #[arg(long, default_value = "")]
    pub notes: String,
    /// Comma-separated list of image paths
    #[arg(long, default_value = "")]
    pub images: String,
}

#[derive(clap::Args, Debug, Default)]
pub struct ProfileArgs {
    #[arg(long)]
    pub set_initial_capital: Option<f64>,
    #[arg(long)]
    pub set_current_capital: Option<f64>,
    #[arg(long)]
    pub set_daily_goal: Option<f64>,
    #[arg(long)]
    pub set_weekly_goal: Option<f64>,
    #[arg(long)]
    pub set_max_daily_risk: Option<f64>,
    #[arg(long)]
    pub set_max_trade_risk: Option<f64>,
}

impl ProfileArgs {
    pub fn is_update(&self) -> bool {
        self.set_initial_capital.is_some()
            || self.set_current_capital.is_some()
            || self.set_daily_goal.is_some()
            || self.set_weekly_goal.is_some()
            || self.set_max_daily_risk.is_some()
            || self.set_max_trade_risk.is_some()
    }
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Init { config } => run_init(&config),
        Command::Add { config, trade } => run_add(&config, &trade),
        Command::List { config, limit } => run_list(&config, limit),
        Command::Delete { config, id } => run_delete(&config, &id),
        Command::Stats { config } => run_stats(&config),
        Command::Equity { config, csv } => run_equity(&config, csv.as_ref()),
        Command::Profile { config, updates } => run_profile(&config, &updates),
        Command::Import { config, file } => run_import(&config, &file),
        Command::Export { config, file } => run_export(&config, &file),
        Command::Review { config } => run_review(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = JournalError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Parse CLI trade flags into a [`Trade`]. Field errors come back as
/// `InvalidTrade` so the caller can report them uniformly.
pub fn build_trade(args: &TradeArgs) -> Result<Trade, JournalError> {
    let invalid = |field: &str, reason: String| JournalError::InvalidTrade {
        field: field.to_string(),
        reason,
    };

    let date = NaiveDate::parse_from_str(args.date.trim(), "%Y-%m-%d")
        .map_err(|_| invalid("date", "expected YYYY-MM-DD".to_string()))?;

    let trade_type = TradeType::parse(&args.trade_type)
        .ok_or_else(|| invalid("type", format!("unknown trade type: {}", args.trade_type)))?;

    let result = TradeResult::parse(&args.result)
        .ok_or_else(|| invalid("result", format!("unknown result: {}", args.result)))?;

    let emotion = |field: &str, value: &str| {
        Emotion::parse(value).ok_or_else(|| invalid(field, format!("unknown emotion: {value}")))
    };

    let mistake = MistakeKind::parse(&args.mistake)
        .ok_or_else(|| invalid("mistake", format!("unknown mistake kind: {}", args.mistake)))?;

    let plan_followed = match args.plan_followed.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => true,
        "false" | "no" | "0" => false,
        other => {
            return Err(invalid(
                "plan_followed",
                format!("expected true or false, got {other}"),
            ))
        }
    };

    let id = match &args.id {
        Some(id) => id.clone(),
        None => chrono::Utc::now().format("%Y%m%d%H%M%S%3f").to_string(),
    };

    Ok(Trade {
        id,
        date,
        entry_time: args.entry_time.clone(),
        exit_time: args.exit_time.clone(),
        asset: args.asset.trim().to_uppercase(),
        timeframe: args.timeframe.clone(),
        trade_type,
        setup: args.setup.clone(),
        confluences: split_csv_flag(&args.confluences),
        entry_price: args.entry_price,
        stop_loss: args.stop_loss,
        take_profit: args.take_profit,
        risk_pct: args.risk_pct,
        risk_usd: args.risk_usd,
        result,
        result_pips: args.result_pips,
        result_usd: args.result_usd,
        result_pct: args.result_pct,
        rr_planned: args.rr_planned,
        rr_actual: args.rr_actual,
        emotion_before: emotion("emotion_before", &args.emotion_before)?,
        emotion_during: emotion("emotion_during", &args.emotion_during)?,
        emotion_after: emotion("emotion_after", &args.emotion_after)?,
        plan_followed,
        mistake,
        mistake_details: split_csv_flag(&args.mistake_details),
        notes: args.notes.clone(),
        images: split_csv_flag(&args.images),
    })
}

pub fn split_csv_flag(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(feature = "sqlite")]
fn open_journal(
    config: &FileConfigAdapter,
) -> Result<crate::adapters::sqlite_adapter::SqliteAdapter, ExitCode> {
    use crate::adapters::sqlite_adapter::SqliteAdapter;
    use crate::domain::config_validation::validate_store_config;

    if let Err(e) = validate_store_config(config) {
        eprintln!("error: {e}");
        return Err((&e).into());
    }

    let adapter = SqliteAdapter::from_config(config).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(&e)
    })?;

    adapter.initialize_schema().map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(&e)
    })?;

    Ok(adapter)
}

fn run_init(config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    #[cfg(feature = "sqlite")]
    {
        match open_journal(&config) {
            Ok(_) => {
                eprintln!("Journal initialized");
                ExitCode::SUCCESS
            }
            Err(code) => code,
        }
    }

    #[cfg(not(feature = "sqlite"))]
    {
        let _ = config;
        eprintln!("error: sqlite feature is required for init");
        ExitCode::from(1)
    }
}

fn run_add(config_path: &PathBuf, args: &TradeArgs) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let trade = match build_trade(args) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let warnings = match validate_trade(&trade) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    for warning in &warnings {
        eprintln!("warning: {warning}");
    }

    #[cfg(feature = "sqlite")]
    {
        use crate::ports::journal_port::JournalPort;

        let journal = match open_journal(&config) {
            Ok(j) => j,
            Err(code) => return code,
        };

        if let Err(e) = journal.insert_trade(&trade) {
            eprintln!("error: {e}");
            return (&e).into();
        }

        eprintln!("Logged trade {} ({} {})", trade.id, trade.asset, trade.result);
        ExitCode::SUCCESS
    }

    #[cfg(not(feature = "sqlite"))]
    {
        let _ = (config, trade);
        eprintln!("error: sqlite feature is required for add");
        ExitCode::from(1)
    }
}

fn run_list(config_path: &PathBuf, limit: Option<usize>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    #[cfg(feature = "sqlite")]
    {
        use crate::ports::journal_port::JournalPort;

        let journal = match open_journal(&config) {
            Ok(j) => j,
            Err(code) => return code,
        };

        let trades = match journal.list_trades() {
            Ok(t) => t,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

        if trades.is_empty() {
            eprintln!("Journal is empty");
            return ExitCode::SUCCESS;
        }

        let start = match limit {
            Some(n) => trades.len().saturating_sub(n),
            None => 0,
        };

        for trade in &trades[start..] {
            println!(
                "{}  {}  {:<8}  {:<4}  {:<10}  {:>10.2}  rr {:.2}",
                trade.id,
                trade.date,
                trade.asset,
                trade.trade_type.as_str(),
                trade.result.as_str(),
                trade.result_usd,
                trade.rr_actual,
            );
        }
        eprintln!("{} of {} trades", trades.len() - start, trades.len());
        ExitCode::SUCCESS
    }

    #[cfg(not(feature = "sqlite"))]
    {
        let _ = (config, limit);
        eprintln!("error: sqlite feature is required for list");
        ExitCode::from(1)
    }
}

fn run_delete(config_path: &PathBuf, id: &str) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    #[cfg(feature = "sqlite")]
    {
        use crate::ports::journal_port::JournalPort;

        let journal = match open_journal(&config) {
            Ok(j) => j,
            Err(code) => return code,
        };

        match journal.delete_trade(id) {
            Ok(true) => {
                eprintln!("Deleted trade {id}");
                ExitCode::SUCCESS
            }
            Ok(false) => {
                eprintln!("No trade with id {id}");
                ExitCode::from(4)
            }
            Err(e) => {
                eprintln!("error: {e}");
                (&e).into()
            }
        }
    }

    #[cfg(not(feature = "sqlite"))]
    {
        let _ = (config, id);
        eprintln!("error: sqlite feature is required for delete");
        ExitCode::from(1)
    }
}

fn run_stats(config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    #[cfg(feature = "sqlite")]
    {
        use crate::domain::stats::AggregateStats;
        use crate::ports::journal_port::JournalPort;

        let journal = match open_journal(&config) {
            Ok(j) => j,
            Err(code) => return code,
        };

        let trades = match journal.list_trades() {
            Ok(t) => t,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

        let stats = AggregateStats::compute(&trades);

        println!("Total trades:    {}", stats.total_trades);
        println!("Total P&L:       ${:.2}", stats.total_pnl);
        println!("Win rate:        {:.1}%", stats.win_rate);
        println!("Expectancy:      ${:.2}", stats.expectancy);
        println!("Avg win:         ${:.2}", stats.avg_win);
        println!("Avg loss:        ${:.2}", stats.avg_loss);
        println!("Avg R:R:         {:.2}", stats.avg_rr);
        println!("Max drawdown:    ${:.2}", stats.max_drawdown);
        println!("Max win streak:  {}", stats.max_win_streak);
        println!("Max loss streak: {}", stats.max_loss_streak);
        ExitCode::SUCCESS
    }

    #[cfg(not(feature = "sqlite"))]
    {
        let _ = config;
        eprintln!("error: sqlite feature is required for stats");
        ExitCode::from(1)
    }
}

fn run_equity(config_path: &PathBuf, csv_path: Option<&PathBuf>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    #[cfg(feature = "sqlite")]
    {
        use crate::domain::equity::equity_curve;
        use crate::ports::journal_port::JournalPort;

        let journal = match open_journal(&config) {
            Ok(j) => j,
            Err(code) => return code,
        };

        let trades = match journal.list_trades() {
            Ok(t) => t,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

        let initial_capital = match journal.load_profile() {
            Ok(Some(profile)) => profile.initial_capital,
            Ok(None) => {
                eprintln!("warning: no profile set, using initial capital 0");
                0.0
            }
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

        let curve = equity_curve(&trades, initial_capital);

        if let Some(path) = csv_path {
            if let Err(e) = write_equity_csv(path, &curve) {
                eprintln!("error: {e}");
                return (&e).into();
            }
            eprintln!("Equity curve written to {}", path.display());
        } else {
            for point in &curve {
                println!("{:>4}  {}  {:.2}", point.trade_no, point.date, point.balance);
            }
            eprintln!("{} points, starting capital {:.2}", curve.len(), initial_capital);
        }
        ExitCode::SUCCESS
    }

    #[cfg(not(feature = "sqlite"))]
    {
        let _ = (config, csv_path);
        eprintln!("error: sqlite feature is required for equity");
        ExitCode::from(1)
    }
}

#[cfg(feature = "sqlite")]
fn write_equity_csv(
    path: &PathBuf,
    curve: &[crate::domain::equity::EquityPoint],
) -> Result<(), JournalError> {
    let csv_err = |e: csv::Error| JournalError::Csv {
        line: 0,
        reason: e.to_string(),
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    writer
        .write_record(["trade_no", "balance", "date"])
        .map_err(csv_err)?;

    for point in curve {
        writer
            .write_record([
                point.trade_no.to_string(),
                format!("{:.2}", point.balance),
                point.date.format("%Y-%m-%d").to_string(),
            ])
            .map_err(csv_err)?;
    }

    writer.flush().map_err(JournalError::Io)?;
    Ok(())
}

fn run_profile(config_path: &PathBuf, updates: &ProfileArgs) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    #[cfg(feature = "sqlite")]
    {
        use crate::domain::profile::TraderProfile;
        use crate::ports::journal_port::JournalPort;

        let journal = match open_journal(&config) {
            Ok(j) => j,
            Err(code) => return code,
        };

        let existing = match journal.load_profile() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

        if updates.is_update() {
            let mut profile = existing.unwrap_or_else(|| TraderProfile::new(0.0));
            if let Some(v) = updates.set_initial_capital {
                profile.initial_capital = v;
            }
            if let Some(v) = updates.set_current_capital {
                profile.current_capital = v;
            }
            if let Some(v) = updates.set_daily_goal {
                profile.daily_goal = v;
            }
            if let Some(v) = updates.set_weekly_goal {
                profile.weekly_goal = v;
            }
            if let Some(v) = updates.set_max_daily_risk {
                profile.max_daily_risk = v;
            }
            if let Some(v) = updates.set_max_trade_risk {
                profile.max_trade_risk = v;
            }

            if let Err(e) = journal.save_profile(&profile) {
                eprintln!("error: {e}");
                return (&e).into();
            }
            print_profile(&profile);
            return ExitCode::SUCCESS;
        }

        match existing {
            Some(profile) => {
                print_profile(&profile);
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("No profile set; use --set-initial-capital to create one");
                ExitCode::SUCCESS
            }
        }
    }

    #[cfg(not(feature = "sqlite"))]
    {
        let _ = (config, updates);
        eprintln!("error: sqlite feature is required for profile");
        ExitCode::from(1)
    }
}

#[cfg(feature = "sqlite")]
fn print_profile(profile: &crate::domain::profile::TraderProfile) {
    println!("Initial capital: ${:.2}", profile.initial_capital);
    println!("Current capital: ${:.2}", profile.current_capital);
    println!("Daily goal:      ${:.2}", profile.daily_goal);
    println!("Weekly goal:     ${:.2}", profile.weekly_goal);
    println!("Max daily risk:  {:.2}%", profile.max_daily_risk);
    println!("Max trade risk:  {:.2}%", profile.max_trade_risk);
}

fn run_import(config_path: &PathBuf, file: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    #[cfg(feature = "sqlite")]
    {
        use crate::adapters::csv_adapter::CsvAdapter;
        use crate::ports::journal_port::JournalPort;

        eprintln!("Importing trades from {}", file.display());
        let (trades, warnings) = match CsvAdapter::import_trades(file) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };
        for warning in &warnings {
            eprintln!("warning: {warning}");
        }

        let journal = match open_journal(&config) {
            Ok(j) => j,
            Err(code) => return code,
        };

        for trade in &trades {
            if let Err(e) = journal.insert_trade(trade) {
                eprintln!("error: {e}");
                return (&e).into();
            }
        }

        eprintln!("Imported {} trades", trades.len());
        ExitCode::SUCCESS
    }

    #[cfg(not(feature = "sqlite"))]
    {
        let _ = (config, file);
        eprintln!("error: sqlite feature is required for import");
        ExitCode::from(1)
    }
}

fn run_export(config_path: &PathBuf, file: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    #[cfg(feature = "sqlite")]
    {
        use crate::adapters::csv_adapter::CsvAdapter;
        use crate::ports::journal_port::JournalPort;

        let journal = match open_journal(&config) {
            Ok(j) => j,
            Err(code) => return code,
        };

        let trades = match journal.list_trades() {
            Ok(t) => t,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

        if let Err(e) = CsvAdapter::export_trades(file, &trades) {
            eprintln!("error: {e}");
            return (&e).into();
        }

        eprintln!("Exported {} trades to {}", trades.len(), file.display());
        ExitCode::SUCCESS
    }

    #[cfg(not(feature = "sqlite"))]
    {
        let _ = (config, file);
        eprintln!("error: sqlite feature is required for export");
        ExitCode::from(1)
    }
}

fn run_review(config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    #[cfg(all(feature = "sqlite", feature = "insights"))]
    {
        use crate::adapters::gemini_adapter::GeminiAdapter;
        use crate::domain::config_validation::validate_review_config;
        use crate::domain::insight::{
            build_prompt, FALLBACK_EMPTY, FALLBACK_UNAVAILABLE, MAX_PROMPT_TRADES,
        };
        use crate::domain::profile::TraderProfile;
        use crate::ports::config_port::ConfigPort;
        use crate::ports::insight_port::InsightPort;
        use crate::ports::journal_port::JournalPort;

        if let Err(e) = validate_review_config(&config) {
            eprintln!("error: {e}");
            return (&e).into();
        }

        let journal = match open_journal(&config) {
            Ok(j) => j,
            Err(code) => return code,
        };

        let trades = match journal.list_trades() {
            Ok(t) => t,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

        if trades.is_empty() {
            println!("{FALLBACK_EMPTY}");
            return ExitCode::SUCCESS;
        }

        let profile = match journal.load_profile() {
            Ok(p) => p.unwrap_or_else(|| TraderProfile::new(0.0)),
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

        let max_trades =
            (config.get_int("gemini", "max_trades", 50) as usize).min(MAX_PROMPT_TRADES);
        let recent = &trades[trades.len().saturating_sub(max_trades)..];

        let prompt = match build_prompt(recent, &profile) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

        let adapter = match GeminiAdapter::from_config(&config) {
            Ok(a) => a,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

        eprintln!("Requesting review of {} trades...", recent.len());
        match adapter.generate(&prompt) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                println!("{FALLBACK_UNAVAILABLE}");
                ExitCode::SUCCESS
            }
        }
    }

    #[cfg(not(all(feature = "sqlite", feature = "insights")))]
    {
        let _ = config;
        eprintln!("error: sqlite and insights features are required for review");
        ExitCode::from(1)
    }
}
