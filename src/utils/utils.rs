use log;
use crate::error::{ConvertError, Result};
use crate::models::conversion::ConversionOutcome;

pub const LOG_LEVELS: [&str; 4] = ["debug", "info", "warn", "error"];

pub fn parse_log_level(log_level: &str) -> Result<log::LevelFilter> {
    match log_level {
        "debug" => Ok(log::LevelFilter::Debug),
        "info" => Ok(log::LevelFilter::Info),
        "warn" => Ok(log::LevelFilter::Warn),
        "error" => Ok(log::LevelFilter::Error),
        other => Err(ConvertError::InvalidArgument {
            arg: "log_level",
            value: other.to_string(),
        }),
    }
}

pub fn setup_logging(log_level: &str) -> Result<()> {
    let log_level_filter = parse_log_level(log_level)?;
    // 日誌可能已由呼叫端初始化（例如函式庫或測試）
    if env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .is_err()
    {
        log::debug!("日誌系統已初始化，略過");
    }
    Ok(())
}

/// 輸出單一工作的結果行
pub fn report_outcome(outcome: &ConversionOutcome) {
    println!("{}", outcome);
}
