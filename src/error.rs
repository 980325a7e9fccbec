use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

// 轉換流程的錯誤類型
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("來源路徑無效：{}", .path.display())]
    InvalidSource { path: PathBuf },

    #[error("目的地不是目錄：{}", .path.display())]
    InvalidDestination { path: PathBuf },

    #[error("目錄路徑無效：{}", .path.display())]
    InvalidDirectory { path: PathBuf },

    #[error("無效的參數：{arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("轉換 {} 失敗：{detail}", .input.display())]
    ConversionFailure { input: PathBuf, detail: String },

    #[error("I/O 錯誤：{0}")]
    Io(#[from] std::io::Error),

    #[error("無法建立工作執行緒池：{0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
