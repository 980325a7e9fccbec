use std::path::PathBuf;
use crate::error::Result;

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub max_workers: usize,
    pub converter: String,
    pub converter_args: Vec<String>,
    pub log_level: String,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> Result<AppConfig>;
}
