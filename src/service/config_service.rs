use crate::config::ports::{AppConfig, ConfigPort};
use crate::error::Result;

// 配置服務，持有配置來源的適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> Result<AppConfig> {
        self.config_port.get_config()
    }
}
