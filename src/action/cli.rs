use std::path::PathBuf;
use clap::Parser;
use crate::config::config::{normalize_legacy_flags, Cli};
use crate::config::ports::{AppConfig, ConfigPort};
use crate::error::{ConvertError, Result};
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::ConversionOutput;
use crate::service::config_service::ConfigService;
use crate::service::file::FileService;
use crate::service::pandoc::PandocService;
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> Result<ConversionOutput> {
    let cli = Cli::parse_from(normalize_legacy_flags(args));
    process_cli(cli)
}

pub fn process_cli(cli: Cli) -> Result<ConversionOutput> {
    setup_logging(&cli.log_level)?;

    let config_service = ConfigService::new(Box::new(CliConfigAdapter::new(cli)));
    let config = config_service.get_config()?;
    log::debug!("實際使用的配置：{:?}", config);

    let facade: Box<dyn ConversionFacadeTrait> = Box::new(ConversionFacade::new(
        Box::new(FileService::new()),
        Box::new(PandocService::new(&config.converter, config.converter_args.clone())),
    ));
    facade.execute_conversion(&config)
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> Result<AppConfig> {
        if self.cli.max_workers == 0 {
            return Err(ConvertError::InvalidArgument {
                arg: "max_workers",
                value: self.cli.max_workers.to_string(),
            });
        }
        if self.cli.converter.trim().is_empty() {
            return Err(ConvertError::InvalidArgument {
                arg: "converter",
                value: self.cli.converter.clone(),
            });
        }

        Ok(AppConfig {
            source: PathBuf::from(&self.cli.source),
            destination: PathBuf::from(&self.cli.destination),
            max_workers: self.cli.max_workers,
            converter: self.cli.converter.clone(),
            converter_args: self.cli.converter_args.clone(),
            log_level: self.cli.log_level.clone(),
        })
    }
}
