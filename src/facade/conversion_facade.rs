use std::fs;
use std::path::{Path, PathBuf};
use log::{info, warn};
use crate::config::ports::AppConfig;
use crate::error::{ConvertError, Result};
use crate::facade::dispatcher::run_all;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionMode, ConversionOutcome, ConversionOutput};
use crate::models::file::FileCollectInput;
use crate::models::job::ConversionJob;
use crate::service::file::is_convertible;
use crate::service::traits::i_service::{ConverterServiceTrait, FileServiceTrait};
use crate::utils::utils::report_outcome;

type Reporter = Box<dyn Fn(&ConversionOutcome) + Send + Sync>;

pub struct ConversionFacade {
    file_service: Box<dyn FileServiceTrait>,
    converter: Box<dyn ConverterServiceTrait>,
    reporter: Reporter,
}

impl ConversionFacade {
    pub fn new(
        file_service: Box<dyn FileServiceTrait>,
        converter: Box<dyn ConverterServiceTrait>,
    ) -> Self {
        ConversionFacade {
            file_service,
            converter,
            reporter: Box::new(report_outcome),
        }
    }

    /// 替換預設的結果輸出方式
    pub fn with_reporter(mut self, reporter: impl Fn(&ConversionOutcome) + Send + Sync + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn execute_conversion(&self, config: &AppConfig) -> Result<ConversionOutput> {
        let source = &config.source;
        if source.is_file() {
            info!("單檔模式，輸入檔案：{}，輸出目錄：{}", source.display(), config.destination.display());
            self.process_single(source, &config.destination)
        } else if source.is_dir() {
            info!(
                "目錄模式，輸入目錄：{}，輸出目錄：{}，工作執行緒：{}",
                source.display(),
                config.destination.display(),
                config.max_workers
            );
            self.process_directory(source, &config.destination, config.max_workers)
        } else {
            Err(ConvertError::InvalidSource { path: source.clone() })
        }
    }
}

impl ConversionFacade {
    fn process_single(&self, source: &Path, destination: &Path) -> Result<ConversionOutput> {
        if !destination.is_dir() {
            return Err(ConvertError::InvalidDestination { path: destination.to_path_buf() });
        }
        if !is_convertible(source) {
            warn!("檔案不是 .docx 或 .doc，仍嘗試轉換：{}", source.display());
        }

        let job = ConversionJob::new(fs::canonicalize(source)?, fs::canonicalize(destination)?);
        let outcome = self.converter.convert(job);

        // 單檔模式下轉換失敗即為整體失敗，只由最外層輸出一次錯誤
        if let Some(detail) = outcome.detail() {
            return Err(ConvertError::ConversionFailure {
                input: outcome.job.input_path.clone(),
                detail: detail.to_string(),
            });
        }
        (self.reporter)(&outcome);
        Ok(ConversionOutput {
            mode: ConversionMode::SingleFile,
            outcomes: vec![outcome],
        })
    }

    fn process_directory(
        &self,
        source: &Path,
        destination: &Path,
        max_workers: usize,
    ) -> Result<ConversionOutput> {
        let scan_root = fs::canonicalize(source)?;
        let destination = absolute_if_dir(destination)?;
        let file_output = self.file_service.collect_files(FileCollectInput {
            scan_root,
            destination,
        })?;
        if file_output.skipped_entries > 0 {
            warn!("掃描時跳過 {} 個無法讀取的項目", file_output.skipped_entries);
        }

        if file_output.jobs.is_empty() {
            warn!("無符合條件的檔案可處理");
            return Ok(ConversionOutput {
                mode: ConversionMode::Directory,
                outcomes: Vec::new(),
            });
        }

        let outcomes = run_all(self.converter.as_ref(), file_output.jobs, max_workers, |o| (self.reporter)(o))?;
        let output = ConversionOutput {
            mode: ConversionMode::Directory,
            outcomes,
        };
        info!("批次轉換完成，成功：{}，失敗：{}", output.succeeded(), output.failed());
        if output.failed() > 0 {
            warn!("有 {} 個檔案轉換失敗，請查看上方輸出", output.failed());
        }
        Ok(output)
    }
}

// 不存在的目的地留給掃描器回報為無效目的地
fn absolute_if_dir(path: &Path) -> Result<PathBuf> {
    if path.is_dir() {
        Ok(fs::canonicalize(path)?)
    } else {
        Ok(path.to_path_buf())
    }
}
