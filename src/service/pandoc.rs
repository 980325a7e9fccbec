use std::ffi::OsString;
use std::process::Command;
use log::{debug, warn};
use crate::error::{ConvertError, Result};
use crate::models::conversion::ConversionOutcome;
use crate::models::job::ConversionJob;
use crate::service::traits::i_service::ConverterServiceTrait;

pub const DEFAULT_CONVERTER: &str = "pandoc";

/// 透過外部 pandoc 程式轉換文件，實現 ConverterServiceTrait
pub struct PandocService {
    program: OsString,
    extra_args: Vec<OsString>,
}

impl PandocService {
    /// 創建新的 PandocService
    /// # 參數
    /// - program: 轉換程式路徑或名稱
    /// - extra_args: 放在標準參數之前的額外參數
    pub fn new(program: impl Into<OsString>, extra_args: Vec<String>) -> Self {
        PandocService {
            program: program.into(),
            extra_args: extra_args.into_iter().map(OsString::from).collect(),
        }
    }

    /// 建立轉換命令：擷取媒體至 `<base>_files`，輸出獨立的 `<base>.md`
    pub fn build_command(&self, job: &ConversionJob) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.extra_args)
            .arg("--extract-media")
            .arg(job.media_dir())
            .arg("-s")
            .arg(&job.input_path)
            .arg("-o")
            .arg(job.markdown_path());
        cmd
    }

    fn run(&self, job: &ConversionJob) -> Result<()> {
        let md_path = job.markdown_path();
        if md_path.exists() {
            warn!("輸出檔案已存在，將被覆寫：{}", md_path.display());
        }

        let mut cmd = self.build_command(job);
        debug!("轉換命令：{:?}", cmd);

        let output = cmd.output().map_err(|e| ConvertError::ConversionFailure {
            input: job.input_path.clone(),
            detail: format!("無法執行 {}：{}", self.program.to_string_lossy(), e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let detail = if stderr.is_empty() {
                format!("{}", output.status)
            } else {
                format!("{}：{}", output.status, stderr)
            };
            return Err(ConvertError::ConversionFailure { input: job.input_path.clone(), detail });
        }
        Ok(())
    }
}

impl Default for PandocService {
    fn default() -> Self {
        Self::new(DEFAULT_CONVERTER, Vec::new())
    }
}

impl ConverterServiceTrait for PandocService {
    fn convert(&self, job: ConversionJob) -> ConversionOutcome {
        match self.run(&job) {
            Ok(()) => ConversionOutcome::success(job),
            Err(ConvertError::ConversionFailure { detail, .. }) => ConversionOutcome::failure(job, detail),
            Err(e) => ConversionOutcome::failure(job, e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn job() -> ConversionJob {
        ConversionJob::new("/src/a/b/doc.DOCX", "/out/a/b")
    }

    #[test]
    fn test_build_command_arguments() {
        let cmd = PandocService::default().build_command(&job());
        assert_eq!(cmd.get_program(), OsStr::new("pandoc"));
        let args: Vec<&OsStr> = cmd.get_args().collect();
        assert_eq!(
            args,
            vec![
                OsStr::new("--extract-media"),
                OsStr::new("/out/a/b/doc_files"),
                OsStr::new("-s"),
                OsStr::new("/src/a/b/doc.DOCX"),
                OsStr::new("-o"),
                OsStr::new("/out/a/b/doc.md"),
            ]
        );
    }

    #[test]
    fn test_extra_args_come_first() {
        let service = PandocService::new("pandoc", vec!["--wrap=none".to_string()]);
        let cmd = service.build_command(&job());
        let first = cmd.get_args().next();
        assert_eq!(first, Some(OsStr::new("--wrap=none")));
        assert_eq!(cmd.get_args().count(), 7);
    }

    #[test]
    fn test_launch_failure_is_reported_not_raised() {
        let service = PandocService::new("definitely-not-a-real-converter-binary", Vec::new());
        let outcome = service.convert(job());
        assert!(!outcome.is_success());
        assert!(outcome.detail().unwrap().contains("definitely-not-a-real-converter-binary"));
        assert!(outcome.to_string().contains("/src/a/b/doc.DOCX"));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_classifies_outcome() {
        let dir = tempfile::TempDir::new().unwrap();
        let job = ConversionJob::new("/src/doc.docx", dir.path());

        let ok = PandocService::new("true", Vec::new()).convert(job.clone());
        assert!(ok.is_success());

        let failed = PandocService::new("false", Vec::new()).convert(job);
        assert!(!failed.is_success());
        assert!(failed.to_string().contains("/src/doc.docx"));
    }

    #[cfg(unix)]
    #[test]
    fn test_stderr_is_part_of_diagnostic() {
        let dir = tempfile::TempDir::new().unwrap();
        let script = "echo 'unknown input format' >&2; exit 64";
        let service = PandocService::new("sh", vec!["-c".to_string(), script.to_string()]);
        let outcome = service.convert(ConversionJob::new("/src/bad.doc", dir.path()));
        let detail = outcome.detail().unwrap();
        assert!(detail.contains("unknown input format"));
        assert!(detail.contains("64"));
    }
}
