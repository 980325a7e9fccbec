use std::fmt;
use crate::models::job::ConversionJob;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionStatus {
    Success,
    Failure { detail: String },
}

/// 單一工作的轉換結果，建立後不再變動
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub job: ConversionJob,
    pub status: ConversionStatus,
}

impl ConversionOutcome {
    pub fn success(job: ConversionJob) -> Self {
        ConversionOutcome { job, status: ConversionStatus::Success }
    }

    pub fn failure(job: ConversionJob, detail: impl Into<String>) -> Self {
        ConversionOutcome {
            job,
            status: ConversionStatus::Failure { detail: detail.into() },
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ConversionStatus::Success
    }

    pub fn detail(&self) -> Option<&str> {
        match &self.status {
            ConversionStatus::Success => None,
            ConversionStatus::Failure { detail } => Some(detail),
        }
    }
}

// 主控台輸出的單行訊息
impl fmt::Display for ConversionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            ConversionStatus::Success => write!(
                f,
                "成功轉換 {} 為 {}，媒體檔案已擷取至 {}",
                self.job.input_path.display(),
                self.job.markdown_path().display(),
                self.job.media_dir().display()
            ),
            ConversionStatus::Failure { detail } => write!(
                f,
                "轉換失敗：{}：{}",
                self.job.input_path.display(),
                detail
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionMode {
    SingleFile,
    Directory,
}

#[derive(Debug)]
pub struct ConversionOutput {
    pub mode: ConversionMode,
    pub outcomes: Vec<ConversionOutcome>,
}

impl ConversionOutput {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_line_names_all_three_paths() {
        let outcome = ConversionOutcome::success(ConversionJob::new("/in/report.docx", "/out"));
        let line = outcome.to_string();
        assert!(line.contains("/in/report.docx"));
        assert!(line.contains("/out/report.md"));
        assert!(line.contains("/out/report_files"));
        assert_eq!(outcome.detail(), None);
    }

    #[test]
    fn test_failure_line_carries_detail() {
        let outcome = ConversionOutcome::failure(
            ConversionJob::new("/in/broken.doc", "/out"),
            "exit status: 64",
        );
        assert!(!outcome.is_success());
        assert!(outcome.to_string().contains("/in/broken.doc"));
        assert!(outcome.to_string().contains("exit status: 64"));
    }

    #[test]
    fn test_output_counts() {
        let output = ConversionOutput {
            mode: ConversionMode::Directory,
            outcomes: vec![
                ConversionOutcome::success(ConversionJob::new("/a.docx", "/out")),
                ConversionOutcome::failure(ConversionJob::new("/b.docx", "/out"), "boom"),
                ConversionOutcome::success(ConversionJob::new("/c.doc", "/out")),
            ],
        };
        assert_eq!(output.succeeded(), 2);
        assert_eq!(output.failed(), 1);
    }
}
