use std::path::PathBuf;

/// 單一轉換工作：一個來源文件與其輸出目錄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
}

impl ConversionJob {
    pub fn new(input_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        ConversionJob {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
        }
    }

    /// 不含副檔名的檔名，例如 `report.docx` -> `report`
    pub fn base_name(&self) -> String {
        self.input_path
            .file_stem()
            .unwrap_or_else(|| self.input_path.as_os_str())
            .to_string_lossy()
            .to_string()
    }

    pub fn markdown_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.md", self.base_name()))
    }

    // pandoc 預設的媒體擷取目錄名稱
    pub fn media_dir(&self) -> PathBuf {
        self.output_dir.join(format!("{}_files", self.base_name()))
    }
}
