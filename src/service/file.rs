use std::fs;
use std::path::Path;
use log::{debug, info, warn};
use walkdir::WalkDir;
use crate::error::{ConvertError, Result};
use crate::models::file::{FileCollectInput, FileCollectOutput};
use crate::models::job::ConversionJob;
use crate::service::traits::i_service::FileServiceTrait;
use crate::utils::path::map_output_dir;

const SUPPORTED_EXTENSIONS: [&str; 2] = ["docx", "doc"];

/// 判斷副檔名是否為可轉換的文件（不分大小寫）
/// 以檔名結尾比對，因此名為 `.docx` 的檔案也會被轉換
pub fn is_convertible(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_ascii_lowercase())
        .map(|name| SUPPORTED_EXTENSIONS.iter().any(|ext| name.ends_with(&format!(".{}", ext))))
        .unwrap_or(false)
}

/// 目錄掃描服務，實現 FileServiceTrait
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        FileService
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

impl FileServiceTrait for FileService {
    fn collect_files(&self, input: FileCollectInput) -> Result<FileCollectOutput> {
        let scan_root = &input.scan_root;
        if !scan_root.is_dir() {
            return Err(ConvertError::InvalidDirectory { path: scan_root.clone() });
        }
        if !input.destination.is_dir() {
            return Err(ConvertError::InvalidDestination { path: input.destination.clone() });
        }

        let mut jobs = Vec::new();
        let mut skipped_entries = 0;
        for entry in WalkDir::new(scan_root).follow_links(false).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("無法讀取目錄項目，跳過：{}", e);
                    skipped_entries += 1;
                    continue;
                }
            };
            let path = entry.path();
            // 指向檔案的符號連結也算在內
            if !path.is_file() || !is_convertible(path) {
                continue;
            }
            let file_dir = path.parent().unwrap_or(scan_root);
            let output_dir = map_output_dir(scan_root, file_dir, &input.destination);
            fs::create_dir_all(&output_dir)?;
            debug!("找到文件：{} -> {}", path.display(), output_dir.display());
            jobs.push(ConversionJob::new(path, output_dir));
        }

        info!("掃描完成：{}，共 {} 個文件", scan_root.display(), jobs.len());
        Ok(FileCollectOutput { jobs, skipped_entries })
    }
}
