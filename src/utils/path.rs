use std::path::{Path, PathBuf};

/// 計算輸出目錄，保留檔案所在目錄相對於掃描根目錄的結構
/// # 參數
/// - scan_root: 掃描的根目錄
/// - file_dir: 檔案所在的目錄
/// - destination_root: 輸出根目錄
/// # 回傳
/// - `destination_root` 加上相對路徑；`file_dir == scan_root` 時即為 `destination_root`
pub fn map_output_dir(scan_root: &Path, file_dir: &Path, destination_root: &Path) -> PathBuf {
    let relative = pathdiff::diff_paths(file_dir, scan_root).unwrap_or_default();
    if relative.as_os_str().is_empty() {
        destination_root.to_path_buf()
    } else {
        destination_root.join(relative)
    }
}
