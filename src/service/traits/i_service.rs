use crate::error::Result;
use crate::models::conversion::ConversionOutcome;
use crate::models::file::{FileCollectInput, FileCollectOutput};
use crate::models::job::ConversionJob;

// File 服務接口，負責掃描目錄並建立轉換工作
pub trait FileServiceTrait: Send + Sync {
    /// 遞迴掃描目錄，收集可轉換的文件
    /// # 參數
    /// - input: 掃描根目錄與輸出根目錄
    /// # 回傳
    /// - 成功時返回轉換工作列表，根目錄無效時返回錯誤
    fn collect_files(&self, input: FileCollectInput) -> Result<FileCollectOutput>;
}

// 轉換器服務接口，負責呼叫外部轉換程式
pub trait ConverterServiceTrait: Send + Sync {
    /// 轉換單一文件，失敗不會以錯誤返回，而是記錄在結果中
    fn convert(&self, job: ConversionJob) -> ConversionOutcome;
}
