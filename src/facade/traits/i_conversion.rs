use crate::config::ports::AppConfig;
use crate::error::Result;
use crate::models::conversion::ConversionOutput;

// Facade 接口，負責協調檔案轉換流程
pub trait ConversionFacadeTrait: Send + Sync {
    /// 依來源路徑的種類選擇單檔或目錄模式並執行轉換
    /// # 參數
    /// - config: 已解析的應用配置
    /// # 回傳
    /// - 成功時返回所有工作的結果；路徑無效或單檔轉換失敗時返回錯誤
    fn execute_conversion(&self, config: &AppConfig) -> Result<ConversionOutput>;
}
