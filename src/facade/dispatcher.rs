use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::thread;
use log::{error, info};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use crate::error::{ConvertError, Result};
use crate::models::conversion::ConversionOutcome;
use crate::models::job::ConversionJob;
use crate::service::traits::i_service::ConverterServiceTrait;

pub const DEFAULT_MAX_WORKERS: usize = 4;

/// 以固定大小的執行緒池平行轉換所有工作
/// # 參數
/// - converter: 轉換器服務
/// - jobs: 掃描得到的轉換工作
/// - max_workers: 同時執行的工作上限
/// - report: 每個工作完成時立即呼叫，順序為完成順序
/// # 回傳
/// - 所有工作的結果（完成順序）；單一工作失敗不會中斷批次
pub fn run_all<C, F>(
    converter: &C,
    jobs: Vec<ConversionJob>,
    max_workers: usize,
    mut report: F,
) -> Result<Vec<ConversionOutcome>>
where
    C: ConverterServiceTrait + ?Sized,
    F: FnMut(&ConversionOutcome),
{
    if max_workers == 0 {
        return Err(ConvertError::InvalidArgument {
            arg: "max_workers",
            value: max_workers.to_string(),
        });
    }

    let total = jobs.len();
    if total == 0 {
        return Ok(Vec::new());
    }
    // 執行緒數不超過工作數
    let workers = max_workers.min(total);
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("convert-worker-{}", i))
        .build()?;
    info!("開始平行轉換 {} 個文件，工作執行緒數：{}", total, workers);

    let (tx, rx) = mpsc::channel();
    let mut outcomes = Vec::with_capacity(total);
    thread::scope(|scope| {
        scope.spawn(move || {
            pool.install(|| {
                jobs.into_par_iter().for_each_with(tx, |tx, job| {
                    let outcome = convert_isolated(converter, job);
                    // 接收端只會在所有結果送達後才關閉
                    let _ = tx.send(outcome);
                });
            });
        });

        for outcome in rx {
            report(&outcome);
            outcomes.push(outcome);
        }
    });

    Ok(outcomes)
}

// 工作內的 panic 轉為失敗結果，不跨越執行緒池邊界
fn convert_isolated<C>(converter: &C, job: ConversionJob) -> ConversionOutcome
where
    C: ConverterServiceTrait + ?Sized,
{
    let fallback = job.clone();
    match panic::catch_unwind(AssertUnwindSafe(|| converter.convert(job))) {
        Ok(outcome) => outcome,
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "未知錯誤".to_string());
            error!("轉換 {} 時發生 panic：{}", fallback.input_path.display(), reason);
            ConversionOutcome::failure(fallback, format!("轉換過程發生 panic：{}", reason))
        }
    }
}
