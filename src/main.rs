use std::process;

use docx_to_md::action::cli::process_args;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    match process_args(args) {
        Ok(output) => {
            log::info!("程式執行完成，共處理 {} 個檔案", output.outcomes.len());
        }
        Err(e) => {
            eprintln!("錯誤：{}", e);
            process::exit(1);
        }
    }
}
