use clap::Parser;
use crate::facade::dispatcher::DEFAULT_MAX_WORKERS;
use crate::service::pandoc::DEFAULT_CONVERTER;
use crate::utils::utils::LOG_LEVELS;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "convert",
    about = "將 DOCX/DOC 文件轉換為 Markdown",
    long_about = "使用 pandoc 將單一文件或整個目錄樹中的 DOCX/DOC 文件轉換為 Markdown，並擷取內嵌媒體。\n目錄模式會在目的地保留來源的子目錄結構，並以多個工作執行緒平行轉換。\n使用 `--help` 查看詳細用法。",
    arg_required_else_help = true
)]
pub struct Cli {
    /// 要轉換的文件或包含文件的目錄
    #[arg(long = "source", visible_alias = "src")]
    pub source: String,
    /// 存放 Markdown 與媒體檔案的目錄
    #[arg(long = "destination", visible_alias = "dest")]
    pub destination: String,
    /// 平行轉換的工作執行緒數量
    #[arg(
        long = "max-workers",
        visible_alias = "workers",
        default_value_t = DEFAULT_MAX_WORKERS,
        value_parser = parse_max_workers
    )]
    pub max_workers: usize,
    /// 轉換程式
    #[arg(long, default_value = DEFAULT_CONVERTER)]
    pub converter: String,
    /// 傳給轉換程式的額外參數，可重複指定
    #[arg(long = "converter-arg", allow_hyphen_values = true)]
    pub converter_args: Vec<String>,
    #[arg(long, default_value = "info", value_parser = LOG_LEVELS)]
    pub log_level: String,
}

pub fn parse_max_workers(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("工作執行緒數量必須大於 0".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("無效的工作執行緒數量 '{}': {}", value, e)),
    }
}

const CONVERTER_ARG_FLAG: &str = "--converter-arg";

// 單一連字號的舊式長參數
const LEGACY_FLAGS: [(&str, &str); 3] = [
    ("-src", "--src"),
    ("-dest", "--dest"),
    ("-workers", "--workers"),
];

/// 將 `-src`、`-dest`、`-workers` 改寫為 clap 可解析的雙連字號形式
pub fn normalize_legacy_flags(args: Vec<String>) -> Vec<String> {
    let mut value_follows = false;
    args.into_iter()
        .map(|arg| {
            // `--converter-arg` 的值原樣傳給轉換程式
            if value_follows {
                value_follows = false;
                return arg;
            }
            if arg == CONVERTER_ARG_FLAG {
                value_follows = true;
                return arg;
            }
            for (legacy, modern) in LEGACY_FLAGS {
                if arg == legacy {
                    return modern.to_string();
                }
                if let Some(value) = arg.strip_prefix(legacy).and_then(|rest| rest.strip_prefix('=')) {
                    return format!("{}={}", modern, value);
                }
            }
            arg
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_legacy_flags() {
        let out = normalize_legacy_flags(args(&[
            "convert", "-src", "in", "-dest=out", "-workers", "2", "--source-like", "-srcx",
        ]));
        assert_eq!(
            out,
            args(&["convert", "--src", "in", "--dest=out", "--workers", "2", "--source-like", "-srcx"])
        );
    }

    #[test]
    fn test_converter_arg_values_are_not_rewritten() {
        let out = normalize_legacy_flags(args(&[
            "convert", "--converter-arg", "-src", "-src", "in", "--converter-arg=-dest",
        ]));
        assert_eq!(
            out,
            args(&["convert", "--converter-arg", "-src", "--src", "in", "--converter-arg=-dest"])
        );
        let cli = Cli::try_parse_from(normalize_legacy_flags(args(&[
            "convert", "-src", "in", "-dest", "out", "--converter-arg", "-workers",
        ])))
        .unwrap();
        assert_eq!(cli.converter_args, args(&["-workers"]));
        assert_eq!(cli.max_workers, 4);
    }

    #[test]
    fn test_parse_legacy_spelling() {
        let cli = Cli::try_parse_from(normalize_legacy_flags(args(&[
            "convert", "-src", "docs", "-dest", "out", "-workers", "8",
        ])))
        .unwrap();
        assert_eq!(cli.source, "docs");
        assert_eq!(cli.destination, "out");
        assert_eq!(cli.max_workers, 8);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(args(&["convert", "--source", "a.docx", "--destination", "out"])).unwrap();
        assert_eq!(cli.max_workers, 4);
        assert_eq!(cli.converter, "pandoc");
        assert!(cli.converter_args.is_empty());
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_converter_args_accept_hyphen_values() {
        let cli = Cli::try_parse_from(args(&[
            "convert", "--src", "a", "--dest", "b", "--converter-arg", "--wrap=none",
            "--converter-arg", "--markdown-headings=atx",
        ]))
        .unwrap();
        assert_eq!(cli.converter_args, args(&["--wrap=none", "--markdown-headings=atx"]));
    }

    #[test]
    fn test_rejects_zero_workers_and_missing_source() {
        assert!(Cli::try_parse_from(args(&["convert", "--src", "a", "--dest", "b", "--workers", "0"])).is_err());
        assert!(Cli::try_parse_from(args(&["convert", "--dest", "b"])).is_err());
    }
}
