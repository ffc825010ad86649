//! # process 命令实现
//!
//! 批量替换文本文件并输出 JSON 报告。
//!
//! ## 功能
//! - 从请求文档、`--files` 和 `--dir` 汇总输入文件
//! - 从请求文档、预设文件或内联 JSON 加载规则
//! - 逐个处理文件，每个输入路径对应一个结果
//! - 报告以 JSON 写到 stdout；请求本身无效时输出失败文档并以非零状态退出
//!
//! ## 依赖关系
//! - 使用 `cli/process.rs` 定义的参数
//! - 使用 `batch/`, `parsers/`, `encoding/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchResult, BatchRunner, FileCollector, FileProcessor, OutputPlacer};
use crate::cli::process::ProcessArgs;
use crate::encoding::EncodingResolver;
use crate::error::{Result, TextSwapError};
use crate::models::{ProcessResult, Response};
use crate::parsers;
use crate::substitution::RuleSet;
use crate::utils::output;

use std::path::PathBuf;
use tabled::{Table, Tabled};

/// 批处理配置
#[derive(Debug, Clone)]
struct BatchConfig {
    output_folder: String,
    extension: String,
    jobs: usize,
}

impl BatchConfig {
    fn from_args(args: &ProcessArgs) -> Result<Self> {
        let output_folder = args.output_folder.trim();
        if output_folder.is_empty() || output_folder.contains(['/', '\\']) || output_folder == ".." {
            return Err(TextSwapError::InvalidArgument(format!(
                "output folder must be a plain folder name, got '{}'",
                args.output_folder
            )));
        }

        let extension = args.extension.trim().trim_start_matches('.');
        if extension.is_empty() {
            return Err(TextSwapError::InvalidArgument(
                "extension must not be empty".to_string(),
            ));
        }

        Ok(Self {
            output_folder: output_folder.to_string(),
            extension: extension.to_string(),
            jobs: args.jobs,
        })
    }
}

/// 执行 process 命令
pub fn execute(args: ProcessArgs) -> Result<()> {
    match run(&args) {
        Ok(results) => print_response(&Response::Completed(results)),
        Err(e) => {
            print_response(&Response::Aborted(e.to_string()))?;
            Err(e)
        }
    }
}

fn run(args: &ProcessArgs) -> Result<Vec<ProcessResult>> {
    output::print_header("Text Replacement");

    let config = BatchConfig::from_args(args)?;
    let (files, rules) = gather_inputs(args, &config)?;

    if files.is_empty() {
        output::print_warning("No input files given.");
        return Ok(Vec::new());
    }
    if rules.is_empty() {
        output::print_warning("No replacement rules given; files will be copied unchanged.");
    }

    output::print_info(&format!(
        "Processing {} file(s) with {} rule(s)",
        files.len(),
        rules.len()
    ));

    let resolver = EncodingResolver::default();
    let placer = OutputPlacer::new(config.output_folder.as_str());
    let processor = FileProcessor::new(&rules, &resolver, &placer);

    let runner = BatchRunner::new(config.jobs).with_extension(&config.extension);
    let result = runner.run(&files, |path| processor.process(path))?;

    report(&result, args.summary);

    Ok(result.results)
}

/// 汇总输入文件和规则
fn gather_inputs(args: &ProcessArgs, config: &BatchConfig) -> Result<(Vec<PathBuf>, RuleSet)> {
    let mut files = Vec::new();

    let rules = match &args.json_input {
        Some(path) => {
            let request = parsers::load_request(path)?;
            files.extend(request.files);
            request.replacements
        }
        None => super::load_rules(&args.rules)?,
    };

    files.extend(args.files.iter().cloned());

    for dir in &args.dirs {
        let collected = FileCollector::new(dir.clone(), &config.extension)?
            .recursive(args.recursive)
            .collect();

        match collected {
            Ok(found) => {
                output::print_info(&format!(
                    "Found {} .{} file(s) in '{}'",
                    found.len(),
                    config.extension,
                    dir.display()
                ));
                files.extend(found);
            }
            Err(e) => output::print_warning(&format!("Skipping folder: {}", e)),
        }
    }

    Ok((files, rules))
}

/// 打印统计信息（stderr）
fn report(result: &BatchResult, summary: bool) {
    if summary {
        print_summary_table(&result.results);
    }

    output::print_separator();
    output::print_done(&format!(
        "Batch complete: {} success, {} failed",
        result.success, result.failed
    ));

    if result.failed > 0 {
        output::print_warning("Failed files:");
        for (path, err) in result.failures().take(10) {
            output::print_error(&format!("  {}: {}", path.display(), err));
        }
        if result.failed > 10 {
            output::print_warning(&format!("  ... and {} more", result.failed - 10));
        }
    }
}

/// 打印逐文件汇总表格
fn print_summary_table(results: &[ProcessResult]) {
    #[derive(Tabled)]
    struct SummaryRow {
        #[tabled(rename = "File")]
        file: String,
        #[tabled(rename = "Status")]
        status: &'static str,
        #[tabled(rename = "Encoding")]
        encoding: String,
        #[tabled(rename = "Replacements")]
        replacements: String,
        #[tabled(rename = "Output / Error")]
        detail: String,
    }

    let rows: Vec<SummaryRow> = results
        .iter()
        .map(|result| match result {
            ProcessResult::Success(report) => SummaryRow {
                file: report.file.display().to_string(),
                status: "ok",
                encoding: report.encoding_used.to_string(),
                replacements: report.total_replacements().to_string(),
                detail: report.new_file.display().to_string(),
            },
            ProcessResult::Failed { file, error } => SummaryRow {
                file: file.display().to_string(),
                status: "failed",
                encoding: "-".to_string(),
                replacements: "-".to_string(),
                detail: error.clone(),
            },
        })
        .collect();

    if !rows.is_empty() && !output::is_quiet() {
        eprintln!("{}", Table::new(&rows));
    }
}

/// 将响应文档写到 stdout
fn print_response(response: &Response) -> Result<()> {
    let json = serde_json::to_string_pretty(response).map_err(|e| TextSwapError::JsonError {
        what: "response".to_string(),
        source: e,
    })?;
    println!("{}", json);
    Ok(())
}
