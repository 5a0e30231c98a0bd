//! # xtask - 开发辅助工具
//!
//! 提供本地质量门禁与开发辅助命令。
//!
//! ## 命令
//!
//! - `check-all`: 运行 fmt、clippy、test
//! - `cov`: 运行 slide-effect 覆盖率
//! - `preview`: 读取效果配置（JSON），输出起始/结束样式与过渡参数

use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use slide_effect::{Attachment, InlineStyle, SlideEffect, SlideOptions};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

fn run(step: &str, cmd: &mut Command) -> anyhow::Result<()> {
    info!("==> {step}");
    let status = cmd.status()?;
    if !status.success() {
        anyhow::bail!("{step} failed with {status}");
    }
    Ok(())
}

fn ensure_cargo_llvm_cov_available() -> anyhow::Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.args(["llvm-cov", "--version"]);
    let status = cmd.status();
    match status {
        Ok(s) if s.success() => Ok(()),
        _ => anyhow::bail!(
            "cargo llvm-cov 不可用。\n\
请先安装：\n\
  - cargo install cargo-llvm-cov\n\
  - rustup component add llvm-tools-preview\n\
然后重试。"
        ),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = real_main() {
        eprintln!("xtask error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let sub = args.next().unwrap_or_else(|| "help".to_string());

    match sub.as_str() {
        "check-all" => {
            let mut fmt = Command::new("cargo");
            fmt.args(["fmt", "--all", "--", "--check"]);
            run("cargo fmt --all -- --check", &mut fmt)?;

            let mut clippy = Command::new("cargo");
            clippy.args(["clippy", "--workspace", "--all-targets"]);
            run("cargo clippy --workspace --all-targets", &mut clippy)?;

            let mut test = Command::new("cargo");
            test.args(["test", "--workspace"]);
            run("cargo test --workspace", &mut test)?;
        }
        "cov" => {
            ensure_cargo_llvm_cov_available()?;

            let mut cov = Command::new("cargo");
            cov.args(["llvm-cov", "-p", "slide-effect", "--all-features", "--html"]);
            run(
                "cargo llvm-cov -p slide-effect --all-features --html",
                &mut cov,
            )?;

            eprintln!("\nCoverage HTML: target/llvm-cov/html/index.html");
        }
        "preview" => {
            let path = args
                .next()
                .ok_or_else(|| anyhow::anyhow!("preview 需要一个配置文件或目录"))?;
            preview(Path::new(&path))?;
        }
        "help" | "-h" | "--help" => {
            print_help();
        }
        other => anyhow::bail!("unknown xtask subcommand: {other}"),
    }

    Ok(())
}

fn print_help() {
    eprintln!(
        r#"xtask - 开发辅助工具

USAGE:
  cargo xtask <command>

COMMANDS:
  check-all       运行 fmt、clippy、test 门禁检查
  cov             运行 slide-effect 覆盖率报告
  preview <path>  预览效果配置

PREVIEW:
  cargo xtask preview effects/slide-left.json
  cargo xtask preview effects/

  路径为目录时递归处理其中所有 .json 文件。
  配置格式：
    {{ "direction": "left", "value": "5rem", "position": "absolute",
      "initValue": "0rem", "speed": 300 }}

  默认日志级别为 info；设置 RUST_LOG=debug 可查看每次样式写入。
"#
    );
}

//=============================================================================
// preview 命令实现
//=============================================================================

/// 预览一个配置文件或目录
fn preview(path: &Path) -> anyhow::Result<()> {
    let files = if path.is_dir() {
        collect_option_files(path)
    } else if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        anyhow::bail!("路径不存在: {}", path.display());
    };

    if files.is_empty() {
        warn!(path = %path.display(), "未找到配置文件（.json）");
        return Ok(());
    }

    info!("==> 预览 {} 个配置文件", files.len());
    let mut failed = 0;
    for file in &files {
        if let Err(e) = preview_file(file) {
            error!(file = %file.display(), "{e:#}");
            failed += 1;
        }
    }

    eprintln!("─────────────────────────────────────────────────────");
    if failed > 0 {
        anyhow::bail!("{} / {} 个配置无效", failed, files.len());
    }
    eprintln!("✅ {} 个配置全部有效", files.len());
    Ok(())
}

/// 收集目录下的所有 .json 文件
fn collect_option_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// 预览单个配置文件
fn preview_file(file: &Path) -> anyhow::Result<()> {
    info!(file = %file.display(), "读取配置");
    let content = std::fs::read_to_string(file)?;
    let options = SlideOptions::from_json(&content)?;
    let effect = SlideEffect::from_options(options)?;

    let mut style = InlineStyle::new();
    let initial = effect.initial_style();
    let spec = Attachment::new(&effect, &mut style).finish()?;
    let end = effect.end_style()?;

    println!("{}", file.display());
    println!("  before:     {}", initial);
    println!("  contents:   {}", end);
    println!("  transition: {} {}ms", spec.axis, spec.millis());
    println!("  json:       {}", serde_json::to_string(&spec)?);
    Ok(())
}
