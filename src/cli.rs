// ==========================================
// B-chain 补货助手 - 命令行入口
// ==========================================
// 职责: 解析参数 → 加载配置 → 调用 RestockApi → 渲染输出
// 报告写 stdout，日志与错误写 stderr
// ==========================================

use crate::api::{RestockApi, RestockRun};
use crate::config::AppConfig;
use crate::domain::WindowCoverage;
use crate::engine::trend_summary::format_quantity;
use crate::i18n::{self, t_in, t_in_with_args};
use crate::logging::{self, LogFormat};
use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(
    name = "bchain-restock",
    version,
    about = "B-chain consumables restocking recommendations",
    long_about = "Compute per-item restock quantities from a daily consumption log and an inventory snapshot.",
    after_help = "Examples:\n  bchain-restock --consumption usage.xlsx --inventory stock.xlsx\n  bchain-restock --consumption usage.csv --inventory stock.csv --format json --locale en"
)]
pub struct Cli {
    #[arg(long, help = "Daily consumption log (.csv, .xlsx, .xls)")]
    pub consumption: PathBuf,

    #[arg(long, help = "Inventory snapshot (.csv, .xlsx, .xls)")]
    pub inventory: PathBuf,

    #[arg(long, help = "JSON config file with catalog and default parameters")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Days used as the daily-average divisor (1-30)")]
    pub daily_avg_days: Option<u32>,

    #[arg(long, help = "Production lead time in days")]
    pub production_days: Option<u32>,

    #[arg(long, help = "Shipping lead time in days")]
    pub shipping_days: Option<u32>,

    #[arg(long, help = "Safety buffer in days")]
    pub safety_days: Option<u32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[arg(long, default_value = i18n::DEFAULT_LOCALE, help = "Report language (zh-CN or en)")]
    pub locale: String,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,
}

impl Cli {
    /// 命令行参数覆盖配置文件中的参数
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        let params = &mut config.params;
        if let Some(v) = self.daily_avg_days {
            params.daily_avg_days = v;
        }
        if let Some(v) = self.production_days {
            params.production_days = v;
        }
        if let Some(v) = self.shipping_days {
            params.shipping_days = v;
        }
        if let Some(v) = self.safety_days {
            params.safety_days = v;
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let log_format = if cli.log_json { LogFormat::Json } else { LogFormat::Text };
    logging::init("info", log_format);

    match execute(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}: {:#}", t_in(&cli.locale, "common.failed"), err);
            ExitCode::from(1)
        }
    }
}

/// 执行一次计算并返回渲染后的输出
pub fn execute(cli: &Cli) -> anyhow::Result<String> {
    if !i18n::is_supported(&cli.locale) {
        bail!("unsupported locale: {}", cli.locale);
    }

    let mut config = AppConfig::load(cli.config.as_deref()).context("failed to load config")?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let api = RestockApi::new(config).with_locale(cli.locale.clone());
    let run = api.run_from_files(&cli.consumption, &cli.inventory)?;

    let output = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&run)?,
        OutputFormat::Markdown => api.render_markdown(&run),
        OutputFormat::Table => render_table(&run, api.locale()),
    };
    Ok(output)
}

// ==========================================
// 表格渲染
// ==========================================

/// 渲染纯文本结果表
pub fn render_table(run: &RestockRun, locale: &str) -> String {
    let report = &run.report;
    let mut out = String::new();

    let _ = writeln!(out, "{}", t_in(locale, "report.title"));
    let _ = writeln!(
        out,
        "{}",
        t_in_with_args(
            locale,
            "report.lead_days",
            &[
                ("days", &report.total_lead_days.to_string()),
                ("production", &report.params.production_days.to_string()),
                ("shipping", &report.params.shipping_days.to_string()),
                ("safety", &report.params.safety_days.to_string()),
            ],
        )
    );
    let _ = writeln!(
        out,
        "{}",
        t_in_with_args(
            locale,
            "report.usage_comparison",
            &[("start", &report.window.start.to_string()), ("end", &report.window.end.to_string())],
        )
    );
    if report.window.coverage == WindowCoverage::Partial {
        let _ = writeln!(
            out,
            "{}",
            t_in_with_args(
                locale,
                "report.partial_window",
                &[
                    ("week1", &report.window.week1_days.to_string()),
                    ("week2", &report.window.week2_days.to_string()),
                ],
            )
        );
    }
    out.push('\n');

    let headers = [
        t_in(locale, "report.item"),
        t_in(locale, "report.growth_multiplier"),
        t_in(locale, "report.restock_qty"),
        t_in(locale, "report.stock_total"),
        t_in(locale, "report.needs_restock"),
        t_in(locale, "report.suggested_qty"),
    ];
    let dampened = t_in(locale, "report.dampened");
    let (yes, no) = (t_in(locale, "report.yes"), t_in(locale, "report.no"));

    let rows: Vec<[String; 6]> = report
        .rows
        .iter()
        .map(|r| {
            let multiplier = if r.growth_dampened {
                format!("{:.4} ({})", r.growth_multiplier, dampened)
            } else {
                format!("{:.4}", r.growth_multiplier)
            };
            [
                r.item_id.clone(),
                multiplier,
                r.restock_qty.to_string(),
                format_quantity(r.stock_on_hand_total),
                if r.needs_restock { yes.clone() } else { no.clone() },
                r.suggested_reorder_qty.to_string(),
            ]
        })
        .collect();

    let mut widths = headers.clone().map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: &[String; 6]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let _ = writeln!(out, "{}", line(&headers).trim_end());
    for row in &rows {
        let _ = writeln!(out, "{}", line(row).trim_end());
    }

    out
}
