// ==========================================
// 学位规划系统 - 命令行入口
// ==========================================
// 用法:
//   degree-planner <catalog.json|csv|xlsx> [--requirements <file>] [--presets <file>]
//                  [--preset <id>] [--major <id>] [--db <path>] [--save <name>]
//                  [--export <file.csv>] [--json-log]
// ==========================================

use anyhow::{bail, Context};
use degree_planner::api::PlannerApi;
use degree_planner::config::{default_db_path, ConfigManager, PlannerConfig, PlannerConfigReader};
use degree_planner::i18n::{set_locale, t, t_with_args};
use degree_planner::importer::{FileDataSource, PlannerDataSource};
use degree_planner::repository::ScheduleRepository;
use degree_planner::{logging, APP_NAME, VERSION};
use std::path::PathBuf;

#[derive(Debug, Default)]
struct CliArgs {
    catalog: PathBuf,
    requirements: Option<PathBuf>,
    presets: Option<PathBuf>,
    preset_id: Option<String>,
    major_id: Option<String>,
    db_path: Option<PathBuf>,
    save_name: Option<String>,
    export_path: Option<PathBuf>,
    json_log: bool,
}

fn parse_args() -> anyhow::Result<CliArgs> {
    let mut args = std::env::args().skip(1);
    let mut cli = CliArgs::default();
    let mut catalog = None;

    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .with_context(|| format!("参数 {} 缺少取值", name))
        };
        match arg.as_str() {
            "--requirements" => cli.requirements = Some(value("--requirements")?.into()),
            "--presets" => cli.presets = Some(value("--presets")?.into()),
            "--preset" => cli.preset_id = Some(value("--preset")?),
            "--major" => cli.major_id = Some(value("--major")?),
            "--db" => cli.db_path = Some(value("--db")?.into()),
            "--save" => cli.save_name = Some(value("--save")?),
            "--export" => cli.export_path = Some(value("--export")?.into()),
            "--json-log" => cli.json_log = true,
            other if other.starts_with("--") => bail!("未知参数: {}", other),
            other => catalog = Some(PathBuf::from(other)),
        }
    }

    cli.catalog = catalog.context("缺少课程目录文件路径")?;
    Ok(cli)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = parse_args()?;
    if cli.json_log {
        logging::init_json();
    } else {
        logging::init();
    }

    tracing::info!("{} v{}", APP_NAME, VERSION);

    // 配置: 指定数据库时读取 config_kv 覆写
    let db_path = cli.db_path.clone().or_else(|| {
        cli.save_name.as_ref().map(|_| default_db_path())
    });
    let config = match &db_path {
        Some(path) => {
            let manager = ConfigManager::new(&path.to_string_lossy())
                .with_context(|| format!("无法打开配置数据库: {}", path.display()))?;
            manager.load_planner_config().await?
        }
        None => PlannerConfig::default(),
    };
    set_locale(&config.locale);

    // 数据加载（全部完成后才构建课表）
    let mut source = FileDataSource::new(&cli.catalog);
    if let Some(path) = &cli.requirements {
        source = source.with_requirements(path);
    }
    if let Some(path) = &cli.presets {
        source = source.with_presets(path);
    }
    let data = source.load_all().await.context("规划数据加载失败")?;

    let mut api = PlannerApi::new(data, config);
    if let Some(path) = &db_path {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        api = api.with_repository(ScheduleRepository::new(&path.to_string_lossy())?);
    }
    api.set_major(cli.major_id.as_deref());

    if let Some(preset_id) = &cli.preset_id {
        let report = api.apply_preset(preset_id)?;
        println!(
            "{}",
            t_with_args(
                "preset.applied",
                &[
                    ("preset_id", report.preset_id.as_str()),
                    ("placed", report.placed_count().to_string().as_str()),
                    ("skipped", report.skipped_count().to_string().as_str()),
                ],
            )
        );
    }

    let evaluation = api.evaluate();

    // 先修校验
    if evaluation.validation.is_valid() {
        println!("{}", t("validation.all_satisfied"));
    }
    for (position, code) in api.schedule().filled_slots() {
        if let Some(message) = evaluation
            .validation
            .describe_slot(position, api.evaluator().catalog())
        {
            let semester = api
                .schedule()
                .semester(position.semester)
                .map(|s| s.name().to_string())
                .unwrap_or_default();
            println!(
                "{}",
                t_with_args(
                    "validation.invalid_slot",
                    &[
                        ("semester", semester.as_str()),
                        ("slot", (position.slot + 1).to_string().as_str()),
                        ("code", api.evaluator().catalog().display_code(code).as_str()),
                        ("message", message.as_str()),
                    ],
                )
            );
        }
    }

    // 学分汇总
    for line in evaluation.credits.lines() {
        println!("{}", line.render());
    }
    println!(
        "{}",
        t_with_args(
            "credits.total",
            &[("total", evaluation.credits.total_credits().to_string().as_str())],
        )
    );
    if let Some(message) = evaluation.credits.describe_missing_required() {
        println!("{}", message);
    }

    if let Some(path) = &cli.export_path {
        api.export_csv(path)?;
    }
    if let Some(name) = &cli.save_name {
        let plan = api.save_as(name)?;
        println!("plan_id={}", plan.plan_id);
    }

    Ok(())
}
