//! # Motion Host
//!
//! 在终端里回放动效组件。
//!
//! ## 用法
//!
//! ```bash
//! cargo run -p motion-host -- cross-fade --from plus --to close
//! cargo run -p motion-host -- group --actions 3
//! cargo run -p motion-host -- group --actions 3 --close --format json
//! cargo run -p motion-host -- shadow --elevation 4
//! cargo run -p motion-host -- shadow --sweep 0 24 --scale 0.5
//! cargo run -p motion-host -- --config motion.json -vv group
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use motion_host::{
    CrossFadeScenario, FrameClock, GroupScenario, HostConfig, OutputFormat, Row, Scenario,
    ShadowScenario, ThemeMode, play, render,
};
use serde::Serialize;
use tracing::{Level, debug};

#[derive(Parser)]
#[command(name = "motion-host")]
#[command(about = "动效组件回放工具 - 逐帧输出组件动画的采样")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 配置文件（JSON）
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// 输出格式
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    format: OutputFormat,

    /// 动画时长倍率，覆盖配置文件
    #[arg(long, global = true)]
    scale: Option<f32>,

    /// 回放帧率，覆盖配置文件
    #[arg(long, global = true)]
    fps: Option<u32>,

    /// 主题，覆盖配置文件
    #[arg(long, value_enum, global = true)]
    theme: Option<ThemeMode>,

    /// 日志详细程度（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// 图标切换
    CrossFade {
        /// 切换前的图标
        #[arg(long, default_value = "plus")]
        from: String,

        /// 切换后的图标
        #[arg(long, default_value = "close")]
        to: String,

        /// 切换后处于关闭状态
        #[arg(long)]
        closed: bool,
    },

    /// 悬浮按钮组开合
    Group {
        /// 操作项数量
        #[arg(short, long, default_value_t = 3)]
        actions: usize,

        /// 回放关闭过程（默认回放打开过程）
        #[arg(long)]
        close: bool,
    },

    /// 阴影样式
    Shadow {
        /// 固定海拔
        #[arg(short, long, allow_negative_numbers = true, conflicts_with = "sweep")]
        elevation: Option<f32>,

        /// 海拔扫描范围
        #[arg(long, num_args = 2, value_names = ["FROM", "TO"], allow_negative_numbers = true)]
        sweep: Option<Vec<f32>>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let theme = config.theme()?;
    let mut clock = FrameClock::new(config.frame_rate);
    debug!(?config, "配置就绪");

    let output = match cli.command {
        Commands::CrossFade { from, to, closed } => {
            let mut scenario = CrossFadeScenario::new(&from, &to, !closed, &theme)?;
            run(&mut scenario, &mut clock, &config, cli.format)?
        }
        Commands::Group { actions, close } => {
            let mut scenario = GroupScenario::new(actions, !close, &theme)?;
            run(&mut scenario, &mut clock, &config, cli.format)?
        }
        Commands::Shadow { elevation, sweep } => {
            let mut scenario = match (elevation, sweep.as_deref()) {
                (_, Some([from, to])) => ShadowScenario::sweep(*from, *to, &theme)?,
                (Some(elevation), _) => ShadowScenario::fixed(elevation)?,
                (None, None) => bail!("需要 --elevation 或 --sweep"),
                (None, Some(_)) => bail!("--sweep 需要两个值"),
            };
            run(&mut scenario, &mut clock, &config, cli.format)?
        }
    };

    print!("{output}");
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// 配置文件 → 命令行覆盖 → 校验
fn load_config(cli: &Cli) -> Result<HostConfig> {
    let mut config = match &cli.config {
        Some(path) => HostConfig::load(path),
        None => HostConfig::default(),
    };

    if let Some(scale) = cli.scale {
        config.animation_scale = scale;
    }
    if let Some(fps) = cli.fps {
        config.frame_rate = fps;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    config.validate().context("配置无效")?;
    Ok(config)
}

fn run<S>(
    scenario: &mut S,
    clock: &mut FrameClock,
    config: &HostConfig,
    format: OutputFormat,
) -> Result<String>
where
    S: Scenario,
    S::Sample: Row + Serialize,
{
    let playback = play(scenario, clock, config.max_frames);
    render(&playback, format).context("输出序列化失败")
}
