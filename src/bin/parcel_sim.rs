//! 场景仿真
//!
//! 读取 scenario.json，运行分拣网络仿真并输出统计

use clap::Parser;
use parcelsim_rs::sim::{ScenarioSpec, Simulation};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

const DEFAULT_MAX_TICKS: u64 = 10_000;

#[derive(Debug, Parser)]
#[command(name = "parcel-sim", about = "运行 scenario.json 描述的分拣网络仿真")]
struct Args {
    /// Path to scenario.json
    #[arg(long)]
    scenario: PathBuf,

    /// Override max_ticks from the scenario
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Write the final report as JSON
    #[arg(long)]
    report_json: Option<PathBuf>,

    /// Print one line per delivered parcel
    #[arg(long)]
    deliveries: bool,
}

fn main() -> ExitCode {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let spec = match ScenarioSpec::from_path(&args.scenario) {
        Ok(spec) => spec,
        Err(e) => {
            error!(error = %e, "加载场景失败");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut sim = match Simulation::from_scenario(&spec) {
        Ok(sim) => sim,
        Err(e) => {
            error!(error = %e, "构建场景失败");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let max_ticks = args
        .max_ticks
        .or(spec.max_ticks)
        .unwrap_or(DEFAULT_MAX_TICKS);
    info!(max_ticks, "开始仿真");
    let report = sim.run(max_ticks);

    if args.deliveries {
        for d in sim.deliveries() {
            println!(
                "delivery parcel={} center={} injected={} delivered={} latency={}",
                d.parcel_id,
                d.center,
                d.injected_at.0,
                d.delivered_at.0,
                d.latency()
            );
        }
    }
    for c in &report.centers {
        match &c.stats {
            Some(s) => println!(
                "center {} queue={} processed={} avg_wait={:.3} max_queue={}",
                c.id,
                c.queue_size,
                s.processed_count(),
                s.average_wait_time(),
                s.max_queue_length()
            ),
            None => println!("center {} queue={}", c.id, c.queue_size),
        }
    }
    println!(
        "done @ tick {}, injected={}, delivered={}, unreachable={}, in_flight={}, mean_latency={:.3}",
        report.final_tick,
        report.injected,
        report.delivered,
        report.unreachable,
        report.in_flight,
        report.mean_latency
    );

    if let Some(path) = &args.report_json {
        let written = serde_json::to_string_pretty(&report)
            .map_err(|e| e.to_string())
            .and_then(|json| fs::write(path, json).map_err(|e| e.to_string()));
        if let Err(e) = written {
            eprintln!("error: failed to write {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
