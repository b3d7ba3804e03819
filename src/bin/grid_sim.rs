//! 网格拓扑仿真
//!
//! 在 rows x cols 网格上生成确定性的包裹负载并运行

use clap::Parser;
use parcelsim_rs::net::Parcel;
use parcelsim_rs::queue::QueueKind;
use parcelsim_rs::sim::{SimTime, Simulation};
use parcelsim_rs::topo::grid::{GridOpts, build_grid};
use std::process::ExitCode;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "grid-sim", about = "网格拓扑仿真：确定性包裹负载")]
struct Args {
    #[arg(long, default_value_t = 4)]
    rows: usize,
    #[arg(long, default_value_t = 4)]
    cols: usize,
    #[arg(long, default_value_t = 1)]
    row_weight: i64,
    #[arg(long, default_value_t = 2)]
    col_weight: i64,
    /// 包裹数
    #[arg(long, default_value_t = 200)]
    parcels: u64,
    /// 每个 tick 注入的包裹数
    #[arg(long, default_value_t = 4)]
    per_tick: u64,
    /// fifo / lifo / priority
    #[arg(long, default_value = "fifo")]
    queue: QueueKind,
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u64,
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
    if args.rows == 0 || args.cols == 0 {
        eprintln!("error: rows and cols must be positive");
        return ExitCode::FAILURE;
    }

    let mut sim = Simulation::default();
    let opts = GridOpts {
        rows: args.rows,
        cols: args.cols,
        row_weight: args.row_weight,
        col_weight: args.col_weight,
        queue: args.queue,
        monitored: true,
    };
    let topo = match build_grid(&mut sim.router, &opts) {
        Ok(topo) => topo,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let n = topo.centers.len() as u64;
    let per_tick = args.per_tick.max(1);
    for i in 0..args.parcels {
        let origin = &topo.centers[(i.wrapping_mul(7) % n) as usize];
        let dest = &topo.centers[(i.wrapping_mul(13).wrapping_add(5) % n) as usize];
        let parcel = Parcel::new(format!("p{i}"), (i % 17) as i64, 1, dest.clone());
        if let Err(e) = sim.schedule(SimTime(i / per_tick), origin.as_str(), parcel) {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }
    info!(centers = n, parcels = args.parcels, queue = ?args.queue, "网格负载已生成");

    let report = sim.run(args.max_ticks);
    println!(
        "done @ tick {}, delivered={}, unreachable={}, in_flight={}, mean_latency={:.3}, max_latency={}",
        report.final_tick,
        report.delivered,
        report.unreachable,
        report.in_flight,
        report.mean_latency,
        report.max_latency
    );
    ExitCode::SUCCESS
}
