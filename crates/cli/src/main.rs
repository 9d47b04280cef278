use anyhow::{Context, Result};
use clap::Parser;
use diskcloud::count::{parse_count_expr, CountSpec};
use diskcloud::params::{GenParams, Normalization, RadiusRule};
use diskcloud::pipeline::{self, RunReport};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser, Debug)]
#[command(name = "diskcloud", version)]
#[command(about = "Sample points uniformly over a disk and write them as a flat f32 point file")]
struct Cli {
    /// Point count expression using integers, `*` and `**` (e.g. `10**6`).
    /// Without it, 1000 points are written to `round_1000`.
    count: Option<String>,

    /// RNG seed; drawn from OS entropy and logged when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Fixed sampling radius; defaults to count^0.25
    #[arg(long)]
    radius: Option<f32>,

    /// Shift into the non-negative quadrant: `min` (per-axis minimum) or `fixed` (+radius)
    #[arg(long, default_value = "min")]
    normalize: Normalization,

    /// Directory the point file is written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Also write `<file>.provenance.json` next to the point file
    #[arg(long)]
    provenance: bool,

    /// Read the file back and compare it bit-for-bit with the generated values
    #[arg(long)]
    verify: bool,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    log_level: Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cli.log_level)
        .init();
    execute(cli).map(|_| ())
}

fn execute(cli: Cli) -> Result<RunReport> {
    let count = match cli.count.as_deref() {
        Some(expr) => parse_count_expr(expr)
            .with_context(|| format!("evaluating count expression {expr:?}"))?,
        None => CountSpec::default(),
    };
    let params = GenParams {
        count,
        radius: cli.radius.map_or(RadiusRule::QuarticRoot, RadiusRule::Fixed),
        normalization: cli.normalize,
    };
    params.validate().context("checking generator parameters")?;

    let seed = match cli.seed {
        Some(seed) => seed,
        None => {
            let seed = rand::random::<u64>();
            tracing::info!(seed, "no seed given; drew one from entropy");
            seed
        }
    };

    if !cli.out_dir.as_os_str().is_empty() {
        std::fs::create_dir_all(&cli.out_dir)
            .with_context(|| format!("creating output dir {}", cli.out_dir.display()))?;
    }
    tracing::info!(
        count = params.count.count.get(),
        file = %params.count.file_name(),
        normalization = %params.normalization,
        seed,
        "run"
    );

    let (report, cloud) =
        pipeline::run(&params, seed, &cli.out_dir).context("generating point file")?;

    if cli.verify {
        pipeline::verify(&report, &cloud)
            .with_context(|| format!("verifying {}", report.path.display()))?;
        tracing::info!(path = %report.path.display(), "verified");
    }
    if cli.provenance {
        let run_params = provenance::RunParams::new(&params, &report);
        let prov_path = provenance::write_sidecar(&report.path, &run_params)?;
        tracing::info!(path = %prov_path.display(), "provenance written");
    }
    Ok(report)
}
