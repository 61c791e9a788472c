use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;

use crate::bench::{self, RunConfig, WorkloadId};
use crate::cli::Output;
use crate::report::{self, RunRecord};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Workload id: 1=sum-squares, 2=matrix-multiply, 3=monte-carlo-pi,
    /// 4=merge-sort, 5=fft
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=5))]
    pub alg: u32,

    /// Worker threads per run (defaults to the detected core count)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=256))]
    pub threads: Option<u32>,

    /// Number of timed runs
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub runs: u32,

    /// Problem size (element count, iteration count, or matrix dimension)
    #[arg(long)]
    pub size: u64,

    /// Output JSONL file; one record is appended per completed run
    #[arg(long, value_name = "FILE")]
    pub out: PathBuf,
}

impl RunArgs {
    fn into_config(self) -> Result<RunConfig> {
        let workload =
            WorkloadId::from_id(self.alg).context("workload id must be 1..=5")?;
        let config = RunConfig {
            workload,
            threads: self.threads.unwrap_or_else(default_threads),
            runs: self.runs,
            size: self.size,
            out: self.out,
        };
        config.validate()?;
        Ok(config)
    }
}

fn default_threads() -> u32 {
    (num_cpus::get() as u32).clamp(1, bench::MAX_THREADS)
}

pub fn execute(args: RunArgs, output: &Output) -> Result<()> {
    let config = args.into_config()?;

    // Fail fast on an unwritable output path, before any work is done.
    report::touch_append(&config.out)?;

    output.step(&format!(
        "Running {} ({} runs, {} threads, size {})",
        config.workload, config.runs, config.threads, config.size
    ));

    for run_index in 0..config.runs {
        // The clock brackets exactly the engine call; record encoding and
        // file I/O are outside the measured window.
        let started = Instant::now();
        bench::execute(config.workload, config.threads, config.size)
            .with_context(|| format!("run {run_index} of {} failed", config.workload))?;
        let seconds = started.elapsed().as_secs_f64();

        let record =
            RunRecord::new(config.workload, config.threads, run_index, config.size, seconds);
        report::append_record(&config.out, &record)?;

        tracing::info!(workload = %config.workload, run_index, seconds, "run complete");
        output.verbose(&format!("run {run_index}: {seconds:.6}s"));
    }

    output.success(&format!(
        "Wrote {} record(s) to {}",
        config.runs,
        config.out.display()
    ));
    Ok(())
}
