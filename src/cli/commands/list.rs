use anyhow::Result;

use crate::bench::WorkloadId;
use crate::cli::Output;

pub fn execute(output: &Output) -> Result<()> {
    output.header("Available workloads");
    for workload in WorkloadId::ALL {
        output.table_row(
            &format!("{} {}", workload.id(), workload.name()),
            workload.size_rule(),
        );
    }
    Ok(())
}
