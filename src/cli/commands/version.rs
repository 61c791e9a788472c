use anyhow::Result;

use crate::cli::Output;
use crate::{PKG_DESCRIPTION, PKG_NAME, VERSION};

pub fn execute(output: &Output) -> Result<()> {
    output.key_value("Name", PKG_NAME);
    output.key_value("Version", VERSION);
    output.key_value("Description", PKG_DESCRIPTION);
    Ok(())
}
