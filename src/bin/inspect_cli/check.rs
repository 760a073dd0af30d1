//! Check command - resolve every target in the manifest

use anyhow::{bail, Result};
use clap::Parser;
use di_inspect::CheckReport;

use super::output::print_json;
use super::InspectContext;

#[derive(Parser, Debug)]
pub struct CheckCmd {
    /// Fail if any parameter is unresolvable
    #[arg(long)]
    pub strict: bool,
}

impl CheckCmd {
    pub fn execute(&self, ctx: &InspectContext) -> Result<()> {
        let report = CheckReport::run(&ctx.resolver);

        if ctx.json {
            print_json(&report)?;
        } else {
            println!("{}", report.format_text());
        }

        if self.strict && !report.is_clean() {
            bail!(
                "{} unresolvable parameter(s) found",
                report.unresolvable.len()
            );
        }
        Ok(())
    }
}
