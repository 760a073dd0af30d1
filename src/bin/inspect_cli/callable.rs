//! Callable command - resolve a callable's parameters

use anyhow::{anyhow, Result};
use clap::Parser;
use di_inspect::ResolutionReport;

use super::output::print_json;
use super::InspectContext;

#[derive(Parser, Debug)]
pub struct CallableCmd {
    /// Callable name as written in the manifest
    pub name: String,
}

impl CallableCmd {
    pub fn execute(&self, ctx: &InspectContext) -> Result<()> {
        let callable = ctx
            .introspector()
            .callable(&self.name)
            .ok_or_else(|| anyhow!("Callable {} is not described in the manifest", self.name))?;

        let report = ResolutionReport::for_callable(&ctx.resolver, &self.name, callable);
        if ctx.json {
            print_json(&report)
        } else {
            print!("{}", report.format_text());
            Ok(())
        }
    }
}
