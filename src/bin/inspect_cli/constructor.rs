//! Constructor command - resolve a type's constructor parameters

use anyhow::Result;
use clap::Parser;
use di_inspect::ResolutionReport;

use super::output::print_json;
use super::InspectContext;

#[derive(Parser, Debug)]
pub struct ConstructorCmd {
    /// Type name, e.g. 'App\Mailer'
    pub type_name: String,
}

impl ConstructorCmd {
    pub fn execute(&self, ctx: &InspectContext) -> Result<()> {
        let report = ResolutionReport::for_constructor(&ctx.resolver, &self.type_name)?;
        if ctx.json {
            print_json(&report)
        } else {
            print!("{}", report.format_text());
            Ok(())
        }
    }
}
