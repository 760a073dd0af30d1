//! List command - show described types and callables

use anyhow::Result;
use clap::Parser;
use di_resolver::{CallableDescriptor, TypeDescriptor};
use serde::Serialize;

use super::output::print_json;
use super::InspectContext;

#[derive(Parser, Debug)]
pub struct ListCmd {}

#[derive(Serialize)]
struct TypeRow<'a> {
    name: &'a str,
    kind: &'static str,
    instantiable: bool,
    parameters: Option<usize>,
}

#[derive(Serialize)]
struct CallableRow<'a> {
    name: &'a str,
    opaque: bool,
    parameters: usize,
}

#[derive(Serialize)]
struct ListView<'a> {
    types: Vec<TypeRow<'a>>,
    callables: Vec<CallableRow<'a>>,
}

impl ListCmd {
    pub fn execute(&self, ctx: &InspectContext) -> Result<()> {
        let introspector = ctx.introspector();
        let view = ListView {
            types: introspector
                .types()
                .map(|ty| TypeRow {
                    name: &ty.name,
                    kind: ty.kind.as_str(),
                    instantiable: ty.instantiability().is_instantiable(),
                    parameters: ty.constructor().map(|ctor| ctor.parameters().len()),
                })
                .collect(),
            callables: introspector
                .callables()
                .map(|callable| CallableRow {
                    name: &callable.name,
                    opaque: callable.is_opaque(),
                    parameters: callable.parameters().len(),
                })
                .collect(),
        };

        if ctx.json {
            return print_json(&view);
        }

        println!("Types ({}):", view.types.len());
        for row in &view.types {
            let params = row
                .parameters
                .map(|n| format!("{n} parameter(s)"))
                .unwrap_or_else(|| "no constructor".to_string());
            let marker = if row.instantiable { "" } else { ", not instantiable" };
            println!("  {} [{}{}] {}", row.name, row.kind, marker, params);
        }
        println!("Callables ({}):", view.callables.len());
        for row in &view.callables {
            let opaque = if row.opaque { " (opaque)" } else { "" };
            println!("  {}{} {} parameter(s)", row.name, opaque, row.parameters);
        }
        Ok(())
    }
}
