//! Listing and dynamically calling bound script functions.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use console::style;
use satchel_runtime::{RuntimeConfig, ScriptType, ScriptValue, Session};

use super::{open, parse_form, print_diagnostics};

/// List bound script functions
#[derive(Parser)]
pub struct Functions;

impl Functions {
    pub fn execute(self, config: RuntimeConfig) -> Result<()> {
        let (session, _) = open(config)?;
        let registry = session.registry();

        println!(
            "{} ({} functions)",
            style(registry.script()).bold().green(),
            registry.len()
        );
        for signature in registry.signatures() {
            let params: Vec<String> = signature.params.iter().map(ToString::to_string).collect();
            println!(
                "  {} {}({})",
                style(signature.returns).dim(),
                style(signature.name).bold(),
                params.join(", ")
            );
        }
        Ok(())
    }
}

/// Call a script function by name
#[derive(Parser)]
pub struct Call {
    /// Function name (case-insensitive)
    #[arg(value_name = "FUNCTION")]
    function: String,

    /// Arguments, parsed according to the function's signature
    #[arg(value_name = "ARGS", allow_hyphen_values = true)]
    args: Vec<String>,
}

impl Call {
    pub fn execute(self, config: RuntimeConfig) -> Result<()> {
        let (session, diagnostics) = open(config)?;

        let signature = session
            .registry()
            .signature(&self.function)
            .ok_or_else(|| anyhow!("{} is not a bound function", self.function))?;
        if signature.params.len() != self.args.len() {
            bail!(
                "{} expects {} arguments, got {}",
                signature.name,
                signature.params.len(),
                self.args.len()
            );
        }

        let args = signature
            .params
            .iter()
            .zip(&self.args)
            .map(|(&ty, raw)| parse_arg(&session, ty, raw))
            .collect::<Result<Vec<_>>>()?;

        let result = session.call(signature.name, &args);
        print_diagnostics(&diagnostics);
        println!("{}", result?);
        Ok(())
    }
}

fn parse_arg(session: &Session, ty: ScriptType, raw: &str) -> Result<ScriptValue> {
    let value: ScriptValue = match ty {
        ScriptType::Form => parse_form(session.catalog(), raw)?.into(),
        ScriptType::Int => raw
            .parse::<i32>()
            .with_context(|| format!("Invalid int argument: {}", raw))?
            .into(),
        ScriptType::Bool => raw
            .parse::<bool>()
            .with_context(|| format!("Invalid bool argument: {}", raw))?
            .into(),
        ScriptType::IntArray => raw
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(|part| part.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Invalid int array argument: {}", raw))?
            .into(),
    };
    Ok(value)
}
