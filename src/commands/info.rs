use crate::cli::parser::ConfigArgs;
use crate::commands::load_config;
use anyhow::Result;
use comfy_table::presets::NOTHING;
use comfy_table::Table;
use serde_json::json;
use vergen::services::generator::{collect, system_runner};
use vergen::{Config, VersionInfo};

pub fn run(args: &ConfigArgs, as_json: bool) {
    if let Err(e) = execute_info(args, as_json) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn execute_info(args: &ConfigArgs, as_json: bool) -> Result<()> {
    let config = load_config(args)?;
    let info = collect(&config, &system_runner(&config), &config.default_output())?;

    if as_json {
        println!("{}", to_json(&info, &config)?);
    } else {
        println!("{}", to_table(&info, &config));
    }
    Ok(())
}

fn to_json(info: &VersionInfo, config: &Config) -> Result<String> {
    let mut value = serde_json::to_value(info)?;
    value["version"] = json!(info.version(&config.dirty_suffix));
    value["clean"] = json!(info.is_clean());
    Ok(serde_json::to_string_pretty(&value)?)
}

fn to_table(info: &VersionInfo, config: &Config) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["Constant", "Value"]);
    table.add_row(vec!["VgVersion".to_string(), info.version(&config.dirty_suffix)]);
    table.add_row(vec!["VgHash".to_string(), info.commit_hash.clone()]);
    table.add_row(vec!["VgClean".to_string(), info.is_clean().to_string()]);
    table
}
