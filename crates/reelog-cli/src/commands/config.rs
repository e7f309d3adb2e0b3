use crate::output::{Output, OutputFormat};
use crate::ConfigCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use reelog_config::{Config, PathManager};
use serde_json::json;

pub fn run_config(cmd: ConfigCommands, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();

    match cmd {
        ConfigCommands::Show => {
            let config = Config::load_or_default(&config_file).map_err(|e| eyre!("{}", e))?;

            match output.format() {
                OutputFormat::Human => {
                    let mut table = Table::new();
                    table.load_preset(comfy_table::presets::UTF8_FULL);
                    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
                    table.add_row(vec![
                        Cell::new("Config File").add_attribute(comfy_table::Attribute::Bold),
                        Cell::new(config_file.display().to_string()),
                    ]);
                    table.add_row(vec![Cell::new("Endpoint"), Cell::new(&config.endpoint)]);
                    table.add_row(vec![
                        Cell::new("Default Sort"),
                        Cell::new(&config.default_sort),
                    ]);
                    table.add_row(vec![Cell::new("Page Title"), Cell::new(&config.page_title)]);
                    output.println(table.to_string());
                }
                OutputFormat::Json | OutputFormat::JsonPretty => {
                    output.json(&json!({
                        "config_file": config_file.display().to_string(),
                        "endpoint": config.endpoint,
                        "default_sort": config.default_sort,
                        "page_title": config.page_title,
                    }));
                }
            }
            Ok(())
        }
        ConfigCommands::Init { force } => {
            if config_file.exists() && !force {
                output.error(format!(
                    "{} already exists (use --force to overwrite)",
                    config_file.display()
                ));
                std::process::exit(1);
            }

            path_manager.ensure_directories().map_err(|e| eyre!("{}", e))?;
            Config::default()
                .save_to_file(&config_file)
                .map_err(|e| eyre!("{}", e))?;
            output.success(format!("Wrote default config to {}", config_file.display()));
            Ok(())
        }
    }
}
