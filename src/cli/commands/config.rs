use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        let path = Config::config_file();

        if *print_config {
            if path.exists() {
                println!("{}", fs::read_to_string(&path)?);
            } else {
                info(format!("No config file at {:?}; using defaults.", path));
            }
        } else {
            info(format!("Config file: {:?}", path));
        }
    }
    Ok(())
}
