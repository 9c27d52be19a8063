use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};

/// Handle `--print-config` and `--init-config`
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // ---- INIT CONFIG ----
    if cli.init_config {
        let (path, created) = Config::init_file()?;
        if created {
            success(format!("Config file created: {}", path.display()));
        } else {
            warning(format!(
                "Config file already exists, left untouched: {}",
                path.display()
            ));
        }
    }

    // ---- PRINT CONFIG ----
    if cli.print_config {
        header("Current configuration");
        info(format!("Config file: {}", Config::config_file().display()));
        info(format!("Data file:   {}", cfg.data_path().display()));
        println!();
        print!("{}", cfg.to_yaml()?);
    }

    Ok(())
}
