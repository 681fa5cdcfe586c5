use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes `~/.rmileage/rmileage.conf` with default values; `--api` sets the
/// API URL stored in it. In test mode nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::config_file();
    if path.exists() && !cli.test {
        info(format!(
            "Overwriting existing configuration at {}",
            path.display()
        ));
    }

    let path = Config::init_all(cli.api.clone(), cli.test)?;

    println!("⚙️  Initializing rmileage…");
    println!("📄 Config file : {}", path.display());
    if cli.test {
        info("Test mode: configuration file not written.");
    }

    success("rmileage initialization completed!");
    Ok(())
}
