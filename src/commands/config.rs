//! Config subcommands handler

use anyhow::Result;

use promptline::config::InitResult;
use promptline::Config;

/// Create the config file with defaults unless one already exists.
#[cfg(not(tarpaulin_include))]
pub fn handle_init() -> Result<()> {
    match Config::init()? {
        InitResult::Created(path) => println!("Created {}", path.display()),
        InitResult::AlreadyExists(path) => {
            println!("Config already exists at {}", path.display())
        }
    }
    Ok(())
}

/// Show the current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print the config file location.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
