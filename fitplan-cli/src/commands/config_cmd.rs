use anyhow::Result;

use super::CommandContext;
use crate::config::Config;

pub fn show_config(context: &CommandContext) -> Result<()> {
    let config_file = Config::resolve_path(context.config_path.as_deref())?;
    let config_str = toml::to_string_pretty(&context.config)?;

    println!("Current Configuration ({})", config_file.display());
    println!("────────────────────────────────");
    println!();
    println!("{}", config_str);

    Ok(())
}

pub fn init_config(context: &CommandContext, force: bool) -> Result<()> {
    let config_file = Config::resolve_path(context.config_path.as_deref())?;

    if config_file.exists() && !force {
        println!(
            "Configuration file already exists at: {}",
            config_file.display()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let written = Config::default().save(Some(&config_file))?;

    println!("✓ Configuration initialized at: {}", written.display());

    Ok(())
}
