use std::path::Path;

use anyhow::Result;

use scrollable_core::AppConfig;

pub fn run(config: &AppConfig, source: &Path) -> Result<()> {
    if source.exists() {
        println!("# Loaded from {}\n", source.display());
    } else {
        println!("# {} not found, showing defaults\n", source.display());
    }
    print!("{}", config.to_toml()?);
    Ok(())
}
