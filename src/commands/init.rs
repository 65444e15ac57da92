use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# roimap configuration

[output]
# terminal, json or markdown
default_format = "terminal"
currency = "$"
show_details = true

[parallel]
enabled = true
# 0 uses every available core
jobs = 0
# projects with fewer indicators are aggregated sequentially
min_indicators = 64
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
