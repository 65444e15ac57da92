use anyhow::{Context, Result};
use roimap::cli::{
    apply_color_preference, configure_thread_pool, init_logging, parse_args, Commands,
};
use roimap::commands::{self, IndicatorConfig, ProjectConfig};
use roimap::config::{load_config, load_config_from_path, RoimapConfig};

fn main() -> Result<()> {
    let cli = parse_args();
    init_logging(cli.verbose);

    let config = load_app_config(cli.config.as_deref())?;
    apply_color_preference(config.output().use_color);

    match cli.command {
        Commands::Project {
            portfolio,
            project,
            format,
            output,
            no_parallel,
            jobs,
        } => {
            let jobs = if jobs > 0 { jobs } else { config.parallel().jobs };
            if !no_parallel {
                configure_thread_pool(jobs);
            }
            commands::handle_project(
                ProjectConfig {
                    portfolio,
                    project,
                    format,
                    output,
                    no_parallel,
                },
                &config,
            )
        }
        Commands::Indicator {
            portfolio,
            id,
            format,
            output,
        } => commands::handle_indicator(
            IndicatorConfig {
                portfolio,
                id,
                format,
                output,
            },
            &config,
        ),
        Commands::Types { json } => {
            let stdout = std::io::stdout();
            commands::print_catalog(&mut stdout.lock(), json)
        }
        Commands::Init { force } => commands::init_config(force),
    }
}

fn load_app_config(path: Option<&std::path::Path>) -> Result<RoimapConfig> {
    match path {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(load_config()),
    }
}
