use crate::{
    cli::CliArgs,
    config::Config,
    utils::{Error, Result},
};

/// Runs the informational commands. Returns true if one was handled.
pub fn handle_commands(args: &CliArgs, config: &Config) -> Result<bool> {
    if args.validate_config {
        validate_config(&args.config)?;
        return Ok(true);
    }

    if args.print_options {
        print_options(config)?;
        return Ok(true);
    }

    Ok(false)
}

/// Applies the `--set` overrides on top of the loaded configuration
pub fn apply_overrides(args: &CliArgs, config: &mut Config) -> Result<()> {
    for (name, value) in args.parsed_overrides()? {
        config
            .selector
            .set(&name, &value)
            .map_err(|e| Error::validation(format!("Cannot apply --set {}: {}", name, e)))?;
    }
    config.validate()
}

fn validate_config(config_path: &std::path::Path) -> Result<()> {
    match Config::load_with_fallback(config_path) {
        Ok(config) => {
            if config_path.exists() {
                println!("✓ Configuration file is valid: {}", config_path.display());
            } else {
                println!("✓ Configuration is valid (using discovered/default config)");
            }
            println!();

            println!("Configuration Summary:");
            println!("{:-<40}", "");
            println!("Log level: {}", config.logging.level);
            println!("Auto label: {}", config.selector.auto_label);
            println!(
                "Default quality: {}",
                config.selector.default_quality.as_str()
            );
            println!("Display mode: {}", config.selector.display_mode.as_str());
            println!(
                "Height bounds: {} - {}",
                bound_text(config.selector.min_height),
                bound_text(config.selector.max_height)
            );
            println!("Label overrides: {}", config.selector.labels.len());

            Ok(())
        }
        Err(e) => {
            println!("✗ Configuration validation failed: {}", e);
            Err(e)
        }
    }
}

fn bound_text(height: u32) -> String {
    if height == 0 {
        "unbounded".to_string()
    } else {
        format!("{}p", height)
    }
}

fn print_options(config: &Config) -> Result<()> {
    let changed = config.selector.non_default_values()?;
    println!("{}", serde_json::to_string_pretty(&changed)?);
    Ok(())
}
