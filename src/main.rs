use clap::Parser;
use tracing::info;

use quality_selector::{
    cli::{apply_overrides, handle_commands, load_session, replay, CliArgs, ConsoleMenu},
    config::Config,
    utils::{setup_logging, Error, Result},
};

fn main() -> Result<()> {
    let args = CliArgs::parse();

    if !args.is_info_command() && args.session.is_none() {
        use clap::CommandFactory;
        let mut cmd = CliArgs::command();
        cmd.print_help()?;
        println!();
        return Ok(());
    }

    args.validate()?;

    let mut config = Config::load_with_fallback(&args.config)?;
    apply_overrides(&args, &mut config)?;

    setup_logging(
        args.get_log_level(&config.logging.level),
        config.logging.show_timestamps,
        config.logging.colored_output && args.should_use_color(),
    )?;

    if handle_commands(&args, &config)? {
        return Ok(());
    }

    if args.should_replay() {
        handle_replay(&args, config)
    } else {
        Ok(())
    }
}

fn handle_replay(args: &CliArgs, config: Config) -> Result<()> {
    let path = args
        .session
        .as_ref()
        .ok_or_else(|| Error::validation("A session file is required for replay"))?;

    let steps = load_session(path)?;
    info!("Replaying {} session step(s) from {}", steps.len(), path.display());

    let colored = config.logging.colored_output && args.should_use_color();
    let selector = replay(&steps, config.selector, ConsoleMenu::new(colored));

    match selector.current_label() {
        Some(label) => info!(
            "Session finished on {} (auto: {})",
            label,
            selector.is_auto_mode()
        ),
        None => info!("Session finished with the quality control hidden"),
    }

    Ok(())
}
