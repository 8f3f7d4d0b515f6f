use std::process::ExitCode;

use ribo_cmd::{commands, AlignSettings, CmdResult};

mod cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: cli::Command) -> CmdResult {
    match command {
        cli::Command::Center { input, output } => {
            let output = output.unwrap_or_else(|| commands::default_output(&input, "centered"));
            let report = commands::center(&input, &output)?;
            println!("{}", report);
        }
        cli::Command::Align {
            incoming,
            reference,
            output,
            anchor,
            precision,
            config,
            no_center,
        } => {
            let settings = match config {
                Some(path) => AlignSettings::load(&path)?,
                None => AlignSettings::default(),
            };
            let settings = settings.with_overrides(anchor, precision.map(Into::into), no_center)?;
            let output = output.unwrap_or_else(|| commands::default_output(&incoming, "aligned"));
            let report = commands::align(&incoming, &reference, &output, &settings)?;
            println!("{}", report);
        }
    }
    Ok(())
}
