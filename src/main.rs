use cardbox::application::Session;
use cardbox::cli::Cli;
use cardbox::error::CardboxError;
use cardbox::infrastructure::Config;
use clap::Parser;
use std::io;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), CardboxError> {
    let config = Config::load(&cli.config)?.with_overrides(cli.import_from, cli.export_to);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session =
        Session::new(stdin.lock(), stdout.lock()).with_export(config.export_to.clone());

    if let Some(path) = &config.import_from {
        session.import_deck(path)?;
    }

    session.run()
}
