use clap::Parser;
use null_account::utils::{logger, validation::Validate};
use null_account::{AccountEngine, AccountError, BankAccount, CliConfig};

fn exit_with(e: &AccountError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let file = match config.load_file() {
        Ok(file) => file,
        Err(e) => exit_with(&e),
    };
    if let Some(path) = &config.config {
        tracing::info!("📁 Loaded configuration from: {}", path);
    }

    let settings = match config.resolve(file) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };
    tracing::debug!(
        log = ?settings.log,
        opening_quantity = settings.opening_quantity,
        operations = settings.operations.len(),
        "Resolved account settings"
    );

    let mut account = BankAccount::new(settings.log.build());
    account.set_quantity(settings.opening_quantity);

    let mut engine = AccountEngine::new(account);
    engine.run(&settings.operations);

    let account = engine.into_account();
    account.display();

    if config.json {
        match account.snapshot().to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => exit_with(&e),
        }
    }

    Ok(())
}
