use clap::Parser;
use pattern_lab::utils::logger;
use pattern_lab::{patterns, AtmConfig, CliConfig, Command, Teller, Transcript};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pattern-lab CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match config.command {
        Command::List => list_demos(),
        Command::Run { name, all } => run_demos(name, all),
        Command::Dispense {
            amount,
            config,
            json,
        } => dispense(amount, config, json),
    }
}

fn list_demos() -> anyhow::Result<()> {
    for demo in patterns::registry() {
        println!(
            "{:<24} {:<12} {}",
            demo.name(),
            demo.category().to_string(),
            demo.summary()
        );
    }
    Ok(())
}

fn run_demos(name: Option<String>, all: bool) -> anyhow::Result<()> {
    let demos = if all {
        patterns::registry()
    } else {
        let name = name.ok_or_else(|| {
            anyhow::anyhow!("Pass a demo name or --all; `pattern-lab list` shows the names")
        })?;
        vec![patterns::find(&name)?]
    };

    for demo in demos {
        println!("=== {} ({}) ===", demo.name(), demo.category());

        let mut transcript = Transcript::new();
        if let Err(e) = demo.run(&mut transcript) {
            tracing::error!("❌ Demo '{}' failed: {}", demo.name(), e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }

        for line in transcript.lines() {
            println!("{}", line);
        }
        println!();
    }

    tracing::info!("✅ All requested demos completed");
    Ok(())
}

fn dispense(amount: u32, config_path: Option<String>, json: bool) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => {
            tracing::info!("📁 Loading chain configuration from: {}", path);
            AtmConfig::from_file(&path)?
        }
        None => AtmConfig::default(),
    };

    let teller = Teller::from_config(&config)?;

    match teller.withdraw(amount) {
        Ok(receipt) => {
            if json {
                let payload = serde_json::json!({
                    "amount": amount,
                    "notes": receipt.notes,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                for line in teller.describe(&receipt) {
                    println!("{}", line);
                }
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Dispense failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
