use clap::Parser;
use pattern_lab::utils::logger;
use pattern_lab::{AtmConfig, Teller};
use std::io::{BufRead, Write};

#[derive(Parser)]
#[command(name = "atm")]
#[command(about = "Interactive currency dispenser driven by a denomination chain")]
struct Args {
    /// Path to a TOML chain configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading chain configuration from: {}", path);
            match AtmConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML");
                    std::process::exit(1);
                }
            }
        }
        None => AtmConfig::default(),
    };

    let teller = Teller::from_config(&config)?;
    let unit = teller.chain().smallest_unit();

    println!(
        "ATM ready with denominations {:?} (amounts must be multiples of {})",
        teller.chain().denominations(),
        unit
    );

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter amount to dispense (q to quit): ");
        std::io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let input = line.trim();

        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        let amount: u32 = match input.parse() {
            Ok(amount) => amount,
            Err(_) => {
                println!("Amount should be a non-negative whole number");
                continue;
            }
        };

        // Invalid requests only end this request, never the session.
        match teller.withdraw(amount) {
            Ok(receipt) => {
                for line in teller.describe(&receipt) {
                    println!("{}", line);
                }
            }
            Err(e) => println!("{}", e),
        }
    }

    println!("Goodbye");
    Ok(())
}
