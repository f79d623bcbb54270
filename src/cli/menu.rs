// src/cli/menu.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use inquire::{Confirm, CustomType, InquireError, Password, Select};

use crate::breach::BreachChecker;
use crate::cli::handlers::{print_hash, print_report, print_verdict};
use crate::core::config::Config;
use crate::crypto;
use crate::engine::{analyzer, generator};
use crate::models::GenerationOptions;

const MENU_GENERATE: &str = "Generate a password";
const MENU_ANALYZE: &str = "Analyze password strength";
const MENU_BREACH: &str = "Check a password for breaches";
const MENU_HASH: &str = "Hash a password for storage";
const MENU_QUIT: &str = "Quit";

pub async fn run_menu(config: &Config, should_exit: Arc<AtomicBool>) -> anyhow::Result<()> {
    println!("🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║        🔐 SECUREPASS TOOLBOX         ║");
    println!("╚══════════════════════════════════════╝");

    let checker = BreachChecker::new(&config.breach_api_url, config.breach_timeout);

    loop {
        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        let choice = match Select::new(
            "What would you like to do?",
            vec![MENU_GENERATE, MENU_ANALYZE, MENU_BREACH, MENU_HASH, MENU_QUIT],
        )
        .prompt()
        {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match choice {
            MENU_GENERATE => generate_flow(config, &checker).await?,
            MENU_ANALYZE => analyze_flow()?,
            MENU_BREACH => breach_flow(&checker).await?,
            MENU_HASH => hash_flow(config)?,
            _ => break,
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

async fn generate_flow(config: &Config, checker: &BreachChecker) -> anyhow::Result<()> {
    let length = CustomType::<usize>::new("Password length:")
        .with_default(config.default_password_length)
        .prompt()?;

    let use_lowercase = Confirm::new("Include lowercase letters?")
        .with_default(true)
        .prompt()?;
    let use_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(true)
        .prompt()?;
    let use_digits = Confirm::new("Include digits?").with_default(true).prompt()?;
    let use_special = Confirm::new("Include special characters?")
        .with_default(true)
        .prompt()?;

    let options = GenerationOptions {
        length,
        use_lowercase,
        use_uppercase,
        use_digits,
        use_special,
    };

    let password = generator::generate(&options);
    let report = analyzer::check_strength(&password);

    println!("\n🔑 {}", password);
    print_report(&report);

    let check_breach = Confirm::new("Check it against the breach corpus?")
        .with_default(false)
        .prompt()?;

    if check_breach {
        let verdict = checker.check(&password).await;
        print_verdict(&verdict);
    }

    Ok(())
}

fn analyze_flow() -> anyhow::Result<()> {
    let password = Password::new("Password to analyze:")
        .with_display_mode(inquire::PasswordDisplayMode::Hidden)
        .without_confirmation()
        .prompt()?;

    let report = analyzer::check_strength(&password);
    print_report(&report);

    Ok(())
}

async fn breach_flow(checker: &BreachChecker) -> anyhow::Result<()> {
    let password = Password::new("Password to check:")
        .with_display_mode(inquire::PasswordDisplayMode::Hidden)
        .without_confirmation()
        .prompt()?;

    let verdict = checker.check(&password).await;
    print_verdict(&verdict);

    Ok(())
}

fn hash_flow(config: &Config) -> anyhow::Result<()> {
    let password = Password::new("Password to hash:")
        .with_display_mode(inquire::PasswordDisplayMode::Hidden)
        .without_confirmation()
        .prompt()?;

    let iterations = CustomType::<u32>::new("PBKDF2 iterations:")
        .with_default(config.pbkdf2_iterations)
        .prompt()?;

    let hash = crypto::hash_password_pbkdf2(&password, config.clamped_iterations(Some(iterations)))?;
    print_hash(&hash);

    Ok(())
}
