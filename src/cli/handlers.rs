// src/cli/handlers.rs
use console::style;
use serde_json::json;

use crate::breach::BreachChecker;
use crate::cli::commands::CliCommand;
use crate::core::config::Config;
use crate::crypto;
use crate::engine::{analyzer, generator};
use crate::models::{BreachVerdict, DerivedHash, FeedbackKind, GenerationOptions, StrengthReport};

// Execute a one-shot subcommand and exit
pub async fn run_command(command: CliCommand, config: &Config, json: bool) -> anyhow::Result<()> {
    match command {
        CliCommand::Generate {
            length,
            no_lowercase,
            no_uppercase,
            no_digits,
            no_special,
        } => {
            let options = GenerationOptions {
                length: length.unwrap_or(config.default_password_length),
                use_lowercase: !no_lowercase,
                use_uppercase: !no_uppercase,
                use_digits: !no_digits,
                use_special: !no_special,
            };

            let password = generator::generate(&options);
            let report = analyzer::check_strength(&password);

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "password": password,
                        "report": report,
                    }))?
                );
            } else {
                println!("\n🔑 {}", style(&password).bold());
                print_report(&report);
            }
        }

        CliCommand::Analyze { password } => {
            let report = analyzer::check_strength(&password);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }

        CliCommand::Breach { password } => {
            let checker = BreachChecker::new(&config.breach_api_url, config.breach_timeout);
            let verdict = checker.check(&password).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&verdict)?);
            } else {
                print_verdict(&verdict);
            }
        }

        CliCommand::Hash {
            password,
            iterations,
        } => {
            let iterations = config.clamped_iterations(iterations);
            let hash = crypto::hash_password_pbkdf2(&password, iterations)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&hash)?);
            } else {
                print_hash(&hash);
            }
        }
    }

    Ok(())
}

pub fn print_report(report: &StrengthReport) {
    let strength = report.strength.to_string();
    let styled_strength = match report.score {
        80..=u8::MAX => style(strength).green().bold(),
        40..=79 => style(strength).yellow().bold(),
        _ => style(strength).red().bold(),
    };

    println!(
        "\n📊 Strength: {} ({}/100, {:.1} bits of entropy)",
        styled_strength, report.score, report.details.entropy_bits
    );

    for item in &report.feedback {
        let line = match item.kind {
            FeedbackKind::Good => format!("  ✅ {}", item.message),
            FeedbackKind::Warning => format!("  ⚠️  {}", style(&item.message).yellow()),
            FeedbackKind::Bad => format!("  ❌ {}", style(&item.message).red()),
            FeedbackKind::Info => format!("  💡 {}", style(&item.message).cyan()),
        };
        println!("{}", line);
    }
}

pub fn print_verdict(verdict: &BreachVerdict) {
    if verdict.is_error {
        println!(
            "\n❌ {}",
            style("Breach lookup failed - check your network and try again").red()
        );
    } else if verdict.is_compromised {
        println!(
            "\n🚨 {} Seen {} times in known breaches - do not use it.",
            style("This password is compromised!").red().bold(),
            verdict.occurrence_count
        );
    } else {
        println!(
            "\n✅ {}",
            style("No match in the breach corpus").green()
        );
    }
}

pub fn print_hash(hash: &DerivedHash) {
    println!("\n🔒 Derived with {} ({} iterations)", hash.method, hash.iterations);
    println!("  Key:  {}", hash.key);
    println!("  Salt: {}", hash.salt);
}
