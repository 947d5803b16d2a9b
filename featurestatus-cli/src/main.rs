use std::fs;
use std::io::{self, Read};
use std::process;

use chrono::DateTime;
use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::{Builder, Env};
use log::{error, info};

use featurestatus::capabilities::{CapabilitiesReply, CapabilitySections, Ocs, OcsData, OcsMeta};
use featurestatus::status::FeatureStatus;

#[derive(Parser)]
#[command(version, about="Inspect the account feature status in a capabilities reply", long_about = None)]
#[command(propagate_version = true)]
struct Opts {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a capabilities reply and show the account feature status
    Show {
        /// Path to a capabilities reply JSON file, or - for stdin
        file: String,
    },
    /// Print a capabilities reply template with default values
    Template,
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();

    match opts.command {
        Commands::Show { file } => show(&file),
        Commands::Template => template(),
    }
}

fn show(file: &str) {
    let payload = match read_payload(file) {
        Ok(payload) => payload,
        Err(e) => {
            error!("Failed to read {file}: {e}");
            process::exit(1);
        }
    };

    let status = match featurestatus::read_feature_status(&payload) {
        Ok(status) => status,
        Err(e) => {
            error!("Failed to decode capabilities reply: {e}");
            process::exit(1);
        }
    };

    header("Account Feature Status");

    println!();
    println!("Trial             : {}", yes_no(status.is_trial));
    println!("Trial Expired     : {}", yes_no(status.trial_expired));
    println!("Trial Remaining   : {} sec", status.trial_remaining_sec);
    println!("Trial Ends        : {}", render_time(status.trial_end_time));
    println!("Trial End Date    : {}", render_text(status.trial_end.as_deref()));
    println!();
    println!("Removal Expired   : {}", yes_no(status.account_remove_expired));
    println!("Removal Remaining : {} sec", status.account_remove_remaining_sec);
    println!("Removal At        : {}", render_time(status.account_remove_time));
    println!("Removal Date      : {}", render_text(status.account_remove.as_deref()));
    println!();

    info!("Decoded feature status from {file}");
}

fn template() {
    let reply = CapabilitiesReply {
        ocs: Ocs {
            meta: OcsMeta::default(),
            data: OcsData {
                capabilities: CapabilitySections {
                    features: Some(FeatureStatus::default()),
                },
            },
        },
    };

    match serde_json::to_string_pretty(&reply) {
        Ok(doc) => println!("{doc}"),
        Err(e) => {
            error!("Failed to encode template: {e}");
            process::exit(1);
        }
    }
}

fn read_payload(file: &str) -> io::Result<String> {
    if file == "-" {
        let mut payload = String::new();
        io::stdin().read_to_string(&mut payload)?;
        Ok(payload)
    } else {
        fs::read_to_string(file)
    }
}

//////////////////////////////////////////////////

fn header(title: &str) {
    println!("{}", "-----------------------------------------------".white().on_blue());
    println!("        {}", title.white());
    println!("{}", "-----------------------------------------------".white().on_blue());
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Epoch seconds rendered as a UTC datetime, `-` when unset.
fn render_time(epoch_sec: i64) -> String {
    if epoch_sec == 0 {
        return "-".to_string();
    }

    match DateTime::from_timestamp(epoch_sec, 0) {
        Some(at) => at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => epoch_sec.to_string(),
    }
}

fn render_text(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_render_as_utc_or_dash() {
        assert_eq!(render_time(0), "-");
        assert_eq!(render_time(1_704_067_200), "2024-01-01 00:00:00 UTC");
    }

    #[test]
    fn absent_and_empty_text_render_as_dash() {
        assert_eq!(render_text(None), "-");
        assert_eq!(render_text(Some("")), "-");
        assert_eq!(render_text(Some("2024-01-01")), "2024-01-01");
    }
}
