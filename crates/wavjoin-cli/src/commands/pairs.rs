//! Dry run: show how files in a directory pair up.

use super::common::{NamingArgs, load_config};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use wavjoin_core::{PairSet, resolve_pairs};
use wavjoin_io::list_candidates;

#[derive(Args)]
pub struct PairsArgs {
    /// Directory holding the mono files
    #[arg(value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// Print the listing as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    naming: NamingArgs,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum Status {
    Ready,
    Orphan,
    Conflict,
}

/// One output name and how it resolved.
#[derive(Debug, Serialize)]
struct PairListing {
    output: String,
    status: Status,
    left: Option<String>,
    right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    problem: Option<String>,
}

fn listings(pairs: &PairSet) -> Vec<PairListing> {
    pairs
        .iter()
        .map(|(output, entry)| match entry {
            Ok(pair) => {
                let problem = pair.sources().err().map(|e| e.to_string());
                PairListing {
                    output: output.clone(),
                    status: if problem.is_some() {
                        Status::Orphan
                    } else {
                        Status::Ready
                    },
                    left: pair.left.clone(),
                    right: pair.right.clone(),
                    problem,
                }
            }
            Err(conflict) => PairListing {
                output: output.clone(),
                status: Status::Conflict,
                left: None,
                right: None,
                problem: Some(conflict.to_string()),
            },
        })
        .collect()
}

pub fn run(args: PairsArgs) -> anyhow::Result<()> {
    let config = load_config(&args.naming)?;
    let names = list_candidates(&args.dir, &config.extension)?;
    let listed = listings(&resolve_pairs(&names, &config.naming()));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listed)?);
        return Ok(());
    }

    if listed.is_empty() {
        println!("No pairs found in {}", args.dir.display());
        return Ok(());
    }

    for item in &listed {
        match (&item.status, &item.problem) {
            (Status::Ready, _) => println!(
                "{} <- {} + {}",
                item.output,
                item.left.as_deref().unwrap_or_default(),
                item.right.as_deref().unwrap_or_default()
            ),
            (status, problem) => println!(
                "{} ({status:?}): {}",
                item.output,
                problem.as_deref().unwrap_or_default()
            ),
        }
    }

    let ready = listed.iter().filter(|l| l.status == Status::Ready).count();
    println!("\n{ready} of {} output(s) ready to join", listed.len());
    Ok(())
}
