//! Join every left/right pair in a directory.

use super::common::{NamingArgs, load_config};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use wavjoin_core::resolve_pairs;
use wavjoin_io::{MergeOptions, list_candidates, merge_entry};

#[derive(Args)]
pub struct MergeArgs {
    /// Directory holding the mono files
    #[arg(value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// Delete both source files after a successful join
    #[arg(long)]
    del: bool,

    /// Fail a pair instead of replacing an existing output file
    #[arg(long)]
    no_clobber: bool,

    #[command(flatten)]
    naming: NamingArgs,
}

pub fn run(args: MergeArgs) -> anyhow::Result<()> {
    let config = load_config(&args.naming)?;
    let options = MergeOptions {
        delete_sources: args.del || config.delete_sources,
        overwrite: config.overwrite && !args.no_clobber,
    };

    let names = list_candidates(&args.dir, &config.extension)?;
    let pairs = resolve_pairs(&names, &config.naming());

    if pairs.is_empty() {
        println!("No pairs found in {}", args.dir.display());
        return Ok(());
    }

    let pb = ProgressBar::new(pairs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("##-"),
    );

    let mut failed = 0usize;
    for (output_name, entry) in &pairs {
        pb.set_message(output_name.clone());

        let sources = entry.as_ref().ok().and_then(|pair| pair.sources().ok());
        if let Some((left, right)) = sources {
            pb.suspend(|| {
                println!("\tOpening {left}...");
                println!("\tOpening {right}...");
            });
        }

        let outcome = merge_entry(&args.dir, output_name, entry, options);
        match &outcome.result {
            Ok(report) => pb.suspend(|| {
                print!("Writing {output_name}...");
                if report.sources_deleted {
                    print!("Cleaning...");
                }
                println!("Done.");
            }),
            Err(e) => {
                failed += 1;
                pb.suspend(|| eprintln!("Failed {output_name} [{:?}]: {e}", e.kind()));
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    let total = pairs.len();
    println!("\nJoined {} of {} pair(s)", total - failed, total);

    if failed > 0 {
        anyhow::bail!("{failed} of {total} pair(s) failed");
    }
    Ok(())
}
