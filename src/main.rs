// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Coursegraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Coursegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Coursegraph CLI entrypoint.
//!
//! Fetches the latest published semesters, merges them into one catalog and
//! writes the result into the data folder. `--offline` rebuilds from raw
//! semester files already present in the folder instead of downloading.

use std::error::Error;

const DEFAULT_DATA_DIR: &str = "public/data";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<data-dir>] [--order newest|oldest] [--durable-writes]\n  {program} [--data <dir>] [--order newest|oldest] [--durable-writes]\n  {program} [<data-dir>] --offline\n\nIf data-dir/--data is omitted, `{DEFAULT_DATA_DIR}` is used.\n\n--offline rebuilds the merged catalog from raw semester files already in the data folder\ninstead of downloading.\n\n--order picks which semester wins conflicting descriptive fields (default: newest).\n\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    data_dir: Option<String>,
    offline: bool,
    order: Option<coursegraph::builder::MergeOrder>,
    durable_writes: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--offline" => {
                if options.offline {
                    return Err(());
                }
                options.offline = true;
            }
            "--data" => {
                if options.data_dir.is_some() {
                    return Err(());
                }
                let dir = args.next().ok_or(())?;
                options.data_dir = Some(dir);
            }
            "--order" => {
                if options.order.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.order = Some(match raw.as_str() {
                    "newest" => coursegraph::builder::MergeOrder::NewestFirst,
                    "oldest" => coursegraph::builder::MergeOrder::OldestFirst,
                    _ => return Err(()),
                });
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.data_dir.is_some() {
                    return Err(());
                }
                options.data_dir = Some(arg);
            }
        }
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "coursegraph".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let dir = options.data_dir.unwrap_or_else(|| DEFAULT_DATA_DIR.to_owned());
        let store = if options.durable_writes {
            coursegraph::store::DataFolder::new(&dir)
                .with_durability(coursegraph::store::WriteDurability::Durable)
        } else {
            coursegraph::store::DataFolder::new(&dir)
        };
        let order = options.order.unwrap_or_default();

        let report = if options.offline {
            let source = coursegraph::source::FolderSource::new(&dir);
            // Raw files and the index are already on disk; re-saving them
            // would clobber the downloaded date windows.
            coursegraph::builder::build_catalog(&source, None, order)?
        } else {
            let source = coursegraph::source::HttpSource::new();
            coursegraph::builder::build_catalog(&source, Some(&store), order)?
        };

        for skipped in &report.skipped {
            eprintln!("coursegraph: skipped semester {}: {}", skipped.label, skipped.reason);
        }

        let path = store.save_merged(&report.catalog)?;
        let merged: Vec<String> =
            report.merged.iter().map(|semester| semester.code()).collect();
        println!(
            "merged {count} courses from semesters [{semesters}] into {path}",
            count = report.catalog.len(),
            semesters = merged.join(", "),
            path = path.display(),
        );

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("coursegraph: {err}");
        std::process::exit(1);
    }
}
