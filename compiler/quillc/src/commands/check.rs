//! The `check` command: parse several files in parallel and report
//! diagnostics for each.

use rayon::prelude::*;
use tracing::debug;

use super::{analyze_file, read_file, render_diagnostics, write_stderr, Status};
use crate::{DriverError, Options};

/// Result of checking one file, rendered but not yet printed.
struct FileReport {
    path: String,
    status: Status,
    rendered: Vec<u8>,
}

fn check_one(path: &str, colors: bool) -> Result<FileReport, DriverError> {
    let source = read_file(path)?;
    let analysis = analyze_file(path, &source)?;
    debug!(path, errors = analysis.error_count, "checked");
    Ok(FileReport {
        path: path.to_string(),
        status: analysis.status(),
        rendered: render_diagnostics(
            path,
            &source,
            &analysis.diagnostics,
            (analysis.error_count, analysis.warning_count),
            colors,
        ),
    })
}

/// Check every file in `options.files`.
///
/// Files are parsed in parallel; reports print in command-line order.
/// A file that cannot be read does not stop the others.
pub fn check_files(options: &Options) -> Result<Status, DriverError> {
    let colors = options.use_colors();
    let reports: Vec<Result<FileReport, DriverError>> = options
        .files
        .par_iter()
        .map(|path| check_one(path, colors))
        .collect();

    let mut status = Status::Clean;
    let mut failed = 0;
    for report in reports {
        match report {
            Ok(report) => {
                write_stderr(&report.rendered);
                if report.status == Status::Failed {
                    status = Status::Failed;
                } else if !options.quiet {
                    println!("OK: {}", report.path);
                }
            }
            Err(err) => {
                eprintln!("error: {err}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(DriverError::Incomplete {
            failed,
            total: options.files.len(),
        });
    }
    Ok(status)
}
