use crate::cli::args::Cli;
use crate::error::Result;
use crate::processors::{IntegrityChecker, LineMerger};
use crate::readers::ReportReader;
use crate::utils::logging::init_logging;
use crate::utils::progress::ProgressReporter;
use crate::writers::ReportWriter;
use tracing::{debug, info, warn};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);
    debug!(reports = cli.files.len(), mmap = cli.mmap, "Reading reports");

    // Every report is read before anything is written
    let reader = ReportReader::with_mmap(cli.mmap);
    let reports = reader.read_all(&cli.files)?;

    let checker = IntegrityChecker::new();
    let mut integrity_report = checker.check_reports(&reports)?;

    let merger = LineMerger::new();
    let mut writer = ReportWriter::open(cli.output.as_deref())?;
    let progress = ProgressReporter::new(
        integrity_report.total_lines as u64,
        "Merging reports...",
        !cli.progress,
    );

    for index in 0..integrity_report.total_lines {
        let merged = merger.merge_line(&reports, index)?;
        writer.write_line(&merged.text)?;
        integrity_report.record_line(index, &merged, &reports);
        progress.increment(1);
    }

    let lines_written = writer.lines_written();
    writer.finish()?;
    progress.finish_with_message(&format!("Merged {} lines", lines_written));

    let summary = checker.generate_summary(&integrity_report);
    if integrity_report.is_clean() {
        info!("{}", summary);
    } else {
        warn!("{}", summary);
    }
    if let Some(output) = &cli.output {
        info!(path = %output.display(), "Wrote merged report");
    }

    Ok(())
}
