use dailyfolder::DeletionReport;

/// Deleted paths to stdout, failures to stderr
pub(crate) fn print_report(report: &DeletionReport, dry_run: bool) {
    let verb = if dry_run { "Would delete" } else { "Deleted" };
    for path in &report.deleted {
        println!("{verb}: {}", path.display());
    }
    print_failures(report);
    if report.attempted() == 0 {
        println!("No folders to delete.");
    }
}

/// One "Unable to delete" line per failure, on stderr
pub(crate) fn print_failures(report: &DeletionReport) {
    for failure in &report.failures {
        eprintln!("Unable to delete: {} ({})", failure.path.display(), failure.error);
    }
}
