use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::output::view::FolderView;
use dailyfolder::DeletionReport;

#[derive(Serialize)]
struct FailureJson<'a> {
    path: &'a Path,
    error: String,
    not_found: bool,
}

#[derive(Serialize)]
struct ReportJson<'a> {
    dry_run: bool,
    deleted: &'a [PathBuf],
    failed: Vec<FailureJson<'a>>,
}

impl<'a> ReportJson<'a> {
    fn new(report: &'a DeletionReport, dry_run: bool) -> Self {
        Self {
            dry_run,
            deleted: &report.deleted,
            failed: report
                .failures
                .iter()
                .map(|f| FailureJson {
                    path: &f.path,
                    error: f.error.to_string(),
                    not_found: f.error.is_not_found(),
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct RunJson<'a> {
    today: &'a Path,
    #[serde(flatten)]
    cleanup: ReportJson<'a>,
    folders: &'a [FolderView],
}

pub(crate) fn folders_json(views: &[FolderView]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(views)
}

pub(crate) fn report_json(
    report: &DeletionReport,
    dry_run: bool,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ReportJson::new(report, dry_run))
}

pub(crate) fn run_json(
    today: &Path,
    report: &DeletionReport,
    views: &[FolderView],
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&RunJson {
        today,
        cleanup: ReportJson::new(report, false),
        folders: views,
    })
}
