use crate::cli::{Cli, Commands, ListArgs};
use crate::output::{
    FolderView, TableOptions, folders_json, print_failures, print_folder_table, print_report,
    report_json, run_json, sort_views,
};
use dailyfolder::utils::{parse_date, resolve_base_dir};
use dailyfolder::{
    AppError, DailyFolderManager, DateSource, DeletionReport, FixedDate, FsScanner, SystemClock,
    Timezone, is_daily_folder_name,
};

type Manager<'a> = DailyFolderManager<FsScanner, &'a dyn DateSource>;

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) manager: Manager<'a>,
}

impl CommandContext<'_> {
    fn table_options(&self) -> TableOptions {
        TableOptions {
            use_color: self.cli.use_color(),
            preview_limit: self.cli.preview_limit,
        }
    }

    fn capture(&self, paths: &[std::path::PathBuf]) -> Vec<FolderView> {
        let mut views: Vec<FolderView> = paths
            .iter()
            .map(|path| FolderView::capture(&self.manager, path))
            .collect();
        sort_views(&mut views, self.cli.order);
        views
    }
}

fn failures_to_result(report: &DeletionReport) -> Result<(), AppError> {
    if report.is_success() {
        Ok(())
    } else {
        Err(AppError::DeletionFailed {
            count: report.failures.len(),
        })
    }
}

/// Start-up flow: sweep, ensure today, show what is left
fn handle_run(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let report = ctx.manager.delete_empty_folders();
    // The sweep already happened; report it even if today's folder fails
    let today = match ctx.manager.create_folder_for_today() {
        Ok(today) => today,
        Err(e) => {
            if ctx.cli.json {
                println!("{}", report_json(&report, false)?);
                print_failures(&report);
            } else if report.attempted() > 0 {
                print_report(&report, false);
            }
            return Err(e.into());
        }
    };
    let views = ctx.capture(&ctx.manager.other_daily_folders());

    if ctx.cli.json {
        println!("{}", run_json(&today, &report, &views)?);
        print_failures(&report);
    } else {
        if report.attempted() > 0 {
            print_report(&report, false);
        }
        println!("Today: {}", today.display());
        if views.is_empty() {
            println!("No other daily folders.");
        } else {
            print_folder_table(&views, ctx.table_options());
        }
    }
    failures_to_result(&report)
}

fn handle_list(ctx: &CommandContext<'_>, args: &ListArgs) -> Result<(), AppError> {
    let paths = if args.all {
        ctx.manager.list_daily_folders()
    } else {
        ctx.manager.other_daily_folders()
    };
    let views = ctx.capture(&paths);

    if ctx.cli.json {
        println!("{}", folders_json(&views)?);
    } else if views.is_empty() {
        println!("No daily folders found in {}.", ctx.manager.base_dir().display());
    } else {
        print_folder_table(&views, ctx.table_options());
    }
    Ok(())
}

fn print_path(ctx: &CommandContext<'_>, path: &std::path::Path) -> Result<(), AppError> {
    if ctx.cli.json {
        let json = serde_json::json!({ "path": path });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{}", path.display());
    }
    Ok(())
}

/// Resolve a user-supplied name to an existing daily folder
fn existing_folder(ctx: &CommandContext<'_>, name: &str) -> Result<std::path::PathBuf, AppError> {
    let path = ctx.manager.base_dir().join(name);
    if is_daily_folder_name(name) && path.exists() {
        Ok(path)
    } else {
        Err(AppError::UnknownFolder {
            name: name.to_string(),
        })
    }
}

fn handle_contents(ctx: &CommandContext<'_>, name: &str) -> Result<(), AppError> {
    let path = existing_folder(ctx, name)?;
    let mut entries = ctx.manager.list_folder_contents(&path);
    entries.sort();
    if ctx.cli.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in entries {
            println!("{entry}");
        }
    }
    Ok(())
}

fn handle_clean(ctx: &CommandContext<'_>, dry_run: bool) -> Result<(), AppError> {
    let report = if dry_run {
        DeletionReport {
            deleted: ctx.manager.empty_folders(),
            failures: Vec::new(),
        }
    } else {
        ctx.manager.delete_empty_folders()
    };

    if ctx.cli.json {
        println!("{}", report_json(&report, dry_run)?);
        print_failures(&report);
    } else {
        print_report(&report, dry_run);
    }
    failures_to_result(&report)
}

fn handle_delete(ctx: &CommandContext<'_>, names: &[String]) -> Result<(), AppError> {
    for name in names {
        existing_folder(ctx, name)?;
    }
    let report = ctx.manager.delete_named(names);

    if ctx.cli.json {
        println!("{}", report_json(&report, false)?);
        print_failures(&report);
    } else {
        print_report(&report, false);
    }
    failures_to_result(&report)
}

fn build_clock(cli: &Cli) -> Result<Box<dyn DateSource>, AppError> {
    if let Some(raw) = cli.date.as_deref() {
        let date = parse_date(raw)?;
        tracing::debug!(%date, "using fixed date");
        return Ok(Box::new(FixedDate(date)));
    }
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    Ok(Box::new(SystemClock::new(timezone)))
}

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let clock = build_clock(cli)?;
    let base_dir = resolve_base_dir(cli.base_dir.as_deref())?;
    let ctx = CommandContext {
        cli,
        manager: DailyFolderManager::with_parts(base_dir, FsScanner, &*clock),
    };
    tracing::debug!(
        base_dir = %ctx.manager.base_dir().display(),
        today = %ctx.manager.today_folder_name(),
        "starting"
    );

    match &cli.command {
        None | Some(Commands::Run) => handle_run(&ctx),
        Some(Commands::List(args)) => handle_list(&ctx, args),
        Some(Commands::Today) => {
            let path = ctx.manager.create_folder_for_today()?;
            print_path(&ctx, &path)
        }
        Some(Commands::Path) => print_path(&ctx, &ctx.manager.current_daily_folder_path()),
        Some(Commands::Contents { name }) => handle_contents(&ctx, name),
        Some(Commands::Clean { dry_run }) => handle_clean(&ctx, *dry_run),
        Some(Commands::Delete { names }) => handle_delete(&ctx, names),
    }
}
