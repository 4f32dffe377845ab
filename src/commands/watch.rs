use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tsauto::application::Surfaces;
use tsauto::config::ColorMode;
use tsauto::infrastructure::{
    FileLogSurface, FsWorkspace, JsonSurface, NotifyWatchService, ShellProcessRunner,
};
use tsauto::{CompilationOrchestrator, StatusReporter};

use super::Session;
use crate::ui::console::Console;
use crate::ui::context::UiContext;
use crate::ui::views::watch::{render_watch_header, WatchHeader};

#[derive(Debug, Default)]
pub struct WatchArgs {
    pub root: Option<PathBuf>,
    pub compiler: Option<String>,
    pub log_file: Option<PathBuf>,
    pub overlap: bool,
}

pub fn cmd_watch(args: WatchArgs, json: bool, verbose: u8, color: Option<ColorMode>) -> Result<()> {
    let session = Session::load(args.root.as_deref(), json, verbose, color)?;
    let options = session.options(args.compiler, args.overlap);
    let excludes = session.excludes()?;
    let surfaces = build_surfaces(&session.ui, args.log_file.as_deref())?;

    if !json {
        let root = session.root.display().to_string();
        let overlap = options.overlap.to_string();
        let settings = session
            .loaded
            .source
            .as_ref()
            .map(|p| p.display().to_string());
        print!(
            "{}",
            render_watch_header(
                &WatchHeader {
                    root: &root,
                    sources: &options.sources,
                    compiler: &options.compiler,
                    overlap: &overlap,
                    settings: settings.as_deref(),
                },
                session.ui.color,
                session.ui.unicode,
            )
        );
        println!();
    }

    let workspace = Arc::new(FsWorkspace::new(&session.root).with_excludes(excludes.clone()));
    let watch = NotifyWatchService::new(&session.root).with_excludes(excludes);
    let runner = Arc::new(ShellProcessRunner::new());
    let mut orchestrator =
        CompilationOrchestrator::new(options, workspace, runner, StatusReporter::new(surfaces));

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl+C handler")?;

    orchestrator
        .start(&watch)
        .with_context(|| format!("cannot watch {}", session.root.display()))?;
    orchestrator.run(&running);
    Ok(())
}

fn build_surfaces(ui: &UiContext, log_file: Option<&Path>) -> Result<Surfaces> {
    let surfaces = if ui.json {
        JsonSurface::stdout().bundle()
    } else {
        Console::stdout(ui).bundle()
    };
    match log_file {
        Some(path) => {
            let file = FileLogSurface::open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            Ok(surfaces.with_log(Box::new(file)))
        }
        None => Ok(surfaces),
    }
}
