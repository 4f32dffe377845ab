use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Result};
use tsauto::application::PROJECT_FILE;
use tsauto::config::ColorMode;
use tsauto::infrastructure::{FsWorkspace, JsonSurface, ShellProcessRunner};
use tsauto::{CompilationOrchestrator, CompilePhase, StatusReporter};

use super::Session;
use crate::ui::console::Console;
use crate::ui::views::compile::{render_compile_header, render_compile_result};

/// Compile once, choosing project or single-file mode exactly like a watch
/// trigger would, then exit nonzero on failure.
pub fn cmd_compile(
    root: Option<&Path>,
    compiler: Option<String>,
    file: Option<PathBuf>,
    json: bool,
    verbose: u8,
    color: Option<ColorMode>,
) -> Result<()> {
    let session = Session::load(root, json, verbose, color)?;
    let options = session.options(compiler, false);
    let excludes = session.excludes()?;
    let ui = session.ui;

    let surfaces = if json {
        JsonSurface::stdout().bundle()
    } else {
        Console::stdout(&ui).one_shot().bundle()
    };
    let workspace = Arc::new(FsWorkspace::new(&session.root).with_excludes(excludes));
    let runner = Arc::new(ShellProcessRunner::new());
    let compiler_display = options.compiler.clone();
    let mut orchestrator =
        CompilationOrchestrator::new(options, workspace, runner, StatusReporter::new(surfaces));

    orchestrator.discover_now()?;

    let trigger = match (file, orchestrator.config_path()) {
        (Some(file), _) => absolutize(&file)?,
        (None, Some(config)) => config.to_path_buf(),
        (None, None) => bail!(
            "no {} found under {}; pass a FILE to compile",
            PROJECT_FILE,
            session.root.display()
        ),
    };

    if !json {
        let target = orchestrator
            .config_path()
            .unwrap_or(trigger.as_path())
            .display()
            .to_string();
        print!(
            "{}",
            render_compile_header(
                &session.root.display().to_string(),
                &target,
                &compiler_display,
                ui.color,
                ui.unicode,
            )
        );
        println!();
    }

    orchestrator.compile(trigger);
    orchestrator.wait_idle();
    let success = orchestrator.phase() != CompilePhase::Failed;
    orchestrator.dispose();

    if !json {
        print!("{}", render_compile_result(success, ui.color, ui.unicode));
    }
    if !success {
        bail!("compilation failed");
    }
    Ok(())
}

fn absolutize(file: &Path) -> Result<PathBuf> {
    let path = if file.is_absolute() {
        file.to_path_buf()
    } else {
        std::env::current_dir()?.join(file)
    };
    if !path.is_file() {
        bail!("no such file: {}", file.display());
    }
    Ok(path)
}
