use std::collections::HashSet;
use std::error::Error;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use log::{info, warn};
use notify::{EventKind, RecursiveMode, Watcher};

use crate::cli::Cli;
use crate::job::Job;

/// Editors often save by replacing the file, so the parent directory is
/// watched and events are filtered by file name.
fn watch_targets(inputs: &[&Path]) -> (HashSet<PathBuf>, HashSet<OsString>) {
    let mut dirs = HashSet::new();
    let mut names = HashSet::new();
    for path in inputs {
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        dirs.insert(dir);
        if let Some(name) = path.file_name() {
            names.insert(name.to_os_string());
        }
    }
    (dirs, names)
}

/// Blocks, re-rendering after every change to an input file.
pub fn run(cli: &Cli, mut job: Job) -> Result<(), Box<dyn Error>> {
    let inputs = cli.inputs();
    if inputs.is_empty() {
        warn!("--watch needs --scene, --config or --materials; nothing to watch");
        return Ok(());
    }
    let (dirs, names) = watch_targets(&inputs);

    let (tx, rx) = mpsc::channel::<()>();
    let mut watcher =
        notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                match event.kind {
                    EventKind::Modify(_)
                    | EventKind::Create(_)
                    | EventKind::Remove(_)
                    | EventKind::Any => {
                        let relevant = event
                            .paths
                            .iter()
                            .any(|p| p.file_name().is_some_and(|n| names.contains(n)));
                        if relevant {
                            let _ = tx.send(());
                        }
                    }
                    _ => {}
                }
            }
        })?;
    for dir in &dirs {
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
    }
    let listed: Vec<String> = inputs.iter().map(|p| p.display().to_string()).collect();
    info!("watching {} for changes", listed.join(", "));

    while rx.recv().is_ok() {
        // Coalesce the burst of events a single save produces.
        while rx.recv_timeout(Duration::from_millis(150)).is_ok() {}
        match Job::load(cli) {
            Ok(next) => job = next,
            Err(e) => {
                warn!("reload failed, keeping previous inputs: {e}");
                continue;
            }
        }
        if !job.render_and_write(cli)? {
            warn!("re-render produced no image");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_file_names_watch_the_current_directory() {
        let (dirs, names) = watch_targets(&[Path::new("scene.toml"), Path::new("cfg/render.toml")]);
        assert!(dirs.contains(Path::new(".")));
        assert!(dirs.contains(Path::new("cfg")));
        assert_eq!(names.len(), 2);
        assert!(names.contains(&OsString::from("render.toml")));
    }
}
