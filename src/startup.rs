//! One-shot startup hook
//!
//! The host invokes the hook once, after its own initialization. The hook
//! launches detached helper processes: screen-blanking disable, a clipboard
//! manager, the wallpaper setter (only if the wallpaper file exists at
//! hook-run time), and a delayed display reconfigure. Children are never
//! waited on and their exit codes are never checked; a spawn failure is
//! logged and otherwise ignored.
//!
//! Config reloads re-evaluate the descriptor but must not re-fire the hook;
//! the `Once` guard holds for the whole process lifetime.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Once;
use tracing::{info, warn};

use crate::config::action::SpawnCommand;
use crate::constants::commands;

/// The process-wide hook instance the host runs
pub static STARTUP_HOOK: StartupHook = StartupHook::new();

/// One-shot guard around the startup spawn plan
pub struct StartupHook {
    once: Once,
}

impl StartupHook {
    pub const fn new() -> Self {
        Self { once: Once::new() }
    }

    /// The ordered spawn plan for a given home directory.
    ///
    /// Pure: no processes are launched here. The wallpaper entry is present
    /// iff the wallpaper file exists under `home` at call time.
    pub fn plan(home: &Path) -> Vec<SpawnCommand> {
        let mut plan = vec![
            SpawnCommand::shell(commands::DISABLE_BLANKING),
            SpawnCommand::exec(commands::CLIPBOARD_MANAGER),
        ];

        let wallpaper = home.join(commands::WALLPAPER_FILE);
        if wallpaper.exists() {
            let mut argv: Vec<String> = commands::WALLPAPER_SETTER
                .iter()
                .map(|s| s.to_string())
                .collect();
            argv.push(wallpaper.to_string_lossy().into_owned());
            plan.push(SpawnCommand::Exec(argv));
        }

        plan.push(SpawnCommand::shell(commands::DISPLAY_RECONFIGURE));
        plan
    }

    /// Execute the plan, at most once per process
    pub fn run(&self) {
        self.run_with(spawn_detached);
    }

    /// Whether the hook already fired in this process
    pub fn has_run(&self) -> bool {
        self.once.is_completed()
    }

    fn run_with<F: FnMut(&SpawnCommand)>(&self, mut spawn: F) {
        self.once.call_once(|| {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            for command in Self::plan(&home) {
                spawn(&command);
            }
        });
    }
}

impl Default for StartupHook {
    fn default() -> Self {
        Self::new()
    }
}

/// Launch a command without supervising it.
/// The child handle is dropped immediately; nothing is collected.
fn spawn_detached(command: &SpawnCommand) {
    let result = match command {
        SpawnCommand::Exec(argv) => match argv.split_first() {
            Some((program, args)) => Command::new(program).args(args).spawn(),
            None => return,
        },
        SpawnCommand::Shell(script) => Command::new("sh").arg("-c").arg(script).spawn(),
    };

    match result {
        Ok(child) => info!(pid = child.id(), %command, "Spawned startup process"),
        Err(e) => warn!(%command, error = %e, "Failed to spawn startup process"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_plan_without_wallpaper() {
        let home = tempfile::tempdir().unwrap();
        let plan = StartupHook::plan(home.path());

        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0], SpawnCommand::shell(commands::DISABLE_BLANKING));
        assert_eq!(plan[1], SpawnCommand::exec(commands::CLIPBOARD_MANAGER));
        assert_eq!(plan[2], SpawnCommand::shell(commands::DISPLAY_RECONFIGURE));
        assert!(plan.iter().all(|c| c.program() != "feh"));
    }

    #[test]
    fn test_plan_with_wallpaper() {
        let home = tempfile::tempdir().unwrap();
        let wallpaper = home.path().join(commands::WALLPAPER_FILE);
        fs::write(&wallpaper, b"png").unwrap();

        let plan = StartupHook::plan(home.path());
        assert_eq!(plan.len(), 4);

        // The wallpaper spawn sits between the clipboard manager and the
        // display reconfigure, and carries the resolved path
        let SpawnCommand::Exec(argv) = &plan[2] else {
            panic!("expected exec command, got {:?}", plan[2]);
        };
        assert_eq!(argv[0], "feh");
        assert_eq!(argv[1], "--bg-scale");
        assert_eq!(argv[2], wallpaper.to_string_lossy());
    }

    #[test]
    fn test_hook_fires_exactly_once() {
        let hook = StartupHook::new();
        let runs = AtomicUsize::new(0);

        assert!(!hook.has_run());
        hook.run_with(|_| {
            runs.fetch_add(1, Ordering::SeqCst);
        });
        let first = runs.load(Ordering::SeqCst);
        assert!(first >= 3);
        assert!(hook.has_run());

        // A reload re-running the hook spawns nothing further
        hook.run_with(|_| {
            runs.fetch_add(1, Ordering::SeqCst);
        });
        hook.run_with(|_| {
            runs.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(runs.load(Ordering::SeqCst), first);
    }
}
