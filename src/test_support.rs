use crate::cli::{InitArgs, TargetArgs};
use crate::commands::init::run_init;
use crate::context::ScaffoldContext;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

pub(crate) fn target_args(target: &Path, agent: &str) -> TargetArgs {
    TargetArgs {
        agent_type: Some(agent.to_string()),
        target_path: target.to_path_buf(),
        dry_run: false,
        templates_dir: None,
    }
}

/// A temp repository fully scaffolded by `init` for `agent`.
pub(crate) fn scaffolded_target(agent: &str) -> (TempDir, ScaffoldContext) {
    let temp_dir = TempDir::new().unwrap();
    let args = InitArgs {
        target: target_args(temp_dir.path(), agent),
        preset: None,
        no_guards: false,
        save_config: false,
    };
    let ctx = ScaffoldContext::resolve(&args.target).unwrap();
    run_init(&ctx, &args).unwrap();
    (temp_dir, ctx)
}
