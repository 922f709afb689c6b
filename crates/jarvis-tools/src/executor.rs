//! Command executor — runs one shell command to completion and reports the
//! interleaved stdout/stderr of the child.
//!
//! Working-directory problems are reported as [`ExecutorError`] before any
//! process is spawned. Everything that happens after the spawn attempt
//! (non-zero exit, launch failure) is folded into a [`CommandOutcome`] whose
//! `formatted_message` is the text handed back to the caller.

use std::ffi::OsString;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, info, warn};

/// Command interpreter used to run command strings on this host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellStrategy {
    /// `sh -c <command>`.
    Posix,
    /// `cmd /C <command>`.
    Windows,
}

impl ShellStrategy {
    /// Pick the interpreter for the platform this binary was built for.
    #[must_use]
    pub fn for_host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Build the program and argument list that runs `command` through this shell.
    #[must_use]
    pub fn build_invocation(self, command: &str) -> ShellInvocation {
        let (program, flag) = match self {
            Self::Posix => ("sh", "-c"),
            Self::Windows => ("cmd", "/C"),
        };
        ShellInvocation {
            program,
            args: vec![flag.to_string(), command.to_string()],
        }
    }
}

/// A resolved shell invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellInvocation {
    /// Interpreter binary, looked up on `PATH`.
    pub program: &'static str,
    /// Arguments passed to the interpreter.
    pub args: Vec<String>,
}

/// Environment handed to every child process.
///
/// Children are spawned with a cleared environment and then given exactly
/// these variables, so the executor never reads ambient process state at
/// spawn time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: Vec<(OsString, OsString)>,
}

impl EnvSnapshot {
    /// Snapshot the environment of the current process.
    #[must_use]
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars_os().collect(),
        }
    }

    /// Build a snapshot from explicit key/value pairs.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Iterate over the captured variables.
    pub fn iter(&self) -> impl Iterator<Item = (&OsString, &OsString)> {
        self.vars.iter().map(|(k, v)| (k, v))
    }

    /// Number of captured variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// A validated request to run one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    /// Full command text, passed verbatim to the shell.
    pub command: String,
    /// Directory to launch the shell in. `None` inherits the caller's cwd.
    pub working_directory: Option<PathBuf>,
}

impl CommandRequest {
    /// Create a request that runs in the inherited working directory.
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            working_directory: None,
        }
    }

    /// Set the working directory. Blank input is the same as not setting it.
    #[must_use]
    pub fn with_working_directory(mut self, dir: &str) -> Self {
        if !dir.trim().is_empty() {
            self.working_directory = Some(PathBuf::from(dir));
        }
        self
    }
}

/// Result of running a command that got past validation.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    /// Whether the process launched and exited with status zero.
    pub succeeded: bool,
    /// Exit status, absent when the process never launched.
    pub exit_status: Option<ExitStatus>,
    /// Interleaved stdout/stderr, decoded as UTF-8.
    pub combined_output: String,
    /// Platform description of the failure, when there was one.
    pub error_detail: Option<String>,
    /// The message returned to the caller.
    pub formatted_message: String,
}

impl CommandOutcome {
    fn success(command: &str, status: ExitStatus, combined_output: String) -> Self {
        let formatted_message =
            format!("Command executed successfully: {command}\n\nOutput:\n{combined_output}");
        Self {
            succeeded: true,
            exit_status: Some(status),
            combined_output,
            error_detail: None,
            formatted_message,
        }
    }

    fn failure(
        command: &str,
        status: Option<ExitStatus>,
        combined_output: String,
        error_detail: String,
    ) -> Self {
        let formatted_message = format!(
            "Command failed: {command}\n\nOutput:\n{combined_output}\n\nError: {error_detail}"
        );
        Self {
            succeeded: false,
            exit_status: status,
            combined_output,
            error_detail: Some(error_detail),
            formatted_message,
        }
    }
}

/// Working-directory validation failures. Nothing is spawned when these occur.
#[derive(Debug, thiserror::Error)]
pub enum ExecutorError {
    /// The working directory does not exist.
    #[error("Path '{}' does not exist", path.display())]
    WorkingDirectoryNotFound {
        /// Path as supplied by the caller.
        path: PathBuf,
    },

    /// The working directory exists but is not a directory.
    #[error("path '{}' exists but is not a directory", path.display())]
    WorkingDirectoryNotADirectory {
        /// Path as supplied by the caller.
        path: PathBuf,
    },

    /// The working directory could not be inspected.
    #[error("Error checking path: {source}")]
    WorkingDirectoryUnreadable {
        /// Path as supplied by the caller.
        path: PathBuf,
        /// Underlying stat failure.
        #[source]
        source: io::Error,
    },
}

/// Runs commands through the host shell.
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    shell: ShellStrategy,
    env: EnvSnapshot,
}

impl CommandExecutor {
    /// Create an executor with an explicit shell and environment.
    #[must_use]
    pub fn new(shell: ShellStrategy, env: EnvSnapshot) -> Self {
        Self { shell, env }
    }

    /// Executor for this host, inheriting the current process environment.
    #[must_use]
    pub fn for_host() -> Self {
        Self::new(ShellStrategy::for_host(), EnvSnapshot::capture())
    }

    /// The shell this executor runs commands through.
    #[must_use]
    pub fn shell(&self) -> ShellStrategy {
        self.shell
    }

    /// Run `request` to completion. Blocks the calling thread.
    ///
    /// # Errors
    ///
    /// Returns an [`ExecutorError`] if the working directory is missing, is
    /// not a directory, or cannot be inspected. Command failures are not
    /// errors; they come back as an outcome with `succeeded == false`.
    pub fn execute(&self, request: &CommandRequest) -> Result<CommandOutcome, ExecutorError> {
        if let Some(dir) = &request.working_directory {
            validate_working_directory(dir)?;
        }

        debug!(
            command = %request.command,
            cwd = ?request.working_directory,
            shell = ?self.shell,
            "Executing command"
        );

        let mut output = Vec::new();
        let result = self.spawn_and_wait(request, &mut output);
        let combined_output = String::from_utf8_lossy(&output).into_owned();

        let outcome = match result {
            Ok(status) if status.success() => {
                info!(command = %request.command, %status, "Command completed");
                CommandOutcome::success(&request.command, status, combined_output)
            },
            Ok(status) => {
                info!(command = %request.command, %status, "Command exited with failure");
                CommandOutcome::failure(
                    &request.command,
                    Some(status),
                    combined_output,
                    describe_status(status),
                )
            },
            Err(e) => {
                warn!(command = %request.command, error = %e, "Command could not be run");
                CommandOutcome::failure(&request.command, None, combined_output, e.to_string())
            },
        };

        Ok(outcome)
    }

    /// Spawn the shell with stdout and stderr sharing one pipe, drain it into
    /// `output`, then reap the child.
    fn spawn_and_wait(
        &self,
        request: &CommandRequest,
        output: &mut Vec<u8>,
    ) -> io::Result<ExitStatus> {
        let invocation = self.shell.build_invocation(&request.command);
        let (mut reader, writer) = io::pipe()?;
        let stderr_writer = writer.try_clone()?;

        // The `Command` owns the parent's copies of the write end; it must be
        // dropped before reading or `read_to_end` never sees EOF.
        let mut child = {
            let mut command = Command::new(invocation.program);
            push_args(&mut command, self.shell, &invocation.args);
            command
                .env_clear()
                .envs(self.env.iter())
                .stdin(Stdio::null())
                .stdout(writer)
                .stderr(stderr_writer);
            if let Some(dir) = &request.working_directory {
                command.current_dir(dir);
            }
            command.spawn()?
        };

        let drained = reader.read_to_end(output);
        let status = child.wait()?;
        drained?;
        Ok(status)
    }
}

/// Exit status in the `exit status N` form; signals keep the platform text.
fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit status {code}"),
        None => status.to_string(),
    }
}

#[cfg(windows)]
fn push_args(command: &mut Command, shell: ShellStrategy, args: &[String]) {
    use std::os::windows::process::CommandExt;

    if shell == ShellStrategy::Windows {
        // cmd.exe parses its own command line; quoting would turn `"` into `\"`.
        for arg in args {
            command.raw_arg(arg);
        }
    } else {
        command.args(args);
    }
}

#[cfg(not(windows))]
fn push_args(command: &mut Command, _shell: ShellStrategy, args: &[String]) {
    command.args(args);
}

fn validate_working_directory(path: &Path) -> Result<(), ExecutorError> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ExecutorError::WorkingDirectoryNotADirectory {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(ExecutorError::WorkingDirectoryNotFound {
                path: path.to_path_buf(),
            })
        },
        Err(source) => Err(ExecutorError::WorkingDirectoryUnreadable {
            path: path.to_path_buf(),
            source,
        }),
    }
}
