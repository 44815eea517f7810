// Subprocess execution with a bounded wait

use crate::error::{MaintError, Result};
use std::io::Read;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// Upper bound for any external utility invoked by the tool
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Captured result of a finished subprocess
#[derive(Debug)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Run a program with the default timeout
pub fn run(program: &str, args: &[&str]) -> Result<CommandOutput> {
    run_with_timeout(program, args, DEFAULT_TIMEOUT)
}

/// Run a program, killing it if it has not exited within `timeout`
///
/// stdin is closed and stderr discarded. stdout is drained on a helper
/// thread while the child runs, since `top` output can exceed the pipe buffer.
/// The timeout also covers that drain: a background grandchild holding the
/// pipe open does not keep the caller waiting.
pub fn run_with_timeout(program: &str, args: &[&str], timeout: Duration) -> Result<CommandOutput> {
    log::debug!("Running {} {:?}", program, args);

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let stdout = child.stdout.take();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut stdout) = stdout {
            let _ = stdout.read_to_end(&mut buf);
        }
        let _ = tx.send(buf);
    });

    let start = Instant::now();
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if start.elapsed() >= timeout => {
                let _ = child.kill();
                let _ = child.wait();
                log::warn!("{} did not finish within {:?}, killed", program, timeout);
                return Err(MaintError::command(format!(
                    "{} timed out after {}s",
                    program,
                    timeout.as_secs_f32()
                )));
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(e.into());
            }
        }
    };

    let remaining = timeout.saturating_sub(start.elapsed()).max(POLL_INTERVAL);
    let stdout = match rx.recv_timeout(remaining) {
        Ok(buf) => String::from_utf8_lossy(&buf).into_owned(),
        Err(RecvTimeoutError::Disconnected) => String::new(),
        Err(RecvTimeoutError::Timeout) => {
            log::warn!("{} exited but its output stayed open past {:?}", program, timeout);
            return Err(MaintError::command(format!(
                "{} output not closed after {}s",
                program,
                timeout.as_secs_f32()
            )));
        }
    };

    Ok(CommandOutput { status, stdout })
}

/// Stdout of a successful run, or None if the program failed to start,
/// timed out or exited non-zero
pub fn stdout_of(program: &str, args: &[&str]) -> Option<String> {
    match run(program, args) {
        Ok(output) if output.success() => Some(output.stdout),
        Ok(output) => {
            log::debug!("{} exited with {}", program, output.status);
            None
        }
        Err(e) => {
            log::debug!("{} unavailable: {}", program, e);
            None
        }
    }
}
