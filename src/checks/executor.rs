//! Bounded-wait process execution for auxiliary checks

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;
use wait_timeout::ChildExt;

/// Timeout for collecting output from child process pipes
const OUTPUT_COLLECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum captured output per stream (4MB)
const MAX_OUTPUT_SIZE: usize = 4 * 1024 * 1024;

/// What a finished (or killed) process left behind
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub exit_code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
    /// Killed after exceeding its wait bound
    pub timed_out: bool,
}

impl ProcessOutput {
    /// stdout followed by stderr
    pub fn combined(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Run `command[0]` with the remaining elements as arguments.
///
/// Errors only when the process cannot be started. A process still running
/// after `timeout` is killed and reported with `timed_out` set.
pub fn run_process(command: &[String], working_dir: &Path, timeout: Duration) -> Result<ProcessOutput> {
    let Some((program, args)) = command.split_first() else {
        bail!("Empty command");
    };

    let start = Instant::now();
    let mut child = Command::new(program)
        .args(args)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to spawn {program}"))?;
    debug!(program = %program, dir = %working_dir.display(), "process started");

    // Drain both pipes while waiting, or a chatty child blocks on a full pipe.
    let (stdout_tx, stdout_rx) = mpsc::channel();
    let (stderr_tx, stderr_rx) = mpsc::channel();
    match child.stdout.take() {
        Some(stdout) => {
            thread::spawn(move || {
                let _ = stdout_tx.send(read_stream_to_string(stdout));
            });
        }
        None => {
            let _ = stdout_tx.send(String::new());
        }
    }
    match child.stderr.take() {
        Some(stderr) => {
            thread::spawn(move || {
                let _ = stderr_tx.send(read_stream_to_string(stderr));
            });
        }
        None => {
            let _ = stderr_tx.send(String::new());
        }
    }

    let wait_result = child
        .wait_timeout(timeout)
        .with_context(|| format!("Failed to wait for {program}"))?;

    let timed_out = wait_result.is_none();
    if timed_out {
        kill_child_process(&mut child);
    }
    let duration = start.elapsed();

    let stdout = stdout_rx
        .recv_timeout(OUTPUT_COLLECTION_TIMEOUT)
        .unwrap_or_else(|_| "[output collection timed out]".to_string());
    let stderr = stderr_rx
        .recv_timeout(OUTPUT_COLLECTION_TIMEOUT)
        .unwrap_or_else(|_| "[output collection timed out]".to_string());

    debug!(
        program = %program,
        exit_code = ?wait_result.and_then(|s| s.code()),
        timed_out,
        elapsed_ms = duration.as_millis() as u64,
        "process finished"
    );

    Ok(ProcessOutput {
        exit_code: wait_result.and_then(|s| s.code()),
        success: wait_result.is_some_and(|s| s.success()),
        stdout,
        stderr,
        duration,
        timed_out,
    })
}

/// Read a stream to a string, keeping at most `MAX_OUTPUT_SIZE` bytes
fn read_stream_to_string<R: Read>(mut stream: R) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 8192];
    let mut truncated = false;

    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                let remaining = MAX_OUTPUT_SIZE.saturating_sub(buf.len());
                let keep = n.min(remaining);
                buf.extend_from_slice(&chunk[..keep]);
                // Keep draining so the child never sees a broken pipe
                truncated |= keep < n;
            }
            Err(_) => {
                if buf.is_empty() {
                    return "[error reading output]".to_string();
                }
                break;
            }
        }
    }

    if truncated {
        buf.extend_from_slice(b"\n[output truncated]");
    }
    String::from_utf8_lossy(&buf).to_string()
}

fn kill_child_process(child: &mut Child) {
    // The process may already have exited
    let _ = child.kill();
    let _ = child.wait();
}
