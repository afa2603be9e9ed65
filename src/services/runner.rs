use crate::error::CommandError;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs an external program and returns its trimmed, combined output.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError>;
}

/// Runs commands on the host, killing any that outlive `timeout`.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    timeout: Duration,
    work_dir: Option<PathBuf>,
}

impl SystemRunner {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            work_dir: None,
        }
    }

    pub fn with_work_dir(mut self, work_dir: Option<PathBuf>) -> Self {
        self.work_dir = work_dir;
        self
    }

    fn spawn(
        &self,
        program: &str,
        args: &[&str],
        command_line: &str,
    ) -> Result<(Child, io::PipeReader), CommandError> {
        let io_err = |source: io::Error| CommandError::Io {
            command: command_line.to_string(),
            source,
        };
        // stdout and stderr share one pipe so the output interleaves like a terminal.
        let (reader, writer) = io::pipe().map_err(io_err)?;
        let stderr = writer.try_clone().map_err(io_err)?;

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(stderr);
        if let Some(dir) = &self.work_dir {
            cmd.current_dir(dir);
        }
        let child = cmd.spawn().map_err(|source| CommandError::Spawn {
            command: command_line.to_string(),
            source,
        })?;
        // `cmd` still owns the write ends; they must close before EOF can be seen.
        drop(cmd);
        Ok((child, reader))
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        let command_line = describe(program, args);
        log::debug!("running `{}`", command_line);

        // `None` when the timeout is too large to represent: wait without a deadline.
        let deadline = Instant::now().checked_add(self.timeout);
        let (mut child, mut reader) = self.spawn(program, args, &command_line)?;

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut buf = Vec::new();
            let res = reader.read_to_end(&mut buf).map(|_| buf);
            let _ = tx.send(res);
        });

        let output = match rx.recv_timeout(self.timeout) {
            Ok(Ok(buf)) => buf,
            Ok(Err(source)) => {
                kill(&mut child);
                return Err(CommandError::Io {
                    command: command_line,
                    source,
                });
            }
            Err(RecvTimeoutError::Timeout) => {
                log::warn!("`{}` did not finish within {:?}, killing it", command_line, self.timeout);
                kill(&mut child);
                return Err(CommandError::TimedOut {
                    command: command_line,
                    timeout: self.timeout,
                });
            }
            Err(RecvTimeoutError::Disconnected) => {
                kill(&mut child);
                return Err(CommandError::Io {
                    command: command_line,
                    source: io::Error::other("output reader exited early"),
                });
            }
        };

        let status = match wait_until(&mut child, deadline) {
            Ok(Some(status)) => status,
            Ok(None) => {
                log::warn!("`{}` did not exit within {:?}, killing it", command_line, self.timeout);
                kill(&mut child);
                return Err(CommandError::TimedOut {
                    command: command_line,
                    timeout: self.timeout,
                });
            }
            Err(source) => {
                return Err(CommandError::Io {
                    command: command_line,
                    source,
                });
            }
        };

        let output = String::from_utf8_lossy(&output).trim().to_string();
        log::trace!("`{}` -> {:?}", command_line, output);

        if !status.success() {
            return Err(CommandError::Failed {
                command: command_line,
                status,
                output,
            });
        }
        Ok(output)
    }
}

/// Polls for exit until `deadline`. `None` means the child is still running.
fn wait_until(child: &mut Child, deadline: Option<Instant>) -> io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if deadline.is_some_and(|d| Instant::now() >= d) {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn kill(child: &mut Child) {
    if let Err(e) = child.kill() {
        log::debug!("kill failed: {}", e);
    }
    let _ = child.wait();
}

fn describe(program: &str, args: &[&str]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
