//! The `pdfimages` command: option accumulation, executable resolution and process execution.
//!
//! A [`Command`] is built once and then only read. Every run takes a snapshot of the stored
//! flags and appends its own input/output paths to that copy, so a single instance can be
//! shared between threads and reused for any number of documents.
use std::ffi::OsString;
use std::fmt;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::process::{Child, Command as Process, ExitStatus, Stdio};
use std::thread;
use std::time::Duration;

use tracing::debug;

use super::cancel::CancelToken;
use super::options::CommandOption;
use super::params::ExtractParams;
use crate::error::{Error, Result};

/// Executable name looked up on `PATH` when no custom path is given.
pub const DEFAULT_EXECUTABLE: &str = "pdfimages";

const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone)]
pub struct Command {
    pub(crate) path: PathBuf,
    args: Vec<OsString>,
}

impl Command {
    /// Apply `opts` in order, then resolve the executable. Fails with [`Error::NotFound`] when
    /// the executable cannot be located or is not executable.
    pub fn new<I>(opts: I) -> Result<Self>
    where
        I: IntoIterator<Item = CommandOption>,
    {
        let mut cmd = Self::unresolved();
        for opt in opts {
            opt.apply(&mut cmd);
        }

        cmd.path = which::which(&cmd.path).map_err(|source| Error::NotFound {
            name: cmd.path.display().to_string(),
            source,
        })?;
        debug!("Resolved pdfimages executable: {:?}", cmd.path);

        Ok(cmd)
    }

    /// Build from a serializable parameter set.
    pub fn from_params(params: &ExtractParams) -> Result<Self> {
        Self::new(params.to_options())
    }

    pub(crate) fn unresolved() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_EXECUTABLE),
            args: Vec::new(),
        }
    }

    pub(crate) fn push_arg(&mut self, arg: impl Into<OsString>) {
        self.args.push(arg.into());
    }

    /// Resolved executable location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flags accumulated during construction, without the positional arguments.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Full argument vector for one run: `[flags..., input, outdir]`.
    pub fn argv(&self, input: impl AsRef<Path>, outdir: impl AsRef<Path>) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(self.args.len() + 2);
        argv.extend(self.args.iter().cloned());
        argv.push(input.as_ref().as_os_str().to_os_string());
        argv.push(outdir.as_ref().as_os_str().to_os_string());
        argv
    }

    /// Extract images from `input` into the existing directory `outdir`, blocking until the
    /// tool exits.
    pub fn run(&self, input: impl AsRef<Path>, outdir: impl AsRef<Path>) -> Result<()> {
        let (mut child, stderr) = self.spawn(input.as_ref(), outdir.as_ref())?;
        let status = child.wait()?;
        self.finish(status, stderr)
    }

    /// Like [`Command::run`], but kills the tool and returns [`Error::Cancelled`] or
    /// [`Error::TimedOut`] as soon as `token` fires. A token that has already fired returns
    /// without spawning anything.
    pub fn run_with_cancel(
        &self,
        input: impl AsRef<Path>,
        outdir: impl AsRef<Path>,
        token: &CancelToken,
    ) -> Result<()> {
        if let Some(err) = token.interruption() {
            return Err(err);
        }

        let (mut child, stderr) = self.spawn(input.as_ref(), outdir.as_ref())?;
        loop {
            if let Some(status) = child.try_wait()? {
                return self.finish(status, stderr);
            }
            if let Some(err) = token.interruption() {
                debug!("Stopping pdfimages (pid {})", child.id());
                terminate(&mut child)?;
                return Err(err);
            }
            thread::sleep(POLL_INTERVAL);
        }
    }

    fn spawn(&self, input: &Path, outdir: &Path) -> Result<(Child, File)> {
        // stderr goes to an unnamed file so a chatty tool can never block on a full pipe
        let stderr = tempfile::tempfile()?;
        debug!("Running: {}", self.display_with(input, outdir));

        let child = Process::new(&self.path)
            .args(self.argv(input, outdir))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::from(stderr.try_clone()?))
            .spawn()
            .map_err(|source| Error::Spawn {
                path: self.path.clone(),
                source,
            })?;

        Ok((child, stderr))
    }

    fn finish(&self, status: ExitStatus, mut stderr: File) -> Result<()> {
        if status.success() {
            return Ok(());
        }

        let mut captured = Vec::new();
        stderr.seek(SeekFrom::Start(0))?;
        stderr.read_to_end(&mut captured)?;

        Err(Error::NonZeroExit {
            path: self.path.clone(),
            status,
            stderr: String::from_utf8_lossy(&captured).into_owned(),
        })
    }

    fn display_with(&self, input: &Path, outdir: &Path) -> CommandLine<'_> {
        CommandLine {
            cmd: self,
            input: input.as_os_str().to_string_lossy().into_owned(),
            outdir: outdir.as_os_str().to_string_lossy().into_owned(),
        }
    }
}

fn terminate(child: &mut Child) -> Result<()> {
    if let Err(e) = child.kill() {
        // the child may have exited between try_wait and kill
        debug!("kill failed for pid {}: {}", child.id(), e);
    }
    child.wait()?;
    Ok(())
}

struct CommandLine<'a> {
    cmd: &'a Command,
    input: String,
    outdir: String,
}

impl fmt::Display for CommandLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cmd.path.display())?;
        for arg in &self.cmd.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        write!(f, " {} {}", self.input, self.outdir)
    }
}

/// Human-readable command line with `<inpath>` and `<outdir>` placeholders. For display only.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = CommandLine {
            cmd: self,
            input: "<inpath>".to_string(),
            outdir: "<outdir>".to_string(),
        };
        fmt::Display::fmt(&line, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::*;

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    fn built(opts: &[CommandOption]) -> Command {
        let mut cmd = Command::unresolved();
        for opt in opts {
            opt.apply(&mut cmd);
        }
        cmd
    }

    #[test]
    fn display_uses_placeholders() {
        let mut cmd = built(&[with_page_range(1, 2), with_save_dct_as_jpeg()]);
        cmd.path = PathBuf::from("/usr/bin/pdfimages");
        assert_eq!(
            cmd.to_string(),
            "/usr/bin/pdfimages -f 1 -l 2 -j <inpath> <outdir>"
        );
    }

    #[test]
    fn bare_command_renders_only_positionals() {
        let cmd = built(&[]);
        assert_eq!(cmd.to_string(), "pdfimages <inpath> <outdir>");
    }

    #[test]
    fn argv_appends_positionals_without_touching_flags() {
        let cmd = built(&[with_save_raw()]);
        let argv = cmd.argv("in.pdf", "out");
        assert_eq!(strings(&argv), ["-raw", "in.pdf", "out"]);
        assert_eq!(strings(cmd.args()), ["-raw"]);

        let again = cmd.argv("other.pdf", "elsewhere");
        assert_eq!(strings(&again), ["-raw", "other.pdf", "elsewhere"]);
    }

    #[test]
    fn missing_executable_is_not_found() {
        let err = Command::new([with_custom_path("pdfimages-definitely-not-installed-here")])
            .unwrap_err();
        match err {
            Error::NotFound { name, .. } => {
                assert_eq!(name, "pdfimages-definitely-not-installed-here")
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn command_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Command>();
        assert_send_sync::<CancelToken>();
    }
}
