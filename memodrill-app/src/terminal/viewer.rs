use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// External program a question is handed to, e.g. to show an image path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    program: String,
    args: Vec<String>,
}

impl Viewer {
    /// `cmdline` is split on whitespace; the question is appended last.
    pub fn new(cmdline: &str) -> Option<Self> {
        let mut parts = cmdline.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn platform_default() -> Self {
        let program = if cfg!(target_os = "macos") { "open" } else { "xdg-open" };
        Self {
            program: program.to_string(),
            args: Vec::new(),
        }
    }

    /// Failures are logged and otherwise ignored.
    pub fn open(&self, target: &str) {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(target)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(s) if s.success() => debug!(program = %self.program, "opened question"),
            Ok(s) => warn!(program = %self.program, %s, "viewer exited with failure"),
            Err(e) => warn!(program = %self.program, error = %e, "could not start viewer"),
        }
    }
}
