//! Per-platform ways of handing a URI to the OS default handler.

use std::process::Command;

use crate::errors::{ObsidianCliError, Result};

/// Something that can ask the OS to open a URI.
///
/// Fire-and-forget: `Ok` means the request was accepted, not that the
/// target application actually started.
pub trait UriOpener {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn open_uri(&self, uri: &str) -> Result<()>;
}

/// Linux: `xdg-open <uri>`.
pub struct XdgOpen;

/// macOS: `open <uri>`.
pub struct MacOpen;

/// Windows: `cmd /C start "" "<uri>"`.
pub struct WindowsStart;

/// Any other OS. Always fails with `UnsupportedPlatform`.
pub struct Unsupported {
    pub os: String,
}

/// Writes the URI to stdout instead of opening it.
pub struct PrintUri;

impl UriOpener for XdgOpen {
    fn name(&self) -> &'static str {
        "xdg-open"
    }

    fn open_uri(&self, uri: &str) -> Result<()> {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(uri);
        run_helper(self.name(), cmd)
    }
}

impl UriOpener for MacOpen {
    fn name(&self) -> &'static str {
        "open"
    }

    fn open_uri(&self, uri: &str) -> Result<()> {
        let mut cmd = Command::new("open");
        cmd.arg(uri);
        run_helper(self.name(), cmd)
    }
}

impl UriOpener for WindowsStart {
    fn name(&self) -> &'static str {
        "start"
    }

    fn open_uri(&self, uri: &str) -> Result<()> {
        let mut cmd = Command::new("cmd");

        // `&` separates commands in cmd.exe, so the URI has to reach it quoted.
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            cmd.arg("/C").raw_arg(format!("start \"\" \"{uri}\""));
        }
        #[cfg(not(windows))]
        {
            cmd.args(["/C", "start", "", uri]);
        }

        run_helper(self.name(), cmd)
    }
}

impl UriOpener for Unsupported {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    fn open_uri(&self, _uri: &str) -> Result<()> {
        Err(ObsidianCliError::UnsupportedPlatform(self.os.clone()))
    }
}

impl UriOpener for PrintUri {
    fn name(&self) -> &'static str {
        "print"
    }

    fn open_uri(&self, uri: &str) -> Result<()> {
        println!("{uri}");
        Ok(())
    }
}

/// Pick the opener for an OS name as reported by `std::env::consts::OS`.
pub fn opener_for_os(os: &str) -> Box<dyn UriOpener> {
    match os {
        "linux" => Box::new(XdgOpen),
        "macos" => Box::new(MacOpen),
        "windows" => Box::new(WindowsStart),
        other => Box::new(Unsupported {
            os: other.to_string(),
        }),
    }
}

/// Opener for the OS this binary is running on.
pub fn platform_opener() -> Box<dyn UriOpener> {
    opener_for_os(std::env::consts::OS)
}

/// Run an OS helper and map a failed launch or non-zero exit to `LaunchFailed`.
fn run_helper(program: &str, mut cmd: Command) -> Result<()> {
    let status = cmd
        .status()
        .map_err(|e| ObsidianCliError::LaunchFailed(format!("failed to run '{program}': {e}")))?;

    if !status.success() {
        return Err(ObsidianCliError::LaunchFailed(format!(
            "'{program}' exited with code {}",
            status.code().unwrap_or(-1)
        )));
    }

    Ok(())
}
