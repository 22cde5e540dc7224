//! OS launch primitives behind a seam the launcher can be tested against.

use std::io;
use std::path::Path;
use std::process::Command;

/// The two ways a file gets handed to the operating system.
pub trait SystemActions {
    /// Start `executable` with a single command-line `arguments` string,
    /// without waiting for it to exit.
    fn start_process(&self, executable: &str, arguments: &str) -> io::Result<()>;

    /// Open `path` with the OS default application for its type.
    fn open_with_default(&self, path: &Path) -> io::Result<()>;
}

/// Real implementation backed by `std::process::Command`.
///
/// Launches are fire-and-forget: the child is spawned and no handle is
/// kept, so the editor owns its own lifetime from that point on.
pub struct SystemLauncher;

impl SystemActions for SystemLauncher {
    fn start_process(&self, executable: &str, arguments: &str) -> io::Result<()> {
        Command::new(executable)
            .args(split_arguments(arguments))
            .spawn()?;
        Ok(())
    }

    fn open_with_default(&self, path: &Path) -> io::Result<()> {
        #[cfg(target_os = "macos")]
        {
            Command::new("open").arg(path).spawn()?;
            return Ok(());
        }

        #[cfg(target_os = "linux")]
        {
            Command::new("xdg-open").arg(path).spawn()?;
            return Ok(());
        }

        #[cfg(target_os = "windows")]
        {
            Command::new("cmd").args(["/C", "start", ""]).arg(path).spawn()?;
            return Ok(());
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            let _ = path;
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "no default-application opener available for this platform",
            ));
        }

        #[allow(unreachable_code)]
        Ok(())
    }
}

/// Split a single argument string into argv entries.
///
/// The argument templates produce one string in the style of the Windows
/// `CreateProcess` command line; `std::process::Command` wants separate
/// arguments. Double quotes group a span into one argument and are
/// stripped; everything else splits on whitespace. This is what keeps a
/// quoted path with spaces intact.
pub fn split_arguments(arguments: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut pending = false;

    for c in arguments.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
            pending = true;
        } else if c.is_whitespace() && !in_quotes {
            if pending {
                args.push(std::mem::take(&mut current));
                pending = false;
            }
        } else {
            current.push(c);
            pending = true;
        }
    }
    if pending {
        args.push(current);
    }

    args
}
