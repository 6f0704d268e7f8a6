// Logging setup for the binary

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Where log lines should go
pub enum LogTarget<'a> {
    /// Standard error; for commands that do not take over the terminal
    Stderr,
    /// Append to a file, or drop everything when `None` (the TUI owns the
    /// screen)
    File(Option<&'a Path>),
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "sortty=warn",
        1 => "sortty=info",
        2 => "sortty=debug",
        _ => "sortty=trace",
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `-v` flags.
pub fn init(verbosity: u8, target: LogTarget<'_>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(Some(path)) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::File(None) => builder.with_writer(std::io::sink).try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_directives() {
        assert_eq!(default_directive(0), "sortty=warn");
        assert_eq!(default_directive(2), "sortty=debug");
        assert_eq!(default_directive(9), "sortty=trace");
    }
}
