//! Terminal output helpers
//!
//! Rendered output goes either straight to stdout or, when a user is looking at a
//! terminal, through the `minus` pager. Colors follow the same rule.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Environment variable that disables the pager when set
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Environment variable that disables colors when set
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this wrapper
/// adapts it. Bytes are forwarded as text; entry names that are not valid UTF-8
/// were already made lossy by the decoder.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writeln!(writer, "signature: DIRC")?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Page output only for an interactive stdout, unless `NO_PAGER` is set
pub fn use_pager() -> bool {
    std::env::var_os(NO_PAGER_ENV).is_none() && io::stdout().is_terminal()
}

/// Colorize output only for an interactive stdout, unless `NO_COLOR` is set
pub fn use_color() -> bool {
    std::env::var_os(NO_COLOR_ENV).is_none() && io::stdout().is_terminal()
}
