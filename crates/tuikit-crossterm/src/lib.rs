//! Crossterm terminal driver for tuikit.
//!
//! Provides [`CrosstermDriver`], which implements [`tuikit_core::Driver`] on
//! top of the process's stdin/stdout, plus the pieces it is built from:
//! [`RawModeGuard`], [`StdinSource`], [`clear_screen`] and
//! [`terminal_width`].

use std::io::{self, Read, Stdin, Write};

use crossterm::{
    cursor, execute,
    terminal::{self, ClearType},
};

use tuikit_core::{ByteSource, Driver, Key, KeyProfile, Result, read_key};

// ---------------------------------------------------------------------------
// Raw mode
// ---------------------------------------------------------------------------

/// Scoped raw-mode acquisition.
///
/// Raw mode is enabled on [`acquire`](Self::acquire) and disabled again when
/// the guard is dropped, whichever way the scope is left. If raw mode was
/// already on, the guard leaves it alone.
#[derive(Debug)]
pub struct RawModeGuard {
    restore: bool,
}

impl RawModeGuard {
    pub fn acquire() -> io::Result<Self> {
        if terminal::is_raw_mode_enabled()? {
            return Ok(Self { restore: false });
        }
        terminal::enable_raw_mode()?;
        Ok(Self { restore: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.restore {
            if let Err(e) = terminal::disable_raw_mode() {
                log::warn!("failed to restore terminal mode: {e}");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Raw bytes from the process's standard input.
#[derive(Debug)]
pub struct StdinSource {
    stdin: Stdin,
    profile: KeyProfile,
}

impl StdinSource {
    pub fn new(profile: KeyProfile) -> Self {
        Self {
            stdin: io::stdin(),
            profile,
        }
    }

    pub fn profile(&self) -> KeyProfile {
        self.profile
    }

    /// Read one key with the terminal in raw mode for the duration of the
    /// read only. Cooked mode is back before any error, including
    /// [`Error::Interrupted`](tuikit_core::Error::Interrupted), is returned.
    pub fn read_key(&mut self) -> Result<Option<Key>> {
        let profile = self.profile;
        read_with_mode(RawModeGuard::acquire, self, profile)
    }
}

/// Read one key from `src` while holding the guard returned by `acquire`.
///
/// The guard is dropped before the result is returned, on success, decode
/// miss, [`Error::Interrupted`](tuikit_core::Error::Interrupted) and I/O
/// failure alike. A failing `acquire` reads nothing.
pub fn read_with_mode<G, S>(
    acquire: impl FnOnce() -> io::Result<G>,
    src: &mut S,
    profile: KeyProfile,
) -> Result<Option<Key>>
where
    S: ByteSource + ?Sized,
{
    let guard = acquire()?;
    let key = read_key(src, profile);
    drop(guard);
    key
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new(KeyProfile::native())
    }
}

impl ByteSource for StdinSource {
    fn read_byte(&mut self) -> io::Result<u8> {
        let mut buf = [0u8; 1];
        self.stdin.lock().read_exact(&mut buf)?;
        Ok(buf[0])
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Clear the terminal and home the cursor.
pub fn clear_screen() -> io::Result<()> {
    execute!(
        io::stdout(),
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )
}

/// Column count of the output terminal, `0` when it cannot be queried.
pub fn terminal_width() -> usize {
    match terminal::size() {
        Ok((cols, _)) => cols as usize,
        Err(e) => {
            log::debug!("terminal size unavailable: {e}");
            0
        }
    }
}

/// Write `lines` separated by newlines. The last line is left open so the
/// cursor sits at the end of it (the input prompt).
pub fn write_frame<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    if let Some((last, rest)) = lines.split_last() {
        for line in rest {
            writeln!(out, "{line}")?;
        }
        write!(out, "{last}")?;
    }
    out.flush()
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// A terminal back-end for tuikit using crossterm.
#[derive(Debug, Default)]
pub struct CrosstermDriver {
    source: StdinSource,
}

impl CrosstermDriver {
    /// Create a new driver decoding the platform's native key sequences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure which key byte patterns are decoded.
    pub fn with_profile(mut self, profile: KeyProfile) -> Self {
        self.source = StdinSource::new(profile);
        self
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<()> {
        log::debug!("terminal driver up, profile {:?}", self.source.profile());
        execute!(io::stdout(), cursor::Show)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        clear_screen()?;
        Ok(())
    }

    fn flush(&mut self, lines: &[String]) -> Result<()> {
        write_frame(&mut io::stdout().lock(), lines)?;
        Ok(())
    }

    fn width(&self) -> usize {
        terminal_width()
    }

    fn read_key(&mut self) -> Result<Option<Key>> {
        self.source.read_key()
    }

    fn close(&mut self) {
        // Raw mode is scoped to each read, so only the trailing prompt needs
        // terminating.
        let mut stdout = io::stdout();
        let _ = writeln!(stdout);
        let _ = stdout.flush();
    }
}
