//! Raw terminal bytes to [`Key`]s.
//!
//! [`decode`] consumes exactly one logical key event from a [`ByteSource`].
//! The byte source is the only I/O primitive the decoder needs; terminal
//! mode handling (raw vs cooked) belongs to whoever owns the source, see
//! `tuikit-crossterm`.
//!
//! ## Byte patterns
//!
//! ```text
//! 0x03                  -> Interrupt
//! 0x0d ('\r')           -> Enter
//! 0x7f | 0x08           -> Backspace
//! '0'..='9'             -> Digit
//! ESC '[' 'A'|'B'|'C'|'D'   -> Up | Down | Right | Left   (Ansi)
//! 0x00|0xE0 'H'|'P'|'M'|'K' -> Up | Down | Right | Left   (WindowsConsole)
//! UTF-8 lead + continuation -> Char
//! anything else         -> Char
//! ```
//!
//! An unknown escape or scan-code sequence is a decode miss (`Ok(None)`),
//! not an error: the caller simply has no key this cycle.

use std::io::{self, Read};

use crate::error::{Error, Result};
use crate::messages::Key;

/// The interrupt byte (Ctrl-C in raw mode).
pub const INTERRUPT: u8 = 0x03;
const ESC: u8 = 0x1b;
const CR: u8 = b'\r';
const DEL: u8 = 0x7f;
const BS: u8 = 0x08;

// ---------------------------------------------------------------------------
// ByteSource
// ---------------------------------------------------------------------------

/// A blocking source of raw input bytes.
pub trait ByteSource {
    /// Block until one byte is available and return it.
    fn read_byte(&mut self) -> io::Result<u8>;
}

/// Adapts any [`Read`] into a [`ByteSource`].
#[derive(Debug)]
pub struct ReadSource<R: Read> {
    reader: R,
}

impl<R: Read> ReadSource<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Unwrap the inner reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn read_byte(&mut self) -> io::Result<u8> {
        let mut buf = [0u8; 1];
        self.reader.read_exact(&mut buf)?;
        Ok(buf[0])
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> io::Result<u8> {
        (**self).read_byte()
    }
}

// ---------------------------------------------------------------------------
// KeyProfile
// ---------------------------------------------------------------------------

/// Which family of multi-byte key sequences the terminal emits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyProfile {
    /// VT100/xterm: `ESC [ A..D` for arrows.
    #[default]
    Ansi,
    /// Windows console scan codes: `0x00`/`0xE0` prefix, then one byte.
    WindowsConsole,
}

impl KeyProfile {
    /// The profile for the platform this was built for.
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::WindowsConsole
        } else {
            Self::Ansi
        }
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode one key event. Returns `Ok(None)` on a decode miss.
///
/// [`Key::Interrupt`] is returned as a value here; use [`read_key`] to
/// have it raised as [`Error::Interrupted`].
pub fn decode<S: ByteSource + ?Sized>(src: &mut S, profile: KeyProfile) -> Result<Option<Key>> {
    let b = src.read_byte()?;
    let key = match (b, profile) {
        (INTERRUPT, _) => Some(Key::Interrupt),
        (ESC, KeyProfile::Ansi) => {
            let seq = [src.read_byte()?, src.read_byte()?];
            let key = ansi_arrow(seq);
            if key.is_none() {
                log::warn!("unrecognised escape sequence ESC {seq:02x?}");
            }
            key
        }
        (0x00 | 0xE0, KeyProfile::WindowsConsole) => {
            let code = src.read_byte()?;
            let key = scan_arrow(code);
            if key.is_none() {
                log::warn!("unrecognised scan code {b:#04x} {code:#04x}");
            }
            key
        }
        (CR, _) => Some(Key::Enter),
        (DEL | BS, _) => Some(Key::Backspace),
        (b'0'..=b'9', _) => Some(Key::Digit(b - b'0')),
        (0x80..=0xFF, _) => decode_utf8(b, src)?,
        _ => Some(Key::Char(b as char)),
    };
    Ok(key)
}

/// Decode one key event, raising the interrupt byte as
/// [`Error::Interrupted`].
pub fn read_key<S: ByteSource + ?Sized>(src: &mut S, profile: KeyProfile) -> Result<Option<Key>> {
    match decode(src, profile)? {
        Some(Key::Interrupt) => Err(Error::Interrupted),
        key => {
            log::trace!("decoded {key:?}");
            Ok(key)
        }
    }
}

fn ansi_arrow(seq: [u8; 2]) -> Option<Key> {
    match seq {
        [b'[', b'A'] => Some(Key::Up),
        [b'[', b'B'] => Some(Key::Down),
        [b'[', b'C'] => Some(Key::Right),
        [b'[', b'D'] => Some(Key::Left),
        _ => None,
    }
}

fn scan_arrow(code: u8) -> Option<Key> {
    match code {
        b'H' => Some(Key::Up),
        b'P' => Some(Key::Down),
        b'M' => Some(Key::Right),
        b'K' => Some(Key::Left),
        _ => None,
    }
}

/// Pull the continuation bytes of a UTF-8 sequence starting with `lead`.
fn decode_utf8<S: ByteSource + ?Sized>(lead: u8, src: &mut S) -> Result<Option<Key>> {
    let len = match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return Ok(None),
    };
    let mut buf = [lead, 0, 0, 0];
    for slot in buf.iter_mut().take(len).skip(1) {
        *slot = src.read_byte()?;
    }
    Ok(std::str::from_utf8(&buf[..len])
        .ok()
        .and_then(|s| s.chars().next())
        .map(Key::Char))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src(bytes: &[u8]) -> ReadSource<&[u8]> {
        ReadSource::new(bytes)
    }

    fn ansi(bytes: &[u8]) -> Option<Key> {
        decode(&mut src(bytes), KeyProfile::Ansi).unwrap()
    }

    #[test]
    fn single_bytes() {
        assert_eq!(ansi(b"\r"), Some(Key::Enter));
        assert_eq!(ansi(b"\x7f"), Some(Key::Backspace));
        assert_eq!(ansi(b"\x08"), Some(Key::Backspace));
        assert_eq!(ansi(b"0"), Some(Key::Digit(0)));
        assert_eq!(ansi(b"9"), Some(Key::Digit(9)));
        assert_eq!(ansi(b"d"), Some(Key::Char('d')));
        assert_eq!(ansi(b"\n"), Some(Key::Char('\n')));
    }

    #[test]
    fn ansi_arrows() {
        assert_eq!(ansi(b"\x1b[A"), Some(Key::Up));
        assert_eq!(ansi(b"\x1b[B"), Some(Key::Down));
        assert_eq!(ansi(b"\x1b[C"), Some(Key::Right));
        assert_eq!(ansi(b"\x1b[D"), Some(Key::Left));
    }

    #[test]
    fn unknown_escape_is_a_miss_and_consumes_exactly_two_bytes() {
        let mut s = src(b"\x1b[Zx\x1bOA5");
        assert_eq!(decode(&mut s, KeyProfile::Ansi).unwrap(), None);
        assert_eq!(decode(&mut s, KeyProfile::Ansi).unwrap(), Some(Key::Char('x')));
        // SS3 arrows are not among the canonical four.
        assert_eq!(decode(&mut s, KeyProfile::Ansi).unwrap(), None);
        assert_eq!(decode(&mut s, KeyProfile::Ansi).unwrap(), Some(Key::Digit(5)));
    }

    #[test]
    fn windows_scan_codes() {
        let win = |b: &[u8]| decode(&mut src(b), KeyProfile::WindowsConsole).unwrap();
        assert_eq!(win(b"\xe0H"), Some(Key::Up));
        assert_eq!(win(b"\x00P"), Some(Key::Down));
        assert_eq!(win(b"\xe0M"), Some(Key::Right));
        assert_eq!(win(b"\xe0K"), Some(Key::Left));
        assert_eq!(win(b"\xe0;"), None);
        // ESC has no special meaning on the console.
        assert_eq!(win(b"\x1b"), Some(Key::Char('\x1b')));
    }

    #[test]
    fn utf8_characters() {
        assert_eq!(ansi("é".as_bytes()), Some(Key::Char('é')));
        assert_eq!(ansi("€".as_bytes()), Some(Key::Char('€')));
        assert_eq!(ansi("🦀".as_bytes()), Some(Key::Char('🦀')));
        assert_eq!(ansi(b"\xff"), None);
        assert_eq!(ansi(b"\xc3\x28"), None);
    }

    #[test]
    fn interrupt() {
        assert_eq!(ansi(b"\x03"), Some(Key::Interrupt));
        let err = read_key(&mut src(b"\x03"), KeyProfile::Ansi).unwrap_err();
        assert!(err.is_interrupt());
    }

    #[test]
    fn read_key_passes_misses_through() {
        assert_eq!(read_key(&mut src(b"\x1b[Q"), KeyProfile::Ansi).unwrap(), None);
        assert_eq!(
            read_key(&mut src(b"\x1b[A"), KeyProfile::Ansi).unwrap(),
            Some(Key::Up)
        );
    }

    #[test]
    fn eof_is_io_error() {
        let err = decode(&mut src(b""), KeyProfile::Ansi).unwrap_err();
        match err {
            Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("unexpected {other:?}"),
        }
        // Truncated escape sequence.
        assert!(matches!(
            decode(&mut src(b"\x1b["), KeyProfile::Ansi),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn native_profile() {
        if cfg!(windows) {
            assert_eq!(KeyProfile::native(), KeyProfile::WindowsConsole);
        } else {
            assert_eq!(KeyProfile::native(), KeyProfile::Ansi);
        }
    }
}
