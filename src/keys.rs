//! Raw terminal input: blocking byte sources and the escape-sequence decoder.

use anyhow::{bail, Result};
use std::io;
use std::time::Duration;

/// The escape byte that prefixes every multi-byte key sequence.
pub const ESC: u8 = 0x1b;

/// How long to wait for the follow-up bytes of an escape sequence.
///
/// A lone Escape keypress produces a bare `ESC` byte with nothing behind it; waiting
/// forever for a `[` that never comes would hang the whole editor.
const SEQ_TIMEOUT: Duration = Duration::from_millis(50);

/// The control-key variant of a letter (`ctrl(b'q')` is what Ctrl+Q sends).
pub const fn ctrl(c: u8) -> u8 {
    c & 0x1f
}

/// One logical keypress.
///
/// Literal bytes (printable characters and control codes) keep their value; named keys
/// are separate variants so they can never collide with a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Byte(u8),
    Backspace,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
}

/// A source of raw input bytes.
///
/// Production input comes from stdin; tests feed byte slices through the same trait so
/// the decoder is exercised without a terminal.
pub trait ByteSource {
    /// Block until the next byte arrives.
    fn next_byte(&mut self) -> Result<u8>;

    /// Wait at most `timeout` for a byte; `None` if nothing arrived.
    fn poll_byte(&mut self, timeout: Duration) -> Result<Option<u8>>;
}

/// Reads raw bytes directly from the stdin file descriptor.
///
/// `io::Stdin` is buffered, which would make `poll(2)` on the descriptor lie about
/// pending input, so both paths go through `libc::read` on `STDIN_FILENO`.
pub struct StdinInput;

impl StdinInput {
    pub fn new() -> Self {
        Self
    }
}

fn read_stdin_byte() -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        let n = unsafe { libc::read(libc::STDIN_FILENO, buf.as_mut_ptr().cast(), 1) };
        if n == 1 {
            return Ok(Some(buf[0]));
        }
        if n == 0 {
            return Ok(None); // EOF
        }
        let e = io::Error::last_os_error();
        if e.kind() != io::ErrorKind::Interrupted {
            return Err(e);
        }
    }
}

impl ByteSource for StdinInput {
    fn next_byte(&mut self) -> Result<u8> {
        match read_stdin_byte()? {
            Some(b) => Ok(b),
            None => bail!("stdin closed"),
        }
    }

    fn poll_byte(&mut self, timeout: Duration) -> Result<Option<u8>> {
        let mut fd = libc::pollfd {
            fd: libc::STDIN_FILENO,
            events: libc::POLLIN,
            revents: 0,
        };
        #[allow(clippy::cast_possible_truncation)]
        let ms = timeout.as_millis().min(i32::MAX as u128) as libc::c_int;
        let rc = unsafe { libc::poll(&mut fd, 1, ms) };
        if rc < 0 {
            let e = io::Error::last_os_error();
            if e.kind() == io::ErrorKind::Interrupted {
                return Ok(None);
            }
            return Err(e.into());
        }
        if rc == 0 {
            return Ok(None);
        }
        Ok(read_stdin_byte()?)
    }
}

/// Read exactly one logical key, blocking until at least one byte is available.
///
/// Everything that is not an escape byte decodes to itself (with `0x7f` mapped to
/// `Key::Backspace`). Escape sequences are decoded below; any unknown or truncated
/// sequence falls back to a bare Escape rather than erroring out.
pub fn read_key(src: &mut impl ByteSource) -> Result<Key> {
    let b = src.next_byte()?;
    if b != ESC {
        return Ok(match b {
            0x7f => Key::Backspace,
            _ => Key::Byte(b),
        });
    }
    decode_escape(src)
}

/// Decode the bytes following an `ESC`.
///
/// Follow-up reads are bounded by `SEQ_TIMEOUT`; a shortfall means the user pressed
/// Escape on its own.
fn decode_escape(src: &mut impl ByteSource) -> Result<Key> {
    let Some(b1) = src.poll_byte(SEQ_TIMEOUT)? else {
        return Ok(Key::Byte(ESC));
    };
    let Some(b2) = src.poll_byte(SEQ_TIMEOUT)? else {
        return Ok(Key::Byte(ESC));
    };

    let key = match (b1, b2) {
        (b'[', b'0'..=b'9') => {
            let Some(b3) = src.poll_byte(SEQ_TIMEOUT)? else {
                return Ok(Key::Byte(ESC));
            };
            if b3 != b'~' {
                return Ok(Key::Byte(ESC));
            }
            match b2 {
                b'1' | b'7' => Key::Home,
                b'3' => Key::Delete,
                b'4' | b'8' => Key::End,
                b'5' => Key::PageUp,
                b'6' => Key::PageDown,
                _ => Key::Byte(ESC),
            }
        }
        (b'[', b'A') => Key::ArrowUp,
        (b'[', b'B') => Key::ArrowDown,
        (b'[', b'C') => Key::ArrowRight,
        (b'[', b'D') => Key::ArrowLeft,
        (b'[', b'H') | (b'O', b'H') => Key::Home,
        (b'[', b'F') | (b'O', b'F') => Key::End,
        _ => Key::Byte(ESC),
    };
    Ok(key)
}
