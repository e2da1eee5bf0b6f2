use crossterm::event::{poll, read, Event, KeyCode};
use crossterm::terminal;
use log::debug;
use std::collections::HashMap;
use std::io;
use std::time::Duration;

/// left-hand side of a qwerty keyboard onto the 4x4 hex pad, preserving
/// the COSMAC layout (1-2-3-C across the top row, A-0-B-F across the
/// bottom)
const QWERTY_KEYMAP: [(char, u8); 16] = [
    ('1', 0x1),
    ('2', 0x2),
    ('3', 0x3),
    ('4', 0xc),
    ('q', 0x4),
    ('w', 0x5),
    ('e', 0x6),
    ('r', 0xd),
    ('a', 0x7),
    ('s', 0x8),
    ('d', 0x9),
    ('f', 0xe),
    ('z', 0xa),
    ('x', 0x0),
    ('c', 0xb),
    ('v', 0xf),
];

/// reads keypresses
pub trait Input {
    /// all the mapped key codes pressed since the last flush, without
    /// draining them from the buffer
    fn peek_keys(&mut self) -> Result<&[u8], io::Error>;

    /// drain the buffer
    fn flush_keys(&mut self) -> Result<(), io::Error>;

    /// whether the user asked to leave the emulator
    fn quit_requested(&self) -> bool {
        false
    }
}

/// simple implementation of Input, using STDIN
pub struct StdinInput {
    buffer: Vec<u8>,
    keymap: HashMap<char, u8>,
    quit: bool,
}

impl StdinInput {
    pub fn new() -> Self {
        terminal::enable_raw_mode().unwrap();
        StdinInput {
            buffer: Vec::new(),
            keymap: HashMap::from(QWERTY_KEYMAP),
            quit: false,
        }
    }

    fn read_stdin(&mut self) -> Result<(), io::Error> {
        while poll(Duration::from_millis(0))? {
            if let Event::Key(evt) = read()? {
                match evt.code {
                    KeyCode::Char(key) => match self.keymap.get(&key) {
                        Some(code) => self.buffer.push(*code),
                        None => debug!("no hex-pad mapping for {:?}", key),
                    },
                    KeyCode::Esc => self.quit = true,
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

impl Drop for StdinInput {
    fn drop(&mut self) {
        terminal::disable_raw_mode().unwrap();
    }
}

impl Input for StdinInput {
    fn peek_keys(&mut self) -> Result<&[u8], io::Error> {
        self.read_stdin()?;
        Ok(self.buffer.as_slice())
    }

    fn flush_keys(&mut self) -> Result<(), io::Error> {
        self.read_stdin()?;
        self.buffer.clear();
        Ok(())
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}

/// dummy Input implementation for testing
pub struct DummyInput {
    codes: Vec<u8>,
}

impl DummyInput {
    pub fn new(keys: &[u8]) -> Self {
        DummyInput {
            codes: Vec::from(keys),
        }
    }
}

impl Input for DummyInput {
    fn peek_keys(&mut self) -> Result<&[u8], io::Error> {
        Ok(self.codes.as_slice())
    }

    fn flush_keys(&mut self) -> Result<(), io::Error> {
        self.codes.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keymap_covers_the_whole_pad() {
        let mut codes: Vec<u8> = QWERTY_KEYMAP.iter().map(|(_, c)| *c).collect();
        codes.sort_unstable();
        assert_eq!(codes, (0x0..=0xf).collect::<Vec<u8>>());
    }

    #[test]
    fn test_dummy_input_peek_then_flush() -> Result<(), io::Error> {
        let mut input = DummyInput::new(&[0x1, 0xa]);
        assert_eq!(input.peek_keys()?, &[0x1, 0xa]);
        assert_eq!(input.peek_keys()?, &[0x1, 0xa]); // peek does not drain
        input.flush_keys()?;
        assert_eq!(input.peek_keys()?, &[] as &[u8]);
        assert!(!input.quit_requested());
        Ok(())
    }
}
