use beep::beep;
use std::error::Error;

/// The buzzer behind the sound timer. Level-driven: the main loop calls
/// `set_active` once per frame with whether the timer is still running.
pub trait Sound {
    fn set_active(&mut self, on: bool) -> Result<(), Box<dyn Error>>;
}

const SIMPLEBEEP_PITCH: u16 = 2093; // C

pub struct SimpleBeep {
    is_beeping: bool,
}

impl SimpleBeep {
    pub fn new() -> Self {
        SimpleBeep { is_beeping: false }
    }
}

impl Sound for SimpleBeep {
    fn set_active(&mut self, on: bool) -> Result<(), Box<dyn Error>> {
        if on == self.is_beeping {
            return Ok(());
        }
        beep(if on { SIMPLEBEEP_PITCH } else { 0 })?;
        self.is_beeping = on;
        Ok(())
    }
}

pub struct Mute {}

impl Mute {
    pub fn new() -> Self {
        Mute {}
    }
}

impl Sound for Mute {
    fn set_active(&mut self, _on: bool) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mute_accepts_any_level() -> Result<(), Box<dyn Error>> {
        let mut s = Mute::new();
        s.set_active(true)?;
        s.set_active(true)?;
        s.set_active(false)?;
        Ok(())
    }
}
