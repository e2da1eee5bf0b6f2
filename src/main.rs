use std::env;
use std::error::Error;
use std::fs;

use chip8vm::display::{Display, MonoTermDisplay};
use chip8vm::input::{Input, StdinInput};
use chip8vm::machine::Machine;
use chip8vm::sound::{SimpleBeep, Sound};

/// timers want 60Hz, and the frame loop runs at the same rate
const FRAME_RATE_HZ: f64 = 60.0;

/// instruction steps per frame; 12 x 60 gives the conventional ~700/s
const STEPS_PER_FRAME: u32 = 12;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let rom_path = env::args().nth(1).ok_or("usage: chip8vm <rom>")?;
    let rom = fs::read(&rom_path)?;

    let mut machine = Machine::new();
    machine.load_rom(&rom)?;

    let mut display = MonoTermDisplay::new()?;
    let mut input = StdinInput::new();
    let mut sound = SimpleBeep::new();

    let mut pacer = spin_sleep::LoopHelper::builder().build_with_target_rate(FRAME_RATE_HZ);

    while !input.quit_requested() {
        pacer.loop_start();

        let pressed = input.peek_keys()?.to_vec();
        for &key in &pressed {
            machine.set_key(key, true);
        }

        for _ in 0..STEPS_PER_FRAME {
            if let Err(e) = machine.step_instruction() {
                log::error!("{}", e);
                sound.set_active(false)?;
                return Err(e.into());
            }
        }
        machine.tick_timers();

        if let Some(frame) = machine.frame_snapshot() {
            display.draw(&frame)?;
        }
        sound.set_active(machine.sound_timer() > 0)?;

        // terminals only report presses, so lean on auto-repeat for held
        // keys: release everything we pressed this frame
        for &key in &pressed {
            machine.set_key(key, false);
        }
        input.flush_keys()?;

        pacer.loop_sleep();
    }

    sound.set_active(false)?;

    // shove some junk on stdout to stop the cli messing up the last frame
    for _ in 0..12 {
        println!();
    }
    Ok(())
}
