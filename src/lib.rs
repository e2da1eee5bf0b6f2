///
/// ## Design
///
/// * the whole machine lives in one owned value: RAM, registers, call
///   stack, timers, key vector, framebuffer. a step takes `&mut self`,
///   so nothing aliases mid-cycle
/// * fetch/decode/execute advances one instruction per call; decode is a
///   flat table over the word's nibbles, so every legal opcode pairing is
///   enumerable and anything unmapped is a reportable error, not a no-op
/// * instruction stepping and timer ticking are driven separately. the
///   old interpreters decremented timers once per instruction; keeping
///   the two entry points independent lets the caller run a few hundred
///   steps per second against honest 60Hz timers (`cycle()` still offers
///   the historical coupling)
/// * the wait-for-key instruction parks the machine in a sub-state
///   instead of spinning; the next key press fills the target register
///   and execution resumes
/// * display, input and audio sit behind traits so alternative frontends
///   can plug in; the bundled ones render a TUI canvas in-console, poll
///   raw-mode stdin and drive the pc speaker
/// * renderers take whole frames out via snapshot, and only when a draw
///   actually happened; they never observe a half-drawn frame
///
/// Model
///
/// main
///  |-- machine(rom), display, input, sound
///  `-- frame loop @ 60Hz
///       |-- press the keys the input buffered
///       |-- machine.step_instruction() x STEPS_PER_FRAME
///       |-- machine.tick_timers()
///       |-- display.draw(frame) if a snapshot is pending
///       |-- sound follows the sound timer
///       `-- release keys; sleep out the rest of the frame
pub mod display;
pub mod error;
pub mod framebuffer;
pub mod input;
pub mod instruction;
pub mod machine;
pub mod memory;
pub mod sound;
