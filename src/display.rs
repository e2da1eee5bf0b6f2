use crate::framebuffer::{HEIGHT, WIDTH};
use std::io;
use tui::backend::CrosstermBackend;
use tui::layout::Rect;
use tui::style::{Color, Style};
use tui::symbols::Marker;
use tui::widgets::canvas::{Canvas, Points};
use tui::widgets::{Block, Borders};
use tui::Terminal;

/// Renders frames handed off by the machine. Implementations should
/// abstract the screen away so a variety of frontends can plug in.
pub trait Display {
    /// draw one packed monochrome frame
    fn draw(&mut self, frame: &[u8]) -> Result<(), io::Error>;

    /// how many bytes one frame carries
    fn frame_size_bytes(&self) -> usize;
}

// canvas metadata for a packed mono frame
struct Resolution {
    width: usize,
    height: usize,
}

impl Resolution {
    fn byte_count(&self) -> usize {
        self.width * self.height / 8
    }

    fn x_bounds(&self) -> [f64; 2] {
        [0.0, (self.width - 1) as f64]
    }

    fn y_bounds(&self) -> [f64; 2] {
        [-1.0 * (self.height - 1) as f64, 0.0]
    }

    /// expand the lit bits of a packed frame into canvas coordinates
    fn lit_points<'a>(&self, frame: &'a [u8]) -> impl Iterator<Item = (f64, f64)> + 'a {
        let w = self.width;
        let mut count = self.width * self.height;
        std::iter::from_fn(move || {
            while count > 0 {
                count -= 1;
                if frame[count / 8] >> (7 - count % 8) & 1 == 1 {
                    return Some((
                        (count % w) as f64,        // x
                        -1.0 * (count / w) as f64, // y
                    ));
                }
            }
            None
        })
    }
}

/// monochrome display in a terminal, rendered with TUI over crossterm
pub struct MonoTermDisplay {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    resolution: Resolution,
}

impl MonoTermDisplay {
    pub fn new() -> Result<MonoTermDisplay, io::Error> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(MonoTermDisplay {
            terminal,
            resolution: Resolution {
                width: WIDTH,
                height: HEIGHT,
            },
        })
    }
}

impl Display for MonoTermDisplay {
    fn draw(&mut self, frame: &[u8]) -> Result<(), io::Error> {
        // make sure we're given exactly one frame's worth of data
        assert_eq!(
            frame.len(),
            self.resolution.byte_count(),
            "MonoTermDisplay must have correct-sized data to draw"
        );

        // 1:1 ratio between terminal cells, chip-8 pixels and the canvas
        let resolution = &self.resolution;
        self.terminal.draw(|f| {
            let size = Rect::new(
                0,
                0,
                2 + resolution.width as u16,
                2 + resolution.height as u16,
            );

            let canvas = Canvas::default()
                .block(
                    Block::default()
                        .title("CHIP-8")
                        .borders(Borders::ALL)
                        .style(Style::default().bg(Color::Black)),
                )
                .x_bounds(resolution.x_bounds())
                .y_bounds(resolution.y_bounds())
                .marker(Marker::Block)
                .paint(|ctx| {
                    ctx.draw(&Points {
                        coords: &resolution.lit_points(frame).collect::<Vec<_>>(),
                        color: Color::White,
                    });
                });
            f.render_widget(canvas, size);
        })?;
        Ok(())
    }

    fn frame_size_bytes(&self) -> usize {
        self.resolution.byte_count()
    }
}

/// useful for testing non-display routines
pub struct DummyDisplay {
    frames_drawn: usize,
}

impl DummyDisplay {
    pub fn new() -> DummyDisplay {
        DummyDisplay { frames_drawn: 0 }
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }
}

impl Display for DummyDisplay {
    fn draw(&mut self, _frame: &[u8]) -> Result<(), io::Error> {
        self.frames_drawn += 1;
        Ok(())
    }

    fn frame_size_bytes(&self) -> usize {
        WIDTH * HEIGHT / 8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_count() {
        let r = Resolution {
            width: 64,
            height: 32,
        };
        assert_eq!(r.byte_count(), 256);
    }

    #[test]
    fn test_x_bounds() {
        let r = Resolution {
            width: 64,
            height: 32,
        };
        assert_eq!(r.x_bounds(), [0.0, 63.0]);
    }

    #[test]
    fn test_y_bounds() {
        let r = Resolution {
            width: 64,
            height: 32,
        };
        assert_eq!(r.y_bounds(), [-31.0, 0.0]);
    }

    #[test]
    fn test_lit_points_of_blank_frame() {
        let r = Resolution {
            width: 64,
            height: 32,
        };
        assert_eq!(r.lit_points(&[0u8; 256]).count(), 0);
    }

    #[test]
    fn test_lit_points_positions() {
        let r = Resolution {
            width: 64,
            height: 32,
        };
        let mut frame = [0u8; 256];
        frame[0] = 0x80; // (0, 0)
        frame[8] = 0x01; // (7, 1)
        let points: Vec<_> = r.lit_points(&frame).collect();
        assert_eq!(points, vec![(7.0, -1.0), (0.0, 0.0)]);
    }

    #[test]
    fn test_dummy_display_counts_frames() {
        let mut d = DummyDisplay::new();
        d.draw(&[0; 256]).unwrap();
        d.draw(&[0; 256]).unwrap();
        assert_eq!(d.frames_drawn(), 2);
    }
}
