//! Streaming plot demo.
//!
//! Scrolls a random-walk series through a fixed x window, the way a live
//! sensor feed would: every tick one sample is appended and the oldest is
//! popped, then the frame is re-rendered and printed as ANSI output.
//!
//! A real host would deliver pointer and auto-scale events from its input
//! loop; here they are scripted so the demo shows the focus tint and the
//! bound write-back without a terminal input backend:
//! - tick 40: a left click inside the plot takes focus (title turns cyan)
//! - tick 80: the auto-scale trigger refits the bounds to the data
//!
//! Run with: cargo run -p glyphplot --example streaming

use std::collections::VecDeque;
use std::io::Write;
use std::time::Duration;

use glyphplot::{
    Color, Plot, PlotConfig, PlotEvent, PointerEvent, Rect, Series, SeriesStyle, arange, logging,
};
use glyphplot_term::TermCanvas;

/// Canvas size in terminal cells.
const COLS: i32 = 100;
const ROWS: i32 = 28;

/// Frames rendered before the demo exits.
const TICKS: usize = 300;

/// Delay between frames.
const POLL_PERIOD: Duration = Duration::from_millis(50);

/// X distance between consecutive samples.
const SAMPLE_STEP: f64 = 0.05;

/// xorshift64* generator, explicitly seeded so runs are reproducible.
struct XorShift {
    state: u64,
}

impl XorShift {
    fn new(seed: u64) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn next_in(&mut self, min: f64, max: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        min + unit * (max - min)
    }
}

fn main() {
    logging::init();

    let x: VecDeque<f64> = arange(0.0, 5.0, SAMPLE_STEP).collect();
    // Seed y off-scale so the stream visibly scrolls into view.
    let y: VecDeque<f64> = x.iter().map(|_| 100.0).collect();

    let mut config = PlotConfig::new()
        .with_x_range(0.0, 5.0)
        .with_y_range(-2.0, 2.0);
    config.series.push(
        Series::new(x, y)
            .with_color(Color::RED)
            .with_style(SeriesStyle::PointLine),
    );

    let mut plot = Plot::new();
    plot.set_bounds(Rect::new(0, 0, COLS, ROWS));

    let mut rng = XorShift::new(0x5EED);
    let mut stdout = std::io::stdout();

    print!("\x1b[?25l\x1b[2J");

    for tick in 0..TICKS {
        {
            let series = &mut config.series[0];
            series.y.push_back(rng.next_in(-1.0, 1.0));
            series.y.pop_front();
        }

        if tick == 40 {
            let click = PlotEvent::from(PointerEvent::left_press(10, 5));
            plot.handle_event(&click, &mut config);
        }
        if tick == 80 {
            plot.handle_event(&PlotEvent::AutoScale, &mut config);
        }

        let mut canvas = TermCanvas::new(COLS, ROWS);
        plot.render(&mut config, &mut canvas);

        let title = if plot.is_focused() {
            Color::CYAN
        } else {
            Color::WHITE
        };
        print!(
            "\x1b[H\x1b[38;2;{};{};{}m streaming  x: [{}, {}]  y: [{}, {}]\x1b[0m\n",
            title.r,
            title.g,
            title.b,
            config.x_min.text(),
            config.x_max.text(),
            config.y_min.text(),
            config.y_max.text(),
        );
        print!("{}", canvas.frame());
        stdout.flush().ok();

        std::thread::sleep(POLL_PERIOD);
    }

    print!("\x1b[?25h");
}
