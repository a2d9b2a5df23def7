// What you SEE now:
// • A centered grid of white cells on a gray background.
// • Number keys 1..N start the matching sorting algorithm; its snapshots
//   animate one frame per tick until the bars land sorted.
// • I toggles invert-Y (row 0 at the bottom). S paints the sorted staircase.
// • Starting a new algorithm instantly replaces the running one. ESC quits.

mod algo;
mod draw;
mod error;
mod grid;
mod types;
mod visualizer;

use std::time::{Duration, Instant};

use clap::Parser;

use algo::demo_algorithms;
use draw::{Drawer, draw_text_5x7};
use error::Error;
use types::FrameBuffer;
use visualizer::Visualizer;

#[derive(Parser, Debug)]
#[command(
    name = "sortviz",
    version,
    about = "Animate sorting algorithms on a centered cell grid"
)]
struct Cli {
    /// Window title — the identifier of the drawing surface.
    #[arg(long, default_value = "sortviz")]
    title: String,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 305)]
    width: usize,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 305)]
    height: usize,

    /// Cell width in pixels.
    #[arg(long, default_value_t = 25)]
    cell_width: usize,

    /// Cell height in pixels.
    #[arg(long, default_value_t = 25)]
    cell_height: usize,

    /// Spacing before each cell and after the last, both axes.
    #[arg(long, default_value_t = 5)]
    gutter: usize,

    /// Milliseconds between animation ticks.
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    /// Start with row 0 at the bottom of the grid (bars grow upward).
    #[arg(long)]
    invert_y: bool,
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    /* --- Canvas + visualizer setup ---
       Visual: the canvas holds the grid; cell paints land here and persist. */
    let mut canvas = FrameBuffer::new(cli.width, cli.height);
    let mut viz = Visualizer::new(
        &mut canvas,
        cli.cell_width,
        cli.cell_height,
        cli.gutter,
        cli.interval_ms,
    )?;
    viz.set_invert_y_axis(cli.invert_y);
    viz.mount(demo_algorithms());
    println!(
        "grid: {} x {} cells, tick every {}ms",
        viz.n_cols(),
        viz.n_rows(),
        cli.interval_ms
    );

    let mut drawer = Drawer::new(&cli.title, cli.width, cli.height)?;

    /* --- Screen buffer ---
       Visual: canvas + HUD overlay, rebuilt every frame so the text never smears. */
    let mut screen = canvas.clone();

    /* --- Trigger legend (the "buttons"), one label per mounted algorithm --- */
    let legend = viz
        .algorithm_names()
        .enumerate()
        .map(|(k, name)| format!("{}:{}", k + 1, name))
        .collect::<Vec<_>>()
        .join("  ");

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) Triggers.
           Visual: pressing a number key restarts the grid with that algorithm. */
        if let Some(k) = drawer.digit_pressed_once() {
            if k < viz.algorithm_count() {
                viz.start(k, now)?;
            }
        }
        if drawer.i_pressed_once() {
            viz.set_invert_y_axis(!viz.invert_y_axis()); // visual: rows flip on the next frame
        }
        if drawer.s_pressed_once() {
            viz.draw_sorted_data(&mut canvas); // visual: the sorted staircase, immediately
        }

        /* 2) Animation tick: at most one frame per loop pass, on the cadence. */
        let was_running = viz.running_name();
        viz.tick(&mut canvas, now);
        if !viz.is_running() {
            if let Some(name) = was_running {
                println!("{name}: done"); // the final frame stays on screen
            }
        }

        /* 3) Composite: grid first, HUD text on top. */
        screen.pixels.copy_from_slice(&canvas.pixels);

        let status = match viz.running_name() {
            Some(name) => name,
            None => "IDLE",
        };
        let hud = format!("{status} | {hud_fps_text} | I:INVERT S:SORTED");
        draw_text_5x7(&mut screen, 4, 4, &hud, 0x00FF_FFFF);
        let legend_y = screen.height as i32 - 12;
        draw_text_5x7(&mut screen, 4, legend_y, &legend, 0x00FF_FFFF);

        /* 4) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;

        /* 5) FPS counter (prints to terminal + HUD once per second) */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            println!("FPS: {fps:.1}");                 // terminal
            hud_fps_text = format!("FPS: {fps:.1}");   // HUD part
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
