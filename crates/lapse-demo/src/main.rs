//! Headless countdown demo.
//!
//! Runs a short countdown over an in-memory surface, simulates the host
//! hiding and re-showing the surface mid-run, and writes every published
//! frame to `target/lapse-frames/frame_NN.png`.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use lapse_engine::logging::{LoggingConfig, init_logging};
use lapse_engine::surface::Frame;
use lapse_ui::prelude::*;

const DENSITY: Density = Density(4.0);
const OUT_DIR: &str = "target/lapse-frames";

struct ConsoleListener {
    completed: AtomicBool,
}

impl CountdownListener for ConsoleListener {
    fn on_countdown_start(&self) {
        println!("  countdown started");
    }

    fn on_countdown_stop(&self, remaining_millis: i64) {
        println!("  countdown stopped with {remaining_millis} ms left");
    }

    fn on_countdown_completed(&self) {
        println!("  countdown completed");
        self.completed.store(true, Ordering::SeqCst);
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut fonts = FontSystem::new();
    let font = load_system_font(&mut fonts);
    if font.is_none() {
        log::warn!("no system font found; rendering plates without digits");
    }

    let mut style = CountdownStyle::new()
        .background_color(Color::from_srgb_u8(0x10, 0x12, 0x18, 0xff))
        .digit_color(Color::from_srgb_u8(0xff, 0xd5, 0x4f, 0xff))
        .border(BorderStyle {
            width: 0.6,
            color: Color::from_srgb_u8(0xff, 0xd5, 0x4f, 0xff),
        });
    if let Some(font) = font {
        style = style.font(font);
    }

    let (width, height) = style.preferred_size(DENSITY);
    let (width, height) = (width.ceil() as u32, height.ceil() as u32);
    let surface = BufferSurface::new(width, height);

    let mut view = CountdownView::new(surface.clone(), fonts, style, DENSITY);
    let listener = Arc::new(ConsoleListener { completed: AtomicBool::new(false) });
    let listener_dyn: Arc<dyn CountdownListener> = listener.clone();
    let observer: Weak<dyn CountdownListener> = Arc::downgrade(&listener_dyn);
    view.set_listener(observer);
    view.set_time(0, 0, 5);

    std::fs::create_dir_all(OUT_DIR)
        .with_context(|| format!("creating {OUT_DIR}"))?;

    println!("rendering a 5 second countdown into {OUT_DIR}/");
    view.on_surface_available(width, height);

    let mut frame_index = 0u32;
    let started = Instant::now();
    let mut hidden = false;
    let mut reshown = false;

    while !listener.completed.load(Ordering::SeqCst) {
        thread::sleep(Duration::from_millis(100));
        view.pump_callbacks();

        if let Some(frame) = surface.take_front() {
            save_frame(&frame, frame_index)?;
            frame_index += 1;
        }

        // Simulate the host hiding the surface for a second mid-run; the
        // countdown pauses and auto-resume pays the hidden time back.
        if !hidden && started.elapsed() >= Duration::from_millis(2200) {
            hidden = true;
            println!("  surface hidden");
            surface.destroy();
            view.on_surface_destroyed();
        }
        if hidden && !reshown && started.elapsed() >= Duration::from_millis(3200) {
            reshown = true;
            println!("  surface shown again");
            surface.make_available(width, height);
            view.on_surface_available(width, height);
        }

        if started.elapsed() > Duration::from_secs(30) {
            anyhow::bail!("countdown did not complete in time");
        }
    }

    println!("wrote {frame_index} frames");
    Ok(())
}

/// Converts a premultiplied frame to straight-alpha RGBA and writes a PNG.
fn save_frame(frame: &Frame, index: u32) -> Result<()> {
    let mut rgba = frame.as_bytes().to_vec();
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as f32;
        if a > 0.0 && a < 255.0 {
            for c in &mut px[..3] {
                *c = (*c as f32 * 255.0 / a).min(255.0) as u8;
            }
        }
    }

    let path = format!("{OUT_DIR}/frame_{index:02}.png");
    let img = image::RgbaImage::from_raw(frame.width(), frame.height(), rgba)
        .context("frame buffer size mismatch")?;
    img.save(Path::new(&path))
        .with_context(|| format!("writing {path}"))?;
    println!("  wrote {path}");
    Ok(())
}

/// Probes the usual system font locations; `None` if nothing loads.
fn load_system_font(fonts: &mut FontSystem) -> Option<FontId> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|path| {
        let bytes = std::fs::read(path).ok()?;
        fonts.load_font(&bytes).ok()
    })
}
