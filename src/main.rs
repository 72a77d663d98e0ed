// Allow unused code for designed-but-not-yet-used APIs
// Remove these as the codebase matures
#![allow(dead_code)]

mod color;
mod cube;
mod display;
mod math3d;
mod raster;
mod settings;
mod texture;
mod util;

use color::Color;
use cube::Camera;
use display::{Display, InputEvent, PixelBuffer, RenderTarget};
use math3d::Vec2;
use sdl2::keyboard::Keycode;
use settings::Settings;
use texture::Texture;
use util::FpsCounter;

/// Simulation step for the fixed-timestep accumulator
const TIME_STEP: f64 = 1.0 / 120.0;

const SETTINGS_PATH: &str = "spincube.json";

/// Parse command line arguments on top of the loaded settings
fn parse_args(mut settings: Settings) -> Settings {
    let args: Vec<String> = std::env::args().collect();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => settings.vsync = false,
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        settings.width = w;
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        settings.height = h;
                    }
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // Parse WxH format (e.g., 1920x1080)
                    let parts: Vec<&str> = args[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                            settings.width = w;
                            settings.height = h;
                        }
                    }
                    i += 1;
                }
            },
            "--pixel-size" | "-p" => {
                if i + 1 < args.len() {
                    if let Ok(p) = args[i + 1].parse::<u32>() {
                        settings.pixel_size = p.max(1);
                    }
                    i += 1;
                }
            },
            "--texture" | "-t" => {
                if i + 1 < args.len() {
                    settings.texture = args[i + 1].clone();
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: spincube [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --width W, -w W           Set window width");
                println!("  --height H, -h H          Set window height");
                println!("  --resolution WxH, -r WxH  Set resolution (e.g., 1920x1080)");
                println!("  --pixel-size N, -p N      Window pixels per buffer pixel");
                println!("  --texture PATH, -t PATH   Cube texture image");
                println!("  --no-vsync                Disable VSync for uncapped framerate");
                println!("  --help                    Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    settings
}

fn main() -> Result<(), String> {
    // Settings file, then CLI overrides; missing file means defaults
    let settings = parse_args(Settings::load(SETTINGS_PATH).unwrap_or_else(|_| Settings::default()));

    let pixel_size = settings.pixel_size.max(1);
    let buffer_width = (settings.width / pixel_size).max(1);
    let buffer_height = (settings.height / pixel_size).max(1);

    let (mut display, texture_creator) =
        Display::with_options("spincube", settings.width, settings.height, settings.vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, buffer_width, buffer_height)?;
    let mut buffer = PixelBuffer::with_size(buffer_width, buffer_height);

    let texture = Texture::load(&settings.texture).unwrap_or_else(|e| {
        eprintln!("{}; falling back to a procedural checkerboard", e);
        Texture::checkerboard(64, 8, Color::WHITE, Color::new(0.45, 0.25, 0.2))
    });

    let mut camera = Camera {
        pitch: settings.camera_pitch,
        zoom: settings.camera_zoom,
        ..Camera::default()
    };

    println!("=== spincube ===");
    println!(
        "Window: {}x{}, buffer: {}x{} ({}x upscale)",
        display.width(),
        display.height(),
        buffer_width,
        buffer_height,
        pixel_size
    );
    if settings.vsync {
        println!("VSync: ON. Use --no-vsync for uncapped.");
    } else {
        println!("VSync: OFF (uncapped framerate)");
    }
    println!("Controls:");
    println!("  Up/Down    - Tilt camera");
    println!("  -/=        - Zoom out / in");
    println!("  Space      - Pause rotation");
    println!("  S          - Save settings to {}", SETTINGS_PATH);
    println!("  Escape     - Quit");

    let mut fps_counter = FpsCounter::new(60);
    let mut accumulator = 0.0_f64;
    let mut second_timer = 0.0_f64;
    let mut frames = 0_u32;
    let mut angle = 0.0_f32;
    let mut paused = false;

    'main: loop {
        let (dt, avg_fps) = fps_counter.tick();
        accumulator += dt as f64;

        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'main,
                InputEvent::KeyDown(key) => match key {
                    Keycode::Escape => break 'main,
                    Keycode::Up => camera.pitch += 0.1,
                    Keycode::Down => camera.pitch -= 0.1,
                    Keycode::Equals => camera.zoom *= 1.1,
                    Keycode::Minus => camera.zoom /= 1.1,
                    Keycode::Space => paused = !paused,
                    Keycode::S => {
                        let mut saved = settings.clone();
                        saved.camera_pitch = camera.pitch;
                        saved.camera_zoom = camera.zoom;
                        match saved.save(SETTINGS_PATH) {
                            Ok(()) => println!("Settings saved to {}", SETTINGS_PATH),
                            Err(e) => eprintln!("Failed to save settings: {}", e),
                        }
                    },
                    _ => {},
                },
            }
        }

        // Drain elapsed time in fixed steps; render at most once per poll
        let mut can_render = false;
        while accumulator >= TIME_STEP {
            accumulator -= TIME_STEP;
            second_timer += TIME_STEP;

            if second_timer >= 1.0 {
                second_timer = 0.0;
                display.set_title(&format!(
                    "spincube - {} fps ({} avg)",
                    frames, avg_fps as u32
                ))?;
                frames = 0;
            }

            if !paused {
                angle += TIME_STEP as f32;
            }
            can_render = true;
        }

        if can_render {
            buffer.clear(Color::BLACK);

            camera.yaw = angle;
            cube::draw_cube(
                &mut buffer,
                Some(&texture),
                &camera,
                Vec2::new(0.0, 0.0),
                0.0,
                0.0,
                settings.cube_scale,
            );

            display.present(&mut target, &buffer)?;
            frames += 1;
        }
    }

    Ok(())
}
