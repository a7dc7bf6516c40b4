//! Build script for bitdog-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Parses and validates board.toml, then bakes it into the binary as a
//!   `const BoardConfig`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use bitdog_core::config::{BoardConfig, ConfigError};

/// Panel the firmware drives
const DISPLAY_WIDTH: u32 = 128;
const DISPLAY_HEIGHT: u32 = 64;

fn main() {
    setup_linker();
    let config = load_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read board.toml into a validated configuration
fn load_config() -> BoardConfig {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    // A missing file means stock defaults
    if !config_path.exists() {
        println!("cargo:warning=board.toml not found, using default board configuration");
        return BoardConfig::default();
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read board.toml", &e.to_string()),
    };

    let config: BoardConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail("Invalid board.toml", &e.to_string()),
    };

    if let Err(e) = config.validate(DISPLAY_WIDTH, DISPLAY_HEIGHT) {
        fail("Invalid value in board.toml", &describe(e));
    }

    println!("cargo:warning=board.toml validated successfully");
    config
}

/// Human-readable explanation of a validation error
fn describe(error: ConfigError) -> String {
    match error {
        ConfigError::InvalidDisplayAddress(addr) => {
            format!("display.address = {:#04x}, expected 0x3c or 0x3d", addr)
        }
        ConfigError::InvalidBusFrequency(hz) => {
            format!("display.frequency_hz = {}, expected 1..=1000000", hz)
        }
        ConfigError::InvalidAdcRange => "joystick.adc_max must be non-zero".to_string(),
        ConfigError::InvalidCenter(center) => {
            format!("joystick.center = {} lies outside the ADC range", center)
        }
        ConfigError::InvalidDeadZone(dz) => {
            format!("joystick.dead_zone = {} reaches an end stop", dz)
        }
        ConfigError::InvalidSquareSize(size) => format!(
            "ui.square_size = {}, expected 1..={}",
            size,
            DISPLAY_WIDTH.min(DISPLAY_HEIGHT)
        ),
        ConfigError::InvalidFrameInterval => "ui.frame_interval_ms must be non-zero".to_string(),
    }
}

/// Abort the build with a boxed error message
fn fail(title: &str, detail: &str) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(detail)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `board_config.rs` into OUT_DIR
fn generate_config(config: &BoardConfig) {
    let display = &config.display;
    let joystick = &config.joystick;
    let ui = &config.ui;

    let source = format!(
        "/// Board configuration baked in from board.toml\n\
         pub const BOARD_CONFIG: BoardConfig = BoardConfig {{\n    \
             display: DisplayConfig {{\n        \
                 address: {:#04x},\n        \
                 frequency_hz: {},\n        \
                 contrast: {:#04x},\n    \
             }},\n    \
             joystick: JoystickConfig {{\n        \
                 adc_max: {},\n        \
                 center: {},\n        \
                 dead_zone: {},\n        \
                 invert_x: {},\n        \
                 invert_y: {},\n    \
             }},\n    \
             ui: UiConfig {{\n        \
                 square_size: {},\n        \
                 frame_interval_ms: {},\n        \
                 debounce_ms: {},\n    \
             }},\n\
         }};\n",
        display.address,
        display.frequency_hz,
        display.contrast,
        joystick.adc_max,
        joystick.center,
        joystick.dead_zone,
        joystick.invert_x,
        joystick.invert_y,
        ui.square_size,
        ui.frame_interval_ms,
        ui.debounce_ms,
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("board_config.rs"), source).unwrap();
}
