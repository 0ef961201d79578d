//! Build script for thermoprobe-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates probe.toml at compile time
//! - Emits probe_config.rs with the board pins and power-on defaults

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// RP2040 GPIOs that carry I2C0 SDA / SCL
const I2C0_SDA_PINS: &[i64] = &[0, 4, 8, 12, 16, 20, 24, 28];
const I2C0_SCL_PINS: &[i64] = &[1, 5, 9, 13, 17, 21, 25, 29];

/// RP2040 GPIOs that carry UART0 TX / RX
const UART0_TX_PINS: &[i64] = &[0, 12, 16, 28];
const UART0_RX_PINS: &[i64] = &[1, 13, 17, 29];

const MAX_GPIO: i64 = 29;

/// Board wiring read from `[board]`
struct Board {
    i2c_sda: i64,
    i2c_scl: i64,
    uart_tx: i64,
    uart_rx: i64,
    os_pin: i64,
}

/// Power-on defaults read from `[defaults]`
struct Defaults {
    os_threshold_c: i64,
    hyst_threshold_c: i64,
    poll_interval_ms: i64,
    polling_enabled: bool,
}

fn main() {
    setup_linker();
    let (board, defaults) = validate_config();
    emit_config(&board, &defaults);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate probe.toml and extract its values
fn validate_config() -> (Board, Defaults) {
    println!("cargo:rerun-if-changed=probe.toml");

    let config_path = Path::new("probe.toml");

    if !config_path.exists() {
        fail(
            "probe.toml not found",
            &["The firmware requires a probe.toml next to Cargo.toml".into()],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read probe.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in probe.toml",
            &e.to_string().lines().map(String::from).collect::<Vec<_>>(),
        ),
    };

    let board = validate_board(&config);
    let defaults = validate_defaults(&config);

    println!("cargo:warning=probe.toml validated successfully");
    (board, defaults)
}

/// Validate the `[board]` table
fn validate_board(config: &toml::Value) -> Board {
    let table = match config.get("board") {
        Some(toml::Value::Table(t)) => t,
        _ => fail("Missing [board] section in probe.toml", &[]),
    };

    let mut errors = Vec::new();
    let mut pin = |key: &str, allowed: Option<&[i64]>, role: &str| -> i64 {
        match table.get(key) {
            Some(toml::Value::Integer(n)) => {
                if *n < 0 || *n > MAX_GPIO {
                    errors.push(format!("[board] {} must be a GPIO 0-{}", key, MAX_GPIO));
                } else if let Some(allowed) = allowed {
                    if !allowed.contains(n) {
                        errors.push(format!(
                            "[board] {} = {} cannot carry {} (allowed: {:?})",
                            key, n, role, allowed
                        ));
                    }
                }
                *n
            }
            Some(_) => {
                errors.push(format!("[board] {} must be an integer", key));
                -1
            }
            None => {
                errors.push(format!("[board] missing '{}'", key));
                -1
            }
        }
    };

    let board = Board {
        i2c_sda: pin("i2c_sda", Some(I2C0_SDA_PINS), "I2C0 SDA"),
        i2c_scl: pin("i2c_scl", Some(I2C0_SCL_PINS), "I2C0 SCL"),
        uart_tx: pin("uart_tx", Some(UART0_TX_PINS), "UART0 TX"),
        uart_rx: pin("uart_rx", Some(UART0_RX_PINS), "UART0 RX"),
        os_pin: pin("os_pin", None, "the OS input"),
    };

    let pins = [
        ("i2c_sda", board.i2c_sda),
        ("i2c_scl", board.i2c_scl),
        ("uart_tx", board.uart_tx),
        ("uart_rx", board.uart_rx),
        ("os_pin", board.os_pin),
    ];
    for (i, (name_a, a)) in pins.iter().enumerate() {
        for (name_b, b) in &pins[i + 1..] {
            if *a >= 0 && a == b {
                errors.push(format!("[board] {} and {} both use GPIO {}", name_a, name_b, a));
            }
        }
    }

    if !errors.is_empty() {
        fail("Invalid board configuration", &errors);
    }
    board
}

/// Validate the `[defaults]` table
fn validate_defaults(config: &toml::Value) -> Defaults {
    let table = match config.get("defaults") {
        Some(toml::Value::Table(t)) => t,
        _ => fail("Missing [defaults] section in probe.toml", &[]),
    };

    let mut errors = Vec::new();
    let mut int = |key: &str, min: i64, max: i64| -> i64 {
        match table.get(key) {
            Some(toml::Value::Integer(n)) if (min..=max).contains(n) => *n,
            Some(toml::Value::Integer(_)) => {
                errors.push(format!("[defaults] {} must be {}-{}", key, min, max));
                min
            }
            Some(_) => {
                errors.push(format!("[defaults] {} must be an integer", key));
                min
            }
            None => {
                errors.push(format!("[defaults] missing '{}'", key));
                min
            }
        }
    };

    let os_threshold_c = int("os_threshold_c", 0, 127);
    let hyst_threshold_c = int("hyst_threshold_c", 0, 127);
    let poll_interval_ms = int("poll_interval_ms", 10, u32::MAX as i64);

    let polling_enabled = match table.get("polling_enabled") {
        Some(toml::Value::Boolean(b)) => *b,
        None => true,
        Some(_) => {
            errors.push("[defaults] polling_enabled must be true or false".into());
            true
        }
    };

    if errors.is_empty() && hyst_threshold_c > os_threshold_c {
        errors.push(format!(
            "[defaults] hyst_threshold_c ({}) must not exceed os_threshold_c ({})",
            hyst_threshold_c, os_threshold_c
        ));
    }

    if !errors.is_empty() {
        fail("Invalid defaults configuration", &errors);
    }

    Defaults {
        os_threshold_c,
        hyst_threshold_c,
        poll_interval_ms,
        polling_enabled,
    }
}

/// Write probe_config.rs into OUT_DIR
fn emit_config(board: &Board, defaults: &Defaults) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let source = format!(
        "// Generated by build.rs from probe.toml\n\
         \n\
         /// Over-temperature threshold written at boot (°C)\n\
         pub const DEFAULT_OS_THRESHOLD_C: u8 = {os};\n\
         /// Hysteresis threshold written at boot (°C)\n\
         pub const DEFAULT_HYST_THRESHOLD_C: u8 = {hyst};\n\
         /// Poll interval at boot (ms)\n\
         pub const DEFAULT_POLL_INTERVAL_MS: u32 = {interval};\n\
         /// Whether polling runs from boot\n\
         pub const DEFAULT_POLLING_ENABLED: bool = {enabled};\n\
         \n\
         /// Take the board's pins out of the peripherals struct\n\
         ///\n\
         /// Expands to `(i2c_sda, i2c_scl, uart_tx, uart_rx, os_pin)`.\n\
         macro_rules! board_pins {{\n    \
             ($p:ident) => {{\n        \
                 ($p.PIN_{sda}, $p.PIN_{scl}, $p.PIN_{tx}, $p.PIN_{rx}, $p.PIN_{os_pin})\n    \
             }};\n\
         }}\n",
        os = defaults.os_threshold_c,
        hyst = defaults.hyst_threshold_c,
        interval = defaults.poll_interval_ms,
        enabled = defaults.polling_enabled,
        sda = board.i2c_sda,
        scl = board.i2c_scl,
        tx = board.uart_tx,
        rx = board.uart_rx,
        os_pin = board.os_pin,
    );

    fs::write(out_dir.join("probe_config.rs"), source).unwrap();
}

/// Abort the build with a boxed error report
fn fail(title: &str, errors: &[String]) -> ! {
    let body = errors
        .iter()
        .map(|e| {
            let line = if e.chars().count() > 62 {
                format!("{}...", e.chars().take(59).collect::<String>())
            } else {
                e.clone()
            };
            format!("║  • {:<62} ║", line)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
