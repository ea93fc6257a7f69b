//! Build script for bloom-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates flower.toml at compile time
//! - Encodes the validated config as postcard for `include_bytes!`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use bloom_core::config::FlowerConfig;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    setup_linker(&out_dir);
    encode_config(&out_dir);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse, validate and encode flower.toml
fn encode_config(out_dir: &Path) {
    println!("cargo:rerun-if-changed=flower.toml");

    let config_path = Path::new("flower.toml");
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: flower.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a flower.toml configuration file.         ║\n\
            ║  Please create one in the bloom-firmware directory.              ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read flower.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Unknown keys are rejected so typos don't silently fall back to defaults
    if let Err(e) = check_known_keys(&content) {
        fail("Unknown key in flower.toml", &e);
    }

    let config: FlowerConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail("Invalid flower.toml", &e.to_string()),
    };

    if let Err(e) = config.validate() {
        fail("flower.toml failed validation", &format!("{:?}", e));
    }

    let bytes = match postcard::to_allocvec(&config) {
        Ok(bytes) => bytes,
        Err(e) => fail("Failed to encode flower config", &e.to_string()),
    };

    let mut f = File::create(out_dir.join("flower.bin")).unwrap();
    f.write_all(&bytes).unwrap();

    println!(
        "cargo:warning=flower.toml validated successfully ({} bytes)",
        bytes.len()
    );
}

/// Section and key names accepted in flower.toml
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    (
        "timing",
        &["sample_interval_ms", "sun_interval_ms", "dimmer_interval_ms"],
    ),
    ("motion", &["base", "arm", "head"]),
    ("poses", &["open", "closed"]),
    (
        "environment",
        &[
            "optimal_temp_c",
            "temp_range_c",
            "dim_brightness",
            "max_brightness",
        ],
    ),
    (
        "sun",
        &[
            "altitude_min_deg",
            "altitude_max_deg",
            "arm_min_deg",
            "arm_max_deg",
        ],
    ),
    ("emotions", &["open", "close"]),
    ("illumination", &["initial_brightness", "initially_on"]),
];

fn check_known_keys(content: &str) -> Result<(), String> {
    let value: toml::Table = toml::from_str(content).map_err(|e| e.to_string())?;
    for (section, body) in &value {
        let keys = KNOWN_KEYS
            .iter()
            .find(|(name, _)| *name == section.as_str())
            .map(|(_, keys)| *keys)
            .ok_or_else(|| format!("[{}]", section))?;
        if let toml::Value::Table(table) = body {
            for key in table.keys() {
                if !keys.contains(&key.as_str()) {
                    return Err(format!("[{}] {}", section, key));
                }
            }
        }
    }
    Ok(())
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
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
