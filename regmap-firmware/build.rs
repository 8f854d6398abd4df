//! Build script for regmap-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Generates the EEPROM size constant
//! - Validates loader.toml and registers.csv at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use regmap_core::loader::LoadEvent;
use regmap_core::{BackingStore, Loader};

/// Simulated EEPROM size in bytes
const EEPROM_SIZE: usize = 8 * 1024;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    setup_linker(&out_dir);
    generate_constants(&out_dir);
    let config = validate_config();
    validate_records(config);
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

/// Write constants shared between the build script and the firmware
fn generate_constants(out_dir: &Path) {
    let mut f = File::create(out_dir.join("eeprom.rs")).unwrap();
    writeln!(f, "/// Simulated EEPROM size in bytes").unwrap();
    writeln!(f, "pub const EEPROM_SIZE: usize = {};", EEPROM_SIZE).unwrap();
}

/// Read a file next to Cargo.toml or fail the build
fn read_required(name: &str) -> String {
    println!("cargo:rerun-if-changed={}", name);

    let path = Path::new(name);
    if !path.exists() {
        fail(
            &format!("ERROR: {} not found!", name),
            &[format!("The firmware embeds {} at compile time.", name)],
        );
    }

    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => fail(
            &format!("ERROR: Failed to read {}", name),
            &[format!("Error: {}", e)],
        ),
    }
}

/// Validate loader.toml at compile time
fn validate_config() -> regmap_core::config::RegmapConfig {
    let content = read_required("loader.toml");

    // Syntax first, for the line/column the toml crate reports
    if let Err(e) = toml::from_str::<toml::Value>(&content) {
        let lines: Vec<String> = e.to_string().lines().map(String::from).collect();
        fail("ERROR: Invalid TOML syntax in loader.toml", &lines);
    }

    // Then the subset the firmware parser understands
    let config = match regmap_core::config::parse_config(&content) {
        Ok(config) => config,
        Err(e) => fail(
            "ERROR: Invalid configuration in loader.toml",
            &[format!("Parser rejected the file: {:?}", e)],
        ),
    };

    if config.dump.end as usize >= EEPROM_SIZE {
        fail(
            "ERROR: Invalid [dump] range in loader.toml",
            &[format!(
                "end = {:#x} is past the {} byte EEPROM",
                config.dump.end, EEPROM_SIZE
            )],
        );
    }

    println!("cargo:warning=loader.toml validated successfully");
    config
}

/// Dry-run registers.csv against a host-side store of the same size
fn validate_records(config: regmap_core::config::RegmapConfig) {
    let content = read_required("registers.csv");

    let mut store = Box::new(BackingStore::<EEPROM_SIZE>::new());
    let mut errors: Vec<String> = Vec::new();

    let report = Loader::new(config.loader).load(&content, store.as_mut(), |event| match event {
        LoadEvent::ParseFailed { line_no, failure } => errors.push(format!(
            "line {}: {:?} in '{}'",
            line_no, failure.reason, failure.line
        )),
        LoadEvent::Rejected {
            line_no,
            line,
            error,
        } => errors.push(format!("line {}: {:?} in '{}'", line_no, error, line)),
        LoadEvent::Written { .. } | LoadEvent::Aborted { .. } => {}
    });

    if !errors.is_empty() {
        fail("ERROR: Invalid records in registers.csv", &errors);
    }

    println!(
        "cargo:warning=registers.csv validated successfully ({} records)",
        report.written
    );
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  {:<64} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(lines)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(lines: &[String]) -> String {
    lines
        .iter()
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
