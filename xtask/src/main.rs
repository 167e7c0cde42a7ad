//! Developer tasks (schema generation, fixture checks).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use pkgversions_types::ids;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .or_else(|_| std::env::current_dir())
        .unwrap_or_else(|_| PathBuf::from("."));

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(manifest_dir)
    } else {
        manifest_dir
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

fn config_schema_filename() -> String {
    format!("{}.json", ids::SCHEMA_CONFIG_V1)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(pkgversions_settings::PackageVersionsConfigV1)
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    let json = serialize_schema(&generate_config_schema())?;
    let path = dir.join(config_schema_filename());
    fs::write(&path, &json)
        .with_context(|| format!("Failed to write schema to {}", path.display()))?;

    println!("Wrote {}", path.display());
    Ok(())
}

/// Fail when the committed schema differs from what the config type generates.
fn validate_schemas() -> anyhow::Result<()> {
    let path = schemas_dir().join(config_schema_filename());
    if !path.exists() {
        eprintln!("Missing schema: {}", config_schema_filename());
        eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
        bail!("Schema validation failed");
    }

    // Compared as JSON values; key order and whitespace are not significant.
    let expected = serde_json::to_value(generate_config_schema())
        .context("Failed to convert config schema to JSON")?;
    let text =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let actual: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    if expected != actual {
        eprintln!("Schema out of date: {}", config_schema_filename());
        eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
        bail!("Schema validation failed");
    }

    println!("All schemas are up to date.");
    Ok(())
}

/// Validate every fixture's `package-versions.toml` against the generated config schema.
fn validate_fixture_configs() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_config_schema())
        .context("Failed to convert config schema to JSON")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile config schema: {}", e))?;

    let mut checked = 0;
    let mut errors = Vec::new();

    let dir = fixtures_dir();
    for entry in fs::read_dir(&dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let config_path = entry?.path().join(ids::DEFAULT_CONFIG_FILE);
        if !config_path.exists() {
            continue;
        }

        let text = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let instance: serde_json::Value = toml::from_str(&text)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        for error in validator.iter_errors(&instance) {
            errors.push(format!("{}: {}", config_path.display(), error));
        }
        checked += 1;
    }

    if errors.is_empty() {
        println!("✓ {checked} fixture config(s) match the config schema");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  ✗ {error}");
        }
        bail!("Fixture config validation failed with {} errors", errors.len())
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate the config JSON schema from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  validate-configs  Validate fixture package-versions.toml files against the schema");
    eprintln!("  print-schema-ids  Print known schema IDs");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "validate-configs" => validate_fixture_configs(),
        "print-schema-ids" => {
            println!("{}", ids::SCHEMA_CONFIG_V1);
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
