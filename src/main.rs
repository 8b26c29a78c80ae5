// SPDX-License-Identifier: MIT
//
// n-pair — random accessible background/text color pairs.
//
// This is the binary that wires the crates together:
//
//   n-color   → hex, HSL, OKLCH, WCAG contrast
//   n-theme   → tone scales and text selection
//   n-palette → band sampling and the re-sampling loop
//
// Options are resolved in three layers, later layers winning:
//
//   GeneratorOptions::DEFAULT  ◀─ --config file.json  ◀─ command-line flags
//
// Output is either pretty JSON (--json) or one truecolor swatch per
// variant:
//
//   pastel          ██ Aa ██  #F5D6E0 / #8A4A5E   5.12:1

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use n_color::{Rgb, contrast_ratio_hex};
use n_palette::{
    ColorValue, GeneratorOptions, GeneratorOverrides, GradientOverrides, PaletteError,
    PaletteGenerator, PaletteResult, VariantResult,
};
use n_theme::{ContrastScaleEngine, ThemeConfig, ThemeOverrides};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "n-pair", version, about = "Random accessible background/text color pairs")]
struct Cli {
    /// Stops per gradient.
    #[arg(long)]
    steps: Option<usize>,

    /// Expand backgrounds into gradients (`--bg-gradient=false` turns it off).
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    bg_gradient: Option<bool>,

    /// Expand text colors into gradients (`--text-gradient=false` turns it off).
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    text_gradient: Option<bool>,

    /// Seeds tried per band before giving up.
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Seed the random generator for a reproducible palette.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with generator and theme overrides.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the palette as JSON instead of swatches.
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Flags as overrides. Unset flags leave lower layers alone.
    fn overrides(&self) -> GeneratorOverrides {
        GeneratorOverrides {
            gradient: GradientOverrides {
                steps: self.steps,
                bg: self.bg_gradient,
                text: self.text_gradient,
            },
            max_attempts: self.max_attempts,
        }
    }
}

/// Contents of `--config`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    #[serde(flatten)]
    generator: GeneratorOverrides,
    theme: ThemeOverrides,
}

impl ConfigFile {
    fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CliError::ParseConfig {
            path: path.to_owned(),
            source,
        })
    }
}

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read config {}: {source}", path.display())]
    ReadConfig { path: PathBuf, source: io::Error },
    #[error("invalid config {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error("cannot encode palette: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

// ─── Swatches ───────────────────────────────────────────────────────────────

const RESET: &str = "\x1b[0m";

fn write_bg(w: &mut impl Write, hex: &str) -> io::Result<()> {
    match Rgb::parse(hex) {
        Ok(Rgb { r, g, b }) => write!(w, "\x1b[48;2;{r};{g};{b}m"),
        Err(_) => Ok(()),
    }
}

fn write_fg(w: &mut impl Write, hex: &str) -> io::Result<()> {
    match Rgb::parse(hex) {
        Ok(Rgb { r, g, b }) => write!(w, "\x1b[38;2;{r};{g};{b}m"),
        Err(_) => Ok(()),
    }
}

fn stops(value: &ColorValue) -> &[String] {
    match value {
        ColorValue::Solid(hex) => std::slice::from_ref(hex),
        ColorValue::Gradient(stops) => stops,
    }
}

/// One line: gradient strip, a text sample, the hex pair and its ratio.
fn write_swatch(w: &mut impl Write, key: &str, variant: &VariantResult) -> io::Result<()> {
    let (Some(bg), Some(text)) = (variant.bg.first(), variant.text.first()) else {
        return Ok(());
    };

    write!(w, "{key:<15} ")?;
    for stop in stops(&variant.bg) {
        write_bg(w, stop)?;
        w.write_all(b"  ")?;
    }
    write_bg(w, bg)?;
    write_fg(w, text)?;
    write!(w, " Aa {RESET} ")?;
    for stop in stops(&variant.text) {
        write_bg(w, stop)?;
        w.write_all(b"  ")?;
    }
    write!(w, "{RESET}  {bg} / {text}")?;
    if let Ok(ratio) = contrast_ratio_hex(bg, text) {
        write!(w, "  {ratio:.2}:1")?;
    }
    writeln!(w)
}

fn write_palette(w: &mut impl Write, palette: &PaletteResult) -> io::Result<()> {
    for (key, variant) in palette.variants() {
        write_swatch(w, key, variant)?;
    }
    Ok(())
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn resolve(cli: &Cli) -> Result<(GeneratorOptions, ThemeConfig), CliError> {
    let file = match &cli.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    let options = GeneratorOptions::DEFAULT
        .merge(&file.generator)
        .merge(&cli.overrides());
    let theme = ThemeConfig::DEFAULT.merge(&file.theme);
    Ok((options, theme))
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let (options, theme) = resolve(cli)?;
    debug!(?options, ?theme, "resolved options");

    let generator = PaletteGenerator::new(ContrastScaleEngine, theme)?;
    let palette = match cli.seed {
        Some(seed) => generator.generate_with(&options, &mut StdRng::seed_from_u64(seed))?,
        None => generator.generate_with(&options, &mut rand::rng())?,
    };

    let mut out = io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &palette)?;
        writeln!(out)?;
    } else {
        write_palette(&mut out, &palette)?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = run(&cli) {
        eprintln!("n-pair: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("n-pair").chain(args.iter().copied()))
    }

    fn emit(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn temp_config(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("n-pair-{}-{name}.json", process::id()));
        fs::write(&path, body).unwrap();
        path
    }

    // ── Options ─────────────────────────────────────────────────────

    #[test]
    fn no_flags_means_defaults() {
        let (options, theme) = resolve(&parse(&[])).unwrap();
        assert_eq!(options, GeneratorOptions::DEFAULT);
        assert_eq!(theme, ThemeConfig::DEFAULT);
    }

    #[test]
    fn flags_map_to_options() {
        let (options, _) = resolve(&parse(&["--steps", "5", "--bg-gradient", "--max-attempts", "9"])).unwrap();
        assert_eq!(options.gradient.steps, 5);
        assert!(options.gradient.bg);
        assert!(!options.gradient.text);
        assert_eq!(options.max_attempts, 9);
    }

    #[test]
    fn flags_win_over_config_file() {
        let path = temp_config(
            "layers",
            r#"{ "gradient": { "steps": 3, "text": true }, "maxAttempts": 50, "theme": { "darkContrast": 1.5 } }"#,
        );
        let cli = parse(&["--config", path.to_str().unwrap(), "--steps", "7"]);
        let (options, theme) = resolve(&cli).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(options.gradient.steps, 7);
        assert!(options.gradient.text);
        assert_eq!(options.max_attempts, 50);
        assert!((theme.dark_contrast - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn flags_can_switch_config_gradients_off() {
        let path = temp_config("switch-off", r#"{ "gradient": { "bg": true, "text": true } }"#);
        let cli = parse(&["--config", path.to_str().unwrap(), "--bg-gradient=false"]);
        let (options, _) = resolve(&cli).unwrap();
        fs::remove_file(&path).ok();

        assert!(!options.gradient.bg);
        assert!(options.gradient.text);
    }

    #[test]
    fn bare_gradient_flag_means_true() {
        let cli = parse(&["--text-gradient"]);
        assert_eq!(cli.text_gradient, Some(true));
        assert_eq!(cli.bg_gradient, None);
        let (options, _) = resolve(&cli).unwrap();
        assert!(options.gradient.text);
        assert!(!options.gradient.bg);
    }

    #[test]
    fn missing_config_is_reported() {
        let cli = parse(&["--config", "/nonexistent/n-pair.json"]);
        let err = resolve(&cli).unwrap_err();
        assert!(matches!(err, CliError::ReadConfig { .. }));
        assert!(err.to_string().contains("/nonexistent/n-pair.json"));
    }

    #[test]
    fn malformed_config_is_reported() {
        let path = temp_config("malformed", "{ steps: ");
        let err = resolve(&parse(&["--config", path.to_str().unwrap()])).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, CliError::ParseConfig { .. }));
    }

    // ── Swatches ────────────────────────────────────────────────────

    #[test]
    fn truecolor_sequences() {
        assert_eq!(emit(|w| write_bg(w, "#FF8000")), "\x1b[48;2;255;128;0m");
        assert_eq!(emit(|w| write_fg(w, "#000000")), "\x1b[38;2;0;0;0m");
        assert_eq!(emit(|w| write_bg(w, "nope")), "");
    }

    #[test]
    fn swatch_line_shows_pair_and_ratio() {
        let generator: PaletteGenerator = PaletteGenerator::default();
        let palette = generator
            .generate_with(&GeneratorOptions::DEFAULT, &mut StdRng::seed_from_u64(1))
            .unwrap();
        let out = emit(|w| write_palette(w, &palette));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("pastel "));
        assert!(lines[3].starts_with("invertedPastel "));
        for line in lines {
            assert!(line.contains("\x1b[48;2;"));
            assert!(line.ends_with(":1"), "{line:?}");
        }
    }

    #[test]
    fn gradient_swatch_draws_every_stop() {
        let variant = VariantResult {
            bg: ColorValue::Gradient(vec!["#000000".into(), "#111111".into(), "#222222".into()]),
            text: ColorValue::Solid("#FFFFFF".into()),
            theme: n_theme::build_theme("#000000", &ThemeConfig::DEFAULT).unwrap().scale,
            raw: n_theme::build_theme("#000000", &ThemeConfig::DEFAULT).unwrap().raw,
        };
        let out = emit(|w| write_swatch(w, "dark", &variant));
        assert_eq!(out.matches("\x1b[48;2;").count(), 3 + 1 + 1);
        assert!(out.contains("#000000 / #FFFFFF  21.00:1"));
    }
}
