//! noisetex CLI - procedural texture generator.
//!
//! Synthesizes cloud, wood, marble and value-noise textures and writes them
//! as 8-bit grayscale images.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use noisetex::export::{
    expected_file_size, export_texture_raw, export_textures_png, PngExportOptions,
};
use noisetex::noise::{FractalNoiseConfig, NoiseBasis};
use noisetex::pattern::{Pattern, PatternKind};
use noisetex::texture::{Texture, TextureConfig, TextureSynthesizer};

/// Procedural grayscale texture generator.
#[derive(Parser)]
#[command(name = "noisetex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one or more textures.
    Generate {
        /// Texture width and height in pixels.
        #[arg(short, long, default_value = "512")]
        size: u32,

        /// Random seed for reproducible generation.
        #[arg(long)]
        seed: Option<u64>,

        /// Pattern to synthesize.
        #[arg(short, long, default_value = "cloud")]
        pattern: PatternArg,

        /// Override the pattern's base noise.
        #[arg(short, long)]
        basis: Option<BasisArg>,

        /// Generate every pattern (ignores --pattern).
        #[arg(long)]
        all_patterns: bool,

        /// Number of fBm octaves (1-16).
        #[arg(long, default_value = "8")]
        octaves: u8,

        /// Frequency multiplier per octave (lacunarity).
        #[arg(long, default_value = "2.0")]
        lacunarity: f64,

        /// Amplitude decay per octave (persistence).
        #[arg(long, default_value = "0.5")]
        persistence: f64,

        /// Output directory for generated files.
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Base name for output files.
        #[arg(short, long, default_value = "texture")]
        name: String,

        /// Export format.
        #[arg(short, long, default_value = "png")]
        format: ExportFormat,
    },

    /// Display memory and file sizes for a texture size.
    Info {
        /// Texture width and height in pixels.
        #[arg(short, long, default_value = "512")]
        size: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PatternArg {
    /// fBm over value noise.
    Value,
    /// fBm over gradient noise.
    Cloud,
    /// Ring banding.
    Wood,
    /// Warped sinusoidal veins.
    Marble,
}

impl From<PatternArg> for PatternKind {
    fn from(arg: PatternArg) -> Self {
        match arg {
            PatternArg::Value => PatternKind::Value,
            PatternArg::Cloud => PatternKind::Cloud,
            PatternArg::Wood => PatternKind::Wood,
            PatternArg::Marble => PatternKind::Marble,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum BasisArg {
    /// Bilinear value noise.
    Value,
    /// Gradient (Perlin) noise.
    Gradient,
}

impl From<BasisArg> for NoiseBasis {
    fn from(arg: BasisArg) -> Self {
        match arg {
            BasisArg::Value => NoiseBasis::Value,
            BasisArg::Gradient => NoiseBasis::Gradient,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// 8-bit grayscale PNG.
    Png,
    /// Headerless 8-bit RAW bytes.
    Raw,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Raw => "raw",
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            size,
            seed,
            pattern,
            basis,
            all_patterns,
            octaves,
            lacunarity,
            persistence,
            output,
            name,
            format,
        } => {
            run_generate(
                size,
                seed,
                pattern,
                basis,
                all_patterns,
                octaves,
                lacunarity,
                persistence,
                output,
                name,
                format,
            );
        }
        Commands::Info { size } => {
            run_info(size);
        }
    }
}

fn run_generate(
    size: u32,
    seed: Option<u64>,
    pattern: PatternArg,
    basis: Option<BasisArg>,
    all_patterns: bool,
    octaves: u8,
    lacunarity: f64,
    persistence: f64,
    output: PathBuf,
    name: String,
    format: ExportFormat,
) {
    // Generate seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });

    println!("noisetex - Procedural Texture Generator");
    println!("=======================================");
    println!("Size: {}x{}", size, size);
    println!("Seed: {}", seed);
    println!("Output: {}", output.display());

    let config = TextureConfig {
        image_size: size,
        seed,
        octaves,
        lacunarity,
        persistence,
    };

    let mut synth = match TextureSynthesizer::new(config) {
        Ok(synth) => synth,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let kinds: Vec<PatternKind> = if all_patterns {
        PatternKind::all().to_vec()
    } else {
        vec![pattern.into()]
    };

    println!("\nSynthesizing textures...");
    let mut textures: Vec<(PatternKind, Texture)> = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let mut pattern = Pattern::new(kind);
        if let Some(basis) = basis {
            pattern = pattern.with_basis(basis.into());
        }

        let start = Instant::now();
        synth.make_texture(Some(pattern));
        let elapsed = start.elapsed();

        if let Some((min, max)) = synth.raw_range() {
            println!(
                "  {} ({} noise): raw range [{:.4}, {:.4}], {:.2?}",
                kind.name(),
                pattern.basis.name(),
                min,
                max,
                elapsed
            );
        }
        textures.push((kind, synth.texture().clone()));
    }

    println!("\nExporting textures...");
    match format {
        ExportFormat::Png => {
            let named: Vec<(&str, &Texture)> = textures
                .iter()
                .map(|(kind, texture)| (kind.name(), texture))
                .collect();
            if let Err(e) = export_textures_png(&named, &output, &name, &PngExportOptions::default()) {
                eprintln!("Error exporting PNG: {}", e);
                std::process::exit(1);
            }
        }
        ExportFormat::Raw => {
            if let Err(e) = std::fs::create_dir_all(&output) {
                eprintln!("Error creating output directory: {}", e);
                std::process::exit(1);
            }
            for (kind, texture) in &textures {
                let path = output.join(format!("{}_{}.raw", name, kind.name()));
                if let Err(e) = export_texture_raw(texture, &path) {
                    eprintln!("Error exporting RAW: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
    for (kind, _) in &textures {
        println!("  Exported {}_{}.{}", name, kind.name(), format.extension());
    }

    println!("\nDone!");
}

fn run_info(size: u32) {
    let pixels = (size as u64) * (size as u64);
    let bytes_raw_field = pixels * 8; // f64 intermediate
    let bytes_texture = pixels;
    let bytes_raw = expected_file_size(size);
    let fractal = FractalNoiseConfig::for_image_size(size.max(1));

    println!("noisetex - Texture Configuration Info");
    println!("=====================================");
    println!();
    println!("Size: {}x{}", size, size);
    println!("Pixels: {:>12}", pixels);
    println!();
    println!("Memory usage (during synthesis):");
    println!("  Raw field: {:>12} bytes ({:.2} MB)", bytes_raw_field, bytes_raw_field as f64 / 1024.0 / 1024.0);
    println!("  Texture:   {:>12} bytes ({:.2} MB)", bytes_texture, bytes_texture as f64 / 1024.0 / 1024.0);
    println!();
    println!("Export file sizes:");
    println!("  RAW (8-bit):  {:>12} bytes", bytes_raw);
    println!();
    println!("Noise:");
    println!("  Base frequency: 1/{} (first octave spans the texture)", size);
    println!("  fBm gain:       {:.4} ({} octaves)", fractal.amplitude_sum(), fractal.octaves);
}
