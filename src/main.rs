use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use qrlite::{
    decode_text, AxisAlignedSampler, ECLevel, QRBuilder, QRReader, RenderOptions, Version,
};

#[derive(Parser)]
#[command(name = "qrlite", version, about = "Generate and read simplified QR symbols")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text into a symbol.
    Encode {
        /// Text to encode, one byte per character.
        text: String,
        /// Capacity level used for version selection.
        #[arg(long, value_enum, default_value_t = Level::M)]
        level: Level,
        /// Fix the version instead of picking the smallest that fits.
        #[arg(long)]
        version: Option<usize>,
        /// Write a PNG here instead of printing to the terminal.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Pixels per module.
        #[arg(long, default_value_t = 10)]
        module_size: u32,
        /// Quiet zone width in modules.
        #[arg(long, default_value_t = 4)]
        margin: u32,
    },
    /// Read an upright rendered symbol back to text.
    Decode {
        /// Path to the image.
        image: PathBuf,
        /// Fixed luma threshold, Otsu's level when omitted.
        #[arg(long)]
        threshold: Option<u8>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Level {
    L,
    M,
    Q,
    H,
}

impl From<Level> for ECLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::L => ECLevel::L,
            Level::M => ECLevel::M,
            Level::Q => ECLevel::Q,
            Level::H => ECLevel::H,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Encode { text, level, version, output, module_size, margin } => {
            let mut builder = QRBuilder::from_text(&text).context("encode text")?;
            builder.ec_level(level.into());
            if let Some(v) = version {
                builder.version(Version::from_number(v).context("select version")?);
            }
            let qr = builder.build().context("build symbol")?;
            eprintln!("{}", qr.metadata());

            match output {
                Some(path) => {
                    let opts = RenderOptions { module_size, margin, ..Default::default() };
                    qr.render_with(&opts)
                        .save(&path)
                        .with_context(|| format!("write image {}", path.display()))?;
                }
                None => println!("{}", qr.to_str(1)),
            }
        }
        Command::Decode { image, threshold } => {
            let img = image::open(&image)
                .with_context(|| format!("open image {}", image.display()))?;
            let sampler = match threshold {
                Some(t) => AxisAlignedSampler::with_threshold(t),
                None => AxisAlignedSampler::new(),
            };
            let data = QRReader::read_image(&img, &sampler).context("read symbol")?;
            println!("{}", decode_text(&data));
        }
    }
    Ok(())
}
