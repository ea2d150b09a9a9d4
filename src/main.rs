use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brandkit::brand::{BrandAction, BrandKit};
use brandkit::cli::Args;
use brandkit::pipeline::extract::extract_colors;
use brandkit::pipeline::load::load_and_prepare;
use brandkit::tui::{self, TuiApp};

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let pixels = load_and_prepare(&args.image, args.sample_size())?;
    let extracted = extract_colors(&pixels, &args.extract_options());
    tracing::info!(
        image = %args.image.display(),
        pixels = pixels.len(),
        colors = extracted.len(),
        method = ?args.method,
        "extracted palette"
    );

    let mut kit = BrandKit::new(args.name.clone());
    kit.apply(BrandAction::SetLogo(Some(args.image.clone())))?;
    if extracted.is_empty() {
        tracing::warn!(
            alpha_threshold = args.alpha_threshold,
            "no opaque pixels to sample, keeping the default palette"
        );
    }
    kit.apply(BrandAction::from_extracted(&extracted))?;

    if args.preview {
        eprint!("{}", brandkit::preview::render(&extracted));
    }

    if args.tui {
        match tui::run(TuiApp::new(kit, extracted, args.image.clone()))? {
            Some(edited) => kit = edited,
            None => {
                tracing::info!("editing cancelled, nothing exported");
                return Ok(());
            }
        }
    }

    let backend = args.format.backend();
    match &args.output {
        Some(path) => {
            if !backend.matches_extension(path) {
                tracing::warn!(
                    path = %path.display(),
                    format = backend.name(),
                    "output file does not end in .{}",
                    backend.extension()
                );
            }
            backend.write_to(&kit, path)?;
            tracing::info!(path = %path.display(), format = backend.name(), "palette written");
        }
        None => print!("{}", backend.serialize(&kit)),
    }

    Ok(())
}
