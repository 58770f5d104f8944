// SPDX-License-Identifier: MPL-2.0
use gallery_lens::config::manifest;
use gallery_lens::error::{Error, Result};
use gallery_lens::gallery::{ElementHandle, GalleryInstance};
use gallery_lens::layout::{self, FileMeasurer, LayoutStyle};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_WIDTH: f32 = 1200.0;
const DEFAULT_LOG_LEVEL: &str = "warn";

const HELP: &str = "\
gallery_lens: lay out a gallery manifest and print the placements as JSON

USAGE:
  gallery_lens <MANIFEST> [--width <PX>] [--style <STYLE>]

OPTIONS:
  --width <PX>      Container width in pixels [default: 1200]
  --style <STYLE>   Override the manifest style: masonry, grid, horizontal, mosaic
  -h, --help        Print this help
";

struct Args {
    manifest: PathBuf,
    width: f32,
    style: Option<LayoutStyle>,
}

fn parse_args() -> Result<Option<Args>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let width = args
        .opt_value_from_str("--width")
        .map_err(|err| Error::InvalidArgument(err.to_string()))?
        .unwrap_or(DEFAULT_WIDTH);
    let style = args
        .opt_value_from_str::<_, String>("--style")
        .map_err(|err| Error::InvalidArgument(err.to_string()))?
        .map(|name| LayoutStyle::from_name(&name));
    let manifest = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| Error::InvalidArgument("missing manifest path".to_string()))?;

    Ok(Some(Args {
        manifest,
        width,
        style,
    }))
}

fn run(args: &Args) -> Result<String> {
    let manifest = manifest::load_from_path(&args.manifest)?;
    let gallery = GalleryInstance::new(&manifest.to_element(ElementHandle::new(0)));
    let root = args.manifest.parent().unwrap_or_else(|| Path::new("."));
    let mut measurer = FileMeasurer::new(root);

    let style = args.style.unwrap_or(gallery.config().style);
    let result = layout::layout_with_style(
        style,
        gallery.config(),
        gallery.items(),
        args.width,
        &mut measurer,
    );
    Ok(serde_json::to_string_pretty(&result)?)
}

fn main() -> ExitCode {
    // Falls back to `warn` when RUST_LOG is unset or invalid.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(manifest = %args.manifest.display(), "{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
