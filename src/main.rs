use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;

use dockviz::notifier::{init_logging, VerbosityLevel};
use dockviz::{images, FileSource, ImagesOptions, RenderMode, Source, StdinSource};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Verbose mode (-v for info, -vv for debug, -vvv for trace)"
    )]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Visualize docker images.
    Images {
        #[arg(short, long, help = "Show image information as Graphviz dot")]
        dot: bool,

        #[arg(short, long, help = "Show image information as tree")]
        tree: bool,

        #[arg(short, long = "no-trunc", help = "Don't truncate the image IDs")]
        no_trunc: bool,

        #[arg(
            short,
            long,
            help = "Read the image list from a file instead of stdin"
        )]
        input: Option<PathBuf>,

        #[arg(help = "Image id, short id, or tag to root the tree at (tree mode only)")]
        start: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(VerbosityLevel::from(cli.verbose));

    match cli.command {
        Command::Images {
            dot,
            tree,
            no_trunc,
            input,
            start,
        } => {
            let mode = RenderMode::from_flags(dot, tree)?;
            let options = ImagesOptions {
                mode,
                no_trunc,
                start,
            };
            debug!("Options: {:?}", options);

            let source: Box<dyn Source> = match input {
                Some(path) => Box::new(FileSource::new(path)),
                None => Box::new(StdinSource::new()),
            };

            let output = images::run(source.as_ref(), &options)?;
            info!("Rendered {} lines", output.lines().count());

            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write output")?;
        }
    }

    Ok(())
}
