mod cli;
mod image_cmd;
mod page_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Image {
            ref file,
            ref format,
            ref lang,
            psm,
        } => image_cmd::run(file, format, lang, psm),
        cli::Commands::Page {
            ref file,
            ref format,
        } => page_cmd::run(file, format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
