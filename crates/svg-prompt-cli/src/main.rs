//! Build SVG generation prompts from the command line.
//!
//! The prompt is printed to stdout; logs and errors go to stderr.
//!
//! # Examples
//!
//! ```sh
//! # Single graphic from flags
//! svg-prompt single --prompt "a paper airplane" --fill-style outline \
//!   --border-style circle --color "#1D3557" --color "#E63946"
//!
//! # Icon set from flags, rejecting unrecognized options
//! svg-prompt icons --reference-style "thin outlined icons" \
//!   --icon "home=a house shape" --icon "search=a magnifying glass" --strict
//!
//! # Request kept in a JSON file
//! svg-prompt icons --request icons.json
//!
//! # Schema for request files
//! svg-prompt schema single
//! ```

mod cli;
mod input;
mod logging;

use std::path::Path;
use std::process;

use clap::Parser;
use cli::{Cli, Command, IconsArgs, SchemaKind, SingleArgs};
use svg_prompt::schema::{icon_set_schema, single_graphic_schema};
use svg_prompt::{build_icon_set_prompt, build_single_graphic_prompt};
use tracing::info;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(&cli.command) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn run(command: &Command) -> Result<String, String> {
    match command {
        Command::Single(args) => single_prompt(args),
        Command::Icons(args) => icon_set_prompt(args),
        Command::Schema { kind } => schema_json(*kind),
    }
}

fn single_prompt(args: &SingleArgs) -> Result<String, String> {
    let request = match &args.common.request {
        Some(path) => input::load_single_request(Path::new(path))?,
        None => args.to_request(),
    };
    if args.common.strict {
        request.validate().map_err(|e| e.to_string())?;
    }
    info!(prompt_chars = request.prompt.len(), "building single graphic prompt");
    Ok(build_single_graphic_prompt(&request))
}

fn icon_set_prompt(args: &IconsArgs) -> Result<String, String> {
    let request = match &args.common.request {
        Some(path) => input::load_icon_set_request(Path::new(path))?,
        None => args.to_request(),
    };
    if args.common.strict {
        request.validate().map_err(|e| e.to_string())?;
    }
    info!(icons = request.icon_concepts.len(), "building icon set prompt");
    Ok(build_icon_set_prompt(&request))
}

fn schema_json(kind: SchemaKind) -> Result<String, String> {
    let schema = match kind {
        SchemaKind::Single => single_graphic_schema(),
        SchemaKind::Icons => icon_set_schema(),
    }
    .map_err(|e| format!("failed to build schema: {e}"))?;
    serde_json::to_string_pretty(&schema).map_err(|e| format!("failed to render schema: {e}"))
}
