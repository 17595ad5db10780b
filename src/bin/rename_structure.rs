//! Rename a structure in a `<hex handle> <name>` listing.
//!
//! Usage: rename_structure <listing> <handle> <new name> [--write]
//!        [--label <word>] [--first-suffix <n>]
//!
//! Prints the messages the user would see. With `--write` the listing file is
//! updated in place. Set `RUST_LOG=debug` to trace the resolver.

use anyhow::{bail, Context};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use structure_rename::{
    Handle, RenameOptions, RenameRequest, RenameStructureCommand, StructureDocument,
};

struct Args {
    listing: PathBuf,
    target: Handle,
    name: String,
    write: bool,
    options: RenameOptions,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut positional = Vec::new();
    let mut write = false;
    let mut options = RenameOptions::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--write" => write = true,
            "--label" => {
                let label = args.next().context("--label needs a value")?;
                options = options.with_entity_label(label);
            }
            "--first-suffix" => {
                let n = args.next().context("--first-suffix needs a value")?;
                let n = n.parse::<u32>().with_context(|| format!("bad suffix '{}'", n))?;
                options = options.with_first_suffix(n);
            }
            _ => positional.push(arg),
        }
    }

    if positional.len() != 3 {
        bail!("Usage: rename_structure <listing> <handle> <new name> [--write] [--label <word>] [--first-suffix <n>]");
    }
    let name = positional.pop().unwrap_or_default();
    let target = positional.pop().unwrap_or_default();
    let listing = PathBuf::from(positional.pop().unwrap_or_default());
    let target = target
        .parse::<Handle>()
        .with_context(|| format!("bad handle '{}'", target))?;

    Ok(Args {
        listing,
        target,
        name,
        write,
        options,
    })
}

/// Run one rename and collect the messages the user should see.
///
/// A failure is already described by its Error notification, so it is
/// returned as a flag rather than as an error to print again.
fn rename(
    doc: &mut StructureDocument,
    command: &RenameStructureCommand,
    request: &RenameRequest,
) -> (Vec<String>, bool) {
    let succeeded = command.execute(doc, request).is_ok();
    let messages = doc
        .notifications_mut()
        .drain()
        .into_iter()
        .map(|n| n.message)
        .collect();
    (messages, succeeded)
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = parse_args()?;

    let text = fs::read_to_string(&args.listing)
        .with_context(|| format!("reading {}", args.listing.display()))?;
    let mut doc = StructureDocument::from_listing(&text)?;

    let command = RenameStructureCommand::with_options(args.options);
    let request = RenameRequest::new(args.target, args.name);
    let (messages, succeeded) = rename(&mut doc, &command, &request);

    for message in &messages {
        println!("{}", message);
    }
    if !succeeded {
        return Ok(ExitCode::FAILURE);
    }

    if args.write {
        fs::write(&args.listing, doc.to_listing())
            .with_context(|| format!("writing {}", args.listing.display()))?;
    } else {
        print!("{}", doc.to_listing());
    }
    Ok(ExitCode::SUCCESS)
}
