use std::io::Read;
use std::path::Path;

use anyhow::Context;
use tl_core::responses::RenderResponse;
use tl_markup::{RenderOptions, parser, render_markup_with};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RenderArgs;
use crate::context::AppContext;
use crate::output::output_markup;

/// Handle `tlx render`.
pub fn handle(args: &RenderArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let raw = read_input(args.file.as_deref())?;
    let options = RenderOptions {
        classes: args.classes || ctx.config.general.markup_classes,
    };
    let response = render_response(&raw, options);
    output_markup(&response, Some(&response.html), flags.format)
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read stdin")?;
            Ok(raw)
        }
    }
}

fn render_response(raw: &str, options: RenderOptions) -> RenderResponse {
    let blocks = parser::parse(raw)
        .iter()
        .filter(|block| !block.is_blank())
        .count();
    RenderResponse {
        html: render_markup_with(raw, options).into_string(),
        blocks,
    }
}
