//! Implementation of the `bob generate-rules` command.

use crate::cli::GenerateRulesArgs;
use crate::context::ScaffoldContext;
use crate::error::Result;
use crate::templates::context::{layered, parse_assignments};
use crate::templates::{generate_rules, render_configure_rules};
use tracing::info;

/// Characters of rendered rules shown by `--dry-run`.
pub const PREVIEW_CHARS: usize = 500;

/// First `limit` characters of `content`, with `...` when truncated.
pub fn preview(content: &str, limit: usize) -> String {
    match content.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

pub fn cmd_generate_rules(args: GenerateRulesArgs) -> Result<()> {
    let ctx = ScaffoldContext::resolve(&args.target)?;
    info!(
        agent = %ctx.agent_type,
        target = %ctx.target.display(),
        dry_run = ctx.dry_run,
        "generate-rules command invoked"
    );

    // `--var` wins over config variables.
    let extra = layered([ctx.config_variables(), parse_assignments(&args.vars)?]);

    println!("Generating rules for {}...", ctx.agent_type);

    if ctx.dry_run {
        let content = render_configure_rules(&ctx.renderer, &ctx.agent_type, &ctx.target, extra)?;
        let adapter = ctx.adapter()?;

        println!();
        println!("Generated Rules Preview:");
        println!("{}", "=".repeat(50));
        println!("{}", preview(&content, PREVIEW_CHARS));
        println!("{}", "=".repeat(50));
        println!();
        println!("Would write: {}", adapter.rules_path().display());
        println!("Declared output files:");
        for path in adapter.output_paths() {
            println!("  - {}", path.display());
        }
        return Ok(());
    }

    let paths = generate_rules(&ctx.renderer, &ctx.agent_type, &ctx.target, extra)?;
    let written = ctx.adapter()?.rules_path();

    println!("Rules generated successfully!");
    println!("Wrote: {}", written.display());
    println!("Output files:");
    for path in paths {
        println!("  - {}", path.display());
    }

    info!("generate-rules command completed");
    Ok(())
}
