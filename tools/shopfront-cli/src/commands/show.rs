//! Product detail view.

use anyhow::{bail, Result};

use super::ShowArgs;
use crate::context::Context;
use crate::render;

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let Some(product) = catalog.find_by_id(&args.id) else {
        bail!("Product not found: {} (in {})", args.id, ctx.catalog_source);
    };

    render::print_product(&ctx.output, product);
    Ok(())
}
