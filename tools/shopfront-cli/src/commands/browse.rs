//! Product grid.

use anyhow::Result;
use shopfront_core::catalog::CategoryFilter;

use super::BrowseArgs;
use crate::context::Context;
use crate::render;

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront(args.url.as_deref())?;

    if let Some(ref category) = args.category {
        shop.set_category(CategoryFilter::parse(category));
    }
    if let Some(search) = args.search {
        shop.set_search(search);
    }

    if !ctx.output.is_json() {
        let bar = render::category_names(shop.catalog());
        ctx.output.line(&render::category_bar(&bar, &shop.category()));
        ctx.output.line("");
    }

    let results = shop.filtered_products();
    render::print_listing(&ctx.output, &results, &ctx.config.display);

    // A shared link may also carry an open product.
    if let Some(product) = shop.selected_product() {
        render::print_product(&ctx.output, product);
    } else if let Some(id) = shop.selection().id() {
        ctx.output.warn(&format!("Linked product {} is not in the catalog", id));
    }

    Ok(())
}
