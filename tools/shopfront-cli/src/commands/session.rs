//! Scripted shopping sessions.
//!
//! Every command in a session acts on one in-memory storefront, the way a
//! shopper's clicks act on one open page.

use std::io::{IsTerminal, Read};

use anyhow::{Context as _, Result};
use dialoguer::Input;
use shopfront_core::cart::QuantityUpdate;
use shopfront_core::ids::ProductId;
use shopfront_core::Storefront;

use super::SessionArgs;
use crate::context::Context;
use crate::render;
use crate::script::{parse_line, parse_script, ScriptCommand};

/// What a command asks the session to show.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing to print.
    Quiet,
    /// Print the filtered grid.
    List,
    /// Print this product's details.
    Product(ProductId),
    /// Print the cart.
    Cart,
    /// Print the shareable link.
    Link(String),
    /// Print a status line.
    Notice(String),
    /// Report a command that had no effect.
    Warning(String),
}

/// Run the session command.
pub fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront(args.url.as_deref())?;

    match args.script {
        Some(ref path) => {
            let path = ctx.resolve_path(path);
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read script: {}", path.display()))?;
            run_script(&source, &mut shop, ctx)
        }
        None if prompts_for_input(std::io::stdin().is_terminal(), ctx.output.is_json()) => {
            run_interactive(&mut shop, ctx)
        }
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read script from stdin")?;
            run_script(&source, &mut shop, ctx)
        }
    }
}

/// Prompt line by line only when stdin is a terminal; piped or
/// redirected input is read as a script. JSON output never prompts.
fn prompts_for_input(stdin_is_terminal: bool, json: bool) -> bool {
    stdin_is_terminal && !json
}

/// Parse the whole script first, then run it.
fn run_script(source: &str, shop: &mut Storefront, ctx: &Context) -> Result<()> {
    let script = parse_script(source)?;
    tracing::debug!(commands = script.len(), "running session script");

    for line in script {
        ctx.output.debug(&format!("line {}: {:?}", line.line, line.command));
        let effect = apply(shop, line.command);
        show(shop, &effect, ctx);
    }

    Ok(())
}

/// Read commands from the terminal until `quit` or end of input.
fn run_interactive(shop: &mut Storefront, ctx: &Context) -> Result<()> {
    ctx.output.info("Type commands (search, category, list, open, add, cart, link, ...). `quit` exits.");

    let mut line = 0;
    loop {
        line += 1;
        let prompt = format!("shop {}", render::cart_title(&shop.cart().summary()));
        let text: String = Input::new().with_prompt(prompt).allow_empty(true).interact_text()?;

        if matches!(text.trim(), "quit" | "exit") {
            break;
        }

        match parse_line(line, &text) {
            Ok(Some(command)) => {
                let effect = apply(shop, command);
                show(shop, &effect, ctx);
            }
            Ok(None) => {}
            Err(e) => ctx.output.warn(&e.to_string()),
        }
    }

    Ok(())
}

/// Apply one command to the storefront.
pub fn apply(shop: &mut Storefront, command: ScriptCommand) -> Effect {
    match command {
        ScriptCommand::Search(text) => {
            shop.set_search(text);
            Effect::Quiet
        }
        ScriptCommand::Category(category) => {
            shop.set_category(category);
            Effect::Quiet
        }
        ScriptCommand::List => Effect::List,
        ScriptCommand::Open(id) => {
            if !shop.catalog().contains(id.as_str()) {
                return Effect::Warning(format!("Product not found: {}", id));
            }
            shop.select(id.clone());
            Effect::Product(id)
        }
        ScriptCommand::Close => {
            shop.clear_selection();
            Effect::Quiet
        }
        ScriptCommand::Add { id, quantity } => {
            if !shop.catalog().contains(id.as_str()) {
                return Effect::Warning(format!("Product not found: {}", id));
            }
            match shop.add_by_id(id.as_str(), quantity) {
                Some(line) => Effect::Notice(format!("{} × {} in cart", line.product.name, line.quantity)),
                None => Effect::Warning(format!("Nothing added for {}", id)),
            }
        }
        ScriptCommand::AddOpen { quantity } => {
            let Some(name) = shop.selected_product().map(|product| product.name.clone()) else {
                return Effect::Warning("No product is open".to_string());
            };
            match shop.add_selected_to_cart(quantity) {
                Some(total) => Effect::Notice(format!("{} × {} in cart", name, total)),
                None => Effect::Warning(format!("Nothing added for {}", name)),
            }
        }
        ScriptCommand::Remove(id) => {
            if shop.remove(id.as_str()) {
                Effect::Notice(format!("Removed {}", id))
            } else {
                Effect::Warning(format!("{} is not in the cart", id))
            }
        }
        ScriptCommand::Qty { id, quantity } => quantity_effect(&id, shop.update_quantity(id.as_str(), quantity)),
        ScriptCommand::Inc(id) => quantity_effect(&id, shop.increment(id.as_str())),
        ScriptCommand::Dec(id) => quantity_effect(&id, shop.decrement(id.as_str())),
        ScriptCommand::Cart => Effect::Cart,
        ScriptCommand::Link => Effect::Link(shop.params().to_query_string()),
    }
}

fn quantity_effect(id: &ProductId, update: QuantityUpdate) -> Effect {
    match update {
        QuantityUpdate::Updated(quantity) => Effect::Notice(format!("{} quantity is now {}", id, quantity)),
        QuantityUpdate::Removed => Effect::Notice(format!("Removed {}", id)),
        QuantityUpdate::NotInCart => Effect::Warning(format!("{} is not in the cart", id)),
    }
}

fn show(shop: &mut Storefront, effect: &Effect, ctx: &Context) {
    match effect {
        Effect::Quiet => {}
        Effect::List => {
            let results = shop.filtered_products();
            render::print_listing(&ctx.output, &results, &ctx.config.display);
        }
        Effect::Product(id) => {
            if let Some(product) = shop.catalog().find_by_id(id.as_str()) {
                render::print_product(&ctx.output, product);
            }
        }
        Effect::Cart => render::print_cart(&ctx.output, shop.cart()),
        Effect::Link(query) => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "link": query }));
            } else if query.is_empty() {
                ctx.output.line("/");
            } else {
                ctx.output.line(&format!("/?{}", query));
            }
        }
        Effect::Notice(message) => ctx.output.success(message),
        Effect::Warning(message) => ctx.output.warn(message),
    }
}
