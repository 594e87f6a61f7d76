//! Session script parsing.
//!
//! A script is one command per line. Blank lines and lines starting with
//! `#` are skipped.
//!
//! ```text
//! category Kitchenware
//! search ceramic
//! add p2 2
//! qty p2 5
//! cart
//! ```

use shopfront_core::catalog::CategoryFilter;
use shopfront_core::ids::ProductId;
use thiserror::Error;

/// One storefront action from a session script.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    /// Replace the search text (empty clears it).
    Search(String),
    /// Switch the category.
    Category(CategoryFilter),
    /// Print the filtered grid.
    List,
    /// Open a product's detail view.
    Open(ProductId),
    /// Close the detail view.
    Close,
    /// Add a product to the cart.
    Add { id: ProductId, quantity: u32 },
    /// Add the open product to the cart and close it.
    AddOpen { quantity: u32 },
    /// Remove a cart line.
    Remove(ProductId),
    /// Set a line's quantity.
    Qty { id: ProductId, quantity: i64 },
    /// Raise a line's quantity by one.
    Inc(ProductId),
    /// Lower a line's quantity by one.
    Dec(ProductId),
    /// Print the cart.
    Cart,
    /// Print the shareable link.
    Link,
}

/// Script parsing errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' needs {expected}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },

    #[error("line {line}: invalid quantity '{value}'")]
    InvalidQuantity { line: usize, value: String },

    #[error("line {line}: unexpected argument '{value}'")]
    UnexpectedArgument { line: usize, value: String },
}

/// A parsed command with its 1-based source line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: ScriptCommand,
}

/// Parse a whole script. Stops at the first bad line.
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut commands = Vec::new();
    for (index, text) in source.lines().enumerate() {
        let line = index + 1;
        if let Some(command) = parse_line(line, text)? {
            commands.push(ScriptLine { line, command });
        }
    }
    Ok(commands)
}

/// Parse one line. Blank lines and comments yield `None`.
pub fn parse_line(line: usize, text: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let (name, rest) = match text.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (text, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let command = match name {
        "search" => ScriptCommand::Search(rest.to_string()),
        "category" => {
            if rest.is_empty() {
                return Err(missing(line, "category", "a category name"));
            }
            ScriptCommand::Category(CategoryFilter::parse(rest))
        }
        "list" => no_args(line, &args, ScriptCommand::List)?,
        "open" => ScriptCommand::Open(single_id(line, "open", &args)?),
        "close" => no_args(line, &args, ScriptCommand::Close)?,
        "add" => match args.as_slice() {
            [] => return Err(missing(line, "add", "a product id")),
            [id] => ScriptCommand::Add {
                id: ProductId::new(*id),
                quantity: 1,
            },
            [id, quantity] => ScriptCommand::Add {
                id: ProductId::new(*id),
                quantity: parse_quantity(line, quantity)?,
            },
            [_, _, extra, ..] => return Err(unexpected(line, extra)),
        },
        "add-open" => match args.as_slice() {
            [] => ScriptCommand::AddOpen { quantity: 1 },
            [quantity] => ScriptCommand::AddOpen {
                quantity: parse_quantity(line, quantity)?,
            },
            [_, extra, ..] => return Err(unexpected(line, extra)),
        },
        "remove" => ScriptCommand::Remove(single_id(line, "remove", &args)?),
        "qty" => match args.as_slice() {
            [id, quantity] => ScriptCommand::Qty {
                id: ProductId::new(*id),
                quantity: quantity.parse().map_err(|_| ScriptError::InvalidQuantity {
                    line,
                    value: quantity.to_string(),
                })?,
            },
            [_, _, extra, ..] => return Err(unexpected(line, extra)),
            _ => return Err(missing(line, "qty", "a product id and a quantity")),
        },
        "inc" => ScriptCommand::Inc(single_id(line, "inc", &args)?),
        "dec" => ScriptCommand::Dec(single_id(line, "dec", &args)?),
        "cart" => no_args(line, &args, ScriptCommand::Cart)?,
        "link" => no_args(line, &args, ScriptCommand::Link)?,
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            })
        }
    };

    Ok(Some(command))
}

fn single_id(line: usize, command: &'static str, args: &[&str]) -> Result<ProductId, ScriptError> {
    match args {
        [id] => Ok(ProductId::new(*id)),
        [] => Err(missing(line, command, "a product id")),
        [_, extra, ..] => Err(unexpected(line, extra)),
    }
}

fn no_args(line: usize, args: &[&str], command: ScriptCommand) -> Result<ScriptCommand, ScriptError> {
    match args.first() {
        Some(extra) => Err(unexpected(line, extra)),
        None => Ok(command),
    }
}

fn parse_quantity(line: usize, value: &str) -> Result<u32, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidQuantity {
        line,
        value: value.to_string(),
    })
}

fn missing(line: usize, command: &'static str, expected: &'static str) -> ScriptError {
    ScriptError::MissingArgument {
        line,
        command,
        expected,
    }
}

fn unexpected(line: usize, value: &str) -> ScriptError {
    ScriptError::UnexpectedArgument {
        line,
        value: value.to_string(),
    }
}
