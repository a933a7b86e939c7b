//! Line parsing for the text shell.

use domain::{AddProduct, CreateOrder, DeleteProduct, LookupOrder, UpdateStock};

use crate::error::ShellError;

pub const HELP: &str = "\
Commands:
  add <name> <quantity>      add a product
  update <name> <quantity>   set the stock of every product with that name
  delete <name>              remove every product with that name
  list                       show all products
  order <name> <quantity>    place an order and take it out of stock
  check <order number>       look up an order
  orders                     show all orders
  help                       show this text
  quit                       leave";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add(AddProduct),
    Update(UpdateStock),
    Delete(DeleteProduct),
    List,
    Order(CreateOrder),
    Check(LookupOrder),
    Orders,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parses a line. Returns None for a blank line.
    ///
    /// Product names may contain spaces; the quantity is always the last word.
    pub fn parse(line: &str) -> Result<Option<Self>, ShellError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(verb, rest)| (verb, rest.trim()))
            .unwrap_or((line, ""));

        let command = match verb.to_ascii_lowercase().as_str() {
            "add" => {
                let (name, quantity) = split_quantity(rest);
                ShellCommand::Add(AddProduct::parse(name, quantity)?)
            }
            "update" => {
                let (name, quantity) = split_quantity(rest);
                ShellCommand::Update(UpdateStock::parse(name, quantity)?)
            }
            "delete" => ShellCommand::Delete(DeleteProduct::parse(rest)?),
            "list" => ShellCommand::List,
            "order" => {
                let (name, quantity) = split_quantity(rest);
                ShellCommand::Order(CreateOrder::parse(name, quantity)?)
            }
            "check" => ShellCommand::Check(LookupOrder::parse(rest)?),
            "orders" => ShellCommand::Orders,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            _ => return Err(ShellError::UnknownCommand(verb.to_string())),
        };
        Ok(Some(command))
    }
}

// A single word is taken as the name, leaving the quantity empty.
fn split_quantity(rest: &str) -> (&str, &str) {
    rest.rsplit_once(char::is_whitespace)
        .map(|(name, quantity)| (name.trim(), quantity))
        .unwrap_or((rest, ""))
}
