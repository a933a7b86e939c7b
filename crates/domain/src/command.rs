//! Commands carrying user input into the services.
//!
//! Each command can be built from typed values with `new` or from raw form
//! text with `parse`. Services call [`Command::validate`] again before
//! touching the store, so a command built with `new` is checked as well.

use crate::error::ValidationError;

/// Input fields named in validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ProductName,
    StockQuantity,
    OrderQuantity,
    OrderNumber,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Field::ProductName => "Product name",
            Field::StockQuantity => "Stock quantity",
            Field::OrderQuantity => "Order quantity",
            Field::OrderNumber => "Order number",
        };
        f.write_str(label)
    }
}

/// A request that can check its own input.
pub trait Command: Send + Sync {
    /// Rejects the command if any field is malformed.
    fn validate(&self) -> Result<(), ValidationError>;
}

fn require_text(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

fn parse_number(field: Field, raw: &str) -> Result<i64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    raw.parse().map_err(|_| ValidationError::NotANumber {
        field,
        value: raw.to_string(),
    })
}

fn require_stock(value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::OutOfRange {
            field: Field::StockQuantity,
            value,
            rule: "must not be negative",
        });
    }
    Ok(())
}

fn require_order_quantity(value: i64) -> Result<(), ValidationError> {
    if value <= 0 {
        return Err(ValidationError::OutOfRange {
            field: Field::OrderQuantity,
            value,
            rule: "must be greater than 0",
        });
    }
    Ok(())
}

/// Command to add a product row.
///
/// Stock entered by hand must be zero or more; only orders take it below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddProduct {
    pub name: String,
    pub stock_quantity: i64,
}

impl AddProduct {
    pub fn new(name: impl Into<String>, stock_quantity: i64) -> Self {
        Self {
            name: name.into(),
            stock_quantity,
        }
    }

    /// Builds the command from raw form text.
    pub fn parse(name: &str, stock_quantity: &str) -> Result<Self, ValidationError> {
        require_text(Field::ProductName, name)?;
        let cmd = Self::new(
            name.trim(),
            parse_number(Field::StockQuantity, stock_quantity)?,
        );
        cmd.validate()?;
        Ok(cmd)
    }
}

impl Command for AddProduct {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text(Field::ProductName, &self.name)?;
        require_stock(self.stock_quantity)
    }
}

/// Command to overwrite the stock of every product with a name.
///
/// A negative value is rejected even though orders may leave stock negative:
/// a manual count records goods on hand, and that cannot be below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStock {
    pub name: String,
    pub stock_quantity: i64,
}

impl UpdateStock {
    pub fn new(name: impl Into<String>, stock_quantity: i64) -> Self {
        Self {
            name: name.into(),
            stock_quantity,
        }
    }

    /// Builds the command from raw form text.
    pub fn parse(name: &str, stock_quantity: &str) -> Result<Self, ValidationError> {
        require_text(Field::ProductName, name)?;
        let cmd = Self::new(
            name.trim(),
            parse_number(Field::StockQuantity, stock_quantity)?,
        );
        cmd.validate()?;
        Ok(cmd)
    }
}

impl Command for UpdateStock {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text(Field::ProductName, &self.name)?;
        require_stock(self.stock_quantity)
    }
}

/// Command to remove every product with a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteProduct {
    pub name: String,
}

impl DeleteProduct {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Builds the command from raw form text.
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        let cmd = Self::new(name.trim());
        cmd.validate()?;
        Ok(cmd)
    }
}

impl Command for DeleteProduct {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text(Field::ProductName, &self.name)
    }
}

/// Command to place an order against a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrder {
    pub product_name: String,
    pub quantity: i64,
}

impl CreateOrder {
    pub fn new(product_name: impl Into<String>, quantity: i64) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
        }
    }

    /// Builds the command from raw form text.
    pub fn parse(product_name: &str, quantity: &str) -> Result<Self, ValidationError> {
        require_text(Field::ProductName, product_name)?;
        let cmd = Self::new(
            product_name.trim(),
            parse_number(Field::OrderQuantity, quantity)?,
        );
        cmd.validate()?;
        Ok(cmd)
    }
}

impl Command for CreateOrder {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text(Field::ProductName, &self.product_name)?;
        require_order_quantity(self.quantity)
    }
}

/// Command to find an order by its code.
///
/// `parse` trims and upper-cases the input, so `ab12` finds `AB12`. Generated
/// codes only use upper-case letters and digits, so no stored code is lost.
/// The code is kept as a string rather than as an `OrderCode`: a string that
/// can never be a code is a miss, not a validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOrder {
    pub order_number: String,
}

impl LookupOrder {
    pub fn new(order_number: impl Into<String>) -> Self {
        Self {
            order_number: order_number.into(),
        }
    }

    /// Builds the command from raw form text.
    pub fn parse(order_number: &str) -> Result<Self, ValidationError> {
        let cmd = Self::new(order_number.trim().to_ascii_uppercase());
        cmd.validate()?;
        Ok(cmd)
    }
}

impl Command for LookupOrder {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text(Field::OrderNumber, &self.order_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_product_parse_trims_name_and_quantity() {
        let cmd = AddProduct::parse("  Widget ", " 100 ").unwrap();
        assert_eq!(cmd, AddProduct::new("Widget", 100));
    }

    #[test]
    fn add_product_accepts_zero_stock() {
        assert!(AddProduct::parse("Widget", "0").is_ok());
    }

    #[test]
    fn add_product_rejects_empty_name() {
        let err = AddProduct::parse("   ", "5").unwrap_err();
        assert_eq!(
            err,
            ValidationError::EmptyField {
                field: Field::ProductName
            }
        );
    }

    #[test]
    fn add_product_rejects_non_numeric_quantity() {
        let err = AddProduct::parse("Widget", "lots").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotANumber {
                field: Field::StockQuantity,
                value: "lots".to_string()
            }
        );
    }

    #[test]
    fn add_product_rejects_fractional_quantity() {
        assert!(matches!(
            AddProduct::parse("Widget", "2.5"),
            Err(ValidationError::NotANumber { .. })
        ));
    }

    #[test]
    fn stock_quantity_must_not_be_negative() {
        let err = UpdateStock::parse("Widget", "-1").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: Field::StockQuantity,
                value: -1,
                ..
            }
        ));
    }

    #[test]
    fn empty_quantity_reports_empty_field() {
        let err = UpdateStock::parse("Widget", "  ").unwrap_err();
        assert_eq!(
            err,
            ValidationError::EmptyField {
                field: Field::StockQuantity
            }
        );
    }

    #[test]
    fn order_quantity_must_be_positive() {
        for raw in ["0", "-3"] {
            let err = CreateOrder::parse("Widget", raw).unwrap_err();
            assert!(matches!(
                err,
                ValidationError::OutOfRange {
                    field: Field::OrderQuantity,
                    ..
                }
            ));
        }
        assert_eq!(
            CreateOrder::parse("Widget", "+4").unwrap(),
            CreateOrder::new("Widget", 4)
        );
    }

    #[test]
    fn typed_commands_validate_too() {
        assert!(CreateOrder::new("", 1).validate().is_err());
        assert!(AddProduct::new("Widget", -5).validate().is_err());
        assert!(DeleteProduct::new(" ").validate().is_err());
        assert!(DeleteProduct::new("Widget").validate().is_ok());
    }

    #[test]
    fn lookup_order_normalizes_case() {
        let cmd = LookupOrder::parse(" ab1z ").unwrap();
        assert_eq!(cmd.order_number, "AB1Z");
    }

    #[test]
    fn lookup_order_rejects_empty_code() {
        assert_eq!(
            LookupOrder::parse("").unwrap_err(),
            ValidationError::EmptyField {
                field: Field::OrderNumber
            }
        );
    }
}
