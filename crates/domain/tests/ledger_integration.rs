//! Integration tests for the catalog and ledger services.
//!
//! The same scenarios run against the in-memory store and an in-memory
//! SQLite database.

use std::sync::Mutex;

use domain::{
    AddProduct, CodeGenerator, CreateOrder, DeleteProduct, DomainError, LookupError, LookupOrder,
    OrderCode, OrderLedger, ProductCatalog, UpdateStock, ValidationError,
};
use stock_store::{InMemoryStockStore, SqliteStockStore, StockStore};

/// Replays a fixed list of codes, repeating the last one forever.
struct ScriptedCodes {
    codes: Mutex<Vec<OrderCode>>,
}

impl ScriptedCodes {
    fn new(codes: &[&str]) -> Self {
        let mut codes: Vec<_> = codes.iter().map(|c| OrderCode::parse(c).unwrap()).collect();
        codes.reverse();
        Self {
            codes: Mutex::new(codes),
        }
    }
}

impl CodeGenerator for ScriptedCodes {
    fn next_code(&self) -> OrderCode {
        let mut codes = self.codes.lock().unwrap();
        if codes.len() > 1 {
            codes.pop().unwrap()
        } else {
            codes[0]
        }
    }
}

fn pairs(products: Vec<domain::Product>) -> Vec<(String, i64)> {
    products
        .into_iter()
        .map(|p| (p.name, p.stock_quantity))
        .collect()
}

async fn widget_scenario<S: StockStore + Clone>(store: S) {
    let catalog = ProductCatalog::new(store.clone());
    let ledger = OrderLedger::new(store);

    catalog
        .add_product(AddProduct::new("Widget", 100))
        .await
        .unwrap();

    let placed = ledger
        .create_order(CreateOrder::new("Widget", 30))
        .await
        .unwrap();
    let code = placed.order.order_number;
    assert_eq!(code.as_str().len(), 4);
    assert!(
        code.as_str()
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    );
    assert_eq!(placed.remaining_stock, 70);

    let products = catalog.list_products().await.unwrap();
    assert_eq!(pairs(products), vec![("Widget".to_string(), 70)]);

    let found = ledger
        .get_order_by_number(LookupOrder::new(code.as_str()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.product_name, "Widget");
    assert_eq!(found.quantity, 30);
}

async fn missing_product_scenario<S: StockStore + Clone>(store: S) {
    let ledger = OrderLedger::new(store.clone());

    let result = ledger.create_order(CreateOrder::new("Ghost", 2)).await;

    assert!(matches!(
        result,
        Err(DomainError::Lookup(LookupError::ProductNotFound { ref name })) if name == "Ghost"
    ));
    assert!(store.list_orders().await.unwrap().is_empty());
}

mod in_memory {
    use super::*;

    #[tokio::test]
    async fn widget_order_round_trip() {
        widget_scenario(InMemoryStockStore::new()).await;
    }

    #[tokio::test]
    async fn order_for_missing_product_is_a_lookup_error() {
        missing_product_scenario(InMemoryStockStore::new()).await;
    }
}

mod sqlite {
    use super::*;

    #[tokio::test]
    async fn widget_order_round_trip() {
        widget_scenario(SqliteStockStore::in_memory().await.unwrap()).await;
    }

    #[tokio::test]
    async fn order_for_missing_product_is_a_lookup_error() {
        missing_product_scenario(SqliteStockStore::in_memory().await.unwrap()).await;
    }
}

mod catalog_properties {
    use super::*;

    #[tokio::test]
    async fn update_then_delete() {
        let store = SqliteStockStore::in_memory().await.unwrap();
        let catalog = ProductCatalog::new(store);

        catalog.add_product(AddProduct::new("Widget", 5)).await.unwrap();
        catalog.add_product(AddProduct::new("Gadget", 9)).await.unwrap();

        catalog
            .update_stock(UpdateStock::new("Widget", 42))
            .await
            .unwrap();
        assert_eq!(
            pairs(catalog.list_products().await.unwrap()),
            vec![("Widget".to_string(), 42), ("Gadget".to_string(), 9)]
        );

        catalog
            .delete_product(DeleteProduct::new("Widget"))
            .await
            .unwrap();
        assert_eq!(
            pairs(catalog.list_products().await.unwrap()),
            vec![("Gadget".to_string(), 9)]
        );
    }

    #[tokio::test]
    async fn parsed_input_flows_through() {
        let catalog = ProductCatalog::new(InMemoryStockStore::new());

        let product = catalog
            .add_product(AddProduct::parse(" Widget ", "12").unwrap())
            .await
            .unwrap();

        assert_eq!(product.name, "Widget");
        assert_eq!(product.stock_quantity, 12);
    }
}

mod ledger_behaviour {
    use super::*;

    #[tokio::test]
    async fn stock_may_go_negative() {
        let store = InMemoryStockStore::new();
        let catalog = ProductCatalog::new(store.clone());
        let ledger = OrderLedger::new(store);

        catalog.add_product(AddProduct::new("Widget", 3)).await.unwrap();
        let placed = ledger
            .create_order(CreateOrder::new("Widget", 10))
            .await
            .unwrap();

        assert_eq!(placed.remaining_stock, -7);
    }

    #[tokio::test]
    async fn largest_order_quantity_then_overflow() {
        let store = InMemoryStockStore::new();
        let catalog = ProductCatalog::new(store.clone());
        let ledger = OrderLedger::new(store.clone());

        catalog.add_product(AddProduct::new("Widget", 0)).await.unwrap();
        let placed = ledger
            .create_order(CreateOrder::parse("Widget", "9223372036854775807").unwrap())
            .await
            .unwrap();
        assert_eq!(placed.remaining_stock, -i64::MAX);

        let result = ledger.create_order(CreateOrder::new("Widget", 2)).await;

        assert!(matches!(
            result,
            Err(DomainError::StockOverflow { ref name }) if name == "Widget"
        ));
        assert_eq!(store.order_count().await, 1);
        assert_eq!(store.stock_of("Widget").await.unwrap(), Some(-i64::MAX));
    }

    #[tokio::test]
    async fn invalid_order_never_reaches_store() {
        let store = InMemoryStockStore::new();
        let ledger = OrderLedger::new(store.clone());

        let result = ledger.create_order(CreateOrder::new("Widget", 0)).await;

        assert!(matches!(
            result,
            Err(DomainError::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert_eq!(store.order_count().await, 0);
    }

    #[tokio::test]
    async fn taken_codes_are_skipped() {
        let store = InMemoryStockStore::new();
        let catalog = ProductCatalog::new(store.clone());
        let ledger = OrderLedger::with_generator(store, ScriptedCodes::new(&["AAAA", "AAAA", "BBBB"]));

        catalog.add_product(AddProduct::new("Widget", 10)).await.unwrap();

        let first = ledger
            .create_order(CreateOrder::new("Widget", 1))
            .await
            .unwrap();
        let second = ledger
            .create_order(CreateOrder::new("Widget", 1))
            .await
            .unwrap();

        assert_eq!(first.order.order_number.as_str(), "AAAA");
        assert_eq!(second.order.order_number.as_str(), "BBBB");
    }

    #[tokio::test]
    async fn exhausted_code_attempts_fail_without_side_effects() {
        let store = InMemoryStockStore::new();
        let catalog = ProductCatalog::new(store.clone());
        let ledger = OrderLedger::with_generator(store.clone(), ScriptedCodes::new(&["ZZZZ"]))
            .with_max_code_attempts(3);

        catalog.add_product(AddProduct::new("Widget", 10)).await.unwrap();
        ledger
            .create_order(CreateOrder::new("Widget", 1))
            .await
            .unwrap();

        let result = ledger.create_order(CreateOrder::new("Widget", 1)).await;

        assert!(matches!(
            result,
            Err(DomainError::CodeSpaceExhausted { attempts: 3 })
        ));
        assert_eq!(store.order_count().await, 1);
        assert_eq!(store.stock_of("Widget").await.unwrap(), Some(9));
    }

    #[tokio::test]
    async fn lookup_of_unknown_code_is_none() {
        let ledger = OrderLedger::new(InMemoryStockStore::new());

        let found = ledger
            .get_order_by_number(LookupOrder::parse("QQ11").unwrap())
            .await
            .unwrap();
        assert!(found.is_none());

        let found = ledger
            .get_order_by_number(LookupOrder::parse("not-a-code").unwrap())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn lookup_is_case_insensitive_through_parse() {
        let store = InMemoryStockStore::new();
        let catalog = ProductCatalog::new(store.clone());
        let ledger = OrderLedger::with_generator(store, ScriptedCodes::new(&["AB12"]));

        catalog.add_product(AddProduct::new("Widget", 10)).await.unwrap();
        ledger
            .create_order(CreateOrder::new("Widget", 4))
            .await
            .unwrap();

        let found = ledger
            .get_order_by_number(LookupOrder::parse("ab12").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.quantity, 4);
        assert_eq!(ledger.list_orders().await.unwrap().len(), 1);
    }
}
