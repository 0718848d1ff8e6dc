use candybox_table::{
    ColumnType, MarkdownAlignment, Record, Value, collect_data_table, impl_record, schema_of,
    to_data_table, to_markdown_table,
};
use chrono::{NaiveDate, NaiveDateTime};

struct Order {
    id:      u32,
    item:    String,
    shipped: Option<NaiveDateTime>,
}

impl_record!(Order { id as "Id", item as "Item", shipped as "Shipped" });

fn shipped_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(9, 30, 0).unwrap()
}

fn orders() -> Vec<Order> {
    vec![
        Order { id: 1, item: "Pen".into(), shipped: Some(shipped_at()) },
        Order { id: 2, item: "Ink".into(), shipped: None },
    ]
}

#[test]
fn test_schema_follows_field_order() {
    let table = schema_of::<Order>().unwrap();
    assert_eq!(table.name(), "Order");
    let names: Vec<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Id", "Item", "Shipped"]);
    assert!(table.rows().is_empty());
}

#[test]
fn test_nullable_date_column_is_typed_as_date_time() {
    let table = schema_of::<Order>().unwrap();
    assert_eq!(table.columns()[2].column_type, ColumnType::DateTime);
    assert_eq!(Order::fields()[0].column_type, ColumnType::UnsignedInteger);
}

#[test]
fn test_single_record_has_schema_only() {
    let order = &orders()[0];
    let table = to_data_table(order).unwrap();
    assert_eq!(table.columns().len(), 3);
    assert!(table.rows().is_empty());
}

#[test]
fn test_collect_copies_values_in_order() {
    let table = collect_data_table(&orders()).unwrap();
    assert_eq!(table.rows().len(), 2);
    assert_eq!(table.value(0, "Shipped"), Some(&Value::DateTime(shipped_at())));
    assert_eq!(table.value(1, "Shipped"), Some(&Value::Null));
    assert_eq!(table.value(1, "Item"), Some(&Value::Text("Ink".into())));
}

#[test]
fn test_markdown_from_records() {
    let table = collect_data_table(&orders()).unwrap();
    assert_eq!(
        to_markdown_table(&table, MarkdownAlignment::Center),
        "|Id|Item|Shipped|\n|:---:|:---:|:---:|\n|1|Pen|2024-03-01 09:30:00|\n|2|Ink||\n"
    );
}

#[test]
fn test_empty_collection_renders_empty_markdown() {
    let table = collect_data_table(&Vec::<Order>::new()).unwrap();
    assert_eq!(table.columns().len(), 3);
    assert_eq!(to_markdown_table(&table, MarkdownAlignment::Default), "");
}

#[test]
fn test_table_serializes_with_serde() {
    let table = collect_data_table(&orders()).unwrap();
    let json = serde_json::to_string(&table).unwrap();
    assert!(json.contains("\"Shipped\""));
    let restored: candybox_table::DataTable = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, table);
}
