//! Inline snapshots of serialized column configuration.
//!
//! The serialized keys must match the table widget's configuration keys exactly, so these snapshots are the
//! contract with the client side.
//!
//! Review changes: `cargo insta review`

#![allow(dead_code)]

use serde::Serialize;
use tablecols::{ColumnConfig, ColumnSchema, Columns, columns_json};

#[derive(Serialize, Columns)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[column(title = "Order #", orderable, responsive_priority = 1)]
    pub order_id: i64,
    #[column(title = "Placed", type = "date", order_sequence = ["desc", "asc"])]
    pub placed_at: String,
    #[column(class_name = "dt-right", cell_type = "td", default_content = "0.00")]
    pub total: f64,
    #[column(visible = false, searchable = true)]
    pub customer_ref: String,
    #[serde(skip_serializing)]
    pub audit_trail: Vec<String>,
}

#[test]
fn order_columns_json() {
    insta::assert_json_snapshot!(Order::columns(), @r#"
    [
      {
        "data": "orderId",
        "title": "Order #",
        "orderable": true,
        "responsivePriority": 1
      },
      {
        "data": "placedAt",
        "title": "Placed",
        "orderSequence": [
          "desc",
          "asc"
        ],
        "type": "date"
      },
      {
        "data": "total",
        "className": "dt-right",
        "cellType": "td",
        "defaultContent": "0.00"
      },
      {
        "data": "customerRef",
        "visible": false,
        "searchable": true
      }
    ]
    "#);
}

#[test]
fn compact_json_has_no_unset_keys() {
    insta::assert_snapshot!(
        columns_json::<Order>().unwrap(),
        @r#"[{"data":"orderId","title":"Order #","orderable":true,"responsivePriority":1},{"data":"placedAt","title":"Placed","orderSequence":["desc","asc"],"type":"date"},{"data":"total","className":"dt-right","cellType":"td","defaultContent":"0.00"},{"data":"customerRef","visible":false,"searchable":true}]"#
    );
}

#[derive(Serialize, Columns)]
pub struct Legacy {
    #[column(visible = true, searchable = false, orderable = false, responsive_priority = -1, order = -1)]
    pub id: i64,
}

#[test]
fn elided_widget_defaults_serialize_to_data_only() {
    let config = ColumnConfig::new().with_elide_widget_defaults(true);
    insta::assert_json_snapshot!(Legacy::columns_with(&config), @r#"
    [
      {
        "data": "id"
      }
    ]
    "#);
}
