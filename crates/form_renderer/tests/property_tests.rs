//! Property tests: rendering is total and deterministic over arbitrary input

mod common;

use common::parse_document;
use form_renderer::{render_fields, FieldPolicy, FormConfig};
use proptest::collection::hash_map;
use proptest::prelude::*;

const KEYS: [&str; 13] = [
    "client_name",
    "branch_address",
    "correspondence_address",
    "telephone_no",
    "mobile",
    "email",
    "customer_name",
    "op_registered_address",
    "op_correspondence_address",
    "op_telephone",
    "op_mobile",
    "op_email",
    "dispute_nature",
];

fn field_map() -> impl Strategy<Value = std::collections::HashMap<String, String>> {
    let key = prop_oneof![
        proptest::sample::select(KEYS.to_vec()).prop_map(str::to_string),
        "[a-z_]{1,12}",
    ];
    hash_map(key, any::<String>(), 0..20)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_render_never_fails(fields in field_map(), full in any::<bool>()) {
        let config = if full { FormConfig::full_width_dispute() } else { FormConfig::standard() };

        let first = render_fields(&fields, &FieldPolicy::Empty, &config).unwrap();
        let second = render_fields(&fields, &FieldPolicy::Empty, &config).unwrap();

        prop_assert!(!first.is_empty());
        prop_assert_eq!(&first, &second);
    }

    #[test]
    fn prop_table_shape_is_fixed(fields in field_map()) {
        let bytes = render_fields(&fields, &FieldPolicy::Empty, &FormConfig::standard()).unwrap();
        let doc = parse_document(&bytes);

        prop_assert_eq!(doc.tables.len(), 1);
        prop_assert_eq!(doc.table().rows.len(), 16);
        for row in &doc.table().rows {
            prop_assert_eq!(row.logical_columns(), 3);
            prop_assert_eq!(row.total_width(), doc.usable_width());
        }
    }

    #[test]
    fn prop_name_survives_round_trip(name in "[A-Za-z0-9 .&<>'\"-]{1,40}") {
        let mut fields = std::collections::HashMap::new();
        fields.insert("client_name".to_string(), name.clone());

        let bytes = render_fields(&fields, &FieldPolicy::Empty, &FormConfig::standard()).unwrap();
        let doc = parse_document(&bytes);

        prop_assert_eq!(doc.table().rows[1].cells[2].text(), name);
    }
}
