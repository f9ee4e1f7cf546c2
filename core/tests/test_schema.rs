#[cfg(test)]
mod tests {
    use cereal_core::schema::container_schema;
    use cereal_core::TypeDescriptor;
    use serde_json::json;

    #[test]
    fn primitive_aliases_are_fixed() {
        let cases = [
            (TypeDescriptor::string(), "string"),
            (TypeDescriptor::int(), "int"),
            (TypeDescriptor::float(), "double"),
            (TypeDescriptor::boolean(), "boolean"),
            (TypeDescriptor::null(), "null"),
        ];
        for (ty, alias) in cases {
            assert_eq!(container_schema(&ty, "tests").unwrap(), json!({"type": alias}));
        }
    }

    #[test]
    fn list_of_primitive_uses_short_items_form() {
        let ty = TypeDescriptor::list(TypeDescriptor::string());
        assert_eq!(
            container_schema(&ty, "tests").unwrap(),
            json!({"type": "array", "items": "string"})
        );
    }

    #[test]
    fn list_of_record_nests_the_full_schema() {
        let ty = TypeDescriptor::list(TypeDescriptor::record(
            "Point",
            [("x", TypeDescriptor::int())],
        ));
        assert_eq!(
            container_schema(&ty, "tests").unwrap(),
            json!({
                "type": "array",
                "items": {
                    "namespace": "tests",
                    "type": "record",
                    "name": "Point",
                    "fields": [{"name": "x", "type": "int"}],
                },
            })
        );
    }

    #[test]
    fn enum_schema_lists_symbols_in_order() {
        let ty = TypeDescriptor::enumeration("Color", ["RED", "GREEN", "BLUE"]);
        assert_eq!(
            container_schema(&ty, "tests").unwrap(),
            json!({"type": "enum", "name": "Color", "symbols": ["RED", "GREEN", "BLUE"]})
        );
    }

    #[test]
    fn union_schema_is_an_ordered_member_list() {
        let ty = TypeDescriptor::optional(TypeDescriptor::string());
        assert_eq!(container_schema(&ty, "tests").unwrap(), json!(["string", "null"]));
    }

    #[test]
    fn record_schema_threads_namespace_and_simplifies_fields() {
        let inner = TypeDescriptor::record("Inner", [("n", TypeDescriptor::int())]);
        let ty = TypeDescriptor::record(
            "Outer",
            [
                ("name", TypeDescriptor::string()),
                ("maybe", TypeDescriptor::optional(TypeDescriptor::int())),
                ("inner", inner),
            ],
        );
        assert_eq!(
            container_schema(&ty, "tests").unwrap(),
            json!({
                "namespace": "tests",
                "type": "record",
                "name": "Outer",
                "fields": [
                    {"name": "name", "type": "string"},
                    {"name": "maybe", "type": ["int", "null"]},
                    {"name": "inner", "type": {
                        "namespace": "tests.Outer.inner",
                        "type": "record",
                        "name": "Inner",
                        "fields": [{"name": "n", "type": "int"}],
                    }},
                ],
            })
        );
    }

    #[test]
    fn encrypted_schema_is_the_fixed_envelope_record() {
        let ty = TypeDescriptor::encrypted(TypeDescriptor::int());
        assert_eq!(
            container_schema(&ty, "tests").unwrap(),
            json!({
                "namespace": "tests",
                "type": "record",
                "name": "Encrypted",
                "fields": [
                    {"name": "key_id", "type": "string"},
                    {"name": "value", "type": ["int", "string"]},
                    {"name": "tag", "type": "string"},
                    {"name": "nonce", "type": "string"},
                ],
            })
        );
    }

    #[test]
    fn encrypted_string_does_not_duplicate_the_ciphertext_member() {
        let ty = TypeDescriptor::encrypted(TypeDescriptor::string());
        let schema = container_schema(&ty, "tests").unwrap();
        assert_eq!(schema["fields"][1]["type"], json!(["string"]));
    }
}
