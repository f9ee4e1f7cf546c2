#[cfg(test)]
mod tests {
    use cereal_core::{
        Cerealizer, CerealError, JsonCerealizer, Registry, TypeDescriptor, Value, WireValue,
    };
    use proptest::prelude::*;

    // --- Resolution tiers ---

    /// Marker codec: encodes every string as a fixed token.
    struct TokenCerealizer;

    impl Cerealizer for TokenCerealizer {
        fn encode(
            &self,
            _registry: &Registry,
            _value: &Value,
            _ty: &TypeDescriptor,
        ) -> Result<WireValue, CerealError> {
            Ok(WireValue::String("token".to_string()))
        }

        fn decode(
            &self,
            _registry: &Registry,
            _wire: &WireValue,
            _ty: &TypeDescriptor,
        ) -> Result<Value, CerealError> {
            Ok(Value::Str("token".to_string()))
        }
    }

    #[test]
    fn exact_registration_wins_over_origin_entry() {
        let mut cerealizer = JsonCerealizer::new();
        cerealizer
            .registry_mut()
            .register(TypeDescriptor::string(), Box::new(TokenCerealizer));

        // Strings now route to the exact entry...
        let wire = cerealizer
            .encode(&Value::from("anything"), Some(&TypeDescriptor::string()))
            .unwrap();
        assert_eq!(wire, serde_json::json!("token"));

        // ...while other primitives still hit the origin passthrough.
        let wire = cerealizer
            .encode(&Value::from(7i64), Some(&TypeDescriptor::int()))
            .unwrap();
        assert_eq!(wire, serde_json::json!(7));
    }

    #[test]
    fn unmapped_record_descriptor_falls_back_to_default_codec() {
        let ty = TypeDescriptor::record("tests.Anything", [("n", TypeDescriptor::int())]);
        let obj = Value::record("tests.Anything", [("n", Value::from(9i64))]);

        let cerealizer = JsonCerealizer::new();
        let wire = cerealizer.encode(&obj, Some(&ty)).unwrap();
        assert_eq!(wire, serde_json::json!({"n": 9}));
        assert_eq!(cerealizer.decode(&wire, &ty).unwrap(), obj);
    }

    #[test]
    fn encode_without_declared_type_uses_the_value_shape() {
        let obj = Value::record(
            "tests.Inferred",
            [
                ("a", Value::from(1i64)),
                ("b", Value::from(vec!["x", "y"])),
            ],
        );
        let wire = JsonCerealizer::new().encode(&obj, None).unwrap();
        assert_eq!(wire, serde_json::json!({"a": 1, "b": ["x", "y"]}));
    }

    // --- Unions ---

    #[test]
    fn union_encode_picks_first_declared_match() {
        // Both members match any list value; the first declared must win, so
        // string elements fail against the int element codec instead of
        // falling through to the second member.
        let ty = TypeDescriptor::union([
            TypeDescriptor::list(TypeDescriptor::int()),
            TypeDescriptor::list(TypeDescriptor::string()),
        ]);
        let cerealizer = JsonCerealizer::new();

        let ints = Value::from(vec![1i64, 2]);
        assert_eq!(
            cerealizer.encode(&ints, Some(&ty)).unwrap(),
            serde_json::json!([1, 2])
        );

        let strings = Value::from(vec!["a", "b"]);
        let err = cerealizer.encode(&strings, Some(&ty)).unwrap_err();
        assert!(matches!(err, CerealError::TypeMismatch { .. }));
    }

    #[test]
    fn union_decode_first_mapping_member_claims_objects() {
        let a = TypeDescriptor::record("tests.A", [("x", TypeDescriptor::int())]);
        let b = TypeDescriptor::record("tests.B", [("x", TypeDescriptor::int())]);
        let ty = TypeDescriptor::union([a, b]);

        let decoded = JsonCerealizer::new()
            .decode(&serde_json::json!({"x": 5}), &ty)
            .unwrap();
        assert_eq!(decoded, Value::record("tests.A", [("x", Value::from(5i64))]));
    }

    #[test]
    fn union_member_resolution_is_by_name_for_records() {
        let a = TypeDescriptor::record("tests.A", [("x", TypeDescriptor::int())]);
        let ty = TypeDescriptor::union([TypeDescriptor::int(), a]);

        let stranger = Value::record("tests.C", [("x", Value::from(5i64))]);
        let err = JsonCerealizer::new().encode(&stranger, Some(&ty)).unwrap_err();
        assert!(matches!(err, CerealError::UnresolvedUnionMember { .. }));
    }

    #[test]
    fn optional_roundtrips_both_arms() {
        let ty = TypeDescriptor::optional(TypeDescriptor::record(
            "tests.Payload",
            [("x", TypeDescriptor::int())],
        ));
        let cerealizer = JsonCerealizer::new();

        let present = Value::record("tests.Payload", [("x", Value::from(1i64))]);
        let wire = cerealizer.encode(&present, Some(&ty)).unwrap();
        assert_eq!(cerealizer.decode(&wire, &ty).unwrap(), present);

        let wire = cerealizer.encode(&Value::Null, Some(&ty)).unwrap();
        assert_eq!(wire, serde_json::json!(null));
        assert_eq!(cerealizer.decode(&wire, &ty).unwrap(), Value::Null);
    }

    #[test]
    fn union_decode_distinguishes_int_and_float_numbers() {
        let ty = TypeDescriptor::union([TypeDescriptor::int(), TypeDescriptor::float()]);
        let cerealizer = JsonCerealizer::new();

        assert_eq!(
            cerealizer.decode(&serde_json::json!(3), &ty).unwrap(),
            Value::from(3i64)
        );
        assert_eq!(
            cerealizer.decode(&serde_json::json!(3.5), &ty).unwrap(),
            Value::from(3.5)
        );
    }

    // --- Enums ---

    #[test]
    fn enum_roundtrips_by_symbol_name() {
        let ty = TypeDescriptor::enumeration("tests.Color", ["RED", "GREEN", "BLUE"]);
        let cerealizer = JsonCerealizer::new();

        let value = Value::symbol("tests.Color", "GREEN");
        let wire = cerealizer.encode(&value, Some(&ty)).unwrap();
        assert_eq!(wire, serde_json::json!("GREEN"));
        assert_eq!(cerealizer.decode(&wire, &ty).unwrap(), value);
    }

    #[test]
    fn unknown_enum_symbol_is_fatal_on_decode() {
        let ty = TypeDescriptor::enumeration("tests.Color", ["RED", "GREEN", "BLUE"]);
        let err = JsonCerealizer::new()
            .decode(&serde_json::json!("MAUVE"), &ty)
            .unwrap_err();
        match err {
            CerealError::UnknownEnumSymbol { name, symbol } => {
                assert_eq!(name, "tests.Color");
                assert_eq!(symbol, "MAUVE");
            }
            other => panic!("expected UnknownEnumSymbol, got {other}"),
        }
    }

    #[test]
    fn unknown_enum_symbol_is_fatal_on_encode() {
        let ty = TypeDescriptor::enumeration("tests.Color", ["RED"]);
        let err = JsonCerealizer::new()
            .encode(&Value::symbol("tests.Color", "BLUE"), Some(&ty))
            .unwrap_err();
        assert!(matches!(err, CerealError::UnknownEnumSymbol { .. }));
    }

    // --- Lists ---

    #[test]
    fn empty_list_roundtrips_to_empty_sequence() {
        let ty = TypeDescriptor::list(TypeDescriptor::string());
        let cerealizer = JsonCerealizer::new();

        let wire = cerealizer.encode(&Value::List(vec![]), Some(&ty)).unwrap();
        assert_eq!(wire, serde_json::json!([]));
        assert_eq!(cerealizer.decode(&wire, &ty).unwrap(), Value::List(vec![]));
    }

    proptest! {
        #[test]
        fn list_roundtrip_preserves_order_and_length(items in proptest::collection::vec(any::<i64>(), 0..32)) {
            let ty = TypeDescriptor::list(TypeDescriptor::int());
            let value = Value::List(items.iter().copied().map(Value::Int).collect());

            let cerealizer = JsonCerealizer::new();
            let wire = cerealizer.encode(&value, Some(&ty)).unwrap();
            prop_assert_eq!(wire.as_array().unwrap().len(), items.len());
            prop_assert_eq!(cerealizer.decode(&wire, &ty).unwrap(), value);
        }
    }
}
