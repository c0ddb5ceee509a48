#[cfg(test)]
mod tests {
    use crate::name_field::{
        resolve, FieldDescriptor, NameResponse, SubFieldSpec, VariantDefinition, VariantsConfig,
        FIRST_AND_LAST_NAME_VARIANT, FULL_NAME_VARIANT, LAST_NAME_FIELD,
    };
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn arb_name_response() -> impl Strategy<Value = NameResponse> {
        prop_oneof![
            "[a-zA-Z ]{0,12}".prop_map(NameResponse::Text),
            ("[a-zA-Z]{0,8}", "[a-zA-Z]{0,8}")
                .prop_map(|(first, last)| NameResponse::structured(first, last)),
        ]
    }

    fn arb_variant_name() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            Just(Some(FIRST_AND_LAST_NAME_VARIANT.to_string())),
            Just(Some(FULL_NAME_VARIANT.to_string())),
            "[a-z]{1,10}".prop_map(Some),
        ]
    }

    fn arb_sub_field() -> impl Strategy<Value = SubFieldSpec> {
        (
            prop_oneof![
                Just(LAST_NAME_FIELD.to_string()),
                Just("firstName".to_string()),
                "[a-z]{1,6}",
            ],
            prop_oneof![Just(None), Just(Some(true)), Just(Some(false))],
        )
            .prop_map(|(name, required)| SubFieldSpec { name, required })
    }

    fn arb_field() -> impl Strategy<Value = FieldDescriptor> {
        (
            arb_variant_name(),
            proptest::option::of(prop::collection::vec(arb_sub_field(), 0..4)),
        )
            .prop_map(|(variant, first_and_last_fields)| {
                let mut variants = HashMap::new();
                if let Some(fields) = first_and_last_fields {
                    variants.insert(
                        FIRST_AND_LAST_NAME_VARIANT.to_string(),
                        VariantDefinition { fields },
                    );
                }
                FieldDescriptor {
                    variant,
                    variants_config: VariantsConfig { variants },
                }
            })
    }

    fn first_and_last_with_last_name(required: Option<bool>) -> FieldDescriptor {
        let mut variants = HashMap::new();
        variants.insert(
            FIRST_AND_LAST_NAME_VARIANT.to_string(),
            VariantDefinition {
                fields: vec![SubFieldSpec {
                    name: LAST_NAME_FIELD.to_string(),
                    required,
                }],
            },
        );
        FieldDescriptor {
            variant: Some(FIRST_AND_LAST_NAME_VARIANT.to_string()),
            variants_config: VariantsConfig { variants },
        }
    }

    proptest! {
        #[test]
        fn test_never_read_only_outside_reschedule(
            field in arb_field(),
            response in arb_name_response(),
            dirty in any::<bool>(),
        ) {
            prop_assert!(!resolve(&field, &response, false, dirty));
        }

        #[test]
        fn test_never_read_only_when_dirty(
            field in arb_field(),
            response in arb_name_response(),
        ) {
            prop_assert!(!resolve(&field, &response, true, true));
        }

        #[test]
        fn test_other_variants_always_read_only(
            field in arb_field(),
            response in arb_name_response(),
        ) {
            prop_assume!(field.variant.as_deref() != Some(FIRST_AND_LAST_NAME_VARIANT));
            prop_assert!(resolve(&field, &response, true, false));
        }

        #[test]
        fn test_read_only_without_required_last_name(
            field in arb_field(),
            response in arb_name_response(),
        ) {
            prop_assume!(!field.is_last_name_required());
            prop_assert!(resolve(&field, &response, true, false));
        }

        #[test]
        fn test_required_last_name_gates_on_response(response in arb_name_response()) {
            let field = first_and_last_with_last_name(Some(true));
            let has_last_name = matches!(
                &response,
                NameResponse::Structured(name) if !name.last_name.is_empty()
            );
            prop_assert_eq!(resolve(&field, &response, true, false), has_last_name);
        }

        #[test]
        fn test_optional_last_name_ignores_response(
            response in arb_name_response(),
            required in prop_oneof![Just(None), Just(Some(false))],
        ) {
            let field = first_and_last_with_last_name(required);
            prop_assert!(resolve(&field, &response, true, false));
        }
    }
}
