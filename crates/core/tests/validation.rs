use task_core::{ErrorKind, FieldSpec, FieldValue, FormatRegistry, Record, RuleError, Schema};

#[derive(Debug, Clone, Default)]
struct TestStruct {
    required_field: String,
    tag_field: String,
    max_field: String,
    min_field: String,
    lt_field: i64,
    gte_field: i64,
}

impl Record for TestStruct {
    const TYPE_NAME: &'static str = "TestStruct";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::str("RequiredField", "required"),
        FieldSpec::str("TagField", "tag"),
        FieldSpec::str("MaxField", "max=5"),
        FieldSpec::str("MinField", "min=3"),
        FieldSpec::int("LtField", "lt=10"),
        FieldSpec::int("GteField", "gte=5"),
    ];

    fn value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "RequiredField" => Some((&self.required_field).into()),
            "TagField" => Some((&self.tag_field).into()),
            "MaxField" => Some((&self.max_field).into()),
            "MinField" => Some((&self.min_field).into()),
            "LtField" => Some(self.lt_field.into()),
            "GteField" => Some(self.gte_field.into()),
            _ => None,
        }
    }
}

fn valid() -> TestStruct {
    TestStruct {
        required_field: "value".into(),
        tag_field: "#tag".into(),
        max_field: "value".into(),
        min_field: "val".into(),
        lt_field: 5,
        gte_field: 5,
    }
}

fn schema() -> Schema<TestStruct> {
    Schema::compile(&FormatRegistry::with_defaults()).unwrap()
}

#[test]
fn validate_table() {
    let schema = schema();
    let cases: Vec<(&str, TestStruct, Option<&str>)> = vec![
        ("valid struct", valid(), None),
        (
            "missing required field",
            TestStruct {
                required_field: String::new(),
                ..valid()
            },
            Some("ErrFieldRequired: TestStruct.RequiredField"),
        ),
        (
            "invalid tag field",
            TestStruct {
                tag_field: "tag".into(),
                ..valid()
            },
            Some("ErrInvalidFormat: TestStruct.TagField"),
        ),
        (
            "field exceeds max length",
            TestStruct {
                max_field: "toolong".into(),
                ..valid()
            },
            Some("ErrFieldExceedsMaxLen: TestStruct.MaxField"),
        ),
        (
            "field below min length",
            TestStruct {
                min_field: "va".into(),
                ..valid()
            },
            Some("ErrFieldBelowMinLen: TestStruct.MinField"),
        ),
        (
            "field exceeds max value",
            TestStruct {
                lt_field: 15,
                ..valid()
            },
            Some("ErrFieldExceedsMaxVal: TestStruct.LtField"),
        ),
        (
            "field below min value",
            TestStruct {
                gte_field: 3,
                ..valid()
            },
            Some("ErrFieldBelowMinVal: TestStruct.GteField"),
        ),
    ];

    for (name, input, want) in cases {
        let got = schema.validate(&input).err().map(|e| e.to_string());
        assert_eq!(got.as_deref(), want, "case '{}'", name);
    }
}

#[test]
fn boundaries() {
    let schema = schema();
    let at = |f: fn(&mut TestStruct)| {
        let mut s = valid();
        f(&mut s);
        schema.validate(&s).err().map(|e| e.kind)
    };

    assert_eq!(at(|s| s.max_field = "12345".into()), None);
    assert_eq!(at(|s| s.max_field = "123456".into()), Some(ErrorKind::FieldExceedsMaxLen));
    assert_eq!(at(|s| s.min_field = "123".into()), None);
    assert_eq!(at(|s| s.min_field = "12".into()), Some(ErrorKind::FieldBelowMinLen));
    assert_eq!(at(|s| s.lt_field = 9), None);
    assert_eq!(at(|s| s.lt_field = 10), Some(ErrorKind::FieldExceedsMaxVal));
    assert_eq!(at(|s| s.gte_field = 5), None);
    assert_eq!(at(|s| s.gte_field = 4), Some(ErrorKind::FieldBelowMinVal));
}

#[test]
fn reports_first_violation_in_declaration_order() {
    let schema = schema();
    let everything_wrong = TestStruct {
        required_field: String::new(),
        tag_field: "tag".into(),
        max_field: "toolong".into(),
        min_field: "v".into(),
        lt_field: 100,
        gte_field: 0,
    };
    let err = schema.validate(&everything_wrong).unwrap_err();
    assert_eq!(err.kind, ErrorKind::FieldRequired);
    assert_eq!(err.field, "RequiredField");

    let later_fields_wrong = TestStruct {
        min_field: "v".into(),
        lt_field: 100,
        ..valid()
    };
    let err = schema.validate(&later_fields_wrong).unwrap_err();
    assert_eq!(err.to_string(), "ErrFieldBelowMinLen: TestStruct.MinField");
}

#[test]
fn rules_within_a_field_run_in_order() {
    struct Ordered(String);
    impl Record for Ordered {
        const TYPE_NAME: &'static str = "Ordered";
        const FIELDS: &'static [FieldSpec] = &[FieldSpec::str("Name", "min=3,tag")];
        fn value(&self, _field: &str) -> Option<FieldValue<'_>> {
            Some((&self.0).into())
        }
    }
    let schema = Schema::<Ordered>::compile(&FormatRegistry::with_defaults()).unwrap();
    // Both rules fail; min is declared first.
    assert_eq!(
        schema.validate(&Ordered("x".into())).unwrap_err().kind,
        ErrorKind::FieldBelowMinLen
    );
    assert_eq!(
        schema.validate(&Ordered("xyz".into())).unwrap_err().kind,
        ErrorKind::InvalidFormat
    );
}

#[test]
fn repeated_calls_are_stable() {
    let schema = schema();
    let input = TestStruct {
        tag_field: "nope".into(),
        ..valid()
    };
    let first = schema.validate(&input);
    for _ in 0..10 {
        assert_eq!(schema.validate(&input), first);
    }
}

#[test]
fn required_integer_rejects_zero() {
    struct Counter(i64);
    impl Record for Counter {
        const TYPE_NAME: &'static str = "Counter";
        const FIELDS: &'static [FieldSpec] = &[FieldSpec::int("Count", "required")];
        fn value(&self, _field: &str) -> Option<FieldValue<'_>> {
            Some(self.0.into())
        }
    }
    let schema = Schema::<Counter>::compile(&FormatRegistry::new()).unwrap();
    assert!(schema.validate(&Counter(1)).is_ok());
    assert_eq!(
        schema.validate(&Counter(0)).unwrap_err().to_string(),
        "ErrFieldRequired: Counter.Count"
    );
}

#[test]
fn tag_rule_needs_registered_format() {
    assert!(matches!(
        Schema::<TestStruct>::compile(&FormatRegistry::new()),
        Err(RuleError::UnknownRule { field: "TagField", .. })
    ));
}

#[test]
fn schema_is_shareable_across_threads() {
    let schema = std::sync::Arc::new(schema());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let schema = std::sync::Arc::clone(&schema);
            std::thread::spawn(move || {
                let input = TestStruct {
                    lt_field: i,
                    ..valid()
                };
                schema.validate(&input).is_ok()
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}
