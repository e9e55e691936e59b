use chrono::{TimeZone, Utc};
use hex_literal::hex;
use ua_variant::{
    BinaryCodec, ByteString, DataValue, DateTime, DiagnosticInfo,
    EncodingMask, Error, ExpandedNodeId, ExtensionObject, Guid,
    LocalizedText, NodeId, Payload, QualifiedName, StatusCode, TypeId, Value,
    Variant, XmlElement,
};

fn roundtrip(v: &Variant) -> Variant {
    let bytes = v.to_bytes().unwrap();
    let (back, consumed) = Variant::from_bytes(&bytes).unwrap();
    assert_eq!(consumed, bytes.len());
    back
}

fn sample_guid() -> Guid {
    Guid::from_fields(
        0x7253_9AC0,
        0x9FCF,
        0x4E70,
        [0x94, 0xC3, 0x4C, 0x2B, 0x6B, 0x0E, 0x75, 0x11],
    )
}

#[test]
fn scalar_wire_layouts() {
    let cases: Vec<(Variant, Vec<u8>)> = vec![
        (Variant::new(true), hex!("01 01").to_vec()),
        (Variant::new(-5i8), hex!("02 fb").to_vec()),
        (Variant::new(0xABu8), hex!("03 ab").to_vec()),
        (Variant::new(-2i16), hex!("04 feff").to_vec()),
        (Variant::new(0x1234u16), hex!("05 3412").to_vec()),
        (Variant::new(-1i32), hex!("06 ffffffff").to_vec()),
        (Variant::new(0x0102_0304u32), hex!("07 04030201").to_vec()),
        (Variant::new(-3i64), hex!("08 fdffffffffffffff").to_vec()),
        (Variant::new(9u64), hex!("09 0900000000000000").to_vec()),
        (Variant::new(1.0f32), hex!("0a 0000803f").to_vec()),
        (Variant::new(-2.5f64), hex!("0b 00000000000004c0").to_vec()),
        (Variant::new("abc"), hex!("0c 03000000 616263").to_vec()),
        (
            Variant::new(DateTime::from_ticks(1)),
            hex!("0d 0100000000000000").to_vec(),
        ),
        (
            Variant::new(sample_guid()),
            hex!("0e c09a5372 cf9f 704e 94c34c2b6b0e7511").to_vec(),
        ),
        (
            Variant::new(ByteString::from([0xdeu8, 0xad])),
            hex!("0f 02000000 dead").to_vec(),
        ),
        (
            Variant::new(XmlElement::from("<a/>")),
            hex!("10 04000000 3c612f3e").to_vec(),
        ),
        (Variant::new(NodeId::numeric(0, 85)), hex!("11 00 55").to_vec()),
        (
            Variant::new(ExpandedNodeId::new(NodeId::numeric(0, 1)).with_server_index(2)),
            hex!("12 40 01 02000000").to_vec(),
        ),
        (
            Variant::new(StatusCode::BAD),
            hex!("13 00000080").to_vec(),
        ),
        (
            Variant::new(QualifiedName::new(1, "x")),
            hex!("14 0100 01000000 78").to_vec(),
        ),
        (
            Variant::new(LocalizedText::text("hi")),
            hex!("15 02 02000000 6869").to_vec(),
        ),
        (
            Variant::new(ExtensionObject::binary(NodeId::numeric(0, 1), [0x07u8])),
            hex!("16 0001 01 01000000 07").to_vec(),
        ),
        (
            Variant::new(DataValue::new(Variant::new(7u8))),
            hex!("17 01 03 07").to_vec(),
        ),
        (
            Variant::new(Variant::new(false)),
            hex!("18 01 00").to_vec(),
        ),
        (
            Variant::new(DiagnosticInfo {
                symbolic_id: Some(3),
                ..Default::default()
            }),
            hex!("19 01 03000000").to_vec(),
        ),
    ];
    assert_eq!(cases.len(), 25);

    for (variant, expected) in cases {
        let bytes = variant.to_bytes().unwrap();
        assert_eq!(bytes, expected, "{:?}", variant.type_id());
        assert_eq!(roundtrip(&variant), variant);
    }
}

#[test]
fn byte_string_null_and_empty_stay_distinct() {
    for wire in [hex!("0f 00000000"), hex!("0f ffffffff")] {
        let (v, consumed) = Variant::from_bytes(&wire).unwrap();
        assert_eq!(consumed, 5);
        assert_eq!(v.to_bytes().unwrap(), wire);
    }

    let (empty, _) = Variant::from_bytes(&hex!("0f 00000000")).unwrap();
    let (null, _) = Variant::from_bytes(&hex!("0f ffffffff")).unwrap();
    assert_eq!(empty.value(), Some(&Value::ByteString(ByteString::new(vec![]))));
    assert_eq!(null.value(), Some(&Value::ByteString(ByteString::null())));
    assert_ne!(empty, null);

    let array = Variant::from_array([ByteString::null(), ByteString::new(Vec::new())]);
    assert_eq!(
        array.to_bytes().unwrap(),
        hex!("8f 02000000 ffffffff 00000000")
    );
    assert_eq!(roundtrip(&array), array);
}

#[test]
fn set_assigns_tag_without_shape_flags() {
    let mut v = Variant::default();
    assert!(v.is_empty());
    assert_eq!(v.type_id(), None);

    v.set(42u32);
    assert_eq!(v.type_id(), Some(TypeId::UInt32));
    assert_eq!(v.encoding_mask().bits(), 7);
    assert!(!v.encoding_mask().has(EncodingMask::ARRAY_VALUES));
    assert!(!v.encoding_mask().has(EncodingMask::ARRAY_DIMENSIONS));
    assert_eq!(v.array_length(), None);

    v.set(StatusCode::new(42));
    assert_eq!(v.type_id(), Some(TypeId::StatusCode));
}

#[test]
fn no_implicit_widening() {
    assert_eq!(Variant::new(1i32).type_id(), Some(TypeId::Int32));
    assert_eq!(Variant::new(1i64).type_id(), Some(TypeId::Int64));
    assert_ne!(Variant::new(1i32), Variant::new(1i64));
    assert_ne!(Variant::new(7u32), Variant::new(StatusCode::new(7)));
    assert_ne!(Variant::new("a"), Variant::new(XmlElement::from("a")));
}

#[test]
fn array_roundtrip() {
    let v = Variant::from_array(vec![3u16, 1, 2]);
    assert_eq!(v.encoding_mask().bits(), 0x85);
    let bytes = v.to_bytes().unwrap();
    assert_eq!(bytes, hex!("85 03000000 0300 0100 0200"));

    let back = roundtrip(&v);
    assert_eq!(back.array_length(), Some(3));
    assert_eq!(
        back.values().unwrap(),
        &[Value::UInt16(3), Value::UInt16(1), Value::UInt16(2)]
    );
    assert_eq!(back, v);
}

#[test]
fn empty_array_keeps_its_type() {
    let v = Variant::from_array(Vec::<String>::new());
    let bytes = v.to_bytes().unwrap();
    assert_eq!(bytes, hex!("8c 00000000"));
    let back = roundtrip(&v);
    assert_eq!(back.type_id(), Some(TypeId::String));
    assert_eq!(back.array_length(), Some(0));
}

#[test]
fn multi_dimensional_roundtrip() {
    let v = Variant::from_array([1i32, 2, 3, 4, 5, 6])
        .with_dimensions(vec![2, 3])
        .unwrap();
    assert_eq!(v.encoding_mask().bits(), 0xC6);
    let bytes = v.to_bytes().unwrap();
    assert_eq!(
        bytes,
        hex!(
            "c6 06000000"
            "01000000 02000000 03000000 04000000 05000000 06000000"
            "02000000 02000000 03000000"
        )
    );

    let back = roundtrip(&v);
    assert_eq!(back.dimensions(), Some(&[2, 3][..]));
    assert_eq!(back.array_length(), Some(6));
    assert_eq!(back, v);

    assert_eq!(back.get(&[0, 0]), Some(&Value::Int32(1)));
    assert_eq!(back.get(&[0, 2]), Some(&Value::Int32(3)));
    assert_eq!(back.get(&[1, 0]), Some(&Value::Int32(4)));
    assert_eq!(back.get(&[1, 2]), Some(&Value::Int32(6)));
    assert_eq!(back.get(&[2, 0]), None);
    assert_eq!(back.get(&[0, 3]), None);
    assert_eq!(back.get(&[5]), None);
}

#[test]
fn dimensions_require_an_array() {
    let mut v = Variant::new(1.5f64);
    assert!(matches!(
        v.set_dimensions(vec![1]),
        Err(Error::DimensionsWithoutArray)
    ));
    assert_eq!(v.dimensions(), None);
    assert_eq!(v.encoding_mask().bits(), 11);

    let mut v = Variant::from_array([1u8, 2]).with_dimensions(vec![2]).unwrap();
    v.clear_dimensions();
    assert_eq!(v.encoding_mask().bits(), 0x83);
    assert_eq!(v.to_bytes().unwrap(), hex!("83 02000000 01 02"));
}

#[test]
fn one_element_array_stays_an_array() {
    let v = Variant::from_array(["only"]);
    let back = roundtrip(&v);
    assert!(back.is_array());
    assert_eq!(back.value(), None);
    assert_eq!(back.scalar(), Some(&Value::String("only".into())));
    assert_eq!(back.as_string(), "only");
    assert_eq!(back.to_bytes().unwrap(), v.to_bytes().unwrap());
}

#[test]
fn try_set_accepts_supported_types() {
    let mut v = Variant::default();
    v.try_set(12i64).unwrap();
    assert_eq!(v, Variant::new(12i64));

    v.try_set("text").unwrap();
    assert_eq!(v.type_id(), Some(TypeId::String));

    v.try_set(vec![1.0f32, 2.0]).unwrap();
    assert_eq!(v, Variant::from_array([1.0f32, 2.0]));

    v.try_set(vec![1u8, 2, 3]).unwrap();
    assert_eq!(v.type_id(), Some(TypeId::ByteString));
    assert!(!v.is_array());

    v.try_set(Variant::new(1u8)).unwrap();
    assert_eq!(v.type_id(), Some(TypeId::Variant));
}

#[test]
fn try_new_accepts_dynamic_values() {
    let v = Variant::try_new(Value::Int32(1)).unwrap();
    assert_eq!(v, Variant::new(1i32));

    let v = Variant::try_new(vec![Value::Double(0.5), Value::Double(1.5)])
        .unwrap();
    assert_eq!(v, Variant::from_array([0.5f64, 1.5]));

    let err = Variant::try_new(vec![Value::Int32(1), Value::Boolean(true)])
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MixedArray { expected: TypeId::Int32, found: TypeId::Boolean }
    ));

    assert!(matches!(
        Variant::try_new(Vec::<Value>::new()),
        Err(Error::UnsupportedType(_))
    ));
}

#[test]
fn try_set_rejects_unsupported_type_and_keeps_state() {
    let mut v = Variant::new(5i16);
    let before = v.clone();

    let err = v.try_set(5i128).unwrap_err();
    assert!(matches!(err, Error::UnsupportedType("i128")));
    assert_eq!(v, before);

    let err = v.try_set(vec![Some(1u32)]).unwrap_err();
    assert!(matches!(err, Error::UnsupportedType(_)));
    assert_eq!(v, before);

    assert!(matches!(
        Variant::try_new('c'),
        Err(Error::UnsupportedType("char"))
    ));
}

#[test]
fn from_values_rejects_mixed_kinds() {
    let err = Variant::from_values(
        TypeId::Int32,
        vec![Value::Int32(1), Value::Int64(2)],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::MixedArray { expected: TypeId::Int32, found: TypeId::Int64 }
    ));

    let v = Variant::from_values(
        TypeId::Int32,
        vec![Value::Int32(1), Value::Int32(2)],
    )
    .unwrap();
    assert_eq!(v, Variant::from_array([1i32, 2]));
}

#[test]
fn empty_variant_cannot_be_encoded() {
    assert!(matches!(
        Variant::default().to_bytes(),
        Err(Error::EmptyVariant)
    ));
    assert_eq!(Variant::default().payload(), &Payload::Empty);
}

#[test]
fn nested_variant_roundtrip() {
    let inner = Variant::from_array([10u32, 20]);
    let outer = Variant::new(inner.clone());
    let bytes = outer.to_bytes().unwrap();
    assert_eq!(bytes, hex!("18 87 02000000 0a000000 14000000"));

    let back = roundtrip(&outer);
    assert_eq!(back.type_id(), Some(TypeId::Variant));
    match back.value() {
        Some(Value::Variant(v)) => {
            assert_eq!(v.type_id(), Some(TypeId::UInt32));
            assert_eq!(**v, inner);
        }
        other => panic!("unexpected payload {other:?}"),
    }
}

#[test]
fn array_of_variants() {
    let v = Variant::from_array([Variant::new(1i8), Variant::new("x")]);
    let bytes = v.to_bytes().unwrap();
    assert_eq!(bytes, hex!("98 02000000 02 01 0c 01000000 78"));
    assert_eq!(roundtrip(&v), v);
}

#[test]
fn data_value_with_everything() {
    let time = DateTime::from_chrono(
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    );
    let mut dv = DataValue::new(Variant::new(21.5f64))
        .with_status(StatusCode::UNCERTAIN)
        .with_source_timestamp(time)
        .with_server_timestamp(time);
    dv.source_picoseconds = Some(10);
    dv.server_picoseconds = Some(20);
    let v = Variant::new(dv);
    assert_eq!(roundtrip(&v), v);
}

#[test]
fn display() {
    assert_eq!(Variant::default().to_string(), "null");
    assert_eq!(Variant::new(3u8).to_string(), "3");
    assert_eq!(Variant::new("a b").to_string(), "\"a b\"");
    assert_eq!(Variant::from_array([1i16, -1]).to_string(), "[1, -1]");
    assert_eq!(
        Variant::new(ByteString::from([0x01u8, 0xff])).to_string(),
        "h'01ff'"
    );
    assert_eq!(
        Variant::new(NodeId::string(3, "Motor")).to_string(),
        "ns=3;s=Motor"
    );
    assert_eq!(Variant::new(StatusCode::BAD).to_string(), "0x80000000");
    assert_eq!(
        Variant::new(Variant::new(true)).to_string(),
        "Variant(true)"
    );
}
