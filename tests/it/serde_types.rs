use longbits::LongBits;

#[test]
fn round_trip() {
    let bits = LongBits::new(1, u32::MAX);
    let json = serde_json::to_string(&bits).unwrap();
    assert_eq!(json, r#"{"low":1,"high":4294967295}"#);
    assert_eq!(serde_json::from_str::<LongBits>(&json).unwrap(), bits);
}
