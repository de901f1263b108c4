use codebook_domain::{ConfigFlags, DomainError, HttpMethod, Permission, Status};
use serde_json::json;

#[test]
fn enumerations_serialize_as_codes() {
    assert_eq!(serde_json::to_value(Status::Cancelled).unwrap(), json!(3));
    assert_eq!(serde_json::to_value(HttpMethod::Patch).unwrap(), json!(5));
    assert_eq!(serde_json::from_value::<Status>(json!(1)).unwrap(), Status::Approved);
}

#[test]
fn unknown_codes_fail_to_deserialize() {
    let err = serde_json::from_value::<HttpMethod>(json!(0)).unwrap_err();
    assert!(err.to_string().contains("Unknown HttpMethod code 0"), "{err}");
}

#[test]
fn flag_sets_serialize_as_bits() {
    let set = Permission::READ | Permission::EXECUTE;
    assert_eq!(serde_json::to_value(set).unwrap(), json!(5));
}

#[test]
fn flag_sets_accept_bits_labels_and_numeric_strings() {
    let expected = ConfigFlags::ENABLE_CACHE | ConfigFlags::ENABLE_DEBUG;
    assert_eq!(serde_json::from_value::<ConfigFlags>(json!(12)).unwrap(), expected);
    assert_eq!(
        serde_json::from_value::<ConfigFlags>(json!("EnableCache,EnableDebug")).unwrap(),
        expected
    );
    assert_eq!(serde_json::from_value::<ConfigFlags>(json!("12")).unwrap(), expected);
    assert_eq!(serde_json::from_value::<ConfigFlags>(json!("None")).unwrap(), ConfigFlags::empty());
}

#[test]
fn flag_sets_keep_unknown_bits_from_numbers() {
    let set = serde_json::from_value::<Permission>(json!(0b1_0001)).unwrap();
    assert_eq!(set.bits(), 0b1_0001);
}

#[test]
fn flag_sets_reject_out_of_range_and_unknown_labels() {
    assert!(serde_json::from_value::<Permission>(json!(256)).is_err());
    assert!(serde_json::from_value::<Permission>(json!(-1)).is_err());

    let err = serde_json::from_value::<Permission>(json!("Read|Delete")).unwrap_err();
    assert!(err.to_string().contains("Unknown Permission flag 'Delete'"), "{err}");
}

#[test]
fn domain_error_carries_context() {
    use codebook_domain::DomainErrorExt;

    let err = Status::try_from(9_u8).context("loading request 42").unwrap_err();
    assert_eq!(err.to_string(), "Unknown Status code 9 (loading request 42)");
    assert!(matches!(err, DomainError::UnknownCode { code: 9, .. }));
}
