use super::*;
use pretty_assertions::assert_eq;

#[test]
fn desc_and_name_invert() {
    assert_eq!(desc("java.util.Map[][]"), Ok("[[Ljava/util/Map;".to_owned()));
    assert_eq!(name("[[Ljava/util/Map;"), Ok("java.util.Map[][]".to_owned()));
}

#[test]
fn check_reports_validity() {
    assert!(check("[I").is_ok());
    assert!(check("[").is_err());
    assert!(check("Ljava/lang/String").is_err());
}

#[test]
fn empty_values_of_platform_types() {
    assert_eq!(empty("int", None), Ok("0".to_owned()));
    assert_eq!(empty("java.lang.String", None), Ok("\"\"".to_owned()));
    assert_eq!(empty("String[]", None), Ok("java.lang.String[0]".to_owned()));
    assert_eq!(empty("java.util.List", None), Ok("[0 items]".to_owned()));
    assert_eq!(empty("java.util.Date", None), Ok("Date #0 {}".to_owned()));
    assert!(empty("com.acme.Missing", Some(1)).is_err());
}
