use super::*;

#[test]
fn url_template_interpolates_the_date() {
    let calendar = HttpCalendar::new(
        "https://calendar.local/check?date={date}",
        Duration::from_secs(5),
    );
    let date = NaiveDate::from_ymd_opt(2021, 12, 16).unwrap();

    assert_eq!(
        calendar.url_for(date),
        "https://calendar.local/check?date=2021-12-16"
    );
}

#[test]
fn parse_accepts_bare_booleans() {
    assert!(parse_body("true").unwrap());
    assert!(!parse_body("false").unwrap());
    assert!(!parse_body("  false\n").unwrap());
}

#[test]
fn parse_accepts_object_payloads() {
    assert!(parse_body(r#"{"non_working_day": true}"#).unwrap());
    assert!(!parse_body(r#"{"non_working_day": false, "label": "weekday"}"#).unwrap());
}

#[test]
fn parse_rejects_other_shapes() {
    assert!(matches!(
        parse_body("\"yes\""),
        Err(OracleError::Malformed(_))
    ));
    assert!(matches!(
        parse_body(r#"{"holiday": true}"#),
        Err(OracleError::Malformed(_))
    ));
    assert!(matches!(parse_body("not json"), Err(OracleError::Malformed(_))));
}
