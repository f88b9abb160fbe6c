use super::*;

const NOW: &str = "2026-10-16T09:30:00.000Z";

fn filled() -> ContactFields {
    ContactFields {
        name: Some("Ada".into()),
        email: Some("ada@example.com".into()),
        project_title: Some("Engine".into()),
        message: Some("Hello".into()),
    }
}

#[test]
fn complete_fields_build_submission() {
    let submission = ContactSubmission::from_fields(filled(), NOW).unwrap();
    assert_eq!(submission.name, "Ada");
    assert_eq!(submission.email, "ada@example.com");
    assert_eq!(submission.project_title, "Engine");
    assert_eq!(submission.message, "Hello");
    assert_eq!(submission.timestamp, NOW);
}

#[test]
fn empty_project_title_falls_back() {
    let fields = ContactFields { project_title: Some(String::new()), ..filled() };
    let submission = ContactSubmission::from_fields(fields, NOW).unwrap();
    assert_eq!(submission.project_title, "Not specified");
}

#[test]
fn missing_project_title_field_falls_back() {
    let fields = ContactFields { project_title: None, ..filled() };
    let submission = ContactSubmission::from_fields(fields, NOW).unwrap();
    assert_eq!(submission.project_title, PROJECT_TITLE_FALLBACK);
}

#[test]
fn empty_values_are_not_rejected() {
    let fields = ContactFields {
        name: Some(String::new()),
        email: Some(String::new()),
        project_title: None,
        message: Some(String::new()),
    };
    assert!(ContactSubmission::from_fields(fields, NOW).is_ok());
}

#[test]
fn missing_required_fields_are_reported_in_order() {
    let err = ContactSubmission::from_fields(ContactFields::default(), NOW).unwrap_err();
    assert_eq!(err, ContactError::MissingField("name"));

    let fields = ContactFields { email: None, ..filled() };
    assert_eq!(ContactSubmission::from_fields(fields, NOW).unwrap_err(), ContactError::MissingField("email"));

    let fields = ContactFields { message: None, ..filled() };
    let err = ContactSubmission::from_fields(fields, NOW).unwrap_err();
    assert_eq!(err.to_string(), "contact form has no message field");
}

#[test]
fn json_uses_camel_case_keys() {
    let json = ContactSubmission::from_fields(filled(), NOW).unwrap().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["projectTitle"], "Engine");
    assert_eq!(value["timestamp"], NOW);
    assert!(value.get("project_title").is_none());
}
