use orgcard_canonical::{normalize_document, ErrorKind};
use orgcard_core::{
    document_to_vcard, expand, people_to_vcard, vcard_to_document, vcard_to_people,
    ConversionError, ConvertOptions,
};
use orgcard_vcard::ReadMode;
use serde_json::json;

fn multilingual_document() -> serde_json::Value {
    json!({
        "people": [
            {
                "uid": "jordan",
                "nombre": "Jordan",
                "apellido": "Rivera",
                "title": "Staff Engineer",
                "correo": ["jordan@acme.org", "jr@personal.example"],
                "organisation": "Acme",
                "ou": "Platform",
                "jefe": "kim",
                "telefono": [{"type": "cell", "number": "+1 555 0100"}],
                "direccion": {"calle": "1 Main St", "ciudad": "Springfield", "zip": 12345},
                "jobs": [
                    {"role": "Tech Lead", "fte": 0.8, "manager": "kim", "org": "Acme"},
                    {"title": "Mentor", "fte": 0.2, "jefe": "ana", "dotted": ["lee"]}
                ]
            },
            {
                "id": "kim",
                "givenName": "Kim",
                "sn": "Park",
                "mail": "kim@acme.org",
                "o": "Acme"
            }
        ]
    })
}

#[test]
fn document_to_vcard_expands_multi_hat_people() {
    let text = document_to_vcard(&multilingual_document()).unwrap();

    let uids: Vec<&str> = text
        .lines()
        .filter_map(|line| line.strip_prefix("UID:"))
        .collect();
    assert_eq!(uids, vec!["jordan", "jordan-job-0", "jordan-job-1", "kim"]);
    assert!(text.contains("N:Rivera;Jordan;;;\r\n"));
    assert!(text.contains("ORG:Acme;Platform\r\n"));
    assert!(text.contains("TEL;TYPE=cell:+1 555 0100\r\n"));
    assert!(text.contains("ADR;TYPE=work:;;1 Main St;Springfield;;12345;\r\n"));
    assert!(text.contains("TITLE:Mentor\r\n"));
    assert!(text.contains("NOTE:Manager: ana\r\n"));
    assert!(text.contains("END:VCARD\r\n\r\nBEGIN:VCARD\r\n"));
}

#[test]
fn round_trip_through_vcard_loses_jobs() {
    let people = normalize_document(&multilingual_document()).unwrap();
    let text = people_to_vcard(&people);
    let back = vcard_to_people(&text, &ConvertOptions::default()).unwrap();

    assert_eq!(back.len(), 4);
    assert!(back.iter().all(|person| person.jobs.is_empty()));
    assert_eq!(back[0].uid, "jordan");
    assert_eq!(back[0].manager.as_deref(), Some("kim"));
    assert_eq!(back[1].title.as_deref(), Some("Tech Lead"));
    assert_eq!(back[2].uid, "jordan-job-1");
    assert_eq!(back[2].email, people[0].email);
    assert_eq!(back[3].name.as_deref(), Some("Kim"));
}

#[test]
fn untitled_primary_job_is_not_duplicated() {
    let doc = json!([{
        "uid": "sam",
        "jobs": [
            {"role": "Lead", "primary": true},
            {"role": "Advisor", "fte": 0.1}
        ]
    }]);
    let people = normalize_document(&doc).unwrap();
    let records = expand(&people[0]);
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].uid.as_deref(), Some("sam-job-1"));
}

#[test]
fn validation_failures_are_reported_together() {
    let doc = json!({"people": [
        {"name": "No Id"},
        {"uid": "x", "jobs": [{"fte": 1.5}]},
        {"uid": "y", "email": {"work": "y@x.org"}}
    ]});
    let errors = document_to_vcard(&doc).unwrap_err();
    let kinds: Vec<ErrorKind> = errors.iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ErrorKind::MissingRequiredField,
            ErrorKind::OutOfRangeValue,
            ErrorKind::TypeMismatch
        ]
    );
    assert_eq!(errors[1].path(), "people[1].jobs[0].fte");

    let wrapped = ConversionError::from(errors);
    assert!(matches!(wrapped, ConversionError::Validation(ref all) if all.len() == 3));
}

#[test]
fn fte_within_range_is_accepted() {
    let doc = json!([{"uid": "x", "jobs": [{"fte": 0.8}]}]);
    assert!(document_to_vcard(&doc).is_ok());
}

#[test]
fn malformed_vcard_strict_and_permissive() {
    let text = "BEGIN:VCARD\r\nUID:a\r\nEND:VCARD\r\n\r\nBEGIN:VCARD\r\nUID:b\r\n";

    let err = vcard_to_people(text, &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, ConversionError::Codec(ref e) if e.kind() == ErrorKind::MalformedDocument));

    let options = ConvertOptions {
        read_mode: ReadMode::Permissive,
    };
    let document = vcard_to_document(text, &options).unwrap();
    assert_eq!(document, json!({"people": [{"uid": "a"}]}));
}

#[test]
fn conversion_is_deterministic() {
    let doc = multilingual_document();
    assert_eq!(
        document_to_vcard(&doc).unwrap(),
        document_to_vcard(&doc).unwrap()
    );
}

#[test]
fn phone_type_with_line_breaks_stays_on_one_line() {
    let doc = json!([{
        "uid": "a",
        "phone": [{"type": "cell\nEND:VCARD\nBEGIN:VCARD\nUID:evil", "number": "1"}]
    }]);
    let text = document_to_vcard(&doc).unwrap();
    assert!(!text.contains("\nEND:VCARD\nBEGIN"));

    let back = vcard_to_people(&text, &ConvertOptions::default()).unwrap();
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].uid, "a");
    assert_eq!(back[0].phone[0].number(), "1");
    assert_eq!(
        back[0].phone[0].kind(),
        Some("cell END:VCARD BEGIN:VCARD UID:evil")
    );
}

#[test]
fn empty_people_key_converts_to_no_records() {
    assert_eq!(document_to_vcard(&json!({"people": null})).unwrap(), "");
}
