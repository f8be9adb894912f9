use orgcard_canonical::{
    diagnose, normalize_document, normalize_person, validate_person, DiagnosticStatus, Email,
    ErrorKind, Job, Person, Phone,
};
use serde_json::json;

#[test]
fn aliases_collapse_to_canonical_fields() {
    let person = normalize_person(&json!({
        "id": "ines",
        "prenom": "Inès",
        "nachname": "Dubois",
        "titre": "Responsable",
        "courriel": "ines@acme.fr",
        "company": "Acme",
        "abteilung": "Vertrieb",
        "reportsTo": "paul",
        "telephoneNumber": "+33 1 23 45 67 89",
        "adresse": {"rue": "1 rue de Rivoli", "ville": "Paris", "pays": "FR"},
        "postes": [{"title": "Coach", "fte": 0.3, "dotted_line": "marc"}],
        "translations": {"title": {"en": "Manager"}},
        "favourite_colour": "blue"
    }))
    .unwrap();

    let mut expected = Person::new("ines");
    expected.name = Some("Inès".into());
    expected.surname = Some("Dubois".into());
    expected.title = Some("Responsable".into());
    expected.email = Some(Email::Single("ines@acme.fr".into()));
    expected.org = Some("Acme".into());
    expected.org_unit = Some("Vertrieb".into());
    expected.manager = Some("paul".into());
    expected.phone = vec![Phone::Bare("+33 1 23 45 67 89".into())];
    expected.address.street = Some("1 rue de Rivoli".into());
    expected.address.city = Some("Paris".into());
    expected.address.country = Some("FR".into());
    expected.jobs = vec![Job {
        role: Some("Coach".into()),
        fte: 0.3,
        dotted: vec!["marc".into()],
        ..Job::default()
    }];
    expected
        .i18n
        .entry("title".into())
        .or_default()
        .insert("en".into(), "Manager".into());

    assert_eq!(person, expected);
}

#[test]
fn normalized_person_serializes_with_canonical_keys_only() {
    let person = normalize_person(&json!({
        "uid": "a",
        "nombre": "Ana",
        "jefe": "b",
        "puestos": [{"title": "Lead", "jefe": "c", "primary": true}]
    }))
    .unwrap();

    assert_eq!(
        serde_json::to_value(&person).unwrap(),
        json!({
            "uid": "a",
            "name": "Ana",
            "manager": "b",
            "jobs": [{"role": "Lead", "fte": 1.0, "manager": "c", "primary": true}]
        })
    );
}

#[test]
fn alias_fallback_ignores_source_key_order() {
    let one = json!({"uid": "x", "courriel": "late@x.org", "correo": "early@x.org"});
    let two = json!({"uid": "x", "correo": "early@x.org", "courriel": "late@x.org"});
    let expected = Some(Email::Single("early@x.org".into()));
    assert_eq!(normalize_person(&one).unwrap().email, expected);
    assert_eq!(normalize_person(&two).unwrap().email, expected);
}

#[test]
fn only_uid_is_required() {
    assert!(normalize_person(&json!({"uid": "bare"})).is_ok());
    let errors = normalize_person(&json!({})).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), ErrorKind::MissingRequiredField);
}

#[test]
fn normalized_people_pass_revalidation_and_diagnostics_stay_separate() {
    let people = normalize_document(&json!([
        {"uid": "a", "i18n": {"title": {"en-GB": "Lead"}}},
        {"uid": "a"}
    ]))
    .unwrap();

    assert!(people.iter().all(|person| validate_person(person).is_empty()));

    let report = diagnose(&people);
    assert_eq!(report.status, DiagnosticStatus::Warnings);
    assert_eq!(report.metrics["DuplicateUid"], 1);
    assert_eq!(report.metrics["InvalidLanguageCode"], 1);
}
