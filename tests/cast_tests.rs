//! Casting and mapping tests exercised against hand-built raw responses,
//! no server required.

use http::{HeaderMap, StatusCode};
use sendgrid_marketing::contacts::{Contact, FieldValue, FileType, ImportStatus, JobState};
use sendgrid_marketing::fields::{FieldDefinition, FieldType};
use sendgrid_marketing::lists::List;
use sendgrid_marketing::senders::{Sender, Verified};
use sendgrid_marketing::{cast, Error, Outcome, RawResponse};
use std::collections::HashMap;

fn raw(status: u16, body: &str) -> RawResponse {
    RawResponse::new(
        StatusCode::from_u16(status).unwrap(),
        HeaderMap::new(),
        body,
    )
}

#[test]
fn single_casts_a_two_field_record() {
    let outcome: Outcome<List> =
        cast::single(raw(200, r#"{"id":"abc","name":"VIP"}"#)).unwrap();
    let list = outcome.record().unwrap();
    assert_eq!(list.id.as_deref(), Some("abc"));
    assert_eq!(list.name.as_deref(), Some("VIP"));
}

#[test]
fn list_preserves_order_and_metadata() {
    let body = r#"{"result":[{"id":"1"},{"id":"2"}],"_metadata":{"count":2}}"#;
    let page = cast::list::<List>(raw(200, body)).unwrap().record().unwrap();
    assert_eq!(page.result.len(), 2);
    assert_eq!(page.result[0].id.as_deref(), Some("1"));
    assert_eq!(page.result[1].id.as_deref(), Some("2"));
    assert_eq!(page.metadata.count, Some(2));
}

#[test]
fn list_without_metadata_yields_all_none_metadata() {
    let body = r#"{"result":[{"id":"1"}]}"#;
    let page = cast::list::<List>(raw(200, body)).unwrap().record().unwrap();
    assert_eq!(page.metadata.prev, None);
    assert_eq!(page.metadata.self_, None);
    assert_eq!(page.metadata.next, None);
    assert_eq!(page.metadata.count, None);
}

#[test]
fn list_accepts_results_key_and_null_result() {
    let page = cast::list::<List>(raw(200, r#"{"results":[{"id":"9"}]}"#))
        .unwrap()
        .record()
        .unwrap();
    assert_eq!(page.result.len(), 1);

    let page = cast::list::<List>(raw(200, r#"{"result":null}"#))
        .unwrap()
        .record()
        .unwrap();
    assert!(page.result.is_empty());
}

#[test]
fn list_takes_the_first_non_null_item_key() {
    // Both keys present, one null: the non-null one wins.
    let body = r#"{"result":null,"results":[{"id":"9"}]}"#;
    let page = cast::list::<List>(raw(200, body)).unwrap().record().unwrap();
    assert_eq!(page.result.len(), 1);
    assert_eq!(page.result[0].id.as_deref(), Some("9"));

    // Both non-null: `result` takes precedence.
    let body = r#"{"result":[{"id":"1"}],"results":[{"id":"2"}]}"#;
    let page = cast::list::<List>(raw(200, body)).unwrap().record().unwrap();
    assert_eq!(page.result.len(), 1);
    assert_eq!(page.result[0].id.as_deref(), Some("1"));
}

#[test]
fn provider_error_body_becomes_errors_outcome() {
    let body = r#"{"errors":[{"message":"Invalid request","field":"email"}]}"#;
    let outcome: Outcome<List> = cast::single(raw(400, body)).unwrap();
    let errors = outcome.errors().unwrap();
    assert_eq!(errors.status.as_u16(), 400);
    assert_eq!(errors.errors.len(), 1);
    assert_eq!(errors.errors[0].message, "Invalid request");
    assert_eq!(errors.errors[0].field.as_deref(), Some("email"));
    assert_eq!(errors.errors[0].error_id, None);
}

#[test]
fn empty_errors_array_is_not_an_error() {
    let body = r#"{"errors":[],"id":"abc"}"#;
    let decoded = cast::decode(&raw(200, body)).unwrap();
    assert!(decoded.is_ok());

    let outcome: Outcome<List> = cast::single(raw(200, body)).unwrap();
    assert_eq!(outcome.record().unwrap().id.as_deref(), Some("abc"));
}

#[test]
fn error_entry_count_matches_input() {
    let body = r#"{"errors":[
        {"message":"one","error_id":"E1"},
        {"message":"two"},
        {"message":"three","field":"name"}
    ]}"#;
    let decoded = cast::decode(&raw(400, body)).unwrap();
    let errors = decoded.unwrap_err();
    assert_eq!(errors.errors.len(), 3);
    assert_eq!(errors.errors[0].error_id.as_deref(), Some("E1"));
    assert_eq!(errors.errors[2].field.as_deref(), Some("name"));
}

#[test]
fn raw_list_casts_a_bare_array_body() {
    let body = r#"[{"id":1,"nickname":"main"},{"id":2,"nickname":"backup"}]"#;
    let senders = cast::raw_list::<Sender>(raw(200, body))
        .unwrap()
        .record()
        .unwrap();
    assert_eq!(senders.len(), 2);
    assert_eq!(senders[0].id, Some(1));
    assert_eq!(senders[1].nickname.as_deref(), Some("backup"));
}

#[test]
fn by_email_flattens_in_provider_order() {
    let body = r#"{"result":{
        "zed@example.com":{"contact":{"id":"c2","email":"zed@example.com"}},
        "amy@example.com":{"contact":{"id":"c1","email":"amy@example.com"}}
    }}"#;
    let contacts = cast::by_email::<Contact>(raw(200, body))
        .unwrap()
        .record()
        .unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].email.as_deref(), Some("zed@example.com"));
    assert_eq!(contacts[1].email.as_deref(), Some("amy@example.com"));
}

#[test]
fn by_email_skips_entries_without_a_contact() {
    let body = r#"{"result":{
        "gone@example.com":{"error":"not found"},
        "here@example.com":{"contact":{"id":"c1"}}
    }}"#;
    let contacts = cast::by_email::<Contact>(raw(200, body))
        .unwrap()
        .record()
        .unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].id.as_deref(), Some("c1"));
}

#[test]
fn empty_cast_accepts_no_body_and_reports_errors() {
    assert_eq!(
        cast::empty(raw(204, "")).unwrap(),
        Outcome::Record(())
    );

    let body = r#"{"errors":[{"message":"no such group"}]}"#;
    let outcome = cast::empty(raw(404, body)).unwrap();
    let errors = outcome.errors().unwrap();
    assert_eq!(errors.status.as_u16(), 404);
}

#[test]
fn empty_cast_tolerates_undecodable_body_on_success_status_only() {
    let outcome = cast::empty(raw(200, "<html>ok</html>")).unwrap();
    assert_eq!(outcome, Outcome::Record(()));

    let result = cast::empty(raw(502, "<html>Bad Gateway</html>"));
    match result {
        Err(Error::DeserializationFailed { status, .. }) => {
            assert_eq!(status.as_u16(), 502);
        }
        other => panic!("expected DeserializationFailed, got {:?}", other),
    }
}

#[test]
fn undecodable_body_is_a_deserialization_error() {
    let result = cast::single::<List>(raw(200, "not json"));
    match result {
        Err(Error::DeserializationFailed {
            raw_response,
            status,
            ..
        }) => {
            assert_eq!(raw_response, "not json");
            assert_eq!(status.as_u16(), 200);
        }
        other => panic!("expected DeserializationFailed, got {:?}", other),
    }
}

#[test]
fn unknown_keys_are_ignored() {
    let body = r#"{"id":"c1","email":"a@example.com","brand_new_field":true,"another":{"x":1}}"#;
    let contact: Contact = serde_json::from_str(body).unwrap();
    assert_eq!(contact.id.as_deref(), Some("c1"));
    assert_eq!(contact.email.as_deref(), Some("a@example.com"));
}

#[test]
fn unknown_enum_value_maps_to_none_not_an_error() {
    let field: FieldDefinition =
        serde_json::from_str(r#"{"id":"f1","name":"plan","field_type":"Blob"}"#).unwrap();
    assert_eq!(field.field_type, None);

    let field: FieldDefinition =
        serde_json::from_str(r#"{"id":"f1","name":"plan","field_type":"Text"}"#).unwrap();
    assert_eq!(field.field_type, Some(FieldType::Text));
}

#[test]
fn job_state_soft_enum_on_import_status() {
    let status: ImportStatus =
        serde_json::from_str(r#"{"id":"j1","status":"completed"}"#).unwrap();
    assert_eq!(status.status, Some(JobState::Completed));

    let status: ImportStatus =
        serde_json::from_str(r#"{"id":"j1","status":"half-done"}"#).unwrap();
    assert_eq!(status.status, None);
}

#[test]
fn field_value_union_matches_in_declaration_order() {
    let v: FieldValue = serde_json::from_str("42.5").unwrap();
    assert_eq!(v, FieldValue::Number(42.5));

    let v: FieldValue = serde_json::from_str(r#""gold""#).unwrap();
    assert_eq!(v, FieldValue::Text("gold".to_string()));
}

#[test]
fn verified_union_accepts_flag_and_detail_shapes() {
    let s: Sender = serde_json::from_str(r#"{"id":1,"verified":true}"#).unwrap();
    assert_eq!(s.verified, Some(Verified::Flag(true)));

    let s: Sender =
        serde_json::from_str(r#"{"id":1,"verified":{"status":false,"reason":"bounced"}}"#)
            .unwrap();
    match s.verified {
        Some(Verified::Detail(detail)) => {
            assert_eq!(detail.status, Some(false));
            assert_eq!(detail.reason.as_deref(), Some("bounced"));
        }
        other => panic!("expected Detail, got {:?}", other),
    }
}

#[test]
fn contact_round_trips_through_serialization() {
    let mut custom_fields = HashMap::new();
    custom_fields.insert("w1".to_string(), FieldValue::Number(4.5));
    custom_fields.insert("w2".to_string(), FieldValue::Text("gold".to_string()));

    let contact = Contact {
        id: Some("c1".to_string()),
        email: Some("a@example.com".to_string()),
        first_name: Some("Amy".to_string()),
        list_ids: Some(vec!["l1".to_string(), "l2".to_string()]),
        custom_fields: Some(custom_fields),
        ..Contact::default()
    };

    let json = serde_json::to_string(&contact).unwrap();
    let back: Contact = serde_json::from_str(&json).unwrap();
    assert_eq!(back, contact);
}

#[test]
fn serialization_omits_unset_fields() {
    let contact = Contact {
        email: Some("a@example.com".to_string()),
        ..Contact::default()
    };
    let value = serde_json::to_value(&contact).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 1);
    assert!(object.contains_key("email"));
    assert!(object.values().all(|v| !v.is_null()));
}

#[test]
fn file_type_sniffing() {
    assert_eq!(FileType::from_path("contacts.csv"), Some(FileType::Csv));
    assert_eq!(FileType::from_path("Contacts.CSV"), Some(FileType::Csv));
    assert_eq!(FileType::from_path("dump.json"), Some(FileType::Json));
    assert_eq!(FileType::from_path("dump.xlsx"), None);
    assert_eq!(FileType::from_path("noextension"), None);
}

#[test]
fn outcome_helpers() {
    let record: Outcome<u32> = Outcome::Record(7);
    assert!(!record.is_errors());
    assert_eq!(record.clone().into_result(), Ok(7));
    assert_eq!(record.map(|n| n * 2).record(), Some(14));
}
