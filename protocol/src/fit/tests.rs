use crate::{FitResponse, ParseError, RankedEntry, parse_fit_request};

#[test]
fn test_parse_fit_request() {
    let body = r#"{"mypoke": ["Charizard", ""], "oppoke": ["Blastoise"]}"#;
    let request = parse_fit_request(body).unwrap();

    assert_eq!(request.mypoke, vec!["Charizard".to_string(), String::new()]);
    assert_eq!(request.oppoke, vec!["Blastoise".to_string()]);
}

#[test]
fn test_parse_null_slot_is_blank() {
    let body = r#"{"mypoke": [null, "Pikachu"], "oppoke": []}"#;
    let request = parse_fit_request(body).unwrap();

    assert_eq!(request.mypoke, vec![String::new(), "Pikachu".to_string()]);
    assert!(request.oppoke.is_empty());
}

#[test]
fn test_parse_missing_field() {
    let body = r#"{"mypoke": ["Charizard"]}"#;
    let result = parse_fit_request(body);

    assert!(matches!(result, Err(ParseError::MissingField(field)) if field == "oppoke"));
}

#[test]
fn test_parse_wrong_element_type() {
    let body = r#"{"mypoke": [1], "oppoke": []}"#;
    let result = parse_fit_request(body);

    assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
}

#[test]
fn test_parse_not_an_object() {
    assert!(matches!(
        parse_fit_request("[]"),
        Err(ParseError::InvalidFormat(_))
    ));
    assert!(matches!(
        parse_fit_request("{not json"),
        Err(ParseError::InvalidFormat(_))
    ));
}

#[test]
fn test_parse_empty() {
    assert!(matches!(parse_fit_request("  "), Err(ParseError::EmptyMessage)));
}

#[test]
fn test_response_uses_capitalised_evaluation_key() {
    let response = FitResponse {
        mypoke: vec![RankedEntry {
            index: 0,
            name: "Charizard".into(),
            evaluation: 42,
            rank: 1,
        }],
        oppoke: Vec::new(),
    };

    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["mypoke"][0]["Evaluation"], 42);
    assert_eq!(json["mypoke"][0]["rank"], 1);
    assert!(json["mypoke"][0].get("evaluation").is_none());
    assert_eq!(json["oppoke"], serde_json::json!([]));
}
