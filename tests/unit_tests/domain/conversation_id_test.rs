use erudio::domain::ConversationId;

#[test]
fn given_uuid_string_when_parsing_then_round_trips_through_display() {
    let id = ConversationId::new();

    let parsed: ConversationId = id.to_string().parse().expect("valid id");

    assert_eq!(parsed, id);
}

#[test]
fn given_garbage_when_parsing_then_returns_error() {
    assert!("not-a-conversation".parse::<ConversationId>().is_err());
    assert!("".parse::<ConversationId>().is_err());
}
