use erudio::application::services::extract_topic;

#[test]
fn given_trailing_marker_when_extracting_then_splits_body_and_topic() {
    let reply = extract_topic("Plants convert light.\nTOPIC_NAME: Photosynthesis");

    assert_eq!(reply.clean_text, "Plants convert light.");
    assert_eq!(reply.topic.as_deref(), Some("Photosynthesis"));
}

#[test]
fn given_no_marker_when_extracting_then_returns_trimmed_input() {
    let reply = extract_topic("  \n- bullet one\n- bullet two\n\n");

    assert_eq!(reply.clean_text, "- bullet one\n- bullet two");
    assert!(reply.topic.is_none());
}

#[test]
fn given_multiline_trailer_when_extracting_then_everything_after_marker_is_removed() {
    let reply = extract_topic("Body text\nTOPIC_NAME: Cells\nand more\n");

    assert_eq!(reply.clean_text, "Body text");
    assert_eq!(reply.topic.as_deref(), Some("Cells\nand more"));
}

#[test]
fn given_marker_mid_line_when_extracting_then_marker_is_still_found() {
    let reply = extract_topic("Summary done. TOPIC_NAME:Gravity ");

    assert_eq!(reply.clean_text, "Summary done.");
    assert_eq!(reply.topic.as_deref(), Some("Gravity"));
}

#[test]
fn given_lowercase_marker_when_extracting_then_it_is_not_matched() {
    let reply = extract_topic("Body\ntopic_name: Gravity");

    assert_eq!(reply.clean_text, "Body\ntopic_name: Gravity");
    assert!(reply.topic.is_none());
}

#[test]
fn given_empty_trailer_when_extracting_then_topic_is_none() {
    let reply = extract_topic("Answer\nTOPIC_NAME:   \n");

    assert_eq!(reply.clean_text, "Answer");
    assert!(reply.topic.is_none());
}

#[test]
fn given_body_with_inner_whitespace_when_extracting_then_body_is_kept_verbatim() {
    let reply = extract_topic("\n  Line one\n\n  Line two  \nTOPIC_NAME: Lines");

    assert_eq!(reply.clean_text, "Line one\n\n  Line two");
}

#[test]
fn given_two_markers_when_extracting_then_first_one_wins() {
    let reply = extract_topic("Intro\nTOPIC_NAME: Atoms\nTOPIC_NAME: Molecules");

    assert_eq!(reply.clean_text, "Intro");
    assert_eq!(reply.topic.as_deref(), Some("Atoms\nTOPIC_NAME: Molecules"));
}
