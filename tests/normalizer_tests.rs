use chat_gateway::services::normalizer::{NO_MESSAGE_FOUND, UpstreamResponse, extract};
use serde_json::{Value, json};

fn with_output(output: Value) -> UpstreamResponse {
    UpstreamResponse::new(json!({
        "session_id": "s1",
        "outputs": [{ "inputs": { "input_value": "Hello" }, "outputs": [output] }]
    }))
}

#[test]
fn test_results_text_wins() {
    let resp = with_output(json!({
        "results": { "message": { "text": "A" } },
        "artifacts": { "message": "B" },
        "messages": [{ "message": "C" }]
    }));
    assert_eq!(extract(&resp), "A");
}

#[test]
fn test_artifacts_before_messages() {
    let resp = with_output(json!({
        "results": { "message": null },
        "artifacts": { "message": "B" },
        "messages": [{ "message": "C" }]
    }));
    assert_eq!(extract(&resp), "B");
}

#[test]
fn test_messages_log_last() {
    let resp = with_output(json!({
        "results": {},
        "artifacts": { "message": "" },
        "messages": [{ "message": "C" }]
    }));
    assert_eq!(extract(&resp), "C");
}

#[test]
fn test_default_when_nothing_populated() {
    let resp = with_output(json!({
        "results": { "message": { "text": "" } },
        "artifacts": null,
        "messages": []
    }));
    assert_eq!(extract(&resp), NO_MESSAGE_FOUND);
}

#[test]
fn test_malformed_shapes_never_fail() {
    let shapes = [
        json!(null),
        json!("just a string"),
        json!([]),
        json!({}),
        json!({ "outputs": null }),
        json!({ "outputs": [] }),
        json!({ "outputs": [{}] }),
        json!({ "outputs": [{ "outputs": [] }] }),
        json!({ "outputs": [{ "outputs": [null] }] }),
        json!({ "outputs": [{ "outputs": "oops" }] }),
        json!({ "outputs": { "0": { "outputs": [] } } }),
        json!({ "outputs": [{ "outputs": [{ "messages": [{ "message": 7 }] }] }] }),
    ];

    for shape in shapes {
        let message = extract(&UpstreamResponse::new(shape.clone()));
        assert!(!message.is_empty(), "empty message for {shape}");
        assert_eq!(message, NO_MESSAGE_FOUND, "unexpected hit for {shape}");
    }
}

#[test]
fn test_only_first_output_is_read() {
    let resp = UpstreamResponse::new(json!({
        "outputs": [
            { "outputs": [{ "results": {} }, { "results": { "message": { "text": "second" } } }] },
            { "outputs": [{ "results": { "message": { "text": "other run" } } }] }
        ]
    }));
    assert_eq!(extract(&resp), NO_MESSAGE_FOUND);
}

#[test]
fn test_session_id_read_from_top_level() {
    let resp = with_output(json!({}));
    assert_eq!(resp.session_id(), Some("s1"));
    assert_eq!(UpstreamResponse::new(json!({})).session_id(), None);
}
