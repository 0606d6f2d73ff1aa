mod common;

use common::{empty_state, owner_state};
use lab_lib::console::protocol::{ClientCommand, ServerReply};
use lab_lib::console::{handle_command, run, AppState};
use serde_json::{json, Value};

/// Feeds `input` through the command loop and parses every reply line.
async fn replies(state: &AppState, input: &str) -> Vec<Value> {
    let mut output = Vec::new();
    run(state, input.as_bytes(), &mut output)
        .await
        .expect("loop runs to EOF");
    String::from_utf8(output)
        .expect("replies are UTF-8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("each reply is one JSON line"))
        .collect()
}

#[tokio::test]
async fn one_reply_per_non_blank_line() {
    let state = owner_state();
    let input = "\n{\"type\":\"current_user\"}\n   \nnot json\n{\"type\":\"list_fields\"}\n";
    let out = replies(&state, input).await;

    assert_eq!(out.len(), 3);
    assert_eq!(out[0]["type"], "current_user");
    assert_eq!(out[0]["user"]["username"], "root");
    assert_eq!(out[0]["user"]["role"], "Owner");
    assert!(out[0]["user"].get("password").is_none());
    assert_eq!(out[1]["type"], "error");
    assert_eq!(out[2], json!({"type": "fields", "rows": []}));
}

#[tokio::test]
async fn anonymous_commands_are_rejected() {
    let state = empty_state();
    let input = [
        json!({"type": "add_field", "form": {"charge": "1", "distance": "1", "angle": "0", "direction": "x"}}),
        json!({"type": "login", "username": "nobody", "password": "x"}),
    ]
    .iter()
    .map(Value::to_string)
    .collect::<Vec<_>>()
    .join("\n");

    let out = replies(&state, &input).await;
    assert_eq!(out[0]["type"], "error");
    assert_eq!(out[1]["type"], "error");
    assert!(out[1]["message"]
        .as_str()
        .unwrap()
        .contains("Invalid username or password."));
}

#[tokio::test]
async fn measurement_session_over_the_wire() {
    let state = owner_state();
    let input = [
        json!({"type": "add_field", "form": {"charge": "1", "distance": "1", "angle": "0", "direction": "x"}}),
        json!({"type": "add_force", "form": {"field_id": 0, "charge": "2"}}),
        json!({"type": "delete_force", "id": 0}),
        json!({"type": "delete_force", "id": 0}),
        json!({"type": "add_field", "form": {"charge": "1", "distance": "0", "angle": "0", "direction": "x"}}),
        json!({"type": "list_fields"}),
    ]
    .iter()
    .map(Value::to_string)
    .collect::<Vec<_>>()
    .join("\n");

    let out = replies(&state, &input).await;
    assert_eq!(out[0], json!({"type": "created", "id": 0}));
    assert_eq!(out[1], json!({"type": "created", "id": 0}));
    assert_eq!(out[2], json!({"type": "done"}));
    assert_eq!(out[3]["type"], "error");
    assert_eq!(out[4], json!({"type": "created", "id": 1}));

    let rows = out[5]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows[1]["result"].is_null());
}

#[test]
fn handle_command_maps_failures_to_error_replies() {
    let state = owner_state();
    let reply = handle_command(&state, ClientCommand::DeleteEmployee { id: 7 });
    assert!(matches!(reply, ServerReply::Error { .. }));

    let reply = handle_command(
        &state,
        ClientCommand::ChangePassword {
            password: "new".to_string(),
            confirmation: "new".to_string(),
        },
    );
    assert_eq!(reply, ServerReply::Done);

    let reply = handle_command(
        &state,
        ClientCommand::ListStaff {
            filter: String::new(),
        },
    );
    assert_eq!(reply, ServerReply::Staff { rows: Vec::new() });
}

#[tokio::test]
async fn undecodable_line_gets_an_error_reply_and_the_loop_continues() {
    let state = owner_state();
    let mut input = b"{\"type\":\"current_user\"}\n".to_vec();
    input.extend_from_slice(b"\xff\xfe garbage\n");
    input.extend_from_slice(b"{\"type\":\"list_fields\"}\n");

    let mut output = Vec::new();
    run(&state, input.as_slice(), &mut output)
        .await
        .expect("loop runs to EOF");
    let out: Vec<Value> = String::from_utf8(output)
        .expect("replies are UTF-8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("each reply is one JSON line"))
        .collect();

    assert_eq!(out.len(), 3);
    assert_eq!(out[0]["type"], "current_user");
    assert_eq!(out[1]["type"], "error");
    assert_eq!(out[2], json!({"type": "fields", "rows": []}));
}
