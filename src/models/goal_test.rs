use super::*;

#[test]
fn test_new_goal_starts_pending() {
    let goal = Goal::new("Run 5k");
    assert_eq!(goal.description(), "Run 5k");
    assert_eq!(goal.completed(), false);
}

#[test]
fn test_serde_round_trip() {
    let goals = vec![Goal::new("Run 5k"), Goal::new("Read").with_completed(true)];

    let raw = serde_json::to_string_pretty(&goals).unwrap();
    let parsed: Vec<Goal> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, goals);
}

#[test]
fn test_deserialize_known_shape() {
    let raw = r#"[
  {
    "description": "Run 5k",
    "completed": false
  },
  {
    "description": "Read",
    "completed": true
  }
]"#;

    let parsed: Vec<Goal> = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].description(), "Run 5k");
    assert_eq!(parsed[0].completed(), false);
    assert_eq!(parsed[1].description(), "Read");
    assert_eq!(parsed[1].completed(), true);
}
