use std::env;

pub fn insta_snapshot<F: FnOnce()>(f: F) {
    let mut settings = insta::Settings::clone_current();
    let snapshot_path = env::current_dir().unwrap().join("./test/snapshots");
    settings.set_snapshot_path(snapshot_path);
    settings.bind(f);
}

pub fn chat_list_fixture() -> &'static str {
    return r#"
[
  {
    "id": 11,
    "title": "Holiday plans",
    "created_at": "2024-05-01T09:00:00",
    "last_interaction_at": "2024-05-03T18:30:00",
    "is_active": false,
    "model_key": "fast"
  },
  {
    "id": 12,
    "title": null,
    "created_at": "2024-05-02T10:15:00",
    "last_interaction_at": "2024-05-04T08:00:00",
    "is_active": true,
    "model_key": "smart"
  },
  {
    "id": 13,
    "title": "Homework",
    "created_at": "2024-04-28T12:00:00",
    "last_interaction_at": "2024-05-05T21:45:00",
    "is_active": false,
    "model_key": "fast"
  }
]
"#
    .trim();
}

pub fn history_fixture() -> &'static str {
    return r#"
[
  {"role": "bot", "content": "<think>The user wants a haiku.</think>Leaves drift on the pond"},
  {"role": "user", "content": "Write me a haiku"},
  {"role": "bot", "content": "Hello! How can I help?"},
  {"role": "user", "content": "Hi"}
]
"#
    .trim();
}
