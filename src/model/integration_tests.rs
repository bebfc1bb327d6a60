#[cfg(test)]
mod integration_tests {
    use crate::config::{load_config, CallbackIdStrategy};
    use crate::events::EventCallback;
    use crate::model::{ComponentDescriptor, ComponentNode, FieldKey, FieldPatch, RemoteModel};
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn document(value: Value) -> ComponentNode {
        serde_json::from_value(value).unwrap()
    }

    /// root → childA → childB, plus siblings, built the way a host ships a document
    fn nested_document() -> ComponentNode {
        document(json!({
            "type": "Container",
            "children": [
                { "compId": "c-nav", "compName": "nav", "type": "Button" },
                {
                    "compId": "c-a", "compName": "childA", "type": "Container",
                    "children": [
                        {
                            "compId": "c-b", "compName": "childB", "type": "Container",
                            "children": [
                                { "compId": "c-ok", "compName": "ok", "type": "Button" }
                            ]
                        },
                        { "compId": "c-label", "compName": "label", "type": "Text" }
                    ]
                }
            ]
        }))
    }

    #[test]
    fn test_three_level_lookup_and_merge() {
        let mut model = RemoteModel::with_document(nested_document());

        let child_b = model.comp("childB").unwrap();
        assert_eq!(child_b.id.as_deref(), Some("c-b"));
        assert_eq!(model.comp_id("ok"), Some("c-ok"));

        let outcome = model.set_layout("ok", json!({ "col": 2 }).as_object().cloned().unwrap());
        assert!(outcome.is_applied());
        assert_eq!(
            model.to_json().children[1].children[0].children[0].layout["col"],
            2
        );
    }

    #[test]
    fn test_components_by_type_over_five_components() {
        let model = RemoteModel::with_document(nested_document());

        let buttons: Vec<&str> = model
            .components_by_type("Button")
            .into_iter()
            .filter_map(|node| node.name.as_deref())
            .collect();

        assert_eq!(buttons, vec!["nav", "ok"]);
        assert_eq!(model.component_names(), vec!["nav", "ok", "label"]);
    }

    #[test]
    fn test_added_component_is_queryable_alongside_document() {
        let mut model = RemoteModel::with_document(nested_document());
        model
            .add_component("c-new", ComponentDescriptor::new("Button").with_name("apply"))
            .unwrap();

        let buttons: Vec<&str> = model
            .components_by_type("Button")
            .into_iter()
            .filter_map(|node| node.id.as_deref())
            .collect();
        assert_eq!(buttons, vec!["c-nav", "c-ok", "c-new"]);
    }

    #[test]
    fn test_event_round_trip_through_listener() {
        let notifications = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&notifications);
        let mut model = RemoteModel::with_document(nested_document()).with_update_listener(
            move |name: &str, field: FieldKey, partial: &FieldPatch| {
                sink.borrow_mut()
                    .push((name.to_string(), field, serde_json::to_value(partial).unwrap()));
            },
        );

        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&clicks);
        let registration = model.register_event(
            "widget-42",
            "ok",
            "click",
            EventCallback::handler(move |_: &Value| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        assert!(registration.outcome.is_applied());

        // The runtime would receive the notification, ship it, and later call back by id.
        let notifications = notifications.borrow();
        assert_eq!(notifications.len(), 1);
        let (name, field, partial) = &notifications[0];
        assert_eq!(name, "ok");
        assert_eq!(*field, FieldKey::Events);
        assert_eq!(partial["action"]["sourceId"], "c-ok");

        let callback_id = partial["behavior"]["params"]["callbackId"].as_str().unwrap();
        assert_eq!(callback_id, registration.callback_id);
        model.callback_by_id(callback_id).unwrap().handle(&json!({}));
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_to_json_reflects_later_mutations() {
        let mut model = RemoteModel::new();
        model.add_component("c1", ComponentDescriptor::new("Text")).unwrap();
        let _ = model.set_data("c1", json!({ "rows": [1, 2] }).as_object().cloned().unwrap());

        let value = model.to_json_value().unwrap();
        let reloaded: ComponentNode = serde_json::from_value(value).unwrap();
        assert_eq!(&reloaded, model.to_json());
    }

    #[test]
    fn test_model_from_config_file_with_document() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("doc.yaml"),
            r#"
type: Container
children:
  - compId: c-1
    compName: submit
    type: Button
"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("model.yaml"),
            "callback_ids: sequential\ndocument: doc.yaml\n",
        )
        .unwrap();

        let cfg = load_config(dir.path().join("model.yaml")).unwrap();
        assert_eq!(cfg.callback_ids, CallbackIdStrategy::Sequential);

        let mut model = RemoteModel::from_config(&cfg).unwrap();
        assert_eq!(model.kind("submit"), Some("Button"));

        let registration = model.register_event("w", "submit", "click", EventCallback::handler(|_: &Value| {}));
        assert_eq!(registration.callback_id, "00000000-0000-0000-0000-000000000001");
    }
}
