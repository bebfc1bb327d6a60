/// Type given to the implicit root when no initial document is supplied
pub const DEFAULT_ROOT_TYPE: &str = "Container";

/// `action.type` of every binding recorded by `register_event`
pub const ACTION_KIND_COMPONENT: &str = "comp";
/// `behavior.type` of every binding recorded by `register_event`
pub const BEHAVIOR_KIND_WIDGET: &str = "widget";
/// `behavior.name` the runtime dispatches on to run a stored callback
pub const BEHAVIOR_RUN_CODE: &str = "runCode";

/// Extensions accepted for configuration files
pub const CONFIG_EXTENSIONS: &str = "yaml, yml, toml, json";
/// Extensions accepted for component documents
pub const DOCUMENT_EXTENSIONS: &str = "json, yaml, yml";
