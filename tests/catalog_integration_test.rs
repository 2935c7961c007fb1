use restdoc_catalog::adapters::{service_file, SERVICES_FILE};
use restdoc_catalog::config::toml_config::TomlConfig;
use restdoc_catalog::{
    CatalogEngine, CatalogError, JsonMarshaller, LocalCatalogPipeline, LocalStorage, Service, Uri,
};
use std::path::Path;
use tempfile::TempDir;

struct Workspace {
    _dir: TempDir,
    input: String,
    output: String,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("web");
        let output = dir.path().join("restdoclet");
        std::fs::create_dir_all(&input).unwrap();
        Self {
            input: input.to_str().unwrap().replace('\\', "/"),
            output: output.to_str().unwrap().replace('\\', "/"),
            _dir: dir,
        }
    }

    fn add_controller(&self, file: &str, json: serde_json::Value) {
        let path = Path::new(&self.input).join(file);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, serde_json::to_vec_pretty(&json).unwrap()).unwrap();
    }

    fn config(&self, extra: &str) -> TomlConfig {
        let content = format!(
            r#"
[source]
input_path = "{}"

[output]
output_path = "{}"

{}
"#,
            self.input, self.output, extra
        );
        TomlConfig::from_toml_str(&content).unwrap()
    }

    fn reader(&self) -> JsonMarshaller<LocalStorage> {
        JsonMarshaller::new(LocalStorage::new(&self.output))
    }

    fn services_file_exists(&self) -> bool {
        Path::new(&self.output).join(SERVICES_FILE).exists()
    }
}

fn controller(type_name: &str, methods: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "type": type_name,
        "javadoc": format!("{} documentation.", type_name),
        "methods": methods,
    })
}

fn run(config: TomlConfig) -> restdoc_catalog::Result<Option<restdoc_catalog::BuildReport>> {
    let pipeline = LocalCatalogPipeline::local(config)?;
    CatalogEngine::new(pipeline).run()
}

fn method_names(service: &Service) -> Vec<&str> {
    service
        .controller
        .methods
        .iter()
        .map(|m| m.name.as_str())
        .collect()
}

#[test]
fn test_excluded_method_is_left_out_of_its_service() {
    let ws = Workspace::new();
    ws.add_controller(
        "OrderController.controller.json",
        controller(
            "com.shop.OrderController",
            serde_json::json!([
                {"name": "get", "javadoc": "Gets orders.", "uris": [{"uri": "/orders"}]},
                {"name": "list", "uris": [{"uri": "/orders"}]}
            ]),
        ),
    );

    let report = run(ws.config("[filter]\nexcludes = [\"LIST\"]")).unwrap().unwrap();

    assert_eq!(report.services, 1);
    let service = ws.reader().unmarshal_service(&service_file(1)).unwrap();
    assert_eq!(service.identifier, 1);
    assert_eq!(service.uris, vec![Uri::new("/orders")]);
    assert_eq!(method_names(&service), vec!["get"]);
    assert_eq!(service.controller.methods[0].javadoc, "Gets orders.");
}

#[test]
fn test_two_controllers_give_two_summaries() {
    let ws = Workspace::new();
    ws.add_controller(
        "a/A.controller.json",
        controller("A", serde_json::json!([{"name": "a", "uris": [{"uri": "/a"}]}])),
    );
    ws.add_controller(
        "b/B.controller.json",
        controller("B", serde_json::json!([{"name": "b", "uris": [{"uri": "/b"}]}])),
    );

    let report = run(ws.config("")).unwrap().unwrap();
    assert_eq!(report.controllers, 2);
    assert!(report.output_path.ends_with("services.json"));

    let catalog = ws.reader().unmarshal_services(SERVICES_FILE).unwrap();
    assert_eq!(catalog.controllers.len(), 2);
    for type_name in ["A", "B"] {
        let summary = catalog.controller(type_name).unwrap();
        assert_eq!(summary.services.len(), 1);
        assert_eq!(summary.services[0].controller.type_name, type_name);
        assert_eq!(
            summary.javadoc.as_deref(),
            Some(format!("{} documentation.", type_name).as_str())
        );
    }
}

#[test]
fn test_catalog_round_trip_matches_persisted_services() {
    let ws = Workspace::new();
    ws.add_controller(
        "OrderController.controller.json",
        controller(
            "OrderController",
            serde_json::json!([
                {"name": "get", "uris": [{"uri": "/orders", "verb": "GET"}],
                 "params": [{"name": "page"}], "returns": {"type": "OrderList"}},
                {"name": "show", "uris": [{"uri": "/orders/{id}", "verb": "GET"}]},
                {"name": "helper"}
            ]),
        ),
    );

    run(ws.config("")).unwrap();

    let reader = ws.reader();
    let catalog = reader.unmarshal_services(SERVICES_FILE).unwrap();
    let summary = catalog.controller("OrderController").unwrap();
    for service in &summary.services {
        let persisted = reader.unmarshal_service(&service_file(service.identifier)).unwrap();
        assert_eq!(&persisted, service);
    }
    assert_eq!(
        summary.services[0].controller.methods[0].returns,
        Some(serde_json::json!({"type": "OrderList"}))
    );
}

#[test]
fn test_duplicate_controller_is_ingested_once() {
    let ws = Workspace::new();
    let record = controller(
        "OrderController",
        serde_json::json!([{"name": "get", "uris": [{"uri": "/orders"}]}]),
    );
    ws.add_controller("first/OrderController.controller.json", record.clone());
    ws.add_controller("second/OrderController.controller.json", record);

    let report = run(ws.config("")).unwrap().unwrap();

    assert_eq!(report.controllers, 1);
    assert_eq!(report.services, 1);
    let service = ws.reader().unmarshal_service(&service_file(1)).unwrap();
    assert_eq!(method_names(&service), vec!["get"]);
    assert!(!Path::new(&ws.output).join(service_file(2)).exists());
}

#[test]
fn test_no_controllers_is_a_precondition_failure() {
    let ws = Workspace::new();

    let err = run(ws.config("")).unwrap_err();

    assert!(matches!(err, CatalogError::NoControllerDocs { .. }));
    assert!(!Path::new(&ws.output).exists());
}

#[test]
fn test_identifiers_are_gapless_and_uri_order_is_significant() {
    let ws = Workspace::new();
    ws.add_controller(
        "SearchController.controller.json",
        controller(
            "SearchController",
            serde_json::json!([
                {"name": "forward", "uris": [{"uri": "/a"}, {"uri": "/b"}]},
                {"name": "backward", "uris": [{"uri": "/b"}, {"uri": "/a"}]},
                {"name": "again", "uris": [{"uri": "/a"}, {"uri": "/b"}]},
                {"name": "single", "uris": [{"uri": "/c"}]}
            ]),
        ),
    );

    let report = run(ws.config("")).unwrap().unwrap();
    assert_eq!(report.services, 3);

    let catalog = ws.reader().unmarshal_services(SERVICES_FILE).unwrap();
    let mut services = catalog.controllers[0].services.clone();
    services.sort_by_key(|s| s.identifier);
    let ids: Vec<u32> = services.iter().map(|s| s.identifier).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let merged = services
        .iter()
        .find(|s| s.uris == vec![Uri::new("/a"), Uri::new("/b")])
        .unwrap();
    assert_eq!(method_names(merged), vec!["forward", "again"]);
    let reversed = services
        .iter()
        .find(|s| s.uris == vec![Uri::new("/b"), Uri::new("/a")])
        .unwrap();
    assert_eq!(method_names(reversed), vec!["backward"]);
}

#[test]
fn test_invalid_controller_aborts_before_catalog_is_written() {
    let ws = Workspace::new();
    ws.add_controller(
        "Undocumented.controller.json",
        serde_json::json!({
            "type": "Undocumented",
            "methods": [{"name": "get", "uris": [{"uri": "/x"}]}]
        }),
    );

    let err = run(ws.config("")).unwrap_err();

    assert!(matches!(err, CatalogError::InvalidService { identifier: 1, .. }));
    assert!(!ws.services_file_exists());
}

#[test]
fn test_shared_uri_across_controllers() {
    let ws = Workspace::new();
    ws.add_controller(
        "A.controller.json",
        controller("A", serde_json::json!([{"name": "fromA", "uris": [{"uri": "/shared"}]}])),
    );
    ws.add_controller(
        "B.controller.json",
        controller("B", serde_json::json!([{"name": "fromB", "uris": [{"uri": "/shared"}]}])),
    );

    let err = run(ws.config("")).unwrap_err();
    assert!(matches!(err, CatalogError::UriConflict { .. }));
    assert!(!ws.services_file_exists());

    run(ws.config("[error_handling]\non_uri_conflict = \"last_wins\""))
        .unwrap()
        .unwrap();
    let catalog = ws.reader().unmarshal_services(SERVICES_FILE).unwrap();
    assert_eq!(catalog.controllers.len(), 1);
    assert_eq!(catalog.controllers[0].type_name, "B");
    assert_eq!(
        method_names(&catalog.controllers[0].services[0]),
        vec!["fromA", "fromB"]
    );
}

#[test]
fn test_non_war_packaging_is_skipped() {
    let ws = Workspace::new();
    ws.add_controller(
        "A.controller.json",
        controller("A", serde_json::json!([{"name": "a", "uris": [{"uri": "/a"}]}])),
    );

    let outcome = run(ws.config("[build]\npackaging = \"jar\"")).unwrap();

    assert!(outcome.is_none());
    assert!(!Path::new(&ws.output).exists());
}

#[test]
fn test_root_discovery_scans_sibling_modules() {
    let ws = Workspace::new();
    let parent = Path::new(&ws.input);
    let module = parent.join("web-module");
    std::fs::create_dir_all(&module).unwrap();
    std::fs::write(parent.join("pom.xml"), "<project/>").unwrap();
    std::fs::write(module.join("pom.xml"), "<project/>").unwrap();
    ws.add_controller(
        "api-module/target/A.controller.json",
        controller("A", serde_json::json!([{"name": "a", "uris": [{"uri": "/a"}]}])),
    );

    let content = format!(
        r#"
[source]
input_path = "{}"
discover_root = true

[output]
output_path = "{}"
"#,
        module.to_str().unwrap().replace('\\', "/"),
        ws.output
    );
    let config = TomlConfig::from_toml_str(&content).unwrap();

    let report = run(config).unwrap().unwrap();
    assert_eq!(report.services, 1);
}

#[test]
fn test_rebuild_ignores_previous_output_under_input() {
    let ws = Workspace::new();
    ws.add_controller(
        "A.json",
        controller("A", serde_json::json!([{"name": "a", "uris": [{"uri": "/a"}]}])),
    );
    let output = format!("{}/target/restdoclet", ws.input);
    let content = format!(
        r#"
[source]
input_path = "{}"
controller_suffix = ".json"

[output]
output_path = "{}"
"#,
        ws.input, output
    );

    let first = run(TomlConfig::from_toml_str(&content).unwrap()).unwrap().unwrap();
    let second = run(TomlConfig::from_toml_str(&content).unwrap()).unwrap().unwrap();

    assert_eq!(first.services, 1);
    assert_eq!(second.controllers, 1);
    assert_eq!(second.services, 1);
    assert!(Path::new(&output).join(service_file(1)).exists());
}
