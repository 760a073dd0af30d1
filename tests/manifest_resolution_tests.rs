//! Resolution of the fixture manifests through the public API.

mod common;

use common::{fixture_path, fixture_resolver, FIXTURE_JSON, FIXTURE_YAML};
use di_inspect::{CheckReport, Manifest, ManifestIntrospector, ResolutionReport};
use di_resolver::{DependencyResolver, NotInstantiableReason, ResolveError};
use di_types::{BindingDescription, Value};
use serde_json::json;

#[test]
fn test_mailer_constructor_from_yaml() {
    let resolver = fixture_resolver(FIXTURE_YAML);
    let bindings = resolver.resolve_constructor("App\\Mailer").unwrap();
    assert_eq!(
        bindings,
        vec![
            BindingDescription::class("Psr\\Log\\LoggerInterface", false),
            BindingDescription::value(json!(5)),
            BindingDescription::invalid(),
        ]
    );
}

#[test]
fn test_yaml_and_json_manifests_agree() {
    let yaml = fixture_resolver(FIXTURE_YAML);
    let json = fixture_resolver(FIXTURE_JSON);
    assert_eq!(
        yaml.resolve_constructor("App\\Mailer").unwrap(),
        json.resolve_constructor("App\\Mailer").unwrap()
    );

    let yaml_intdiv = yaml.introspector().callable("intdiv").unwrap();
    let json_intdiv = json.introspector().callable("intdiv").unwrap();
    assert_eq!(
        yaml.resolve_callable(yaml_intdiv),
        json.resolve_callable(json_intdiv)
    );
}

#[test]
fn test_nullable_parameters_resolve_to_values() {
    let resolver = fixture_resolver(FIXTURE_YAML);
    let bindings = resolver.resolve_constructor("App\\ReportBuilder").unwrap();
    assert_eq!(
        bindings,
        vec![
            BindingDescription::value(Value::Null),
            BindingDescription::value(json!("system")),
            BindingDescription::value(json!("pdf")),
        ]
    );
}

#[test]
fn test_opaque_constructor_yields_only_values() {
    let resolver = fixture_resolver(FIXTURE_YAML);
    let bindings = resolver.resolve_constructor("ArrayObject").unwrap();
    assert_eq!(
        bindings,
        vec![
            BindingDescription::value(json!([])),
            BindingDescription::value(Value::Null),
        ]
    );
}

#[test]
fn test_opaque_callable() {
    let resolver = fixture_resolver(FIXTURE_YAML);
    let intdiv = resolver.introspector().callable("intdiv").unwrap();
    assert_eq!(
        resolver.resolve_callable(intdiv),
        vec![BindingDescription::value(Value::Null)]
    );
}

#[test]
fn test_callable_with_class_dependency() {
    let resolver = fixture_resolver(FIXTURE_YAML);
    let handler = resolver.introspector().callable("handle_request").unwrap();
    assert_eq!(
        resolver.resolve_callable(handler),
        vec![
            BindingDescription::class("App\\Http\\Request", false),
            BindingDescription::value(json!(false)),
        ]
    );
}

#[test]
fn test_type_without_constructor() {
    let resolver = fixture_resolver(FIXTURE_YAML);
    assert!(resolver.resolve_constructor("App\\Clock").unwrap().is_empty());
    assert!(resolver.resolve_constructor("\\App\\Clock").unwrap().is_empty());
}

#[test]
fn test_non_instantiable_types() {
    let resolver = fixture_resolver(FIXTURE_YAML);
    let cases = [
        ("App\\Repository", NotInstantiableReason::Interface),
        ("App\\BaseHandler", NotInstantiableReason::Abstract),
        ("App\\Registry", NotInstantiableReason::InaccessibleConstructor),
    ];
    for (type_name, reason) in cases {
        match resolver.resolve_constructor(type_name) {
            Err(ResolveError::NotInstantiable(err)) => {
                assert_eq!(err.type_name(), type_name);
                assert_eq!(err.reason(), reason);
            }
            other => panic!("expected NotInstantiable for {}, got {:?}", type_name, other),
        }
    }
}

#[test]
fn test_check_over_fixture() {
    let resolver = fixture_resolver(FIXTURE_YAML);
    let check = CheckReport::run(&resolver);

    assert_eq!(check.reports.len(), 6);
    assert_eq!(check.skipped.len(), 3);
    assert_eq!(check.unresolvable.len(), 1);
    assert_eq!(check.unresolvable[0].target, "App\\Mailer");
    assert_eq!(check.unresolvable[0].parameter, "sender");
}

#[test]
fn test_report_for_constructor_keeps_declared_types() {
    let resolver = fixture_resolver(FIXTURE_YAML);
    let report = ResolutionReport::for_constructor(&resolver, "App\\ReportBuilder").unwrap();
    let declared: Vec<_> = report
        .entries
        .iter()
        .map(|e| e.declared_type.clone())
        .collect();
    assert_eq!(
        declared,
        vec![
            Some("?App\\Cache".to_string()),
            Some("?App\\Clock".to_string()),
            Some("string".to_string()),
        ]
    );
}

#[test]
fn test_invalid_manifest_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    std::fs::write(
        &path,
        "types:\n  - name: A\n  - name: A\n",
    )
    .unwrap();

    let err = ManifestIntrospector::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("duplicate type 'A'"));

    let bad_yaml = dir.path().join("bad.yml");
    std::fs::write(&bad_yaml, "types: [").unwrap();
    let err = Manifest::load_from_path(&bad_yaml).unwrap_err();
    assert!(err.to_string().contains("Invalid YAML manifest"));

    let missing = fixture_path("tests/fixtures/missing.yaml");
    let err = Manifest::load_from_path(&missing).unwrap_err();
    assert!(err.to_string().contains("Failed to read manifest"));
}
