//! Catalogue dispatch, file-backed storage and admin operations

mod common;

use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;
use theatrebase::{Catalogue, Config, GraphDb, GraphImport, NodeLabel, Services, StoreError};

fn seed() -> GraphImport {
    serde_json::from_value(json!({
        "nodes": [
            { "uuid": "m1", "label": "Material", "name": "Uncle Vanya", "format": "play", "year": 1898 },
            { "uuid": "p1", "label": "Person", "name": "Anton Chekhov" },
            { "uuid": "prod1", "label": "Production", "name": "Uncle Vanya", "startDate": "2020-01-14" }
        ],
        "edges": [
            { "edgeType": "HAS_WRITING_ENTITY", "source": "m1", "target": "p1", "creditPosition": 0 },
            { "edgeType": "PRODUCTION_OF", "source": "prod1", "target": "m1" }
        ]
    }))
    .unwrap()
}

#[test]
fn test_file_backed_catalogue_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        storage_dir: dir.path().join("store"),
        ..Config::default()
    };
    config.validate().unwrap();

    {
        let db = Arc::new(GraphDb::open(&config.database_path()).unwrap());
        let services = Services::new(db, config.list_limit);

        let report = services.admin.setup().unwrap();
        assert!(report.failed.is_empty());
        assert!(!report.applied.is_empty());

        let result = services.admin.import(seed()).unwrap();
        assert_eq!(result.nodes_created, 3);
        assert_eq!(result.edges_created, 2);
    }

    let db = Arc::new(GraphDb::open(&config.database_path()).unwrap());
    let catalogue = Catalogue::new(Services::new(db, config.list_limit));

    let stats = catalogue.services().admin.stats().unwrap();
    assert_eq!(stats.node_count, 3);
    assert_eq!(stats.edge_count, 2);

    let material = catalogue.show(NodeLabel::Material, "m1").unwrap();
    assert_eq!(material["writingCredits"][0]["name"], "by");
    assert_eq!(material["productions"][0]["uuid"], "prod1");
}

#[test]
fn test_setup_is_repeatable() {
    let db = Arc::new(GraphDb::open_in_memory().unwrap());
    let services = Services::new(db, 10);

    let first = services.admin.setup().unwrap();
    let second = services.admin.setup().unwrap();
    assert_eq!(first.applied, second.applied);
    assert!(second.failed.is_empty());
}

#[test]
fn test_list_limit_truncates_lists() {
    let db = Arc::new(GraphDb::open_in_memory().unwrap());
    let services = Services::new(db, 1);
    services.admin.import(seed()).unwrap();
    let catalogue = Catalogue::new(services);

    let people = catalogue.list(NodeLabel::Person).unwrap();
    assert_eq!(people.as_array().unwrap().len(), 1);

    let materials = catalogue.list(NodeLabel::Material).unwrap();
    assert_eq!(materials.as_array().unwrap().len(), 1);
}

#[test]
fn test_missing_entities_are_not_found() {
    let db = common::load(json!({ "nodes": [], "edges": [] }));
    let catalogue = common::catalogue(&db);

    for label in [NodeLabel::Production, NodeLabel::Venue, NodeLabel::Person, NodeLabel::Award] {
        let result = catalogue.show(label, "nope");
        assert!(matches!(result, Err(StoreError::NotFound(_))), "{} should be NotFound", label);
    }

    assert_eq!(catalogue.list(NodeLabel::Season).unwrap(), json!([]));
    assert!(matches!(
        catalogue.list(NodeLabel::AwardCeremonyCategory),
        Err(StoreError::InvalidInput(_))
    ));
}

#[test]
fn test_model_names_parse_either_form() {
    assert_eq!("Production".parse::<NodeLabel>().unwrap(), NodeLabel::Production);
    assert_eq!("FESTIVAL_SERIES".parse::<NodeLabel>().unwrap(), NodeLabel::FestivalSeries);
    assert!(matches!("Playwright".parse::<NodeLabel>(), Err(StoreError::UnknownModel(_))));
}
