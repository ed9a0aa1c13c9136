//! Venue pages: sur-venue chains and productions at sub-venues

mod common;

use common::{list, load, show, uuids};
use serde_json::{json, Value};
use std::sync::Arc;
use theatrebase::{GraphDb, NodeLabel};

fn foo_theatres() -> Arc<GraphDb> {
    load(json!({
        "nodes": [
            { "uuid": "v-sur", "label": "Venue", "name": "Sur-Foo Theatre" },
            { "uuid": "v-sub", "label": "Venue", "name": "Sub-Foo Theatre" },
            { "uuid": "v-studio", "label": "Venue", "name": "Foo Studio" },
            { "uuid": "prod-a", "label": "Production", "name": "Antigone", "startDate": "2020-01-01" },
            { "uuid": "prod-b", "label": "Production", "name": "Bacchae", "startDate": "2019-01-01" },
            { "uuid": "prod-c", "label": "Production", "name": "Cyclops" }
        ],
        "edges": [
            { "edgeType": "HAS_SUB_VENUE", "source": "v-sur", "target": "v-studio", "position": 1 },
            { "edgeType": "HAS_SUB_VENUE", "source": "v-sur", "target": "v-sub", "position": 0 },
            { "edgeType": "PLAYS_AT", "source": "prod-a", "target": "v-sub" },
            { "edgeType": "PLAYS_AT", "source": "prod-b", "target": "v-sur" },
            { "edgeType": "PLAYS_AT", "source": "prod-c", "target": "v-sur" }
        ]
    }))
}

#[test]
fn test_sub_venue_has_single_level_sur_venue() {
    let db = foo_theatres();
    let venue = show(&db, NodeLabel::Venue, "v-sub");

    assert_eq!(
        venue["surVenue"],
        json!({ "model": "VENUE", "uuid": "v-sur", "name": "Sur-Foo Theatre", "surVenue": null })
    );
    assert_eq!(venue["subVenues"], json!([]));
    assert_eq!(uuids(&venue["productions"]), vec!["prod-a"]);
    assert_eq!(venue["productions"][0]["subVenue"], Value::Null);
}

#[test]
fn test_sur_venue_includes_sub_venue_productions() {
    let db = foo_theatres();
    let venue = show(&db, NodeLabel::Venue, "v-sur");

    assert_eq!(venue["surVenue"], Value::Null);
    assert_eq!(uuids(&venue["subVenues"]), vec!["v-sub", "v-studio"]);

    let productions = &venue["productions"];
    assert_eq!(uuids(productions), vec!["prod-a", "prod-b", "prod-c"]);
    assert_eq!(
        productions[0]["subVenue"],
        json!({ "model": "VENUE", "uuid": "v-sub", "name": "Sub-Foo Theatre" })
    );
    assert_eq!(productions[1]["subVenue"], Value::Null);
    assert_eq!(productions[2]["startDate"], Value::Null);
}

#[test]
fn test_production_venue_carries_sur_venue() {
    let db = foo_theatres();
    let production = show(&db, NodeLabel::Production, "prod-a");

    assert_eq!(
        production["venue"],
        json!({
            "model": "VENUE",
            "uuid": "v-sub",
            "name": "Sub-Foo Theatre",
            "surVenue": { "model": "VENUE", "uuid": "v-sur", "name": "Sur-Foo Theatre", "surVenue": null }
        })
    );

    let top = show(&db, NodeLabel::Production, "prod-b");
    assert_eq!(top["venue"]["surVenue"], Value::Null);
}

#[test]
fn test_venue_list_is_alphabetical() {
    let db = foo_theatres();
    let venues = list(&db, NodeLabel::Venue);

    assert_eq!(uuids(&venues), vec!["v-studio", "v-sub", "v-sur"]);
    assert_eq!(venues[1]["surVenue"]["uuid"], "v-sur");
    assert_eq!(uuids(&venues[2]["subVenues"]), vec!["v-sub", "v-studio"]);
}
