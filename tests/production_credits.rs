//! Production pages and the perspective credits shown on people and companies

mod common;

use common::{list, load, names, show, uuids};
use serde_json::json;
use std::sync::Arc;
use theatrebase::{GraphDb, NodeLabel};

fn lehman() -> Arc<GraphDb> {
    load(json!({
        "nodes": [
            { "uuid": "prod-nt", "label": "Production", "name": "The Lehman Trilogy",
              "startDate": "2018-07-12", "pressDate": "2018-07-19", "endDate": "2018-10-20" },
            { "uuid": "prod-part1", "label": "Production", "name": "Three Brothers", "startDate": "2018-07-12" },
            { "uuid": "prod-part1a", "label": "Production", "name": "Bavaria", "startDate": "2018-07-12" },
            { "uuid": "prod-deep", "label": "Production", "name": "Rimpar", "startDate": "2018-07-12" },
            { "uuid": "prod-revival", "label": "Production", "name": "The Lehman Trilogy", "startDate": "2019-05-11" },
            { "uuid": "prod-undated", "label": "Production", "name": "A Workshop" },

            { "uuid": "m-lehman", "label": "Material", "name": "The Lehman Trilogy", "format": "play", "year": 2013 },
            { "uuid": "p-massini", "label": "Person", "name": "Stefano Massini" },

            { "uuid": "v-nt", "label": "Venue", "name": "National Theatre" },
            { "uuid": "v-lyttelton", "label": "Venue", "name": "Lyttelton Theatre" },
            { "uuid": "s-1", "label": "Season", "name": "Summer 2018" },
            { "uuid": "f-1", "label": "Festival", "name": "2018" },
            { "uuid": "fs-1", "label": "FestivalSeries", "name": "Lehman Festival" },

            { "uuid": "c-nt", "label": "Company", "name": "National Theatre" },
            { "uuid": "p-rufus", "label": "Person", "name": "Rufus Norris" },
            { "uuid": "p-lisa", "label": "Person", "name": "Lisa Burger" },
            { "uuid": "p-sonia", "label": "Person", "name": "Sonia Friedman" },
            { "uuid": "c-neal", "label": "Company", "name": "Neal Street Productions" },
            { "uuid": "p-sam", "label": "Person", "name": "Sam Mendes" },
            { "uuid": "p-es", "label": "Person", "name": "Es Devlin" },
            { "uuid": "p-crew", "label": "Person", "name": "Stage Manager" }
        ],
        "edges": [
            { "edgeType": "PRODUCTION_OF", "source": "prod-nt", "target": "m-lehman" },
            { "edgeType": "HAS_WRITING_ENTITY", "source": "m-lehman", "target": "p-massini", "creditPosition": 0 },

            { "edgeType": "HAS_SUB_VENUE", "source": "v-nt", "target": "v-lyttelton", "position": 0 },
            { "edgeType": "PLAYS_AT", "source": "prod-nt", "target": "v-lyttelton" },
            { "edgeType": "PART_OF_SEASON", "source": "prod-nt", "target": "s-1" },
            { "edgeType": "PART_OF_FESTIVAL", "source": "prod-nt", "target": "f-1" },
            { "edgeType": "PART_OF_FESTIVAL_SERIES", "source": "f-1", "target": "fs-1" },

            { "edgeType": "HAS_SUB_PRODUCTION", "source": "prod-nt", "target": "prod-part1", "position": 0 },
            { "edgeType": "HAS_SUB_PRODUCTION", "source": "prod-part1", "target": "prod-part1a", "position": 0 },
            { "edgeType": "HAS_SUB_PRODUCTION", "source": "prod-part1a", "target": "prod-deep", "position": 0 },

            { "edgeType": "HAS_PRODUCER_ENTITY", "source": "prod-nt", "target": "c-nt",
              "creditPosition": 0, "entityPosition": 0 },
            { "edgeType": "HAS_PRODUCER_ENTITY", "source": "prod-nt", "target": "p-lisa",
              "creditPosition": 0, "creditedCompanyUuid": "c-nt", "memberPosition": 1 },
            { "edgeType": "HAS_PRODUCER_ENTITY", "source": "prod-nt", "target": "p-rufus",
              "creditPosition": 0, "creditedCompanyUuid": "c-nt", "memberPosition": 0 },
            { "edgeType": "HAS_PRODUCER_ENTITY", "source": "prod-nt", "target": "p-sonia",
              "creditPosition": 0, "entityPosition": 1 },
            { "edgeType": "HAS_PRODUCER_ENTITY", "source": "prod-nt", "target": "c-neal",
              "credit": "in association with", "creditPosition": 1, "entityPosition": 0 },

            { "edgeType": "HAS_CREATIVE_ENTITY", "source": "prod-nt", "target": "p-es",
              "credit": "Set Designer", "creditPosition": 1, "entityPosition": 0 },
            { "edgeType": "HAS_CREATIVE_ENTITY", "source": "prod-nt", "target": "p-sam",
              "credit": "Director", "creditPosition": 0, "entityPosition": 0 },

            { "edgeType": "HAS_CREW_ENTITY", "source": "prod-nt", "target": "p-crew",
              "creditPosition": 0, "entityPosition": 0 },

            { "edgeType": "HAS_PRODUCER_ENTITY", "source": "prod-revival", "target": "p-rufus",
              "credit": "executive producer", "creditPosition": 0 }
        ]
    }))
}

#[test]
fn test_production_page_links() {
    let db = lehman();
    let production = show(&db, NodeLabel::Production, "prod-nt");

    assert_eq!(production["model"], "PRODUCTION");
    assert_eq!(production["pressDate"], "2018-07-19");
    assert_eq!(
        production["venue"],
        json!({
            "model": "VENUE",
            "uuid": "v-lyttelton",
            "name": "Lyttelton Theatre",
            "surVenue": { "model": "VENUE", "uuid": "v-nt", "name": "National Theatre", "surVenue": null }
        })
    );
    assert_eq!(production["season"], json!({ "model": "SEASON", "uuid": "s-1", "name": "Summer 2018" }));
    assert_eq!(
        production["festival"],
        json!({
            "model": "FESTIVAL",
            "uuid": "f-1",
            "name": "2018",
            "festivalSeries": { "model": "FESTIVAL_SERIES", "uuid": "fs-1", "name": "Lehman Festival" }
        })
    );

    assert_eq!(production["material"]["uuid"], "m-lehman");
    assert_eq!(
        uuids(&production["material"]["writingCredits"][0]["entities"]),
        vec!["p-massini"]
    );
    assert_eq!(production["surProduction"], serde_json::Value::Null);
}

#[test]
fn test_sub_productions_stop_after_two_levels() {
    let db = lehman();
    let production = show(&db, NodeLabel::Production, "prod-nt");

    let part1 = &production["subProductions"][0];
    assert_eq!(part1["uuid"], "prod-part1");
    let part1a = &part1["subProductions"][0];
    assert_eq!(part1a["uuid"], "prod-part1a");
    assert!(part1a.get("subProductions").is_none());

    let deep = show(&db, NodeLabel::Production, "prod-deep");
    assert_eq!(
        deep["surProduction"],
        json!({
            "model": "PRODUCTION",
            "uuid": "prod-part1a",
            "name": "Bavaria",
            "surProduction": {
                "model": "PRODUCTION",
                "uuid": "prod-part1",
                "name": "Three Brothers",
                "surProduction": null
            }
        })
    );
}

#[test]
fn test_producer_credits_group_company_members() {
    let db = lehman();
    let production = show(&db, NodeLabel::Production, "prod-nt");

    assert_eq!(
        production["producerCredits"],
        json!([
            {
                "model": "PRODUCER_CREDIT",
                "name": "produced by",
                "entities": [
                    {
                        "model": "COMPANY",
                        "uuid": "c-nt",
                        "name": "National Theatre",
                        "members": [
                            { "model": "PERSON", "uuid": "p-rufus", "name": "Rufus Norris" },
                            { "model": "PERSON", "uuid": "p-lisa", "name": "Lisa Burger" }
                        ]
                    },
                    { "model": "PERSON", "uuid": "p-sonia", "name": "Sonia Friedman" }
                ]
            },
            {
                "model": "PRODUCER_CREDIT",
                "name": "in association with",
                "entities": [
                    { "model": "COMPANY", "uuid": "c-neal", "name": "Neal Street Productions", "members": [] }
                ]
            }
        ])
    );

    assert_eq!(names(&production["creativeCredits"]), vec!["Director", "Set Designer"]);
    assert_eq!(production["creativeCredits"][0]["model"], "CREATIVE_CREDIT");
    assert_eq!(names(&production["crewCredits"]), vec!["crew by"]);
}

#[test]
fn test_member_perspective_has_employer_and_co_entities() {
    let db = lehman();
    let rufus = show(&db, NodeLabel::Person, "p-rufus");

    let productions = &rufus["producerProductions"];
    assert_eq!(uuids(productions), vec!["prod-revival", "prod-nt"]);

    let nt = &productions[1];
    assert!(nt.get("creativeCredits").is_none());
    assert_eq!(nt["venue"]["uuid"], "v-lyttelton");
    assert_eq!(
        nt["producerCredits"],
        json!([{
            "model": "PRODUCER_CREDIT",
            "name": "produced by",
            "employerCompany": {
                "model": "COMPANY",
                "uuid": "c-nt",
                "name": "National Theatre",
                "coMembers": [{ "model": "PERSON", "uuid": "p-lisa", "name": "Lisa Burger" }]
            },
            "coEntities": [{ "model": "PERSON", "uuid": "p-sonia", "name": "Sonia Friedman" }]
        }])
    );

    let revival = &productions[0];
    assert_eq!(revival["producerCredits"][0]["name"], "executive producer");
    assert_eq!(revival["producerCredits"][0]["employerCompany"], serde_json::Value::Null);
    assert_eq!(revival["producerCredits"][0]["coEntities"], json!([]));
}

#[test]
fn test_company_perspective_lists_credited_members() {
    let db = lehman();
    let company = show(&db, NodeLabel::Company, "c-nt");

    let credit = &company["producerProductions"][0]["producerCredits"][0];
    assert_eq!(credit["employerCompany"], serde_json::Value::Null);
    assert_eq!(uuids(&credit["creditedMembers"]), vec!["p-rufus", "p-lisa"]);
    assert_eq!(uuids(&credit["coEntities"]), vec!["p-sonia"]);
}

#[test]
fn test_co_entities_never_include_the_perspective() {
    let db = lehman();
    let sonia = show(&db, NodeLabel::Person, "p-sonia");

    let credit = &sonia["producerProductions"][0]["producerCredits"][0];
    assert_eq!(
        credit["coEntities"],
        json!([{
            "model": "COMPANY",
            "uuid": "c-nt",
            "name": "National Theatre",
            "members": [
                { "model": "PERSON", "uuid": "p-rufus", "name": "Rufus Norris" },
                { "model": "PERSON", "uuid": "p-lisa", "name": "Lisa Burger" }
            ]
        }])
    );
    assert!(credit.get("creditedMembers").is_none());

    let sam = show(&db, NodeLabel::Person, "p-sam");
    let credits = &sam["creativeProductions"][0]["creativeCredits"];
    assert_eq!(names(credits), vec!["Director"]);
    assert_eq!(credits[0]["coEntities"], json!([]));
    assert_eq!(sam["producerProductions"], json!([]));
}

#[test]
fn test_writer_page_lists_materials() {
    let db = lehman();
    let massini = show(&db, NodeLabel::Person, "p-massini");

    assert_eq!(uuids(&massini["materials"]), vec!["m-lehman"]);
    assert_eq!(massini["awards"], json!([]));

    let material = show(&db, NodeLabel::Material, "m-lehman");
    assert_eq!(uuids(&material["productions"]), vec!["prod-nt"]);
}

#[test]
fn test_production_list_orders_latest_first_undated_last() {
    let db = lehman();
    let productions = list(&db, NodeLabel::Production);

    let order = uuids(&productions);
    assert_eq!(order.first().map(String::as_str), Some("prod-revival"));
    assert_eq!(order.last().map(String::as_str), Some("prod-undated"));

    // Same start date falls back to name
    let same_day: Vec<&str> = order
        .iter()
        .map(String::as_str)
        .filter(|uuid| ["prod-nt", "prod-part1", "prod-part1a", "prod-deep"].contains(uuid))
        .collect();
    assert_eq!(same_day, vec!["prod-part1a", "prod-deep", "prod-nt", "prod-part1"]);
}

#[test]
fn test_season_and_festival_pages() {
    let db = lehman();

    let season = show(&db, NodeLabel::Season, "s-1");
    assert_eq!(uuids(&season["productions"]), vec!["prod-nt"]);

    let festival = show(&db, NodeLabel::Festival, "f-1");
    assert_eq!(festival["festivalSeries"]["uuid"], "fs-1");
    assert_eq!(uuids(&festival["productions"]), vec!["prod-nt"]);

    let series = show(&db, NodeLabel::FestivalSeries, "fs-1");
    assert_eq!(uuids(&series["festivals"]), vec!["f-1"]);
}

fn shared_producer() -> Arc<GraphDb> {
    load(json!({
        "nodes": [
            { "uuid": "prod-x", "label": "Production", "name": "Hamlet", "startDate": "2021-03-01" },
            { "uuid": "prod-y", "label": "Production", "name": "Macbeth", "startDate": "2020-03-01" },
            { "uuid": "c-a", "label": "Company", "name": "Almeida Theatre" },
            { "uuid": "c-b", "label": "Company", "name": "Barbican Centre" },
            { "uuid": "p-x", "label": "Person", "name": "Rupert Goold" },
            { "uuid": "p-z", "label": "Person", "name": "Denise Wood" }
        ],
        "edges": [
            { "edgeType": "HAS_PRODUCER_ENTITY", "source": "prod-x", "target": "c-a",
              "creditPosition": 0, "entityPosition": 0 },
            { "edgeType": "HAS_PRODUCER_ENTITY", "source": "prod-x", "target": "p-x",
              "creditPosition": 0, "creditedCompanyUuid": "c-a", "memberPosition": 0 },
            { "edgeType": "HAS_PRODUCER_ENTITY", "source": "prod-x", "target": "c-b",
              "creditPosition": 1, "entityPosition": 0 },
            { "edgeType": "HAS_PRODUCER_ENTITY", "source": "prod-x", "target": "p-x",
              "creditPosition": 1, "creditedCompanyUuid": "c-b", "memberPosition": 0 },
            { "edgeType": "HAS_PRODUCER_ENTITY", "source": "prod-x", "target": "p-z",
              "creditPosition": 1, "creditedCompanyUuid": "c-b", "memberPosition": 1 },

            { "edgeType": "HAS_PRODUCER_ENTITY", "source": "prod-y", "target": "p-x",
              "creditPosition": 0, "entityPosition": 0 },
            { "edgeType": "HAS_PRODUCER_ENTITY", "source": "prod-y", "target": "c-a",
              "creditPosition": 0, "entityPosition": 1 },
            { "edgeType": "HAS_PRODUCER_ENTITY", "source": "prod-y", "target": "p-x",
              "creditPosition": 0, "creditedCompanyUuid": "c-a", "memberPosition": 0 }
        ]
    }))
}

#[test]
fn test_nameless_credits_through_different_companies_stay_apart() {
    let db = shared_producer();
    let person = show(&db, NodeLabel::Person, "p-x");

    let productions = &person["producerProductions"];
    assert_eq!(uuids(productions), vec!["prod-x", "prod-y"]);

    let credits = &productions[0]["producerCredits"];
    assert_eq!(names(credits), vec!["produced by", "produced by"]);
    assert_eq!(credits[0]["employerCompany"]["uuid"], "c-a");
    assert_eq!(credits[0]["employerCompany"]["coMembers"], json!([]));
    assert_eq!(credits[1]["employerCompany"]["uuid"], "c-b");
    assert_eq!(uuids(&credits[1]["employerCompany"]["coMembers"]), vec!["p-z"]);
}

#[test]
fn test_direct_credit_hides_perspective_inside_co_credited_company() {
    let db = shared_producer();
    let person = show(&db, NodeLabel::Person, "p-x");

    let credits = &person["producerProductions"][1]["producerCredits"];
    assert_eq!(names(credits), vec!["produced by", "produced by"]);

    assert_eq!(credits[0]["employerCompany"], serde_json::Value::Null);
    assert_eq!(
        credits[0]["coEntities"],
        json!([{ "model": "COMPANY", "uuid": "c-a", "name": "Almeida Theatre", "members": [] }])
    );

    assert_eq!(credits[1]["employerCompany"]["uuid"], "c-a");
    assert_eq!(credits[1]["coEntities"], json!([]));
}
