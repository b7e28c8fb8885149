use chrono::NaiveDate;
use octane_api::clock::FixedClock;
use octane_api::normalize::normalize;
use octane_api::types::Endpoint;
use octane_api::{
    Error, EventQuery, GameQuery, MatchQuery, PlayerQuery, Query, RecordQuery, Revision,
    SortDirection, TeamQuery,
};

const TODAY: &str = "2024-03-09";

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
}

fn params(revision: Revision, endpoint: Endpoint, query: &impl Query) -> Vec<(String, String)> {
    let contract = revision.contract(endpoint).unwrap();
    normalize(contract, query.filters(), &clock()).unwrap()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn v3_matches_after_only() {
    let query = MatchQuery::default().with_after("2021-01-01");
    assert_eq!(
        params(Revision::V3, Endpoint::Matches, &query),
        pairs(&[("before", TODAY), ("after", "2021-01-01"), ("perPage", "50")])
    );
}

#[test]
fn v1_events_tier_and_page_size() {
    let query = EventQuery::default()
        .with_after("2019-06-01")
        .with_tier("S")
        .with_per_page(10);
    assert_eq!(
        params(Revision::V1, Endpoint::Events, &query),
        pairs(&[
            ("after", "2019-06-01"),
            ("before", TODAY),
            ("tier", "S"),
            ("per_page", "10"),
        ])
    );
}

#[test]
fn page_size_default_per_revision() {
    let query = GameQuery::default();
    assert_eq!(
        params(Revision::V1, Endpoint::Games, &query),
        pairs(&[("per_page", "20")])
    );
    assert_eq!(
        params(Revision::V2, Endpoint::Games, &query),
        pairs(&[("perPage", "100")])
    );
    assert_eq!(
        params(Revision::V3, Endpoint::Games, &query),
        pairs(&[("perPage", "50")])
    );
}

#[test]
fn explicit_before_overrides_today() {
    let query = EventQuery::default()
        .with_before(NaiveDate::from_ymd_opt(2022, 12, 31).unwrap())
        .with_qualifier(true);
    let params = params(Revision::V2, Endpoint::Events, &query);
    assert!(params.contains(&("before".to_string(), "2022-12-31".to_string())));
    assert!(params.contains(&("qualifier".to_string(), "true".to_string())));
    assert!(params.iter().all(|(_, v)| v != TODAY));
}

#[test]
fn preformatted_dates_are_unchanged() {
    let query = GameQuery::default()
        .with_after("2021-01-01")
        .with_before("2021-06-30");
    let params = params(Revision::V3, Endpoint::Games, &query);
    assert!(params.contains(&("after".to_string(), "2021-01-01".to_string())));
    assert!(params.contains(&("before".to_string(), "2021-06-30".to_string())));
}

#[test]
fn event_date_is_formatted_or_forwarded() {
    let day = NaiveDate::from_ymd_opt(2022, 6, 19).unwrap();
    let expected = ("date".to_string(), "2022-06-19".to_string());
    for revision in [Revision::V2, Revision::V3] {
        let from_date = params(revision, Endpoint::Events, &EventQuery::default().with_date(day));
        assert!(from_date.contains(&expected));

        let text = EventQuery::default().with_date("2022-06-19");
        assert!(params(revision, Endpoint::Events, &text).contains(&expected));
    }

    let query = EventQuery::default().with_after("2019-06-01").with_date(day);
    let v1 = params(Revision::V1, Endpoint::Events, &query);
    assert!(v1.iter().all(|(k, _)| k != "date"));
}

#[test]
fn team_is_never_renamed() {
    let query = MatchQuery::default()
        .with_team("6020bc70f1e4807cc70023a5")
        .with_best_of(5)
        .with_reverse_sweep_attempt(false);
    let params = params(Revision::V3, Endpoint::Matches, &query);
    assert!(params.contains(&("team".to_string(), "6020bc70f1e4807cc70023a5".to_string())));
    assert!(params.contains(&("bestOf".to_string(), "5".to_string())));
    assert!(params.contains(&("reverseSweepAttempt".to_string(), "false".to_string())));
}

#[test]
fn sort_and_order() {
    let query = PlayerQuery::default()
        .with_sort("tag")
        .with_sort_direction(SortDirection::Asc)
        .with_page(2);
    assert_eq!(
        params(Revision::V2, Endpoint::Players, &query),
        pairs(&[
            ("sort", "tag"),
            ("order", "asc"),
            ("page", "2"),
            ("perPage", "100"),
        ])
    );
}

#[test]
fn v3_only_filters_are_dropped_on_v2() {
    let query = PlayerQuery::default().with_nationality("us").with_tag("GarrettG");
    let v2 = params(Revision::V2, Endpoint::Players, &query);
    let v3 = params(Revision::V3, Endpoint::Players, &query);
    assert!(v2.iter().all(|(k, _)| k != "nationality"));
    assert!(v3.contains(&("nationality".to_string(), "us".to_string())));

    let query = TeamQuery::default().with_name("Vitality").with_region("EU");
    let v3 = params(Revision::V3, Endpoint::Teams, &query);
    assert!(v3.iter().all(|(k, _)| k != "region"));
}

#[test]
fn v1_substage_only_on_v1_matches() {
    let query = MatchQuery::default()
        .with_after("2020-01-01")
        .with_substage(0)
        .with_stage(1);
    let v1 = params(Revision::V1, Endpoint::Matches, &query);
    assert!(v1.contains(&("substage".to_string(), "0".to_string())));
    let v3 = params(Revision::V3, Endpoint::Matches, &query);
    assert!(v3.iter().all(|(k, _)| k != "substage"));
    assert!(v3.contains(&("stage".to_string(), "1".to_string())));
}

#[test]
fn records_need_a_stat() {
    let contract = Revision::V3.contract(Endpoint::Records).unwrap();
    let query = RecordQuery::default().with_tier("S");
    let err = normalize(contract, query.filters(), &clock()).unwrap_err();
    assert!(matches!(err, Error::MissingFilter(name) if name == "stat"));

    let query = query.with_filter("stat", "goals");
    let params = normalize(contract, query.filters(), &clock()).unwrap();
    assert_eq!(params[0], ("stat".to_string(), "goals".to_string()));
}

#[test]
fn wrong_value_type_is_rejected() {
    let query = EventQuery::default().with_filter("qualifier", "true");
    let contract = Revision::V3.contract(Endpoint::Events).unwrap();
    let err = normalize(contract, query.filters(), &clock()).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidFilter { ref filter, expected: "boolean" } if filter == "qualifier"
    ));
}
