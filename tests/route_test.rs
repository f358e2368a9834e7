use claims::{assert_err, assert_ok};
use greatcircle::dms::Dms;
use greatcircle::{Coordinate, Error, NamedCoordinate, Route, points_in_reach};
use insta::assert_snapshot;

fn airports() -> Vec<NamedCoordinate> {
    [
        ("KSFO", "37:37:00", "122:22:00"),
        ("KSJC", "37:22:00", "121:55:00"),
        ("E16", "37:5", "121:35:20"),
        ("KLAX", "33:57:00", "118:24:00"),
        ("KJFK", "40:38:00", "73:47:00"),
        ("KMOD", "37:37:33", "120:57:16"),
        ("KMAE", "36:59:00", "120:7:00"),
        ("KKIC", "36:13:50", "121:7:00"),
    ]
    .into_iter()
    .map(|(name, lat, lon)| NamedCoordinate::parse(name, lat, lon).unwrap())
    .collect()
}

fn airport<'a>(airports: &'a [NamedCoordinate], name: &str) -> &'a NamedCoordinate {
    airports
        .iter()
        .find(|airport| airport.name.as_deref() == Some(name))
        .unwrap()
}

fn names<'a>(points: impl IntoIterator<Item = &'a NamedCoordinate>) -> Vec<&'a str> {
    points
        .into_iter()
        .map(|point| point.name.as_deref().unwrap())
        .collect()
}

#[test]
fn parse_aviation_coordinates() {
    let airports = airports();
    let ksfo = airport(&airports, "KSFO");

    assert!((ksfo.coord.lat - 0.6565346869585337).abs() < 1e-12);
    assert!((ksfo.coord.lon - -2.135701228023728).abs() < 1e-12);
    assert!((ksfo.coord.aviation_longitude() - 2.135701228023728).abs() < 1e-12);
    assert_snapshot!(ksfo, @"KSFO (37.6167°N 122.3667°W)");
    assert_snapshot!(format!("{:.2}", airport(&airports, "E16").coord), @"37.08°N 121.59°W");
}

#[test]
fn parse_rejects_bad_text() {
    assert_snapshot!(
        NamedCoordinate::parse("X", "37:xx", "122").unwrap_err(),
        @r#"Invalid DMS text "37:xx": component is not a number"#
    );
    assert_err!(NamedCoordinate::parse("X", "37:61:00", "122"));
    assert_err!(NamedCoordinate::parse("X", "37", ""));

    let err = NamedCoordinate::parse("X", "95:00:00", "122").unwrap_err();
    assert!(matches!(err, Error::LatitudeOutOfRange(_)), "{err:?}");
}

#[test]
fn dms_text_round_trip() {
    let dms: Dms = assert_ok!("121:35:20".parse());
    assert_snapshot!(dms, @"121:35:20");
    assert!((dms.to_decimal_degrees() - (121.0 + 35.0 / 60.0 + 20.0 / 3600.0)).abs() < 1e-12);
}

#[test]
fn airports_in_reach_of_ksfo_klax() {
    let airports = airports();
    let ksfo = airport(&airports, "KSFO").coord;
    let klax = airport(&airports, "KLAX").coord;

    let coords: Vec<Coordinate> = airports.iter().map(|airport| airport.coord).collect();
    let in_reach = points_in_reach(ksfo, klax, 25.0, &coords);

    let found: Vec<_> = in_reach
        .iter()
        .map(|coord| airports.iter().find(|airport| airport.coord == *coord).unwrap())
        .collect();
    assert_eq!(names(found), vec!["KSFO", "KLAX", "KSJC", "E16", "KKIC"]);
}

#[test]
fn route_points_of_interest() {
    let airports = airports();
    let mut route = Route::default();
    route
        .push(airport(&airports, "KSFO").clone())
        .push(airport(&airports, "KLAX").clone());

    assert!((route.total_distance() - 292.6428).abs() < 1e-3);

    let candidates: Vec<_> = airports
        .iter()
        .filter(|airport| !matches!(airport.name.as_deref(), Some("KSFO" | "KLAX")))
        .cloned()
        .collect();
    let matches = route.points_of_interest(&candidates, 25.0);

    assert_eq!(
        names(matches.iter().map(|m| &m.point_of_interest)),
        vec!["KSJC", "E16", "KKIC"]
    );
    assert!((matches[0].distance - 5.7453).abs() < 1e-3);
    assert!((matches[1].distance - 5.9775).abs() < 1e-3);
    assert!((matches[2].distance - 11.2146).abs() < 1e-3);

    for m in &matches {
        let xtd = greatcircle::cross_track_error(
            route.points()[0].coord,
            route.points()[1].coord,
            m.nearest_point_on_route,
        );
        assert!(xtd.abs() < 1e-9);
    }
}

#[test]
fn multi_leg_route_reports_each_airport_once() {
    let airports = airports();
    let route: Route = ["KSFO", "KSJC", "KKIC", "KLAX"]
        .into_iter()
        .map(|name| airport(&airports, name).clone())
        .collect();
    assert_eq!(route.segments().count(), 3);

    let matches = route.points_of_interest(&airports, 25.0);
    let mut found = names(matches.iter().map(|m| &m.point_of_interest));
    found.sort_unstable();
    assert_eq!(found, vec!["E16", "KKIC", "KLAX", "KSFO", "KSJC"]);
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let airports = airports();
    let route: Route = airports[..4].iter().cloned().collect();

    let json = serde_json::to_string(&route).unwrap();
    let decoded: Route = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.len(), route.len());
    for (decoded, original) in decoded.points().iter().zip(route.points()) {
        assert!(decoded.approx_eq(original), "{decoded} != {original}");
    }

    let matches = route.points_of_interest(&airports, 25.0);
    let json = serde_json::to_value(&matches).unwrap();
    assert_eq!(json[0]["point_of_interest"]["name"], "KSFO");
}
