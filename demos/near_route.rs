use greatcircle::{NamedCoordinate, Route, closest_point, points_in_reach};

const AIRPORTS: &[(&str, &str, &str)] = &[
    ("KSFO", "37:37:00", "122:22:00"),
    ("KSJC", "37:22:00", "121:55:00"),
    ("E16", "37:5", "121:35:20"),
    ("KLAX", "33:57:00", "118:24:00"),
    ("KJFK", "40:38:00", "73:47:00"),
    ("KMOD", "37:37:33", "120:57:16"),
    ("KMAE", "36:59:00", "120:7:00"),
    ("KKIC", "36:13:50", "121:7:00"),
];

const MAX_DISTANCE_NM: f64 = 25.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let airports = AIRPORTS
        .iter()
        .map(|&(name, lat, lon)| NamedCoordinate::parse(name, lat, lon))
        .collect::<Result<Vec<_>, _>>()?;

    let find = |name: &str| {
        airports
            .iter()
            .find(|airport| airport.name.as_deref() == Some(name))
            .ok_or_else(|| format!("unknown airport {name}"))
    };
    let ksfo = find("KSFO")?;
    let klax = find("KLAX")?;

    println!("=== Closest points on {ksfo} -> {klax} ===");
    for name in ["KSJC", "E16"] {
        let airport = find(name)?;
        let abeam = closest_point(ksfo.coord, klax.coord, airport.coord)?;
        println!(
            "{name}: {abeam} ({:.1} nm off course)",
            greatcircle::distance(abeam, airport.coord)
        );
    }

    let coords: Vec<_> = airports.iter().map(|airport| airport.coord).collect();
    let in_reach = points_in_reach(ksfo.coord, klax.coord, MAX_DISTANCE_NM, &coords);

    println!("\n=== Airports within {MAX_DISTANCE_NM} nm of KSFO-KLAX ===");
    for coord in &in_reach {
        match airports.iter().find(|airport| airport.coord == *coord) {
            Some(airport) => println!("{airport}"),
            None => println!("{coord}"),
        }
    }

    let route: Route = [ksfo.clone(), klax.clone()].into_iter().collect();
    let candidates: Vec<_> = airports
        .iter()
        .filter(|airport| airport.name != ksfo.name && airport.name != klax.name)
        .cloned()
        .collect();

    println!("\n=== Route KSFO-KLAX with waypoints abeam nearby airports ===");
    println!("Total distance: {:.1} nm", route.total_distance());
    for m in route.points_of_interest(&candidates, MAX_DISTANCE_NM) {
        println!(
            "{} -> waypoint {} at {:.1} nm",
            m.point_of_interest, m.nearest_point_on_route, m.distance
        );
    }

    Ok(())
}
