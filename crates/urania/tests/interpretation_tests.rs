use approx::assert_abs_diff_eq;
use std::collections::BTreeMap;
use urania::ephemeris::{Body, BodyPosition, ChartInput, HouseData, HousePositions};
use urania::interpretation::{InterpretationAssembler, NatalReport, Section};
use urania::western::{HousePlacement, ZodiacSign};
use urania::{AspectType, Unavailable};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn equal_houses(asc: f64) -> HouseData {
    let cusps: Vec<f64> = (0..12).map(|i| asc + 30.0 * i as f64).collect();
    HouseData::Computed(HousePositions::from_cusp_array(asc, asc + 270.0, &cusps))
}

fn sun_moon_failed_mars() -> ChartInput {
    let mut positions = BTreeMap::new();
    positions.insert(Body::Sun, BodyPosition::at(130.0));
    positions.insert(Body::Moon, BodyPosition::at(250.0));
    positions.insert(Body::Mars, BodyPosition::failed("target not in kernel"));
    ChartInput::new(positions, equal_houses(10.0))
}

const FIVE_BODIES_NO_HOUSES: &str = r#"{
    "positions": {
        "sun": { "longitude": 130.0 },
        "moon": { "longitude": 250.0 },
        "mercury": { "longitude": 140.0 },
        "venus": { "longitude": 100.0 },
        "mars": { "longitude": 200.0 }
    },
    "houses": { "error": "x" }
}"#;

#[test]
fn test_failed_body_is_marked_and_siblings_survive() {
    init_logger();
    let report = InterpretationAssembler::default().assemble(&sun_moon_failed_mars());

    let sun = report.placement(Body::Sun).unwrap();
    let sun_sign = sun.sign.value().unwrap();
    assert_eq!(sun_sign.sign, ZodiacSign::Leo);
    assert_abs_diff_eq!(sun_sign.degree_in_sign, 10.0, epsilon = 1e-9);
    assert!(report.placement(Body::Moon).unwrap().sign.is_available());

    match report.placement(Body::Mars).unwrap().sign.unavailable() {
        Some(Unavailable::MissingBodyData { body, reason }) => {
            assert_eq!(*body, Body::Mars);
            assert_eq!(reason, "target not in kernel");
        }
        other => panic!("unexpected {other:?}"),
    }

    assert_eq!(report.aspects.len(), 1);
    let trine = &report.aspects[0];
    assert_eq!(trine.aspect.aspect_type, AspectType::Trine);
    assert_eq!((trine.aspect.body_a, trine.aspect.body_b), (Body::Sun, Body::Moon));
    assert!(!trine.keynote.is_empty());

    let houses = report.houses.value().expect("house data is valid");
    let pof = houses.part_of_fortune.value().expect("sun, moon and ascendant are known");
    // night birth: 10 + 130 - 250 = -110 -> 250
    assert!(!pof.part.is_day_birth);
    assert_abs_diff_eq!(pof.part.longitude, 250.0, epsilon = 1e-9);
    assert_eq!(pof.sign.sign, ZodiacSign::Sagittarius);
    assert_eq!(pof.house.number(), 9);
}

#[test]
fn test_house_sections_with_failed_chart_ruler() {
    let report = InterpretationAssembler::default().assemble(&sun_moon_failed_mars());
    let houses = report.houses.value().unwrap();

    // Asc 10° Aries: Mars rules, but Mars has no position
    let ruler = houses.chart_ruler.value().unwrap();
    assert_eq!(ruler.ascendant.sign, ZodiacSign::Aries);
    assert_eq!(ruler.placement.ruler, Body::Mars);
    assert_eq!(ruler.placement.ruler_house, HousePlacement::UNKNOWN);
    assert!(houses.ascendant_narrative.contains("Aries"));

    let rulers: Vec<(u8, Body)> = houses
        .house_rulers
        .iter()
        .map(|s| {
            let info = s.value().unwrap();
            (info.house, info.ruler)
        })
        .collect();
    assert_eq!(rulers, vec![(7, Body::Venus), (10, Body::Saturn)]);

    let mars = houses.placements.iter().find(|p| p.body == Body::Mars).unwrap();
    assert_eq!(mars.house, HousePlacement::UNKNOWN);
    let sun = houses.placements.iter().find(|p| p.body == Body::Sun).unwrap();
    assert_eq!(sun.house.number(), 5);
}

#[test]
fn test_house_failure_leaves_one_notice() {
    init_logger();
    let input: ChartInput = serde_json::from_str(FIVE_BODIES_NO_HOUSES).unwrap();
    assert!(matches!(input.houses, HouseData::Failed { .. }));

    let report = InterpretationAssembler::default().assemble(&input);

    assert!(report.placements.iter().all(|p| p.sign.is_available()));
    assert!(report.placements.iter().all(|p| p.narrative.is_some()));
    assert_eq!(report.aspects.len(), 2);

    assert!(report.is_degraded());
    assert_eq!(
        report.notices(),
        vec![&Unavailable::HouseDataUnavailable { reason: "x".into() }]
    );
}

#[test]
fn test_report_json_shape() {
    let input: ChartInput = serde_json::from_str(FIVE_BODIES_NO_HOUSES).unwrap();
    let report = InterpretationAssembler::default().assemble(&input);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["houses"]["status"], "unavailable");
    assert_eq!(json["houses"]["value"]["kind"], "houseDataUnavailable");
    assert_eq!(json["houses"]["value"]["reason"], "x");

    let sun = &json["placements"][0];
    assert_eq!(sun["body"], "sun");
    assert_eq!(sun["sign"]["status"], "available");
    assert_eq!(sun["sign"]["value"]["sign"], "leo");

    let aspect = &json["aspects"][0];
    assert_eq!(aspect["aspectType"], "trine");
    assert!(aspect["keynote"].is_string());

    let back: NatalReport = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_house_data_from_json() {
    let text = r#"{
        "positions": { "sun": { "longitude": 130.0 }, "moon": { "longitude": 250.0 } },
        "houses": {
            "ascendant": 10.0,
            "midheaven": 280.0,
            "cusps": {
                "1": 10.0, "2": 40.0, "3": 70.0, "4": 100.0, "5": 130.0, "6": 160.0,
                "7": 190.0, "8": 220.0, "9": 250.0, "10": 280.0, "11": 310.0, "12": 340.0
            }
        }
    }"#;
    let input: ChartInput = serde_json::from_str(text).unwrap();
    let report = InterpretationAssembler::default().assemble(&input);
    let houses = report.houses.value().unwrap();
    let moon = houses.placements.iter().find(|p| p.body == Body::Moon).unwrap();
    assert_eq!(moon.house.number(), 9);
    assert!(houses.part_of_fortune.is_available());
}

#[test]
fn test_incomplete_cusps_degrade_house_sections() {
    let mut positions = BTreeMap::new();
    positions.insert(Body::Sun, BodyPosition::at(130.0));
    let houses = HousePositions::from_cusp_array(10.0, 280.0, &[10.0, 40.0, 70.0]);
    let report = InterpretationAssembler::default().assemble(&ChartInput::new(positions, HouseData::Computed(houses)));

    match &report.houses {
        Section::Unavailable(Unavailable::HouseDataUnavailable { reason }) => {
            assert!(reason.contains("12"));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(report.placement(Body::Sun).unwrap().sign.is_available());
}

#[test]
fn test_out_of_order_cusps_leave_one_notice() {
    let mut positions = BTreeMap::new();
    for (body, lon) in [
        (Body::Sun, 130.0),
        (Body::Moon, 250.0),
        (Body::Mercury, 140.0),
        (Body::Venus, 100.0),
        (Body::Mars, 200.0),
    ] {
        positions.insert(body, BodyPosition::at(lon));
    }
    let mut cusps: Vec<f64> = (0..12).map(|i| 10.0 + 30.0 * i as f64).collect();
    cusps.swap(3, 8);
    let houses = HouseData::Computed(HousePositions::from_cusp_array(10.0, 280.0, &cusps));
    let report = InterpretationAssembler::default().assemble(&ChartInput::new(positions, houses));

    assert!(!report.houses.is_available());
    assert_eq!(
        report.notices(),
        vec![&Unavailable::HouseDataUnavailable {
            reason: "cusps are not in zodiacal order".into()
        }]
    );
    assert!(report.placements.iter().all(|p| p.sign.is_available()));
    assert_eq!(report.aspects.len(), 2);
}

#[test]
fn test_concurrent_requests_share_one_assembler() {
    let assembler = InterpretationAssembler::default();
    let chart = sun_moon_failed_mars();
    let expected = assembler.assemble(&chart);

    let reports: Vec<NatalReport> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| assembler.assemble(&chart))).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(reports.iter().all(|r| *r == expected));
}

#[test]
fn test_assembler_from_bundled_config() {
    let assembler = InterpretationAssembler::from_config().unwrap();
    assert_eq!(assembler.settings().aspects.max_results, 5);
    assert_eq!(assembler.settings().designated_houses, vec![7, 10]);
}
