use czml_core::{
    parse_document, parse_document_with, to_string, Billboard, Config, CzmlError, Document,
    Label, Material, Orientation, Path, Polyline, Position, PositionList, PositionValue,
    PropertyKind, PropertyValue, ReferenceFrame,
};
use serde_json::Value as JsonValue;

fn load(name: &str) -> (String, JsonValue) {
    let text = czml_test_fixtures::documents::json(name).expect("load fixture");
    let json: JsonValue = serde_json::from_str(&text).expect("fixture is JSON");
    (text, json)
}

#[test]
fn well_formed_fixtures_round_trip_as_json() {
    for name in czml_test_fixtures::documents::well_formed() {
        let (text, json) = load(&name);
        let decoded = parse_document(&text).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(
            decoded.report.is_complete(),
            "{name}: unexpected issues {:?}",
            decoded.report.issues()
        );
        assert!(decoded.report.ignored().is_empty(), "{name}: ignored keys");

        let encoded = decoded.value.to_json().expect("encode");
        assert_eq!(encoded, json, "{name} did not round trip");
    }
}

#[test]
fn compact_text_is_stable() {
    let (text, _) = load("simple");
    let document = parse_document(&text).unwrap().value;
    let once = to_string(&document, &Config::default()).unwrap();
    let twice = to_string(&parse_document(&once).unwrap().value, &Config::default()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn simple_fixture_contents() {
    let (text, _) = load("simple");
    let document = parse_document(&text).unwrap().value;
    assert_eq!(document.header.as_ref().and_then(|h| h.name.as_deref()), Some("simple"));
    let ids: Vec<&str> = document.iter().filter_map(|p| p.id.as_deref()).collect();
    assert_eq!(ids, ["p1", "label", "point"]);

    let p1 = document.find("p1").unwrap();
    let billboard = p1.property::<Billboard>().unwrap();
    assert_eq!(billboard.scale, Some(PropertyValue::Constant(0.7)));
    assert!(billboard.show.is_none());

    let point = document.find("point").unwrap();
    assert_eq!(point.parent.as_deref(), Some("p1"));
    assert!(point.contains(PropertyKind::Point));
    assert!(document.find("label").unwrap().property::<Label>().is_some());
}

#[test]
fn sampled_satellite_contents() {
    let (text, _) = load("sampled-satellite");
    let document = parse_document(&text).unwrap().value;
    let header = document.header.as_ref().unwrap();
    assert_eq!(header.clock.as_ref().and_then(|c| c.multiplier), Some(60.0));

    let satellite = document.find("Satellite/Geoeye1").unwrap();
    let position = satellite.property::<Position>().unwrap();
    assert_eq!(position.reference_frame, Some(ReferenceFrame::Inertial));
    let interval = &position.value.intervals().unwrap()[0];
    assert_eq!(interval.len(), 4);
    assert_eq!(interval.interpolation.degree, Some(5));
    assert!(matches!(interval.samples[3].value, PositionValue::Cartesian(_)));

    let orientation = satellite.property::<Orientation>().unwrap();
    assert_eq!(orientation.value.intervals().unwrap()[0].len(), 2);

    let path = satellite.property::<Path>().unwrap();
    let show = path.show.as_ref().and_then(PropertyValue::intervals).unwrap();
    assert_eq!(show.len(), 2);
    assert_eq!(show[1].samples[0].value, false);
    assert!(matches!(path.material, Some(Material::SolidColor(_))));
}

#[test]
fn polyline_fixture_contents() {
    let (text, _) = load("polylines");
    let document = parse_document(&text).unwrap().value;
    let materials: Vec<&str> = document
        .iter()
        .filter_map(|p| p.property::<Polyline>())
        .filter_map(|polyline| polyline.material.as_ref().map(Material::key))
        .collect();
    assert_eq!(
        materials,
        ["solidColor", "polylineGlow", "polylineOutline", "polylineDash", "polylineArrow"]
    );

    let dashed = document.find("dashedLine").unwrap().property::<Polyline>().unwrap();
    assert!(matches!(
        dashed.positions.as_ref().and_then(PropertyValue::as_constant),
        Some(PositionList::CartographicRadians(points)) if points.len() == 2
    ));
}

#[test]
fn malformed_fixture_is_partial_when_lenient() {
    let (text, _) = load("malformed");
    let decoded = parse_document(&text).unwrap();
    let ids: Vec<&str> = decoded.value.iter().filter_map(|p| p.id.as_deref()).collect();
    assert_eq!(ids, ["good", "partial", "last"]);

    let issues: Vec<String> = decoded.report.issues().iter().map(|i| i.location.to_string()).collect();
    assert_eq!(
        issues,
        [
            "packet[2]",
            "packet[3] 'partial' billboard.scale",
            "packet[3] 'partial' position",
            "packet[4]",
        ]
    );
    let ignored: Vec<String> = decoded.report.ignored().iter().map(|l| l.to_string()).collect();
    assert_eq!(ignored, ["packet[3] 'partial' ellipsoid"]);

    let partial = decoded.value.find("partial").unwrap();
    let billboard = partial.property::<Billboard>().unwrap();
    assert!(billboard.scale.is_none());
    assert!(billboard.image.is_some());
    assert!(partial.property::<Position>().is_none());
}

#[test]
fn malformed_fixture_is_rejected_when_strict() {
    let (text, _) = load("malformed");
    match parse_document_with(&text, &Config::strict()) {
        Err(CzmlError::Rejected(report)) => assert_eq!(report.issues().len(), 4),
        other => panic!("expected rejection, got {other:?}"),
    }
    assert!(czml_test_fixtures::documents::load::<Document>("malformed").is_err());
}

#[test]
fn fixtures_deserialize_through_serde() {
    let document: Document = czml_test_fixtures::documents::load("polylines").unwrap();
    assert_eq!(document.len(), 6);
}

#[test]
fn fixtures_read_from_disk() {
    for name in czml_test_fixtures::documents::well_formed() {
        let path = czml_test_fixtures::documents::path(&name).expect("fixture path");
        let decoded = czml_core::io::read_document(&path, &Config::default())
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        let (_, json) = load(&name);
        assert_eq!(decoded.value.to_json().expect("encode"), json, "{name}");
    }

    let path = czml_test_fixtures::documents::path("malformed").expect("fixture path");
    let err = czml_core::io::read_document(&path, &Config::strict()).unwrap_err();
    assert!(matches!(err, CzmlError::Rejected(_)));
}
