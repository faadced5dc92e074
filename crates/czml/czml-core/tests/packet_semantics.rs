use czml_core::{
    decode_document, parse_document, Billboard, Config, Document, Interval, Packet, Point,
    Position, PositionValue, Property, PropertyKind, PropertyValue, Sample, TimeInterval,
};
use serde_json::json;

#[test]
fn billboard_scenario() {
    let decoded = parse_document(
        r#"{"id":"p1","billboard":{"scale":0.7,"image":"http://localhost/img.png"}}"#,
    )
    .unwrap();
    assert!(decoded.report.is_complete());
    let packet = &decoded.value.packets()[0];
    assert_eq!(packet.id.as_deref(), Some("p1"));
    assert_eq!(packet.len(), 1);

    let billboard = packet.property::<Billboard>().unwrap();
    assert_eq!(billboard.scale, Some(PropertyValue::Constant(0.7)));
    assert_eq!(
        billboard.image.as_ref().and_then(PropertyValue::as_constant).map(|u| u.as_str()),
        Some("http://localhost/img.png")
    );
    assert_eq!(
        *billboard,
        Billboard {
            scale: billboard.scale.clone(),
            image: billboard.image.clone(),
            ..Billboard::default()
        }
    );

    let encoded = packet.to_json().unwrap();
    assert_eq!(
        encoded,
        json!({ "id": "p1", "billboard": { "scale": 0.7, "image": "http://localhost/img.png" } })
    );
}

#[test]
fn second_add_of_same_kind_wins() {
    let mut packet = Packet::new("p");
    packet.add(Point::new().with_pixel_size(1.0));
    let old = packet.add(Point::new().with_pixel_size(9.0));
    assert!(matches!(old, Some(Property::Point(p)) if p.pixel_size == Some(PropertyValue::Constant(1.0))));
    assert_eq!(packet.properties().len(), 1);
    assert_eq!(
        packet.property::<Point>().unwrap().pixel_size,
        Some(PropertyValue::Constant(9.0))
    );
}

#[test]
fn unknown_fields_are_dropped_without_failure() {
    let decoded = decode_document(
        &json!([{ "id": "p", "billboard": { "scale": 2 }, "wall": { "positions": {} } }]),
        &Config::strict(),
    )
    .expect("unknown keys never reject");
    let packet = &decoded.value.packets()[0];
    assert_eq!(packet.len(), 1);
    assert!(packet.get(PropertyKind::Billboard).is_some());
    assert_eq!(decoded.report.ignored().len(), 1);
}

#[test]
fn document_order_and_count_are_preserved() {
    let mut document = Document::new();
    for id in ["z", "m", "a", "m"] {
        document.add(Packet::new(id));
    }
    let text = czml_core::to_string(&document, &Config::default()).unwrap();
    let decoded = parse_document(&text).unwrap().value;
    assert_eq!(decoded, document);
    let ids: Vec<_> = decoded.iter().map(|p| p.id.clone().unwrap()).collect();
    assert_eq!(ids, ["z", "m", "a", "m"]);
}

#[test]
fn empty_interval_survives_round_trip() {
    let position = Position::new(vec![
        Interval::sampled(
            "2012-01-01T00:00:00Z",
            [
                (0.0, PositionValue::cartesian(1.0, 2.0, 3.0)),
                (60.0, PositionValue::cartesian(4.0, 5.0, 6.0)),
            ],
        )
        .with_span(TimeInterval::new("2012-01-01T00:00:00Z", "2012-01-01T00:01:00Z")),
        Interval::new(TimeInterval::new("2012-01-01T00:01:00Z", "2012-01-01T00:02:00Z")),
        Interval::constant(
            TimeInterval::new("2012-01-01T00:02:00Z", "2012-01-01T00:03:00Z"),
            PositionValue::cartesian(7.0, 8.0, 9.0),
        ),
    ]);
    let document = Document::new().with_packet(Packet::new("moving").with(position));
    let text = czml_core::to_string(&document, &Config::default()).unwrap();
    let decoded = parse_document(&text).unwrap();
    assert!(decoded.report.is_complete());

    let position = decoded.value.packets()[0].property::<Position>().unwrap();
    let counts: Vec<usize> = position.value.intervals().unwrap().iter().map(Interval::len).collect();
    assert_eq!(counts, [2, 0, 1]);
    assert_eq!(
        position.value.intervals().unwrap()[2].samples[0],
        Sample::untagged(PositionValue::cartesian(7.0, 8.0, 9.0))
    );
}

#[test]
fn availability_and_delete_flags() {
    let decoded = parse_document(
        r#"[{"id":"gone","delete":true},{"id":"timed","availability":"2012-01-01T00:00:00Z/2012-01-02T00:00:00Z"}]"#,
    )
    .unwrap()
    .value;
    assert_eq!(decoded.find("gone").unwrap().delete, Some(true));
    let availability = decoded.find("timed").unwrap().availability.as_ref().unwrap();
    assert_eq!(availability.intervals()[0].stop, "2012-01-02T00:00:00Z");
}

#[test]
fn constant_position_scenario() {
    let text = r#"{"position":{"cartesian":[9.3,8.2,7.1]}}"#;
    let document = parse_document(text).unwrap().value;
    let packet = &document.packets()[0];
    assert!(packet.id.is_none());

    let position = packet.property::<Position>().unwrap();
    assert_eq!(
        position.value,
        PropertyValue::Constant(PositionValue::cartesian(9.3, 8.2, 7.1))
    );
    assert_eq!(
        czml_core::to_string(&document, &Config::default()).unwrap(),
        format!("[{}]", text)
    );
}

#[test]
fn interval_position_scenario() {
    let decoded = parse_document(
        r#"{"position":{
            "interval":"2012-01-01T00:00:00Z/2012-01-01T01:00:00Z",
            "cartesian":[0,0,0,0, 3600,1,1,1]
        }}"#,
    )
    .unwrap();
    let position = decoded.value.packets()[0].property::<Position>().unwrap();
    let intervals = position.value.intervals().expect("interval form");
    assert_eq!(intervals.len(), 1);
    assert_eq!(
        intervals[0].span,
        Some(TimeInterval::new("2012-01-01T00:00:00Z", "2012-01-01T01:00:00Z"))
    );
    assert_eq!(
        intervals[0].samples,
        [
            Sample::new(0.0, PositionValue::cartesian(0.0, 0.0, 0.0)),
            Sample::new(3600.0, PositionValue::cartesian(1.0, 1.0, 1.0)),
        ]
    );
}
