//! A CZML document: an ordered list of packets, optionally led by the
//! `"document"` header packet.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};

use crate::config::Config;
use crate::error::{DecodeError, EncodeError};
use crate::json::{expect_object, FieldReader};
use crate::packet::Packet;
use crate::properties::Clock;
use crate::report::DecodeContext;

/// `id` of the header packet.
pub const DOCUMENT_ID: &str = "document";

/// Metadata carried by the leading `{"id": "document", ...}` packet.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentHeader {
    pub name: Option<String>,
    /// CZML schema version, e.g. `"1.0"`.
    pub version: Option<String>,
    pub clock: Option<Clock>,
}

impl Default for DocumentHeader {
    fn default() -> Self {
        Self {
            name: None,
            version: Some("1.0".to_string()),
            clock: None,
        }
    }
}

impl DocumentHeader {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    fn decode(value: &JsonValue, ctx: &mut DecodeContext) -> Result<Self, DecodeError> {
        let mut fields = FieldReader::new(value, ctx)?;
        fields.mark_known("id");
        let header = Self {
            name: fields.primitive("name"),
            version: fields.primitive("version"),
            clock: fields.nested("clock", Clock::decode),
        };
        fields.finish();
        Ok(header)
    }

    fn to_json(&self) -> JsonValue {
        let mut map = Map::new();
        map.insert("id".into(), JsonValue::String(DOCUMENT_ID.into()));
        if let Some(name) = &self.name {
            map.insert("name".into(), JsonValue::String(name.clone()));
        }
        if let Some(version) = &self.version {
            map.insert("version".into(), JsonValue::String(version.clone()));
        }
        if let Some(clock) = &self.clock {
            map.insert("clock".into(), clock.to_json());
        }
        JsonValue::Object(map)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub header: Option<DocumentHeader>,
    packets: Vec<Packet>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, header: DocumentHeader) -> Self {
        self.header = Some(header);
        self
    }

    /// Append a packet. Order is preserved; ids are not deduplicated.
    pub fn add(&mut self, packet: Packet) {
        self.packets.push(packet);
    }

    pub fn with_packet(mut self, packet: Packet) -> Self {
        self.add(packet);
        self
    }

    pub fn packets(&self) -> &[Packet] {
        &self.packets
    }

    pub fn packets_mut(&mut self) -> &mut [Packet] {
        &mut self.packets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Packet> {
        self.packets.iter()
    }

    /// First packet with the given `id`.
    pub fn find(&self, id: &str) -> Option<&Packet> {
        self.packets.iter().find(|p| p.id.as_deref() == Some(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Packet> {
        self.packets.iter_mut().find(|p| p.id.as_deref() == Some(id))
    }

    /// Number of packets, header excluded.
    pub fn len(&self) -> usize {
        self.packets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    pub fn into_packets(self) -> Vec<Packet> {
        self.packets
    }

    /// Decode a document from a packet array, or from a single packet
    /// object. Packets are decoded independently: one that cannot be
    /// decoded at all is left out and recorded in `ctx`. Only a packet with
    /// id `"document"` at index 0 is taken as the header.
    pub fn decode(root: &JsonValue, ctx: &mut DecodeContext) -> Result<Self, DecodeError> {
        let items = match root {
            JsonValue::Array(items) => items.as_slice(),
            JsonValue::Object(_) => std::slice::from_ref(root),
            other => return Err(DecodeError::expected("array of packets", other)),
        };

        let mut document = Document::new();
        for (index, item) in items.iter().enumerate() {
            ctx.enter_packet(Some(index), None);
            if index == 0 && is_header(item) {
                ctx.set_packet_id(Some(DOCUMENT_ID.to_string()));
                match DocumentHeader::decode(item, ctx) {
                    Ok(header) => document.header = Some(header),
                    Err(error) => ctx.skip(None, error),
                }
            } else {
                match Packet::decode(item, ctx) {
                    Ok(packet) => document.packets.push(packet),
                    Err(error) => ctx.skip(None, error),
                }
            }
            ctx.leave_packet();
        }
        log::debug!(
            "decoded CZML document: {} packet(s), {} issue(s)",
            document.len(),
            ctx.report().issues().len()
        );
        Ok(document)
    }

    /// Encode as a packet array, header first.
    pub fn to_json(&self) -> Result<JsonValue, EncodeError> {
        let mut out = Vec::with_capacity(self.packets.len() + 1);
        if let Some(header) = &self.header {
            out.push(header.to_json());
        }
        for (index, packet) in self.packets.iter().enumerate() {
            out.push(packet.to_json().map_err(|e| e.in_field(format!("[{index}]")))?);
        }
        Ok(JsonValue::Array(out))
    }
}

fn is_header(value: &JsonValue) -> bool {
    expect_object(value)
        .ok()
        .and_then(|obj| obj.get("id"))
        .and_then(JsonValue::as_str)
        == Some(DOCUMENT_ID)
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Packet;
    type IntoIter = std::slice::Iter<'a, Packet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Packet> for Document {
    fn from_iter<I: IntoIterator<Item = Packet>>(iter: I) -> Self {
        Self {
            header: None,
            packets: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::Error;

        self.to_json()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

// Strict: any skipped packet, property or field fails deserialization.
impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Document, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;
        crate::json::decode_document(&value, &Config::strict())
            .map(|decoded| decoded.value)
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::Billboard;
    use crate::value::{ClockRange, TimeInterval};
    use serde_json::json;

    fn decode(value: JsonValue) -> (Document, DecodeContext) {
        let mut ctx = DecodeContext::default();
        let document = Document::decode(&value, &mut ctx).expect("decode document");
        (document, ctx)
    }

    #[test]
    fn header_is_split_from_packets() {
        let j = json!([
            {
                "id": "document",
                "name": "simple",
                "version": "1.0",
                "clock": { "interval": "a/b", "range": "CLAMPED" }
            },
            { "id": "p1" },
            { "id": "p2" }
        ]);
        let (document, ctx) = decode(j.clone());
        let header = document.header.as_ref().expect("header");
        assert_eq!(header.name.as_deref(), Some("simple"));
        assert_eq!(
            header.clock.as_ref().and_then(|c| c.range),
            Some(ClockRange::Clamped)
        );
        assert_eq!(document.len(), 2);
        assert!(ctx.report().is_complete());
        assert_eq!(document.to_json().unwrap(), j);
    }

    #[test]
    fn document_id_after_first_position_is_an_ordinary_packet() {
        let (document, _) = decode(json!([{ "id": "p1" }, { "id": "document", "name": "late" }]));
        assert!(document.header.is_none());
        assert_eq!(document.len(), 2);
        assert_eq!(document.packets()[1].name.as_deref(), Some("late"));
    }

    #[test]
    fn order_and_count_survive_round_trip() {
        let ids = ["c", "a", "b", "a"];
        let j = JsonValue::Array(ids.iter().map(|id| json!({ "id": id })).collect());
        let (document, _) = decode(j.clone());
        let decoded: Vec<&str> = document.iter().filter_map(|p| p.id.as_deref()).collect();
        assert_eq!(decoded, ids);
        assert_eq!(document.to_json().unwrap(), j);
    }

    #[test]
    fn malformed_packet_is_isolated_and_reported() {
        let (document, ctx) = decode(json!([{ "id": "a" }, 17, { "id": "c" }]));
        assert_eq!(document.len(), 2);
        let issues = ctx.report().issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location.packet_index, Some(1));
        assert!(issues[0].location.path.is_empty());
    }

    #[test]
    fn single_object_is_a_one_packet_document() {
        let (document, _) = decode(json!({ "id": "only" }));
        assert_eq!(document.len(), 1);
        assert!(document.find("only").is_some());
        assert_eq!(document.to_json().unwrap(), json!([{ "id": "only" }]));
    }

    #[test]
    fn scalar_root_is_rejected() {
        let mut ctx = DecodeContext::default();
        assert!(Document::decode(&json!("czml"), &mut ctx).is_err());
    }

    #[test]
    fn built_document_encodes_header_first() {
        let mut document = Document::new().with_header(
            DocumentHeader::new("built").with_clock(Clock::new(TimeInterval::new("a", "b"))),
        );
        document.add(Packet::new("p1").with(Billboard::new().with_scale(0.5)));
        assert_eq!(
            document.to_json().unwrap(),
            json!([
                {
                    "id": "document",
                    "name": "built",
                    "version": "1.0",
                    "clock": { "interval": "a/b", "currentTime": "a" }
                },
                { "id": "p1", "billboard": { "scale": 0.5 } }
            ])
        );
        assert!(document.find_mut("p1").is_some());
    }

    #[test]
    fn serde_deserialize_is_strict() {
        let ok: Document = serde_json::from_str(r#"[{"id":"a"}]"#).unwrap();
        assert_eq!(ok.len(), 1);
        assert!(serde_json::from_str::<Document>(r#"[{"id":"a"}, 3]"#).is_err());
    }
}
