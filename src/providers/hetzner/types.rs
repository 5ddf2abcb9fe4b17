use serde::{Deserialize, Serialize};
use std::fmt;

pub const TXT_RECORD_TYPE: &str = "TXT";
pub const CHALLENGE_TTL: u32 = 300;

#[derive(Deserialize, Debug, Clone)]
pub struct ZoneList {
    #[serde(default)]
    pub zones: Vec<Zone>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Zone {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zone '{}' ({})", self.name, self.id)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct RecordList {
    #[serde(default)]
    pub records: Vec<Record>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Record {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ttl: Option<u32>,
    #[serde(default, rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub zone_id: String,
}

impl Record {
    pub fn is_challenge(&self, label: &str, key: &str) -> bool {
        self.record_type == TXT_RECORD_TYPE && self.name == label && self.value == key
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct NewRecord {
    pub id: String,
    pub name: String,
    pub ttl: u32,
    #[serde(rename = "type")]
    pub record_type: String,
    pub value: String,
    pub zone_id: String,
}

impl NewRecord {
    pub fn txt(label: &str, value: &str, zone_id: &str) -> Self {
        NewRecord {
            id: String::new(),
            name: label.to_string(),
            ttl: CHALLENGE_TTL,
            record_type: TXT_RECORD_TYPE.to_string(),
            value: value.to_string(),
            zone_id: zone_id.to_string(),
        }
    }
}
