use super::structs::{MeteringRecord, RawTelegram};
use super::utils;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

/// Leaf of a [`MeteringRecord`] that is filled by exactly one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Header,
    ElectricityEquipmentId,
    Tariff,
    Switch,
    Threshold,
    LowConsumed,
    LowProduced,
    HighConsumed,
    HighProduced,
    CurrentConsumed,
    CurrentProduced,
    GasEquipmentId,
    GasDeviceType,
    GasTotal,
    GasValve,
    MessageCode,
    MessageText,
}

impl Field {
    pub fn path(&self) -> &'static str {
        match self {
            Field::Header => "header",
            Field::ElectricityEquipmentId => "electricity.equipment_id",
            Field::Tariff => "electricity.tariff",
            Field::Switch => "electricity.switch",
            Field::Threshold => "electricity.threshold_kw",
            Field::LowConsumed => "electricity.low.consumed_kwh",
            Field::LowProduced => "electricity.low.produced_kwh",
            Field::HighConsumed => "electricity.high.consumed_kwh",
            Field::HighProduced => "electricity.high.produced_kwh",
            Field::CurrentConsumed => "electricity.current_consumed_kw",
            Field::CurrentProduced => "electricity.current_produced_kw",
            Field::GasEquipmentId => "gas.equipment_id",
            Field::GasDeviceType => "gas.device_type",
            Field::GasTotal => "gas.total_m3",
            Field::GasValve => "gas.valve",
            Field::MessageCode => "message.code",
            Field::MessageText => "message.text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Integer,
    Float,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Absent,
    Text(String),
    Integer(i64),
    Float(f64),
}

impl FieldValue {
    fn into_text(self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    fn into_integer(self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(i),
            _ => None,
        }
    }

    fn into_float(self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(f),
            _ => None,
        }
    }
}

/// Line pattern with the kind of its first capture and the value used
/// when no line matches.
pub struct FieldRule {
    pub field: Field,
    pub pattern: Regex,
    pub kind: ValueKind,
    pub default: FieldValue,
}

impl FieldRule {
    fn new(field: Field, pattern: &str, kind: ValueKind, default: FieldValue) -> Self {
        /* Every pattern is anchored per line */
        let pattern = Regex::new(&format!("(?m){}", pattern))
            .unwrap_or_else(|e| panic!("invalid pattern for {}: {}", field.path(), e));

        Self { field, pattern, kind, default }
    }

    pub fn path(&self) -> &'static str {
        self.field.path()
    }

    /// Applies the rule to the whole telegram text. Never fails, a missing
    /// line or a capture that does not coerce yields the default.
    pub fn extract(&self, text: &str) -> FieldValue {
        let captured = match self.pattern.captures(text).and_then(|c| c.get(1)) {
            Some(m) => m.as_str(),
            None => return self.default.clone(),
        };

        let value = match self.kind {
            ValueKind::Text => Some(FieldValue::Text(captured.to_string())),
            _ if captured.is_empty() => None,
            ValueKind::Integer => utils::parse_int(self.path(), captured).map(FieldValue::Integer),
            ValueKind::Float => utils::parse_float(self.path(), captured).map(FieldValue::Float),
        };

        value.unwrap_or_else(|| self.default.clone())
    }
}

lazy_static! {
    static ref RULES: Vec<FieldRule> = {
        use FieldValue::Absent;
        use ValueKind::*;

        vec![
            FieldRule::new(Field::Header, r"^(/.*)$", Text, FieldValue::Text(String::new())),

            FieldRule::new(Field::ElectricityEquipmentId, r"^0-0:96\.1\.1\(([^)]+)\)$", Text, Absent),
            FieldRule::new(Field::Tariff, r"^0-0:96\.14\.0\(([0-9]+)\)$", Integer, Absent),
            FieldRule::new(Field::Switch, r"^0-0:96\.3\.10\(((?-u:\d))\)$", Integer, Absent),
            FieldRule::new(Field::Threshold, r"^0-0:17\.0\.0\(([0-9]{4}\.[0-9]{2})\*kW\)$", Float, Absent),
            FieldRule::new(Field::LowConsumed, r"^1-0:1\.8\.1\(([0-9]+\.[0-9]+)\*kWh\)$", Float, Absent),
            FieldRule::new(Field::LowProduced, r"^1-0:2\.8\.1\(([0-9]+\.[0-9]+)\*kWh\)$", Float, Absent),
            FieldRule::new(Field::HighConsumed, r"^1-0:1\.8\.2\(([0-9]+\.[0-9]+)\*kWh\)$", Float, Absent),
            FieldRule::new(Field::HighProduced, r"^1-0:2\.8\.2\(([0-9]+\.[0-9]+)\*kWh\)$", Float, Absent),
            FieldRule::new(Field::CurrentConsumed, r"^1-0:1\.7\.0\(([0-9]+\.[0-9]+)\*kW\)$", Float, Absent),
            FieldRule::new(Field::CurrentProduced, r"^1-0:2\.7\.0\(([0-9]+\.[0-9]+)\*kW\)$", Float, Absent),

            FieldRule::new(Field::GasEquipmentId, r"^0-1:96\.1\.0\(([^)]+)\)$", Text, Absent),
            FieldRule::new(Field::GasDeviceType, r"^0-1:24\.1\.0\(((?-u:\d))+\)$", Integer, Absent),
            // DSMR 4 puts the reading on the 24.2.1 line, DSMR 3 on a bare continuation line
            FieldRule::new(
                Field::GasTotal,
                r"^(?:0-1:24\.2\.1(?:\(\d+S\))?)?\(([0-9]{5}\.[0-9]{3})(?:\*m3)?\)$",
                Float,
                FieldValue::Float(0.0),
            ),
            FieldRule::new(Field::GasValve, r"^0-1:24\.4\.0\(((?-u:\d))\)$", Integer, Absent),

            FieldRule::new(Field::MessageCode, r"^0-0:96\.13\.1\((\d+)\)$", Text, Absent),
            FieldRule::new(Field::MessageText, r"^0-0:96\.13\.0\((.+)\)$", Text, Absent),
        ]
    };
}

/// The rule table in evaluation order.
pub fn rules() -> &'static [FieldRule] {
    &RULES
}

/// Decodes a telegram, given either as one `\n` joined string or as its
/// lines. Fields without a usable line get their rule's default.
pub fn parse<T: Into<RawTelegram>>(raw: T) -> MeteringRecord {
    let raw: RawTelegram = raw.into();
    let mut record = MeteringRecord::default();

    for rule in rules() {
        let value = rule.extract(raw.as_str());
        debug!("Rule {} yielded {:?}", rule.path(), value);
        apply(&mut record, rule.field, value);
    }

    record.raw = raw;
    record
}

fn apply(record: &mut MeteringRecord, field: Field, value: FieldValue) {
    let e = &mut record.electricity;
    match field {
        Field::Header => record.header = value.into_text().unwrap_or_default(),
        Field::ElectricityEquipmentId => e.equipment_id = value.into_text(),
        Field::Tariff => e.tariff = value.into_integer(),
        Field::Switch => e.switch = value.into_integer(),
        Field::Threshold => e.threshold_kw = value.into_float(),
        Field::LowConsumed => e.low.consumed_kwh = value.into_float(),
        Field::LowProduced => e.low.produced_kwh = value.into_float(),
        Field::HighConsumed => e.high.consumed_kwh = value.into_float(),
        Field::HighProduced => e.high.produced_kwh = value.into_float(),
        Field::CurrentConsumed => e.current_consumed_kw = value.into_float(),
        Field::CurrentProduced => e.current_produced_kw = value.into_float(),
        Field::GasEquipmentId => record.gas.equipment_id = value.into_text(),
        Field::GasDeviceType => record.gas.device_type = value.into_integer(),
        Field::GasTotal => record.gas.total_m3 = value.into_float().unwrap_or_default(),
        Field::GasValve => record.gas.valve = value.into_integer(),
        Field::MessageCode => record.message.code = value.into_text(),
        Field::MessageText => record.message.text = value.into_text(),
    }
}
