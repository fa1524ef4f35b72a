//! Transaction fields and the gateway's required-field policy.
//!
//! # Design
//! `FieldSet` is an insertion-ordered list of `(name, value)` pairs. Overwriting
//! a name keeps its original position so the POST body order only depends on
//! when a field was first supplied. Names are case-sensitive and must match
//! the gateway's documented spelling.

/// Value an HTML form submit button posts; never forwarded to the gateway.
const SUBMIT_VALUE: &str = "Submit";

/// Fields the gateway rejects a request without, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 20] = [
    "SerialNumber",
    "DeveloperSerialNumber",
    "OrderNumber",
    "ItemNumber",
    "ItemDescription",
    "ItemCost",
    "Quantity",
    "Taxable",
    "SJName",
    "Email",
    "StreetAddress",
    "City",
    "State",
    "ZipCode",
    "ShipToPhone",
    "OrderString",
    "AccountNumber",
    "Month",
    "Year",
    "TransactionAmount",
];

/// Placeholders the gateway recommends for required fields that carry no
/// business meaning for a given charge.
const DEFAULT_VALUES: [(&str, &str); 8] = [
    ("SJName", "NA"),
    ("Email", "None"),
    ("StreetAddress", "None"),
    ("City", "None"),
    ("State", "XX"),
    ("ZipCode", "00000"),
    ("ShipToPhone", "0000000000"),
    ("OrderString", "1~None~0.00~0~N~||"),
];

/// Recommended default for `name`, if the gateway documents one.
pub fn default_value(name: &str) -> Option<&'static str> {
    DEFAULT_VALUES
        .iter()
        .find(|(field, _)| *field == name)
        .map(|(_, value)| *value)
}

/// Ordered collection of named transaction parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    entries: Vec<(String, String)>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A field set holding only the merchant and developer serial numbers.
    pub fn with_credentials(serial_number: &str, developer_serial_number: &str) -> Self {
        let mut fields = Self::new();
        fields.add_field("SerialNumber", serial_number);
        fields.add_field("DeveloperSerialNumber", developer_serial_number);
        fields
    }

    /// Store `name = value`. Empty values and the literal `"Submit"` are
    /// treated as not provided and silently dropped.
    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() || value == SUBMIT_VALUE {
            return;
        }
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Apply `add_field` to every pair, in iteration order.
    pub fn add_fields<I, K, V>(&mut self, fields: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in fields {
            self.add_field(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Field names only, for logging without leaking card data.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Fill gateway defaults for absent required fields, then report every
    /// required field that is still missing.
    ///
    /// Defaults are injected into `self` before the check, so they end up in
    /// the outgoing request exactly as if the caller had supplied them.
    pub fn complete_required(&mut self) -> Result<(), Vec<String>> {
        let mut missing = Vec::new();
        for name in REQUIRED_FIELDS {
            if self.contains(name) {
                continue;
            }
            match default_value(name) {
                Some(value) => {
                    tracing::debug!(field = name, "applying gateway default");
                    self.add_field(name, value);
                }
                None => missing.push(format!("Required field not found: {name}")),
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }
}

impl<K, V> FromIterator<(K, V)> for FieldSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        fields.add_fields(iter);
        fields
    }
}
