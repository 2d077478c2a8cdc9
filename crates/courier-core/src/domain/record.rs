use serde::{Deserialize, Serialize};

/// Placeholder for a name or location the extractor could not recover.
pub const UNKNOWN: &str = "Unknown";

/// One customer found in pasted text, anchored on a single phone occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub name: String,
    pub phone: String,
    pub location: String,
    pub address: String,
}

impl CustomerRecord {
    /// Builds a record, filling empty fields with [`UNKNOWN`]. `address`
    /// mirrors `location`.
    pub fn new(name: &str, phone: String, location: &str) -> Self {
        let name = or_unknown(name);
        let location = or_unknown(location);
        Self {
            name,
            phone,
            address: location.clone(),
            location,
        }
    }

    pub fn has_name(&self) -> bool {
        self.name != UNKNOWN
    }

    pub fn has_location(&self) -> bool {
        self.location != UNKNOWN
    }
}

fn or_unknown(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        UNKNOWN.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{CustomerRecord, UNKNOWN};

    #[test]
    fn record_defaults_missing_fields() {
        let record = CustomerRecord::new("  ", "9876543210".to_string(), "");
        assert_eq!(record.name, UNKNOWN);
        assert_eq!(record.location, UNKNOWN);
        assert_eq!(record.address, UNKNOWN);
        assert!(!record.has_name());
        assert!(!record.has_location());
    }

    #[test]
    fn record_address_mirrors_location() {
        let record = CustomerRecord::new("Priya", "9876543210".to_string(), "MG Road");
        assert_eq!(record.address, "MG Road");
        assert_eq!(record.location, record.address);
    }

    #[test]
    fn record_serializes_with_caller_field_names() {
        let record = CustomerRecord::new("Priya", "9876543210".to_string(), "MG Road");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["name"], "Priya");
        assert_eq!(value["phone"], "9876543210");
        assert_eq!(value["location"], "MG Road");
        assert_eq!(value["address"], "MG Road");
    }
}
