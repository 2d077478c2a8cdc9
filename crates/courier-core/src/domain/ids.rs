use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! id_type {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            pub fn get(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().trim_start_matches('#').parse()?))
            }
        }
    };
}

id_type!(OrderId);
id_type!(DriverId);
id_type!(StoreId);

#[cfg(test)]
mod tests {
    use super::OrderId;

    #[test]
    fn order_id_parses_with_hash_prefix() {
        let id: OrderId = "#12".parse().unwrap();
        assert_eq!(id, OrderId::new(12));
        assert_eq!(id.to_string(), "12");
    }

    #[test]
    fn order_id_rejects_garbage() {
        assert!("twelve".parse::<OrderId>().is_err());
    }
}
