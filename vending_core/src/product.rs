use serde::{Deserialize, Serialize};

/// Price of one cola, in yen.
pub const UNIT_PRICE: i32 = 100;

const COLA_ASCII: &str = "cola";
const COLA_LOCALIZED: &str = "コーラ";

/// The products this machine sells. There is only one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Product {
    Cola,
}

impl Product {
    /// Resolve a requested item name. The ASCII name matches in any letter
    /// case, the localized name only exactly.
    pub fn from_item(item: Option<&str>) -> Option<Self> {
        match item {
            Some(name) if name.eq_ignore_ascii_case(COLA_ASCII) || name == COLA_LOCALIZED => {
                Some(Product::Cola)
            }
            _ => None,
        }
    }

    pub fn price(&self) -> i32 {
        match self {
            Product::Cola => UNIT_PRICE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Product::Cola => COLA_ASCII,
        }
    }
}
