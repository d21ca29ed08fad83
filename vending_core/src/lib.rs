pub mod error;
pub mod health;
pub mod product;
pub mod purchase;

pub use error::{PurchaseError, Result};
pub use health::{health_check, HealthStatus};
pub use product::{Product, UNIT_PRICE};
pub use purchase::{handle_purchase, PurchaseRequest, PurchaseResult};
