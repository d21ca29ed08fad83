use crate::error::{PurchaseError, Result};
use crate::product::Product;
use serde::{Deserialize, Serialize};
use tracing::debug;

const THANK_YOU_MESSAGE: &str = "コーラをご購入いただきありがとうございます！";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub amount: i32,
}

impl PurchaseRequest {
    pub fn new(item: impl Into<String>, amount: i32) -> Self {
        Self {
            item: Some(item.into()),
            amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseResult {
    pub message: String,
    pub success: bool,
}

impl PurchaseResult {
    pub fn thank_you() -> Self {
        Self {
            message: THANK_YOU_MESSAGE.to_string(),
            success: true,
        }
    }
}

impl From<PurchaseError> for PurchaseResult {
    fn from(err: PurchaseError) -> Self {
        Self {
            message: err.to_string(),
            success: false,
        }
    }
}

/// Validate a purchase. The item is checked before the amount, so an
/// unknown item is reported as such whatever was paid.
pub fn handle_purchase(request: &PurchaseRequest) -> Result<PurchaseResult> {
    let product =
        Product::from_item(request.item.as_deref()).ok_or(PurchaseError::UnsupportedProduct)?;

    let price = product.price();
    if request.amount < price {
        return Err(PurchaseError::InsufficientAmount {
            price,
            amount: request.amount,
        });
    }

    debug!("Sold {} for {}", product.name(), request.amount);
    Ok(PurchaseResult::thank_you())
}
