use thiserror::Error;

/// Reasons a purchase is rejected. `Display` is the message shown to the buyer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("申し訳ございません。コーラのみ販売しております。")]
    UnsupportedProduct,

    #[error("金額が不足しています。コーラは{price}円です。")]
    InsufficientAmount { price: i32, amount: i32 },
}

impl PurchaseError {
    pub fn kind(&self) -> &'static str {
        match self {
            PurchaseError::UnsupportedProduct => "unsupported_product",
            PurchaseError::InsufficientAmount { .. } => "insufficient_amount",
        }
    }
}

pub type Result<T> = std::result::Result<T, PurchaseError>;
