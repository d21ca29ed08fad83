use axum::{http::StatusCode, Json};
use tracing::{info, warn};
use vending_core::{
    handle_purchase, health_check, HealthStatus, PurchaseError, PurchaseRequest, PurchaseResult,
};

fn status_for(err: &PurchaseError) -> StatusCode {
    match err {
        PurchaseError::UnsupportedProduct | PurchaseError::InsufficientAmount { .. } => {
            StatusCode::BAD_REQUEST
        }
    }
}

pub async fn purchase(
    Json(request): Json<PurchaseRequest>,
) -> (StatusCode, Json<PurchaseResult>) {
    match handle_purchase(&request) {
        Ok(result) => {
            info!(item = ?request.item, amount = request.amount, "Purchase completed");
            (StatusCode::OK, Json(result))
        }
        Err(e) => {
            warn!(
                item = ?request.item,
                amount = request.amount,
                reason = e.kind(),
                "Purchase rejected"
            );
            (status_for(&e), Json(PurchaseResult::from(e)))
        }
    }
}

pub async fn health() -> Json<HealthStatus> {
    Json(health_check())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_purchase_success() {
        let (status, Json(body)) = purchase(Json(PurchaseRequest::new("Cola", 120))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.success);
    }

    #[tokio::test]
    async fn test_purchase_rejections_are_bad_request() {
        let (status, Json(body)) = purchase(Json(PurchaseRequest::new("cola", 0))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);

        let (status, Json(body)) = purchase(Json(PurchaseRequest::new("water", 500))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "申し訳ございません。コーラのみ販売しております。");
    }

    #[tokio::test]
    async fn test_health_always_ok() {
        for _ in 0..3 {
            let Json(body) = health().await;
            assert_eq!(body.status, "OK");
        }
    }
}
