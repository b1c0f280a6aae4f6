//! Report endpoints: `/api/reports/{kind}?type={timeframe}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::gateway::{Gateway, Method};

/// Which report to fetch; becomes the path segment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Sales,
    Stock,
    Spoilt,
    PaymentStatus,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Sales => "sales",
            ReportKind::Stock => "stock",
            ReportKind::Spoilt => "spoilt",
            ReportKind::PaymentStatus => "payment_status",
        }
    }
}

/// Aggregation window; becomes the `type` query parameter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFrame {
    Daily,
    Weekly,
    Monthly,
}

impl TimeFrame {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFrame::Daily => "daily",
            TimeFrame::Weekly => "weekly",
            TimeFrame::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReportRow {
    pub store_name: String,
    pub product_name: String,
    pub quantity_sold: i64,
    pub total_revenue: f64,
    pub transaction_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockReportRow {
    pub store_name: String,
    pub product_name: String,
    pub items_in_stock: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpoiltReportRow {
    pub store_name: String,
    pub product_name: String,
    pub items_spoilt: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentStatusReportRow {
    pub store_name: String,
    pub product_name: String,
    pub quantity_received: i64,
    pub payment_status: bool,
}

fn report_path(kind: ReportKind, frame: TimeFrame) -> String {
    format!("/api/reports/{}?type={}", kind.as_str(), frame.as_str())
}

impl Gateway {
    pub async fn sales_report(&self, frame: TimeFrame) -> Result<Vec<SalesReportRow>, ApiError> {
        self.call_decoded(Method::GET, &report_path(ReportKind::Sales, frame), None)
            .await
    }

    pub async fn stock_report(&self, frame: TimeFrame) -> Result<Vec<StockReportRow>, ApiError> {
        self.call_decoded(Method::GET, &report_path(ReportKind::Stock, frame), None)
            .await
    }

    pub async fn spoilt_report(&self, frame: TimeFrame) -> Result<Vec<SpoiltReportRow>, ApiError> {
        self.call_decoded(Method::GET, &report_path(ReportKind::Spoilt, frame), None)
            .await
    }

    pub async fn payment_status_report(
        &self,
        frame: TimeFrame,
    ) -> Result<Vec<PaymentStatusReportRow>, ApiError> {
        self.call_decoded(
            Method::GET,
            &report_path(ReportKind::PaymentStatus, frame),
            None,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_path_matches_the_backend_route_shape() {
        assert_eq!(
            report_path(ReportKind::PaymentStatus, TimeFrame::Weekly),
            "/api/reports/payment_status?type=weekly"
        );
        assert_eq!(
            report_path(ReportKind::Sales, TimeFrame::Daily),
            "/api/reports/sales?type=daily"
        );
    }
}
