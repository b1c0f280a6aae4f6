//! Reports (merchant and admin dashboards). Read-only.

use myduka_client::Gateway;
use myduka_client::api::{
    PaymentStatusReportRow, ReportKind, SalesReportRow, SpoiltReportRow, StockReportRow,
    TimeFrame,
};

use super::ViewStatus;

/// Rows of whichever report was last fetched.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportData {
    Empty,
    Sales(Vec<SalesReportRow>),
    Stock(Vec<StockReportRow>),
    Spoilt(Vec<SpoiltReportRow>),
    PaymentStatus(Vec<PaymentStatusReportRow>),
}

#[derive(Debug, Clone)]
pub struct ReportsView {
    pub kind: ReportKind,
    pub frame: TimeFrame,
    pub data: ReportData,
    pub status: ViewStatus,
}

impl Default for ReportsView {
    fn default() -> Self {
        Self {
            kind: ReportKind::Sales,
            frame: TimeFrame::Daily,
            data: ReportData::Empty,
            status: ViewStatus::default(),
        }
    }
}

impl ReportsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-fetch after a kind/timeframe selection change.
    pub async fn select(&mut self, gateway: &Gateway, kind: ReportKind, frame: TimeFrame) {
        self.kind = kind;
        self.frame = frame;
        self.refresh(gateway).await;
    }

    pub async fn refresh(&mut self, gateway: &Gateway) {
        let fetched = match self.kind {
            ReportKind::Sales => gateway.sales_report(self.frame).await.map(ReportData::Sales),
            ReportKind::Stock => gateway.stock_report(self.frame).await.map(ReportData::Stock),
            ReportKind::Spoilt => gateway
                .spoilt_report(self.frame)
                .await
                .map(ReportData::Spoilt),
            ReportKind::PaymentStatus => gateway
                .payment_status_report(self.frame)
                .await
                .map(ReportData::PaymentStatus),
        };
        match fetched {
            Ok(data) => {
                self.data = data;
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_on_the_daily_sales_report() {
        let view = ReportsView::new();
        assert_eq!(view.kind, ReportKind::Sales);
        assert_eq!(view.frame, TimeFrame::Daily);
        assert_eq!(view.data, ReportData::Empty);
    }
}
