//! Client helpers for `/reports`. Laborers are refused every report except the
//! dashboard.

use super::types::{DateRange, ReportFilter};
use crate::api::{ApiClient, ApiError};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct RangeQuery<'a> {
    #[serde(flatten)]
    range: DateRange,
    #[serde(flatten)]
    filter: &'a ReportFilter,
}

/// Role-specific counters for the landing page.
///
/// # Errors
/// Returns an `ApiError` if the request fails.
pub async fn dashboard_stats(client: &ApiClient) -> Result<Value, ApiError> {
    client.get_json("/reports/dashboard-stats").await
}

/// # Errors
/// Returns an `ApiError` if the request fails.
pub async fn attendance_summary(
    client: &ApiClient,
    range: DateRange,
    filter: &ReportFilter,
) -> Result<Value, ApiError> {
    client
        .get_json_query("/reports/attendance-summary", &RangeQuery { range, filter })
        .await
}

/// # Errors
/// Returns an `ApiError` if the request fails.
pub async fn leave_summary(
    client: &ApiClient,
    range: DateRange,
    filter: &ReportFilter,
) -> Result<Value, ApiError> {
    client
        .get_json_query("/reports/leave-summary", &RangeQuery { range, filter })
        .await
}

/// # Errors
/// Returns an `ApiError` if the request fails.
pub async fn team_performance(client: &ApiClient, range: DateRange) -> Result<Value, ApiError> {
    client
        .get_json_query("/reports/team-performance", &range)
        .await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::ApiConfig;
    use crate::features::leave_requests::LeaveStatus;
    use chrono::NaiveDate;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(ApiConfig::new(&server.uri()).unwrap()).unwrap()
    }

    fn may() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn leave_summary_sends_range_and_status() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/reports/leave-summary"))
            .and(query_param("start_date", "2024-05-01"))
            .and(query_param("end_date", "2024-05-31"))
            .and(query_param("status", "approved"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "summary": { "total_requests": 2, "approved_leave_days": 4 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let filter = ReportFilter {
            status: Some(LeaveStatus::Approved),
            ..ReportFilter::default()
        };
        let report = leave_summary(&client_for(&server), may(), &filter)
            .await
            .unwrap();
        assert_eq!(report["summary"]["approved_leave_days"], 4);
    }

    #[tokio::test]
    async fn laborers_are_refused() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/reports/team-performance"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "detail": "Laborers cannot access team performance reports"
            })))
            .mount(&server)
            .await;

        let err = team_performance(&client_for(&server), may())
            .await
            .unwrap_err();
        assert_eq!(
            err.detail(),
            "Laborers cannot access team performance reports"
        );
    }

    #[tokio::test]
    async fn dashboard_returns_raw_payload() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/reports/dashboard-stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "role": "laborer",
                "today_checked_in": true,
                "pending_leave_requests": 1
            })))
            .mount(&server)
            .await;

        let stats = dashboard_stats(&client_for(&server)).await.unwrap();
        assert_eq!(stats["role"], "laborer");
    }
}
