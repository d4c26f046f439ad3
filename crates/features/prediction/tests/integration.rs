pub mod fixtures;

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use axum::http::StatusCode;
    use moodflag_domain::risk::{RiskLevel, Tone};
    use moodflag_prediction::*;
    use serde_json::json;
    use std::time::{Duration, Instant};

    async fn predict_against(reply: Reply) -> Result<RiskLevel, PredictionError> {
        let mock = MockService::spawn(reply).await;
        let client = PredictionClient::new(&config_for(&mock.base_url)).unwrap();
        client.predict(&sample_record()).await
    }

    #[tokio::test]
    async fn test_codes_map_to_risk_levels() {
        for (code, expected) in [(0, RiskLevel::High), (1, RiskLevel::Low), (2, RiskLevel::Medium)] {
            let level = predict_against(Reply::Json(StatusCode::OK, json!({"prediction": code})))
                .await
                .unwrap();
            assert_eq!(level, expected);
        }
    }

    #[tokio::test]
    async fn test_request_body_is_the_record() {
        let mock = MockService::spawn(Reply::Json(StatusCode::OK, json!({"prediction": 1}))).await;
        let client = PredictionClient::new(&config_for(&mock.base_url)).unwrap();
        client.predict(&sample_record()).await.unwrap();

        let bodies = mock.bodies().await;
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0], serde_json::to_value(sample_record()).unwrap());
        assert_eq!(bodies[0].as_object().unwrap().len(), 15);
        assert_eq!(bodies[0]["Coping_Struggles"], "Yes");
        assert_eq!(bodies[0]["Days_Indoors"], "15-30 days");
    }

    #[tokio::test]
    async fn test_server_detail_is_surfaced_verbatim() {
        let err = predict_against(Reply::Json(
            StatusCode::BAD_REQUEST,
            json!({"detail": "invalid country"}),
        ))
        .await
        .unwrap_err();

        assert_eq!(err.detail(), Some("invalid country"));
        let state = SubmissionState::from(Err(err));
        assert_eq!(state.render().unwrap().to_string(), "Error: invalid country");
    }

    #[tokio::test]
    async fn test_missing_prediction_is_malformed() {
        let err = predict_against(Reply::Json(StatusCode::OK, json!({"label": "low"})))
            .await
            .unwrap_err();
        assert!(matches!(err, PredictionError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_non_json_reply_is_malformed() {
        let err = predict_against(Reply::Text(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>"))
            .await
            .unwrap_err();
        assert!(matches!(err, PredictionError::MalformedResponse { .. }));
        assert!(!err.is_transport());
        assert!(err.to_string().contains("non-JSON body"), "{err}");

        let err = predict_against(Reply::Text(StatusCode::OK, "prediction=1")).await.unwrap_err();
        assert!(matches!(err, PredictionError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_non_json_reply_still_waits_for_the_result_delay() {
        let mock = MockService::spawn(Reply::Text(StatusCode::OK, "not json")).await;
        let client = PredictionClient::new(&config_for(&mock.base_url)).unwrap();
        let delay = Duration::from_millis(150);
        let mut submission = Submission::new(client, delay);

        let started = Instant::now();
        let notice = submission.submit(&sample_record()).await.render().unwrap();

        assert!(started.elapsed() >= delay);
        assert_eq!(notice.tone, Tone::Error);
        assert!(notice.text.starts_with("Failed to connect to prediction API: "));
        assert_eq!(mock.hits(), 1);
    }

    #[tokio::test]
    async fn test_connection_refused_is_reported() {
        let base_url = refused_base_url().await;
        let client = PredictionClient::new(&config_for(&base_url)).unwrap();
        let mut submission = Submission::new(client, Duration::from_secs(3));

        let started = Instant::now();
        let notice = submission.submit(&sample_record()).await.render().unwrap();

        assert_eq!(notice.tone, Tone::Error);
        assert!(notice.badge.is_none());
        assert!(notice.text.starts_with("Failed to connect to prediction API: "));
        assert!(notice.text.contains(&base_url.replace("http://", "")));
        // No cosmetic wait without an answer.
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_timeout_bounds_the_call() {
        let mock = MockService::spawn(Reply::Stall(Duration::from_secs(10))).await;
        let mut config = config_for(&mock.base_url);
        config.prediction.timeout_secs = 1;
        let client = PredictionClient::new(&config).unwrap();

        let started = Instant::now();
        let err = client.predict(&sample_record()).await.unwrap_err();

        assert!(started.elapsed() < Duration::from_secs(5));
        match err {
            PredictionError::Transport { source, .. } => assert!(source.is_timeout()),
            other => panic!("expected a transport timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_identical_submissions_are_not_deduplicated() {
        let mock = MockService::spawn(Reply::Json(StatusCode::OK, json!({"prediction": 2}))).await;
        let client = PredictionClient::new(&config_for(&mock.base_url)).unwrap();
        let mut submission = Submission::new(client, Duration::ZERO);

        let first = submission.submit(&sample_record()).await.clone();
        let second = submission.submit(&sample_record()).await.clone();

        assert_eq!(first, SubmissionState::Success(RiskLevel::Medium));
        assert_eq!(first, second);
        assert_eq!(mock.hits(), 2);

        let bodies = mock.bodies().await;
        assert_eq!(bodies[0], bodies[1]);
    }

    #[test]
    fn test_invalid_base_url_is_rejected_up_front() {
        let err = PredictionClient::new(&config_for("moodflag-api.onrender.com")).unwrap_err();
        assert!(matches!(err, PredictionError::InvalidConfig { .. }));
    }
}
