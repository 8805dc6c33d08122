//! Unit tests for the progress crate
//!
//! Exercises the ledger's observable properties end to end against the
//! in-memory repository.

#[cfg(test)]
mod reconciliation_tests {
    use crate::application::{ReportProgressInput, ReportProgressUseCase};
    use crate::domain::repository::ProgressRepository;
    use crate::infra::memory::InMemoryProgressRepository;
    use std::sync::Arc;

    fn use_case(
        repo: &Arc<InMemoryProgressRepository>,
    ) -> ReportProgressUseCase<InMemoryProgressRepository> {
        ReportProgressUseCase::new(repo.clone())
    }

    fn report(user_id: &str, module_id: &str, progress: f64) -> ReportProgressInput {
        ReportProgressInput {
            user_id: Some(user_id.to_string()),
            module_id: Some(module_id.to_string()),
            progress: Some(progress),
        }
    }

    #[tokio::test]
    async fn test_first_report_creates_record() {
        let repo = Arc::new(InMemoryProgressRepository::new());
        let record = use_case(&repo).execute(report("u1", "m1", 0.5)).await.unwrap();

        assert_eq!(record.progress, 0.5);
        assert!(!record.completion_status);
        assert_eq!(repo.record_count(), 1);
    }

    #[tokio::test]
    async fn test_completion_status_tracks_stored_progress() {
        let repo = Arc::new(InMemoryProgressRepository::new());
        let use_case = use_case(&repo);

        for fraction in [0.0, 0.3, 0.999, 1.0, 2.5, -1.0] {
            use_case.execute(report("u1", "m1", fraction)).await.unwrap();
            let stored = repo.find("u1", "m1").await.unwrap().unwrap();
            assert_eq!(
                stored.completion_status,
                stored.progress >= 1.0,
                "flag must match stored fraction {fraction}"
            );
        }
    }

    #[tokio::test]
    async fn test_repeated_report_is_idempotent() {
        let repo = Arc::new(InMemoryProgressRepository::new());
        let use_case = use_case(&repo);

        use_case.execute(report("u1", "m1", 0.7)).await.unwrap();
        let first = repo.find_sync("u1", "m1").unwrap();

        use_case.execute(report("u1", "m1", 0.7)).await.unwrap();
        let second = repo.find_sync("u1", "m1").unwrap();

        assert_eq!(first.user_id, second.user_id);
        assert_eq!(first.module_id, second.module_id);
        assert_eq!(first.progress, second.progress);
        assert_eq!(first.completion_status, second.completion_status);
        assert_eq!(repo.record_count(), 1);
    }

    #[tokio::test]
    async fn test_at_most_one_record_per_pair() {
        let repo = Arc::new(InMemoryProgressRepository::new());
        let use_case = use_case(&repo);

        for fraction in [0.1, 0.4, 0.2, 0.9, 1.0, 0.5] {
            use_case.execute(report("u1", "m1", fraction)).await.unwrap();
        }
        use_case.execute(report("u1", "m2", 0.5)).await.unwrap();
        use_case.execute(report("u2", "m1", 0.5)).await.unwrap();

        assert_eq!(repo.record_count(), 3);
    }

    #[tokio::test]
    async fn test_half_then_full_scenario() {
        let repo = Arc::new(InMemoryProgressRepository::new());
        let use_case = use_case(&repo);

        use_case.execute(report("u1", "m1", 0.5)).await.unwrap();
        use_case.execute(report("u1", "m1", 1.0)).await.unwrap();

        let stored = repo.find("u1", "m1").await.unwrap().unwrap();
        assert_eq!(stored.progress, 1.0);
        assert!(stored.completion_status);
    }

    #[tokio::test]
    async fn test_last_write_wins_allows_regression() {
        let repo = Arc::new(InMemoryProgressRepository::new());
        let use_case = use_case(&repo);

        use_case.execute(report("u1", "m1", 1.0)).await.unwrap();
        use_case.execute(report("u1", "m1", 0.5)).await.unwrap();

        let stored = repo.find_sync("u1", "m1").unwrap();
        assert_eq!(stored.progress, 0.5);
        assert!(!stored.completion_status);
    }

    #[tokio::test]
    async fn test_unbounded_fraction_accepted() {
        let repo = Arc::new(InMemoryProgressRepository::new());
        let use_case = use_case(&repo);

        use_case.execute(report("u1", "m1", 7.25)).await.unwrap();
        let stored = repo.find_sync("u1", "m1").unwrap();
        assert_eq!(stored.progress, 7.25);
        assert!(stored.completion_status);
    }
}

#[cfg(test)]
mod validation_tests {
    use crate::application::{ReportProgressInput, ReportProgressUseCase};
    use crate::error::ProgressError;
    use crate::infra::memory::InMemoryProgressRepository;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_absent_fields_rejected() {
        let repo = Arc::new(InMemoryProgressRepository::new());
        let use_case = ReportProgressUseCase::new(repo.clone());

        let inputs = [
            ReportProgressInput {
                user_id: None,
                module_id: Some("m1".to_string()),
                progress: Some(0.5),
            },
            ReportProgressInput {
                user_id: Some("u1".to_string()),
                module_id: None,
                progress: Some(0.5),
            },
            ReportProgressInput {
                user_id: Some("u1".to_string()),
                module_id: Some("m1".to_string()),
                progress: None,
            },
        ];

        for input in inputs {
            let result = use_case.execute(input).await;
            assert!(matches!(result, Err(ProgressError::MissingFields)));
        }

        assert_eq!(repo.record_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_string_ids_count_as_missing() {
        let repo = Arc::new(InMemoryProgressRepository::new());
        let use_case = ReportProgressUseCase::new(repo.clone());

        let result = use_case
            .execute(ReportProgressInput {
                user_id: Some(String::new()),
                module_id: Some("m1".to_string()),
                progress: Some(0.5),
            })
            .await;
        assert!(matches!(result, Err(ProgressError::MissingFields)));
        assert_eq!(repo.record_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_report_leaves_existing_record_unchanged() {
        let repo = Arc::new(InMemoryProgressRepository::new());
        let use_case = ReportProgressUseCase::new(repo.clone());

        use_case
            .execute(ReportProgressInput {
                user_id: Some("u1".to_string()),
                module_id: Some("m1".to_string()),
                progress: Some(0.8),
            })
            .await
            .unwrap();
        let before = repo.find_sync("u1", "m1").unwrap();

        let result = use_case
            .execute(ReportProgressInput {
                user_id: Some("u1".to_string()),
                module_id: Some("m1".to_string()),
                progress: None,
            })
            .await;
        assert!(matches!(result, Err(ProgressError::MissingFields)));

        let after = repo.find_sync("u1", "m1").unwrap();
        assert_eq!(before.progress, after.progress);
        assert_eq!(before.completion_status, after.completion_status);
        assert_eq!(before.updated_at, after.updated_at);
    }

    #[tokio::test]
    async fn test_zero_progress_is_present() {
        // 0.0 is a real report, not a missing field
        let repo = Arc::new(InMemoryProgressRepository::new());
        let use_case = ReportProgressUseCase::new(repo.clone());

        use_case
            .execute(ReportProgressInput {
                user_id: Some("u1".to_string()),
                module_id: Some("m1".to_string()),
                progress: Some(0.0),
            })
            .await
            .unwrap();

        let stored = repo.find_sync("u1", "m1").unwrap();
        assert_eq!(stored.progress, 0.0);
        assert!(!stored.completion_status);
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::presentation::dto::UpdateProgressRequest;

    #[test]
    fn test_wire_field_names() {
        let req: UpdateProgressRequest = serde_json::from_str(
            r#"{"user_id": "u1", "module_id": "m1", "progress": 0.5}"#,
        )
        .unwrap();

        assert_eq!(req.user_id.as_deref(), Some("u1"));
        assert_eq!(req.module_id.as_deref(), Some("m1"));
        assert_eq!(req.progress, Some(0.5));
    }
}
