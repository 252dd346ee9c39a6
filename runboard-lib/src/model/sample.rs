use super::ModelRun;

/// The two demo rows shown when no row file is configured.
pub fn sample_runs() -> Vec<ModelRun> {
    vec![
        ModelRun {
            id: "1".into(),
            run_id: "7c030e5896303a24".into(),
            provider_sid: "S0311772".into(),
            model_name: "ACU_XGBoost".into(),
            start_date: "02/01/2025".into(),
            end_date: "02/28/2025".into(),
            accuracy: 83.87,
            precision: 44.44,
            recall: 100.0,
            f1_score: 61.54,
            auc: 97.22,
        },
        ModelRun {
            id: "2".into(),
            run_id: "cf60269128195d44".into(),
            provider_sid: "S0311772".into(),
            model_name: "ACU_XGBoost".into(),
            start_date: "11/01/2024".into(),
            end_date: "11/30/2024".into(),
            accuracy: 81.82,
            precision: 33.33,
            recall: 100.0,
            f1_score: 50.0,
            auc: 90.0,
        },
    ]
}
