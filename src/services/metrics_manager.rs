use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default, Clone, Serialize)]
pub struct MetricsData {
    pub plans_generated: u64,
    pub failures: HashMap<String, u64>,
    pub geocode_fallbacks: u64,
}

#[derive(Debug, Clone)]
pub struct MetricsManager {
    inner: Arc<RwLock<MetricsData>>,
}

impl Default for MetricsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsManager {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MetricsData::default())),
        }
    }

    pub async fn record_plan(&self) {
        let mut data = self.inner.write().await;
        data.plans_generated += 1;
    }

    pub async fn record_failure(&self, class: &str) {
        let mut data = self.inner.write().await;
        *data.failures.entry(class.to_string()).or_insert(0) += 1;
    }

    pub async fn record_geocode_fallback(&self) {
        let mut data = self.inner.write().await;
        data.geocode_fallbacks += 1;
    }

    pub async fn get_metrics(&self) -> MetricsData {
        self.inner.read().await.clone()
    }
}
