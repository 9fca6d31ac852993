use axum::extract::FromRef;
use homeval_domain::config::ApiConfig;
use homeval_engine::Estimator;
use std::ops::Deref;
use std::sync::Arc;

/// Shared application state: loaded once before the listener binds, then
/// read-only for the process lifetime. Cloning is an `Arc` bump.
#[derive(Debug)]
pub struct ApiStateInner {
    pub config: ApiConfig,
    pub estimator: Estimator,
}

#[derive(Debug, Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    #[must_use]
    pub fn new(config: ApiConfig, estimator: Estimator) -> Self {
        Self { inner: Arc::new(ApiStateInner { config, estimator }) }
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<ApiState> for ApiConfig {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.config.clone()
    }
}
