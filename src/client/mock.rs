//! Mock transport for isolating loaders and services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::client::{ApiRequest, ApiResponse, Transport, TransportError};

mock! {
    pub Transport {}

    #[async_trait(?Send)]
    impl Transport for Transport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
    }
}
