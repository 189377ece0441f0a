use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::notifications::PushTokenProvider;

pub struct StaticPushToken {
    token: String,
}

impl StaticPushToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl PushTokenProvider for StaticPushToken {
    async fn device_token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}
