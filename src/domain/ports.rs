use crate::domain::model::Advocate;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the directory's records come from. Read once at startup.
#[async_trait]
pub trait AdvocateSource: Send + Sync {
    fn describe(&self) -> String;
    async fn load(&self) -> Result<Vec<Advocate>>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn data_source(&self) -> &str;
    fn data_format(&self) -> Option<&str>;
    fn json_logs(&self) -> bool;
}
