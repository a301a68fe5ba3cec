use async_trait::async_trait;
use crate::enums::fetch_error::FetchError;
use crate::structs::cause_record::CauseRecord;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CauseSource: Send + Sync {
    /// Issues one read of the cause list. No retries.
    async fn fetch_causes(&self) -> Result<Vec<CauseRecord>, FetchError>;

    fn describe(&self) -> String;
}
