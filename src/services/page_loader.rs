use crate::errors::ArcaResult;
use crate::services::cause_renderer::CauseRenderer;
use crate::structs::render_summary::RenderSummary;
use crate::structs::view_config::ViewConfig;
use crate::traits::cause_source::CauseSource;
use crate::traits::render_target::RenderTarget;

/// Fetch-then-render for one page.
pub struct PageLoader;

impl PageLoader {
    /// On a failed fetch the error is returned and `target` is left untouched.
    pub async fn load<S, T>(source: &S, view: &ViewConfig, target: &mut T) -> ArcaResult<RenderSummary>
    where
        S: CauseSource + ?Sized,
        T: RenderTarget + ?Sized,
    {
        log::info!("🔍 Fetching causes from {}", source.describe());
        let records = source.fetch_causes().await?;
        log::info!("📥 Received {} causes", records.len());

        Ok(CauseRenderer::render(&records, view, target))
    }

    /// Like `load`, but any failure is only logged and the page stays empty.
    pub async fn load_silently<S, T>(source: &S, view: &ViewConfig, target: &mut T) -> RenderSummary
    where
        S: CauseSource + ?Sized,
        T: RenderTarget + ?Sized,
    {
        match Self::load(source, view, target).await {
            Ok(summary) => summary,
            Err(e) => {
                log::warn!("⚠️ Causes could not be loaded, page left empty: {}", e);
                RenderSummary::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::enums::fetch_error::FetchError;
    use crate::enums::view_preset::ViewPreset;
    use crate::traits::cause_source::MockCauseSource;
    use crate::ui::document::Document;

    fn source_returning(result: Result<serde_json::Value, FetchError>) -> MockCauseSource {
        let mut source = MockCauseSource::new();
        source.expect_describe().return_const("mock".to_string());
        source
            .expect_fetch_causes()
            .times(1)
            .returning(move || result.clone().map(|v| serde_json::from_value(v).unwrap()));
        source
    }

    #[tokio::test]
    async fn load_renders_fetched_records() {
        let source = source_returning(Ok(json!([{"id": 1, "name": "A", "frequency": 3}])));
        let view = ViewPreset::Arca.view();
        let mut document = Document::for_view(&view);

        let summary = PageLoader::load(&source, &view, &mut document).await.unwrap();

        assert_eq!(summary.records, 1);
        assert_eq!(summary.appended, 3);
        assert_eq!(document.text_of("cause-frequency"), Some("3"));
    }

    #[tokio::test]
    async fn load_reports_failure_without_touching_target() {
        let source = source_returning(Err(FetchError::Status {
            url: "mock".to_string(),
            status: 500,
            body: "boom".to_string(),
        }));
        let view = ViewPreset::Arca.view();
        let mut document = Document::for_view(&view);
        let before = document.clone();

        let error = PageLoader::load(&source, &view, &mut document).await.unwrap_err();

        assert_eq!(error.status_code(), 500);
        assert_eq!(document, before);
    }

    #[tokio::test]
    async fn load_silently_swallows_decode_errors() {
        let source = source_returning(Err(FetchError::Decode("not an array".to_string())));
        let view = ViewPreset::Pareto.view();
        let mut document = Document::for_view(&view);

        let summary = PageLoader::load_silently(&source, &view, &mut document).await;

        assert!(summary.is_empty());
        assert!(document.is_blank());
    }
}
