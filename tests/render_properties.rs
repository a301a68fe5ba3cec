use proptest::prelude::*;
use warp::http::StatusCode;
use arca::enums::render_mode::RenderMode;
use arca::enums::view_preset::{
    ViewPreset, CAUSE_DESCRIPTION_SELECTOR, CAUSE_FREQUENCY_SELECTOR, CAUSE_ID_SELECTOR,
    CAUSE_NAME_SELECTOR, CAUSE_TOTAL_SELECTOR,
};
use arca::services::cause_client::CauseClient;
use arca::services::cause_renderer::CauseRenderer;
use arca::services::page_loader::PageLoader;
use arca::structs::cause::Cause;
use arca::structs::cause_record::CauseRecord;
use arca::structs::config::client_config::ClientConfig;
use arca::ui::document::Document;
use crate::support::{client_for, serve_fixture};

#[tokio::test]
async fn single_record_fills_every_bound_node() {
    let addr = serve_fixture(
        StatusCode::OK,
        r#"[{"id":1,"name":"A","frequency":3,"total":10,"description":"d"}]"#,
    );
    let view = ViewPreset::Arca.view();
    let mut document = Document::for_view(&view);

    let summary = PageLoader::load(&client_for(addr), &view, &mut document).await.unwrap();

    assert_eq!(summary.records, 1);
    assert_eq!(document.text_of(CAUSE_ID_SELECTOR), Some("1"));
    assert_eq!(document.text_of(CAUSE_NAME_SELECTOR), Some("A"));
    assert_eq!(document.text_of(CAUSE_FREQUENCY_SELECTOR), Some("3"));
    assert_eq!(document.text_of(CAUSE_TOTAL_SELECTOR), Some("10"));
    assert_eq!(document.text_of(CAUSE_DESCRIPTION_SELECTOR), Some("d"));
}

#[tokio::test]
async fn text_field_lands_in_the_name_node() {
    let addr = serve_fixture(
        StatusCode::OK,
        r#"[{"id":1,"text":"Label","frequency":3,"total":10,"description":"d"}]"#,
    );
    let client = client_for(addr);

    for preset in ViewPreset::all() {
        let view = preset.view();
        let mut document = Document::for_view(&view);

        PageLoader::load(&client, &view, &mut document).await.unwrap();

        assert_eq!(document.text_of(CAUSE_NAME_SELECTOR), Some("Label"), "view {}", preset);
    }
}

#[tokio::test]
async fn empty_response_appends_nothing() {
    let addr = serve_fixture(StatusCode::OK, "[]");
    let view = ViewPreset::Arca.view();
    let mut document = Document::for_view(&view);

    let summary = PageLoader::load(&client_for(addr), &view, &mut document).await.unwrap();

    assert!(summary.is_empty());
    assert_eq!(document, Document::for_view(&view));
}

#[tokio::test]
async fn network_failure_leaves_the_page_blank() {
    let client = CauseClient::new(&ClientConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 2,
    })
    .unwrap();
    let view = ViewPreset::Pareto.view();
    let mut document = Document::for_view(&view);

    let summary = PageLoader::load_silently(&client, &view, &mut document).await;
    assert!(summary.is_empty());
    assert!(document.is_blank());

    let error = PageLoader::load(&client, &view, &mut document).await.unwrap_err();
    assert!(error.is_recoverable());
    assert!(document.is_blank());
}

#[tokio::test]
async fn two_records_accumulate_into_one_node() {
    let addr = serve_fixture(
        StatusCode::OK,
        r#"[{"id":1,"name":"A","frequency":3},{"id":2,"name":"B","frequency":5}]"#,
    );
    let view = ViewPreset::Arca.view();
    let mut document = Document::for_view(&view);

    PageLoader::load(&client_for(addr), &view, &mut document).await.unwrap();

    assert_eq!(document.text_of(CAUSE_ID_SELECTOR), Some("12"));
    assert_eq!(document.text_of(CAUSE_NAME_SELECTOR), Some("AB"));
    assert_eq!(document.text_of(CAUSE_FREQUENCY_SELECTOR), Some("35"));
    assert!(document.rows().is_empty());
}

#[tokio::test]
async fn per_record_mode_renders_one_row_each() {
    let addr = serve_fixture(
        StatusCode::OK,
        r#"[{"id":1,"name":"A","frequency":3},{"id":2,"text":"B","frequency":5}]"#,
    );
    let view = ViewPreset::Pareto.view().with_mode(RenderMode::PerRecord);
    let mut document = Document::for_view(&view);

    let summary = PageLoader::load(&client_for(addr), &view, &mut document).await.unwrap();

    assert_eq!(summary.rows, 2);
    assert_eq!(document.rows()[1][1], ("cause-name".to_string(), "B".to_string()));
    assert_eq!(document.text_of(CAUSE_NAME_SELECTOR), Some(""));
}

proptest! {
    #[test]
    fn accumulated_name_is_the_concatenation(names in prop::collection::vec("[a-zA-Z ]{0,8}", 0..6)) {
        let records: Vec<CauseRecord> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let mut cause = Cause::new(name, i as u64);
                cause.id = Some(i as u64 + 1);
                CauseRecord::from(&cause)
            })
            .collect();
        let view = ViewPreset::Arca.view();
        let mut document = Document::for_view(&view);

        CauseRenderer::render(&records, &view, &mut document);

        let expected = names.concat();
        prop_assert_eq!(document.text_of(CAUSE_NAME_SELECTOR), Some(expected.as_str()));
    }
}
