use crate::enums::render_mode::RenderMode;
use crate::structs::cause_record::CauseRecord;
use crate::structs::render_summary::RenderSummary;
use crate::structs::view_config::ViewConfig;
use crate::traits::render_target::RenderTarget;

pub struct CauseRenderer;

impl CauseRenderer {
    /// Writes `records` into `target` in response order, following the view's bindings.
    pub fn render<T: RenderTarget + ?Sized>(records: &[CauseRecord], view: &ViewConfig, target: &mut T) -> RenderSummary {
        let mut summary = RenderSummary {
            records: records.len(),
            ..RenderSummary::default()
        };

        for record in records {
            match view.mode {
                RenderMode::Accumulate => {
                    for binding in &view.bindings {
                        if let Some(text) = record.resolve(binding) {
                            summary.appended += target.append_text(binding.class_name(), &text);
                        }
                    }
                }
                RenderMode::PerRecord => {
                    // missing fields keep an empty cell so columns stay aligned
                    let cells: Vec<(String, String)> = view.bindings
                        .iter()
                        .map(|binding| (binding.class_name().to_string(), record.resolve(binding).unwrap_or_default()))
                        .collect();
                    if target.push_row(&cells) {
                        summary.rows += 1;
                    }
                }
            }
        }

        log::debug!(
            "Rendered {} records: {} appends, {} rows",
            summary.records, summary.appended, summary.rows
        );
        summary
    }
}
