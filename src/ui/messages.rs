//! Message feed rendering.

use eframe::egui::{self, scroll_area::ScrollAreaOutput, Align, RichText};

use crate::presenter::{FeedPresenter, Row};
use crate::ui::theme::bubble_style;

/// Render the feed as a scrolling list of bubbles, one per message.
///
/// When the presenter asks for it, the last row is scrolled into view after
/// every row of this frame has been laid out.
pub fn render_messages(ui: &mut egui::Ui, presenter: &mut FeedPresenter) -> ScrollAreaOutput<()> {
    let scroll_to_last = presenter.take_scroll_request();
    let rows = presenter.rows();

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.add_space(8.0);

            let mut last = None;
            for row in &rows {
                last = Some(render_row(ui, row));
                ui.add_space(6.0);
            }

            if scroll_to_last {
                if let Some(response) = last {
                    response.scroll_to_me(Some(Align::BOTTOM));
                }
            }

            ui.add_space(8.0);
        })
}

/// Render one bubble: avatar on the sender's side, text inside the bubble.
fn render_row(ui: &mut egui::Ui, row: &Row<'_>) -> egui::Response {
    let style = bubble_style(row.variant);
    let layout = match style.align {
        Align::Max => egui::Layout::right_to_left(Align::TOP),
        _ => egui::Layout::left_to_right(Align::TOP),
    };
    let max_bubble_width = ui.available_width() * 0.7;

    ui.horizontal(|ui| {
        ui.with_layout(layout, |ui| {
            ui.add_space(12.0);
            ui.label(RichText::new(style.avatar).size(22.0))
                .on_hover_text(row.sender);
            ui.add_space(4.0);

            egui::Frame::new()
                .fill(style.fill)
                .corner_radius(14.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    ui.set_max_width(max_bubble_width);
                    ui.add(
                        egui::Label::new(RichText::new(row.text).size(15.0).color(style.text))
                            .wrap(),
                    );
                });
        });
    })
    .response
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::message::{Document, Record};
    use crate::test_support::{FakeAuth, FakeStore};

    fn feed(count: usize) -> (FeedPresenter, Arc<FakeStore>) {
        let store = Arc::new(FakeStore::new());
        let auth = Arc::new(FakeAuth::new(Some("a@x.com")));
        let mut presenter = FeedPresenter::new(store.clone(), auth, "messages");
        presenter.activate();
        let documents = (0..count)
            .map(|i| {
                let sender = if i % 2 == 0 { "a@x.com" } else { "b@x.com" };
                Document::new(Record::new(sender, format!("message {i}"), i as f64).to_fields())
            })
            .collect();
        store.push(Ok(documents));
        presenter.process_events();
        (presenter, store)
    }

    /// Run headless frames of a small window; returns (offset, max offset) of the last one.
    fn run_frames(presenter: &mut FeedPresenter, frames: usize) -> (f32, f32) {
        let ctx = egui::Context::default();
        let mut scroll = (0.0, 0.0);
        for frame in 0..frames {
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(400.0, 300.0),
                )),
                time: Some(frame as f64),
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let output = render_messages(ui, presenter);
                    let max = (output.content_size.y - output.inner_rect.height()).max(0.0);
                    scroll = (output.state.offset.y, max);
                });
            });
        }
        scroll
    }

    #[test]
    fn test_snapshot_scrolls_feed_to_last_row() {
        let (mut presenter, _store) = feed(60);
        assert_eq!(presenter.row_count(), 60);

        let (offset, max) = run_frames(&mut presenter, 3);
        assert!(!presenter.take_scroll_request());
        assert!(max > 0.0, "rows should overflow the window");
        assert!(offset >= max - 20.0, "offset {offset} should reach bottom {max}");
    }

    #[test]
    fn test_no_scroll_without_request() {
        let (mut presenter, _store) = feed(60);
        assert!(presenter.take_scroll_request());

        let (offset, _) = run_frames(&mut presenter, 3);
        assert_eq!(offset, 0.0);
    }

    #[test]
    fn test_empty_snapshot_with_scroll_request_renders() {
        let (mut presenter, _store) = feed(0);
        assert_eq!(presenter.row_count(), 0);

        let (offset, max) = run_frames(&mut presenter, 1);
        assert!(!presenter.take_scroll_request());
        assert_eq!(offset, 0.0);
        assert_eq!(max, 0.0);
    }
}
