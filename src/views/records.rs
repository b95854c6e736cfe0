use crate::components::card::{badge, card, section_header, tinted_style, BLUE, BOLD, ROSE, SLATE};
use crate::components::segmented_toggle;
use crate::message::Message;
use crate::model::records::UPLOAD_FILE_NAME;
use crate::model::{MedicalFileRecord, RecordCategory, RecordsState};
use crate::utils::truncate_name;
use iced::widget::{
    button, column, container, horizontal_space, progress_bar, row, text, Column, Row,
};
use iced::{Alignment, Element, Length};

const COLUMNS: usize = 2;

pub fn records_panel<'a>(records: &'a RecordsState, query: &str) -> Element<'a, Message> {
    let upload_label = if records.is_uploading() {
        "⟳ Uploading..."
    } else {
        "+ Upload New File"
    };
    let upload_button = button(text(upload_label).font(BOLD))
        .padding([12, 24])
        .on_press_maybe((!records.is_uploading()).then_some(Message::BeginUpload));

    let header = row![
        section_header("Medical Records", "Secure electronic health records (EHR)"),
        horizontal_space(),
        upload_button,
    ]
    .align_y(Alignment::Center);

    let mut content = column![header].spacing(24);

    if records.is_uploading() {
        content = content.push(upload_card(records.upload().percent()));
    }

    let mut options = vec![("All Records", None)];
    options.extend(
        RecordCategory::ALL
            .iter()
            .map(|category| (category.label(), Some(*category))),
    );
    content = content.push(segmented_toggle(
        &options,
        records.filter(),
        Message::SetRecordFilter,
    ));

    let visible = records.visible(query);
    content = content.push(
        text(format!(
            "Showing {} of {} records",
            visible.len(),
            records.files().len()
        ))
        .size(13)
        .color(SLATE),
    );
    content = if visible.is_empty() {
        content.push(text("No records match the current filter").color(SLATE))
    } else {
        content.push(file_grid(&visible))
    };

    content.push(security_note()).into()
}

fn upload_card(percent: u8) -> Element<'static, Message> {
    card(
        column![
            row![
                badge("PDF", BLUE),
                text(UPLOAD_FILE_NAME).font(BOLD),
                horizontal_space(),
                text(format!("{percent}%")).font(BOLD).color(BLUE),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
            progress_bar(0.0..=100.0, f32::from(percent)).height(Length::Fixed(8.0)),
        ]
        .spacing(12),
    )
    .into()
}

fn file_grid<'a>(files: &[&'a MedicalFileRecord]) -> Element<'a, Message> {
    files
        .chunks(COLUMNS)
        .fold(Column::new().spacing(16), |grid, chunk| {
            let row = chunk
                .iter()
                .copied()
                .fold(Row::new().spacing(16), |row, file| row.push(file_card(file)));
            // Pad short rows so cards keep the same width.
            let row = (chunk.len()..COLUMNS).fold(row, |row, _| {
                row.push(horizontal_space().width(Length::FillPortion(1)))
            });
            grid.push(row)
        })
        .into()
}

fn file_card(file: &MedicalFileRecord) -> Element<'_, Message> {
    let accent = if file.kind.is_image() { BLUE } else { ROSE };
    let icon = container(text(file.kind.badge()).size(13).font(BOLD))
        .padding(16)
        .style(tinted_style(accent));

    let details = column![
        text(truncate_name(&file.name)).font(BOLD),
        text(format!("{}  ·  {}", file.display_date, file.size_label))
            .size(12)
            .color(SLATE),
    ]
    .spacing(4);

    card(row![icon, details].spacing(16).align_y(Alignment::Center))
        .padding(20)
        .width(Length::FillPortion(1))
        .into()
}

fn security_note() -> Element<'static, Message> {
    container(
        row![
            text("✔").size(28).color(BLUE),
            column![
                text("Blockchain Secured").size(18).font(BOLD),
                text(
                    "All your records are encrypted and stored using blockchain technology, \
                     ensuring privacy and preventing unauthorized access. Only you and \
                     authorized doctors can view these files.",
                )
                .size(14),
            ]
            .spacing(4)
            .width(Length::Fill),
            button(text("Manage Permissions").size(13).font(BOLD))
                .padding([10, 20])
                .style(button::secondary),
        ]
        .spacing(24)
        .align_y(Alignment::Center),
    )
    .padding(24)
    .width(Length::Fill)
    .style(tinted_style(BLUE))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_borrows_state_for_the_frame_only() {
        let mut records = RecordsState::default();
        records.set_filter(Some(RecordCategory::Scans));
        let query = String::from("xray");

        let _panel: Element<'_, Message> = records_panel(&records, &query);
    }

    #[test]
    fn upload_card_renders_while_uploading() {
        let mut records = RecordsState::default();
        records.begin_upload(std::time::Instant::now());

        let _panel = records_panel(&records, "");
        assert!(records.is_uploading());
    }
}
