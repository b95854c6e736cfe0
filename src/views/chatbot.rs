use crate::components::card::{card_style, filled_style, tinted_style, AMBER, BLUE, BOLD, SLATE};
use crate::message::Message;
use crate::model::{ChatMessage, ChatRole, ChatSession};
use crate::utils::format_clock;
use iced::widget::text::Wrapping;
use iced::widget::{
    button, column, container, horizontal_space, keyed_column, row, scrollable, text, text_input,
    Column,
};
use iced::{font, Alignment, Element, Font, Length};

const BUBBLE_MAX_WIDTH: f32 = 560.0;

const DISCLAIMER_FONT: Font = Font {
    weight: font::Weight::Bold,
    style: font::Style::Italic,
    ..Font::DEFAULT
};

pub fn transcript_id() -> scrollable::Id {
    scrollable::Id::new("chat-transcript")
}

pub fn chatbot_panel(session: &ChatSession) -> Element<'_, Message> {
    let header = container(
        row![
            column![
                text("AI Health Assistant").size(18).font(BOLD),
                text("● Powered by MediBOT Intelligence").size(12),
            ]
            .spacing(2),
            horizontal_space(),
            text("✦ Advanced Diagnostic Model v2.4").size(12),
        ]
        .align_y(Alignment::Center),
    )
    .padding(20)
    .width(Length::Fill)
    .style(filled_style(BLUE));

    let warning = container(
        text(
            "Note: This AI does not replace professional medical diagnosis. \
             In case of emergencies, call 911 or local emergency services.",
        )
        .size(12),
    )
    .padding([8, 20])
    .width(Length::Fill)
    .style(tinted_style(AMBER));

    // Rows are keyed by message id so widget state follows its message.
    let rows = keyed_column(
        session
            .transcript()
            .iter()
            .map(|message| (message.id, message_row(message))),
    )
    .spacing(20);
    let transcript = column![rows].spacing(20).padding(20);
    let transcript = if session.is_typing() {
        transcript.push(thinking_row())
    } else {
        transcript
    };

    let messages = scrollable(transcript)
        .id(transcript_id())
        .height(Length::Fill)
        .width(Length::Fill);

    let send = button(text("Send").font(BOLD))
        .padding([12, 20])
        .on_press_maybe(session.can_send().then_some(Message::SendChat));

    let composer = column![
        row![
            text_input(
                "Describe your symptoms or ask a medical question...",
                session.draft(),
            )
            .on_input(Message::ChatDraftChanged)
            .on_submit(Message::SendChat)
            .padding(12),
            send,
        ]
        .spacing(12)
        .align_y(Alignment::Center),
        container(
            text("End-to-end encrypted medical consultation.")
                .size(11)
                .color(SLATE)
        )
        .center_x(Length::Fill),
    ]
    .spacing(10)
    .padding(16);

    container(column![header, warning, messages, composer])
        .height(Length::Fill)
        .style(card_style)
        .into()
}

fn message_row(message: &ChatMessage) -> Element<'_, Message> {
    let is_user = message.role == ChatRole::User;

    let lines = message
        .lines()
        .fold(Column::new().spacing(6), |column, (line, is_disclaimer)| {
            let line = text(line).size(14).wrapping(Wrapping::Word);
            column.push(if is_disclaimer {
                line.size(12).font(DISCLAIMER_FONT)
            } else {
                line
            })
        });

    let stamp = container(text(format_clock(message.timestamp)).size(10))
        .width(Length::Fill)
        .align_x(Alignment::End);

    let bubble = container(column![lines, stamp].spacing(4))
        .padding(16)
        .max_width(BUBBLE_MAX_WIDTH);

    if is_user {
        row![horizontal_space(), bubble.style(filled_style(BLUE))].into()
    } else {
        row![
            avatar(),
            bubble.style(card_style),
            horizontal_space()
        ]
        .spacing(12)
        .into()
    }
}

fn thinking_row() -> Element<'static, Message> {
    row![
        avatar(),
        container(text("⟳ MediBOT is thinking...").size(14).color(SLATE))
            .padding(16)
            .style(card_style),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}

fn avatar() -> Element<'static, Message> {
    container(text("AI").size(13).font(BOLD))
        .padding(8)
        .style(tinted_style(BLUE))
        .into()
}
