use crate::message::Message;
use iced::widget::text::Wrapping;
use iced::widget::{button, container, text, Container, Row};
use iced::{Alignment, Background, Color, Length, Shadow, Theme};

/// Pill-shaped single-choice selector. One segment per option; the segment
/// whose value equals `current` is highlighted.
pub fn segmented_toggle<'a, T>(
    options: &[(&'static str, T)],
    current: T,
    on_select: impl Fn(T) -> Message,
) -> Container<'a, Message>
where
    T: Copy + PartialEq,
{
    let last = options.len().saturating_sub(1);
    let segments = options
        .iter()
        .enumerate()
        .fold(Row::new(), |segments, (index, &(label, value))| {
            let position = match (index, last) {
                (_, 0) => SegmentPosition::Only,
                (0, _) => SegmentPosition::First,
                (i, l) if i == l => SegmentPosition::Last,
                _ => SegmentPosition::Middle,
            };
            segments.push(
                segment(label, value == current, position)
                    .on_press(on_select(value))
                    .width(Length::Shrink),
            )
        });

    container(segments.spacing(2))
        .padding(3)
        .style(segmented_container_style)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentPosition {
    Only,
    First,
    Middle,
    Last,
}

fn segment<'a>(
    label: &'static str,
    is_active: bool,
    position: SegmentPosition,
) -> iced::widget::Button<'a, Message> {
    let content = container(text(label).size(14).wrapping(Wrapping::None))
        .height(Length::Fixed(32.0))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding([6, 16]);

    button(content)
        .padding(0)
        .style(move |theme, status| segment_style(theme, status, is_active, position))
}

fn segmented_container_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    iced::widget::container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: iced::border::Border {
            color: palette.background.strong.color.scale_alpha(0.6),
            width: 1.0,
            radius: iced::border::Radius::new(999.0),
        },
        ..Default::default()
    }
}

fn segment_style(
    theme: &Theme,
    status: iced::widget::button::Status,
    is_active: bool,
    position: SegmentPosition,
) -> iced::widget::button::Style {
    let palette = theme.extended_palette();

    let background_color = match (status, is_active) {
        (iced::widget::button::Status::Hovered, true) => palette.primary.base.color,
        (iced::widget::button::Status::Hovered, false) => palette.primary.weak.color.scale_alpha(0.35),
        (iced::widget::button::Status::Pressed, true) => palette.primary.base.color.scale_alpha(0.9),
        (iced::widget::button::Status::Pressed, false) => palette.primary.weak.color.scale_alpha(0.5),
        (_, true) => palette.primary.strong.color,
        (_, false) => Color::TRANSPARENT,
    };

    let text_color = if is_active {
        palette.primary.strong.text
    } else {
        palette.background.base.text.scale_alpha(0.75)
    };

    const OUTER: f32 = 999.0;
    const INNER: f32 = 10.0;
    let (left, right) = match position {
        SegmentPosition::Only => (OUTER, OUTER),
        SegmentPosition::First => (OUTER, INNER),
        SegmentPosition::Middle => (INNER, INNER),
        SegmentPosition::Last => (INNER, OUTER),
    };

    iced::widget::button::Style {
        background: Some(Background::Color(background_color)),
        text_color,
        border: iced::border::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: iced::border::Radius {
                top_left: left,
                top_right: right,
                bottom_right: right,
                bottom_left: left,
            },
        },
        shadow: Shadow::default(),
    }
}
