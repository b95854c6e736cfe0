use super::card::BOLD;
use crate::message::Message;
use crate::model::Tab;
use iced::border::{Border, Radius};
use iced::widget::{button, column, container, row, text, Button};
use iced::{Alignment, Background, Color, Length, Shadow, Theme, Vector};

/// Full-width sidebar entry: glyph + label.
pub fn nav_item(tab: Tab, active: Tab) -> Button<'static, Message> {
    let content = row![
        text(tab.glyph()).size(18).width(Length::Fixed(24.0)),
        text(tab.label()).size(15).font(BOLD),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    button(content)
        .width(Length::Fill)
        .padding([12, 16])
        .on_press(Message::SelectTab(tab))
        .style(move |theme, status| nav_style(theme, status, tab == active, true))
}

/// Icon-only entry for the compact bottom bar.
pub fn compact_nav_item(tab: Tab, active: Tab) -> Button<'static, Message> {
    let content = column![text(tab.glyph()).size(20)].align_x(Alignment::Center);

    button(container(content).center_x(Length::Fixed(40.0)))
        .padding(8)
        .on_press(Message::SelectTab(tab))
        .style(move |theme, status| nav_style(theme, status, tab == active, false))
}

fn nav_style(
    theme: &Theme,
    status: button::Status,
    is_active: bool,
    raised: bool,
) -> button::Style {
    let palette = theme.extended_palette();

    let (background, text_color) = match (status, is_active) {
        (_, true) if raised => (palette.primary.strong.color, palette.primary.strong.text),
        (_, true) => (palette.primary.weak.color.scale_alpha(0.4), palette.primary.strong.color),
        (button::Status::Hovered | button::Status::Pressed, false) => (
            palette.primary.weak.color.scale_alpha(0.25),
            palette.primary.strong.color,
        ),
        (_, false) => (Color::TRANSPARENT, palette.background.base.text.scale_alpha(0.6)),
    };

    let shadow = if is_active && raised {
        Shadow {
            color: palette.primary.strong.color.scale_alpha(0.3),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        }
    } else {
        Shadow::default()
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: Radius::new(12.0),
        },
        shadow,
    }
}
