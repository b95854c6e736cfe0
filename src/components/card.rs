use crate::message::Message;
use crate::model::health::{HealthStat, Trend};
use iced::border::{Border, Radius};
use iced::widget::{column, container, row, text, Container};
use iced::{font, Alignment, Background, Color, Element, Font, Length, Shadow, Theme, Vector};

pub const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

pub const ROSE: Color = Color::from_rgb(0.957, 0.247, 0.369);
pub const BLUE: Color = Color::from_rgb(0.231, 0.510, 0.965);
pub const AMBER: Color = Color::from_rgb(0.961, 0.620, 0.043);
pub const EMERALD: Color = Color::from_rgb(0.063, 0.725, 0.506);
pub const SLATE: Color = Color::from_rgb(0.392, 0.455, 0.545);

/// White rounded surface used by every panel section.
pub fn card_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color.scale_alpha(0.5),
            width: 1.0,
            radius: Radius::new(20.0),
        },
        shadow: Shadow {
            color: Color::BLACK.scale_alpha(0.06),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Soft colored background, e.g. for badges and callouts.
pub fn tinted_style(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color.scale_alpha(0.12))),
        text_color: Some(color),
        border: Border {
            color: color.scale_alpha(0.2),
            width: 1.0,
            radius: Radius::new(14.0),
        },
        ..Default::default()
    }
}

/// Solid colored block with white text.
pub fn filled_style(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: Radius::new(20.0),
            ..Border::default()
        },
        ..Default::default()
    }
}

pub fn card<'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    container(content)
        .padding(24)
        .width(Length::Fill)
        .style(card_style)
}

pub fn badge<'a>(label: impl text::IntoFragment<'a>, color: Color) -> Container<'a, Message> {
    container(text(label).size(12).font(BOLD))
        .padding([6, 12])
        .style(tinted_style(color))
}

pub fn section_header<'a>(title: &'a str, subtitle: &'a str) -> Element<'a, Message> {
    column![
        text(title).size(28).font(BOLD),
        text(subtitle).size(14).color(SLATE),
    ]
    .spacing(4)
    .into()
}

/// Stat tile with an accent-colored icon badge and a trend chip.
pub fn stat_card(stat: &HealthStat, accent: Color) -> Element<'static, Message> {
    let trend = stat.trend();
    let trend_color = match trend {
        Trend::Up => EMERALD,
        Trend::Down => ROSE,
        Trend::Steady => SLATE,
    };

    let header = row![
        badge(stat.label.chars().next().map(String::from).unwrap_or_default(), accent),
        iced::widget::horizontal_space(),
        text(format!("{} {}%", trend.arrow(), stat.trend_percent.abs()))
            .size(14)
            .color(trend_color),
    ]
    .align_y(Alignment::Center);

    let body = column![
        text(stat.label).size(14).color(SLATE),
        row![
            text(stat.value).size(26).font(BOLD),
            text(stat.unit).size(14).color(SLATE),
        ]
        .spacing(6)
        .align_y(Alignment::End),
    ]
    .spacing(4);

    card(column![header, body].spacing(16)).into()
}
