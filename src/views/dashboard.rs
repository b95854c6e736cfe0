use crate::components::card::{badge, card, stat_card, AMBER, BLUE, BOLD, EMERALD, ROSE, SLATE};
use crate::components::chart::{ChartKind, SeriesChart};
use crate::message::Message;
use crate::model::health::{Series, DEVICE_NAME, HEART_RATE, STATS, WEEKLY_STEPS};
use iced::widget::{canvas, column, horizontal_space, row, text, Row};
use iced::{Alignment, Color, Element, Length};

const CHART_HEIGHT: f32 = 240.0;

pub fn dashboard_panel() -> Element<'static, Message> {
    let header = row![
        column![
            text("Health Overview").size(28).font(BOLD),
            text(format!("⌚ Connected to {DEVICE_NAME}")).size(14).color(SLATE),
        ]
        .spacing(4),
        horizontal_space(),
        badge("● Live Tracking Active", EMERALD),
    ]
    .align_y(Alignment::Center);

    let accents = [ROSE, BLUE, AMBER];
    let stats = STATS
        .iter()
        .zip(accents)
        .fold(Row::new().spacing(24), |row, (stat, accent)| {
            row.push(
                iced::widget::container(stat_card(stat, accent)).width(Length::FillPortion(1)),
            )
        });

    let charts = row![
        chart_card(&HEART_RATE, ChartKind::Area, ROSE, "Last 12 hours"),
        chart_card(&WEEKLY_STEPS, ChartKind::Line, BLUE, "This week"),
    ]
    .spacing(32);

    column![header, stats, charts].spacing(32).into()
}

fn chart_card(
    series: &'static Series,
    kind: ChartKind,
    color: Color,
    window: &'static str,
) -> Element<'static, Message> {
    let heading = row![
        column![
            text(series.title).size(20).font(BOLD),
            text(series.subtitle).size(14).color(SLATE),
        ]
        .spacing(2),
        horizontal_space(),
        text(window).size(13).color(SLATE),
    ]
    .align_y(Alignment::Center);

    let plot = canvas(SeriesChart {
        series,
        kind,
        color,
    })
    .width(Length::Fill)
    .height(Length::Fixed(CHART_HEIGHT));

    card(column![heading, plot].spacing(24))
        .width(Length::FillPortion(1))
        .into()
}
