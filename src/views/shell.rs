use crate::components::card::{filled_style, tinted_style, BLUE, BOLD, ROSE, SLATE};
use crate::components::nav::{compact_nav_item, nav_item};
use crate::message::Message;
use crate::model::{Tab, ViewState};
use iced::border::{Border, Radius};
use iced::widget::{
    button, column, container, horizontal_space, responsive, row, scrollable, stack, text,
    text_input, vertical_rule, vertical_space, Column, Row,
};
use iced::{Alignment, Background, Element, Length, Padding, Theme};

/// Windows narrower than this get the bottom navigation bar instead of the sidebar.
pub const COMPACT_BREAKPOINT: f32 = 768.0;

const SIDEBAR_WIDTH: f32 = 256.0;
const CONTENT_MAX_WIDTH: f32 = 1152.0;

pub fn is_compact(width: f32) -> bool {
    width < COMPACT_BREAKPOINT
}

/// Wraps the active panel in the sidebar/top bar chrome. `panel` is called
/// once per layout pass. Panels that manage their own scrolling (and fill the
/// height) pass `scroll = false`.
pub fn shell<'a>(
    view_state: ViewState,
    search: &'a str,
    scroll: bool,
    panel: impl Fn() -> Element<'a, Message> + 'a,
) -> Element<'a, Message> {
    responsive(move |size| {
        let compact = is_compact(size.width);

        let framed = container(panel())
            .max_width(CONTENT_MAX_WIDTH)
            .height(if scroll { Length::Shrink } else { Length::Fill });
        let padded = container(framed)
            .center_x(Length::Fill)
            .padding(if compact { 16 } else { 32 });

        let body: Element<'a, Message> = if scroll {
            scrollable(padded).height(Length::Fill).into()
        } else {
            padded.height(Length::Fill).into()
        };

        let main = column![top_bar(search, compact), body];

        if compact {
            column![main.height(Length::Fill), bottom_bar(view_state.active_tab())]
                .height(Length::Fill)
                .into()
        } else {
            row![sidebar(view_state), vertical_rule(1), main.width(Length::Fill)]
                .height(Length::Fill)
                .into()
        }
    })
    .into()
}

fn brand() -> Element<'static, Message> {
    row![
        container(text("✚").size(20))
            .padding([6, 10])
            .style(filled_style(BLUE)),
        text("MediBOT").size(24).font(BOLD),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}

fn sidebar(view_state: ViewState) -> Element<'static, Message> {
    let active = view_state.active_tab();
    let nav = Tab::ALL
        .into_iter()
        .fold(Column::new().spacing(8), |col, tab| col.push(nav_item(tab, active)));

    let role = view_state.role();
    let role_card = container(
        column![
            row![
                container(text(role.initials()).size(14).font(BOLD))
                    .center(Length::Fixed(40.0))
                    .style(tinted_style(BLUE)),
                column![
                    text(role.display_name()).size(14).font(BOLD),
                    text(role.caption()).size(12).color(SLATE),
                ]
                .spacing(2),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
            button(
                container(text(role.switch_label()).size(12)).center_x(Length::Fill)
            )
            .width(Length::Fill)
            .padding(8)
            .style(button::secondary)
            .on_press(Message::ToggleRole),
        ]
        .spacing(12),
    )
    .padding(16)
    .style(tinted_style(SLATE));

    let sign_out = button(text("⎋  Sign Out").size(14).color(SLATE))
        .padding([8, 8])
        .style(button::text);

    container(
        column![
            brand(),
            nav,
            vertical_space(),
            role_card,
            sign_out,
        ]
        .spacing(24),
    )
    .padding(24)
    .width(Length::Fixed(SIDEBAR_WIDTH))
    .height(Length::Fill)
    .style(surface)
    .into()
}

fn top_bar(search: &str, compact: bool) -> Element<'_, Message> {
    let search_field = text_input("Search records, appointments...", search)
        .on_input(Message::SearchChanged)
        .padding([10, 16])
        .size(14);

    let bell = stack![
        button(text("🔔").size(20)).style(button::text).padding(6),
        container(
            container(text("3").size(10))
                .center(Length::Fixed(16.0))
                .style(filled_style(ROSE)),
        )
        .width(Length::Fixed(36.0))
        .align_x(Alignment::End),
    ];

    let mut actions = Row::new()
        .spacing(16)
        .align_y(Alignment::Center)
        .push(bell)
        .push(button(text("⚙").size(20)).style(button::text).padding(6));

    if compact {
        actions = actions.push(
            container(text("✚").size(16))
                .padding([4, 8])
                .style(filled_style(BLUE)),
        );
    }

    let search_width = if compact {
        Length::Fill
    } else {
        Length::Fixed(384.0)
    };

    container(
        row![
            container(search_field).width(search_width),
            horizontal_space().width(if compact { Length::Fixed(12.0) } else { Length::Fill }),
            actions,
        ]
        .align_y(Alignment::Center),
    )
    .padding(Padding::from([16, if compact { 16 } else { 32 }]))
    .width(Length::Fill)
    .style(surface)
    .into()
}

fn bottom_bar(active: Tab) -> Element<'static, Message> {
    let items = Tab::COMPACT.into_iter().fold(
        Row::new().spacing(8).align_y(Alignment::Center),
        |bar, tab| bar.push(compact_nav_item(tab, active)),
    );

    container(items)
        .center_x(Length::Fill)
        .padding(8)
        .style(surface)
        .into()
}

fn surface(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color.scale_alpha(0.4),
            width: 1.0,
            radius: Radius::new(0.0),
        },
        ..Default::default()
    }
}
