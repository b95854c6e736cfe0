use crate::components::card::{
    badge, card, filled_style, section_header, tinted_style, BLUE, BOLD, EMERALD, ROSE, SLATE,
};
use crate::message::Message;
use crate::model::appointments::{
    Appointment, AppointmentStatus, Prescription, APPOINTMENTS, PRESCRIPTION,
};
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, horizontal_rule, horizontal_space, row, text, Column};
use iced::{Alignment, Element, Length};

pub fn appointments_panel() -> Element<'static, Message> {
    let schedule_header = row![
        section_header("Appointments", "Scheduled medical consultations"),
        horizontal_space(),
        button(text("+").size(22).font(BOLD)).padding([8, 16]),
    ]
    .align_y(Alignment::Center);

    let schedule = APPOINTMENTS.iter().fold(
        Column::new().spacing(16).push(schedule_header),
        |col, appointment| col.push(appointment_card(appointment)),
    );

    let prescriptions = column![
        section_header("Prescriptions", "Active medications & digital pharmacy"),
        prescription_card(&PRESCRIPTION),
        reminders_card(),
    ]
    .spacing(24);

    row![
        schedule.width(Length::FillPortion(1)),
        prescriptions.width(Length::FillPortion(1)),
    ]
    .spacing(32)
    .into()
}

fn appointment_card(appointment: &'static Appointment) -> Element<'static, Message> {
    let status: Element<'static, Message> = match appointment.status {
        AppointmentStatus::Confirmed => badge(appointment.status.label(), BLUE).into(),
        AppointmentStatus::Completed => text(appointment.status.label())
            .size(12)
            .color(SLATE)
            .into(),
    };

    let heading = row![
        container(text(if appointment.status == AppointmentStatus::Confirmed {
            "Dr"
        } else {
            "✚"
        })
        .size(18)
        .font(BOLD))
        .center(Length::Fixed(56.0))
        .style(tinted_style(if appointment.status == AppointmentStatus::Confirmed {
            BLUE
        } else {
            SLATE
        })),
        column![
            text(appointment.title).size(16).font(BOLD),
            text(appointment.subtitle).size(13).color(SLATE),
        ]
        .spacing(2),
        horizontal_space(),
        status,
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let mut body = Column::new().spacing(16).push(heading);

    let details = [
        ("▦", appointment.date),
        ("◷", appointment.time),
        ("▶", appointment.location),
    ];
    for (glyph, value) in details {
        if let Some(value) = value {
            body = body.push(
                row![
                    text(glyph).size(16).color(SLATE),
                    text(value).size(14),
                ]
                .spacing(12)
                .align_y(Alignment::Center),
            );
        }
    }

    if appointment.status == AppointmentStatus::Confirmed {
        body = body.push(
            row![
                button(container(text("Join Meeting").font(BOLD)).center_x(Length::Fill))
                    .width(Length::Fill)
                    .padding(12),
                button(container(text("Reschedule").font(BOLD)).center_x(Length::Fill))
                    .width(Length::Fill)
                    .padding(12)
                    .style(button::secondary),
            ]
            .spacing(12),
        );
    }

    card(body).into()
}

fn prescription_card(prescription: &'static Prescription) -> Element<'static, Message> {
    let heading = row![
        container(text("℞").size(24).color(ROSE))
            .padding(12)
            .style(tinted_style(ROSE)),
        column![
            text(prescription.medication).size(20).font(BOLD),
            text(prescription.indication).size(14).color(SLATE),
        ]
        .spacing(2),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let details = prescription.details().into_iter().fold(
        Column::new().spacing(8),
        |col, (label, value)| {
            col.push(
                row![
                    text(label).size(14).color(SLATE),
                    horizontal_space(),
                    text(value).size(14).font(BOLD),
                ]
                .padding([6, 0]),
            )
            .push(horizontal_rule(1))
        },
    );

    let pass = container(
        row![
            column![
                text("PHARMACY PASS").size(12).font(BOLD),
                text("Show this at pickup").size(11).color(SLATE),
                text(prescription.pharmacy_pass_url())
                    .size(10)
                    .color(SLATE)
                    .wrapping(Wrapping::Glyph),
            ]
            .spacing(4)
            .width(Length::Fill),
            button(text("View Digital Copy").size(12).font(BOLD))
                .padding([8, 16])
                .style(button::secondary),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding(16)
    .style(tinted_style(SLATE));

    card(column![heading, details, pass].spacing(24))
        .padding(32)
        .into()
}

fn reminders_card() -> Element<'static, Message> {
    container(
        column![
            text("Smart Reminders").size(20).font(BOLD),
            text("MediBOT can automatically alert you when it's time to take your medication.")
                .size(14),
            row![text("✓").size(18), text("Notifications Enabled").size(14).font(BOLD)]
                .spacing(8)
                .align_y(Alignment::Center),
        ]
        .spacing(16),
    )
    .padding(32)
    .width(Length::Fill)
    .style(filled_style(EMERALD))
    .into()
}
