use crate::components::card::{card, card_style, section_header, tinted_style, BLUE, BOLD, EMERALD, ROSE, SLATE};
use crate::message::Message;
use crate::model::xray::{AnalysisFinding, AnalysisMode, XRayState};
use crate::model::{XRayAnalysis, XRayImage};
use crate::utils::format_size;
use iced::widget::text::Wrapping;
use iced::widget::{
    button, column, container, horizontal_space, row, stack, text, Column, Image,
};
use iced::{Alignment, Background, Color, Element, Length};

const PREVIEW_HEIGHT: f32 = 450.0;

pub fn xray_panel<'a>(xray: &'a XRayAnalysis, error: Option<&'a str>) -> Element<'a, Message> {
    let header = section_header("X-Ray Analysis", "Advanced AI Diagnostic Tool (Experimental)");

    let preview = match xray.state() {
        XRayState::Empty => drop_zone(),
        XRayState::ImageSelected(image) | XRayState::ResultReady { image, .. } => {
            image_preview(image, false)
        }
        XRayState::Analyzing { image, .. } => image_preview(image, true),
    };

    let mut left = column![container(preview)
        .height(Length::Fixed(PREVIEW_HEIGHT))
        .width(Length::Fill)
        .style(card_style)]
    .spacing(16);

    if let Some(image) = xray.image() {
        left = left.push(
            text(format!(
                "{}  ·  {}  ·  {}",
                image.file_name,
                image.format.label(),
                format_size(image.size_bytes)
            ))
            .size(13)
            .color(SLATE),
        );
    }

    if let Some(error) = error {
        left = left.push(text(error).size(14).color(ROSE).wrapping(Wrapping::Word));
    }

    let run_label = if xray.is_analyzing() {
        "Processing AI Models..."
    } else {
        "◎ Run Diagnostics"
    };
    left = left.push(
        container(
            button(text(run_label).font(BOLD))
                .padding([16, 40])
                .on_press_maybe(xray.can_run().then_some(Message::RunDiagnostics)),
        )
        .center_x(Length::Fill),
    );

    let body = row![
        left.width(Length::FillPortion(2)),
        container(result_card(xray)).width(Length::FillPortion(1)),
    ]
    .spacing(32);

    column![header, body].spacing(32).into()
}

fn drop_zone() -> Element<'static, Message> {
    container(
        column![
            container(text("⬆").size(32).color(BLUE))
                .padding(20)
                .style(tinted_style(BLUE)),
            text("Drop X-ray here").size(20).font(BOLD),
            text("Upload a high-resolution PNG, JPG or DICOM file. Max size 15MB.")
                .size(14)
                .color(SLATE),
            button(text("Browse Files").font(BOLD))
                .padding([12, 32])
                .on_press(Message::PickXRay),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .center(Length::Fill)
    .into()
}

fn image_preview(image: &XRayImage, analyzing: bool) -> Element<'_, Message> {
    let picture = container(
        Image::new(image.preview.clone())
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .padding(16)
    .center(Length::Fill);

    let clear = container(
        button(text("✕").size(16))
            .padding([6, 10])
            .style(button::secondary)
            .on_press_maybe((!analyzing).then_some(Message::ClearXRay)),
    )
    .padding(16)
    .width(Length::Fill)
    .align_x(Alignment::End);

    if analyzing {
        stack![picture, analyzing_overlay(), clear].into()
    } else {
        stack![picture, clear].into()
    }
}

fn analyzing_overlay() -> Element<'static, Message> {
    container(
        column![
            text("⟳").size(40).color(Color::WHITE),
            text("AI ANALYZING IMAGE...")
                .size(22)
                .font(BOLD)
                .color(Color::WHITE),
            text("Checking 50+ medical markers")
                .size(14)
                .color(Color::WHITE.scale_alpha(0.8)),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .center(Length::Fill)
    .style(|_theme| container::Style {
        background: Some(Background::Color(Color::BLACK.scale_alpha(0.4))),
        ..Default::default()
    })
    .into()
}

fn result_card(xray: &XRayAnalysis) -> Element<'_, Message> {
    let title = text("Analysis Result").size(20).font(BOLD);

    let body: Element<'_, Message> = if let Some(finding) = xray.finding() {
        finding_view(finding)
    } else if xray.is_analyzing() {
        placeholder_lines()
    } else {
        container(
            text("Upload an image and run diagnostics to see results here.")
                .size(14)
                .color(SLATE),
        )
        .center_x(Length::Fill)
        .padding([48, 0])
        .into()
    };

    let mode = match xray.mode() {
        AnalysisMode::Simulated => "Simulated analysis mode.",
    };

    card(
        column![
            title,
            body,
            text(format!(
                "{mode} AI analysis is an assistive tool and must be verified by a \
                 board-certified radiologist."
            ))
            .size(11)
            .color(SLATE),
        ]
        .spacing(32),
    )
    .padding(32)
    .into()
}

fn finding_view(finding: &AnalysisFinding) -> Element<'_, Message> {
    let verdict = container(
        column![
            text(finding.risk.headline()).size(14).font(BOLD),
            text(format!("Confidence Score: {:.1}%", finding.confidence)).size(12),
        ]
        .spacing(4),
    )
    .padding(16)
    .width(Length::Fill)
    .style(tinted_style(EMERALD));

    let summary = container(text(&finding.summary).size(14).wrapping(Wrapping::Word))
        .padding(16)
        .width(Length::Fill)
        .style(tinted_style(SLATE));

    let next_steps = ["Download Full Report", "Send to My Doctor"].into_iter().fold(
        Column::new()
            .spacing(12)
            .push(text("NEXT STEPS").size(12).font(BOLD).color(SLATE)),
        |steps, label| {
            steps.push(
                button(row![text(label), horizontal_space(), text("›")])
                    .width(Length::Fill)
                    .padding(16)
                    .style(button::secondary),
            )
        },
    );

    column![verdict, summary, next_steps].spacing(24).into()
}

fn placeholder_lines() -> Element<'static, Message> {
    [0.75_f32, 1.0, 0.85]
        .into_iter()
        .fold(Column::new().spacing(16), |lines, fraction| {
            let portion = (fraction * 100.0) as u16;
            lines.push(row![
                container(text(""))
                    .height(Length::Fixed(12.0))
                    .width(Length::FillPortion(portion))
                    .style(tinted_style(SLATE)),
                horizontal_space().width(Length::FillPortion(100 - portion)),
            ])
        })
        .into()
}
