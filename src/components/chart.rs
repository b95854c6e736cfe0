use crate::model::health::Series;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Frame, Path, Stroke, Text};
use iced::{mouse, Color, Pixels, Point, Rectangle, Renderer, Size, Theme};

const LABEL_BAND: f32 = 24.0;
const INSET: f32 = 12.0;
const HEADROOM: f32 = 0.1;
const GRID_LINES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Filled area under a line.
    Area,
    /// Line with point markers.
    Line,
}

pub struct SeriesChart {
    pub series: &'static Series,
    pub kind: ChartKind,
    pub color: Color,
}

impl<Message> canvas::Program<Message> for SeriesChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let plot = plot_area(bounds.size());
        let values: Vec<f32> = self.series.points.iter().map(|p| p.value).collect();
        let points = project(&values, plot);
        let muted = theme.extended_palette().background.strong.color;

        for line in 0..=GRID_LINES {
            let y = plot.y + plot.height * line as f32 / GRID_LINES as f32;
            let grid = Path::line(Point::new(plot.x, y), Point::new(plot.x + plot.width, y));
            frame.stroke(&grid, Stroke::default().with_color(muted.scale_alpha(0.5)).with_width(1.0));
        }

        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            let trace = Path::new(|builder| {
                builder.move_to(*first);
                for point in &points[1..] {
                    builder.line_to(*point);
                }
            });

            if self.kind == ChartKind::Area {
                let baseline = plot.y + plot.height;
                let area = Path::new(|builder| {
                    builder.move_to(Point::new(first.x, baseline));
                    for point in &points {
                        builder.line_to(*point);
                    }
                    builder.line_to(Point::new(last.x, baseline));
                    builder.close();
                });
                frame.fill(&area, self.color.scale_alpha(0.12));
            }

            frame.stroke(&trace, Stroke::default().with_color(self.color).with_width(3.0));

            if self.kind == ChartKind::Line {
                for point in &points {
                    let marker = Path::circle(*point, 4.0);
                    frame.fill(&marker, self.color);
                    frame.stroke(&marker, Stroke::default().with_color(Color::WHITE).with_width(2.0));
                }
            }
        }

        for (point, sample) in points.iter().zip(self.series.points) {
            frame.fill_text(Text {
                content: sample.label.to_string(),
                position: Point::new(point.x, bounds.height - LABEL_BAND / 2.0),
                color: Color::from_rgb8(0x94, 0xa3, 0xb8),
                size: Pixels(12.0),
                horizontal_alignment: Horizontal::Center,
                vertical_alignment: Vertical::Center,
                ..Text::default()
            });
        }

        if let Some(position) = cursor.position_in(bounds) {
            if let Some(index) = nearest_index(&points, position.x) {
                let point = points[index];
                let sample = self.series.points[index];
                let guide = Path::line(Point::new(point.x, plot.y), Point::new(point.x, plot.y + plot.height));
                frame.stroke(&guide, Stroke::default().with_color(muted).with_width(1.0));
                frame.fill_text(Text {
                    content: format!("{} · {} {}", sample.label, sample.value, self.series.unit),
                    position: Point::new(point.x, (point.y - 14.0).max(INSET)),
                    color: theme.extended_palette().background.base.text,
                    size: Pixels(13.0),
                    horizontal_alignment: Horizontal::Center,
                    vertical_alignment: Vertical::Bottom,
                    ..Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }
}

fn plot_area(size: Size) -> Rectangle {
    Rectangle {
        x: INSET,
        y: INSET,
        width: (size.width - INSET * 2.0).max(0.0),
        height: (size.height - INSET - LABEL_BAND).max(0.0),
    }
}

/// Map values onto `plot`: evenly spaced along x, scaled between the series
/// min and max (with headroom) along y, larger values higher up.
fn project(values: &[f32], plot: Rectangle) -> Vec<Point> {
    let Some((min, max)) = values.iter().fold(None, |acc: Option<(f32, f32)>, &v| {
        Some(acc.map_or((v, v), |(lo, hi)| (lo.min(v), hi.max(v))))
    }) else {
        return Vec::new();
    };

    let pad = (max - min) * HEADROOM;
    let (low, high) = (min - pad, max + pad);
    let step = if values.len() > 1 {
        plot.width / (values.len() - 1) as f32
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let x = if values.len() > 1 {
                plot.x + step * index as f32
            } else {
                plot.x + plot.width / 2.0
            };
            let ratio = if high > low {
                (value - low) / (high - low)
            } else {
                0.5
            };
            Point::new(x, plot.y + plot.height * (1.0 - ratio))
        })
        .collect()
}

fn nearest_index(points: &[Point], x: f32) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (a.x - x).abs().total_cmp(&(b.x - x).abs()))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(width: f32, height: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    #[test]
    fn points_are_evenly_spaced() {
        let points = project(&[1.0, 2.0, 3.0], area(100.0, 50.0));
        let xs: Vec<f32> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn larger_values_sit_higher() {
        let points = project(&[70.0, 85.0, 71.0], area(100.0, 100.0));
        assert!(points[1].y < points[0].y);
        assert!(points[0].y > points[2].y);
        for point in &points {
            assert!(point.y > 0.0 && point.y < 100.0);
        }
    }

    #[test]
    fn flat_series_is_centered() {
        let points = project(&[5.0, 5.0], area(10.0, 40.0));
        assert!(points.iter().all(|p| (p.y - 20.0).abs() < f32::EPSILON));
    }

    #[test]
    fn single_point_is_centered_horizontally() {
        let points = project(&[3.0], area(80.0, 40.0));
        assert_eq!(points.len(), 1);
        assert!((points[0].x - 40.0).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_series_has_no_points() {
        assert!(project(&[], area(10.0, 10.0)).is_empty());
        assert_eq!(nearest_index(&[], 3.0), None);
    }

    #[test]
    fn nearest_point_by_x() {
        let points = project(&[1.0, 2.0, 3.0, 4.0], area(90.0, 10.0));
        assert_eq!(nearest_index(&points, 0.0), Some(0));
        assert_eq!(nearest_index(&points, 40.0), Some(1));
        assert_eq!(nearest_index(&points, 200.0), Some(3));
    }

    #[test]
    fn plot_area_never_negative() {
        let plot = plot_area(Size::new(5.0, 5.0));
        assert_eq!(plot.width, 0.0);
        assert_eq!(plot.height, 0.0);
    }
}
