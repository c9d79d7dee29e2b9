use std::{borrow::BorrowMut, ops::RangeInclusive};

use chrono::{Duration, NaiveDate};
use gloo_utils::window;
use liftlog_domain::ExerciseProgress;
use plotters::{
    chart::ChartBuilder,
    prelude::{Circle, DrawingAreaErrorKind, IntoDrawingArea, SVGBackend},
    series::LineSeries,
    style::{Color, IntoFont, Palette, Palette99, RGBColor, TextStyle, WHITE},
};
use wasm_bindgen::JsValue;

use crate::Theme;

pub const COLOR_WEIGHT: usize = 8;
pub const COLOR_REPS: usize = 4;

pub const OPACITY_LINE: f64 = 0.9;

pub const WIDTH_LINE: u32 = 2;
pub const SIZE_CIRCLE: u32 = 3;

pub const HEIGHT: u32 = 200;

pub const FONT: (&str, u32) = ("Roboto", 11);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl From<RangeInclusive<NaiveDate>> for Interval {
    fn from(value: RangeInclusive<NaiveDate>) -> Self {
        Interval {
            first: *value.start(),
            last: *value.end(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlotType {
    Circle(usize, f64, u32),
    Line(usize, f64, u32),
}

#[must_use]
pub fn plot_line(color: usize) -> Vec<PlotType> {
    vec![PlotType::Line(color, OPACITY_LINE, WIDTH_LINE)]
}

#[must_use]
pub fn plot_line_with_points(color: usize) -> Vec<PlotType> {
    vec![
        PlotType::Line(color, OPACITY_LINE, WIDTH_LINE),
        PlotType::Circle(color, OPACITY_LINE, SIZE_CIRCLE),
    ]
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PlotParams {
    pub y_min_opt: Option<f32>,
    pub y_max_opt: Option<f32>,
    pub secondary: bool,
}

impl PlotParams {
    pub const PRIMARY: Self = Self {
        y_min_opt: Some(0.),
        y_max_opt: None,
        secondary: false,
    };

    pub const SECONDARY: Self = Self {
        y_min_opt: Some(0.),
        y_max_opt: None,
        secondary: true,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub values: Vec<(NaiveDate, f32)>,
    pub plots: Vec<PlotType>,
    pub params: PlotParams,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Bounds {
    min: f32,
    max: f32,
}

impl Bounds {
    fn min_with_margin(self) -> f32 {
        if self.min <= f32::EPSILON {
            return self.min;
        }
        self.min - self.margin()
    }

    fn max_with_margin(self) -> f32 {
        self.max + self.margin()
    }

    fn margin(self) -> f32 {
        if (self.max - self.min).abs() > f32::EPSILON {
            return (self.max - self.min) * 0.1;
        }
        0.1
    }
}

/// Plot the progress of an exercise.
///
/// The weight is drawn on the primary axis and the reps on the secondary
/// axis. Workouts without weight are left out of the weight series. If no
/// workout has a weight, the reps are drawn on the primary axis.
pub fn plot_exercise_progress(
    progress: &[ExerciseProgress],
    theme: &Theme,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let Some(interval) = progress_interval(progress) else {
        return Ok(None);
    };
    plot(
        &progress_data(progress),
        &interval,
        theme,
        chart_width(),
    )
}

fn progress_data(progress: &[ExerciseProgress]) -> Vec<PlotData> {
    let weight = progress
        .iter()
        .filter_map(|p| p.weight.map(|w| (p.date.date_naive(), w)))
        .collect::<Vec<_>>();
    #[allow(clippy::cast_precision_loss)]
    let reps = progress
        .iter()
        .map(|p| (p.date.date_naive(), p.reps as f32))
        .collect::<Vec<_>>();

    if weight.is_empty() {
        return vec![PlotData {
            values: reps,
            plots: plot_line(COLOR_REPS),
            params: PlotParams::PRIMARY,
        }];
    }

    vec![
        PlotData {
            values: weight,
            plots: plot_line_with_points(COLOR_WEIGHT),
            params: PlotParams::PRIMARY,
        },
        PlotData {
            values: reps,
            plots: plot_line(COLOR_REPS),
            params: PlotParams::SECONDARY,
        },
    ]
}

/// Dates covered by the progress, widened by a day on each side if all
/// entries share one date.
fn progress_interval(progress: &[ExerciseProgress]) -> Option<Interval> {
    let first = progress.iter().map(|p| p.date.date_naive()).min()?;
    let last = progress.iter().map(|p| p.date.date_naive()).max()?;
    if first == last {
        return Some((first - Duration::days(1)..=last + Duration::days(1)).into());
    }
    Some((first..=last).into())
}

/// Plot data onto a chart.
///
/// Every element of `data` is one series. Its `plots` are drawn in order,
/// and its `params` determine the y domain and whether the series belongs
/// to the primary or secondary axis. The secondary axis is omitted if no
/// series uses it.
pub fn plot(
    data: &[PlotData],
    interval: &Interval,
    theme: &Theme,
    width: u32,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    if all_zeros(data) {
        return Ok(None);
    }

    let (Some(primary_bounds), secondary_bounds) = determine_y_bounds(data) else {
        return Ok(None);
    };

    let mut result = String::new();

    {
        let root = SVGBackend::with_string(&mut result, (width, HEIGHT)).into_drawing_area();
        let (color, background_color) = colors(theme);

        root.fill(&background_color)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10f32)
            .x_label_area_size(30f32)
            .y_label_area_size(40f32)
            .right_y_label_area_size(secondary_bounds.map_or(0f32, |_| 40f32))
            .build_cartesian_2d(
                interval.first..interval.last,
                primary_bounds.min_with_margin()..primary_bounds.max_with_margin(),
            )?
            .set_secondary_coord(
                interval.first..interval.last,
                secondary_bounds.map_or(0.0..0.0, |b| b.min_with_margin()..b.max_with_margin()),
            );

        chart
            .configure_mesh()
            .disable_x_mesh()
            .set_all_tick_mark_size(3u32)
            .axis_style(color.mix(0.3))
            .bold_line_style(color.mix(0.05))
            .light_line_style(color.mix(0.0))
            .label_style(TextStyle::from(FONT.into_font()).color(&color))
            .x_labels(2)
            .y_labels(6)
            .draw()?;

        if secondary_bounds.is_some() {
            chart
                .configure_secondary_axes()
                .set_all_tick_mark_size(3u32)
                .axis_style(color.mix(0.3))
                .label_style(TextStyle::from(FONT.into_font()).color(&color))
                .draw()?;
        }

        for plot_data in data {
            let mut values = plot_data.values.clone();
            values.sort_by_key(|e| e.0);

            for plot in &plot_data.plots {
                let drawn: Result<(), DrawingAreaErrorKind<std::io::Error>> = match *plot {
                    PlotType::Circle(color, opacity, size) => {
                        let series = values.iter().map(|(x, y)| {
                            Circle::new((*x, *y), size, Palette99::pick(color).mix(opacity).filled())
                        });
                        if plot_data.params.secondary {
                            chart.draw_secondary_series(series).map(|_| ())
                        } else {
                            chart.draw_series(series).map(|_| ())
                        }
                    }
                    PlotType::Line(color, opacity, size) => {
                        let series = LineSeries::new(
                            values.iter().map(|(x, y)| (*x, *y)),
                            Palette99::pick(color).mix(opacity).stroke_width(size),
                        );
                        if plot_data.params.secondary {
                            chart.draw_secondary_series(series).map(|_| ())
                        } else {
                            chart.draw_series(series).map(|_| ())
                        }
                    }
                };
                drawn?;
            }
        }

        root.present()?;
    }

    Ok(Some(result))
}

fn all_zeros(data: &[PlotData]) -> bool {
    data.iter()
        .all(|plot| plot.values.iter().all(|(_, v)| *v == 0.0))
}

fn colors(theme: &Theme) -> (RGBColor, RGBColor) {
    let dark = RGBColor(20, 22, 26);
    match theme {
        Theme::System | Theme::Light => (dark, WHITE),
        Theme::Dark => (WHITE, dark),
    }
}

fn determine_y_bounds(data: &[PlotData]) -> (Option<Bounds>, Option<Bounds>) {
    let mut primary_bounds: Option<Bounds> = None;
    let mut secondary_bounds: Option<Bounds> = None;

    for plot in data.iter().filter(|plot| !plot.values.is_empty()) {
        let min = plot
            .values
            .iter()
            .map(|(_, v)| *v)
            .fold(plot.params.y_min_opt.unwrap_or(f32::MAX), f32::min);
        let max = plot
            .values
            .iter()
            .map(|(_, v)| *v)
            .fold(plot.params.y_max_opt.unwrap_or(0.), f32::max);

        let b = if plot.params.secondary {
            secondary_bounds.borrow_mut()
        } else {
            primary_bounds.borrow_mut()
        }
        .get_or_insert(Bounds { min, max });

        b.min = f32::min(b.min, min);
        b.max = f32::max(b.max, max);
    }

    (primary_bounds, secondary_bounds)
}

fn chart_width() -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    u32::min(
        u32::max(
            (window()
                .inner_width()
                .unwrap_or(JsValue::UNDEFINED)
                .as_f64()
                .unwrap_or(420.) as u32)
                .saturating_sub(20),
            300,
        ),
        960,
    )
}
