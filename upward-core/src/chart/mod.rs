//! Declarative chart options for the score views.
//!
//! Options serialize to the camelCase shape the charting library expects.
//! Each view is built explicitly from [`ChartOptions::base`] with builder
//! overrides, so nested fields are never lost to a shallow merge.

mod gradient;
mod labels;
mod palette;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

pub use gradient::{
    create_gradient, ColorStop, DrawingContext, GradientSpec, LinearGradient, SpecContext,
    GRADIENT_HEIGHT,
};
pub use labels::{format_date_for_chart, format_tooltip_title};
pub use palette::{generate_dataset_colors, ChartColors, DATASET_PALETTE};

/// Ceiling of the per-habit score axis.
pub const HABIT_SCORE_MAX: f64 = 2.0;

const GRID_COLOR: &str = "rgba(0, 0, 0, 0.1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    Index,
    Nearest,
    Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub intersect: bool,
    pub mode: InteractionMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub use_point_style: bool,
    pub padding: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub position: LegendPosition,
    pub labels: LegendLabels,
}

/// Tooltip header callback: renders the hovered date label in long form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TooltipCallbacks;

impl TooltipCallbacks {
    /// Title for the first hovered item; empty when nothing is hovered.
    pub fn title(&self, labels: &[&str]) -> String {
        labels
            .first()
            .map(|label| format_tooltip_title(label))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub background_color: String,
    pub title_color: String,
    pub body_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub corner_radius: u32,
    pub display_colors: bool,
    #[serde(skip)]
    pub callbacks: TooltipCallbacks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size: u32,
    pub weight: FontWeight,
}

/// Heading drawn above the plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotTitle {
    pub display: bool,
    pub text: String,
    pub font: Font,
    pub padding: u32,
}

impl PlotTitle {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            display: true,
            text: text.into(),
            font: Font {
                size: 16,
                weight: FontWeight::Bold,
            },
            padding: 20,
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
    pub title: Option<PlotTitle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub color: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub display: bool,
    pub title: AxisTitle,
    pub grid: Grid,
    pub begin_at_zero: Option<bool>,
    pub max: Option<f64>,
}

impl Axis {
    fn titled(text: &str) -> Self {
        Self {
            display: true,
            title: AxisTitle {
                display: true,
                text: text.to_string(),
            },
            grid: Grid {
                color: GRID_COLOR.to_string(),
            },
            begin_at_zero: None,
            max: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

/// Complete option set for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub interaction: Interaction,
    pub plugins: Plugins,
    pub scales: Scales,
}

impl ChartOptions {
    /// Shared defaults: responsive, index crosshair, dark tooltip, zero-based score axis.
    pub fn base() -> Self {
        let mut y = Axis::titled("Score");
        y.begin_at_zero = Some(true);
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            interaction: Interaction {
                intersect: false,
                mode: InteractionMode::Index,
            },
            plugins: Plugins {
                legend: Legend {
                    position: LegendPosition::Top,
                    labels: LegendLabels {
                        use_point_style: true,
                        padding: 20,
                    },
                },
                tooltip: Tooltip {
                    background_color: "rgba(0, 0, 0, 0.8)".into(),
                    title_color: "white".into(),
                    body_color: "white".into(),
                    border_color: "#ddd".into(),
                    border_width: 1,
                    corner_radius: 6,
                    display_colors: true,
                    callbacks: TooltipCallbacks,
                },
                title: None,
            },
            scales: Scales {
                x: Axis::titled("Date"),
                y,
            },
        }
    }

    /// Daily score chart.
    pub fn score() -> Self {
        Self::base().with_title("Daily Progress Scores")
    }

    /// Running total chart.
    pub fn cumulative() -> Self {
        Self::base()
            .with_title("Cumulative Score Progress")
            .with_y_axis_title("Cumulative Score")
    }

    /// Per-habit chart; the y axis is capped at [`HABIT_SCORE_MAX`].
    pub fn habit() -> Self {
        Self::base()
            .with_title("Individual Habit Performance")
            .with_y_axis_title("Habit Score")
            .with_y_max(HABIT_SCORE_MAX)
    }

    pub fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Score => Self::score(),
            ChartKind::Cumulative => Self::cumulative(),
            ChartKind::Habit => Self::habit(),
        }
    }

    pub fn with_title(mut self, text: impl Into<String>) -> Self {
        self.plugins.title = Some(PlotTitle::new(text));
        self
    }

    /// Replace the y axis title text; grid and bounds are kept.
    pub fn with_y_axis_title(mut self, text: impl Into<String>) -> Self {
        self.scales.y.title = AxisTitle {
            display: true,
            text: text.into(),
        };
        self
    }

    pub fn with_y_max(mut self, max: f64) -> Self {
        self.scales.y.max = Some(max);
        self
    }

    pub fn to_json(&self) -> serde_json::Value {
        // all fields are plain data, serialization cannot fail
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// The three prebuilt views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Score,
    Cumulative,
    Habit,
}

impl std::str::FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "score" | "daily" => Ok(Self::Score),
            "cumulative" => Ok(Self::Cumulative),
            "habit" => Ok(Self::Habit),
            other => Err(format!("unknown chart kind: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn habit_axis_capped_at_two() {
        let opts = ChartOptions::habit();
        assert_eq!(opts.scales.y.max, Some(2.0));
        assert_eq!(opts.to_json()["scales"]["y"]["max"], json!(2.0));
    }

    #[test]
    fn overrides_keep_nested_defaults() {
        let opts = ChartOptions::cumulative();
        assert_eq!(opts.scales.y.title.text, "Cumulative Score");
        assert_eq!(opts.scales.y.begin_at_zero, Some(true));
        assert_eq!(opts.scales.y.grid.color, GRID_COLOR);
        assert_eq!(opts.scales.y.max, None);
        assert_eq!(opts.plugins.tooltip, ChartOptions::base().plugins.tooltip);
    }

    #[test]
    fn base_serializes_in_library_shape() {
        let v = ChartOptions::base().to_json();
        assert_eq!(v["maintainAspectRatio"], json!(false));
        assert_eq!(v["interaction"], json!({"intersect": false, "mode": "index"}));
        assert_eq!(v["plugins"]["legend"]["labels"]["usePointStyle"], json!(true));
        assert_eq!(v["plugins"]["tooltip"]["backgroundColor"], "rgba(0, 0, 0, 0.8)");
        assert_eq!(v["scales"]["x"]["title"]["text"], "Date");
        assert_eq!(v["scales"]["y"]["beginAtZero"], json!(true));
        assert!(v["plugins"].get("title").is_none());
        assert!(v["scales"]["x"].get("max").is_none());
    }

    #[test]
    fn score_view_has_title() {
        let v = ChartOptions::score().to_json();
        assert_eq!(v["plugins"]["title"]["text"], "Daily Progress Scores");
        assert_eq!(v["plugins"]["title"]["font"], json!({"size": 16, "weight": "bold"}));
    }

    #[test]
    fn tooltip_title_uses_first_label() {
        let cb = ChartOptions::score().plugins.tooltip.callbacks;
        assert_eq!(cb.title(&["2024-01-05", "2024-01-06"]), "Friday, Jan 5");
        assert_eq!(cb.title(&[]), "");
    }

    #[test]
    fn kinds_parse() {
        assert_eq!("habit".parse::<ChartKind>(), Ok(ChartKind::Habit));
        assert!("pie".parse::<ChartKind>().is_err());
    }
}
