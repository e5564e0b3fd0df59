use serde::{Deserialize, Serialize};

/// Final answer to a question: text, optional chart descriptor, citations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartSpec>,
    /// Source labels in citation order. May repeat when several sub-answers
    /// cite the same dataset.
    #[serde(default)]
    pub sources: Vec<String>,
}

impl AnswerResult {
    /// Text-only answer with no citations (prompts, apologies).
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            chart: None,
            sources: Vec::new(),
        }
    }

    pub fn cited(text: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            text: text.into(),
            chart: None,
            sources,
        }
    }

    pub fn with_chart(mut self, chart: ChartSpec) -> Self {
        self.chart = Some(chart);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    Scatter,
}

/// An x-axis value: numeric (years, rainfall) or categorical (state names).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartValue {
    Number(f64),
    Label(String),
}

impl From<f64> for ChartValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for ChartValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<String> for ChartValue {
    fn from(v: String) -> Self {
        Self::Label(v)
    }
}

impl From<&str> for ChartValue {
    fn from(v: &str) -> Self {
        Self::Label(v.to_string())
    }
}

/// Renderer-agnostic chart descriptor. `x` and `y` always have equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x: Vec<ChartValue>,
    pub y: Vec<f64>,
    /// Optional per-point labels, parallel to `y` when present (e.g. the
    /// year behind each scatter point).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            x: Vec::new(),
            y: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn axes(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Append one `(x, y)` point.
    pub fn point(mut self, x: impl Into<ChartValue>, y: f64) -> Self {
        self.x.push(x.into());
        self.y.push(y);
        self
    }

    pub fn points<I, X>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = (X, f64)>,
        X: Into<ChartValue>,
    {
        for (x, y) in points {
            self.x.push(x.into());
            self.y.push(y);
        }
        self
    }

    /// Label every point; extra labels are dropped and missing ones left blank.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().take(self.y.len()).map(Into::into).collect();
        self.labels.resize(self.y.len(), String::new());
        self
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}
