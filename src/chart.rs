// Chart data model
//
// Panels never draw. They hand a `Table` plus a `ChartSpec` to the view layer,
// which turns the spec into ratatui widgets. Validation happens here, when the
// spec is built, so the renderer can assume every mapped column exists and
// every y column is numeric.

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// A single table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
}

impl Cell {
    /// Numeric view of the cell, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(v) => Some(*v as f64),
            Cell::Float(v) => Some(*v),
            Cell::Text(_) | Cell::Date(_) => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Int(v) => write!(f, "{}", v),
            Cell::Float(v) => write!(f, "{:.2}", v),
            Cell::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl From<NaiveDate> for Cell {
    fn from(d: NaiveDate) -> Self {
        Cell::Date(d)
    }
}

/// Column-named rows of cells
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Short rows are padded with empty text, long rows truncated.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.columns.len(), Cell::Text(String::new()));
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All cells of a column, top to bottom
    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }

    /// Numeric values of a column; `None` if missing or any cell is non-numeric
    pub fn numeric_column(&self, name: &str) -> Option<Vec<f64>> {
        self.column(name)?.into_iter().map(Cell::as_f64).collect()
    }

    /// Sum of a numeric column (0.0 for missing or non-numeric columns)
    pub fn sum(&self, name: &str) -> f64 {
        self.numeric_column(name)
            .map(|values| values.iter().sum())
            .unwrap_or(0.0)
    }

    /// Tab-separated rendering used for clipboard copy
    pub fn to_tsv(&self) -> String {
        let mut out = self.columns.join("\t");
        for row in &self.rows {
            out.push('\n');
            let line: Vec<String> = row.iter().map(ToString::to_string).collect();
            out.push_str(&line.join("\t"));
        }
        out
    }
}

/// Chart flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

/// Which columns feed which axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisMapping {
    pub x: String,
    pub y: Vec<String>,
}

impl AxisMapping {
    pub fn new(x: &str, y: &[&str]) -> Self {
        Self {
            x: x.to_string(),
            y: y.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("column '{0}' does not exist")]
    UnknownColumn(String),

    #[error("column '{0}' is not numeric")]
    NonNumeric(String),

    #[error("a chart needs at least one y column")]
    NoSeries,
}

/// One named y series, indexed by row position
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

/// A validated chart request
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub table: Table,
    pub axes: AxisMapping,
}

impl ChartSpec {
    /// One series per y column, x = row index
    pub fn series(&self) -> Vec<Series> {
        self.axes
            .y
            .iter()
            .map(|name| Series {
                name: name.clone(),
                points: self
                    .table
                    .numeric_column(name)
                    .unwrap_or_default()
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| (i as f64, v))
                    .collect(),
            })
            .collect()
    }

    /// Display labels for the x axis, one per row
    pub fn x_labels(&self) -> Vec<String> {
        self.table
            .column(&self.axes.x)
            .map(|cells| cells.into_iter().map(ToString::to_string).collect())
            .unwrap_or_default()
    }

    /// (min, max) over every y value; (0, 1) for an empty chart
    pub fn y_bounds(&self) -> (f64, f64) {
        let values: Vec<f64> = self
            .series()
            .into_iter()
            .flat_map(|s| s.points.into_iter().map(|(_, y)| y))
            .collect();
        if values.is_empty() {
            return (0.0, 1.0);
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }
}

/// Build a chart over `table`, checking the axis mapping against its columns
pub fn render_chart(
    table: Table,
    kind: ChartKind,
    axes: AxisMapping,
) -> Result<ChartSpec, ChartError> {
    if axes.y.is_empty() {
        return Err(ChartError::NoSeries);
    }
    if table.column_index(&axes.x).is_none() {
        return Err(ChartError::UnknownColumn(axes.x.clone()));
    }
    for y in &axes.y {
        if table.column_index(y).is_none() {
            return Err(ChartError::UnknownColumn(y.clone()));
        }
        if table.numeric_column(y).is_none() {
            return Err(ChartError::NonNumeric(y.clone()));
        }
    }
    Ok(ChartSpec { kind, table, axes })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(["Metric", "Count"]);
        table.push_row(vec!["Likes".into(), 5000.into()]);
        table.push_row(vec!["Saves".into(), 300.into()]);
        table
    }

    #[test]
    fn short_rows_are_padded() {
        let mut table = Table::new(["a", "b", "c"]);
        table.push_row(vec![1.into()]);
        assert_eq!(table.rows()[0].len(), 3);
    }

    #[test]
    fn numeric_column_rejects_text() {
        let table = sample();
        assert_eq!(table.numeric_column("Count"), Some(vec![5000.0, 300.0]));
        assert_eq!(table.numeric_column("Metric"), None);
        assert_eq!(table.sum("Count"), 5300.0);
    }

    #[test]
    fn chart_validates_mapping() {
        let err = render_chart(sample(), ChartKind::Bar, AxisMapping::new("Metric", &["Nope"]));
        assert_eq!(err, Err(ChartError::UnknownColumn("Nope".into())));

        let err = render_chart(sample(), ChartKind::Bar, AxisMapping::new("Count", &["Metric"]));
        assert_eq!(err, Err(ChartError::NonNumeric("Metric".into())));

        let err = render_chart(sample(), ChartKind::Line, AxisMapping::new("Metric", &[]));
        assert_eq!(err, Err(ChartError::NoSeries));
    }

    #[test]
    fn series_follow_row_order() {
        let chart =
            render_chart(sample(), ChartKind::Bar, AxisMapping::new("Metric", &["Count"])).unwrap();
        let series = chart.series();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].points, vec![(0.0, 5000.0), (1.0, 300.0)]);
        assert_eq!(chart.x_labels(), vec!["Likes", "Saves"]);
        assert_eq!(chart.y_bounds(), (300.0, 5000.0));
    }

    #[test]
    fn cells_display_like_a_spreadsheet() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(Cell::Date(date).to_string(), "2024-01-01");
        assert_eq!(Cell::Float(2.5).to_string(), "2.50");
        assert_eq!(sample().to_tsv(), "Metric\tCount\nLikes\t5000\nSaves\t300");
    }
}
