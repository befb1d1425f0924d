//! Dashboard chart catalog.
//!
//! Every chart that carries an insights button is described by a [`ChartSpec`]
//! backed by the dashboard's in-memory mock datasets. Charts whose rows are
//! generated randomly on each page load (cost breakdown, port unit values,
//! price volatility) have no stable data and are not listed.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::enums::ChartKind;
use crate::errors::CoreError;
use crate::insight::InsightRequest;

/// A chart shown on the dashboard together with the rows it plots.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ChartSpec {
    /// Stable identifier used on the command line (e.g. `trade-value`).
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub context_description: String,
    pub data: Vec<Value>,
}

impl ChartSpec {
    /// Build a fresh insight request for this chart.
    #[must_use]
    pub fn to_request(&self) -> InsightRequest {
        InsightRequest::new(self.title.clone(), self.kind, self.data.clone())
            .with_context(self.context_description.clone())
    }
}

/// Monthly import/export trade values for 2025.
#[must_use]
pub fn trade_value_data() -> Vec<Value> {
    const ROWS: [(&str, u32, u32); 12] = [
        ("Jan", 4200, 2400),
        ("Feb", 3800, 2210),
        ("Mar", 5100, 2900),
        ("Apr", 4700, 2780),
        ("May", 5300, 3100),
        ("Jun", 4900, 2890),
        ("Jul", 5600, 3200),
        ("Aug", 5200, 3050),
        ("Sep", 4800, 2920),
        ("Oct", 5400, 3300),
        ("Nov", 5800, 3450),
        ("Dec", 6100, 3600),
    ];

    ROWS.iter()
        .map(|(month, imports, exports)| {
            json!({
                "month": month,
                "imports": imports,
                "exports": exports,
                "year": "2025",
            })
        })
        .collect()
}

/// Ports ranked by trade volume, highest first.
#[must_use]
pub fn top_ports_data() -> Vec<Value> {
    const ROWS: [(&str, u32, i32, u32, &str); 8] = [
        ("JNPT", 8500, 12, 88, "Low"),
        ("Mundra", 7200, 18, 75, "Low"),
        ("Kandla", 5800, -3, 92, "High"),
        ("Chennai", 4200, 8, 85, "Medium"),
        ("Visakhapatnam", 3900, 5, 68, "Low"),
        ("Paradip", 3500, 11, 62, "Low"),
        ("Mangalore", 2800, -2, 71, "Medium"),
        ("Kochi", 2100, 6, 58, "Low"),
    ];

    ROWS.iter()
        .map(|(name, value, growth, capacity, congestion)| {
            json!({
                "name": name,
                "value": value,
                "growth": growth,
                "capacity": capacity,
                "congestion": congestion,
            })
        })
        .collect()
}

/// Product-port pairs scored by volume growth and price stability.
#[must_use]
pub fn opportunity_matrix_data() -> Vec<Value> {
    const ROWS: [(&str, u32, u32, u32, &str, u32); 7] = [
        ("LNG via Mundra", 24, 85, 180, "High Potential", 92),
        ("Crude via JNPT", 8, 90, 320, "Stable Core", 85),
        ("Naphtha via Kandla", 15, 60, 120, "Monitor", 68),
        ("Diesel via Chennai", 6, 75, 150, "Stable", 72),
        ("Motor Spirit via Paradip", 18, 70, 95, "Emerging", 78),
        ("LNG via Visakhapatnam", 20, 82, 110, "High Potential", 88),
        ("Crude via Mundra", 12, 88, 280, "Stable", 83),
    ];

    ROWS.iter()
        .map(|(name, growth, stability, size, category, score)| {
            json!({
                "name": name,
                "growth": growth,
                "stability": stability,
                "size": size,
                "category": category,
                "score": score,
            })
        })
        .collect()
}

/// Products with a monthly unit value series, as `(id, display name)`, in
/// the column order of the cost trend table.
pub const UNIT_VALUE_PRODUCTS: [(&str, &str); 4] = [
    ("crude", "Crude Oil"),
    ("lng", "LNG"),
    ("motor", "Motor Spirit"),
    ("diesel", "High Speed Diesel"),
];

/// Monthly unit values per product: crude, LNG, motor spirit, diesel.
const COST_TREND: [(&str, [f64; 4]); 12] = [
    ("Jan", [78.5, 11.2, 92.1, 85.3]),
    ("Feb", [82.1, 12.8, 95.4, 88.7]),
    ("Mar", [79.8, 11.9, 93.2, 86.9]),
    ("Apr", [83.4, 13.2, 96.8, 89.4]),
    ("May", [81.2, 12.4, 94.1, 87.8]),
    ("Jun", [84.7, 13.8, 98.2, 91.2]),
    ("Jul", [82.9, 12.9, 95.6, 88.9]),
    ("Aug", [80.5, 11.8, 92.8, 86.2]),
    ("Sep", [85.3, 14.1, 99.5, 92.4]),
    ("Oct", [83.7, 13.4, 97.1, 90.1]),
    ("Nov", [81.8, 12.6, 94.8, 88.3]),
    ("Dec", [82.5, 12.8, 95.2, 88.7]),
];

/// Monthly unit value of one product. Unknown products use the crude series.
#[must_use]
pub fn unit_value_trend(product: &str) -> Vec<Value> {
    let column = UNIT_VALUE_PRODUCTS
        .iter()
        .position(|(id, _)| *id == product)
        .unwrap_or(0);

    COST_TREND
        .iter()
        .map(|(month, values)| json!({ "month": month, "value": values[column] }))
        .collect()
}

/// Trade scale of each port relative to the national series.
const PORT_MULTIPLIERS: [(&str, f64); 8] = [
    ("JNPT", 1.2),
    ("Mundra", 1.0),
    ("Kandla", 0.8),
    ("Chennai", 0.7),
    ("Visakhapatnam", 0.9),
    ("Paradip", 0.6),
    ("Mangalore", 0.5),
    ("Kochi", 0.4),
];

fn port_multiplier(port: Option<&str>) -> f64 {
    port.and_then(|port| PORT_MULTIPLIERS.iter().find(|(name, _)| *name == port))
        .map_or(1.0, |(_, multiplier)| *multiplier)
}

/// Last `months` of `trade_value_data`, as `(month, imports, exports)`.
fn recent_trade(months: usize) -> Vec<(String, f64, f64)> {
    let rows = trade_value_data();
    let skip = rows.len().saturating_sub(months);
    rows.iter()
        .skip(skip)
        .map(|row| {
            (
                row["month"].as_str().unwrap_or_default().to_string(),
                row["imports"].as_f64().unwrap_or_default(),
                row["exports"].as_f64().unwrap_or_default(),
            )
        })
        .collect()
}

/// Monthly imports and exports of one port (or all ports), in tens.
#[must_use]
pub fn port_trend_data(port: Option<&str>, months: usize) -> Vec<Value> {
    let multiplier = port_multiplier(port);
    recent_trade(months)
        .into_iter()
        .map(|(month, imports, exports)| {
            json!({
                "month": month,
                "imports": round_half_up(imports / 10.0 * multiplier),
                "exports": round_half_up(exports / 10.0 * multiplier),
            })
        })
        .collect()
}

/// Monthly combined trade volume of one port (or all ports).
#[must_use]
pub fn seasonal_data(port: Option<&str>, months: usize) -> Vec<Value> {
    let multiplier = port_multiplier(port);
    recent_trade(months)
        .into_iter()
        .map(|(month, imports, exports)| {
            json!({
                "month": month,
                "volume": round_half_up((imports + exports) / 80.0 * multiplier),
            })
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// All charts that expose insights, grouped by dashboard page.
///
/// Selectable views use the dashboard defaults: no port filter and a
/// 12-month period. The unit value chart is listed once per product.
#[must_use]
pub fn catalog() -> Vec<ChartSpec> {
    let mut charts = vec![
        ChartSpec {
            id: "trade-value".into(),
            title: "Import vs Export Trend".into(),
            kind: ChartKind::Line,
            context_description:
                "12-month rolling trade values showing import and export trends".into(),
            data: trade_value_data(),
        },
        ChartSpec {
            id: "top-ports".into(),
            title: "Top 5 Ports by Trade Value".into(),
            kind: ChartKind::Bar,
            context_description:
                "Top performing ports ranked by trade value with year-over-year growth rates"
                    .into(),
            data: top_ports_data().into_iter().take(5).collect(),
        },
        ChartSpec {
            id: "port-trend".into(),
            title: "Port Trade Trend".into(),
            kind: ChartKind::Line,
            context_description: "Import and export trade values over time".into(),
            data: port_trend_data(None, 12),
        },
        ChartSpec {
            id: "seasonal-pattern".into(),
            title: "Seasonal Pattern".into(),
            kind: ChartKind::Bar,
            context_description: "Monthly trade volume patterns showing seasonal variations"
                .into(),
            data: seasonal_data(None, 12),
        },
    ];

    charts.extend(UNIT_VALUE_PRODUCTS.iter().map(|(product, _)| ChartSpec {
        id: format!("unit-value-{product}"),
        title: "Unit Value Trend".into(),
        kind: ChartKind::Line,
        context_description:
            "Monthly unit value trends showing price fluctuations over the past year".into(),
        data: unit_value_trend(product),
    }));

    charts.push(ChartSpec {
        id: "opportunity-matrix".into(),
        title: "Opportunity Matrix".into(),
        kind: ChartKind::Mixed,
        context_description: "Scatter plot showing product-port opportunities based on volume \
            growth and price stability, with bubble size representing trade volume"
            .into(),
        data: opportunity_matrix_data(),
    });

    charts
}

/// Look up a chart by id.
///
/// # Errors
///
/// Returns [`CoreError::ChartNotFound`] if no chart has that id.
pub fn find_chart(id: &str) -> Result<ChartSpec, CoreError> {
    catalog()
        .into_iter()
        .find(|chart| chart.id == id)
        .ok_or_else(|| CoreError::ChartNotFound(id.to_string()))
}
