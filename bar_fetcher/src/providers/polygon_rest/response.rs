use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{models::bar::Bar, providers::polygon_rest::params::PAGE_LIMIT};

/// One element of the aggregates `results` array, fields kept raw until coercion.
#[derive(Deserialize, Debug, Default)]
pub struct PolygonBar {
    #[serde(rename = "t")]
    pub timestamp: Option<Value>,
    #[serde(rename = "o")]
    pub open: Option<Value>,
    #[serde(rename = "h")]
    pub high: Option<Value>,
    #[serde(rename = "l")]
    pub low: Option<Value>,
    #[serde(rename = "c")]
    pub close: Option<Value>,
    #[serde(rename = "v")]
    pub volume: Option<Value>,
}

/// JSON numbers and numeric strings; anything non-finite is rejected.
fn coerce_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// Millisecond timestamp to whole seconds, rounding toward negative infinity.
fn millis_to_seconds(value: &Value) -> Option<i64> {
    if let Some(millis) = value.as_i64() {
        return Some(millis.div_euclid(1000));
    }
    coerce_f64(value).map(|millis| (millis / 1000.0).floor() as i64)
}

impl PolygonBar {
    /// `None` when a required field is absent or not a finite number.
    pub fn into_bar(self) -> Option<Bar> {
        let volume = match &self.volume {
            None => 0.0,
            Some(v) => coerce_f64(v)?,
        };
        Some(Bar {
            time: millis_to_seconds(self.timestamp.as_ref()?)?,
            open: coerce_f64(self.open.as_ref()?)?,
            high: coerce_f64(self.high.as_ref()?)?,
            low: coerce_f64(self.low.as_ref()?)?,
            close: coerce_f64(self.close.as_ref()?)?,
            volume,
        })
    }
}

/// Extracts bars from a decoded aggregates payload.
///
/// Returns the bars plus the number of `results` entries that were dropped. A
/// payload without a `results` array yields no bars and no drops.
pub fn normalize_results(payload: &Value) -> (Vec<Bar>, usize) {
    let Some(results) = payload.get("results").and_then(Value::as_array) else {
        debug!("aggregates response has no results array");
        return (Vec::new(), 0);
    };

    let mut dropped = 0;
    let bars = results
        .iter()
        .take(PAGE_LIMIT as usize)
        .filter_map(|raw| {
            let bar = PolygonBar::deserialize(raw).ok().and_then(PolygonBar::into_bar);
            if bar.is_none() {
                dropped += 1;
            }
            bar
        })
        .collect();
    (bars, dropped)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn maps_fields_exactly() {
        let payload = json!({
            "results": [{"t": 1700000000000i64, "o": 1, "h": 2, "l": 0.5, "c": 1.5, "v": 100}]
        });
        let (bars, dropped) = normalize_results(&payload);
        assert_eq!(dropped, 0);
        assert_eq!(
            bars,
            vec![Bar {
                time: 1700000000,
                open: 1.0,
                high: 2.0,
                low: 0.5,
                close: 1.5,
                volume: 100.0,
            }]
        );
    }

    #[test]
    fn missing_or_null_volume_is_zero() {
        let payload = json!({
            "results": [
                {"t": 1700000060000i64, "o": 1, "h": 1, "l": 1, "c": 1},
                {"t": 1700000120000i64, "o": 1, "h": 1, "l": 1, "c": 1, "v": null}
            ]
        });
        let (bars, _) = normalize_results(&payload);
        assert_eq!(bars.len(), 2);
        assert!(bars.iter().all(|bar| bar.volume == 0.0));
    }

    #[test]
    fn timestamps_are_floored_to_seconds() {
        let payload = json!({
            "results": [
                {"t": 1700000000999i64, "o": 1, "h": 1, "l": 1, "c": 1},
                {"t": 1700000001500.7, "o": 1, "h": 1, "l": 1, "c": 1},
                {"t": -1500, "o": 1, "h": 1, "l": 1, "c": 1}
            ]
        });
        let (bars, _) = normalize_results(&payload);
        let times: Vec<i64> = bars.iter().map(|bar| bar.time).collect();
        assert_eq!(times, vec![1700000000, 1700000001, -2]);
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let payload = json!({
            "results": [{"t": "1700000000000", "o": "1.25", "h": " 2 ", "l": "1", "c": "1.5", "v": "42"}]
        });
        let (bars, dropped) = normalize_results(&payload);
        assert_eq!(dropped, 0);
        assert_eq!(bars[0].time, 1700000000);
        assert_eq!(bars[0].open, 1.25);
        assert_eq!(bars[0].high, 2.0);
        assert_eq!(bars[0].volume, 42.0);
    }

    #[test]
    fn unparseable_records_are_dropped_not_emitted_as_nan() {
        let payload = json!({
            "results": [
                {"t": 1700000000000i64, "o": 1, "h": 2, "l": 0.5, "c": 1.5},
                {"t": 1700000060000i64, "o": "n/a", "h": 2, "l": 0.5, "c": 1.5},
                {"t": 1700000120000i64, "o": 1, "h": 2, "l": 0.5},
                {"o": 1, "h": 2, "l": 0.5, "c": 1.5},
                {"t": 1700000180000i64, "o": 1, "h": 2, "l": 0.5, "c": "NaN"},
                {"t": 1700000240000i64, "o": 1, "h": 2, "l": 0.5, "c": 1.5, "v": true},
                "not an object",
                {"t": 1700000300000i64, "o": 3, "h": 4, "l": 2.5, "c": 3.5, "v": 7}
            ]
        });
        let (bars, dropped) = normalize_results(&payload);
        assert_eq!(dropped, 6);
        assert_eq!(
            bars.iter().map(|bar| bar.time).collect::<Vec<_>>(),
            vec![1700000000, 1700000300]
        );
        assert!(bars.iter().all(|bar| bar.close.is_finite()));
    }

    #[test]
    fn payloads_without_results_array_are_empty() {
        for payload in [
            json!({}),
            json!({"results": null}),
            json!({"results": {"t": 1}}),
            json!({"results": "nope"}),
            json!({"status": "OK", "resultsCount": 0}),
            json!(null),
            json!([]),
        ] {
            assert_eq!(normalize_results(&payload), (Vec::new(), 0), "{payload}");
        }
    }

    #[test]
    fn provider_order_is_kept() {
        let payload = json!({
            "results": [
                {"t": 3000, "o": 1, "h": 1, "l": 1, "c": 1},
                {"t": 1000, "o": 1, "h": 1, "l": 1, "c": 1},
                {"t": 2000, "o": 1, "h": 1, "l": 1, "c": 1}
            ]
        });
        let (bars, _) = normalize_results(&payload);
        assert_eq!(
            bars.iter().map(|bar| bar.time).collect::<Vec<_>>(),
            vec![3, 1, 2]
        );
    }

    #[test]
    fn output_is_capped_at_page_limit() {
        let results: Vec<Value> = (0..5003)
            .map(|i| json!({"t": i * 60_000, "o": 1, "h": 1, "l": 1, "c": 1}))
            .collect();
        let (bars, dropped) = normalize_results(&json!({ "results": results }));
        assert_eq!(bars.len(), 5000);
        assert_eq!(dropped, 0);
    }
}
