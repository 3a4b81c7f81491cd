/// Minimum pixel gap kept between neighbouring tick labels.
pub const AXIS_LABEL_MIN_GAP_PX: f64 = 4.0;

/// Evenly spaced tick values from `min` to `max` inclusive.
///
/// Returns `[min, max]` when `count < 2` or the range is degenerate.
#[must_use]
pub fn compute_axis_values(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count < 2 || min.is_nan() || max.is_nan() || min >= max {
        return vec![min, max];
    }
    let step = (max - min) / (count - 1) as f64;
    (0..count)
        .map(|index| {
            if index == count - 1 {
                max
            } else {
                min + step * index as f64
            }
        })
        .collect()
}

/// One tick label projected onto its axis: `start..end` is the pixel extent
/// of the label box along the axis direction.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabelSlot {
    pub value: f64,
    pub text: String,
    pub start: f64,
    pub end: f64,
}

impl AxisLabelSlot {
    #[must_use]
    pub fn new(value: f64, text: String, center: f64, extent: f64) -> Self {
        Self {
            value,
            text,
            start: center - extent / 2.0,
            end: center + extent / 2.0,
        }
    }
}

/// Drops labels whose box would overlap the previously kept one.
///
/// The final label is preferred over its predecessor when both cannot fit,
/// so the axis maximum stays readable.
#[must_use]
pub fn select_non_overlapping(mut slots: Vec<AxisLabelSlot>, min_gap_px: f64) -> Vec<AxisLabelSlot> {
    slots.sort_by(|left, right| left.start.total_cmp(&right.start));
    let Some(last) = slots.last().cloned() else {
        return slots;
    };
    if slots.len() == 1 {
        return slots;
    }
    let gap = if min_gap_px.is_finite() { min_gap_px.max(0.0) } else { 0.0 };

    let mut selected: Vec<AxisLabelSlot> = Vec::with_capacity(slots.len());
    for slot in slots {
        let fits = selected
            .last()
            .is_none_or(|previous| slot.start >= previous.end + gap);
        if fits {
            selected.push(slot);
        }
    }

    let kept_last = selected.last().is_some_and(|slot| *slot == last);
    if !kept_last {
        match selected.len() {
            0 => selected.push(last),
            1 => selected[0] = last,
            len => {
                if last.start >= selected[len - 2].end + gap {
                    selected[len - 1] = last;
                }
            }
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(center: f64, extent: f64) -> AxisLabelSlot {
        AxisLabelSlot::new(center, center.to_string(), center, extent)
    }

    #[test]
    fn degenerate_range_yields_endpoints() {
        assert_eq!(compute_axis_values(5.0, 5.0, 6), vec![5.0, 5.0]);
        assert_eq!(compute_axis_values(3.0, 1.0, 4), vec![3.0, 1.0]);
    }

    #[test]
    fn crowded_labels_keep_first_and_last() {
        let slots = (0..10).map(|index| slot(index as f64 * 10.0, 18.0)).collect();
        let kept = select_non_overlapping(slots, 4.0);
        assert_eq!(kept.first().map(|slot| slot.value), Some(0.0));
        assert_eq!(kept.last().map(|slot| slot.value), Some(90.0));
        for pair in kept.windows(2) {
            assert!(pair[1].start >= pair[0].end + 4.0);
        }
    }
}
