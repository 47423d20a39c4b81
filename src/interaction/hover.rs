use ordered_float::OrderedFloat;

use crate::core::{AxisMapper, HoverMode, RangeKey, Series};

use super::{HoverPoint, HoverState};

/// Distances are compared at this resolution so float noise cannot break ties.
const TIE_RESOLUTION_PX: f64 = 1e-6;

/// Resolves the hover state for a pointer position over the active series.
///
/// The mapper must be built for `series.len()` points.
#[must_use]
pub fn resolve_hover(
    range: RangeKey,
    series: &Series,
    mapper: AxisMapper,
    pointer_x: f64,
    pointer_y: f64,
) -> HoverState {
    if !pointer_x.is_finite() || !pointer_y.is_finite() {
        return HoverState::NoHover;
    }
    if !mapper.plot().contains_x(pointer_x) {
        return HoverState::NoHover;
    }

    match range.hover_mode() {
        HoverMode::FreeHover => resolve_free_hover(series, mapper, pointer_x),
        HoverMode::NearestSnap => resolve_nearest_snap(series, mapper, pointer_x),
    }
}

/// Linear interpolation along the continuous hour axis.
///
/// `hf = fraction * (len - 1)`; the segment after the last sample repeats the
/// last value instead of extrapolating.
#[must_use]
pub fn resolve_free_hover(series: &Series, mapper: AxisMapper, pointer_x: f64) -> HoverState {
    let Some(last) = series.len().checked_sub(1) else {
        return HoverState::NoHover;
    };
    let values = series.values();

    let hour_float = mapper.pixel_x_to_segment_position(pointer_x);
    let hour = (hour_float.floor() as usize).min(last);
    let frac = (hour_float - hour as f64).clamp(0.0, 1.0);

    let v1 = values[hour];
    let v2 = values[(hour + 1).min(last)];
    let value = (v1 * (1.0 - frac) + v2 * frac).round();

    HoverState::Hover(HoverPoint {
        x: pointer_x,
        y: mapper.value_to_pixel_y(value),
        value,
        label: clock_label(hour, frac),
        index: hour,
    })
}

/// Snaps to the rendered sample nearest by x-distance.
///
/// Equidistant samples resolve to the lower index.
#[must_use]
pub fn resolve_nearest_snap(series: &Series, mapper: AxisMapper, pointer_x: f64) -> HoverState {
    let plot = mapper.plot();
    let nearest = (0..series.len())
        .filter_map(|index| {
            let x_px = mapper.index_to_pixel_x(index).ok()?;
            plot.contains_x(x_px).then_some((index, x_px))
        })
        .min_by_key(|&(index, x_px)| (distance_key(x_px - pointer_x), index));

    let Some((index, x)) = nearest else {
        return HoverState::NoHover;
    };
    let Some((label, value)) = series.get(index) else {
        return HoverState::NoHover;
    };
    HoverState::Hover(HoverPoint {
        x,
        y: mapper.value_to_pixel_y(value),
        value,
        label: label.to_owned(),
        index,
    })
}

fn distance_key(delta_px: f64) -> OrderedFloat<f64> {
    OrderedFloat((delta_px.abs() / TIE_RESOLUTION_PX).round())
}

/// Formats `hour + frac` as `h:mm`, carrying a rounded `:60` into the next hour.
#[must_use]
pub fn clock_label(hour: usize, frac: f64) -> String {
    let minutes = (frac.clamp(0.0, 1.0) * 60.0).round() as u32;
    if minutes >= 60 {
        format!("{}:00", hour + 1)
    } else {
        format!("{hour}:{minutes:02}")
    }
}
