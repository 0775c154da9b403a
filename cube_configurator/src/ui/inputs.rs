//! Dimension inputs: clamping, readouts and reset.

use bevy::prelude::*;
use thiserror::Error;

use crate::config::ConfiguratorSettings;

/// Sent after any input change, reset, or at startup. Triggers reconciliation.
#[derive(Event, Clone, Copy, Debug, Default)]
pub struct DimensionsChanged;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Width,
    Height,
    Depth,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Width, Axis::Height, Axis::Depth];

    /// Control id; the readout id is `{id}-value`.
    pub fn id(self) -> &'static str {
        match self {
            Axis::Width => "width",
            Axis::Height => "height",
            Axis::Depth => "depth",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{0:?} is not a number")]
    NotNumeric(String),
}

/// Truncates toward zero and clamps into `floor..=ceiling`. Non-finite values
/// become `floor`. A ceiling below the floor is raised to the floor.
pub fn clamp_dimension(raw: f64, floor: u32, ceiling: u32) -> u32 {
    if !raw.is_finite() {
        return floor;
    }
    // `as` saturates: negatives land on 0, huge values on u32::MAX.
    (raw.trunc() as u32).clamp(floor, ceiling.max(floor))
}

pub fn parse_dimension(raw: &str, floor: u32, ceiling: u32) -> Result<u32, InputError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| InputError::NotNumeric(raw.to_string()))?;
    Ok(clamp_dimension(value, floor, ceiling))
}

#[derive(Clone, Debug)]
pub struct AxisInput {
    value: u32,
    readout: String,
}

impl AxisInput {
    fn new(value: u32) -> Self {
        Self {
            value,
            readout: value.to_string(),
        }
    }

    fn store(&mut self, value: u32) {
        self.value = value;
        self.readout = value.to_string();
    }
}

/// The three clamped inputs and their visible readouts.
#[derive(Resource, Clone, Debug)]
pub struct DimensionInputs {
    width: AxisInput,
    height: AxisInput,
    depth: AxisInput,
    floor: u32,
    ceiling: u32,
    default_value: u32,
}

impl FromWorld for DimensionInputs {
    fn from_world(world: &mut World) -> Self {
        let settings = world
            .get_resource::<ConfiguratorSettings>()
            .cloned()
            .unwrap_or_default();
        Self::new(
            settings.min_dimension,
            settings.slider_max,
            settings.default_dimension,
        )
    }
}

impl DimensionInputs {
    pub fn new(floor: u32, ceiling: u32, default_value: u32) -> Self {
        let ceiling = ceiling.max(floor);
        let start = default_value.clamp(floor, ceiling);
        Self {
            width: AxisInput::new(start),
            height: AxisInput::new(start),
            depth: AxisInput::new(start),
            floor,
            ceiling,
            default_value: start,
        }
    }

    fn axis(&self, axis: Axis) -> &AxisInput {
        match axis {
            Axis::Width => &self.width,
            Axis::Height => &self.height,
            Axis::Depth => &self.depth,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisInput {
        match axis {
            Axis::Width => &mut self.width,
            Axis::Height => &mut self.height,
            Axis::Depth => &mut self.depth,
        }
    }

    pub fn get(&self, axis: Axis) -> u32 {
        self.axis(axis).value
    }

    pub fn readout(&self, axis: Axis) -> &str {
        &self.axis(axis).readout
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    /// Clamps `raw`, stores it and refreshes the readout. Returns the stored value.
    pub fn set(&mut self, axis: Axis, raw: f64) -> u32 {
        let value = clamp_dimension(raw, self.floor, self.ceiling);
        self.axis_mut(axis).store(value);
        value
    }

    /// Like [`set`](Self::set), for typed text. Unparseable text stores the floor.
    pub fn set_text(&mut self, axis: Axis, raw: &str) -> u32 {
        let value = parse_dimension(raw, self.floor, self.ceiling).unwrap_or_else(|err| {
            debug!("{} input: {err}, using floor {}", axis.id(), self.floor);
            self.floor
        });
        self.axis_mut(axis).store(value);
        value
    }

    pub fn reset(&mut self) {
        let value = self.default_value;
        for axis in Axis::ALL {
            self.axis_mut(axis).store(value);
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width.value,
            height: self.height.value,
            depth: self.depth.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_floor() {
        assert_eq!(clamp_dimension(10.0, 30, 300), 30);
        assert_eq!(clamp_dimension(-5.0, 30, 300), 30);
        assert_eq!(clamp_dimension(30.0, 30, 300), 30);
        assert_eq!(clamp_dimension(150.9, 30, 300), 150);
    }

    #[test]
    fn clamps_to_ceiling() {
        assert_eq!(clamp_dimension(301.0, 30, 300), 300);
        assert_eq!(clamp_dimension(4.0e9, 30, 300), 300);
        assert_eq!(clamp_dimension(1.0e300, 30, 300), 300);
        assert_eq!(clamp_dimension(500.0, 30, 10), 30);
    }

    #[test]
    fn non_finite_falls_back_to_floor() {
        assert_eq!(clamp_dimension(f64::NAN, 30, 300), 30);
        assert_eq!(clamp_dimension(f64::INFINITY, 30, 300), 30);
        assert_eq!(clamp_dimension(f64::NEG_INFINITY, 30, 300), 30);
    }

    #[test]
    fn parses_text() {
        assert_eq!(parse_dimension(" 90 ", 30, 300), Ok(90));
        assert_eq!(parse_dimension("12", 30, 300), Ok(30));
        assert_eq!(parse_dimension("4e9", 30, 300), Ok(300));
        assert_eq!(
            parse_dimension("wide", 30, 300),
            Err(InputError::NotNumeric("wide".to_string()))
        );
    }

    #[test]
    fn set_updates_value_and_readout() {
        let mut inputs = DimensionInputs::new(30, 300, 60);

        assert_eq!(inputs.set(Axis::Width, 150.0), 150);
        assert_eq!(inputs.set(Axis::Height, 5.0), 30);

        assert_eq!(inputs.get(Axis::Width), 150);
        assert_eq!(inputs.readout(Axis::Width), "150");
        assert_eq!(inputs.readout(Axis::Height), "30");
        assert_eq!(inputs.readout(Axis::Depth), "60");
    }

    #[test]
    fn bad_text_stores_floor() {
        let mut inputs = DimensionInputs::new(30, 300, 60);

        assert_eq!(inputs.set_text(Axis::Depth, "abc"), 30);
        assert_eq!(inputs.readout(Axis::Depth), "30");
        assert_eq!(inputs.set_text(Axis::Depth, "75"), 75);
    }

    #[test]
    fn huge_values_store_ceiling() {
        let mut inputs = DimensionInputs::new(30, 300, 60);

        assert_eq!(inputs.set_text(Axis::Width, "4e9"), 300);
        assert_eq!(inputs.readout(Axis::Width), "300");
        assert_eq!(inputs.set(Axis::Height, 1.0e12), 300);
        assert_eq!(inputs.get(Axis::Height), 300);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut inputs = DimensionInputs::new(30, 300, 60);
        inputs.set(Axis::Width, 240.0);
        inputs.set(Axis::Height, 31.0);
        inputs.set_text(Axis::Depth, "nope");

        inputs.reset();

        assert_eq!(
            inputs.dimensions(),
            Dimensions {
                width: 60,
                height: 60,
                depth: 60
            }
        );
        for axis in Axis::ALL {
            assert_eq!(inputs.readout(axis), "60");
        }
    }

    #[test]
    fn from_world_uses_settings() {
        let mut world = World::new();
        world.insert_resource(ConfiguratorSettings {
            min_dimension: 40,
            default_dimension: 80,
            slider_max: 200,
            ..default()
        });

        let inputs = DimensionInputs::from_world(&mut world);

        assert_eq!(inputs.floor(), 40);
        assert_eq!(inputs.ceiling(), 200);
        assert_eq!(inputs.get(Axis::Width), 80);
    }
}
