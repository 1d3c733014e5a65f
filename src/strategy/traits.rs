// src/strategy/traits.rs

use crate::error::SimulationError;
use crate::model::sequence::SequenceSource;
use crate::simulation::config::SimulationParameters;
use std::fmt::Debug;

/// Decides how many units customers take on a single day.
///
/// Implementations keep no memory of earlier days. Everything they need comes
/// from the run parameters and the draws they pull from `sequence`, which they
/// may advance one or more times per call.
///
/// `Send` + `Sync` lets independent runs live on separate threads.
pub trait DemandPolicy: Debug + Send + Sync {
    /// Returns the demand for the current day.
    ///
    /// # Arguments
    /// * `params` - The run's immutable product parameters.
    /// * `sequence` - The run's private number source.
    fn next_demand(
        &self,
        params: &SimulationParameters,
        sequence: &mut SequenceSource,
    ) -> Result<u32, SimulationError>;
}
