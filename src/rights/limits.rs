use crate::errors::RightsError;
use crate::rights::types::{
    BakingRightsArgs, BakingRightsParams, EndorsingRightsArgs, EndorsingRightsParams,
};

pub const MAX_PRIORITY_ENV: &str = "TEZOS_BAKING_RIGHTS_MAX_PRIORITY";
pub const MAX_CYCLES_ENV: &str = "TEZOS_RIGHTS_MAX_CYCLES";
pub const MAX_LEVELS_ENV: &str = "TEZOS_RIGHTS_MAX_LEVELS";

pub const DEFAULT_MAX_PRIORITY: u32 = 5;
pub const DEFAULT_MAX_CYCLES: usize = 5;
pub const DEFAULT_MAX_LEVELS: usize = 20480;

/// Ceilings applied to rights arguments before anything is sent upstream.
///
/// - `max_priority`: upper bound of `maxPriority`, and its value when omitted
/// - `max_cycles`: maximum number of entries in `cycle`
/// - `max_levels`: maximum number of entries in `level`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RightsLimits {
    pub max_priority: u32,
    pub max_cycles: usize,
    pub max_levels: usize,
}

impl Default for RightsLimits {
    fn default() -> Self {
        Self {
            max_priority: DEFAULT_MAX_PRIORITY,
            max_cycles: DEFAULT_MAX_CYCLES,
            max_levels: DEFAULT_MAX_LEVELS,
        }
    }
}

impl RightsLimits {
    /// Checks `maxPriority`, then cycles, then levels. The first violation wins.
    pub fn validate_baking(
        &self,
        delegate: &str,
        args: BakingRightsArgs,
    ) -> Result<BakingRightsParams, RightsError> {
        let max_priority = self.check_max_priority(args.max_priority)?;
        self.check_cycles(args.cycle.as_deref())?;
        self.check_levels(args.level.as_deref())?;

        Ok(BakingRightsParams {
            delegate: delegate.to_string(),
            level: args.level,
            cycle: args.cycle,
            max_priority,
        })
    }

    /// Checks cycles, then levels.
    pub fn validate_endorsing(
        &self,
        delegate: &str,
        args: EndorsingRightsArgs,
    ) -> Result<EndorsingRightsParams, RightsError> {
        self.check_cycles(args.cycle.as_deref())?;
        self.check_levels(args.level.as_deref())?;

        Ok(EndorsingRightsParams {
            delegate: delegate.to_string(),
            level: args.level,
            cycle: args.cycle,
        })
    }

    fn check_max_priority(&self, requested: Option<u32>) -> Result<u32, RightsError> {
        match requested {
            None => Ok(self.max_priority),
            Some(requested) if requested > self.max_priority => {
                Err(RightsError::MaxPriorityExceeded {
                    requested,
                    limit: self.max_priority,
                })
            },
            Some(requested) => Ok(requested),
        }
    }

    fn check_cycles(&self, cycle: Option<&[u32]>) -> Result<(), RightsError> {
        match cycle {
            Some(cycle) if cycle.len() > self.max_cycles => Err(RightsError::TooManyCycles {
                requested: cycle.len(),
                limit: self.max_cycles,
            }),
            _ => Ok(()),
        }
    }

    fn check_levels(&self, level: Option<&[u32]>) -> Result<(), RightsError> {
        match level {
            Some(level) if level.len() > self.max_levels => Err(RightsError::TooManyLevels {
                requested: level.len(),
                limit: self.max_levels,
            }),
            _ => Ok(()),
        }
    }
}
