mod cases;
mod region;
mod results;
mod scenario;

pub use cases::{CasesAverted, CasesDatum, POST_INTERVENTION_YEARS, PRE_INTERVENTION_YEAR};
pub use region::{
    FormValue, FormValues, POPULATION_KEY, Populations, Project, Region, map_regions_to_population,
};
pub use results::{Intervention, RegionInterventions, RegionSelection, StrategiseResult};
pub use scenario::{ItnType, Scenario};
